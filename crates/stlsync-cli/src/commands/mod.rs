pub mod copy_models;
pub mod update_map;

pub use copy_models::CopyModels;
pub use update_map::UpdateMap;
