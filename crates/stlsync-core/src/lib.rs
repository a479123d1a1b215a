//! # stlsync
//!
//! Core library for keeping an STL model "standard library" up to date.
//!
//! This library provides the two passes the `stlsync` binary runs:
//! copying new or changed models from a source tree into the library,
//! and rebuilding the JSON component map that indexes every model name
//! found in the library tree.

#![warn(missing_docs)]

/// Error types and the crate-wide result alias
pub mod error;

/// Model file discovery
pub mod scanner;

/// Content comparison between source and destination files
pub mod comparison;

/// Model copier: mirrors source models into the destination tree
pub mod sync;

/// Component map loading, updating, and persistence
pub mod map;

/// Configuration file discovery, merging, and validation
pub mod config;

/// Path arithmetic shared by the copier and the map updater
pub mod paths;
