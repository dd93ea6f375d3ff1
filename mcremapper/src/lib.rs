//! mcremapper - fetch, remap and decompile Minecraft release jars
//!
//! This library fetches the version catalog, keeps a sha1-sidecar cache of
//! downloaded jars and mapping files, and drives the staged pipeline that
//! unpacks, remaps and decompiles one version.
//!
//! # Modules
//!
//! - [`catalog`]: version manifest model, fetching and selection
//! - [`config`]: runtime configuration and the optional INI file
//! - [`download`]: download-or-reuse cache for artifacts
//! - [`http`]: HTTP fetch capability
//! - [`pipeline`]: the staged per-version processor
//! - [`tools`]: external remapper and decompiler capabilities

pub mod catalog;
pub mod config;
pub mod download;
pub mod http;
pub mod pipeline;
pub mod tools;
