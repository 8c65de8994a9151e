//! Manifest synthesis for kgen.
//!
//! A validated [`kgen_meta::Configuration`] is expanded into one
//! [`EnvironmentContext`] per target environment. For each context the
//! assembler runs the resource builders in a fixed order and collects the
//! resulting [`Document`]s into a [`ManifestSet`]. Everything here is pure:
//! writing to disk is the caller's business.

pub mod assembler;
pub mod builders;
pub mod document;
pub mod environment;
pub mod error;
pub mod naming;
pub mod render;
pub mod workload;

pub use assembler::{ManifestSet, assemble, plan};
pub use document::{Document, ResourceKind};
pub use environment::{EnvironmentContext, expand};
pub use error::{Error, Result};
pub use naming::file_name;
pub use render::{to_yaml, to_yaml_stream};
pub use workload::Workload;
