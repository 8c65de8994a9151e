//! Configuration model for kgen.
//!
//! Input sources (config file, flags, prompts) each produce a
//! [`PartialConfig`]; partials are merged and validated exactly once into an
//! immutable [`Configuration`] that the manifest builders consume.

pub mod config;
pub mod error;
pub mod loader;
pub mod validation;

pub use config::{
    Configuration, Environment, EnvironmentSelection, ImageTags, IngressSettings, IngressTarget,
    PartialConfig, PartialIngress, PartialResources, ResourceSettings,
};
pub use error::{Error, Result};
pub use validation::{parse_positive, validate_dns_label, validate_service_name};
