//! Configuration types for kgen
//!
//! [`PartialConfig`] is what a single input source knows; [`Configuration`] is
//! the validated result. Only [`PartialConfig::validate`] can construct a
//! `Configuration`, so every builder can rely on its invariants.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::Error;

/// Container port used when none is configured.
pub const DEFAULT_CONTAINER_PORT: u16 = 3000;

/// Replica count used when none is configured.
pub const DEFAULT_REPLICAS: u32 = 1;

/// A recognized deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Environment {
    Staging,
    Production,
}

impl Environment {
    /// Both environments in their fixed generation order.
    pub const ALL: [Environment; 2] = [Environment::Staging, Environment::Production];

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which environments manifests are generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentSelection {
    /// A single, unnamed environment.
    #[default]
    None,
    #[serde(alias = "stage")]
    Staging,
    #[serde(alias = "prod")]
    Production,
    /// Staging and production side by side.
    #[serde(alias = "all")]
    Both,
}

impl EnvironmentSelection {
    /// Environments covered by this selection, in generation order.
    pub fn environments(&self) -> Vec<Environment> {
        match self {
            EnvironmentSelection::None => Vec::new(),
            EnvironmentSelection::Staging => vec![Environment::Staging],
            EnvironmentSelection::Production => vec![Environment::Production],
            EnvironmentSelection::Both => Environment::ALL.to_vec(),
        }
    }

    /// True when manifests for more than one environment are produced.
    pub fn is_dual(&self) -> bool {
        matches!(self, EnvironmentSelection::Both)
    }
}

impl FromStr for EnvironmentSelection {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "none" => Ok(EnvironmentSelection::None),
            "staging" | "stage" => Ok(EnvironmentSelection::Staging),
            "production" | "prod" => Ok(EnvironmentSelection::Production),
            "both" | "all" => Ok(EnvironmentSelection::Both),
            _ => Err(Error::InvalidEnvironment(s.to_string())),
        }
    }
}

impl fmt::Display for EnvironmentSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvironmentSelection::None => write!(f, "none"),
            EnvironmentSelection::Staging => write!(f, "staging"),
            EnvironmentSelection::Production => write!(f, "production"),
            EnvironmentSelection::Both => write!(f, "both"),
        }
    }
}

/// Ingress fields as supplied by one input source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialIngress {
    pub enabled: Option<bool>,
    pub host: Option<String>,
    pub class: Option<String>,
    pub tls_secret: Option<String>,
    pub staging_host: Option<String>,
    pub staging_tls_secret: Option<String>,
    pub production_host: Option<String>,
    pub production_tls_secret: Option<String>,
}

/// Container resource fields as supplied by one input source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialResources {
    pub requests_cpu: Option<String>,
    pub requests_memory: Option<String>,
    pub limits_cpu: Option<String>,
    pub limits_memory: Option<String>,
}

/// Un-validated configuration from a single source (file, flags, prompts).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialConfig {
    pub app_name: Option<String>,
    pub image_repository: Option<String>,
    pub image_tag: Option<String>,
    pub image_tag_staging: Option<String>,
    pub image_tag_production: Option<String>,
    pub container_port: Option<u16>,
    pub replicas: Option<u32>,
    pub namespace: Option<String>,
    pub environment: Option<EnvironmentSelection>,
    pub ingress: PartialIngress,
    pub image_pull_secrets: Vec<String>,
    pub service_account_name: Option<String>,
    pub create_service_account: Option<bool>,
    pub resource_quota: Option<bool>,
    pub vertical_autoscaler: Option<bool>,
    pub resources: PartialResources,
}

impl PartialConfig {
    /// Layer `over` on top of `self`; every field set in `over` wins.
    ///
    /// Image pull secrets are replaced as a whole list, never concatenated.
    pub fn merge(self, over: PartialConfig) -> PartialConfig {
        PartialConfig {
            app_name: over.app_name.or(self.app_name),
            image_repository: over.image_repository.or(self.image_repository),
            image_tag: over.image_tag.or(self.image_tag),
            image_tag_staging: over.image_tag_staging.or(self.image_tag_staging),
            image_tag_production: over.image_tag_production.or(self.image_tag_production),
            container_port: over.container_port.or(self.container_port),
            replicas: over.replicas.or(self.replicas),
            namespace: over.namespace.or(self.namespace),
            environment: over.environment.or(self.environment),
            ingress: PartialIngress {
                enabled: over.ingress.enabled.or(self.ingress.enabled),
                host: over.ingress.host.or(self.ingress.host),
                class: over.ingress.class.or(self.ingress.class),
                tls_secret: over.ingress.tls_secret.or(self.ingress.tls_secret),
                staging_host: over.ingress.staging_host.or(self.ingress.staging_host),
                staging_tls_secret: over
                    .ingress
                    .staging_tls_secret
                    .or(self.ingress.staging_tls_secret),
                production_host: over.ingress.production_host.or(self.ingress.production_host),
                production_tls_secret: over
                    .ingress
                    .production_tls_secret
                    .or(self.ingress.production_tls_secret),
            },
            image_pull_secrets: if over.image_pull_secrets.is_empty() {
                self.image_pull_secrets
            } else {
                over.image_pull_secrets
            },
            service_account_name: over.service_account_name.or(self.service_account_name),
            create_service_account: over.create_service_account.or(self.create_service_account),
            resource_quota: over.resource_quota.or(self.resource_quota),
            vertical_autoscaler: over.vertical_autoscaler.or(self.vertical_autoscaler),
            resources: PartialResources {
                requests_cpu: over.resources.requests_cpu.or(self.resources.requests_cpu),
                requests_memory: over
                    .resources
                    .requests_memory
                    .or(self.resources.requests_memory),
                limits_cpu: over.resources.limits_cpu.or(self.resources.limits_cpu),
                limits_memory: over.resources.limits_memory.or(self.resources.limits_memory),
            },
        }
    }

    /// Environment selection with the default applied.
    pub fn environment_or_default(&self) -> EnvironmentSelection {
        self.environment.unwrap_or_default()
    }
}

/// Image tags resolved for the selected environment mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageTags {
    /// One tag for the single generated environment.
    Single(String),
    /// Separate tags for staging and production.
    PerEnvironment { staging: String, production: String },
}

impl ImageTags {
    /// Tag to deploy for the given environment.
    pub fn for_environment(&self, environment: Option<Environment>) -> &str {
        match (self, environment) {
            (ImageTags::Single(tag), _) => tag,
            (ImageTags::PerEnvironment { staging, .. }, Some(Environment::Staging)) => staging,
            (ImageTags::PerEnvironment { production, .. }, _) => production,
        }
    }
}

/// Host and TLS secret for one ingress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngressTarget {
    pub host: Option<String>,
    pub tls_secret: Option<String>,
}

/// Validated ingress settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngressSettings {
    pub enabled: bool,
    pub class: Option<String>,
    pub shared: IngressTarget,
    pub staging: IngressTarget,
    pub production: IngressTarget,
}

impl IngressSettings {
    /// Host and TLS secret for an environment.
    ///
    /// Environment-specific values win; the shared host and secret fill the
    /// gaps.
    pub fn target_for(&self, environment: Option<Environment>) -> IngressTarget {
        let specific = match environment {
            Some(Environment::Staging) => &self.staging,
            Some(Environment::Production) => &self.production,
            None => &self.shared,
        };
        IngressTarget {
            host: specific.host.clone().or_else(|| self.shared.host.clone()),
            tls_secret: specific
                .tls_secret
                .clone()
                .or_else(|| self.shared.tls_secret.clone()),
        }
    }
}

/// Validated container resource requests and limits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceSettings {
    pub requests_cpu: Option<String>,
    pub requests_memory: Option<String>,
    pub limits_cpu: Option<String>,
    pub limits_memory: Option<String>,
}

impl ResourceSettings {
    pub fn is_empty(&self) -> bool {
        self.requests_cpu.is_none()
            && self.requests_memory.is_none()
            && self.limits_cpu.is_none()
            && self.limits_memory.is_none()
    }
}

/// Validated, immutable deployment configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub(crate) app_name: String,
    pub(crate) image_repository: String,
    pub(crate) image_tags: ImageTags,
    pub(crate) container_port: u16,
    pub(crate) replicas: u32,
    pub(crate) namespace: Option<String>,
    pub(crate) environment: EnvironmentSelection,
    pub(crate) ingress: IngressSettings,
    pub(crate) image_pull_secrets: Vec<String>,
    pub(crate) service_account_name: Option<String>,
    pub(crate) create_service_account: bool,
    pub(crate) resource_quota: bool,
    pub(crate) vertical_autoscaler: bool,
    pub(crate) resources: ResourceSettings,
}

impl Configuration {
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn image_repository(&self) -> &str {
        &self.image_repository
    }

    pub fn image_tags(&self) -> &ImageTags {
        &self.image_tags
    }

    pub fn container_port(&self) -> u16 {
        self.container_port
    }

    pub fn replicas(&self) -> u32 {
        self.replicas
    }

    /// Explicit namespace override, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn environment(&self) -> EnvironmentSelection {
        self.environment
    }

    pub fn ingress(&self) -> &IngressSettings {
        &self.ingress
    }

    /// Pull secret names in the order given, duplicates included.
    pub fn image_pull_secrets(&self) -> &[String] {
        &self.image_pull_secrets
    }

    /// Explicitly configured service account name, if any.
    pub fn service_account_override(&self) -> Option<&str> {
        self.service_account_name.as_deref()
    }

    /// Service account name: the override, or the app name.
    pub fn service_account_name(&self) -> &str {
        self.service_account_name.as_deref().unwrap_or(&self.app_name)
    }

    pub fn create_service_account(&self) -> bool {
        self.create_service_account
    }

    pub fn resource_quota(&self) -> bool {
        self.resource_quota
    }

    pub fn vertical_autoscaler(&self) -> bool {
        self.vertical_autoscaler
    }

    pub fn resources(&self) -> &ResourceSettings {
        &self.resources
    }
}
