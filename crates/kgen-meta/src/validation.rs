//! Validation of merged input into a [`Configuration`]

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{
    Configuration, DEFAULT_CONTAINER_PORT, DEFAULT_REPLICAS, EnvironmentSelection, ImageTags,
    IngressSettings, IngressTarget, PartialConfig, ResourceSettings,
};
use crate::error::{Error, Result};

/// RFC 1123 label: what Kubernetes accepts for namespaces and most names.
static DNS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]([-a-z0-9]*[a-z0-9])?$").expect("DNS label pattern is valid")
});

/// RFC 1035 label: Service names must also start with a letter.
static RFC1035_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]([-a-z0-9]*[a-z0-9])?$").expect("RFC 1035 label pattern is valid")
});

const DNS_LABEL_MAX_LEN: usize = 63;

/// Replica counts land in a signed 32-bit field.
const MAX_REPLICAS: u32 = i32::MAX as u32;

/// Check that `value` is a valid RFC 1123 label.
pub fn validate_dns_label(field: &str, value: &str) -> Result<()> {
    if value.len() > DNS_LABEL_MAX_LEN || !DNS_LABEL.is_match(value) {
        return Err(Error::InvalidName {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Check that `value` is a valid RFC 1035 label.
pub fn validate_service_name(field: &str, value: &str) -> Result<()> {
    if value.len() > DNS_LABEL_MAX_LEN || !RFC1035_LABEL.is_match(value) {
        return Err(Error::InvalidName {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Parse a strictly positive integer from user input.
///
/// Shared by flag parsing and interactive prompts so both report the same
/// `InvalidNumericValue` error.
pub fn parse_positive<T>(field: &str, raw: &str) -> Result<T>
where
    T: FromStr + Default + PartialEq,
{
    let invalid = || Error::InvalidNumericValue {
        field: field.to_string(),
        value: raw.to_string(),
    };
    let value: T = raw.trim().parse().map_err(|_| invalid())?;
    if value == T::default() {
        return Err(invalid());
    }
    Ok(value)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn missing(field: &str) -> Error {
    Error::MissingRequiredField(field.to_string())
}

fn required(field: &str, value: Option<String>) -> Result<String> {
    non_empty(value).ok_or_else(|| missing(field))
}

fn positive<T>(field: &str, value: T) -> Result<T>
where
    T: Default + PartialEq + ToString,
{
    if value == T::default() {
        return Err(Error::InvalidNumericValue {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn resolve_image_tags(
    environment: EnvironmentSelection,
    shared: Option<String>,
    staging: Option<String>,
    production: Option<String>,
) -> Result<ImageTags> {
    let tags = match environment {
        EnvironmentSelection::None => ImageTags::Single(shared.ok_or_else(|| missing("image_tag"))?),
        EnvironmentSelection::Staging => {
            ImageTags::Single(shared.or(staging).ok_or_else(|| missing("image_tag"))?)
        }
        EnvironmentSelection::Production => {
            ImageTags::Single(shared.or(production).ok_or_else(|| missing("image_tag"))?)
        }
        EnvironmentSelection::Both => ImageTags::PerEnvironment {
            staging: staging
                .or_else(|| shared.clone())
                .ok_or_else(|| missing("image_tag_staging"))?,
            production: production
                .or(shared)
                .ok_or_else(|| missing("image_tag_production"))?,
        },
    };
    Ok(tags)
}

impl PartialConfig {
    /// Validate merged input into an immutable [`Configuration`].
    ///
    /// Blank strings count as missing. Required: `app_name`,
    /// `image_repository` and the image tag(s) for the selected environment
    /// mode.
    pub fn validate(self) -> Result<Configuration> {
        let environment = self.environment_or_default();

        let app_name = required("app_name", self.app_name)?;
        // The app name doubles as the Service name.
        validate_service_name("app_name", &app_name)?;
        let image_repository = required("image_repository", self.image_repository)?;

        let image_tags = resolve_image_tags(
            environment,
            non_empty(self.image_tag),
            non_empty(self.image_tag_staging),
            non_empty(self.image_tag_production),
        )?;

        let container_port = positive(
            "container_port",
            self.container_port.unwrap_or(DEFAULT_CONTAINER_PORT),
        )?;
        let replicas = positive("replicas", self.replicas.unwrap_or(DEFAULT_REPLICAS))?;
        if replicas > MAX_REPLICAS {
            return Err(Error::InvalidNumericValue {
                field: "replicas".to_string(),
                value: replicas.to_string(),
            });
        }

        let namespace = non_empty(self.namespace);
        if let Some(ns) = &namespace {
            validate_dns_label("namespace", ns)?;
        }
        if namespace.is_none() || environment.is_dual() {
            for env in environment.environments() {
                validate_dns_label("namespace", &format!("{}-{}", app_name, env))?;
            }
        }

        let service_account_name = non_empty(self.service_account_name);
        if let Some(name) = &service_account_name {
            validate_dns_label("service_account_name", name)?;
        }

        let shared = IngressTarget {
            host: non_empty(self.ingress.host),
            tls_secret: non_empty(self.ingress.tls_secret),
        };
        let staging = IngressTarget {
            host: non_empty(self.ingress.staging_host),
            tls_secret: non_empty(self.ingress.staging_tls_secret),
        };
        let production = IngressTarget {
            host: non_empty(self.ingress.production_host),
            tls_secret: non_empty(self.ingress.production_tls_secret),
        };
        let any_host = shared.host.is_some() || staging.host.is_some() || production.host.is_some();
        let ingress = IngressSettings {
            enabled: self.ingress.enabled.unwrap_or(any_host),
            class: non_empty(self.ingress.class),
            shared,
            staging,
            production,
        };

        let resources = ResourceSettings {
            requests_cpu: non_empty(self.resources.requests_cpu),
            requests_memory: non_empty(self.resources.requests_memory),
            limits_cpu: non_empty(self.resources.limits_cpu),
            limits_memory: non_empty(self.resources.limits_memory),
        };

        let config = Configuration {
            app_name,
            image_repository,
            image_tags,
            container_port,
            replicas,
            namespace,
            environment,
            ingress,
            image_pull_secrets: self
                .image_pull_secrets
                .into_iter()
                .filter_map(|name| non_empty(Some(name)))
                .collect(),
            service_account_name,
            create_service_account: self.create_service_account.unwrap_or(true),
            resource_quota: self.resource_quota.unwrap_or(false),
            vertical_autoscaler: self.vertical_autoscaler.unwrap_or(false),
            resources,
        };

        tracing::debug!(
            app = %config.app_name,
            environment = %config.environment,
            ingress = config.ingress.enabled,
            "configuration validated"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dns_label_accepts_typical_names() {
        assert!(validate_dns_label("app_name", "orders").is_ok());
        assert!(validate_dns_label("app_name", "orders-api-2").is_ok());
    }

    #[test]
    fn test_dns_label_rejects_bad_names() {
        for bad in ["Orders", "-orders", "orders-", "orders_api", "a.b", ""] {
            assert!(
                validate_dns_label("app_name", bad).is_err(),
                "{bad} should be rejected"
            );
        }
        assert!(validate_dns_label("app_name", &"a".repeat(64)).is_err());
    }

    #[test]
    fn test_service_name_must_start_with_letter() {
        assert!(validate_service_name("app_name", "orders-2").is_ok());
        assert!(validate_dns_label("app_name", "1orders").is_ok());
        assert!(matches!(
            validate_service_name("app_name", "1orders"),
            Err(Error::InvalidName { field, .. }) if field == "app_name"
        ));
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive::<u16>("container_port", " 8080 ").unwrap(), 8080);
        assert!(matches!(
            parse_positive::<u16>("container_port", "0"),
            Err(Error::InvalidNumericValue { field, .. }) if field == "container_port"
        ));
        assert!(parse_positive::<u32>("replicas", "three").is_err());
        assert!(parse_positive::<u16>("container_port", "70000").is_err());
    }
}
