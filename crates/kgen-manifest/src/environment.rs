//! Expansion of a configuration into per-environment contexts

use kgen_meta::{Configuration, Environment, EnvironmentSelection};

/// Resolved parameters for one target environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentContext {
    /// `None` in single-environment mode without a named environment.
    pub environment: Option<Environment>,
    pub namespace: Option<String>,
    pub image_tag: String,
    pub ingress_host: Option<String>,
    pub ingress_tls_secret: Option<String>,
}

impl EnvironmentContext {
    /// Environment name, empty when no environment was selected.
    pub fn name(&self) -> &str {
        self.environment.map(|env| env.as_str()).unwrap_or("")
    }
}

/// Derive the ordered environment contexts for `config`.
///
/// `both` always yields staging then production, each in its own
/// `{app}-{env}` namespace.
pub fn expand(config: &Configuration) -> Vec<EnvironmentContext> {
    let selection = config.environment();
    let override_namespace = match (selection, config.namespace()) {
        (EnvironmentSelection::Both, Some(ns)) => {
            tracing::warn!(
                namespace = ns,
                "namespace override ignored when generating both environments"
            );
            None
        }
        (_, ns) => ns,
    };

    let environments: Vec<Option<Environment>> = match selection {
        EnvironmentSelection::None => vec![None],
        _ => selection.environments().into_iter().map(Some).collect(),
    };

    environments
        .into_iter()
        .map(|environment| {
            let namespace = override_namespace
                .map(str::to_string)
                .or_else(|| environment.map(|env| format!("{}-{}", config.app_name(), env)));
            let ingress = config.ingress().target_for(environment);
            let context = EnvironmentContext {
                environment,
                namespace,
                image_tag: config.image_tags().for_environment(environment).to_string(),
                ingress_host: ingress.host,
                ingress_tls_secret: ingress.tls_secret,
            };
            tracing::debug!(
                environment = context.name(),
                namespace = context.namespace.as_deref().unwrap_or(""),
                tag = %context.image_tag,
                "resolved environment context"
            );
            context
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kgen_meta::PartialConfig;
    use pretty_assertions::assert_eq;

    fn config(environment: &str, namespace: Option<&str>) -> Configuration {
        PartialConfig {
            app_name: Some("orders".into()),
            image_repository: Some("registry.example.com/orders".into()),
            image_tag: Some("v1".into()),
            namespace: namespace.map(Into::into),
            environment: Some(environment.parse().unwrap()),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_no_environment_has_no_namespace() {
        let contexts = expand(&config("none", None));
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].name(), "");
        assert_eq!(contexts[0].namespace, None);
    }

    #[test]
    fn test_single_environment_derives_namespace() {
        let contexts = expand(&config("staging", None));
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts[0].environment, Some(Environment::Staging));
        assert_eq!(contexts[0].namespace.as_deref(), Some("orders-staging"));
    }

    #[test]
    fn test_override_wins_in_single_mode() {
        let contexts = expand(&config("production", Some("shop")));
        assert_eq!(contexts[0].namespace.as_deref(), Some("shop"));

        let contexts = expand(&config("none", Some("shop")));
        assert_eq!(contexts[0].namespace.as_deref(), Some("shop"));
    }

    #[test]
    fn test_both_ignores_override() {
        let contexts = expand(&config("both", Some("shop")));
        let namespaces: Vec<_> = contexts
            .iter()
            .map(|c| c.namespace.as_deref().unwrap())
            .collect();
        assert_eq!(namespaces, vec!["orders-staging", "orders-production"]);
    }
}
