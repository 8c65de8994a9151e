//! Integration tests for config file loading

use std::fs;

use kgen_meta::loader::{discover, load_partial};
use kgen_meta::{EnvironmentSelection, Error};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

#[test]
fn test_load_yaml_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("kgen.yaml");
    fs::write(
        &path,
        r#"
app_name: orders
image_repository: registry.example.com/orders
image_tag_staging: staging-3a8217e2
image_tag_production: production-311e2b7a
environment: both
image_pull_secrets: [regcred]
ingress:
  class: nginx
  staging_host: stage.example.com
  production_host: prod.example.com
  production_tls_secret: k8s-tls-secret-replica
resources:
  requests_cpu: 200m
"#,
    )
    .unwrap();

    let partial = load_partial(&path).unwrap();

    assert_eq!(partial.app_name.as_deref(), Some("orders"));
    assert_eq!(partial.environment, Some(EnvironmentSelection::Both));
    assert_eq!(partial.image_pull_secrets, vec!["regcred".to_string()]);
    assert_eq!(partial.ingress.class.as_deref(), Some("nginx"));
    assert_eq!(
        partial.ingress.production_tls_secret.as_deref(),
        Some("k8s-tls-secret-replica")
    );
    assert_eq!(partial.resources.requests_cpu.as_deref(), Some("200m"));
}

#[test]
fn test_load_toml_config_with_alias() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("kgen.toml");
    fs::write(
        &path,
        "app_name = \"orders\"\nenvironment = \"prod\"\ncontainer_port = 8080\n",
    )
    .unwrap();

    let partial = load_partial(&path).unwrap();

    assert_eq!(partial.environment, Some(EnvironmentSelection::Production));
    assert_eq!(partial.container_port, Some(8080));
}

#[test]
fn test_unknown_keys_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("kgen.yaml");
    fs::write(&path, "app_nmae: orders\n").unwrap();

    let err = load_partial(&path).unwrap_err();

    assert!(matches!(err, Error::Fs(kgen_fs::Error::ConfigParse { .. })));
}

#[test]
fn test_discover_prefers_toml() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kgen.yaml"), "").unwrap();
    fs::write(temp.path().join("kgen.toml"), "").unwrap();

    assert_eq!(discover(temp.path()), Some(temp.path().join("kgen.toml")));
}

#[test]
fn test_discover_none_when_absent() {
    let temp = TempDir::new().unwrap();

    assert_eq!(discover(temp.path()), None);
}
