//! Integration tests for configuration validation

use kgen_meta::{Environment, EnvironmentSelection, Error, ImageTags, PartialConfig};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn minimal() -> PartialConfig {
    PartialConfig {
        app_name: Some("orders".into()),
        image_repository: Some("registry.example.com/orders".into()),
        image_tag: Some("v1.2.3".into()),
        ..Default::default()
    }
}

fn missing_field(result: Result<kgen_meta::Configuration, Error>) -> String {
    match result {
        Err(Error::MissingRequiredField(field)) => field,
        other => panic!("Expected MissingRequiredField, got {:?}", other),
    }
}

#[test]
fn test_minimal_config_applies_defaults() {
    let config = minimal().validate().unwrap();

    assert_eq!(config.app_name(), "orders");
    assert_eq!(config.container_port(), 3000);
    assert_eq!(config.replicas(), 1);
    assert_eq!(config.environment(), EnvironmentSelection::None);
    assert_eq!(config.service_account_name(), "orders");
    assert!(config.create_service_account());
    assert!(!config.resource_quota());
    assert!(!config.vertical_autoscaler());
    assert!(!config.ingress().enabled);
    assert!(config.resources().is_empty());
    assert_eq!(config.image_tags(), &ImageTags::Single("v1.2.3".into()));
}

#[rstest]
#[case::no_app_name(PartialConfig { app_name: None, ..minimal() }, "app_name")]
#[case::blank_app_name(PartialConfig { app_name: Some("  ".into()), ..minimal() }, "app_name")]
#[case::no_image(PartialConfig { image_repository: None, ..minimal() }, "image_repository")]
#[case::no_tag(PartialConfig { image_tag: None, ..minimal() }, "image_tag")]
fn test_missing_required_fields(#[case] input: PartialConfig, #[case] field: &str) {
    assert_eq!(missing_field(input.validate()), field);
}

#[test]
fn test_both_requires_environment_tags() {
    let input = PartialConfig {
        image_tag: None,
        image_tag_staging: Some("staging-3a8217e2".into()),
        environment: Some(EnvironmentSelection::Both),
        ..minimal()
    };

    assert_eq!(missing_field(input.validate()), "image_tag_production");
}

#[test]
fn test_both_tags_fall_back_to_shared_tag() {
    let input = PartialConfig {
        image_tag_production: Some("production-311e2b7a".into()),
        environment: Some(EnvironmentSelection::Both),
        ..minimal()
    };

    let config = input.validate().unwrap();

    assert_eq!(
        config.image_tags().for_environment(Some(Environment::Staging)),
        "v1.2.3"
    );
    assert_eq!(
        config.image_tags().for_environment(Some(Environment::Production)),
        "production-311e2b7a"
    );
}

#[test]
fn test_single_environment_uses_environment_tag() {
    let input = PartialConfig {
        image_tag: None,
        image_tag_staging: Some("staging-3a8217e2".into()),
        environment: Some(EnvironmentSelection::Staging),
        ..minimal()
    };

    let config = input.validate().unwrap();

    assert_eq!(
        config.image_tags(),
        &ImageTags::Single("staging-3a8217e2".into())
    );
}

#[rstest]
#[case::zero_port(PartialConfig { container_port: Some(0), ..minimal() }, "container_port")]
#[case::zero_replicas(PartialConfig { replicas: Some(0), ..minimal() }, "replicas")]
#[case::huge_replicas(PartialConfig { replicas: Some(u32::MAX), ..minimal() }, "replicas")]
fn test_zero_numeric_values_rejected(#[case] input: PartialConfig, #[case] expected: &str) {
    match input.validate() {
        Err(Error::InvalidNumericValue { field, .. }) => assert_eq!(field, expected),
        other => panic!("Expected InvalidNumericValue, got {:?}", other),
    }
}

#[rstest]
#[case::uppercase("Orders_API")]
#[case::leading_digit("1orders")]
#[case::trailing_dash("orders-")]
fn test_invalid_app_name_rejected(#[case] app_name: &str) {
    let input = PartialConfig {
        app_name: Some(app_name.into()),
        ..minimal()
    };

    assert!(matches!(
        input.validate(),
        Err(Error::InvalidName { field, .. }) if field == "app_name"
    ));
}

#[test]
fn test_derived_namespace_length_checked() {
    let input = PartialConfig {
        app_name: Some("a".repeat(60)),
        environment: Some(EnvironmentSelection::Production),
        ..minimal()
    };

    assert!(matches!(
        input.validate(),
        Err(Error::InvalidName { field, .. }) if field == "namespace"
    ));
}

#[test]
fn test_ingress_enabled_when_host_given() {
    let mut input = minimal();
    input.ingress.host = Some("orders.example.com".into());

    let config = input.validate().unwrap();

    assert!(config.ingress().enabled);
}

#[test]
fn test_ingress_explicitly_disabled_wins() {
    let mut input = minimal();
    input.ingress.host = Some("orders.example.com".into());
    input.ingress.enabled = Some(false);

    assert!(!input.validate().unwrap().ingress().enabled);
}

#[test]
fn test_pull_secret_duplicates_preserved() {
    let input = PartialConfig {
        image_pull_secrets: vec!["regcred".into(), "regcred".into()],
        ..minimal()
    };

    let config = input.validate().unwrap();

    assert_eq!(
        config.image_pull_secrets(),
        &["regcred".to_string(), "regcred".to_string()]
    );
}

#[test]
fn test_blank_pull_secrets_dropped() {
    let input = PartialConfig {
        image_pull_secrets: vec![
            "".into(),
            "  ".into(),
            "regcred".into(),
            " regcred ".into(),
        ],
        ..minimal()
    };

    let config = input.validate().unwrap();

    assert_eq!(
        config.image_pull_secrets(),
        &["regcred".to_string(), "regcred".to_string()]
    );
}

#[test]
fn test_blank_resources_are_dropped() {
    let mut input = minimal();
    input.resources.requests_cpu = Some("200m".into());
    input.resources.limits_memory = Some(" ".into());

    let config = input.validate().unwrap();

    assert_eq!(config.resources().requests_cpu.as_deref(), Some("200m"));
    assert_eq!(config.resources().limits_memory, None);
}
