//! End-to-end integration tests for the generation pipeline
//!
//! Config file -> PartialConfig -> Configuration -> manifest sets -> YAML on
//! disk, then read back as plain YAML to check cross-references the way a
//! cluster would see them.

use std::fs;
use std::path::Path;

use kgen_fs::OutputPath;
use kgen_fs::io::write_atomic;
use kgen_manifest::{file_name, plan, to_yaml};
use kgen_meta::loader::{discover, load_partial};
use pretty_assertions::assert_eq;
use serde_yaml::Value;
use tempfile::TempDir;

/// Set up a project directory with a kgen.toml
fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("kgen.toml"), config).unwrap();
    temp
}

/// Run the whole pipeline and write every set below `root/out`.
fn generate(root: &Path) -> Vec<kgen_manifest::ManifestSet> {
    let path = discover(root).expect("kgen.toml should be discovered");
    let config = load_partial(&path).unwrap().validate().unwrap();
    let sets = plan(&config);

    let out = OutputPath::root(root.join("out"));
    for set in &sets {
        let dir = out.join_path(&set.relative_dir).unwrap();
        for document in set.iter() {
            let path = dir.join(&file_name(document)).unwrap();
            write_atomic(&path, to_yaml(document).unwrap().as_bytes()).unwrap();
        }
    }
    sets
}

fn read_yaml(path: &Path) -> Value {
    serde_yaml::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

// =============================================================================
// Single environment
// =============================================================================

#[test]
fn test_orders_example_round_trip() {
    let temp = setup_project(
        r#"
app_name = "orders"
image_repository = "registry.example.com/orders"
image_tag = "v1.2.3"
container_port = 3000

[ingress]
enabled = true
host = "orders.example.com"
class = "nginx"
"#,
    );

    let sets = generate(temp.path());
    assert_eq!(sets.len(), 1);
    assert_eq!(sets[0].len(), 4);

    let dir = temp.path().join("out/orders");
    let deployment = read_yaml(&dir.join("deployment-orders-node.yaml"));
    let service = read_yaml(&dir.join("service-orders.yaml"));
    let ingress = read_yaml(&dir.join("ingress-orders.yaml"));

    assert_eq!(
        deployment["spec"]["template"]["spec"]["containers"][0]["image"],
        Value::from("registry.example.com/orders:v1.2.3")
    );
    assert_eq!(
        deployment["spec"]["selector"]["matchLabels"],
        service["spec"]["selector"]
    );
    assert_eq!(
        deployment["spec"]["template"]["metadata"]["labels"],
        service["spec"]["selector"]
    );

    // Ingress backend -> Service -> named container port
    let backend = &ingress["spec"]["rules"][0]["http"]["paths"][0]["backend"]["service"];
    assert_eq!(backend["name"], service["metadata"]["name"]);
    assert_eq!(backend["port"]["number"], service["spec"]["ports"][0]["port"]);
    assert_eq!(
        service["spec"]["ports"][0]["targetPort"],
        deployment["spec"]["template"]["spec"]["containers"][0]["ports"][0]["name"]
    );
    assert!(ingress["spec"].get("tls").is_none());
    assert!(deployment["metadata"].get("namespace").is_none());
}

#[test]
fn test_vpa_targets_generated_deployment() {
    let temp = setup_project(
        r#"
app_name = "billing"
image_repository = "billing"
image_tag = "2024.1"
environment = "production"
vertical_autoscaler = true
resource_quota = true
"#,
    );
    generate(temp.path());

    let dir = temp.path().join("out/billing");
    let deployment = read_yaml(&dir.join("deployment-billing-node.yaml"));
    let vpa = read_yaml(&dir.join("verticalpodautoscaler-billing-vpa.yaml"));
    let quota = read_yaml(&dir.join("resourcequota-billing-quota.yaml"));

    assert_eq!(vpa["spec"]["targetRef"]["name"], deployment["metadata"]["name"]);
    assert_eq!(vpa["spec"]["targetRef"]["kind"], deployment["kind"]);
    assert_eq!(vpa["spec"]["targetRef"]["apiVersion"], deployment["apiVersion"]);
    assert_eq!(quota["metadata"]["namespace"], Value::from("billing-production"));
}

// =============================================================================
// Both environments
// =============================================================================

#[test]
fn test_both_environments_are_isolated() {
    let temp = setup_project(
        r#"
app_name = "orders"
image_repository = "registry.example.com/orders"
image_tag_staging = "v2.0.0-rc1"
image_tag_production = "v1.9.0"
environment = "both"
image_pull_secrets = ["regcred"]

[ingress]
staging_host = "staging.orders.example.com"
production_host = "orders.example.com"
production_tls_secret = "orders-tls"
"#,
    );
    let sets = generate(temp.path());
    assert_eq!(sets.len(), 2);

    for (env, tag, host) in [
        ("staging", "v2.0.0-rc1", "staging.orders.example.com"),
        ("production", "v1.9.0", "orders.example.com"),
    ] {
        let dir = temp.path().join("out/orders").join(env);
        let namespace = format!("orders-{env}");

        let ns = read_yaml(&dir.join(format!("namespace-{namespace}.yaml")));
        assert_eq!(ns["metadata"]["name"], Value::from(namespace.as_str()));

        let deployment = read_yaml(&dir.join("deployment-orders-node.yaml"));
        assert_eq!(deployment["metadata"]["namespace"], Value::from(namespace.as_str()));
        let pod = &deployment["spec"]["template"]["spec"];
        assert_eq!(
            pod["containers"][0]["image"],
            Value::from(format!("registry.example.com/orders:{tag}"))
        );
        assert_eq!(pod["imagePullSecrets"][0]["name"], Value::from("regcred"));
        assert_eq!(
            pod["containers"][0]["envFrom"][0]["configMapRef"]["name"],
            Value::from("orders-config")
        );

        let config_map = read_yaml(&dir.join("configmap-orders-config.yaml"));
        assert_eq!(config_map["data"]["APP_ENV"], Value::from(env));

        let ingress = read_yaml(&dir.join("ingress-orders.yaml"));
        assert_eq!(ingress["spec"]["rules"][0]["host"], Value::from(host));
    }

    let staging_ingress = read_yaml(&temp.path().join("out/orders/staging/ingress-orders.yaml"));
    assert!(staging_ingress["spec"].get("tls").is_none());
    let production_ingress =
        read_yaml(&temp.path().join("out/orders/production/ingress-orders.yaml"));
    assert_eq!(
        production_ingress["spec"]["tls"][0]["secretName"],
        Value::from("orders-tls")
    );
}

#[test]
fn test_invalid_config_writes_nothing() {
    let temp = setup_project(
        r#"
app_name = "orders"
image_tag = "v1"
"#,
    );
    let path = discover(temp.path()).unwrap();
    let result = load_partial(&path).unwrap().validate();

    match result {
        Err(kgen_meta::Error::MissingRequiredField(field)) => {
            assert_eq!(field, "image_repository")
        }
        _ => panic!("Expected MissingRequiredField"),
    }
    assert!(!temp.path().join("out").exists());
}
