//! Property tests for label consistency and file naming

use kgen_manifest::naming::sanitize_name;
use kgen_manifest::{ResourceKind, file_name, plan};
use kgen_meta::{EnvironmentSelection, PartialConfig};
use proptest::prelude::*;

fn selection() -> impl Strategy<Value = EnvironmentSelection> {
    prop_oneof![
        Just(EnvironmentSelection::None),
        Just(EnvironmentSelection::Staging),
        Just(EnvironmentSelection::Production),
        Just(EnvironmentSelection::Both),
    ]
}

proptest! {
    #[test]
    fn selector_labels_always_agree(
        app in "[a-z][a-z0-9]{0,20}",
        environment in selection(),
        quota in any::<bool>(),
        vpa in any::<bool>(),
        replicas in 1u32..10,
    ) {
        let config = PartialConfig {
            app_name: Some(app.clone()),
            image_repository: Some(format!("registry.example.com/{app}")),
            image_tag: Some("latest".into()),
            environment: Some(environment),
            resource_quota: Some(quota),
            vertical_autoscaler: Some(vpa),
            replicas: Some(replicas),
            ..Default::default()
        }
        .validate()
        .unwrap();

        let sets = plan(&config);
        prop_assert_eq!(sets.len(), environment.environments().len().max(1));

        for set in &sets {
            let spec = set.deployment().unwrap().spec.as_ref().unwrap();
            let service = set.service().unwrap().spec.as_ref().unwrap();
            let template_labels = spec.template.metadata.as_ref().unwrap().labels.as_ref();
            prop_assert!(spec.selector.match_labels.is_some());
            prop_assert_eq!(spec.selector.match_labels.as_ref(), template_labels);
            prop_assert_eq!(spec.selector.match_labels.as_ref(), service.selector.as_ref());
            prop_assert_eq!(spec.replicas, Some(replicas as i32));
            prop_assert_eq!(set.find(ResourceKind::ResourceQuota).is_some(), quota);
            prop_assert_eq!(set.find(ResourceKind::VerticalPodAutoscaler).is_some(), vpa);
        }
    }

    #[test]
    fn sanitized_names_have_no_separators(name in "[A-Za-z0-9/:._-]{0,40}") {
        let sanitized = sanitize_name(&name);
        prop_assert!(!sanitized.contains('/'));
        prop_assert!(!sanitized.contains(':'));
        prop_assert_eq!(sanitized.clone(), sanitized.to_lowercase());
    }

    #[test]
    fn file_names_end_with_yaml(app in "[a-z][a-z0-9-]{0,20}[a-z0-9]") {
        let config = PartialConfig {
            app_name: Some(app),
            image_repository: Some("img".into()),
            image_tag: Some("v1".into()),
            ..Default::default()
        }
        .validate()
        .unwrap();
        for set in plan(&config) {
            for doc in set.iter() {
                let name = file_name(doc);
                prop_assert!(name.ends_with(".yaml"));
                let prefix = format!("{}-", doc.kind().as_str().to_lowercase());
                prop_assert!(name.starts_with(&prefix));
            }
        }
    }
}
