//! Per-environment ConfigMap and Secret

use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{ConfigMap, Secret};

use crate::document::{Document, ResourceKind};

use super::{BuildContext, ResourceBuilder};

pub const APP_ENV_KEY: &str = "APP_ENV";

/// Key written to every generated Secret. Operators replace it after
/// generation; kgen never emits real secret values.
pub const SECRET_PLACEHOLDER_KEY: &str = "SECRET_KEY";
pub const SECRET_PLACEHOLDER_VALUE: &str = "change-me";

#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigMapBuilder;

impl ResourceBuilder for ConfigMapBuilder {
    fn kind(&self) -> ResourceKind {
        ResourceKind::ConfigMap
    }

    fn applies(&self, ctx: &BuildContext<'_>) -> bool {
        ctx.has_environment_config()
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Document {
        Document::ConfigMap(ConfigMap {
            metadata: ctx
                .workload
                .metadata(self.kind(), ctx.workload.config_map_name()),
            data: Some(BTreeMap::from([(
                APP_ENV_KEY.to_string(),
                ctx.environment.name().to_string(),
            )])),
            ..Default::default()
        })
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SecretBuilder;

impl ResourceBuilder for SecretBuilder {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Secret
    }

    fn applies(&self, ctx: &BuildContext<'_>) -> bool {
        ctx.has_environment_config()
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Document {
        Document::Secret(Secret {
            metadata: ctx.workload.metadata(self.kind(), ctx.workload.secret_name()),
            type_: Some("Opaque".to_string()),
            string_data: Some(BTreeMap::from([(
                SECRET_PLACEHOLDER_KEY.to_string(),
                SECRET_PLACEHOLDER_VALUE.to_string(),
            )])),
            ..Default::default()
        })
    }
}
