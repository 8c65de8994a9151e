use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{ResourceQuota, ResourceQuotaSpec};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

use crate::document::{Document, ResourceKind};

use super::{BuildContext, ResourceBuilder};

/// Hard limits applied to every generated namespace quota.
pub const QUOTA_HARD_LIMITS: [(&str, &str); 5] = [
    ("requests.cpu", "2"),
    ("requests.memory", "4Gi"),
    ("limits.cpu", "4"),
    ("limits.memory", "8Gi"),
    ("pods", "20"),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct ResourceQuotaBuilder;

impl ResourceBuilder for ResourceQuotaBuilder {
    fn kind(&self) -> ResourceKind {
        ResourceKind::ResourceQuota
    }

    fn applies(&self, ctx: &BuildContext<'_>) -> bool {
        ctx.config.resource_quota()
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Document {
        let hard: BTreeMap<String, Quantity> = QUOTA_HARD_LIMITS
            .iter()
            .map(|(key, value)| (key.to_string(), Quantity(value.to_string())))
            .collect();
        Document::ResourceQuota(ResourceQuota {
            metadata: ctx.workload.metadata(self.kind(), ctx.workload.quota_name()),
            spec: Some(ResourceQuotaSpec {
                hard: Some(hard),
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}
