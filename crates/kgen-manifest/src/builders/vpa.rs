use crate::document::{
    CrossVersionObjectReference, Document, ResourceKind, UpdatePolicy, VerticalPodAutoscaler,
    VerticalPodAutoscalerSpec,
};

use super::{BuildContext, ResourceBuilder};

/// Emits a VPA targeting the context's Deployment.
#[derive(Debug, Default, Clone, Copy)]
pub struct VerticalPodAutoscalerBuilder;

impl ResourceBuilder for VerticalPodAutoscalerBuilder {
    fn kind(&self) -> ResourceKind {
        ResourceKind::VerticalPodAutoscaler
    }

    fn applies(&self, ctx: &BuildContext<'_>) -> bool {
        ctx.config.vertical_autoscaler()
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Document {
        let workload = &ctx.workload;
        let target = ResourceKind::Deployment;
        Document::VerticalPodAutoscaler(VerticalPodAutoscaler {
            type_meta: self.kind().into(),
            metadata: workload.metadata(self.kind(), workload.vpa_name()),
            spec: VerticalPodAutoscalerSpec {
                target_ref: CrossVersionObjectReference {
                    api_version: target.api_version().to_string(),
                    kind: target.as_str().to_string(),
                    name: workload.deployment_name(),
                },
                update_policy: UpdatePolicy {
                    update_mode: "Auto".to_string(),
                },
            },
        })
    }
}
