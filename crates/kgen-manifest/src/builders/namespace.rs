use k8s_openapi::api::core::v1::Namespace;

use crate::document::{Document, ResourceKind};

use super::{BuildContext, ResourceBuilder};

/// Emits the Namespace when the context has one.
#[derive(Debug, Default, Clone, Copy)]
pub struct NamespaceBuilder;

impl ResourceBuilder for NamespaceBuilder {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Namespace
    }

    fn applies(&self, ctx: &BuildContext<'_>) -> bool {
        ctx.workload.namespace().is_some()
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Document {
        let name = ctx.workload.namespace().unwrap_or_default();
        Document::Namespace(Namespace {
            metadata: ctx.workload.metadata(self.kind(), name),
            ..Default::default()
        })
    }
}
