use k8s_openapi::api::core::v1::ServiceAccount;

use crate::document::{Document, ResourceKind};

use super::{BuildContext, ResourceBuilder};

#[derive(Debug, Default, Clone, Copy)]
pub struct ServiceAccountBuilder;

impl ResourceBuilder for ServiceAccountBuilder {
    fn kind(&self) -> ResourceKind {
        ResourceKind::ServiceAccount
    }

    fn applies(&self, ctx: &BuildContext<'_>) -> bool {
        ctx.config.create_service_account()
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Document {
        Document::ServiceAccount(ServiceAccount {
            metadata: ctx
                .workload
                .metadata(self.kind(), ctx.workload.service_account_name()),
            ..Default::default()
        })
    }
}
