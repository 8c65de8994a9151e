use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use crate::document::{Document, ResourceKind};

use super::deployment::HTTP_PORT_NAME;
use super::{BuildContext, ResourceBuilder};

/// Port the Service (and the Ingress backend) listens on.
pub const SERVICE_PORT: i32 = 80;

#[derive(Debug, Default, Clone, Copy)]
pub struct ServiceBuilder;

impl ResourceBuilder for ServiceBuilder {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Service
    }

    fn applies(&self, _ctx: &BuildContext<'_>) -> bool {
        true
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Document {
        let workload = &ctx.workload;
        Document::Service(Service {
            metadata: workload.metadata(self.kind(), workload.service_name()),
            spec: Some(ServiceSpec {
                type_: Some("ClusterIP".to_string()),
                selector: Some(workload.selector_labels()),
                ports: Some(vec![ServicePort {
                    name: Some(HTTP_PORT_NAME.to_string()),
                    port: SERVICE_PORT,
                    target_port: Some(IntOrString::String(HTTP_PORT_NAME.to_string())),
                    protocol: Some("TCP".to_string()),
                    ..Default::default()
                }]),
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}
