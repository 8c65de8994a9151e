use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, IngressTLS, ServiceBackendPort,
};

use crate::document::{Document, ResourceKind};

use super::service::SERVICE_PORT;
use super::{BuildContext, ResourceBuilder};

/// Emits an Ingress when ingress is enabled and the context has a host.
#[derive(Debug, Default, Clone, Copy)]
pub struct IngressBuilder;

impl ResourceBuilder for IngressBuilder {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Ingress
    }

    fn applies(&self, ctx: &BuildContext<'_>) -> bool {
        ctx.config.ingress().enabled && ctx.environment.ingress_host.is_some()
    }

    fn build(&self, ctx: &BuildContext<'_>) -> Document {
        let workload = &ctx.workload;
        let host = ctx.environment.ingress_host.clone().unwrap_or_default();

        let tls = ctx
            .environment
            .ingress_tls_secret
            .as_ref()
            .map(|secret| {
                vec![IngressTLS {
                    hosts: Some(vec![host.clone()]),
                    secret_name: Some(secret.clone()),
                }]
            });

        let rule = IngressRule {
            host: Some(host),
            http: Some(HTTPIngressRuleValue {
                paths: vec![HTTPIngressPath {
                    path: Some("/".to_string()),
                    path_type: "Prefix".to_string(),
                    backend: IngressBackend {
                        service: Some(IngressServiceBackend {
                            name: workload.service_name(),
                            port: Some(ServiceBackendPort {
                                number: Some(SERVICE_PORT),
                                ..Default::default()
                            }),
                        }),
                        ..Default::default()
                    },
                }],
            }),
        };

        Document::Ingress(Ingress {
            metadata: workload.metadata(self.kind(), workload.ingress_name()),
            spec: Some(IngressSpec {
                ingress_class_name: ctx.config.ingress().class.clone(),
                tls,
                rules: Some(vec![rule]),
                ..Default::default()
            }),
            ..Default::default()
        })
    }
}
