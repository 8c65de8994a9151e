//! Output file names

use crate::document::{Document, ResourceKind};

/// File-name prefix for a kind.
fn kind_slug(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Namespace => "namespace",
        ResourceKind::ServiceAccount => "serviceaccount",
        ResourceKind::ConfigMap => "configmap",
        ResourceKind::Secret => "secret",
        ResourceKind::Deployment => "deployment",
        ResourceKind::Service => "service",
        ResourceKind::Ingress => "ingress",
        ResourceKind::ResourceQuota => "resourcequota",
        ResourceKind::VerticalPodAutoscaler => "verticalpodautoscaler",
    }
}

/// Lowercase the name and replace `/` and `:` with `-`.
pub fn sanitize_name(name: &str) -> String {
    name.to_lowercase().replace(['/', ':'], "-")
}

/// `{kind}-{name}.yaml` for a document.
pub fn file_name(document: &Document) -> String {
    format!(
        "{}-{}.yaml",
        kind_slug(document.kind()),
        sanitize_name(document.name())
    )
}
