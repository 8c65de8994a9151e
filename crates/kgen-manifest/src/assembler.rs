//! Assembly of manifest sets

use std::path::PathBuf;

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use k8s_openapi::api::networking::v1::Ingress;
use kgen_meta::Configuration;

use crate::builders::{BuildContext, BuilderRegistry};
use crate::document::{Document, ResourceKind};
use crate::environment::{EnvironmentContext, expand};

/// Ordered documents for one environment context.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestSet {
    pub context: EnvironmentContext,
    /// Output directory relative to the output root: `{app}` in
    /// single-environment mode, `{app}/{env}` when generating both.
    pub relative_dir: PathBuf,
    pub documents: Vec<Document>,
}

impl ManifestSet {
    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn kinds(&self) -> Vec<ResourceKind> {
        self.documents.iter().map(Document::kind).collect()
    }

    /// The document of `kind`, if it was emitted.
    pub fn find(&self, kind: ResourceKind) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.kind() == kind)
    }

    pub fn deployment(&self) -> Option<&Deployment> {
        match self.find(ResourceKind::Deployment) {
            Some(Document::Deployment(deployment)) => Some(deployment),
            _ => None,
        }
    }

    pub fn service(&self) -> Option<&Service> {
        match self.find(ResourceKind::Service) {
            Some(Document::Service(service)) => Some(service),
            _ => None,
        }
    }

    pub fn ingress(&self) -> Option<&Ingress> {
        match self.find(ResourceKind::Ingress) {
            Some(Document::Ingress(ingress)) => Some(ingress),
            _ => None,
        }
    }
}

/// Build the manifest set for one context.
pub fn assemble(config: &Configuration, context: &EnvironmentContext) -> ManifestSet {
    let registry = BuilderRegistry::new();
    let ctx = BuildContext::new(config, context);

    let mut documents = Vec::new();
    for builder in registry.in_order() {
        if builder.applies(&ctx) {
            documents.push(builder.build(&ctx));
        } else {
            tracing::debug!(
                kind = %builder.kind(),
                environment = context.name(),
                "builder skipped"
            );
        }
    }

    let mut relative_dir = PathBuf::from(config.app_name());
    if config.environment().is_dual() {
        relative_dir.push(context.name());
    }

    ManifestSet {
        context: context.clone(),
        relative_dir,
        documents,
    }
}

/// Expand `config` and assemble one set per environment context.
pub fn plan(config: &Configuration) -> Vec<ManifestSet> {
    expand(config)
        .iter()
        .map(|context| assemble(config, context))
        .collect()
}
