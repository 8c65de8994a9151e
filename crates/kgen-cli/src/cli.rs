//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use kgen_meta::{
    EnvironmentSelection, PartialConfig, PartialIngress, PartialResources, parse_positive,
};

/// kgen - Generate Kubernetes manifests for an application deployment
#[derive(Parser, Debug)]
#[command(name = "kgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate manifests
    ///
    /// Values come from a config file (kgen.toml/.yaml/.json is picked up
    /// automatically), then flags, then interactive prompts.
    ///
    /// Examples:
    ///   kgen generate --app-name orders --image registry.example.com/orders --tag v1.2.3
    ///   kgen generate --config kgen.yaml --environment both
    ///   kgen generate -i                 # Prompt for anything missing
    ///   kgen generate --dry-run --diff   # Show what would change
    Generate(Box<GenerateArgs>),

    /// Generate shell completions
    ///
    /// Examples:
    ///   kgen completions bash > ~/.local/share/bash-completion/completions/kgen
    ///   kgen completions zsh > ~/.zfunc/_kgen
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Flags for `kgen generate`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateArgs {
    /// Config file (TOML, YAML or JSON)
    #[arg(short, long, env = "KGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".", env = "KGEN_OUTPUT")]
    pub output: PathBuf,

    /// Preview changes without writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Print a unified diff for every changed file
    #[arg(long)]
    pub diff: bool,

    /// Print the combined YAML stream instead of writing files
    #[arg(long, conflicts_with_all = ["dry_run", "diff"])]
    pub stdout: bool,

    /// Prompt for missing values and confirm before generating
    #[arg(short, long)]
    pub interactive: bool,

    /// Application name (RFC 1123 label)
    #[arg(long, env = "KGEN_APP_NAME")]
    pub app_name: Option<String>,

    /// Image repository, e.g. registry.example.com/orders
    #[arg(long, env = "KGEN_IMAGE")]
    pub image: Option<String>,

    /// Image tag
    #[arg(long, env = "KGEN_TAG")]
    pub tag: Option<String>,

    /// Image tag for staging
    #[arg(long)]
    pub staging_tag: Option<String>,

    /// Image tag for production
    #[arg(long)]
    pub production_tag: Option<String>,

    /// Container port [default: 3000]
    #[arg(long)]
    pub port: Option<String>,

    /// Replica count [default: 1]
    #[arg(long)]
    pub replicas: Option<String>,

    /// Namespace override
    #[arg(short, long, env = "KGEN_NAMESPACE")]
    pub namespace: Option<String>,

    /// Target environment: none, staging, production or both
    #[arg(short, long, env = "KGEN_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Generate an Ingress
    #[arg(long)]
    pub ingress: bool,

    /// Ingress host
    #[arg(long)]
    pub ingress_host: Option<String>,

    /// Ingress class name
    #[arg(long)]
    pub ingress_class: Option<String>,

    /// TLS secret for the ingress host
    #[arg(long)]
    pub tls_secret: Option<String>,

    /// Ingress host for staging
    #[arg(long)]
    pub staging_host: Option<String>,

    /// TLS secret for staging
    #[arg(long)]
    pub staging_tls_secret: Option<String>,

    /// Ingress host for production
    #[arg(long)]
    pub production_host: Option<String>,

    /// TLS secret for production
    #[arg(long)]
    pub production_tls_secret: Option<String>,

    /// Image pull secret (repeatable)
    #[arg(long = "image-pull-secret")]
    pub image_pull_secrets: Vec<String>,

    /// Service account name [default: app name]
    #[arg(long)]
    pub service_account: Option<String>,

    /// Do not create a ServiceAccount
    #[arg(long)]
    pub no_service_account: bool,

    /// Generate a ResourceQuota
    #[arg(long)]
    pub resource_quota: bool,

    /// Generate a VerticalPodAutoscaler
    #[arg(long)]
    pub vpa: bool,

    /// CPU request, e.g. 200m
    #[arg(long)]
    pub requests_cpu: Option<String>,

    /// Memory request, e.g. 256Mi
    #[arg(long)]
    pub requests_memory: Option<String>,

    /// CPU limit
    #[arg(long)]
    pub limits_cpu: Option<String>,

    /// Memory limit
    #[arg(long)]
    pub limits_memory: Option<String>,
}

/// `Some(true)` when a switch was passed, otherwise leave it to other layers.
fn switch(on: bool) -> Option<bool> {
    on.then_some(true)
}

impl GenerateArgs {
    /// The configuration layer supplied on the command line.
    pub fn to_partial(&self) -> kgen_meta::Result<PartialConfig> {
        Ok(PartialConfig {
            app_name: self.app_name.clone(),
            image_repository: self.image.clone(),
            image_tag: self.tag.clone(),
            image_tag_staging: self.staging_tag.clone(),
            image_tag_production: self.production_tag.clone(),
            container_port: self
                .port
                .as_deref()
                .map(|raw| parse_positive("container_port", raw))
                .transpose()?,
            replicas: self
                .replicas
                .as_deref()
                .map(|raw| parse_positive("replicas", raw))
                .transpose()?,
            namespace: self.namespace.clone(),
            environment: self
                .environment
                .as_deref()
                .map(|raw| raw.parse::<EnvironmentSelection>())
                .transpose()?,
            ingress: PartialIngress {
                enabled: switch(self.ingress),
                host: self.ingress_host.clone(),
                class: self.ingress_class.clone(),
                tls_secret: self.tls_secret.clone(),
                staging_host: self.staging_host.clone(),
                staging_tls_secret: self.staging_tls_secret.clone(),
                production_host: self.production_host.clone(),
                production_tls_secret: self.production_tls_secret.clone(),
            },
            image_pull_secrets: self.image_pull_secrets.clone(),
            service_account_name: self.service_account.clone(),
            create_service_account: self.no_service_account.then_some(false),
            resource_quota: switch(self.resource_quota),
            vertical_autoscaler: switch(self.vpa),
            resources: PartialResources {
                requests_cpu: self.requests_cpu.clone(),
                requests_memory: self.requests_memory.clone(),
                limits_cpu: self.limits_cpu.clone(),
                limits_memory: self.limits_memory.clone(),
            },
        })
    }
}
