//! Interactive prompts for `kgen generate`
//!
//! Uses dialoguer to fill in whatever the config file and flags left open,
//! then shows a summary and asks for confirmation.

use colored::Colorize;
use dialoguer::{Confirm, Input, Select};
use kgen_meta::{
    Configuration, Environment, EnvironmentSelection, ImageTags, IngressTarget, PartialConfig,
    PartialIngress, parse_positive,
};

use crate::error::{CliError, Result};

/// Environment choices, in the order shown.
const ENVIRONMENTS: &[EnvironmentSelection] = &[
    EnvironmentSelection::None,
    EnvironmentSelection::Staging,
    EnvironmentSelection::Production,
    EnvironmentSelection::Both,
];

fn prompt_required(prompt: &str) -> Result<String> {
    Ok(Input::<String>::new()
        .with_prompt(prompt)
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err("a value is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?)
}

fn prompt_optional(prompt: &str) -> Result<Option<String>> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    let value = value.trim();
    Ok((!value.is_empty()).then(|| value.to_string()))
}

fn prompt_positive<T>(prompt: &str, field: &'static str, default: T) -> Result<T>
where
    T: std::str::FromStr + Default + PartialEq + ToString,
{
    let raw: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|value: &String| {
            parse_positive::<T>(field, value)
                .map(|_| ())
                .map_err(|e| e.to_string())
        })
        .interact_text()?;
    Ok(parse_positive(field, &raw)?)
}

fn fill_missing(mut partial: PartialConfig) -> Result<PartialConfig> {
    println!();

    if partial.app_name.is_none() {
        partial.app_name = Some(prompt_required("Application name")?);
    }
    if partial.image_repository.is_none() {
        partial.image_repository = Some(prompt_required("Image repository")?);
    }

    if partial.environment.is_none() {
        let labels: Vec<String> = ENVIRONMENTS.iter().map(ToString::to_string).collect();
        let idx = Select::new()
            .with_prompt("Target environment")
            .items(&labels)
            .default(0)
            .interact()?;
        partial.environment = Some(ENVIRONMENTS[idx]);
    }

    if partial.environment_or_default().is_dual() {
        if partial.image_tag_staging.is_none() && partial.image_tag.is_none() {
            partial.image_tag_staging = Some(prompt_required("Staging image tag")?);
        }
        if partial.image_tag_production.is_none() && partial.image_tag.is_none() {
            partial.image_tag_production = Some(prompt_required("Production image tag")?);
        }
    } else if partial.image_tag.is_none() {
        partial.image_tag = Some(prompt_required("Image tag")?);
    }

    if partial.container_port.is_none() {
        partial.container_port = Some(prompt_positive(
            "Container port",
            "container_port",
            kgen_meta::config::DEFAULT_CONTAINER_PORT,
        )?);
    }
    if partial.replicas.is_none() {
        partial.replicas = Some(prompt_positive(
            "Replicas",
            "replicas",
            kgen_meta::config::DEFAULT_REPLICAS,
        )?);
    }

    let ingress = &partial.ingress;
    let has_host =
        ingress.host.is_some() || ingress.staging_host.is_some() || ingress.production_host.is_some();
    let enabled = ingress.enabled;
    let wanted = match enabled {
        Some(enabled) => enabled,
        None if has_host => true,
        None => {
            let wanted = Confirm::new()
                .with_prompt("Expose the application through an Ingress?")
                .default(false)
                .interact()?;
            partial.ingress.enabled = Some(wanted);
            wanted
        }
    };
    if wanted {
        let dual = partial.environment_or_default().is_dual();
        fill_ingress(&mut partial.ingress, dual)?;
    }

    Ok(partial)
}

/// Ask for whichever ingress hosts and TLS secrets are still unset.
///
/// When generating both environments each one gets its own host and secret,
/// unless a shared host was already given.
fn fill_ingress(ingress: &mut PartialIngress, dual: bool) -> Result<()> {
    if ingress.host.is_some() {
        return Ok(());
    }
    if !dual {
        if ingress.staging_host.is_some() || ingress.production_host.is_some() {
            return Ok(());
        }
        ingress.host = Some(prompt_required("Ingress host")?);
        if ingress.tls_secret.is_none() {
            ingress.tls_secret = prompt_optional("TLS secret (empty for none)")?;
        }
        return Ok(());
    }

    if ingress.staging_host.is_none() {
        ingress.staging_host = Some(prompt_required("Staging ingress host")?);
    }
    if ingress.staging_tls_secret.is_none() {
        ingress.staging_tls_secret = prompt_optional("Staging TLS secret (empty for none)")?;
    }
    if ingress.production_host.is_none() {
        ingress.production_host = Some(prompt_required("Production ingress host")?);
    }
    if ingress.production_tls_secret.is_none() {
        ingress.production_tls_secret =
            prompt_optional("Production TLS secret (empty for none)")?;
    }
    Ok(())
}

fn describe_target(target: &IngressTarget) -> String {
    match (&target.host, &target.tls_secret) {
        (Some(host), Some(secret)) => format!("{host} (TLS: {secret})"),
        (Some(host), None) => host.clone(),
        (None, _) => "(none)".to_string(),
    }
}

/// Labelled values shown in the confirmation summary.
pub fn summary(config: &Configuration) -> Vec<(&'static str, String)> {
    let image = match config.image_tags() {
        ImageTags::Single(tag) => format!("{}:{}", config.image_repository(), tag),
        ImageTags::PerEnvironment {
            staging,
            production,
        } => format!(
            "{repo}:{staging} (staging), {repo}:{production} (production)",
            repo = config.image_repository()
        ),
    };
    let mut lines = vec![
        ("Application", config.app_name().to_string()),
        ("Image", image),
        ("Environment", config.environment().to_string()),
        ("Port", config.container_port().to_string()),
        ("Replicas", config.replicas().to_string()),
    ];

    let ingress = config.ingress();
    let environment = config.environment();
    if !ingress.enabled {
        lines.push(("Ingress", "(none)".to_string()));
    } else if environment.is_dual() {
        for env in Environment::ALL {
            let label = match env {
                Environment::Staging => "Staging ingress",
                Environment::Production => "Production ingress",
            };
            lines.push((label, describe_target(&ingress.target_for(Some(env)))));
        }
    } else {
        let target = ingress.target_for(environment.environments().first().copied());
        lines.push(("Ingress", describe_target(&target)));
    }
    lines
}

/// Prompt for missing values, validate, and confirm.
pub fn complete(partial: PartialConfig) -> Result<Configuration> {
    let config = fill_missing(partial)?.validate()?;

    println!();
    println!("{}", "Summary:".bold());
    for (label, value) in summary(&config) {
        println!("  {}: {}", label.dimmed(), value.cyan());
    }
    println!();

    let proceed = Confirm::new()
        .with_prompt("Proceed?")
        .default(true)
        .interact()?;

    if !proceed {
        return Err(CliError::user("Generation cancelled by user."));
    }
    Ok(config)
}
