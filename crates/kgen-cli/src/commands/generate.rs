//! The `generate` command

use std::path::{Path, PathBuf};

use colored::Colorize;
use kgen_fs::OutputPath;
use kgen_manifest::{ManifestSet, plan, to_yaml_stream};
use kgen_meta::{Configuration, PartialConfig, loader};

use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::interactive;
use crate::output::{ManifestWriter, WriteStatus};

/// Config-file layer: `--config` when given, otherwise a discovered default.
fn file_layer(cwd: &Path, explicit: Option<&Path>) -> Result<PartialConfig> {
    let path = match explicit {
        Some(path) => Some(cwd.join(path)),
        None => loader::discover(cwd),
    };
    match path {
        Some(path) => Ok(loader::load_partial(&path)?),
        None => Ok(PartialConfig::default()),
    }
}

/// Merge config file, flags and (optionally) prompts into a validated
/// configuration.
pub fn resolve_config(cwd: &Path, args: &GenerateArgs) -> Result<Configuration> {
    let merged = file_layer(cwd, args.config.as_deref())?.merge(args.to_partial()?);
    if args.interactive {
        interactive::complete(merged)
    } else {
        Ok(merged.validate()?)
    }
}

fn output_root(cwd: &Path, output: &Path) -> PathBuf {
    let joined = cwd.join(output);
    dunce::canonicalize(&joined).unwrap_or(joined)
}

fn print_set(set: &ManifestSet, writer: &ManifestWriter, dry_run: bool) -> Result<()> {
    let label = match set.context.name() {
        "" => set.relative_dir.display().to_string(),
        env => format!("{} ({})", set.relative_dir.display(), env),
    };
    println!("{} {}", "=>".blue().bold(), label);

    for outcome in writer.write_set(set)? {
        let marker = match (outcome.status, dry_run) {
            (WriteStatus::Created, false) => "+".green(),
            (WriteStatus::Updated, false) => "~".yellow(),
            (WriteStatus::Unchanged, _) => "=".dimmed(),
            (_, true) => "?".cyan(),
        };
        println!(
            "   {} {} {}",
            marker,
            outcome.path,
            format!("({})", outcome.status).dimmed()
        );
        if let Some(diff) = outcome.diff {
            print!("{}", diff);
        }
    }
    Ok(())
}

/// Run the generate command
pub fn run_generate(cwd: &Path, args: &GenerateArgs) -> Result<()> {
    let config = resolve_config(cwd, args)?;
    let sets = plan(&config);

    if args.stdout {
        for set in &sets {
            print!("{}", to_yaml_stream(set)?);
        }
        return Ok(());
    }

    let root = output_root(cwd, &args.output);
    let writer = ManifestWriter::new(OutputPath::root(&root))
        .dry_run(args.dry_run)
        .with_diff(args.diff);

    for set in &sets {
        print_set(set, &writer, args.dry_run)?;
    }

    let documents: usize = sets.iter().map(ManifestSet::len).sum();
    if args.dry_run {
        println!(
            "{} Dry run: {} manifests checked, nothing written.",
            "OK".green().bold(),
            documents
        );
    } else {
        println!(
            "{} Generated {} manifests in {}",
            "OK".green().bold(),
            documents,
            root.display()
        );
    }
    Ok(())
}
