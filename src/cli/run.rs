use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;

use super::{args::Arguments, exit_status::ExitStatus};
use crate::config::load_config;
use crate::core::{ScanContext, extract::ExtractorRegistry};
use crate::report::{Format, Report, build_report, render};

/// Everything the console narration needs after a run.
pub struct RunOutcome {
    pub ctx: ScanContext,
    pub report: Report,
    pub output_path: PathBuf,
    pub config_path: Option<PathBuf>,
    pub strict: bool,
}

impl RunOutcome {
    pub fn exit_status(&self) -> ExitStatus {
        if self.strict && !self.report.missing.is_empty() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

/// Scan, reconcile, build the report and write it to disk.
pub fn run(args: &Arguments) -> Result<RunOutcome> {
    ScanContext::ensure_root(&args.scan)?;

    let loaded = load_config(&args.scan)?;
    let mut config = loaded.config;
    if let Some(locale) = &args.default_locale {
        config.default_locale = locale.clone();
    }
    config.validate()?;

    let output_path = args.output_path();
    let mut ignores = config.ignores.clone();
    ignores.extend(own_file_ignores(&args.scan, &output_path, loaded.path.as_deref()));

    let registry = ExtractorRegistry::default();
    let ctx = ScanContext::scan(&args.scan, &ignores, &registry)?;
    let reconciliation = ctx.reconcile();
    let suggestions = args
        .fix
        .then(|| ctx.suggest(&reconciliation, &config.default_locale));
    let report = build_report(&ctx, &reconciliation, suggestions.as_ref(), &registry);

    let rendered = render(&report, args.format)?;
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(&output_path, rendered)
        .with_context(|| format!("Failed to write report to {}", output_path.display()))?;

    Ok(RunOutcome {
        ctx,
        report,
        output_path,
        config_path: loaded.path,
        strict: args.strict,
    })
}

/// Root-relative ignores for the files keyscan writes or reads itself: the
/// output path, the default report of every format and the config file.
fn own_file_ignores(root: &Path, output_path: &Path, config_path: Option<&Path>) -> Vec<String> {
    let default_outputs = Format::value_variants()
        .iter()
        .map(|format| PathBuf::from(format.default_output()));

    default_outputs
        .chain([output_path.to_path_buf()])
        .chain(config_path.map(Path::to_path_buf))
        .filter_map(|path| root_relative(root, &path))
        .collect()
}

/// Path of `file` relative to `root`, if it lies inside it. `file` itself
/// does not need to exist yet.
fn root_relative(root: &Path, file: &Path) -> Option<String> {
    let root = fs::canonicalize(root).ok()?;
    let file_name = file.file_name()?;
    let parent = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = fs::canonicalize(parent).ok()?.join(file_name);
    let relative = file.strip_prefix(&root).ok()?;
    Some(relative.to_string_lossy().into_owned())
}
