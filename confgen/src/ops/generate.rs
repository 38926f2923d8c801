//! Generate operation - regenerate a Go file from a config file.

use std::path::{Path, PathBuf};

use confgen_codegen::{GenerationSummary, Generator, GoSource, LoaderPath};
use confgen_config::ConfigSet;
use confgen_core::TargetFile;
use eyre::{Context, Result};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Config file read during this run.
    pub config: &'a Path,
    /// Go file regenerated in place.
    pub target: &'a Path,
    /// Config path baked into generated functions, if not `config`.
    pub target_config: Option<&'a Path>,
    /// Whether to skip writing the target.
    pub dry_run: bool,
}

/// Report data from one run.
#[derive(Debug)]
pub struct GenerateReport {
    pub target: PathBuf,
    /// Number of flattened config entries.
    pub entries: usize,
    pub summary: GenerationSummary,
    /// The regenerated source.
    pub output: String,
    /// Whether the target was overwritten.
    pub written: bool,
}

impl GenerateReport {
    pub fn log(&self) {
        if self.summary.is_empty() {
            tracing::info!(path = %self.target.display(), "no markers found");
            return;
        }
        tracing::info!(
            path = %self.target.display(),
            entries = self.entries,
            vars_blocks = self.summary.vars_blocks,
            config_funcs = ?self.summary.config_funcs,
            written = self.written,
            "generation complete"
        );
    }
}

/// Execute the generate operation.
///
/// Loads the config, parses the target, rewrites every marked region and
/// overwrites the target (unless `dry_run`). Any failure aborts before the
/// target is opened for writing, except a failure of the write itself.
pub fn generate(opts: GenerateOptions<'_>) -> Result<GenerateReport> {
    let config = ConfigSet::load(opts.config)?;

    let text = std::fs::read_to_string(opts.target)
        .wrap_err_with(|| format!("failed to read '{}'", opts.target.display()))?;
    let mut source = GoSource::parse(text, opts.target.display().to_string())?;

    let loader_path = LoaderPath::new(opts.target_config.unwrap_or(opts.config));
    let summary = Generator::new(config.entries(), loader_path).generate(&mut source)?;
    let output = source.print();

    if !opts.dry_run {
        TargetFile::new(opts.target, output.as_str()).write()?;
    }

    Ok(GenerateReport {
        target: opts.target.to_path_buf(),
        entries: config.len(),
        summary,
        output,
        written: !opts.dry_run,
    })
}
