//! Applying both synthesizers to every marked target of a source file.

use confgen_config::ConfigEntry;

use crate::{
    Result,
    func_body::{FuncBodySynthesizer, LoaderPath},
    scanner::{MarkerScanner, TargetKind},
    syntax::GoSource,
    vars::VarBlockSynthesizer,
};

/// What a generation pass rewrote.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of var groups regenerated.
    pub vars_blocks: usize,
    /// Names of the functions whose bodies were regenerated.
    pub config_funcs: Vec<String>,
}

impl GenerationSummary {
    /// Whether nothing in the source carried a marker.
    pub fn is_empty(&self) -> bool {
        self.vars_blocks == 0 && self.config_funcs.is_empty()
    }
}

/// Regenerates the marked regions of Go sources from config entries.
pub struct Generator<'a> {
    entries: &'a [ConfigEntry],
    scanner: MarkerScanner,
    vars: VarBlockSynthesizer,
    func: FuncBodySynthesizer,
}

impl<'a> Generator<'a> {
    /// Create a generator for `entries` whose config funcs load from
    /// `loader_path` at runtime.
    pub fn new(entries: &'a [ConfigEntry], loader_path: LoaderPath) -> Self {
        Self {
            entries,
            scanner: MarkerScanner::new(),
            vars: VarBlockSynthesizer::new(),
            func: FuncBodySynthesizer::new(loader_path),
        }
    }

    /// Rewrite every marked target in `source`.
    ///
    /// All replacement text is synthesized before any of it is recorded, so
    /// on error the source is left unedited. Sources without markers are a
    /// silent no-op.
    pub fn generate(&self, source: &mut GoSource) -> Result<GenerationSummary> {
        let targets = self.scanner.scan(source);
        let mut summary = GenerationSummary::default();
        let mut edits = Vec::with_capacity(targets.len());

        for target in targets {
            let text = match target.kind {
                TargetKind::VarsBlock => {
                    summary.vars_blocks += 1;
                    self.vars.synthesize(&target.layout, self.entries)?
                }
                TargetKind::ConfigFunc { name } => {
                    summary.config_funcs.push(name);
                    self.func.synthesize(&target.layout, self.entries)?
                }
            };
            tracing::trace!(line = target.line, bytes = text.len(), "synthesized target");
            edits.push((target.inner, text));
        }

        for (range, text) in edits {
            source.replace(range, text);
        }

        tracing::info!(
            origin = source.origin(),
            vars_blocks = summary.vars_blocks,
            config_funcs = summary.config_funcs.len(),
            "regenerated source"
        );
        Ok(summary)
    }
}
