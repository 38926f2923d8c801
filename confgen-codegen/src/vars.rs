//! Regeneration of `// config vars` groups.

use confgen_config::ConfigEntry;
use confgen_core::{GoTypeMapper, TypeMapper};

use crate::{
    CodeBuilder, Error, Result,
    error::emitted_kind,
    syntax::Layout,
};

/// Rebuilds a var group as one declaration per config entry.
///
/// Names are the uppercased keys and types are the canonical Go types of the
/// entries' kinds, aligned in a column the way gofmt lays out a group.
#[derive(Debug, Clone, Default)]
pub struct VarBlockSynthesizer {
    mapper: GoTypeMapper,
}

impl VarBlockSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replacement text for the interior of a group whose `var` keyword
    /// sits in `layout`.
    ///
    /// An empty entry list still yields a well-formed `var (\n)` group.
    pub fn synthesize(&self, layout: &Layout, entries: &[ConfigEntry]) -> Result<String> {
        let builder = CodeBuilder::go()
            .with_prefix(format!("{}\t", layout.indent))
            .with_newline(layout.newline);
        let specs = self.render(builder, entries)?;
        Ok(format!("{}{specs}{}", layout.newline, layout.indent))
    }

    /// One `NAME type` line per entry.
    fn render(&self, builder: CodeBuilder, entries: &[ConfigEntry]) -> Result<String> {
        let specs = entries
            .iter()
            .map(|entry| {
                let kind = emitted_kind(entry)?;
                let ty = self.mapper.type_name(kind).ok_or_else(|| Error::Ambiguous {
                    key: entry.key().to_string(),
                    kind,
                })?;
                Ok((entry.identifier(), ty))
            })
            .collect::<Result<Vec<_>>>()?;

        let width = specs
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);

        Ok(builder
            .each(&specs, |b, (name, ty)| {
                b.line(&format!("{name:<width$} {ty}"))
            })
            .build())
    }
}
