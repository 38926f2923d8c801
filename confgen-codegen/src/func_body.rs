//! Regeneration of `// <word> config func` bodies.

use std::path::Path;

use confgen_config::ConfigEntry;
use confgen_core::{GoTypeMapper, TypeMapper};

use crate::{
    CodeBuilder, Error, Result,
    error::emitted_kind,
    syntax::Layout,
};

/// Where the generated code will look for its config file at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderPath {
    name: String,
    format: String,
    dir: String,
}

impl LoaderPath {
    /// Split a config path into base name, format and search directory.
    ///
    /// The name drops only the final extension. A bare file name searches
    /// the working directory (`.`).
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_string_lossy().into_owned(),
            _ => ".".to_string(),
        };

        Self { name, format, dir }
    }
}

/// Rebuilds a function body into a viper load-and-assign sequence.
///
/// The body creates its own loader on every call, points it at the
/// [`LoaderPath`], panics if reading fails, then assigns every entry to its
/// generated variable through the kind's typed getter.
#[derive(Debug, Clone)]
pub struct FuncBodySynthesizer {
    path: LoaderPath,
    mapper: GoTypeMapper,
}

impl FuncBodySynthesizer {
    pub fn new(path: LoaderPath) -> Self {
        Self {
            path,
            mapper: GoTypeMapper,
        }
    }

    /// Replacement text for the interior of a body whose function starts in
    /// `layout`.
    pub fn synthesize(&self, layout: &Layout, entries: &[ConfigEntry]) -> Result<String> {
        let builder = CodeBuilder::go()
            .with_prefix(format!("{}\t", layout.indent))
            .with_newline(layout.newline);
        let body = self.render(builder, entries)?;
        Ok(format!("{}{body}{}", layout.newline, layout.indent))
    }

    /// Body statements.
    fn render(&self, builder: CodeBuilder, entries: &[ConfigEntry]) -> Result<String> {
        let assignments = entries
            .iter()
            .map(|entry| {
                let kind = emitted_kind(entry)?;
                let getter = self
                    .mapper
                    .getter_name(kind)
                    .ok_or_else(|| Error::Ambiguous {
                        key: entry.key().to_string(),
                        kind,
                    })?;
                Ok(format!(
                    "{} = v.{}({})",
                    entry.identifier(),
                    getter,
                    quote(entry.key())
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(builder
            .line("v := viper.New()")
            .line(&format!("v.SetConfigName({})", raw_quote(&self.path.name)))
            .line(&format!("v.SetConfigType({})", raw_quote(&self.path.format)))
            .line(&format!("v.AddConfigPath({})", raw_quote(&self.path.dir)))
            .line("err := v.ReadInConfig()")
            .block_with_close("if err != nil {", "}", |b| b.line("panic(err)"))
            .each(&assignments, |b, stmt| b.line(stmt))
            .build())
    }
}

/// Go interpreted string literal.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Go raw string literal, or an interpreted one when the text can't be raw.
fn raw_quote(s: &str) -> String {
    if s.contains(['`', '\r']) {
        quote(s)
    } else {
        format!("`{s}`")
    }
}
