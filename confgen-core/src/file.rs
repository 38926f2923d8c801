use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// A regenerated target file waiting to be written back in place.
pub struct TargetFile {
    path: PathBuf,
    content: String,
}

impl TargetFile {
    /// Create a new target file with the given path and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Overwrite the existing file with the content.
    ///
    /// The file must already exist. It is truncated before the write, so a
    /// failure part-way through can leave it empty.
    pub fn write(&self) -> Result<()> {
        overwrite_file(&self.path, &self.content)
            .wrap_err_with(|| format!("failed to write '{}'", self.path.display()))?;
        tracing::info!(path = %self.path.display(), bytes = self.content.len(), "wrote target");
        Ok(())
    }
}

fn overwrite_file(path: &Path, content: &str) -> Result<()> {
    let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(())
}
