use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::error::CarouselResult;

/// Host boundary that turns a rendered JPEG into a saved file.
pub trait DownloadSink {
    /// Persist `jpeg` under the suggested `file_name`.
    fn save(&mut self, file_name: &str, jpeg: &[u8]) -> CarouselResult<()>;
}

#[derive(Clone, Debug)]
/// Sink writing each export into a directory on disk.
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    /// Create a sink rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> CarouselResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .with_context(|| format!("create export directory '{}'", root.display()))?;
        Ok(Self { root })
    }

    /// Directory exports are written into.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DownloadSink for DirSink {
    fn save(&mut self, file_name: &str, jpeg: &[u8]) -> CarouselResult<()> {
        let path = self.root.join(file_name);
        std::fs::write(&path, jpeg)
            .with_context(|| format!("write export '{}'", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/sink.rs"]
mod tests;
