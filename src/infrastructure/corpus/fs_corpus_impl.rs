use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;

use crate::application::ports::corpus_port::CorpusPort;

/// Corpus backed by a flat directory of published pages.
pub struct FsCorpus {
    root: PathBuf,
}

impl FsCorpus {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Joins `relative` onto the root, rejecting anything that could leave it.
    fn resolve(&self, relative: &str) -> Option<PathBuf> {
        let mut clean = PathBuf::new();
        for component in Path::new(relative).components() {
            match component {
                Component::Normal(part) => clean.push(part),
                Component::CurDir => continue,
                _ => return None,
            }
        }
        if clean.as_os_str().is_empty() {
            return None;
        }
        Some(self.root.join(clean))
    }
}

#[async_trait]
impl CorpusPort for FsCorpus {
    async fn list_filenames(&self) -> anyhow::Result<Vec<String>> {
        let mut dir = tokio::fs::read_dir(&self.root)
            .await
            .with_context(|| format!("read corpus dir {}", self.root.display()))?;
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            if entry.file_type().await?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!(name = ?raw, "corpus_skip_non_utf8_name"),
            }
        }
        Ok(names)
    }

    async fn read_page(&self, relative_path: &str) -> anyhow::Result<Option<String>> {
        let Some(path) = self.resolve(relative_path) else {
            return Ok(None);
        };
        match tokio::fs::read_to_string(&path).await {
            Ok(html) => Ok(Some(html)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read page {}", path.display())),
        }
    }
}
