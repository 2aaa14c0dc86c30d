use async_trait::async_trait;

/// Read-only view of the KDOC corpus directory.
#[async_trait]
pub trait CorpusPort: Send + Sync {
    /// Names of the files at the corpus root, in whatever order the backing store lists them.
    async fn list_filenames(&self) -> anyhow::Result<Vec<String>>;

    /// Reads a page by its path relative to the corpus root.
    /// `Ok(None)` when the page does not exist or the path escapes the corpus.
    async fn read_page(&self, relative_path: &str) -> anyhow::Result<Option<String>>;
}
