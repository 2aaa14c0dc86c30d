use crate::application::ports::corpus_port::CorpusPort;
use crate::application::services::page_injection::inject_navigation;

#[derive(thiserror::Error, Debug)]
pub enum PageError {
    #[error("failed to read page")]
    Read(#[source] anyhow::Error),
}

pub struct RenderPage<'a, C: CorpusPort + ?Sized> {
    pub corpus: &'a C,
}

impl<'a, C: CorpusPort + ?Sized> RenderPage<'a, C> {
    /// `request_path` is the raw (percent-encoded) URI path. `/` maps to
    /// `index.html`. `Ok(None)` when the corpus has no such page.
    pub async fn execute(&self, request_path: &str) -> Result<Option<String>, PageError> {
        let decoded = urlencoding::decode(request_path)
            .map(|p| p.into_owned())
            .unwrap_or_else(|_| request_path.to_string());
        let relative = match decoded.trim_start_matches('/') {
            "" => "index.html",
            rest => rest,
        };
        let Some(html) = self
            .corpus
            .read_page(relative)
            .await
            .map_err(PageError::Read)?
        else {
            return Ok(None);
        };
        Ok(Some(inject_navigation(&html).into_owned()))
    }
}
