use crate::application::ports::corpus_port::CorpusPort;
use crate::application::services::navigation::{build_index, find_next};
use crate::application::use_cases::navigation::NavigationError;
use crate::domain::documents::kdoc::{DocumentEntry, extract_id};

pub struct NextPage<'a, C: CorpusPort + ?Sized> {
    pub corpus: &'a C,
}

impl<'a, C: CorpusPort + ?Sized> NextPage<'a, C> {
    /// `current` is the filename (or path) of the page being viewed. When it
    /// carries no id there is nothing to navigate from and the corpus is not read.
    pub async fn execute(
        &self,
        current: &str,
        draft_only: bool,
    ) -> Result<Option<DocumentEntry>, NavigationError> {
        let Some(current_id) = extract_id(current) else {
            return Ok(None);
        };
        let files = self
            .corpus
            .list_filenames()
            .await
            .map_err(NavigationError::Listing)?;
        let index = build_index(&files, draft_only);
        Ok(find_next(&index, current_id).cloned())
    }
}
