use crate::application::ports::corpus_port::CorpusPort;
use crate::application::services::navigation::{build_index, find_by_id};
use crate::application::use_cases::navigation::NavigationError;
use crate::domain::documents::kdoc::{DocumentEntry, DocumentId};

pub struct FindPage<'a, C: CorpusPort + ?Sized> {
    pub corpus: &'a C,
}

impl<'a, C: CorpusPort + ?Sized> FindPage<'a, C> {
    pub async fn execute(&self, id: DocumentId) -> Result<Option<DocumentEntry>, NavigationError> {
        let files = self
            .corpus
            .list_filenames()
            .await
            .map_err(NavigationError::Listing)?;
        let index = build_index(&files, false);
        Ok(find_by_id(&index, id).cloned())
    }
}
