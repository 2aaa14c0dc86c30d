use crate::application::ports::corpus_port::CorpusPort;
use crate::application::services::navigation::find_random;
use crate::application::use_cases::navigation::NavigationError;
use crate::domain::documents::kdoc::DocumentEntry;

pub struct RandomPage<'a, C: CorpusPort + ?Sized> {
    pub corpus: &'a C,
}

impl<'a, C: CorpusPort + ?Sized> RandomPage<'a, C> {
    /// Ignores the draft filter: every page with an id is a candidate.
    pub async fn execute(&self) -> Result<Option<DocumentEntry>, NavigationError> {
        let files = self
            .corpus
            .list_filenames()
            .await
            .map_err(NavigationError::Listing)?;
        let mut rng = rand::thread_rng();
        Ok(find_random(&files, &mut rng))
    }
}
