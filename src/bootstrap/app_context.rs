use std::sync::Arc;

use crate::application::ports::corpus_port::CorpusPort;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    corpus: Arc<dyn CorpusPort>,
}

impl AppServices {
    pub fn new(corpus: Arc<dyn CorpusPort>) -> Self {
        Self { corpus }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn corpus(&self) -> Arc<dyn CorpusPort> {
        self.services.corpus.clone()
    }
}
