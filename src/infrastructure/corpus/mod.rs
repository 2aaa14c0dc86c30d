mod fs_corpus_impl;
pub use fs_corpus_impl::*;
