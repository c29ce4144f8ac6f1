//! Fixed in-memory sentence source.

use async_trait::async_trait;

use super::SentenceSource;

/// Serves the same list of sentences on every call.
#[derive(Debug, Clone, Default)]
pub struct StaticSentences {
    sentences: Vec<String>,
}

impl StaticSentences {
    pub fn new<I, S>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sentences: sentences.into_iter().map(Into::into).collect(),
        }
    }

    /// A source with nothing to offer.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SentenceSource for StaticSentences {
    async fn fetch(&self, limit: usize) -> Vec<String> {
        self.sentences.iter().take(limit).cloned().collect()
    }
}
