//! Sentence sources for post generation.
//!
//! This module provides the ways to obtain sentence fragments:
//! - [`WebSentenceSource`]: Scrape phrases from a web page
//! - [`StaticSentences`]: Serve a fixed, in-memory list

mod fixed;
mod web;

use async_trait::async_trait;

pub use fixed::StaticSentences;
pub use web::{DEFAULT_SENTENCES_URL, SourceError, WebSentenceSource, extract_sentences};

/// Supplies batches of short text fragments.
///
/// Implementations never fail: when nothing can be fetched they return an empty
/// vector and callers decide what "no sentences" means for them.
#[async_trait]
pub trait SentenceSource: Send + Sync {
    /// Returns at most `limit` fragments in source order.
    async fn fetch(&self, limit: usize) -> Vec<String>;
}

#[async_trait]
impl<T: SentenceSource + ?Sized> SentenceSource for Box<T> {
    async fn fetch(&self, limit: usize) -> Vec<String> {
        (**self).fetch(limit).await
    }
}
