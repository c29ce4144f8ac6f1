//! Post generation from sentence fragments.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use super::UserId;
use crate::config::SimulationConfig;
use crate::simulator::SimulationError;
use crate::sources::SentenceSource;

/// Number of sentences requested from the source for every post.
pub const SENTENCE_POOL_SIZE: usize = 10;

/// A post written by one user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedPost {
    pub author: UserId,
    pub sentence: String,
}

impl fmt::Display for GeneratedPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Post by user {} - {}", self.author, self.sentence)
    }
}

/// Generates posts whose content is picked from a sentence source.
pub struct PostGenerator {
    max_posts_per_user: usize,
}

impl PostGenerator {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            max_posts_per_user: config.max_posts_per_user(),
        }
    }

    /// Generates between 1 and `max_posts_per_user` posts for `author`.
    ///
    /// Every post fetches a fresh sentence pool. An empty pool aborts the whole
    /// batch with [`SimulationError::DataUnavailable`].
    pub async fn generate<S>(
        &self,
        author: UserId,
        source: &S,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedPost>, SimulationError>
    where
        S: SentenceSource + ?Sized,
    {
        let num_posts = rng.gen_range(1..=self.max_posts_per_user);
        let mut posts = Vec::with_capacity(num_posts);

        for _ in 0..num_posts {
            let sentence = random_sentence(source, rng)
                .await
                .ok_or(SimulationError::DataUnavailable { author })?;

            posts.push(GeneratedPost { author, sentence });
        }

        Ok(posts)
    }
}

/// Picks one sentence uniformly from a freshly fetched pool.
async fn random_sentence<S>(source: &S, rng: &mut impl Rng) -> Option<String>
where
    S: SentenceSource + ?Sized,
{
    let pool = source.fetch(SENTENCE_POOL_SIZE).await;
    pool.choose(rng).cloned()
}
