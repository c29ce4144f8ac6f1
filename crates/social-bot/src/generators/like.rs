//! Like simulation.

use std::fmt;

use rand::Rng;

use super::{GeneratedPost, UserId};
use crate::config::SimulationConfig;

/// A user liking one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLike {
    pub user: UserId,
    pub post: GeneratedPost,
}

impl fmt::Display for GeneratedLike {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {} liked {}", self.user, self.post)
    }
}

/// Generates likes from the signed-up user population.
pub struct LikeGenerator {
    number_of_users: usize,
    max_likes_per_user: usize,
}

impl LikeGenerator {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            number_of_users: config.number_of_users(),
            max_likes_per_user: config.max_likes_per_user(),
        }
    }

    /// Largest number of likes a single post can receive.
    ///
    /// Likers are drawn without replacement, so the configured maximum is capped by
    /// the population size.
    pub fn max_likes_per_post(&self) -> usize {
        self.max_likes_per_user.min(self.number_of_users)
    }

    /// Generates likes for every post independently.
    ///
    /// Each post receives between 0 and [`Self::max_likes_per_post`] likes from
    /// pairwise distinct users. Authors may like their own posts.
    pub fn generate(&self, posts: &[GeneratedPost], rng: &mut impl Rng) -> Vec<GeneratedLike> {
        let max_likes = self.max_likes_per_post();
        let mut likes = Vec::new();

        for post in posts {
            let num_likes = rng.gen_range(0..=max_likes);
            let liked_by = rand::seq::index::sample(rng, self.number_of_users, num_likes);

            likes.extend(liked_by.into_iter().map(|idx| GeneratedLike {
                user: idx + 1,
                post: post.clone(),
            }));
        }

        likes
    }
}
