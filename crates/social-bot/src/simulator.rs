//! Orchestration of a full simulation run.

use std::collections::HashMap;
use std::time::Instant;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::{ConfigurationError, SimulationConfig};
use crate::generators::{
    GeneratedLike, GeneratedPost, LikeGenerator, PostGenerator, UserGenerator, UserId,
};
use crate::sources::SentenceSource;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("No sentences available for a post by user {author}")]
    DataUnavailable { author: UserId },
}

/// Everything produced by one run.
#[derive(Debug, Clone, Default)]
pub struct SimulationReport {
    pub users: Vec<UserId>,
    pub posts: Vec<GeneratedPost>,
    pub likes: Vec<GeneratedLike>,
}

/// Signs up users, has them post, and simulates likes.
///
/// # Example
///
/// ```rust,ignore
/// let simulator = ActivitySimulator::new(config, StaticSentences::new(["hello there"]));
/// let report = simulator.simulate(&mut rng).await?;
/// ```
pub struct ActivitySimulator<S> {
    config: SimulationConfig,
    sentences: S,
    users: UserGenerator,
    posts: PostGenerator,
    likes: LikeGenerator,
}

impl<S: SentenceSource> ActivitySimulator<S> {
    /// Creates a simulator from an already validated configuration.
    pub fn new(config: SimulationConfig, sentences: S) -> Self {
        Self {
            users: UserGenerator::new(&config),
            posts: PostGenerator::new(&config),
            likes: LikeGenerator::new(&config),
            config,
            sentences,
        }
    }

    /// Validates a raw key/value configuration and creates a simulator.
    pub fn from_raw<K, V>(raw: &HashMap<K, V>, sentences: S) -> Result<Self, ConfigurationError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        Ok(Self::new(SimulationConfig::from_raw(raw)?, sentences))
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn signup_users(&self) -> Vec<UserId> {
        self.users.signup()
    }

    pub async fn create_posts(
        &self,
        user: UserId,
        rng: &mut impl Rng,
    ) -> Result<Vec<GeneratedPost>, SimulationError> {
        self.posts.generate(user, &self.sentences, rng).await
    }

    pub fn like_posts(&self, posts: &[GeneratedPost], rng: &mut impl Rng) -> Vec<GeneratedLike> {
        self.likes.generate(posts, rng)
    }

    /// Runs signup, post creation in user order, and like simulation.
    pub async fn simulate(&self, rng: &mut impl Rng) -> Result<SimulationReport, SimulationError> {
        let start = Instant::now();

        let users = self.signup_users();
        let mut posts = Vec::new();

        for &user in &users {
            posts.extend(self.create_posts(user, rng).await?);
        }

        let likes = self.like_posts(&posts, rng);

        debug!(
            users = users.len(),
            posts = posts.len(),
            likes = likes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Simulation finished"
        );

        Ok(SimulationReport {
            users,
            posts,
            likes,
        })
    }

    /// Runs the simulation and logs its results.
    ///
    /// Failures are logged at error level and never propagated; `None` means the
    /// run was aborted.
    pub async fn run(&self, rng: &mut impl Rng) -> Option<SimulationReport> {
        match self.simulate(rng).await {
            Ok(report) => {
                let posts: Vec<String> = report.posts.iter().map(ToString::to_string).collect();
                let likes: Vec<String> = report.likes.iter().map(ToString::to_string).collect();

                info!("Signed up users: {:?}", report.users);
                info!("Created posts: {:?}", posts);
                info!("Likes: {:?}", likes);

                Some(report)
            }
            Err(e) => {
                error!("Error during bot execution: {e}");
                None
            }
        }
    }
}
