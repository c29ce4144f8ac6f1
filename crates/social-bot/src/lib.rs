//! Synthetic social activity for social-bot.
//!
//! This crate signs up a configurable number of users, has each of them write a
//! random number of posts built from scraped sentence fragments, and simulates
//! other users liking those posts.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rand::{SeedableRng, rngs::StdRng};
//! use social_bot::prelude::*;
//!
//! let config = SimulationConfig::from_ini_file("config.ini")?;
//! let simulator = ActivitySimulator::new(config, WebSentenceSource::new()?);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let report = simulator.simulate(&mut rng).await?;
//! ```

pub mod config;
pub mod generators;
pub mod simulator;
pub mod sources;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{ConfigurationError, SimulationConfig};
    pub use crate::generators::{
        GeneratedLike, GeneratedPost, LikeGenerator, PostGenerator, UserGenerator, UserId,
    };
    pub use crate::simulator::{ActivitySimulator, SimulationError, SimulationReport};
    pub use crate::sources::{SentenceSource, StaticSentences, WebSentenceSource};
}
