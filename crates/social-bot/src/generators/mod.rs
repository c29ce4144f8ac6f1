//! Entity generators for the simulation.
//!
//! This module provides generators for the synthetic entities of one run:
//! - [`UserGenerator`]: Sign up users with sequential ids
//! - [`PostGenerator`]: Write posts from fetched sentence fragments
//! - [`LikeGenerator`]: Have distinct users like each post

pub mod like;
pub mod post;
pub mod user;

pub use like::{GeneratedLike, LikeGenerator};
pub use post::{GeneratedPost, PostGenerator, SENTENCE_POOL_SIZE};
pub use user::{UserGenerator, UserId};
