//! User signup.

use crate::config::SimulationConfig;

/// Sequential user identifier, starting at 1.
pub type UserId = usize;

/// Signs up a fixed number of users.
pub struct UserGenerator {
    number_of_users: usize,
}

impl UserGenerator {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            number_of_users: config.number_of_users(),
        }
    }

    /// Returns the ids `1..=number_of_users` in increasing order.
    pub fn signup(&self) -> Vec<UserId> {
        (1..=self.number_of_users).collect()
    }
}
