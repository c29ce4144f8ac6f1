//! Configuration types for the activity simulation.

use std::collections::HashMap;
use std::path::Path;

use config::{Config, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;

/// Name of the INI section holding the simulation settings.
pub const CONFIG_SECTION: &str = "CONFIG";

const NUMBER_OF_USERS: &str = "number_of_users";
const MAX_POSTS_PER_USER: &str = "max_posts_per_user";
const MAX_LIKES_PER_USER: &str = "max_likes_per_user";

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Missing [{0}] section")]
    MissingSection(&'static str),
    #[error("Missing key '{0}'")]
    MissingKey(&'static str),
    #[error("Value of '{key}' is not an integer: {value:?}")]
    NotAnInteger { key: &'static str, value: String },
    #[error("Value of '{key}' must be a positive integer, got {value}")]
    NotPositive { key: &'static str, value: i64 },
    #[error("Value of '{key}' must not be negative, got {value}")]
    Negative { key: &'static str, value: i64 },
}

/// Validated settings for one simulation run.
///
/// Deserializing goes through the same checks as [`SimulationConfig::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "HashMap<String, String>")]
pub struct SimulationConfig {
    number_of_users: usize,
    max_posts_per_user: usize,
    max_likes_per_user: usize,
}

impl SimulationConfig {
    /// Creates a config; `number_of_users` and `max_posts_per_user` must be non-zero.
    pub fn new(
        number_of_users: usize,
        max_posts_per_user: usize,
        max_likes_per_user: usize,
    ) -> Result<Self, ConfigurationError> {
        if number_of_users == 0 {
            return Err(ConfigurationError::NotPositive {
                key: NUMBER_OF_USERS,
                value: 0,
            });
        }
        if max_posts_per_user == 0 {
            return Err(ConfigurationError::NotPositive {
                key: MAX_POSTS_PER_USER,
                value: 0,
            });
        }

        Ok(Self {
            number_of_users,
            max_posts_per_user,
            max_likes_per_user,
        })
    }

    /// Number of users to sign up. Always at least 1.
    pub fn number_of_users(&self) -> usize {
        self.number_of_users
    }

    /// Upper bound (inclusive) of posts written by each user. Always at least 1.
    pub fn max_posts_per_user(&self) -> usize {
        self.max_posts_per_user
    }

    /// Upper bound (inclusive) of likes each post receives.
    pub fn max_likes_per_user(&self) -> usize {
        self.max_likes_per_user
    }

    /// Validates a raw key/value mapping.
    ///
    /// Keys are matched case-insensitively and values are parsed as integers after
    /// trimming surrounding whitespace. `number_of_users` and `max_posts_per_user`
    /// must be strictly positive; `max_likes_per_user` may be zero.
    pub fn from_raw<K, V>(raw: &HashMap<K, V>) -> Result<Self, ConfigurationError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let number_of_users = positive(NUMBER_OF_USERS, integer(raw, NUMBER_OF_USERS)?)?;
        let max_posts_per_user = positive(MAX_POSTS_PER_USER, integer(raw, MAX_POSTS_PER_USER)?)?;
        let max_likes_per_user =
            non_negative(MAX_LIKES_PER_USER, integer(raw, MAX_LIKES_PER_USER)?)?;

        Self::new(number_of_users, max_posts_per_user, max_likes_per_user)
    }

    /// Reads and validates the `[CONFIG]` section of an INI file.
    pub fn from_ini_file(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Ini).required(true))
            .build()?;

        let section = settings
            .try_deserialize::<HashMap<String, config::Value>>()?
            .into_iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(CONFIG_SECTION))
            .map(|(_, value)| value)
            .ok_or(ConfigurationError::MissingSection(CONFIG_SECTION))?;

        let raw = section
            .into_table()?
            .into_iter()
            .map(|(key, value)| value.into_string().map(|value| (key, value)))
            .collect::<Result<HashMap<String, String>, config::ConfigError>>()?;

        tracing::debug!(path = %path.display(), "Loaded configuration file");

        Self::from_raw(&raw)
    }
}

impl TryFrom<HashMap<String, String>> for SimulationConfig {
    type Error = ConfigurationError;

    fn try_from(raw: HashMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_raw(&raw)
    }
}

fn integer<K, V>(raw: &HashMap<K, V>, key: &'static str) -> Result<i64, ConfigurationError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let value = raw
        .iter()
        .find(|(k, _)| k.as_ref().trim().eq_ignore_ascii_case(key))
        .map(|(_, v)| v.as_ref())
        .ok_or(ConfigurationError::MissingKey(key))?;

    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigurationError::NotAnInteger {
            key,
            value: value.to_string(),
        })
}

fn positive(key: &'static str, value: i64) -> Result<usize, ConfigurationError> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ConfigurationError::NotPositive { key, value }),
    }
}

fn non_negative(key: &'static str, value: i64) -> Result<usize, ConfigurationError> {
    usize::try_from(value).map_err(|_| ConfigurationError::Negative { key, value })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn raw(users: &str, posts: &str, likes: &str) -> HashMap<&'static str, String> {
        HashMap::from([
            (NUMBER_OF_USERS, users.to_string()),
            (MAX_POSTS_PER_USER, posts.to_string()),
            (MAX_LIKES_PER_USER, likes.to_string()),
        ])
    }

    #[test]
    fn test_valid_config() {
        let config = SimulationConfig::from_raw(&raw("10", "5", "3")).unwrap();

        assert_eq!(config.number_of_users(), 10);
        assert_eq!(config.max_posts_per_user(), 5);
        assert_eq!(config.max_likes_per_user(), 3);
    }

    #[test]
    fn test_values_are_trimmed() {
        let config = SimulationConfig::from_raw(&raw(" 4 ", "2\n", "\t1")).unwrap();
        assert_eq!(config.number_of_users(), 4);
        assert_eq!(config.max_posts_per_user(), 2);
        assert_eq!(config.max_likes_per_user(), 1);
    }

    #[test]
    fn test_missing_key() {
        let mut map = raw("10", "5", "3");
        map.remove(MAX_POSTS_PER_USER);

        let err = SimulationConfig::from_raw(&map).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::MissingKey(MAX_POSTS_PER_USER)
        ));
    }

    #[test]
    fn test_non_integer_value() {
        let err = SimulationConfig::from_raw(&raw("ten", "5", "3")).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NotAnInteger { key: NUMBER_OF_USERS, .. }
        ));

        let err = SimulationConfig::from_raw(&raw("10", "2.5", "3")).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NotAnInteger { key: MAX_POSTS_PER_USER, .. }
        ));
    }

    #[test]
    fn test_non_positive_users_and_posts() {
        let err = SimulationConfig::from_raw(&raw("0", "5", "3")).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NotPositive { key: NUMBER_OF_USERS, value: 0 }
        ));

        let err = SimulationConfig::from_raw(&raw("10", "-2", "3")).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::NotPositive { key: MAX_POSTS_PER_USER, value: -2 }
        ));
    }

    #[test]
    fn test_likes_bound() {
        let config = SimulationConfig::from_raw(&raw("10", "5", "0")).unwrap();
        assert_eq!(config.max_likes_per_user(), 0);

        let err = SimulationConfig::from_raw(&raw("10", "5", "-1")).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::Negative { key: MAX_LIKES_PER_USER, value: -1 }
        ));
    }

    #[test]
    fn test_from_ini_file() {
        let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        writeln!(
            file,
            "[CONFIG]\nnumber_of_users = 3\nmax_posts_per_user = 2\nmax_likes_per_user = 1"
        )
        .unwrap();

        let config = SimulationConfig::from_ini_file(file.path()).unwrap();
        assert_eq!(config, SimulationConfig::new(3, 2, 1).unwrap());
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(matches!(
            SimulationConfig::new(0, 1, 1),
            Err(ConfigurationError::NotPositive { key: NUMBER_OF_USERS, .. })
        ));
        assert!(matches!(
            SimulationConfig::new(1, 0, 1),
            Err(ConfigurationError::NotPositive { key: MAX_POSTS_PER_USER, .. })
        ));
        assert!(SimulationConfig::new(1, 1, 0).is_ok());
    }

    #[test]
    fn test_deserialize_is_validated() {
        let settings = Config::builder()
            .set_override(NUMBER_OF_USERS, 0)
            .unwrap()
            .set_override(MAX_POSTS_PER_USER, 0)
            .unwrap()
            .set_override(MAX_LIKES_PER_USER, 5)
            .unwrap()
            .build()
            .unwrap();

        let err = settings.try_deserialize::<SimulationConfig>().unwrap_err();
        assert!(err.to_string().contains("must be a positive integer"));
    }

    #[test]
    fn test_deserialize_valid_settings() {
        let settings = Config::builder()
            .set_override(NUMBER_OF_USERS, 3)
            .unwrap()
            .set_override(MAX_POSTS_PER_USER, "2")
            .unwrap()
            .set_override(MAX_LIKES_PER_USER, 0)
            .unwrap()
            .build()
            .unwrap();

        let config = settings.try_deserialize::<SimulationConfig>().unwrap();
        assert_eq!(config, SimulationConfig::new(3, 2, 0).unwrap());
    }

    #[test]
    fn test_ini_without_section() {
        let mut file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        writeln!(file, "[OTHER]\nnumber_of_users = 3").unwrap();

        let err = SimulationConfig::from_ini_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingSection(_)));
    }

    #[test]
    fn test_missing_ini_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SimulationConfig::from_ini_file(dir.path().join("absent.ini")).unwrap_err();
        assert!(matches!(err, ConfigurationError::Load(_)));
    }
}
