//! Process-wide settings and database secrets.
//!
//! Both are read once at startup and passed explicitly to the store; nothing
//! in the business logic looks configuration up on its own.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::CoreError;
use crate::password::HashParams;

/// Precision and scale of the fixed-point `price` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyAccuracy {
    /// Total number of significant digits.
    pub precision: u32,
    /// Digits after the decimal point.
    pub scale: u32,
}

/// Storage and session settings.
///
/// `hash_len`, `salt_len` and `token_len` are column widths in hex
/// characters; the underlying byte counts are half of that.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub dbname: String,
    /// Schema (namespace) holding every table.
    pub schema: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub hash_len: usize,
    pub salt_len: usize,
    pub token_len: usize,
    pub hash_iterations: u32,
    /// Session lifetime in seconds.
    pub token_time: i64,
    /// Width of every `VARCHAR` name/login column.
    pub string_len: usize,
    pub currency_acc: CurrencyAccuracy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            dbname: "aio".into(),
            schema: "aio".into(),
            max_connections: 20,
            acquire_timeout_secs: 30,
            hash_len: 64,
            salt_len: 32,
            token_len: 64,
            hash_iterations: 10_000,
            token_time: 86_400,
            string_len: 255,
            currency_acc: CurrencyAccuracy {
                precision: 10,
                scale: 2,
            },
        }
    }
}

impl Settings {
    /// Load settings from environment variables with defaults.
    ///
    /// | Env Var                       | Default     |
    /// |-------------------------------|-------------|
    /// | `AIO_DB_HOST`                 | `localhost` |
    /// | `AIO_DB_PORT`                 | `5432`      |
    /// | `AIO_DB_NAME`                 | `aio`       |
    /// | `AIO_DB_SCHEMA`               | `aio`       |
    /// | `AIO_DB_MAX_CONNECTIONS`      | `20`        |
    /// | `AIO_DB_ACQUIRE_TIMEOUT_SECS` | `30`        |
    /// | `AIO_HASH_LEN`                | `64`        |
    /// | `AIO_SALT_LEN`                | `32`        |
    /// | `AIO_TOKEN_LEN`               | `64`        |
    /// | `AIO_HASH_ITERATIONS`         | `10000`     |
    /// | `AIO_TOKEN_TIME`              | `86400`     |
    /// | `AIO_STRING_LEN`              | `255`       |
    /// | `AIO_CURRENCY_PRECISION`      | `10`        |
    /// | `AIO_CURRENCY_SCALE`          | `2`         |
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let settings = Self {
            host: lookup("AIO_DB_HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "AIO_DB_PORT", defaults.port)?,
            dbname: lookup("AIO_DB_NAME").unwrap_or(defaults.dbname),
            schema: lookup("AIO_DB_SCHEMA").unwrap_or(defaults.schema),
            max_connections: parse_or(&lookup, "AIO_DB_MAX_CONNECTIONS", defaults.max_connections)?,
            acquire_timeout_secs: parse_or(
                &lookup,
                "AIO_DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
            hash_len: parse_or(&lookup, "AIO_HASH_LEN", defaults.hash_len)?,
            salt_len: parse_or(&lookup, "AIO_SALT_LEN", defaults.salt_len)?,
            token_len: parse_or(&lookup, "AIO_TOKEN_LEN", defaults.token_len)?,
            hash_iterations: parse_or(&lookup, "AIO_HASH_ITERATIONS", defaults.hash_iterations)?,
            token_time: parse_or(&lookup, "AIO_TOKEN_TIME", defaults.token_time)?,
            string_len: parse_or(&lookup, "AIO_STRING_LEN", defaults.string_len)?,
            currency_acc: CurrencyAccuracy {
                precision: parse_or(
                    &lookup,
                    "AIO_CURRENCY_PRECISION",
                    defaults.currency_acc.precision,
                )?,
                scale: parse_or(&lookup, "AIO_CURRENCY_SCALE", defaults.currency_acc.scale)?,
            },
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Check the invariants the schema and hasher rely on.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !is_sql_identifier(&self.schema) {
            return Err(CoreError::Validation(format!(
                "schema {:?} is not a plain SQL identifier",
                self.schema
            )));
        }
        for (name, len) in [
            ("hash_len", self.hash_len),
            ("salt_len", self.salt_len),
            ("token_len", self.token_len),
        ] {
            if len == 0 || len % 2 != 0 {
                return Err(CoreError::Validation(format!(
                    "{name} must be a positive even number of hex characters, got {len}"
                )));
            }
        }
        if self.string_len == 0 {
            return Err(CoreError::Validation("string_len must be positive".into()));
        }
        if self.hash_iterations == 0 {
            return Err(CoreError::Validation("hash_iterations must be positive".into()));
        }
        if self.token_time <= 0 {
            return Err(CoreError::Validation("token_time must be positive".into()));
        }
        if chrono::TimeDelta::try_seconds(self.token_time).is_none() {
            return Err(CoreError::Validation(format!(
                "token_time {} is out of range for a session lifetime",
                self.token_time
            )));
        }
        let acc = self.currency_acc;
        if acc.precision == 0 || acc.scale > acc.precision {
            return Err(CoreError::Validation(format!(
                "currency accuracy ({}, {}) is not a valid NUMERIC precision/scale",
                acc.precision, acc.scale
            )));
        }
        Ok(())
    }

    /// PBKDF2 parameters derived from the column widths.
    pub fn hash_params(&self) -> HashParams {
        HashParams {
            key_len: self.hash_len / 2,
            salt_len: self.salt_len / 2,
            iterations: self.hash_iterations,
        }
    }

    /// Number of random bytes in a session token.
    pub fn token_bytes(&self) -> usize {
        self.token_len / 2
    }

    /// Session lifetime; saturates for values [`Settings::validate`] rejects.
    pub fn session_lifetime(&self) -> chrono::Duration {
        chrono::TimeDelta::try_seconds(self.token_time).unwrap_or(chrono::TimeDelta::MAX)
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }
}

/// Database login supplied through the environment.
#[derive(Clone)]
pub struct Secrets {
    pub user: String,
    pub password: String,
}

impl Secrets {
    /// Read `DBUSER` and `DBPASSWORD`. Both are required.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let user = lookup("DBUSER").ok_or(CoreError::MissingEnv("DBUSER"))?;
        let password = lookup("DBPASSWORD").ok_or(CoreError::MissingEnv("DBPASSWORD"))?;
        Ok(Self { user, password })
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, CoreError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| CoreError::InvalidEnv { var, value }),
    }
}

/// Letters, digits and underscores, not starting with a digit.
fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.schema, "aio");
        assert_eq!(settings.port, 5432);
        assert_eq!(settings.token_time, 86_400);
        assert_eq!(settings.hash_params().key_len, 32);
        assert_eq!(settings.hash_params().salt_len, 16);
        assert_eq!(settings.token_bytes(), 32);
    }

    #[test]
    fn overrides_are_parsed() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("AIO_DB_PORT", "6543"),
            ("AIO_TOKEN_TIME", "60"),
            ("AIO_CURRENCY_PRECISION", "12"),
            ("AIO_CURRENCY_SCALE", "4"),
        ]))
        .unwrap();
        assert_eq!(settings.port, 6543);
        assert_eq!(settings.session_lifetime(), chrono::Duration::seconds(60));
        assert_eq!(
            settings.currency_acc,
            CurrencyAccuracy {
                precision: 12,
                scale: 4
            }
        );
    }

    #[test]
    fn unparsable_value_names_the_variable() {
        let err = Settings::from_lookup(lookup_from(&[("AIO_DB_PORT", "http")])).unwrap_err();
        assert!(matches!(err, CoreError::InvalidEnv { var: "AIO_DB_PORT", .. }));
    }

    #[test]
    fn schema_must_be_an_identifier() {
        let err = Settings::from_lookup(lookup_from(&[("AIO_DB_SCHEMA", "aio; DROP TABLE x")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(!is_sql_identifier("1aio"));
        assert!(is_sql_identifier("_aio_2"));
    }

    #[test]
    fn token_time_beyond_duration_range_is_rejected() {
        let too_long = i64::MAX.to_string();
        let err = Settings::from_lookup(lookup_from(&[("AIO_TOKEN_TIME", too_long.as_str())]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));

        // Largest whole-second lifetime chrono can represent still loads.
        let max_secs = chrono::TimeDelta::MAX.num_seconds().to_string();
        let settings =
            Settings::from_lookup(lookup_from(&[("AIO_TOKEN_TIME", max_secs.as_str())])).unwrap();
        assert!(settings.session_lifetime() > chrono::Duration::days(365));
    }

    #[test]
    fn session_lifetime_saturates_without_validation() {
        let settings = Settings {
            token_time: i64::MAX,
            ..Settings::default()
        };
        assert_eq!(settings.session_lifetime(), chrono::TimeDelta::MAX);
    }

    #[test]
    fn odd_hex_lengths_are_rejected() {
        let err = Settings::from_lookup(lookup_from(&[("AIO_TOKEN_LEN", "63")])).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn scale_cannot_exceed_precision() {
        let err = Settings::from_lookup(lookup_from(&[
            ("AIO_CURRENCY_PRECISION", "2"),
            ("AIO_CURRENCY_SCALE", "3"),
        ]))
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn secrets_are_required() {
        let err = Secrets::from_lookup(lookup_from(&[("DBUSER", "aio")])).unwrap_err();
        assert!(matches!(err, CoreError::MissingEnv("DBPASSWORD")));

        let err = Secrets::from_lookup(lookup_from(&[("DBPASSWORD", "x")])).unwrap_err();
        assert!(matches!(err, CoreError::MissingEnv("DBUSER")));
    }

    #[test]
    fn secrets_debug_hides_the_password() {
        let secrets =
            Secrets::from_lookup(lookup_from(&[("DBUSER", "aio"), ("DBPASSWORD", "hunter2")]))
                .unwrap();
        let printed = format!("{secrets:?}");
        assert!(printed.contains("aio"));
        assert!(!printed.contains("hunter2"));
    }
}
