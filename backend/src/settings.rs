//! Environment-driven service settings.
//!
//! Everything is read once at startup through [`mockable::Env`] so the parsing
//! rules can be exercised with `MockEnv` in tests.

use mockable::Env;
use url::Url;

use crate::domain::ConfigPresence;

pub const PORT_ENV: &str = "PORT";
pub const HOST_ENV: &str = "HOST";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";
pub const DATABASE_NAME_ENV: &str = "DATABASE_NAME";

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

const PORT_EXPECTED: &str = "an integer between 0 and 65535";

/// Errors raised while reading settings.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SettingsError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Errors raised while composing the store connection URL.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum StoreUrlError {
    #[error("DATABASE_URL is not a valid URL: {0}")]
    Parse(#[from] url::ParseError),
    #[error("DATABASE_URL cannot carry a database name")]
    CannotBeABase,
}

/// Service settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub host: String,
    pub port: u16,
    database_url: Option<String>,
    database_name: Option<String>,
}

impl AppSettings {
    /// Read settings from `env`.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidEnv`] when `PORT` is not a valid port.
    ///
    /// # Examples
    /// ```
    /// use mockable::MockEnv;
    /// use portfolio_backend::settings::AppSettings;
    ///
    /// let mut env = MockEnv::new();
    /// env.expect_string().returning(|name| match name {
    ///     "PORT" => Some("9000".to_owned()),
    ///     _ => None,
    /// });
    ///
    /// let settings = AppSettings::from_env(&env).expect("valid settings");
    /// assert_eq!(settings.port, 9000);
    /// assert_eq!(settings.host, "0.0.0.0");
    /// assert_eq!(settings.store_url(), Ok(None));
    /// ```
    pub fn from_env<E: Env>(env: &E) -> Result<Self, SettingsError> {
        let port = match non_empty(env, PORT_ENV) {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|_| SettingsError::InvalidEnv {
                    name: PORT_ENV,
                    value,
                    expected: PORT_EXPECTED,
                })?,
            None => DEFAULT_PORT,
        };
        let host = non_empty(env, HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_owned());

        Ok(Self {
            host,
            port,
            database_url: non_empty(env, DATABASE_URL_ENV),
            database_name: non_empty(env, DATABASE_NAME_ENV),
        })
    }

    /// Which store variables were set, for diagnostics.
    #[must_use]
    pub fn presence(&self) -> ConfigPresence {
        ConfigPresence {
            database_url: self.database_url.is_some(),
            database_name: self.database_name.is_some(),
        }
    }

    /// Connection URL for the store, with `DATABASE_NAME` replacing the URL
    /// path when set. `None` when no store is configured.
    ///
    /// # Errors
    /// Returns [`StoreUrlError`] when `DATABASE_NAME` is set and
    /// `DATABASE_URL` cannot be parsed or has no path.
    pub fn store_url(&self) -> Result<Option<String>, StoreUrlError> {
        let Some(raw) = self.database_url.as_deref() else {
            return Ok(None);
        };
        let Some(name) = self.database_name.as_deref() else {
            return Ok(Some(raw.to_owned()));
        };
        let mut url = Url::parse(raw)?;
        if url.cannot_be_a_base() {
            return Err(StoreUrlError::CannotBeABase);
        }
        url.set_path(&format!("/{}", name.trim_start_matches('/')));
        Ok(Some(url.into()))
    }
}

fn non_empty<E: Env>(env: &E, name: &str) -> Option<String> {
    env.string(name).filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;
    use std::collections::HashMap;

    fn env_with(vars: &[(&'static str, &str)]) -> MockEnv {
        let vars: HashMap<&'static str, String> = vars
            .iter()
            .map(|(name, value)| (*name, (*value).to_owned()))
            .collect();
        let mut env = MockEnv::new();
        env.expect_string()
            .returning(move |name| vars.get(name).cloned());
        env
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let settings = AppSettings::from_env(&env_with(&[])).expect("valid settings");
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.presence(), ConfigPresence::default());
        assert_eq!(settings.store_url(), Ok(None));
    }

    #[rstest]
    #[case("8080", 8080)]
    #[case(" 443 ", 443)]
    #[case("", DEFAULT_PORT)]
    fn reads_port(#[case] raw: &str, #[case] expected: u16) {
        let settings = AppSettings::from_env(&env_with(&[(PORT_ENV, raw)])).expect("valid");
        assert_eq!(settings.port, expected);
    }

    #[rstest]
    #[case("eighty")]
    #[case("70000")]
    #[case("-1")]
    fn rejects_invalid_port(#[case] raw: &str) {
        let err = AppSettings::from_env(&env_with(&[(PORT_ENV, raw)])).expect_err("invalid");
        assert_eq!(
            err,
            SettingsError::InvalidEnv {
                name: PORT_ENV,
                value: raw.to_owned(),
                expected: PORT_EXPECTED,
            }
        );
    }

    #[rstest]
    fn records_presence_without_values() {
        let env = env_with(&[
            (DATABASE_URL_ENV, "postgres://u:p@db:5432/app"),
            (DATABASE_NAME_ENV, "portfolio"),
        ]);
        let settings = AppSettings::from_env(&env).expect("valid settings");
        assert_eq!(
            settings.presence(),
            ConfigPresence {
                database_url: true,
                database_name: true,
            }
        );
    }

    #[rstest]
    #[case(None, "postgres://u:p@db:5432/app?sslmode=disable")]
    #[case(Some("portfolio"), "postgres://u:p@db:5432/portfolio?sslmode=disable")]
    fn database_name_overrides_url_path(#[case] name: Option<&str>, #[case] expected: &str) {
        let mut vars = vec![(DATABASE_URL_ENV, "postgres://u:p@db:5432/app?sslmode=disable")];
        if let Some(name) = name {
            vars.push((DATABASE_NAME_ENV, name));
        }
        let settings = AppSettings::from_env(&env_with(&vars)).expect("valid settings");
        assert_eq!(settings.store_url(), Ok(Some(expected.to_owned())));
    }

    #[rstest]
    fn name_without_url_means_no_store() {
        let settings = AppSettings::from_env(&env_with(&[(DATABASE_NAME_ENV, "portfolio")]))
            .expect("valid settings");
        assert_eq!(settings.store_url(), Ok(None));
        assert!(settings.presence().database_name);
    }

    #[rstest]
    fn unparsable_url_is_reported_when_renaming() {
        let env = env_with(&[(DATABASE_URL_ENV, "not a url"), (DATABASE_NAME_ENV, "x")]);
        let settings = AppSettings::from_env(&env).expect("valid settings");
        assert!(matches!(settings.store_url(), Err(StoreUrlError::Parse(_))));
    }
}
