use std::{env, fmt, str::FromStr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown environment: {0}")]
    UnknownProfile(String),

    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        source: std::num::ParseIntError,
    },

    #[error("failed to load {path}: {source}")]
    EnvFile {
        path: &'static str,
        source: dotenvy::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Dev,
    Release,
    Prod,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Profile::Dev => "dev",
            Profile::Release => "release",
            Profile::Prod => "prod",
        }
    }

    pub fn env_file(self) -> &'static str {
        match self {
            Profile::Dev => ".env.dev",
            Profile::Release => ".env.release",
            Profile::Prod => ".env.prod",
        }
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Profile::Dev),
            "release" => Ok(Profile::Release),
            "prod" => Ok(Profile::Prod),
            other => Err(ConfigError::UnknownProfile(other.to_string())),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub profile: Profile,
    pub host: String,
    pub port: u16,
    /// Storage connection string (`DATABASE_URL`).
    pub database_url: Option<String>,
}

impl Settings {
    /// Load the profile's env file, then read settings from the environment.
    pub fn load(profile: Profile) -> Result<Self, ConfigError> {
        match dotenvy::from_filename(profile.env_file()) {
            Ok(path) => tracing::info!("Loaded {}", path.display()),
            Err(e) if e.not_found() => {
                tracing::debug!("No {} file, using process environment", profile.env_file())
            }
            Err(source) => {
                return Err(ConfigError::EnvFile {
                    path: profile.env_file(),
                    source,
                })
            }
        }
        Self::from_lookup(profile, |key| env::var(key).ok())
    }

    pub fn from_lookup(
        profile: Profile,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            profile,
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn parses_known_profiles() {
        assert_eq!("dev".parse::<Profile>().unwrap(), Profile::Dev);
        assert_eq!("release".parse::<Profile>().unwrap(), Profile::Release);
        assert_eq!("prod".parse::<Profile>().unwrap(), Profile::Prod);
        assert_eq!(Profile::Release.env_file(), ".env.release");
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let err = "staging".parse::<Profile>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile(ref p) if p == "staging"));
        assert_eq!(err.to_string(), "Unknown environment: staging");
    }

    #[test]
    fn reads_port_and_database_url() {
        let settings = Settings::from_lookup(
            Profile::Prod,
            lookup(&[("PORT", "8080"), ("DATABASE_URL", "postgres://db/items")]),
        )
        .unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.database_url.as_deref(), Some("postgres://db/items"));
        assert_eq!(settings.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn falls_back_to_defaults() {
        let settings = Settings::from_lookup(Profile::Dev, lookup(&[("DATABASE_URL", "")])).unwrap();
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.host, DEFAULT_HOST);
        assert!(settings.database_url.is_none());
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = Settings::from_lookup(Profile::Dev, lookup(&[("PORT", "http")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }
}
