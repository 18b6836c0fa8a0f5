//! Deployment environment selection

use clap::ValueEnum;

/// Application environment; picks the `{environment}.toml` overlay
///
/// Also the value type of the `--env` flag.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    #[value(alias = "dev")]
    Development,
    Test,
    #[value(alias = "stage")]
    Staging,
    #[value(alias = "prod")]
    Production,
}

impl Environment {
    pub const ENV_VAR: &'static str = "SIREN_APP_ENV";

    /// Read `SIREN_APP_ENV`; unset or unrecognized values mean `Development`.
    pub fn from_env() -> Self {
        std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Case-insensitive name or alias lookup
    pub fn parse(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value.trim(), true).ok()
    }

    /// File stem of the overlay for this environment
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_aliases() {
        assert_eq!(Environment::parse("development"), Some(Environment::Development));
        assert_eq!(Environment::parse("dev"), Some(Environment::Development));
        assert_eq!(Environment::parse("stage"), Some(Environment::Staging));
        assert_eq!(Environment::parse(" PROD "), Some(Environment::Production));
        assert_eq!(Environment::parse("qa"), None);
    }

    #[test]
    fn test_overlay_stem_round_trips() {
        for env in Environment::value_variants() {
            assert_eq!(Environment::parse(env.as_str()), Some(*env));
        }
        assert_eq!(Environment::default().as_str(), "development");
    }
}
