use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

use crate::formation::assembler::TeamScorePolicy;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Document analysis is disabled when unset.
    pub anthropic_api_key: Option<String>,
    /// JSON file with `{people, projects}`; the built-in sample directory is used when unset.
    pub roster_seed_path: Option<PathBuf>,
    pub team_score_policy: TeamScorePolicy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let team_score_policy = match non_empty("TEAM_SCORE_POLICY") {
            Some(raw) => raw
                .parse::<TeamScorePolicy>()
                .map_err(|e| anyhow!(e))
                .context("TEAM_SCORE_POLICY is invalid")?,
            None => TeamScorePolicy::default(),
        };

        Ok(Config {
            port: non_empty("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: non_empty("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            anthropic_api_key: non_empty("ANTHROPIC_API_KEY"),
            roster_seed_path: non_empty("ROSTER_SEED_PATH").map(PathBuf::from),
            team_score_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert!(config.anthropic_api_key.is_none());
        assert!(config.roster_seed_path.is_none());
        assert_eq!(config.team_score_policy, TeamScorePolicy::Aggregate);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("RUST_LOG", "debug"),
            ("ANTHROPIC_API_KEY", "sk-test"),
            ("ROSTER_SEED_PATH", "/etc/teamsmith/roster.json"),
            ("TEAM_SCORE_POLICY", "fixed"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.anthropic_api_key.as_deref(), Some("sk-test"));
        assert_eq!(
            config.roster_seed_path,
            Some(PathBuf::from("/etc/teamsmith/roster.json"))
        );
        assert_eq!(config.team_score_policy, TeamScorePolicy::Fixed);
    }

    #[test]
    fn test_blank_api_key_treated_as_unset() {
        let config = config_from(&[("ANTHROPIC_API_KEY", "  ")]).unwrap();
        assert!(config.anthropic_api_key.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let err = config_from(&[("TEAM_SCORE_POLICY", "optimal")]).unwrap_err();
        assert!(err.to_string().contains("TEAM_SCORE_POLICY"));
    }
}
