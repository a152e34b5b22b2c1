use std::str::FromStr;

use color_eyre::eyre::{eyre, WrapErr};
use lib::wire::InfoResponse;
use lib::{Agent, FoodSeekingAgent, RandomAgent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
    Tree,
}

impl FromStr for LogFormat {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "pretty" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            "tree" => Ok(LogFormat::Tree),
            other => Err(eyre!("unknown log format {other:?}")),
        }
    }
}

/// Which move policy answers `/move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentKind {
    #[default]
    Food,
    Random,
}

impl AgentKind {
    pub fn create_agent(self) -> Box<dyn Agent> {
        match self {
            AgentKind::Food => Box::new(FoodSeekingAgent::new()),
            AgentKind::Random => Box::new(RandomAgent::new()),
        }
    }
}

impl FromStr for AgentKind {
    type Err = color_eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "food" => Ok(AgentKind::Food),
            "random" => Ok(AgentKind::Random),
            other => Err(eyre!("unknown agent {other:?}, expected `food` or `random`")),
        }
    }
}

/// Server settings, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub author: String,
    pub color: String,
    pub head: String,
    pub tail: String,
    pub agent: AgentKind,
    pub log_format: LogFormat,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> color_eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `PORT` is the only required key.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> color_eyre::Result<Self> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = lookup("PORT")
            .ok_or_else(|| eyre!("Please set the PORT environment variable"))?
            .parse::<u16>()
            .wrap_err("PORT must be a valid port number")?;
        let agent = match lookup("SNAKE_AGENT") {
            Some(value) => value.parse()?,
            None => AgentKind::default(),
        };
        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            host: get("HOST", "0.0.0.0"),
            port,
            author: get("SNAKE_AUTHOR", ""),
            color: get("SNAKE_COLOR", "#888888"),
            head: get("SNAKE_HEAD", "default"),
            tail: get("SNAKE_TAIL", "default"),
            agent,
            log_format,
            sentry_dsn: lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn info(&self) -> InfoResponse {
        InfoResponse {
            apiversion: "1".to_string(),
            author: self.author.clone(),
            color: self.color.clone(),
            head: self.head.clone(),
            tail: self.tail.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "8000")])).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
        assert_eq!(config.color, "#888888");
        assert_eq!(config.agent, AgentKind::Food);
        assert_eq!(config.log_format, LogFormat::Plain);
        assert_eq!(config.sentry_dsn, None);
    }

    #[test]
    fn test_missing_port_fails() {
        assert!(Config::from_lookup(lookup_from(&[])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9001"),
            ("HOST", "127.0.0.1"),
            ("SNAKE_AGENT", "random"),
            ("LOG_FORMAT", "json"),
            ("SNAKE_COLOR", "#00cc00"),
            ("SENTRY_DSN", ""),
        ]))
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9001");
        assert_eq!(config.agent, AgentKind::Random);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.info().color, "#00cc00");
        assert_eq!(config.sentry_dsn, None);
    }

    #[test]
    fn test_unknown_agent_fails() {
        let result = Config::from_lookup(lookup_from(&[("PORT", "8000"), ("SNAKE_AGENT", "mcts")]));
        assert!(result.is_err());
    }
}
