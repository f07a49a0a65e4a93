use std::{env, fmt::Display, net::IpAddr, net::SocketAddr, str::FromStr};

use thiserror::Error;
use tracing::info;

use crate::order_actor::TransitionPolicy;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub strict_transitions: bool,
    pub seed_catalog: bool,
    pub actor_buffer: usize,
}

impl Config {
    /// Read the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `load` passes the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            host: try_load(&lookup, "TRATTORIA_HOST", "0.0.0.0")?,
            port: try_load(&lookup, "TRATTORIA_PORT", "5000")?,
            strict_transitions: try_load(&lookup, "TRATTORIA_STRICT_TRANSITIONS", "false")?,
            seed_catalog: try_load(&lookup, "TRATTORIA_SEED_CATALOG", "true")?,
            actor_buffer: try_load(&lookup, "TRATTORIA_ACTOR_BUFFER", "32")?,
        };

        if config.actor_buffer == 0 {
            return Err(ConfigError::Invalid {
                key: "TRATTORIA_ACTOR_BUFFER",
                value: "0".to_string(),
                reason: "mailbox size must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn transition_policy(&self) -> TransitionPolicy {
        if self.strict_transitions {
            TransitionPolicy::Strict
        } else {
            TransitionPolicy::Permissive
        }
    }
}

fn try_load<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
        value,
    })
}
