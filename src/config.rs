// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::defaults;
use crate::error::{GardenerError, Result};
use std::env;
use std::time::Duration;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Domain used when the cluster is not provisioned by Gardener
    pub default_domain: String,
    /// Upper bound for a whole domain resolution
    pub lookup_timeout: Duration,
    /// Connect and read timeout of the Kubernetes client
    pub api_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_domain = lookup("DEFAULT_GATEWAY_DOMAIN")
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| defaults::GATEWAY_DOMAIN.to_string());
        let lookup_timeout = parse_secs(
            &lookup,
            "GARDENER_LOOKUP_TIMEOUT_SECS",
            defaults::LOOKUP_TIMEOUT_SECS,
        )?;
        let api_timeout = parse_secs(&lookup, "KUBE_API_TIMEOUT_SECS", defaults::API_TIMEOUT_SECS)?;

        Ok(Config {
            default_domain,
            lookup_timeout,
            api_timeout,
        })
    }
}

fn parse_secs<F>(lookup: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|e| GardenerError::Config(format!("{} must be a number of seconds: {}", key, e))),
        None => Ok(Duration::from_secs(default)),
    }
}
