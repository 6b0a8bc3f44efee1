// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation

use crate::config::Config;
use crate::error::{GardenerError, Result};
use kube::{Client, Config as KConfig};
use tracing::{debug, instrument};

/// Create a client from the in-cluster config or the local kubeconfig
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let mut c = KConfig::infer()
        .await
        .map_err(|e| GardenerError::KubeconfigError(format!("Failed to infer config: {}", e)))?;

    apply_timeouts(&mut c, config);
    debug!(
        "Using Kubernetes API at {} with timeout {:?}",
        c.cluster_url, config.api_timeout
    );

    Client::try_from(c)
        .map_err(|e| GardenerError::KubeconfigError(format!("Failed to create client: {}", e)))
}

fn apply_timeouts(c: &mut KConfig, config: &Config) {
    c.connect_timeout = Some(config.api_timeout);
    c.read_timeout = Some(config.api_timeout);
}
