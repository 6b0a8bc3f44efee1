// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Gardener detection based on the `kube-system/shoot-info` config map.

use crate::config::Config;
use crate::constants::shoot_info;
use crate::error::{GardenerError, Result};
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{Api, Client};
use std::future::Future;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument};

/// Fetch the shoot-info config map, mapping a 404 to `ShootInfoNotFound`
async fn get_shoot_info(client: &Client) -> Result<ConfigMap> {
    let config_maps: Api<ConfigMap> = Api::namespaced(client.clone(), shoot_info::NAMESPACE);

    match config_maps.get(shoot_info::NAME).await {
        Ok(cm) => Ok(cm),
        Err(kube::Error::Api(err)) if err.code == 404 => Err(GardenerError::ShootInfoNotFound {
            namespace: shoot_info::NAMESPACE.to_string(),
            name: shoot_info::NAME.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// Pull the `domain` entry out of a shoot-info config map
fn domain_from(cm: &ConfigMap) -> Result<String> {
    let Some(domain) = cm
        .data
        .as_ref()
        .and_then(|data| data.get(shoot_info::DOMAIN_KEY))
    else {
        return Err(GardenerError::DomainNotFound);
    };

    debug!("Gardener shoot-info reports domain {}", domain);
    Ok(domain.clone())
}

/// Read the cluster domain Gardener published in the shoot-info config map
#[instrument(skip(client))]
pub async fn get_gardener_domain(client: &Client) -> Result<String> {
    let cm = get_shoot_info(client).await?;
    domain_from(&cm)
}

/// Check whether the cluster is a Gardener shoot. A missing shoot-info is not an error.
#[instrument(skip(client))]
pub async fn runs_on_gardener_cluster(client: &Client) -> Result<bool> {
    match get_shoot_info(client).await {
        Ok(_) => Ok(true),
        Err(e) if e.is_not_found() => {
            debug!(
                "No {}/{} config map, not a Gardener cluster",
                shoot_info::NAMESPACE,
                shoot_info::NAME
            );
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Pick the gateway domain: the Gardener domain on a shoot, the configured default otherwise.
/// A single shoot-info lookup is made, bounded by `lookup_timeout`.
#[instrument(skip(client, config))]
pub async fn resolve_gateway_domain(client: &Client, config: &Config) -> Result<String> {
    match bounded(config.lookup_timeout, get_shoot_info(client)).await {
        Ok(cm) => {
            let domain = domain_from(&cm)?;
            info!("Cluster is provisioned by Gardener, using domain {}", domain);
            Ok(domain)
        }
        Err(e) if e.is_not_found() => {
            info!(
                "Cluster is not provisioned by Gardener, using default domain {}",
                config.default_domain
            );
            Ok(config.default_domain.clone())
        }
        Err(e) => Err(e),
    }
}

async fn bounded<T>(limit: Duration, fut: impl Future<Output = Result<T>>) -> Result<T> {
    timeout(limit, fut)
        .await
        .map_err(|_| GardenerError::Timeout(limit))?
}
