// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GardenerError {
    #[error("Gardener shoot-info config map {namespace}/{name} not found")]
    ShootInfoNotFound { namespace: String, name: String },

    #[error("domain not found in Gardener shoot-info")]
    DomainNotFound,

    #[error("Kubernetes API did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Failed to build Kubernetes client: {0}")]
    KubeconfigError(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Kube(#[from] kube::Error),
}

impl GardenerError {
    /// True when the shoot-info config map does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, GardenerError::ShootInfoNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, GardenerError>;
