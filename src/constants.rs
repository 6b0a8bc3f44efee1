// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// The ConfigMap Gardener writes into every shoot cluster
pub mod shoot_info {
    pub const NAMESPACE: &str = "kube-system";
    pub const NAME: &str = "shoot-info";
    /// Data key holding the cluster domain
    pub const DOMAIN_KEY: &str = "domain";
}

/// Environment-driven defaults
pub mod defaults {
    /// Domain served by the gateway when the cluster is not a Gardener shoot
    pub const GATEWAY_DOMAIN: &str = "local.kyma.dev";
    pub const LOOKUP_TIMEOUT_SECS: u64 = 10;
    pub const API_TIMEOUT_SECS: u64 = 5;
}
