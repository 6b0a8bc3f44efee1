// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
pub mod config;
pub mod constants;
pub mod error;
pub mod gardener;
pub mod kubernetes;

#[cfg(test)]
mod test_utils;

pub use gardener::{get_gardener_domain, resolve_gateway_domain, runs_on_gardener_cluster};
