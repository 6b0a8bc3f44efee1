// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gardener_domain::config::Config;
use gardener_domain::kubernetes::create_client;
use gardener_domain::resolve_gateway_domain;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing, logs go to stderr so stdout only carries the domain
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: default_domain={}, lookup_timeout={:?}",
        config.default_domain, config.lookup_timeout
    );

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    let domain = resolve_gateway_domain(&client, &config).await?;
    println!("{}", domain);

    Ok(())
}
