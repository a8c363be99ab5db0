use std::time::Duration;

use tracing::debug;

pub mod cli;
pub mod client;
pub mod commands;
pub mod crds;
pub mod errors;
pub mod logging;
pub mod output;
pub mod resource;

use cli::Cli;
use errors::FluxError;

pub async fn run(cli: Cli) -> Result<(), FluxError> {
    let global = &cli.global;
    let mut out = std::io::stdout().lock();

    debug!(namespace = %global.namespace, timeout = ?global.timeout, "running command");

    with_timeout(global.timeout, async {
        let client = client::kube_client(
            global.kubeconfig.as_deref(),
            global.context.as_deref(),
            global.timeout,
        )
        .await?;

        commands::execute(&client, global, &cli.command, &mut out).await
    })
    .await
}

/// Runs `work`, giving up with [`FluxError::Timeout`] once `timeout` has elapsed.
pub async fn with_timeout<T>(
    timeout: Duration,
    work: impl Future<Output = Result<T, FluxError>>,
) -> Result<T, FluxError> {
    tokio::time::timeout(timeout, work)
        .await
        .map_err(|_| FluxError::Timeout(timeout))?
}
