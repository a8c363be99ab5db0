use std::path::Path;
use std::time::Duration;

use kube::{
    Client, Config,
    config::{KubeConfigOptions, Kubeconfig},
};
use tracing::debug;

use crate::errors::FluxError;

/// Builds the config from an explicit kubeconfig file, the default kubeconfig
/// lookup, or the in-cluster service account, in that order.
pub async fn kube_config(
    kubeconfig: Option<&Path>,
    context: Option<&str>,
) -> Result<Config, FluxError> {
    let options = KubeConfigOptions {
        context: context.map(str::to_owned),
        ..KubeConfigOptions::default()
    };

    if let Some(path) = kubeconfig {
        debug!(path = %path.display(), "loading kubeconfig");
        let kubeconfig = Kubeconfig::read_from(path)?;
        return Ok(Config::from_custom_kubeconfig(kubeconfig, &options).await?);
    }

    match Config::from_kubeconfig(&options).await {
        Ok(config) => Ok(config),
        // A requested context only exists in a kubeconfig
        Err(e) if context.is_some() => Err(e.into()),
        Err(e) => {
            debug!(error = %e, "no usable kubeconfig, falling back to in-cluster config");
            Ok(Config::incluster()?)
        }
    }
}

pub async fn kube_client(
    kubeconfig: Option<&Path>,
    context: Option<&str>,
    timeout: Duration,
) -> Result<Client, FluxError> {
    let mut config = kube_config(kubeconfig, context).await?;
    config.read_timeout = Some(timeout);
    debug!(cluster = %config.cluster_url, namespace = %config.default_namespace, "connecting");
    Ok(Client::try_from(config)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use assert_matches::assert_matches;
    use tempfile::NamedTempFile;

    use super::*;

    const KUBECONFIG: &str = r#"
apiVersion: v1
kind: Config
clusters:
  - name: staging
    cluster:
      server: https://staging.example.com:6443
  - name: production
    cluster:
      server: https://production.example.com:6443
contexts:
  - name: staging
    context:
      cluster: staging
      user: admin
      namespace: apps
  - name: production
    context:
      cluster: production
      user: admin
current-context: staging
users:
  - name: admin
    user:
      token: not-a-real-token
"#;

    fn kubeconfig_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(KUBECONFIG.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn explicit_kubeconfig_uses_current_context() {
        let file = kubeconfig_file();
        let config = kube_config(Some(file.path()), None).await.unwrap();

        assert_eq!(config.cluster_url.host(), Some("staging.example.com"));
        assert_eq!(config.default_namespace, "apps");
    }

    #[tokio::test]
    async fn explicit_kubeconfig_honours_context() {
        let file = kubeconfig_file();
        let config = kube_config(Some(file.path()), Some("production")).await.unwrap();

        assert_eq!(config.cluster_url.host(), Some("production.example.com"));
    }

    #[tokio::test]
    async fn unknown_context_is_an_error() {
        let file = kubeconfig_file();
        let result = kube_config(Some(file.path()), Some("missing")).await;

        assert_matches!(result, Err(FluxError::Kubeconfig(_)));
    }
}
