use std::time::Duration;

use kube::config::{InClusterError, KubeconfigError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FluxError {
    #[error("name is required")]
    NameRequired,

    #[error("{kind} '{name}' not found in {namespace} namespace")]
    NotFound {
        kind: &'static str,
        name: String,
        namespace: String,
    },

    #[error("failed to retrieve secret {name}, error: {source}")]
    SecretRetrieval {
        name: String,
        #[source]
        source: kube::Error,
    },

    #[error("{kind} reconciliation failed: {message}")]
    ReconciliationFailed { kind: &'static str, message: String },

    #[error("{kind} '{name}' is not ready")]
    NotReady { kind: &'static str, name: String },

    #[error("operation timed out after {}", humantime::format_duration(*.0))]
    Timeout(Duration),

    #[error(transparent)]
    Kubeconfig(#[from] KubeconfigError),

    #[error("unable to load in-cluster config: {0}")]
    InCluster(#[from] InClusterError),

    #[error(transparent)]
    Kube(#[from] kube::Error),

    #[error("serializing resource: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("writing output: {0}")]
    Io(#[from] std::io::Error),
}

impl FluxError {
    /// Turns an API 404 for a named object into [`FluxError::NotFound`].
    pub fn from_lookup(err: kube::Error, kind: &'static str, name: &str, namespace: &str) -> Self {
        match err {
            kube::Error::Api(response) if response.code == 404 => FluxError::NotFound {
                kind,
                name: name.to_owned(),
                namespace: namespace.to_owned(),
            },
            other => FluxError::Kube(other),
        }
    }
}
