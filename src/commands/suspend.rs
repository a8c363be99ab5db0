//! `flux suspend` and `flux resume`.

use std::time::Duration;

use k8s_openapi::chrono::{SecondsFormat, Utc};
use kube::{
    Api, Client,
    api::{Patch, PatchParams},
};
use serde_json::{Value, json};
use tokio_retry2::{Retry, RetryError, strategy::FixedInterval};
use tracing::{debug, info};

use crate::{
    crds::RECONCILE_REQUESTED_AT_ANNOTATION,
    errors::FluxError,
    resource::{FluxResource, Readiness},
};

const POLL_INTERVAL: Duration = Duration::from_secs(2);

pub async fn suspend<K: FluxResource>(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<(), FluxError> {
    let api = Api::<K>::namespaced(client.clone(), namespace);
    api.get(name)
        .await
        .map_err(|e| FluxError::from_lookup(e, K::DISPLAY, name, namespace))?;

    info!("suspending {} {} in {} namespace", K::DISPLAY, name, namespace);
    api.patch(name, &PatchParams::default(), &Patch::Merge(suspend_patch()))
        .await?;
    info!("{} suspended", K::DISPLAY);

    Ok(())
}

pub async fn resume<K: FluxResource>(
    client: &Client,
    namespace: &str,
    name: &str,
    wait: bool,
) -> Result<(), FluxError> {
    let api = Api::<K>::namespaced(client.clone(), namespace);
    api.get(name)
        .await
        .map_err(|e| FluxError::from_lookup(e, K::DISPLAY, name, namespace))?;

    info!("resuming {} {} in {} namespace", K::DISPLAY, name, namespace);
    let requested_at = Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true);
    api.patch(name, &PatchParams::default(), &Patch::Merge(resume_patch(&requested_at)))
        .await?;
    info!("{} resumed", K::DISPLAY);

    if !wait {
        return Ok(());
    }

    info!("waiting for {} reconciliation", K::DISPLAY);
    let object = wait_for_ready(&api, name).await?;
    info!("{} reconciliation completed", K::DISPLAY);
    if let Some(revision) = object.last_revision().filter(|r| !r.is_empty()) {
        info!("applied revision {}", revision);
    }

    Ok(())
}

/// Polls `name` until its Ready condition settles for the current generation.
async fn wait_for_ready<K: FluxResource>(api: &Api<K>, name: &str) -> Result<K, FluxError> {
    Retry::spawn(FixedInterval::new(POLL_INTERVAL), move || async move {
        let object = match api.get(name).await {
            Ok(object) => object,
            Err(e) => return Err(RetryError::permanent(FluxError::Kube(e))),
        };

        match object.readiness() {
            Readiness::Ready => Ok(object),
            Readiness::Failed(message) => Err(RetryError::permanent(
                FluxError::ReconciliationFailed {
                    kind: K::DISPLAY,
                    message,
                },
            )),
            Readiness::Progressing => {
                debug!(name, "reconciliation in progress");
                Err(RetryError::transient(FluxError::NotReady {
                    kind: K::DISPLAY,
                    name: name.to_owned(),
                }))
            }
        }
    })
    .await
}

fn suspend_patch() -> Value {
    json!({ "spec": { "suspend": true } })
}

fn resume_patch(requested_at: &str) -> Value {
    json!({
        "metadata": {
            "annotations": { RECONCILE_REQUESTED_AT_ANNOTATION: requested_at }
        },
        "spec": { "suspend": false }
    })
}
