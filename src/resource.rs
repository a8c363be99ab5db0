//! Behaviour shared by the toolkit resources the CLI operates on.

use std::fmt::Debug;

use k8s_openapi::NamespaceResourceScope;
use kube::{Resource, ResourceExt, api::ObjectMeta};
use serde::{Serialize, de::DeserializeOwned};

use crate::crds::*;

/// Reconciliation state derived from the `Ready` condition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    Failed(String),
    Progressing,
}

pub trait FluxResource:
    Resource<DynamicType = (), Scope = NamespaceResourceScope>
    + Clone
    + Debug
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Name used in user-facing messages, e.g. `source git`.
    const DISPLAY: &'static str;

    fn is_suspended(&self) -> bool;

    fn conditions(&self) -> &[Condition];

    fn observed_generation(&self) -> Option<i64>;

    /// Last revision the controller produced or applied.
    fn last_revision(&self) -> Option<&str>;

    /// Copy of the object carrying only what is needed to recreate it.
    fn export(&self) -> Self;

    /// Secret holding the credentials the object authenticates with.
    fn credentials_secret(&self) -> Option<&str> {
        None
    }

    fn ready_condition(&self) -> Option<&Condition> {
        self.conditions()
            .iter()
            .find(|c| c.type_ == READY_CONDITION)
    }

    fn readiness(&self) -> Readiness {
        let Some(ready) = self.ready_condition() else {
            return Readiness::Progressing;
        };

        // A condition written for an older generation says nothing about the current spec
        if let Some(generation) = self.meta().generation
            && self.observed_generation() != Some(generation)
        {
            return Readiness::Progressing;
        }

        match ready.status.as_str() {
            "True" => Readiness::Ready,
            "False" => Readiness::Failed(ready.message.clone()),
            _ => Readiness::Progressing,
        }
    }
}

fn exported_meta<K: Resource>(source: &K) -> ObjectMeta {
    let meta = source.meta();
    ObjectMeta {
        name: meta.name.clone(),
        namespace: meta.namespace.clone(),
        labels: meta.labels.clone(),
        annotations: meta.annotations.clone(),
        ..ObjectMeta::default()
    }
}

impl FluxResource for GitRepository {
    const DISPLAY: &'static str = "source git";

    fn is_suspended(&self) -> bool {
        self.spec.suspend
    }

    fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|s| s.conditions.as_slice())
            .unwrap_or_default()
    }

    fn observed_generation(&self) -> Option<i64> {
        self.status.as_ref().and_then(|s| s.observed_generation)
    }

    fn last_revision(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.artifact.as_ref())
            .map(|a| a.revision.as_str())
    }

    fn export(&self) -> Self {
        let mut export = GitRepository::new(&self.name_any(), self.spec.clone());
        export.metadata = exported_meta(self);
        export
    }

    fn credentials_secret(&self) -> Option<&str> {
        self.spec.secret_ref.as_ref().map(|r| r.name.as_str())
    }
}

impl FluxResource for HelmRepository {
    const DISPLAY: &'static str = "source helm";

    fn is_suspended(&self) -> bool {
        self.spec.suspend
    }

    fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|s| s.conditions.as_slice())
            .unwrap_or_default()
    }

    fn observed_generation(&self) -> Option<i64> {
        self.status.as_ref().and_then(|s| s.observed_generation)
    }

    fn last_revision(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.artifact.as_ref())
            .map(|a| a.revision.as_str())
    }

    fn export(&self) -> Self {
        let mut export = HelmRepository::new(&self.name_any(), self.spec.clone());
        export.metadata = exported_meta(self);
        export
    }

    fn credentials_secret(&self) -> Option<&str> {
        self.spec.secret_ref.as_ref().map(|r| r.name.as_str())
    }
}

impl FluxResource for Kustomization {
    const DISPLAY: &'static str = "kustomization";

    fn is_suspended(&self) -> bool {
        self.spec.suspend
    }

    fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|s| s.conditions.as_slice())
            .unwrap_or_default()
    }

    fn observed_generation(&self) -> Option<i64> {
        self.status.as_ref().and_then(|s| s.observed_generation)
    }

    fn last_revision(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.last_applied_revision.as_deref())
    }

    fn export(&self) -> Self {
        let mut export = Kustomization::new(&self.name_any(), self.spec.clone());
        export.metadata = exported_meta(self);
        export
    }
}

impl FluxResource for HelmRelease {
    const DISPLAY: &'static str = "helmrelease";

    fn is_suspended(&self) -> bool {
        self.spec.suspend
    }

    fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|s| s.conditions.as_slice())
            .unwrap_or_default()
    }

    fn observed_generation(&self) -> Option<i64> {
        self.status.as_ref().and_then(|s| s.observed_generation)
    }

    fn last_revision(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.last_applied_revision.as_deref())
    }

    fn export(&self) -> Self {
        let mut export = HelmRelease::new(&self.name_any(), self.spec.clone());
        export.metadata = exported_meta(self);
        export
    }
}
