//! Mock API server and fixtures shared by the command tests.
#![allow(dead_code)]

use std::collections::BTreeMap;

use flux_cli::crds::*;
use http::{Method, Request, Response, StatusCode};
use k8s_openapi::{ByteString, api::core::v1::Secret};
use kube::{Client, api::ObjectMeta, client::Body};
use serde::Serialize;
use serde_json::{Value, json};
use tower_test::mock::{self, Handle};

pub const NAMESPACE: &str = "flux-system";

/// What the client sent for one request.
#[derive(Debug)]
pub struct Recorded {
    pub method: Method,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

pub struct ApiServer(Handle<Request<Body>, Response<Body>>);

pub fn mock_client() -> (Client, ApiServer) {
    let (service, handle) = mock::pair::<Request<Body>, Response<Body>>();
    (Client::new(service, NAMESPACE), ApiServer(handle))
}

impl ApiServer {
    /// Answers the next request and returns what was asked.
    pub async fn respond(&mut self, status: StatusCode, body: Value) -> Recorded {
        let (request, send) = self
            .0
            .next_request()
            .await
            .expect("client should call the API server");

        let method = request.method().clone();
        let path = request.uri().path().to_owned();
        let content_type = request
            .headers()
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let bytes = request
            .into_body()
            .collect_bytes()
            .await
            .expect("request body should be readable");
        let body_sent = (!bytes.is_empty())
            .then(|| serde_json::from_slice(&bytes).expect("request body should be JSON"));

        send.send_response(
            Response::builder()
                .status(status)
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        );

        Recorded {
            method,
            path,
            content_type,
            body: body_sent,
        }
    }

    pub async fn ok<T: Serialize>(&mut self, object: &T) -> Recorded {
        self.respond(StatusCode::OK, serde_json::to_value(object).unwrap())
            .await
    }

    pub async fn not_found(&mut self, resource: &str, name: &str) -> Recorded {
        self.respond(
            StatusCode::NOT_FOUND,
            json!({
                "kind": "Status",
                "apiVersion": "v1",
                "metadata": {},
                "status": "Failure",
                "message": format!("{resource} \"{name}\" not found"),
                "reason": "NotFound",
                "code": 404
            }),
        )
        .await
    }
}

pub fn list<T: Serialize>(api_version: &str, kind: &str, items: &[T]) -> Value {
    json!({
        "apiVersion": api_version,
        "kind": format!("{kind}List"),
        "metadata": { "resourceVersion": "1" },
        "items": items,
    })
}

fn server_meta(name: &str, namespace: &str, generation: i64) -> ObjectMeta {
    ObjectMeta {
        name: Some(name.to_owned()),
        namespace: Some(namespace.to_owned()),
        uid: Some(format!("{name}-uid")),
        resource_version: Some("4242".to_owned()),
        generation: Some(generation),
        labels: Some(BTreeMap::from([(
            "kustomize.toolkit.fluxcd.io/name".to_owned(),
            "flux-system".to_owned(),
        )])),
        ..ObjectMeta::default()
    }
}

pub fn ready_condition(status: &str, message: &str) -> Condition {
    Condition {
        type_: READY_CONDITION.to_owned(),
        status: status.to_owned(),
        reason: if status == "True" {
            "ReconciliationSucceeded".to_owned()
        } else {
            "ReconciliationFailed".to_owned()
        },
        message: message.to_owned(),
        last_transition_time: Some("2026-10-19T08:00:00Z".to_owned()),
        ..Condition::default()
    }
}

pub fn git_repository(name: &str, secret: Option<&str>) -> GitRepository {
    let mut repo = GitRepository::new(
        name,
        GitRepositorySpec {
            url: format!("ssh://git@github.com/example/{name}"),
            secret_ref: secret.map(|s| LocalObjectReference { name: s.to_owned() }),
            interval: "1m0s".to_owned(),
            reference: Some(GitRepositoryRef {
                branch: Some("main".to_owned()),
                ..GitRepositoryRef::default()
            }),
            ..GitRepositorySpec::default()
        },
    );
    repo.metadata = server_meta(name, NAMESPACE, 1);
    repo.status = Some(SourceStatus {
        observed_generation: Some(1),
        conditions: vec![ready_condition("True", "Fetched revision: main/5b8a6c1")],
        url: Some(format!("http://source-controller/gitrepository/{name}/latest.tar.gz")),
        artifact: Some(Artifact {
            path: format!("gitrepository/flux-system/{name}/5b8a6c1.tar.gz"),
            url: format!("http://source-controller/gitrepository/{name}/5b8a6c1.tar.gz"),
            revision: "main/5b8a6c1".to_owned(),
            ..Artifact::default()
        }),
    });
    repo
}

pub fn kustomization(
    name: &str,
    namespace: &str,
    generation: i64,
    status: Option<KustomizationStatus>,
) -> Kustomization {
    let mut ks = Kustomization::new(
        name,
        KustomizationSpec {
            interval: "10m0s".to_owned(),
            path: Some(format!("./clusters/{name}")),
            prune: true,
            source_ref: CrossNamespaceObjectReference {
                kind: "GitRepository".to_owned(),
                name: "flux-system".to_owned(),
                ..CrossNamespaceObjectReference::default()
            },
            ..KustomizationSpec::default()
        },
    );
    ks.metadata = server_meta(name, namespace, generation);
    ks.status = status;
    ks
}

pub fn kustomization_status(observed: i64, ready: Condition) -> Option<KustomizationStatus> {
    Some(KustomizationStatus {
        observed_generation: Some(observed),
        conditions: vec![ready],
        last_applied_revision: Some("main/5b8a6c1".to_owned()),
        last_attempted_revision: Some("main/5b8a6c1".to_owned()),
    })
}

pub fn helm_release(name: &str) -> HelmRelease {
    let mut hr = HelmRelease::new(
        name,
        HelmReleaseSpec {
            chart: HelmChartTemplate {
                spec: HelmChartTemplateSpec {
                    chart: name.to_owned(),
                    version: Some(">=4.0.0".to_owned()),
                    source_ref: CrossNamespaceObjectReference {
                        kind: "HelmRepository".to_owned(),
                        name: "podinfo".to_owned(),
                        ..CrossNamespaceObjectReference::default()
                    },
                    ..HelmChartTemplateSpec::default()
                },
                ..HelmChartTemplate::default()
            },
            interval: "5m0s".to_owned(),
            values: Some(json!({ "replicaCount": 2 })),
            ..HelmReleaseSpec::default()
        },
    );
    hr.metadata = server_meta(name, NAMESPACE, 1);
    hr
}

pub fn secret(name: &str) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            namespace: Some(NAMESPACE.to_owned()),
            uid: Some(format!("{name}-uid")),
            resource_version: Some("17".to_owned()),
            ..ObjectMeta::default()
        },
        data: Some(BTreeMap::from([
            ("username".to_owned(), ByteString(b"git".to_vec())),
            ("password".to_owned(), ByteString(b"s3cr3t".to_vec())),
        ])),
        type_: Some("Opaque".to_owned()),
        ..Secret::default()
    }
}

/// Splits exported output into its YAML documents.
pub fn documents(out: &[u8]) -> Vec<Value> {
    let text = std::str::from_utf8(out).unwrap();
    assert!(text.is_empty() || text.starts_with("---\n"), "output: {text}");
    text.split("---\n")
        .filter(|doc| !doc.trim().is_empty())
        .map(|doc| serde_yaml::from_str(doc).unwrap())
        .collect()
}
