//! `flux export`: print resources as YAML that can be applied to another cluster.

use std::io::Write;

use k8s_openapi::api::core::v1::Secret;
use kube::{
    Api, Client, ResourceExt,
    api::{ListParams, ObjectMeta},
};
use tracing::{debug, warn};

use crate::{cli::ExportArgs, errors::FluxError, output::write_document, resource::FluxResource};

pub async fn export<K: FluxResource, W: Write>(
    client: &Client,
    namespace: &str,
    args: &ExportArgs,
    with_credentials: bool,
    out: &mut W,
) -> Result<(), FluxError> {
    if !args.all && args.name.is_none() {
        return Err(FluxError::NameRequired);
    }

    let api = Api::<K>::namespaced(client.clone(), namespace);

    let items = match &args.name {
        Some(name) if !args.all => {
            let object = api
                .get(name)
                .await
                .map_err(|e| FluxError::from_lookup(e, K::DISPLAY, name, namespace))?;
            vec![object]
        }
        _ => {
            let list = api.list(&ListParams::default()).await?;
            if list.items.is_empty() {
                warn!("no {} objects found in {} namespace", K::DISPLAY, namespace);
                return Ok(());
            }
            list.items
        }
    };

    for object in &items {
        debug!(name = %object.name_any(), kind = K::DISPLAY, "exporting");
        write_document(out, &object.export())?;

        if with_credentials {
            export_credentials(client, object, out).await?;
        }
    }

    Ok(())
}

/// Writes the Secret referenced by `object`, keeping only its name, namespace, data and type.
async fn export_credentials<K: FluxResource, W: Write>(
    client: &Client,
    object: &K,
    out: &mut W,
) -> Result<(), FluxError> {
    let Some(secret_name) = object.credentials_secret() else {
        return Ok(());
    };

    let namespace = object.namespace().unwrap_or_default();
    let secrets = Api::<Secret>::namespaced(client.clone(), &namespace);
    let credentials = secrets
        .get(secret_name)
        .await
        .map_err(|source| FluxError::SecretRetrieval {
            name: secret_name.to_owned(),
            source,
        })?;

    write_document(out, &exported_secret(secret_name, &namespace, credentials))
}

fn exported_secret(name: &str, namespace: &str, credentials: Secret) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_owned()),
            namespace: Some(namespace.to_owned()),
            ..ObjectMeta::default()
        },
        data: credentials.data,
        type_: credentials.type_,
        ..Secret::default()
    }
}
