use std::io::Write;

use kube::{Api, Client, api::ListParams};
use tracing::warn;

use crate::{cli::GetArgs, errors::FluxError, output::write_status_table, resource::FluxResource};

pub async fn get<K: FluxResource, W: Write>(
    client: &Client,
    namespace: &str,
    args: &GetArgs,
    out: &mut W,
) -> Result<(), FluxError> {
    let items = if let Some(name) = &args.name {
        let api = Api::<K>::namespaced(client.clone(), namespace);
        let object = api
            .get(name)
            .await
            .map_err(|e| FluxError::from_lookup(e, K::DISPLAY, name, namespace))?;
        vec![object]
    } else {
        let api = if args.all_namespaces {
            Api::<K>::all(client.clone())
        } else {
            Api::<K>::namespaced(client.clone(), namespace)
        };
        api.list(&ListParams::default()).await?.items
    };

    if items.is_empty() {
        if args.all_namespaces {
            warn!("no {} objects found in any namespace", K::DISPLAY);
        } else {
            warn!("no {} objects found in {} namespace", K::DISPLAY, namespace);
        }
        return Ok(());
    }

    write_status_table(out, &items, args.all_namespaces)?;
    Ok(())
}
