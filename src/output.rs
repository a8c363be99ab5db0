use std::io::{self, Write};

use kube::ResourceExt;
use serde::Serialize;
use tabwriter::TabWriter;

use crate::{errors::FluxError, resource::FluxResource};

/// Writes one YAML document, preceded by a `---` separator.
pub fn write_document<W: Write, T: Serialize>(out: &mut W, object: &T) -> Result<(), FluxError> {
    let data = serde_yaml::to_string(object)?;
    writeln!(out, "---")?;
    out.write_all(data.as_bytes())?;
    Ok(())
}

/// Writes the status table printed by `get`.
pub fn write_status_table<W: Write, K: FluxResource>(
    out: &mut W,
    items: &[K],
    with_namespace: bool,
) -> io::Result<()> {
    let mut tw = TabWriter::new(out).padding(3);

    if with_namespace {
        write!(tw, "NAMESPACE\t")?;
    }
    writeln!(tw, "NAME\tREVISION\tSUSPENDED\tREADY\tMESSAGE")?;

    for item in items {
        if with_namespace {
            write!(tw, "{}\t", item.namespace().unwrap_or_default())?;
        }

        let (ready, message) = match item.ready_condition() {
            Some(c) => (c.status.as_str(), c.message.as_str()),
            None => ("Unknown", "waiting to be reconciled"),
        };

        writeln!(
            tw,
            "{}\t{}\t{}\t{}\t{}",
            item.name_any(),
            item.last_revision().unwrap_or_default(),
            if item.is_suspended() { "True" } else { "False" },
            ready,
            message,
        )?;
    }

    tw.flush()
}
