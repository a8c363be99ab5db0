use std::io::Write;

use kube::Client;

use crate::{
    cli::{
        Command, ExportCommand, ExportSourceCommand, GetCommand, GetSourceCommand, GlobalArgs,
        ResumeCommand, ResumeSourceCommand, SuspendCommand, SuspendSourceCommand,
    },
    crds::{GitRepository, HelmRelease, HelmRepository, Kustomization},
    errors::FluxError,
};

pub mod export;
pub mod get;
pub mod suspend;

/// Runs one command against the cluster, writing results to `out`.
pub async fn execute<W: Write>(
    client: &Client,
    global: &GlobalArgs,
    command: &Command,
    out: &mut W,
) -> Result<(), FluxError> {
    let ns = global.namespace.as_str();

    match command {
        Command::Get(cmd) => match cmd {
            GetCommand::Sources(GetSourceCommand::Git(args)) => {
                get::get::<GitRepository, _>(client, ns, args, out).await
            }
            GetCommand::Sources(GetSourceCommand::Helm(args)) => {
                get::get::<HelmRepository, _>(client, ns, args, out).await
            }
            GetCommand::Kustomizations(args) => {
                get::get::<Kustomization, _>(client, ns, args, out).await
            }
            GetCommand::Helmreleases(args) => {
                get::get::<HelmRelease, _>(client, ns, args, out).await
            }
        },
        Command::Export(cmd) => match cmd {
            ExportCommand::Source(ExportSourceCommand::Git(args)) => {
                let creds = args.with_credentials;
                export::export::<GitRepository, _>(client, ns, &args.export, creds, out).await
            }
            ExportCommand::Source(ExportSourceCommand::Helm(args)) => {
                let creds = args.with_credentials;
                export::export::<HelmRepository, _>(client, ns, &args.export, creds, out).await
            }
            ExportCommand::Kustomization(args) => {
                export::export::<Kustomization, _>(client, ns, args, false, out).await
            }
            ExportCommand::Helmrelease(args) => {
                export::export::<HelmRelease, _>(client, ns, args, false, out).await
            }
        },
        Command::Suspend(cmd) => match cmd {
            SuspendCommand::Source(SuspendSourceCommand::Git(args)) => {
                suspend::suspend::<GitRepository>(client, ns, &args.name).await
            }
            SuspendCommand::Source(SuspendSourceCommand::Helm(args)) => {
                suspend::suspend::<HelmRepository>(client, ns, &args.name).await
            }
            SuspendCommand::Kustomization(args) => {
                suspend::suspend::<Kustomization>(client, ns, &args.name).await
            }
            SuspendCommand::Helmrelease(args) => {
                suspend::suspend::<HelmRelease>(client, ns, &args.name).await
            }
        },
        Command::Resume(cmd) => match cmd {
            ResumeCommand::Source(ResumeSourceCommand::Git(args)) => {
                suspend::resume::<GitRepository>(client, ns, &args.name, !args.no_wait).await
            }
            ResumeCommand::Source(ResumeSourceCommand::Helm(args)) => {
                suspend::resume::<HelmRepository>(client, ns, &args.name, !args.no_wait).await
            }
            ResumeCommand::Kustomization(args) => {
                suspend::resume::<Kustomization>(client, ns, &args.name, !args.no_wait).await
            }
            ResumeCommand::Helmrelease(args) => {
                suspend::resume::<HelmRelease>(client, ns, &args.name, !args.no_wait).await
            }
        },
    }
}
