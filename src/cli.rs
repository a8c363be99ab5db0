use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

/// Command line utility for assembling Kubernetes CD pipelines the GitOps way.
#[derive(Parser, Debug)]
#[command(name = "flux", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to the kubeconfig file
    #[arg(long, global = true, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Kubernetes context to use
    #[arg(long, global = true)]
    pub context: Option<String>,

    /// The namespace scope for this operation
    #[arg(
        short,
        long,
        global = true,
        env = "FLUX_SYSTEM_NAMESPACE",
        default_value = "flux-system"
    )]
    pub namespace: String,

    /// Timeout for this operation
    #[arg(long, global = true, default_value = "5m", value_parser = humantime::parse_duration)]
    pub timeout: Duration,

    /// Print generated objects and debug logs
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get the resources and their status
    #[command(subcommand)]
    Get(GetCommand),

    /// Export resources in YAML format
    #[command(subcommand)]
    Export(ExportCommand),

    /// Suspend the reconciliation of resources
    #[command(subcommand)]
    Suspend(SuspendCommand),

    /// Resume suspended resources
    #[command(subcommand)]
    Resume(ResumeCommand),
}

#[derive(Subcommand, Debug)]
pub enum GetCommand {
    /// Get source statuses
    #[command(subcommand, alias = "source")]
    Sources(GetSourceCommand),

    /// Get Kustomization statuses
    #[command(aliases = ["kustomization", "ks"])]
    Kustomizations(GetArgs),

    /// Get HelmRelease statuses
    #[command(aliases = ["helmrelease", "hr"])]
    Helmreleases(GetArgs),
}

#[derive(Subcommand, Debug)]
pub enum ExportCommand {
    /// Export sources
    #[command(subcommand)]
    Source(ExportSourceCommand),

    /// Export Kustomization resources
    #[command(alias = "ks")]
    Kustomization(ExportArgs),

    /// Export HelmRelease resources
    #[command(alias = "hr")]
    Helmrelease(ExportArgs),
}

#[derive(Subcommand, Debug)]
pub enum SuspendCommand {
    /// Suspend sources
    #[command(subcommand)]
    Source(SuspendSourceCommand),

    /// Suspend reconciliation of a Kustomization
    #[command(alias = "ks")]
    Kustomization(NameArgs),

    /// Suspend reconciliation of a HelmRelease
    #[command(alias = "hr")]
    Helmrelease(NameArgs),
}

#[derive(Subcommand, Debug)]
pub enum ResumeCommand {
    /// Resume sources
    #[command(subcommand)]
    Source(ResumeSourceCommand),

    /// Resume a suspended Kustomization
    #[command(alias = "ks")]
    Kustomization(ResumeArgs),

    /// Resume a suspended HelmRelease
    #[command(alias = "hr")]
    Helmrelease(ResumeArgs),
}

#[derive(Subcommand, Debug)]
pub enum GetSourceCommand {
    /// Get GitRepository source statuses
    Git(GetArgs),

    /// Get HelmRepository source statuses
    Helm(GetArgs),
}

#[derive(Subcommand, Debug)]
pub enum ExportSourceCommand {
    /// Export GitRepository sources in YAML format
    Git(ExportSourceArgs),

    /// Export HelmRepository sources in YAML format
    Helm(ExportSourceArgs),
}

#[derive(Subcommand, Debug)]
pub enum SuspendSourceCommand {
    /// Suspend reconciliation of a GitRepository
    Git(NameArgs),

    /// Suspend reconciliation of a HelmRepository
    Helm(NameArgs),
}

#[derive(Subcommand, Debug)]
pub enum ResumeSourceCommand {
    /// Resume a suspended GitRepository
    Git(ResumeArgs),

    /// Resume a suspended HelmRepository
    Helm(ResumeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GetArgs {
    /// Show a single resource
    pub name: Option<String>,

    /// List the requested objects across all namespaces
    #[arg(short = 'A', long, conflicts_with = "name")]
    pub all_namespaces: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Name of the resource to export
    pub name: Option<String>,

    /// Select all resources in the namespace
    #[arg(long)]
    pub all: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ExportSourceArgs {
    #[command(flatten)]
    pub export: ExportArgs,

    /// Include the credential secrets referenced by the source
    #[arg(long)]
    pub with_credentials: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NameArgs {
    /// Name of the resource
    pub name: String,
}

#[derive(Args, Debug, Clone)]
pub struct ResumeArgs {
    /// Name of the resource
    pub name: String,

    /// Return once resumed instead of waiting for the reconciliation to finish
    #[arg(long)]
    pub no_wait: bool,
}
