use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AssessmentCommands, MaterialCommands, ProcessingCommands, TransportCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Assessments.
    Assessment {
        #[command(subcommand)]
        action: AssessmentCommands,
    },
    /// Material records.
    Material {
        #[command(subcommand)]
        action: MaterialCommands,
    },
    /// Processing records.
    Processing {
        #[command(subcommand)]
        action: ProcessingCommands,
    },
    /// Transport legs.
    Transport {
        #[command(subcommand)]
        action: TransportCommands,
    },
    /// Fill missing processing measurements from benchmarks.
    Estimate(AssessmentArgs),
    /// Compute and store impact totals; completes the assessment.
    Impacts(AssessmentArgs),
    /// Show the stored impact summary.
    Summary(AssessmentArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// An assessment id as typed on the command line.
#[derive(Clone, Debug, Args)]
pub struct AssessmentArgs {
    pub assessment: String,
}

/// Arguments for `lca schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
