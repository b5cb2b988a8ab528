use clap::Subcommand;

/// Assessment commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AssessmentCommands {
    /// Create a draft assessment.
    Create {
        #[arg(long)]
        name: String,
        /// aluminium, copper or steel
        #[arg(long)]
        metal: String,
    },
    /// Get an assessment by ID.
    Get { id: String },
    /// List assessments, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Move a draft assessment to in_progress.
    Start { id: String },
}
