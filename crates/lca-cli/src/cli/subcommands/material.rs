use clap::Subcommand;

/// Material record commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MaterialCommands {
    /// Add a material record.
    Add {
        assessment: String,
        /// Ore grade in percent
        #[arg(long)]
        ore_grade: Option<f64>,
        /// open_pit, underground or recycled
        #[arg(long)]
        method: Option<String>,
        #[arg(long)]
        quantity: Option<f64>,
    },
    /// List material records of an assessment.
    List { assessment: String },
}
