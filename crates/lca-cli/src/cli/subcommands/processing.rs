use clap::Subcommand;

/// Processing record commands. Omitted measurements are stored as null.
#[derive(Clone, Debug, Subcommand)]
pub enum ProcessingCommands {
    /// Add a processing record.
    Add {
        assessment: String,
        /// kWh
        #[arg(long)]
        energy: Option<f64>,
        /// m³
        #[arg(long)]
        water: Option<f64>,
        /// tons
        #[arg(long)]
        waste: Option<f64>,
        /// percent
        #[arg(long)]
        efficiency: Option<f64>,
    },
    /// List processing records of an assessment.
    List { assessment: String },
}
