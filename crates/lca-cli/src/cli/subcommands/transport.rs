use clap::Subcommand;

/// Transport leg commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TransportCommands {
    /// Add a transport leg.
    Add {
        assessment: String,
        /// truck, rail or ship
        #[arg(long)]
        mode: String,
        /// km
        #[arg(long)]
        distance: Option<f64>,
        /// tons
        #[arg(long)]
        load: Option<f64>,
    },
    /// List transport legs of an assessment.
    List { assessment: String },
}
