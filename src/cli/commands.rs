use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "taxplan", about = "Match a questionnaire profile against tax-planning strategies")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SummaryFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the normalized profile for a set of answers
    Profile {
        /// JSON answers (age, maritalStatus, employmentStatus, retirementRange, realEstateRange, charitableGiving, has* flags, isTransitionYear)
        json: String,
    },
    /// List strategies that match a set of answers, best first
    Match {
        /// JSON answers
        json: String,
        /// Include raw priority scores
        #[arg(long)]
        scores: bool,
        #[arg(long)]
        limit: Option<usize>,
        /// Only show this category (retirement, investment, real-estate, charitable, business, education, healthcare, estate)
        #[arg(long)]
        category: Option<String>,
    },
    /// Generate a planning summary document
    Summary {
        /// JSON answers
        json: String,
        /// Number of strategies to include (default: TAXPLAN_SUMMARY_TOP or 5)
        #[arg(long)]
        top: Option<usize>,
        #[arg(long, value_enum, default_value = "text")]
        format: SummaryFormat,
    },
    /// List catalog entries
    Catalog {
        /// Optional category filter
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one catalog entry
    Show {
        /// Strategy id
        id: String,
    },
}
