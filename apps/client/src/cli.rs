use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for one optimization run.
#[derive(Parser)]
#[command(name = "optimizer")]
#[command(about = "Resume optimizer client - submit a resume against a job description", long_about = None)]
pub struct Cli {
    /// Resume file to optimize (PDF, DOCX, or TXT)
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Job description text
    #[arg(short, long, conflicts_with = "jd_file")]
    pub job_description: Option<String>,

    /// Read the job description from a file instead
    #[arg(long)]
    pub jd_file: Option<PathBuf>,

    /// Optimization service base URL (overrides OPTIMIZER_ENDPOINT)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides OPTIMIZER_TIMEOUT_SECS)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Save the optimized resume to this path after a successful run
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}
