use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Bundled sample input for `--example`: a 300-residue bacterial lipase.
pub const EXAMPLE_SEQUENCE: &str = "MGSSHHHHHHSSGLVPRGSHMRGPNPTAASLEASAGPFTVRSFTVSRPSGYGAGTVYYPTNAGGTVGAIAIVPGYTARQSSIKWWGPRLASHGFVVITIDTNSTLDQPSSRSSQQMAALRQVASLNGTSSSPIYGKVDTARMGVMGWSMGGGGSLISAANNPSLKAAAPQAPWDSSTNFSSVTVPTLIFACENDSIAPVNSSALPIYDSMSRNAKQFLEINGGSHSCANSGNSNQALIGKKGVAWMKRFMDNDTRYSTFACENPNSTRVSDFRTANCSLEDPAANKARKEAELAAATAEQ";

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "foldcast - predict protein 3-D structure from an amino-acid sequence via the ESM Atlas fold API, and report pLDDT confidence and composition metrics.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict the structure of a sequence and report its metrics
    Predict(PredictArgs),
    /// Compute composition metrics for a sequence, without any network call
    Analyze(AnalyzeArgs),
    /// Report the mean pLDDT confidence of an existing PDB file
    Inspect(InspectArgs),
}

#[derive(Args, Debug, Clone)]
pub struct PredictArgs {
    /// Amino-acid sequence in single-letter codes
    pub sequence: Option<String>,

    /// Read the sequence from a file; FASTA header lines are skipped
    #[arg(short, long, value_name = "FILE", conflicts_with = "sequence")]
    pub input: Option<PathBuf>,

    /// Use the bundled example sequence
    #[arg(long, conflicts_with_all = ["sequence", "input"])]
    pub example: bool,

    /// Where to write the predicted structure, verbatim as returned
    #[arg(short, long, value_name = "FILE", default_value = "predicted.pdb")]
    pub output: PathBuf,

    /// Do not write the predicted structure to disk
    #[arg(long)]
    pub no_output: bool,

    /// Print the raw structure payload to stdout
    #[arg(long)]
    pub print_payload: bool,

    /// Emit the full prediction report as JSON instead of the table
    #[arg(long)]
    pub json: bool,

    /// Prediction service endpoint URL
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Amino-acid sequence in single-letter codes
    pub sequence: Option<String>,

    /// Read the sequence from a file; FASTA header lines are skipped
    #[arg(short, long, value_name = "FILE", conflicts_with = "sequence")]
    pub input: Option<PathBuf>,

    /// Use the bundled example sequence
    #[arg(long, conflicts_with_all = ["sequence", "input"])]
    pub example: bool,

    /// Emit the metrics as JSON instead of the table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Path to a PDB file carrying pLDDT values in the B-factor column
    pub input: PathBuf,

    /// Emit the result as JSON instead of the table
    #[arg(long)]
    pub json: bool,
}
