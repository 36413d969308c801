//! tsukamoto CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "tsukamoto",
    version,
    about = "Fuzzy (Tsukamoto) academic performance assessment"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess one student from five metrics
    Assess {
        /// Grade point average (0-4)
        #[arg(long)]
        gpa: f64,

        /// Core course average (0-100)
        #[arg(long)]
        cca: f64,

        /// Attendance rate as a fraction (0-1)
        #[arg(long)]
        attendance: f64,

        /// Midterm exam score (0-100)
        #[arg(long)]
        midterm: f64,

        /// Final exam score (0-100)
        #[arg(long)]
        final_exam: f64,

        /// Print every activated rule
        #[arg(long)]
        trace: bool,

        /// Print membership degrees per metric
        #[arg(long)]
        membership: bool,

        /// Skip input range checks
        #[arg(long)]
        no_validate: bool,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Assess every student in a CSV dataset
    Batch {
        /// Path to the CSV dataset
        #[arg(long)]
        input: PathBuf,

        /// Output format: text, json
        #[arg(long)]
        format: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Measure accuracy against a labelled CSV dataset
    Accuracy {
        /// Path to the labelled CSV dataset
        #[arg(long)]
        input: PathBuf,

        /// Write the JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// List misclassified records
        #[arg(long)]
        show_misclassified: bool,

        /// Exit code 1 if accuracy falls below this fraction
        #[arg(long)]
        min_accuracy: Option<f64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the rule base
    Rules {
        /// Only rules with this consequent (e.g. "good", "needs improvement")
        #[arg(long)]
        consequent: Option<String>,
    },

    /// Create starter config and sample dataset
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tsukamoto=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Assess {
            gpa,
            cca,
            attendance,
            midterm,
            final_exam,
            trace,
            membership,
            no_validate,
            format,
            config,
        } => commands::assess::execute(
            commands::assess::AssessArgs {
                gpa,
                cca,
                attendance,
                midterm,
                final_exam,
                trace,
                membership,
                no_validate,
                format,
            },
            config,
        ),
        Commands::Batch {
            input,
            format,
            config,
        } => commands::batch::execute(input, format, config),
        Commands::Accuracy {
            input,
            output,
            show_misclassified,
            min_accuracy,
            config,
        } => commands::accuracy::execute(input, output, show_misclassified, min_accuracy, config),
        Commands::Rules { consequent } => commands::rules::execute(consequent),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
