mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fonoplan",
    version,
    about = "AI-assisted activity planner for speech therapy sessions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract text from a PDF reference document (without generating)
    Extract {
        /// Path to PDF file
        input_file: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Write the extraction result to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
    /// Build and print the generation prompt (without calling the API)
    Prompt {
        /// Path to session request JSON file
        session_file: PathBuf,

        /// Reference PDF file(s), attached in order
        #[arg(short, long = "refs", value_name = "FILE")]
        refs: Vec<PathBuf>,
    },
    /// Generate an activity plan from a session request
    Generate {
        /// Path to session request JSON file
        session_file: PathBuf,

        /// Reference PDF file(s), attached in order
        #[arg(short, long = "refs", value_name = "FILE")]
        refs: Vec<PathBuf>,

        /// Gemini API key (defaults to the GEMINI_API_KEY environment variable)
        #[arg(short, long, value_name = "KEY")]
        api_key: Option<String>,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,

        /// Write the plain-text export to a file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Extract {
            input_file,
            output,
            out,
        } => commands::extract::run(input_file, &output, out),
        Commands::Prompt { session_file, refs } => commands::prompt::run(session_file, refs),
        Commands::Generate {
            session_file,
            refs,
            api_key,
            output,
            out,
        } => commands::generate::run(session_file, refs, api_key, &output, out).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
