use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use math_exam::app::{DEFAULT_QUESTION_COUNT, DEFAULT_TOPIC};
use math_exam::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use math_exam::{App, AppError, Config};

#[derive(Parser, Debug)]
#[command(version, about = "Generate math exams with the Gemini API", long_about = None)]
struct Args {
    /// Gemini model to request
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Base URL of the Gemini REST API
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Give up on a request after this many seconds (waits forever if unset)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Initial math topic
    #[arg(long, default_value = DEFAULT_TOPIC)]
    topic: String,

    /// Initial number of questions
    #[arg(long, default_value = DEFAULT_QUESTION_COUNT)]
    count: String,

    /// Append logs to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = math_exam::logging::init(args.log_file.as_deref()) {
        eprintln!("Error opening log file: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?
        .with_model(args.model)
        .with_endpoint(args.endpoint)
        .with_timeout(args.timeout.map(Duration::from_secs));

    math_exam::launch(config, App::with_inputs(args.topic, args.count)).await
}
