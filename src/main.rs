use clap::Parser;
use model_viewer::core::config;
use model_viewer::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "model-viewer", about = "Browse the OpenAI model catalog from the terminal")]
struct Args {
    /// Log file to write to (logging is disabled without it)
    #[arg(long, value_name = "PATH")]
    log: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    if let Some(path) = &args.log {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        match File::create(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
            }
            Err(e) => eprintln!("warning: cannot open log file {}: {e}", path.display()),
        }
    }

    log::info!("Model viewer starting up");

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&config);

    // Credentials are checked before the terminal switches to raw mode
    let provider = match tui::build_provider(&resolved) {
        Ok(provider) => provider,
        Err(e) => {
            log::warn!("Startup aborted: {e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match tui::run(provider) {
        Ok(()) => {
            log::info!("Model viewer exited cleanly");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::warn!("Model viewer terminated with error: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
