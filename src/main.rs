mod analysis;
mod app;
mod config;
mod data;
mod error;
mod state;
mod ui;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use app::ExplorerApp;
use config::SourceConfig;
use ui::console::StdioConsole;
use ui::render::TextSink;

fn main() -> ExitCode {
    env_logger::init();

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let config = SourceConfig::from_dir(&data_dir);

    // Refuse to start against a partially-broken dataset: every source must
    // open and carry its required columns before the first prompt.
    if let Err(e) = data::loader::validate_all(&config) {
        log::error!("startup validation failed: {e}");
        eprintln!("Error: {e}. Program cannot continue.");
        return ExitCode::FAILURE;
    }

    let mut explorer = ExplorerApp::new(config, StdioConsole, TextSink::new(io::stdout()));
    match explorer.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("session aborted: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
