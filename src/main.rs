use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use toukan::LogLevel;
use toukan::core::config;

#[derive(Parser)]
#[command(name = "toukan", about = "Terminal kanban board")]
struct Args {
    /// Board file to open (defaults to ~/.toukan.json)
    #[arg(short, long)]
    board: Option<PathBuf>,

    /// Config file (defaults to ~/.toukan/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file verbosity
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - stdout belongs to the TUI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(log_file) = open_log_file() {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }

    log::info!("TouKan starting up");

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}, using defaults", e);
            config::ToukanConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.board.as_deref());
    log::info!("Using board {}", resolved.board_path.display());

    toukan::tui::run(resolved)
}

/// `~/.toukan/toukan.log`, or `toukan.log` in the working directory.
fn open_log_file() -> Option<File> {
    let in_data_dir = config::data_dir().and_then(|dir| {
        fs::create_dir_all(&dir).ok()?;
        File::create(dir.join("toukan.log")).ok()
    });
    in_data_dir.or_else(|| File::create("toukan.log").ok())
}
