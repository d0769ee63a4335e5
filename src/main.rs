use clap::Parser;
use logoapp::core::config;
use logoapp::store::SqliteStore;
use logoapp::{AppError, Launcher, console, tui};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "logoapp", about = "Patient records for speech therapists")]
struct Args {
    /// Front end to start
    #[arg(short, long, default_value_t, value_enum)]
    launcher: Launcher,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize file logger - writes to logoapp.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("logoapp.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("LogoApp starting up with launcher: {:?}", args.launcher);

    match run(args.launcher) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal: {}", e);
            eprintln!("logoapp: {e}");
            if e.is_storage() {
                eprintln!(
                    "The database file may be damaged. Delete it and restart to recreate an empty one."
                );
            }
            ExitCode::FAILURE
        }
    }
}

fn run(launcher: Launcher) -> Result<(), AppError> {
    let config = config::resolve(&config::load_config()?, launcher);
    let mut store = SqliteStore::open(&config.database_path)?;

    match config.launcher {
        Launcher::Tui => tui::run(store, config.language),
        Launcher::Console => {
            let stdin = io::stdin();
            console::Console::new(&mut store, config.language, stdin.lock(), io::stdout()).run()
        }
    }
}
