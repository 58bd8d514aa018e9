use std::fs::OpenOptions;
use std::io::Write;

use anyhow::{Context, Result};
use grubsort::app::{self, App};
use grubsort::{GrubMkconfig, PkexecInstaller, Settings};

fn main() -> Result<()> {
    let settings = Settings::load().context("failed to load grubsort settings")?;
    init_logging(&settings);
    log::info!("grubsort {} starting", env!("CARGO_PKG_VERSION"));

    let installer = PkexecInstaller::from_settings(&settings);
    let generator = GrubMkconfig::from_settings(&settings);
    let mut app = App::new(settings, Box::new(installer), Box::new(generator));

    app::run(&mut app).context("terminal UI failed")?;
    log::info!("grubsort exiting");
    Ok(())
}

/// Log to a file; stderr belongs to the alternate screen while the UI runs.
fn init_logging(settings: &Settings) {
    let file = match OpenOptions::new()
        .create(true)
        .append(true)
        .open(&settings.log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "Logging disabled: cannot open {}: {}",
                settings.log_file.display(),
                e
            );
            return;
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
