use clap::Parser;

use folio_wm::config::{Cli, DesktopConfig};
use folio_wm::desktop::Desktop;
use folio_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use folio_wm::error::FolioError;
use folio_wm::runner::run_desktop;
use folio_wm::tracing_sub::{self, LogSink};

fn main() -> Result<(), FolioError> {
    let cli = Cli::parse();
    let config = DesktopConfig::try_from(&cli)?;
    tracing_sub::init(
        LogSink::open(config.log_file().map(|p| p.as_path()))?,
        config.log_level(),
    );

    let mut desktop = Desktop::from_config(&config)?;
    let mut output = ConsoleOutputDriver::new()?;
    run_desktop(
        &mut output,
        ConsoleInputDriver::new(),
        &mut desktop,
        config.frame_interval(),
        || chrono::Local::now().naive_local(),
    )?;
    Ok(())
}
