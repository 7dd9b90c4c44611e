use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::Level;

use crate::appearance::{Appearance, background_index};
use crate::constants::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH, MAX_OPACITY, MIN_OPACITY};
use crate::content::{ContentId, UnknownContentId};
use crate::desktop::CellMetrics;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "folio-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "A portfolio desktop with draggable, stackable windows"
)]
pub struct Cli {
    /// Desktop background id (bg1..bg6).
    #[arg(long, value_name = "ID")]
    pub background: Option<String>,

    /// Background opacity in percent.
    #[arg(long, value_name = "PERCENT", default_value_t = MAX_OPACITY)]
    pub opacity: u8,

    /// Window to open at start. Repeat to open several, in order.
    #[arg(long = "open", value_name = "CONTENT")]
    pub open: Vec<String>,

    /// Pixel width of one terminal cell.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CELL_WIDTH)]
    pub cell_width: u16,

    /// Pixel height of one terminal cell.
    #[arg(long, value_name = "PX", default_value_t = DEFAULT_CELL_HEIGHT)]
    pub cell_height: u16,

    /// Redraw rate.
    #[arg(long, value_name = "FPS", default_value_t = 60)]
    pub fps: u32,

    /// Write logs to this file. Without it logs are discarded.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown background `{0}`")]
    UnknownBackground(String),
    #[error("opacity must be between 10 and 100, got {0}")]
    Opacity(u8),
    #[error("cell size must be between 1 and 64 pixels, got {0}x{1}")]
    CellSize(u16, u16),
    #[error("fps must be between 1 and 240, got {0}")]
    Fps(u32),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
    #[error(transparent)]
    UnknownContent(#[from] UnknownContentId),
}

/// Validated startup settings.
#[derive(Debug, Clone)]
pub struct DesktopConfig {
    appearance: Appearance,
    open: Vec<ContentId>,
    metrics: CellMetrics,
    frame_interval: Duration,
    log_file: Option<PathBuf>,
    log_level: Level,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            appearance: Appearance::default(),
            open: Vec::new(),
            metrics: CellMetrics::default(),
            frame_interval: Duration::from_secs(1) / 60,
            log_file: None,
            log_level: Level::INFO,
        }
    }
}

impl DesktopConfig {
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    pub fn open(&self) -> &[ContentId] {
        &self.open
    }

    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

impl TryFrom<&Cli> for DesktopConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let background = match &cli.background {
            Some(id) => background_index(id)
                .ok_or_else(|| ConfigError::UnknownBackground(id.clone()))?,
            None => 0,
        };
        if !(MIN_OPACITY..=MAX_OPACITY).contains(&cli.opacity) {
            return Err(ConfigError::Opacity(cli.opacity));
        }
        let cell_range = 1..=64;
        if !cell_range.contains(&cli.cell_width) || !cell_range.contains(&cli.cell_height) {
            return Err(ConfigError::CellSize(cli.cell_width, cli.cell_height));
        }
        if !(1..=240).contains(&cli.fps) {
            return Err(ConfigError::Fps(cli.fps));
        }
        let log_level = cli
            .log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::LogLevel(cli.log_level.clone()))?;
        let open = cli
            .open
            .iter()
            .map(|name| name.parse::<ContentId>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            appearance: Appearance::new(background, cli.opacity),
            open,
            metrics: CellMetrics::new(cli.cell_width, cli.cell_height),
            frame_interval: Duration::from_secs(1) / cli.fps,
            log_file: cli.log_file.clone(),
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<DesktopConfig, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("folio-wm").chain(args.iter().copied()))
            .expect("cli parses");
        DesktopConfig::try_from(&cli)
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.appearance(), Appearance::default());
        assert!(config.open().is_empty());
        assert_eq!(config.metrics(), CellMetrics::new(8, 16));
        assert_eq!(config.log_level(), Level::INFO);
        assert!(config.log_file().is_none());
    }

    #[test]
    fn open_list_keeps_order() {
        let config = parse(&["--open", "terminal", "--open", "about", "--background", "bg3"])
            .unwrap();
        assert_eq!(config.open(), &[ContentId::Terminal, ContentId::About]);
        assert_eq!(config.appearance().background_index(), 2);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            parse(&["--opacity", "5"]),
            Err(ConfigError::Opacity(5))
        ));
        assert!(matches!(
            parse(&["--background", "bg9"]),
            Err(ConfigError::UnknownBackground(_))
        ));
        assert!(matches!(
            parse(&["--open", "games"]),
            Err(ConfigError::UnknownContent(_))
        ));
        assert!(matches!(
            parse(&["--cell-width", "0"]),
            Err(ConfigError::CellSize(0, 16))
        ));
        assert!(matches!(parse(&["--fps", "0"]), Err(ConfigError::Fps(0))));
        assert!(matches!(
            parse(&["--log-level", "loud"]),
            Err(ConfigError::LogLevel(_))
        ));
    }
}
