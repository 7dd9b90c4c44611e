//! Shared crate-wide constants.

/// Stacking value the z-order allocator starts from. Windows always sit above
/// static desktop chrome, which paints below this value.
pub const BASE_Z_INDEX: u32 = 100;

/// Default origin of the first window, in pixels from the desktop's top-left.
pub const CASCADE_ORIGIN_X: i32 = 100;
pub const CASCADE_ORIGIN_Y: i32 = 80;

/// Diagonal offset applied per currently-open window when a new window is
/// created, so new windows don't fully occlude earlier ones.
pub const CASCADE_STEP: i32 = 30;

/// Bounds for the background opacity preference, in percent.
pub const MIN_OPACITY: u8 = 10;
pub const MAX_OPACITY: u8 = 100;
/// Slider granularity for the opacity preference.
pub const OPACITY_STEP: u8 = 5;

/// Strongest darkening the background overlay applies (at the lowest opacity
/// the overlay approaches this factor).
pub const MAX_OVERLAY_DIM: f32 = 0.7;

/// Pixel size of a terminal cell used to map the pixel-based window model
/// onto the terminal grid.
pub const DEFAULT_CELL_WIDTH: u16 = 8;
pub const DEFAULT_CELL_HEIGHT: u16 = 16;

/// Rows taken by the top bar and the dock strip.
pub const TOP_BAR_HEIGHT: u16 = 1;
pub const DOCK_HEIGHT: u16 = 3;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u64 = 4000;

/// Lines scrolled per mouse wheel notch inside window content.
pub const SCROLL_LINES_PER_NOTCH: usize = 3;
