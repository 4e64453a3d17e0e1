use log::Level;

/// Root margin of the scroll-spy observer. Only a section crossing the band
/// between 40% and 45% of the viewport height counts as dominant.
pub const SPY_ROOT_MARGIN: &str = "-40% 0px -55% 0px";
pub const SPY_THRESHOLD: f64 = 0.0;

/// Sections start their entrance once they are 100px inside the viewport.
pub const REVEAL_ROOT_MARGIN: &str = "-100px";

pub const REVEAL_DURATION_MS: u32 = 600;

pub const CHART_WIDTH: u32 = 640;
pub const CHART_HEIGHT: u32 = 400;
pub const CHART_HEIGHT_COMPACT: u32 = 300;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
