//! Compile-time settings for the portfolio.

/// Base URL of the public GitHub REST API.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Media type requested from the GitHub REST API.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// `localStorage` key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Media query matched to pick the initial theme when nothing is stored.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Class toggled on the document element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

// Graph canvas sizing
pub const GRAPH_NARROW_BREAKPOINT: f64 = 720.0;
pub const GRAPH_NARROW_HEIGHT: f64 = 300.0;
pub const GRAPH_WIDE_HEIGHT: f64 = 360.0;
