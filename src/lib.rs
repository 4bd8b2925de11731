//! # Freeboard
//!
//! An infinite-canvas diagramming core with support for:
//! - Rectangles, diamonds, ellipses, arrows, lines, freehand strokes, text and images
//! - Arrows glued to the shapes they connect, following them through moves,
//!   rotation and mirroring
//! - Linear undo/redo over copy-on-write snapshots
//! - Z-order commands, clipboard, keyboard shortcuts
//!
//! ## Architecture
//!
//! Freeboard is organized as a workspace with multiple crates:
//!
//! 1. **freeboard-core** - Ids, styles, input events, shared errors and constants
//! 2. **freeboard-settings** - Configuration files, validation and persistence
//! 3. **freeboard-canvas** - Element store, binding resolver, history, layers and the editor
//! 4. **freeboard** - Logging setup and a headless demo binary

pub mod demo;

pub use demo::{run_demo, DemoSummary};
pub use freeboard_canvas::{
    Editor, EditorAction, Element, ElementStore, History, Point, RenderBackend, SceneBackend,
    Selection, Tool,
};
pub use freeboard_core::{ElementId, ElementStyle, KeyEvent, Modifiers, StylePatch};
pub use freeboard_settings::{Config, SettingsPersistence};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output in the requested format
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .with_target(true)
                    .with_level(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .with_target(true)
                    .json(),
            )
            .try_init(),
    };
    result.map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))
}
