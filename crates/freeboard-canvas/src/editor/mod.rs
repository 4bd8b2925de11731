//! Editor controller for host integration.
//! Owns the canvas state and turns input events into store mutations and
//! history commits.
//!
//! This module is split into submodules for better organization:
//! - `pointer`: Drawing, dragging, marquee, eraser and transform commits
//! - `shapes`: Delete, clipboard, insertion, flip and style edits
//! - `ordering`: Z-order commands
//! - `shortcuts`: Keyboard actions and the shortcut map

mod ordering;
mod pointer;
mod shapes;
mod shortcuts;

pub use shortcuts::{EditorAction, ShortcutMap};

use std::fmt;
use std::str::FromStr;

use freeboard_core::{ArrowStyle, ElementStyle, ShortcutError};
use freeboard_settings::{CanvasSettings, Config};
use tracing::debug;

use crate::history::History;
use crate::model::{Bounds, Element, Point};
use crate::render::{build_primitives, RenderPrimitive};
use crate::selection::Selection;
use crate::store::ElementStore;
use freeboard_core::ElementId;

/// Active tool of the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tool {
    #[default]
    Select,
    Rectangle,
    Diamond,
    Ellipse,
    Arrow,
    Line,
    Freehand,
    Eraser,
}

impl Tool {
    pub const ALL: [Tool; 8] = [
        Tool::Select,
        Tool::Rectangle,
        Tool::Diamond,
        Tool::Ellipse,
        Tool::Arrow,
        Tool::Line,
        Tool::Freehand,
        Tool::Eraser,
    ];

    /// Tools that create a new element on pointer down.
    pub fn is_drawing(&self) -> bool {
        !matches!(self, Tool::Select | Tool::Eraser)
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tool::Select => "select",
            Tool::Rectangle => "rectangle",
            Tool::Diamond => "diamond",
            Tool::Ellipse => "ellipse",
            Tool::Arrow => "arrow",
            Tool::Line => "line",
            Tool::Freehand => "freehand",
            Tool::Eraser => "eraser",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Tool {
    type Err = ShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|tool| tool.to_string() == s.trim().to_lowercase())
            .ok_or_else(|| ShortcutError::UnknownAction {
                action: s.to_string(),
            })
    }
}

/// Pointer interaction in progress between pointer down and pointer up.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) enum Interaction {
    #[default]
    Idle,
    /// The draft is the element with `id`, always the last in the store.
    Drawing { id: ElementId, origin: Point },
    /// `last` is the pointer position already applied to the selection.
    Dragging { id: ElementId, last: Point },
    Marquee {
        origin: Point,
        current: Point,
        additive: bool,
    },
    Erasing,
}

/// Editor state for host integration
#[derive(Debug, Clone)]
pub struct Editor {
    store: ElementStore,
    history: History,
    selection: Selection,
    tool: Tool,
    current_style: ElementStyle,
    current_arrow: ArrowStyle,
    clipboard: Vec<Element>,
    interaction: Interaction,
    settings: CanvasSettings,
    shortcuts: ShortcutMap,
}

impl Editor {
    /// Creates an editor with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Creates an editor from a loaded configuration.
    pub fn with_config(config: &Config) -> Self {
        let store = ElementStore::new();
        let history = History::new(store.snapshot(), config.history.max_depth);
        Self {
            store,
            history,
            selection: Selection::new(),
            tool: Tool::Select,
            current_style: config.style.clone(),
            current_arrow: config.arrow,
            clipboard: Vec::new(),
            interaction: Interaction::Idle,
            settings: config.canvas.clone(),
            shortcuts: ShortcutMap::from_config(config),
        }
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Sets the active tool.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!(%tool, "tool changed");
        }
        self.tool = tool;
    }

    /// Style given to newly drawn elements.
    pub fn current_style(&self) -> &ElementStyle {
        &self.current_style
    }

    pub fn current_arrow_style(&self) -> &ArrowStyle {
        &self.current_arrow
    }

    pub fn clipboard(&self) -> &[Element] {
        &self.clipboard
    }

    pub fn settings(&self) -> &CanvasSettings {
        &self.settings
    }

    pub fn shortcuts(&self) -> &ShortcutMap {
        &self.shortcuts
    }

    pub fn shortcuts_mut(&mut self) -> &mut ShortcutMap {
        &mut self.shortcuts
    }

    /// Whether a pointer interaction is in progress.
    pub fn is_interacting(&self) -> bool {
        self.interaction != Interaction::Idle
    }

    /// Current marquee rectangle while a rubber-band selection is dragged.
    pub fn marquee(&self) -> Option<Bounds> {
        match self.interaction {
            Interaction::Marquee {
                origin, current, ..
            } => Some(Bounds::from_corners(origin, current)),
            _ => None,
        }
    }

    /// Paint records for the current store, bottom to top.
    pub fn render(&self) -> Vec<RenderPrimitive> {
        build_primitives(&self.store)
    }

    pub fn select_all(&mut self) -> bool {
        if self.store.is_empty() {
            return false;
        }
        self.selection.select_all(&self.store);
        true
    }

    pub fn clear_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.selection.clear();
        true
    }

    /// Selects a single element by id, as a host's layer list would.
    pub fn select(&mut self, id: ElementId, additive: bool) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        self.selection.select(id, additive);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restores the previous snapshot. No-op at the start of history.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.store.restore(&snapshot);
        self.after_restore();
        true
    }

    /// Restores the next snapshot. No-op at the end of history.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.store.restore(&snapshot);
        self.after_restore();
        true
    }

    fn after_restore(&mut self) {
        self.interaction = Interaction::Idle;
        self.selection.retain_existing(&self.store);
    }

    /// Records the live store in history; skipped when nothing changed.
    pub(crate) fn commit(&mut self) -> bool {
        self.history.commit(self.store.snapshot())
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
