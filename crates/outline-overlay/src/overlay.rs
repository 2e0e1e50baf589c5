//! Overlay State
//!
//! Open/closed lifecycle and per-item violation disclosure.

use outline_a11y::{Outline, OutlineEntry};

use crate::SUCCESS_MESSAGE;

/// Indentation step per heading level
pub const INDENT_PX: u32 = 20;

/// Overlay lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Open,
    Closed,
}

/// Keys the overlay reacts to (others pass through)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    /// Any other key
    Other,
}

/// One list item of the overlay
#[derive(Debug, Clone)]
pub struct OverlayItem {
    pub entry: OutlineEntry,
    expanded: bool,
}

impl OverlayItem {
    fn new(entry: OutlineEntry) -> Self {
        Self { entry, expanded: false }
    }

    /// Left margin: document-level entries are not indented
    pub fn indent_px(&self) -> u32 {
        u32::from(self.entry.level.saturating_sub(1)) * INDENT_PX
    }

    /// Visible label; invalid items carry a warning marker
    pub fn label(&self) -> String {
        let entry = &self.entry;
        match (entry.is_valid, entry.is_document_level()) {
            (true, _) => format!("<h{}> {}", entry.level, entry.text),
            (false, true) => format!("{} \u{26a0}\u{fe0f}", entry.text),
            (false, false) => format!("<h{}> {} \u{26a0}\u{fe0f}", entry.level, entry.text),
        }
    }

    /// Invalid items are disclosure buttons
    pub fn has_disclosure(&self) -> bool {
        !self.entry.is_valid
    }

    /// `aria-expanded` state of the disclosure
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Violation messages, one per line
    pub fn messages(&self) -> impl Iterator<Item = String> + '_ {
        self.entry.violations.iter().map(|v| v.to_string())
    }
}

/// Element id of the violation region controlled by item `index`
pub(crate) fn violation_id(index: usize) -> String {
    format!("violation-message-{}", index)
}

/// Modal outline report
#[derive(Debug)]
pub struct Overlay {
    items: Vec<OverlayItem>,
    all_valid: bool,
    state: OverlayState,
}

impl Overlay {
    /// Build an open overlay for `outline`
    pub fn open(outline: Outline) -> Self {
        let all_valid = outline.is_valid();
        let items: Vec<OverlayItem> = outline.into_entries().into_iter().map(OverlayItem::new).collect();
        tracing::debug!(items = items.len(), all_valid, "Overlay opened");

        Self {
            items,
            all_valid,
            state: OverlayState::Open,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    /// Tear the overlay down; returns false if it was already closed
    pub fn close(&mut self) -> bool {
        if self.state == OverlayState::Closed {
            return false;
        }
        self.state = OverlayState::Closed;
        tracing::debug!("Overlay closed");
        true
    }

    /// Clicking the backdrop closes the overlay
    pub fn click_backdrop(&mut self) -> bool {
        self.close()
    }

    /// Clicks inside the modal never reach the backdrop
    pub fn click_modal(&mut self) -> bool {
        false
    }

    /// Keyboard input; returns whether the key was consumed
    ///
    /// Once closed the overlay no longer listens for keys.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::Escape => self.close(),
            Key::Other => false,
        }
    }

    /// Flip the disclosure of item `index`
    ///
    /// Returns the new expanded state, or `None` for valid items, unknown
    /// indices and a closed overlay.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if !self.is_open() {
            return None;
        }
        let item = self.items.get_mut(index).filter(|item| item.has_disclosure())?;
        item.expanded = !item.expanded;
        Some(item.expanded)
    }

    /// Expand every disclosure
    pub fn expand_all(&mut self) {
        for item in self.items.iter_mut().filter(|item| item.has_disclosure()) {
            item.expanded = true;
        }
    }

    pub fn items(&self) -> &[OverlayItem] {
        &self.items
    }

    /// True when every outline entry is valid
    pub fn is_all_valid(&self) -> bool {
        self.all_valid
    }

    /// Success indicator shown above the list
    pub fn success_message(&self) -> Option<&'static str> {
        self.all_valid.then_some(SUCCESS_MESSAGE)
    }
}
