#![forbid(unsafe_code)]

//! Column list widget and screen layout.
//!
//! A [`ColumnWidget`] is the terminal-side [`ListPort`]: it stores what the
//! session pushed (title, footer, styled entries) plus the cursor and scroll
//! offset the user controls. [`ColumnLayout`] maps screen cells to columns
//! and rows for drawing and mouse hit-testing.
//!
//! Each column is laid out top to bottom as:
//!
//! ```text
//! title
//! ─────────
//! rows...
//! ─────────
//! footer
//! ```

use rgtui_graph::EntityRef;
use rgtui_nav::{Column, ListPort, StyleCategory};

use crate::input::Motion;

/// Rows taken by title, two dividers, and footer.
const CHROME_ROWS: u16 = 4;

/// Blank cells between neighbouring columns.
pub const COLUMN_GAP: u16 = 2;

/// State of one column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidget {
    title: String,
    footer: String,
    items: Vec<(StyleCategory, EntityRef)>,
    /// Index of the highlighted item, `None` only while empty.
    selected: Option<usize>,
    /// First visible item.
    offset: usize,
    focused: bool,
}

impl ColumnWidget {
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn footer(&self) -> &str {
        &self.footer
    }

    #[must_use]
    pub fn items(&self) -> &[(StyleCategory, EntityRef)] {
        &self.items
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Highlight `index` if it exists. Returns whether it did.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.selected = Some(index);
            true
        } else {
            false
        }
    }

    /// Move the selection to the next item, clamping at the last.
    pub fn select_next(&mut self) {
        self.step(1);
    }

    /// Move the selection to the previous item, clamping at the first.
    pub fn select_previous(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, delta: isize) {
        let Some(last) = self.items.len().checked_sub(1) else {
            return;
        };
        let current = self.selected.unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.selected = Some(next);
    }

    /// Apply a cursor motion; `page` is the number of visible rows.
    pub fn apply_motion(&mut self, motion: Motion, page: usize) {
        let page = page.max(1) as isize;
        match motion {
            Motion::Up => self.step(-1),
            Motion::Down => self.step(1),
            Motion::PageUp => self.step(-page),
            Motion::PageDown => self.step(page),
            Motion::Home => self.step(isize::MIN),
            Motion::End => self.step(isize::MAX),
        }
    }

    /// Adjust the scroll offset so the selection is within `height` rows.
    pub fn ensure_visible(&mut self, height: usize) {
        if self.items.is_empty() || height == 0 {
            self.offset = 0;
            return;
        }
        self.offset = self.offset.min(self.items.len() - 1);
        if let Some(selected) = self.selected {
            if selected >= self.offset + height {
                self.offset = selected + 1 - height;
            } else if selected < self.offset {
                self.offset = selected;
            }
        }
    }

    /// Items on screen for a viewport of `height` rows, with their indices.
    pub fn visible(
        &self,
        height: usize,
    ) -> impl Iterator<Item = (usize, &(StyleCategory, EntityRef))> {
        self.items.iter().enumerate().skip(self.offset).take(height)
    }
}

impl ListPort for ColumnWidget {
    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn set_footer(&mut self, footer: &str) {
        footer.clone_into(&mut self.footer);
    }

    /// Keeps the highlight on the same entity when it is still listed,
    /// otherwise on the same index clamped to the new length.
    fn reset_list(&mut self, entries: Vec<(StyleCategory, EntityRef)>) {
        let previous = self.selection();
        let index = self.selected.unwrap_or(0);
        self.items = entries;
        self.selected = if self.items.is_empty() {
            None
        } else {
            let same = previous.and_then(|entity| {
                self.items
                    .iter()
                    .position(|(_, e)| e.kind() == entity.kind() && *e == entity)
            });
            Some(same.unwrap_or_else(|| index.min(self.items.len() - 1)))
        };
        if self.items.is_empty() {
            self.offset = 0;
        }
    }

    fn selection(&self) -> Option<EntityRef> {
        self.selected
            .and_then(|i| self.items.get(i))
            .map(|(_, entity)| entity.clone())
    }

    fn set_focus(&mut self) {
        self.focused = true;
    }

    fn clear_focus(&mut self) {
        self.focused = false;
    }
}

/// A screen rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// Three equal-width columns with [`COLUMN_GAP`] cells between them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnLayout {
    areas: [Rect; 3],
}

impl ColumnLayout {
    /// Split a `width` x `height` screen.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let usable = width.saturating_sub(2 * COLUMN_GAP);
        let base = usable / 3;
        // Leftover cells go to Main.
        let widths = [base, usable - 2 * base, base];
        let mut areas = [Rect::default(); 3];
        let mut x = 0;
        for (area, w) in areas.iter_mut().zip(widths) {
            *area = Rect::new(x, 0, w, height);
            x = x.saturating_add(w).saturating_add(COLUMN_GAP);
        }
        Self { areas }
    }

    #[must_use]
    pub fn area(&self, column: Column) -> Rect {
        self.areas[column.index()]
    }

    /// Rows available for list entries.
    #[must_use]
    pub fn list_height(&self) -> usize {
        usize::from(self.areas[0].height.saturating_sub(CHROME_ROWS))
    }

    /// Column under screen cell (`x`, `y`), if any.
    #[must_use]
    pub fn column_at(&self, x: u16, y: u16) -> Option<Column> {
        Column::ALL
            .into_iter()
            .find(|&column| self.area(column).contains(x, y))
    }

    /// Viewport row under screen line `y`, if it lies in the list area.
    #[must_use]
    pub fn list_row_at(&self, y: u16) -> Option<usize> {
        let first = self.areas[0].y + 2;
        let row = usize::from(y.checked_sub(first)?);
        (row < self.list_height()).then_some(row)
    }
}
