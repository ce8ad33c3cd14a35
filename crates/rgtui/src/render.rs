#![forbid(unsafe_code)]

//! Three-column renderer.
//!
//! Draws each [`ColumnWidget`] into its [`ColumnLayout`] area with crossterm
//! commands queued on any writer. Styling is decided here from the
//! [`StyleCategory`] alone.
//!
//! | Category      | Paint |
//! |---------------|-------|
//! | `Node`        | light gray |
//! | `Topic`       | dark cyan |
//! | `ChosenNode`  | light gray, bold |
//! | `ChosenTopic` | dark cyan, bold |
//! | `Unconnected` | dark red |
//!
//! The selected row of the focused column is drawn reversed.

use std::io::{self, Write};

use crossterm::style::{Color, ContentStyle, PrintStyledContent, Stylize};
use crossterm::{cursor, queue, terminal};
use rgtui_nav::{Column, ColumnPorts, StyleCategory};
use unicode_width::UnicodeWidthChar;

use crate::widget::{ColumnLayout, ColumnWidget, Rect};

const DIVIDER: char = '─';

/// Paint for one entry category.
#[must_use]
pub fn palette(category: StyleCategory) -> ContentStyle {
    let base = ContentStyle::new();
    match category {
        StyleCategory::Node => base.with(Color::Grey),
        StyleCategory::Topic => base.with(Color::DarkCyan),
        StyleCategory::ChosenNode => base.with(Color::Grey).bold(),
        StyleCategory::ChosenTopic => base.with(Color::DarkCyan).bold(),
        StyleCategory::Unconnected => base.with(Color::DarkRed),
    }
}

/// Truncate or pad `text` to exactly `width` display cells.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}

/// Draw a full frame and flush `out`.
///
/// # Errors
///
/// Propagates write failures.
pub fn draw_frame<W: Write>(
    out: &mut W,
    layout: &ColumnLayout,
    ports: &ColumnPorts<ColumnWidget>,
) -> io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    for column in Column::ALL {
        draw_column(out, layout.area(column), layout.list_height(), ports.get(column))?;
    }
    out.flush()
}

fn draw_column<W: Write>(
    out: &mut W,
    area: Rect,
    list_height: usize,
    widget: &ColumnWidget,
) -> io::Result<()> {
    let width = usize::from(area.width);
    if width == 0 || area.height == 0 {
        return Ok(());
    }
    let plain = ContentStyle::new();
    let divider: String = std::iter::repeat_n(DIVIDER, width).collect();
    let line = |out: &mut W, row: u16, style: ContentStyle, text: &str| -> io::Result<()> {
        if row >= area.height {
            return Ok(());
        }
        queue!(
            out,
            cursor::MoveTo(area.x, area.y + row),
            PrintStyledContent(style.apply(fit(text, width)))
        )
    };

    line(out, 0, plain.bold(), widget.title())?;
    line(out, 1, plain, &divider)?;

    let mut row = 2;
    for (index, (category, entity)) in widget.visible(list_height) {
        let mut style = palette(*category);
        if widget.is_focused() && widget.selected() == Some(index) {
            style = style.reverse();
        }
        line(out, row, style, &entity.label())?;
        row += 1;
    }

    let footer_row = area.height.saturating_sub(1);
    line(out, footer_row.saturating_sub(1), plain, &divider)?;
    line(out, footer_row, plain, widget.footer())
}
