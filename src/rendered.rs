use std::mem;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Cell;
use smallvec::SmallVec;
use unicode_width::UnicodeWidthChar;

use crate::context::ColumnBounds;
use crate::style::{HighlightSpan, HighlightTheme};

/// Row text sized to its column bounds, with the spans the host should colorize.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedText<'a> {
    pub text: String,
    /// Spans in push order; on overlap the later span wins.
    pub highlights: SmallVec<[HighlightSpan<'a>; 2]>,
    pub bounds: ColumnBounds,
}

impl RenderedText<'_> {
    /// Converts the row into a ratatui line, splitting at highlight boundaries.
    pub fn to_line(&self, theme: &HighlightTheme) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.highlights.len() * 2 + 1);
        let mut run = String::new();
        let mut current = theme.base_style();
        let mut col = self.bounds.start_col();

        for ch in self.text.chars() {
            let style = self.style_at(col, theme);
            if style != current && !run.is_empty() {
                spans.push(Span::styled(mem::take(&mut run), current));
            }
            current = style;
            run.push(ch);
            col += UnicodeWidthChar::width(ch).unwrap_or(0);
        }
        if !run.is_empty() {
            spans.push(Span::styled(run, current));
        }

        Line::from(spans)
    }

    /// Wraps [`Self::to_line`] in a table cell.
    pub fn to_cell(&self, theme: &HighlightTheme) -> Cell<'static> {
        Cell::from(self.to_line(theme))
    }

    fn style_at(&self, col: usize, theme: &HighlightTheme) -> Style {
        self.highlights
            .iter()
            .rev()
            .find(|span| span.contains(col))
            .map_or_else(|| theme.base_style(), |span| theme.style_for(span.group))
    }
}
