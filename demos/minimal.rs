// Minimal demo: size a filename column for a small listing and draw it into a buffer.
use ratatui::layout::Rect;
use ratatui::prelude::Buffer;
use ratatui::widgets::{Row, Table, Widget};

use tree_filename_column::{
    ColumnBounds, FilenameColumn, FilenameGlyphs, FilenameParams, HighlightTheme, TreeItem,
};

fn main() -> tree_filename_column::Result<()> {
    // A tiny tree as the host would hand it over: one open directory with two children.
    let items = [
        TreeItem::from_path("/project/src").tree(true),
        TreeItem::from_path("/project/src/lib.rs").level(1),
        TreeItem::from_path("/project/src/current").level(1).link(),
    ];

    let column = FilenameColumn::new(FilenameParams::with_glyphs(FilenameGlyphs::unicode()));
    let width = column.max_width(&items)?;
    let bounds = ColumnBounds::with_width(width);
    let theme = HighlightTheme::default();

    let rows: Vec<Row> = items
        .iter()
        .map(|item| Row::new([column.display(item, bounds, None).to_cell(&theme)]))
        .collect();

    // Render into an in-memory buffer (no terminal required).
    let area = Rect::new(0, 0, 40, 4);
    let mut buffer = Buffer::empty(area);
    Table::new(rows, [column.constraint(&items)?]).render(area, &mut buffer);
    Ok(())
}
