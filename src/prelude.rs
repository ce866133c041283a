pub use crate::{
    CanonicalResolver, ColumnBounds, ColumnRegistry, FileAction, FilenameColumn, FilenameError,
    FilenameGlyphs, FilenameParams, HighlightOverrides, HighlightSpan, HighlightTheme,
    ItemAction, ItemColumn, PathResolver, RenderedText, TextMeasure, TreeItem, UnicodeMeasure,
};
