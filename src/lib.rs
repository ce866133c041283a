//! Filename column for tree list views: indentation, expand/collapse or link icon, base name
//! with symlink target, and highlight spans for directories and links.
//!
//! The column is stateless. Hosts size it once per batch with
//! [`FilenameColumn::max_width`] and then ask for each visible row with
//! [`FilenameColumn::display`].
//!
//! Feature flags:
//! - `serde`: deserialize [`FilenameParams`] and items from host JSON, serialize rendered rows.
//! - `tokio`: [`FilenameColumn::max_width_concurrent`] resolves link targets as concurrent
//!   blocking tasks.

mod columns;
mod context;
mod error;
mod filename;
mod glyphs;
mod measure;
mod model;
mod params;
pub mod prelude;
mod rendered;
mod style;

pub use columns::{ColumnRegistry, ItemColumn};
pub use context::ColumnBounds;
pub use error::{FilenameError, Result};
pub use filename::FilenameColumn;
pub use glyphs::FilenameGlyphs;
pub use measure::{CanonicalResolver, PathResolver, TextMeasure, UnicodeMeasure};
pub use model::{FileAction, ItemAction, TreeItem};
pub use params::FilenameParams;
pub use rendered::RenderedText;
pub use style::{
    DIRECTORY_ICON_SPAN, DIRECTORY_NAME_SPAN, HighlightOverrides, HighlightSpan, HighlightTheme,
    LINK_ICON_SPAN, LINK_NAME_SPAN, ResolvedHighlights,
};
