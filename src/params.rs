#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::glyphs::FilenameGlyphs;
use crate::style::HighlightOverrides;

/// Host-supplied column parameters.
///
/// Every field has a default, so hosts only pass what they want to change. With the
/// `serde` feature enabled, parameters deserialize from camelCase keys and missing keys
/// keep their defaults.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilenameParams {
    /// Icon for a closed directory.
    pub collapsed_icon: String,
    /// Icon for an open directory.
    pub expanded_icon: String,
    /// Display cells reserved for the icon. Sizing assumes every icon fits in this many
    /// cells; a wider glyph makes rows exceed the computed column width.
    pub icon_width: u16,
    /// Display cells per nesting level.
    pub indentation_width: u16,
    /// Icon for a symbolic link.
    pub link_icon: String,
    /// Highlight group overrides.
    pub highlights: HighlightOverrides,
}

impl Default for FilenameParams {
    fn default() -> Self {
        Self::with_glyphs(FilenameGlyphs::ascii())
    }
}

impl FilenameParams {
    /// Default parameters using the given icon set.
    pub fn with_glyphs(glyphs: FilenameGlyphs<'_>) -> Self {
        Self {
            collapsed_icon: glyphs.collapsed.to_string(),
            expanded_icon: glyphs.expanded.to_string(),
            icon_width: 1,
            indentation_width: 1,
            link_icon: glyphs.link.to_string(),
            highlights: HighlightOverrides::default(),
        }
    }

    #[must_use]
    pub const fn icon_width(mut self, width: u16) -> Self {
        self.icon_width = width;
        self
    }

    #[must_use]
    pub const fn indentation_width(mut self, width: u16) -> Self {
        self.indentation_width = width;
        self
    }

    #[must_use]
    pub fn highlights(mut self, highlights: HighlightOverrides) -> Self {
        self.highlights = highlights;
        self
    }

    /// Borrowed icon set for these parameters.
    pub fn glyphs(&self) -> FilenameGlyphs<'_> {
        FilenameGlyphs {
            collapsed: &self.collapsed_icon,
            expanded: &self.expanded_icon,
            link: &self.link_icon,
            leaf: FilenameGlyphs::ascii().leaf,
        }
    }
}
