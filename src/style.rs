use ratatui::style::{Color, Modifier, Style};
use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DIRECTORY_ICON_SPAN: &str = "column-filename-directory-icon";
pub const DIRECTORY_NAME_SPAN: &str = "column-filename-directory-name";
pub const LINK_ICON_SPAN: &str = "column-filename-link-icon";
pub const LINK_NAME_SPAN: &str = "column-filename-link-name";

const DEFAULT_DIRECTORY_ICON_GROUP: &str = "Special";
const DEFAULT_DIRECTORY_NAME_GROUP: &str = "Directory";
const DEFAULT_LINK_GROUP: &str = "Comment";

/// User overrides for highlight group names; `None` keeps the built-in group.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightOverrides {
    pub directory_icon: Option<String>,
    pub directory_name: Option<String>,
    pub link_icon: Option<String>,
    pub link_name: Option<String>,
}

impl HighlightOverrides {
    /// Fills unset entries with the built-in group names.
    pub fn resolve(&self) -> ResolvedHighlights {
        let pick = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };
        ResolvedHighlights {
            directory_icon: pick(&self.directory_icon, DEFAULT_DIRECTORY_ICON_GROUP),
            directory_name: pick(&self.directory_name, DEFAULT_DIRECTORY_NAME_GROUP),
            link_icon: pick(&self.link_icon, DEFAULT_LINK_GROUP),
            link_name: pick(&self.link_name, DEFAULT_LINK_GROUP),
        }
    }
}

/// Highlight group names with defaults applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedHighlights {
    pub directory_icon: String,
    pub directory_name: String,
    pub link_icon: String,
    pub link_name: String,
}

impl Default for ResolvedHighlights {
    fn default() -> Self {
        HighlightOverrides::default().resolve()
    }
}

/// A display region `[col, col + width)` to colorize with a highlight group.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightSpan<'a> {
    /// Stable tag identifying the span kind.
    pub name: &'static str,
    /// Highlight group applied by the host.
    #[cfg_attr(feature = "serde", serde(rename = "hl_group"))]
    pub group: &'a str,
    /// Absolute start column.
    pub col: usize,
    /// Width in display cells.
    pub width: usize,
}

impl HighlightSpan<'_> {
    pub const fn contains(&self, col: usize) -> bool {
        col >= self.col && col - self.col < self.width
    }
}

/// Maps highlight group names to ratatui styles for hosts that draw with ratatui.
#[derive(Clone, Debug)]
pub struct HighlightTheme {
    groups: FxHashMap<String, Style>,
    base: Style,
}

impl HighlightTheme {
    /// Creates a theme without any group styles.
    pub fn empty() -> Self {
        Self {
            groups: FxHashMap::default(),
            base: Style::default(),
        }
    }

    /// Sets the style for a highlight group.
    #[must_use]
    pub fn group(mut self, name: impl Into<String>, style: Style) -> Self {
        self.groups.insert(name.into(), style);
        self
    }

    /// Sets the style for text outside any highlight span.
    #[must_use]
    pub fn base(mut self, style: Style) -> Self {
        self.base = style;
        self
    }

    pub const fn base_style(&self) -> Style {
        self.base
    }

    /// Returns the style for a group; unknown groups fall back to the base style.
    pub fn style_for(&self, group: &str) -> Style {
        self.groups
            .get(group)
            .map_or(self.base, |style| self.base.patch(*style))
    }
}

impl Default for HighlightTheme {
    fn default() -> Self {
        Self::empty()
            .group(
                DEFAULT_DIRECTORY_ICON_GROUP,
                Style::default().fg(Color::Magenta),
            )
            .group(
                DEFAULT_DIRECTORY_NAME_GROUP,
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )
            .group(DEFAULT_LINK_GROUP, Style::default().fg(Color::DarkGray))
    }
}
