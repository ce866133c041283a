use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-item action metadata populated by the host.
///
/// Hosts attach arbitrary data to their items; the filename column only needs to know
/// whether an item is a symbolic link and which filesystem path it stands for.
pub trait ItemAction {
    /// Returns `true` if the item is a symbolic link.
    fn is_link(&self) -> bool {
        false
    }
    /// Returns the absolute or relative filesystem path of the item, if known.
    fn path(&self) -> Option<&Path> {
        None
    }
}

/// Items without any action metadata.
impl ItemAction for () {}

/// Stock action metadata for file explorer items.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileAction {
    pub is_link: bool,
    pub path: Option<PathBuf>,
}

impl FileAction {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            is_link: false,
            path: Some(path.into()),
        }
    }

    /// Marks the action as a symbolic link.
    pub const fn link(mut self) -> Self {
        self.is_link = true;
        self
    }
}

impl ItemAction for FileAction {
    fn is_link(&self) -> bool {
        self.is_link
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// A single row of the host's tree list, read-only to the column.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeItem<A = FileAction> {
    /// Fallback display name when the action carries no path.
    pub word: String,
    /// Nesting depth in the tree.
    #[cfg_attr(feature = "serde", serde(default))]
    pub level: u16,
    /// The item is an expandable container (directory).
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_tree: bool,
    /// The container is currently open.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_expanded: bool,
    /// Prefix prepended to the base name when single-child chains are grouped.
    #[cfg_attr(feature = "serde", serde(default))]
    pub grouped_path_prefix: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub action: A,
}

impl<A: Default> TreeItem<A> {
    /// Creates a top-level leaf item with default action metadata.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            level: 0,
            is_tree: false,
            is_expanded: false,
            grouped_path_prefix: None,
            action: A::default(),
        }
    }
}

impl TreeItem<FileAction> {
    /// Creates a top-level leaf item for a filesystem path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(path.to_string_lossy()).with_action(FileAction {
            is_link: false,
            path: Some(path),
        })
    }

    /// Marks the item as a symbolic link.
    #[must_use]
    pub const fn link(mut self) -> Self {
        self.action.is_link = true;
        self
    }
}

impl<A> TreeItem<A> {
    /// Sets the nesting depth.
    #[must_use]
    pub const fn level(mut self, level: u16) -> Self {
        self.level = level;
        self
    }

    /// Marks the item as an expandable container.
    #[must_use]
    pub const fn tree(mut self, is_expanded: bool) -> Self {
        self.is_tree = true;
        self.is_expanded = is_expanded;
        self
    }

    /// Sets the grouped path prefix.
    #[must_use]
    pub fn grouped_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.grouped_path_prefix = Some(prefix.into());
        self
    }

    /// Replaces the action metadata.
    #[must_use]
    pub fn with_action<B>(self, action: B) -> TreeItem<B> {
        TreeItem {
            word: self.word,
            level: self.level,
            is_tree: self.is_tree,
            is_expanded: self.is_expanded,
            grouped_path_prefix: self.grouped_path_prefix,
            action,
        }
    }
}

impl<A: ItemAction> TreeItem<A> {
    /// Path whose target should be resolved: set only for links with a known path.
    pub fn link_path(&self) -> Option<&Path> {
        if self.action.is_link() {
            self.action.path()
        } else {
            None
        }
    }
}
