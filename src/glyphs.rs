use crate::model::{ItemAction, TreeItem};

/// Icons drawn in front of the file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilenameGlyphs<'a> {
    pub collapsed: &'a str,
    pub expanded: &'a str,
    pub link: &'a str,
    pub leaf: &'a str,
}

impl FilenameGlyphs<'static> {
    pub const fn ascii() -> Self {
        Self {
            collapsed: "+",
            expanded: "-",
            link: "@",
            leaf: " ",
        }
    }

    pub const fn unicode() -> Self {
        Self {
            collapsed: "▸",
            expanded: "▾",
            link: "→",
            leaf: " ",
        }
    }
}

impl Default for FilenameGlyphs<'static> {
    fn default() -> Self {
        Self::ascii()
    }
}

impl<'a> FilenameGlyphs<'a> {
    /// Picks the icon for an item: directories first, then links, then plain files.
    pub fn icon_for<A: ItemAction>(&self, item: &TreeItem<A>) -> &'a str {
        if item.is_tree {
            if item.is_expanded {
                self.expanded
            } else {
                self.collapsed
            }
        } else if item.action.is_link() {
            self.link
        } else {
            self.leaf
        }
    }
}
