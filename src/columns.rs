use rustc_hash::FxHashMap;

use crate::context::ColumnBounds;
use crate::error::Result;
use crate::filename::FilenameColumn;
use crate::measure::{PathResolver, TextMeasure};
use crate::model::{ItemAction, TreeItem};
use crate::rendered::RenderedText;

/// A named column the host can size and render for each tree row.
pub trait ItemColumn<A: ItemAction> {
    /// Name the host selects the column by.
    fn name(&self) -> &'static str;
    /// Returns the unstyled text of an item.
    fn base_text(&self, item: &TreeItem<A>) -> String {
        item.word.clone()
    }
    /// Returns the width needed to show every item in the batch.
    fn length(&self, items: &[TreeItem<A>]) -> Result<usize>;
    /// Returns the row text and highlights for one item inside `bounds`.
    fn text<'a>(
        &'a self,
        item: &TreeItem<A>,
        bounds: ColumnBounds,
        base_text: Option<&str>,
    ) -> RenderedText<'a>;
}

impl<A, R, M> ItemColumn<A> for FilenameColumn<R, M>
where
    A: ItemAction,
    R: PathResolver,
    M: TextMeasure,
{
    fn name(&self) -> &'static str {
        "filename"
    }

    fn base_text(&self, item: &TreeItem<A>) -> String {
        Self::base_text(self, item)
    }

    fn length(&self, items: &[TreeItem<A>]) -> Result<usize> {
        self.max_width(items)
    }

    fn text<'a>(
        &'a self,
        item: &TreeItem<A>,
        bounds: ColumnBounds,
        base_text: Option<&str>,
    ) -> RenderedText<'a> {
        self.display(item, bounds, base_text)
    }
}

/// Columns available to the host, keyed by name.
pub struct ColumnRegistry<A: ItemAction> {
    columns: FxHashMap<&'static str, Box<dyn ItemColumn<A>>>,
}

impl<A: ItemAction> Default for ColumnRegistry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ItemAction> ColumnRegistry<A> {
    pub fn new() -> Self {
        Self {
            columns: FxHashMap::default(),
        }
    }

    /// Registers a column under its name, returning the column it replaced.
    pub fn register<C>(&mut self, column: C) -> Option<Box<dyn ItemColumn<A>>>
    where
        C: ItemColumn<A> + 'static,
    {
        self.columns.insert(column.name(), Box::new(column))
    }

    pub fn get(&self, name: &str) -> Option<&dyn ItemColumn<A>> {
        self.columns.get(name).map(AsRef::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::SmallVec;

    use super::*;
    use crate::error::FilenameError;
    use crate::model::FileAction;

    struct WordColumn;

    impl ItemColumn<FileAction> for WordColumn {
        fn name(&self) -> &'static str {
            "word"
        }

        fn length(&self, items: &[TreeItem<FileAction>]) -> Result<usize> {
            items
                .iter()
                .map(|item| item.word.len())
                .max()
                .ok_or(FilenameError::EmptyBatch)
        }

        fn text<'a>(
            &'a self,
            item: &TreeItem<FileAction>,
            bounds: ColumnBounds,
            _base_text: Option<&str>,
        ) -> RenderedText<'a> {
            RenderedText {
                text: format!("{:<width$}", item.word, width = bounds.width()),
                highlights: SmallVec::new(),
                bounds,
            }
        }
    }

    #[test]
    fn registry_selects_columns_by_name() {
        let mut registry = ColumnRegistry::<FileAction>::new();
        assert!(registry.is_empty());
        assert!(registry.register(FilenameColumn::default()).is_none());
        assert!(registry.register(WordColumn).is_none());
        assert_eq!(registry.len(), 2);

        let items = [TreeItem::<FileAction>::new("foo.txt")];
        let filename = registry.get("filename").unwrap();
        assert_eq!(filename.length(&items).unwrap(), 9);
        let rendered = filename.text(&items[0], ColumnBounds::with_width(10), None);
        assert_eq!(rendered.text, "  foo.txt ");

        let word = registry.get("word").unwrap();
        assert_eq!(word.base_text(&items[0]), "foo.txt");
        assert_eq!(word.length(&items).unwrap(), 7);
        assert!(registry.get("size").is_none());
    }

    #[test]
    fn registering_same_name_replaces_column() {
        let mut registry = ColumnRegistry::<FileAction>::new();
        registry.register(FilenameColumn::default());
        let replaced = registry.register(FilenameColumn::default());
        assert!(replaced.is_some());
        assert!(registry.contains("filename"));
        assert_eq!(registry.len(), 1);
    }
}
