use std::borrow::Cow;
use std::io;
use std::iter::repeat_n;
use std::path::{Path, PathBuf, is_separator};

use ratatui::layout::Constraint;
use smallvec::SmallVec;

use crate::context::ColumnBounds;
use crate::error::{FilenameError, Result};
use crate::measure::{CanonicalResolver, PathResolver, TextMeasure, UnicodeMeasure};
use crate::model::{ItemAction, TreeItem};
use crate::params::FilenameParams;
use crate::rendered::RenderedText;
use crate::style::{
    DIRECTORY_ICON_SPAN, DIRECTORY_NAME_SPAN, HighlightSpan, LINK_ICON_SPAN, LINK_NAME_SPAN,
    ResolvedHighlights,
};

const DIRECTORY_SUFFIX: char = '/';
const LINK_ARROW: &str = " -> ";
const UNRESOLVED_TARGET: char = '?';

/// Renders the filename column of a tree list: indentation, icon, base name and
/// optional symlink target, plus highlight spans for directories and links.
///
/// The column holds no per-row state; parameters are resolved once at construction.
#[derive(Clone, Debug)]
pub struct FilenameColumn<R = CanonicalResolver, M = UnicodeMeasure> {
    params: FilenameParams,
    highlights: ResolvedHighlights,
    resolver: R,
    measure: M,
}

impl FilenameColumn {
    /// Creates a column that resolves links through the filesystem and measures
    /// text with Unicode width tables.
    pub fn new(params: FilenameParams) -> Self {
        let highlights = params.highlights.resolve();
        Self {
            params,
            highlights,
            resolver: CanonicalResolver,
            measure: UnicodeMeasure,
        }
    }
}

impl Default for FilenameColumn {
    fn default() -> Self {
        Self::new(FilenameParams::default())
    }
}

impl<R, M> FilenameColumn<R, M> {
    /// Replaces the link target resolver.
    pub fn with_resolver<R2>(self, resolver: R2) -> FilenameColumn<R2, M> {
        FilenameColumn {
            params: self.params,
            highlights: self.highlights,
            resolver,
            measure: self.measure,
        }
    }

    /// Replaces the display-width function.
    pub fn with_measure<M2>(self, measure: M2) -> FilenameColumn<R, M2> {
        FilenameColumn {
            params: self.params,
            highlights: self.highlights,
            resolver: self.resolver,
            measure,
        }
    }

    pub const fn params(&self) -> &FilenameParams {
        &self.params
    }

    pub const fn highlights(&self) -> &ResolvedHighlights {
        &self.highlights
    }
}

impl<R: PathResolver, M: TextMeasure> FilenameColumn<R, M> {
    /// Unstyled name portion of the row.
    ///
    /// Directories end with `/`; links end with `" -> <target>"`, or `" -> ?"` when the
    /// target cannot be resolved. Paths that are not valid UTF-8 are shown lossily, with
    /// invalid sequences replaced by `U+FFFD`.
    pub fn base_text<A: ItemAction>(&self, item: &TreeItem<A>) -> String {
        let target = self.resolve_target(item);
        compose_base_text(item, target.as_ref())
    }

    /// Width the item needs: indentation, icon, separating space and base text.
    pub fn item_width<A: ItemAction>(&self, item: &TreeItem<A>, base_text: &str) -> usize {
        self.indent_cells(item)
            + usize::from(self.params.icon_width)
            + 1
            + self.measure.width(base_text)
    }

    /// Maximum rendered width across the batch.
    ///
    /// Fails with [`FilenameError::EmptyBatch`] when `items` is empty.
    pub fn max_width<A: ItemAction>(&self, items: &[TreeItem<A>]) -> Result<usize> {
        let width = items
            .iter()
            .map(|item| self.item_width(item, &self.base_text(item)))
            .max()
            .ok_or(FilenameError::EmptyBatch)?;
        log::trace!("filename column sized to {width} cells for {} items", items.len());
        Ok(width)
    }

    /// Length constraint for a ratatui layout, saturated to `u16`.
    pub fn constraint<A: ItemAction>(&self, items: &[TreeItem<A>]) -> Result<Constraint> {
        let width = self.max_width(items)?;
        Ok(Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX)))
    }

    /// Final row text padded to fill `bounds`, with highlight spans.
    ///
    /// Pass a precomputed `base_text` to skip link resolution; otherwise it is computed
    /// with [`Self::base_text`].
    pub fn display<'a, A: ItemAction>(
        &'a self,
        item: &TreeItem<A>,
        bounds: ColumnBounds,
        base_text: Option<&str>,
    ) -> RenderedText<'a> {
        let owned;
        let base_text = if let Some(text) = base_text {
            text
        } else {
            owned = self.base_text(item);
            owned.as_str()
        };

        let indent = self.indent_cells(item);
        let icon_width = usize::from(self.params.icon_width);
        let icon_col = bounds.start_col() + indent;

        let mut highlights = SmallVec::<[HighlightSpan<'a>; 2]>::new();
        if let Some((icon, name)) = self.span_groups(item) {
            highlights.push(HighlightSpan {
                name: icon.0,
                group: icon.1,
                col: icon_col,
                width: icon_width,
            });
            if !base_text.is_empty() {
                highlights.push(HighlightSpan {
                    name: name.0,
                    group: name.1,
                    col: icon_col + icon_width + 1,
                    width: self.measure.width(base_text),
                });
            }
        }

        let icon = self.params.glyphs().icon_for(item);
        let mut text = String::with_capacity(indent + icon.len() + 1 + base_text.len());
        text.extend(repeat_n(' ', indent));
        text.push_str(icon);
        text.push(' ');
        text.push_str(base_text);

        let padding = bounds.width().saturating_sub(self.measure.width(&text));
        text.extend(repeat_n(' ', padding));

        RenderedText {
            text,
            highlights,
            bounds,
        }
    }

    fn resolve_target<A: ItemAction>(&self, item: &TreeItem<A>) -> Option<io::Result<PathBuf>> {
        item.link_path().map(|path| resolve_logged(&self.resolver, path))
    }
}

/// Resolves a link target, logging the failure that the caller will render as `?`.
fn resolve_logged<R: PathResolver>(resolver: &R, path: &Path) -> io::Result<PathBuf> {
    resolver.resolve(path).inspect_err(|err| {
        log::debug!("cannot resolve link target of {}: {err}", path.display());
    })
}

type SpanGroup<'a> = (&'static str, &'a str);

impl<R, M> FilenameColumn<R, M> {
    const fn indent_cells<A>(&self, item: &TreeItem<A>) -> usize {
        item.level as usize * self.params.indentation_width as usize
    }

    fn span_groups<A: ItemAction>(
        &self,
        item: &TreeItem<A>,
    ) -> Option<(SpanGroup<'_>, SpanGroup<'_>)> {
        if item.is_tree {
            Some((
                (DIRECTORY_ICON_SPAN, self.highlights.directory_icon.as_str()),
                (DIRECTORY_NAME_SPAN, self.highlights.directory_name.as_str()),
            ))
        } else if item.action.is_link() {
            Some((
                (LINK_ICON_SPAN, self.highlights.link_icon.as_str()),
                (LINK_NAME_SPAN, self.highlights.link_name.as_str()),
            ))
        } else {
            None
        }
    }
}

#[cfg(feature = "tokio")]
impl<R, M> FilenameColumn<R, M>
where
    R: PathResolver + Clone + Send + 'static,
    M: TextMeasure,
{
    /// Like [`Self::max_width`], but resolves link targets as concurrent blocking tasks
    /// and joins all of them before taking the maximum.
    ///
    /// Must be called from within a tokio runtime.
    pub async fn max_width_concurrent<A: ItemAction>(
        &self,
        items: &[TreeItem<A>],
    ) -> Result<usize> {
        if items.is_empty() {
            return Err(FilenameError::EmptyBatch);
        }

        let mut tasks = tokio::task::JoinSet::new();
        for (idx, item) in items.iter().enumerate() {
            if let Some(path) = item.link_path() {
                let resolver = self.resolver.clone();
                let path = path.to_path_buf();
                tasks.spawn_blocking(move || (idx, resolve_logged(&resolver, &path)));
            }
        }

        let mut targets: Vec<Option<io::Result<PathBuf>>> =
            (0..items.len()).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            let (idx, target) = joined?;
            targets[idx] = Some(target);
        }

        let width = items
            .iter()
            .zip(&targets)
            .map(|(item, target)| {
                self.item_width(item, &compose_base_text(item, target.as_ref()))
            })
            .max()
            .ok_or(FilenameError::EmptyBatch)?;
        log::trace!("filename column sized to {width} cells for {} items", items.len());
        Ok(width)
    }
}

fn compose_base_text<A: ItemAction>(
    item: &TreeItem<A>,
    target: Option<&io::Result<PathBuf>>,
) -> String {
    let raw = match item.action.path() {
        Some(path) if !path.as_os_str().is_empty() => path.to_string_lossy(),
        _ => Cow::Borrowed(item.word.as_str()),
    };

    let mut text = String::new();
    if let Some(prefix) = &item.grouped_path_prefix {
        text.push_str(prefix);
    }
    text.push_str(basename(&raw));
    if item.is_tree {
        text.push(DIRECTORY_SUFFIX);
    }
    if let Some(target) = target {
        text.push_str(LINK_ARROW);
        match target {
            Ok(path) => text.push_str(&path.to_string_lossy()),
            Err(_) => text.push(UNRESOLVED_TARGET),
        }
    }
    text
}

/// Last path component, ignoring trailing separators. The root yields `""`.
fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(is_separator);
    trimmed.rsplit(is_separator).next().unwrap_or(trimmed)
}
