use std::io;
use std::path::{Path, PathBuf};

use unicode_width::UnicodeWidthStr;

/// Display-cell width of a string as the terminal renders it.
pub trait TextMeasure {
    fn width(&self, text: &str) -> usize;
}

/// Measures with the Unicode East Asian Width tables (wide and zero-width aware).
#[derive(Clone, Copy, Debug, Default)]
pub struct UnicodeMeasure;

impl TextMeasure for UnicodeMeasure {
    #[inline]
    fn width(&self, text: &str) -> usize {
        UnicodeWidthStr::width(text)
    }
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> usize,
{
    #[inline]
    fn width(&self, text: &str) -> usize {
        self(text)
    }
}

/// Resolves the canonical target of a filesystem path. May fail.
pub trait PathResolver {
    fn resolve(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Resolves through the filesystem with `std::fs::canonicalize`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalResolver;

impl PathResolver for CanonicalResolver {
    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}
