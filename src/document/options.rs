/// Configuration types for importing marks from document markup.
///
/// Options control which non-form marks end up in the mark store. Form
/// fields are always imported.
///
/// # Examples
///
/// ```rust
/// use formfields::document::ImportOptions;
///
/// // Create with defaults
/// let options = ImportOptions::default();
/// assert!(options.include_bookmarks);
///
/// // Or customize
/// let options = ImportOptions::new()
///     .with_bookmarks(true)
///     .with_hidden_bookmarks(true);
/// ```
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Whether plain bookmarks are stored as (non-qualifying) marks
    pub include_bookmarks: bool,
    /// Whether system bookmarks (names starting with `_`) are stored too
    pub include_hidden_bookmarks: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            include_bookmarks: true,
            include_hidden_bookmarks: false,
        }
    }
}

impl ImportOptions {
    /// Create a new `ImportOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether plain bookmarks are imported.
    ///
    /// Bookmarks never count as form fields, but keeping them in the store
    /// preserves the full mark sequence of the document.
    #[inline]
    pub fn with_bookmarks(mut self, include: bool) -> Self {
        self.include_bookmarks = include;
        self
    }

    /// Set whether hidden system bookmarks are imported.
    ///
    /// Word generates bookmarks such as `_GoBack` and `_Toc123`; they are
    /// skipped unless this is enabled. Has no effect when bookmarks are
    /// excluded altogether.
    #[inline]
    pub fn with_hidden_bookmarks(mut self, include: bool) -> Self {
        self.include_hidden_bookmarks = include;
        self
    }

    /// Whether a bookmark with this name should be stored.
    #[allow(dead_code)] // Only called by the format importers
    pub(crate) fn keeps_bookmark(&self, name: &str) -> bool {
        self.include_bookmarks
            && !name.is_empty()
            && (self.include_hidden_bookmarks || !name.starts_with('_'))
    }
}
