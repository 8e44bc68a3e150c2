use crate::media::entry::{QualityBucket, VideoEntry};

/// Filter + sort specification for one projection of the catalog.
/// All predicates must hold for an entry to appear.
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    /// Case-insensitive substring of the display name; empty matches all.
    pub search_text: String,
    pub format: FormatFilter,
    pub quality: QualityFilter,
    pub favorites_only: bool,
    /// Manual-playlist membership filter. Ids without a catalog entry are
    /// simply never produced.
    pub playlist_ids: Option<Vec<String>>,
    pub sort: SortKey,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormatFilter {
    #[default]
    All,
    /// Exact extension match, case-insensitive.
    Extension(String),
}

impl FormatFilter {
    /// Parse a user-supplied format name; "all" (or blank) matches everything.
    pub fn from_name(name: &str) -> FormatFilter {
        let name = name.trim().trim_start_matches('.');
        if name.is_empty() || name.eq_ignore_ascii_case("all") {
            FormatFilter::All
        } else {
            FormatFilter::Extension(name.to_ascii_lowercase())
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QualityFilter {
    /// Everything, including zero-resolution degraded entries.
    #[default]
    All,
    Bucket(QualityBucket),
}

impl QualityFilter {
    /// Parse a user-supplied bucket name; anything unrecognized matches all.
    pub fn from_name(name: &str) -> QualityFilter {
        QualityBucket::from_label(name)
            .map(QualityFilter::Bucket)
            .unwrap_or(QualityFilter::All)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Lexicographic ascending by display name.
    #[default]
    Name,
    /// Newest first.
    Date,
    /// Largest first.
    Size,
    /// Longest first.
    Duration,
    /// Leave the filtered order as-is.
    Unsorted,
}

impl SortKey {
    /// Parse a user-supplied sort name; anything unrecognized applies no
    /// reordering.
    pub fn from_name(name: &str) -> SortKey {
        match name.to_ascii_lowercase().as_str() {
            "name" => SortKey::Name,
            "date" => SortKey::Date,
            "size" => SortKey::Size,
            "duration" => SortKey::Duration,
            _ => SortKey::Unsorted,
        }
    }
}

/// Project the catalog through a spec: apply every predicate, then order
/// the survivors. Pure function of its inputs — cheap enough to re-run on
/// every keystroke of a search box.
pub fn project<'a>(entries: &'a [VideoEntry], spec: &QuerySpec) -> Vec<&'a VideoEntry> {
    let needle = spec.search_text.to_lowercase();
    let mut view: Vec<&VideoEntry> = entries
        .iter()
        .filter(|entry| matches(entry, spec, &needle))
        .collect();

    match spec.sort {
        SortKey::Name => view.sort_by(|a, b| a.display_name.cmp(&b.display_name)),
        SortKey::Date => view.sort_by(|a, b| b.meta.created_at_ms.cmp(&a.meta.created_at_ms)),
        SortKey::Size => view.sort_by(|a, b| b.meta.size_bytes.cmp(&a.meta.size_bytes)),
        SortKey::Duration => {
            view.sort_by(|a, b| b.meta.duration_secs.total_cmp(&a.meta.duration_secs))
        }
        SortKey::Unsorted => {}
    }
    view
}

fn matches(entry: &VideoEntry, spec: &QuerySpec, needle: &str) -> bool {
    if !needle.is_empty() && !entry.display_name.to_lowercase().contains(needle) {
        return false;
    }
    if let FormatFilter::Extension(ext) = &spec.format {
        if !entry.extension.eq_ignore_ascii_case(ext) {
            return false;
        }
    }
    if let QualityFilter::Bucket(bucket) = spec.quality {
        if entry.quality() != bucket {
            return false;
        }
    }
    if spec.favorites_only && !entry.is_favorite {
        return false;
    }
    if let Some(ids) = &spec.playlist_ids {
        if !ids.iter().any(|id| id == &entry.id) {
            return false;
        }
    }
    true
}
