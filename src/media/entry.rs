use std::path::PathBuf;

/// Derived metadata for one catalog entry. Zeroed fields mean extraction
/// failed for that dimension — the entry is kept regardless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoMeta {
    pub duration_secs: f64,
    pub width: u32,
    pub height: u32,
    /// File modification time as epoch milliseconds.
    pub created_at_ms: i64,
    pub size_bytes: u64,
}

/// Opaque poster-frame payload. Empty when extraction failed or the active
/// probe does not decode frames.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Thumbnail(Vec<u8>);

impl Thumbnail {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// One catalog record. Exists only in memory; replaced wholesale whenever a
/// new source (folder, drop batch, folder playlist) is loaded.
#[derive(Debug, Clone)]
pub struct VideoEntry {
    /// Stable id from the (name, size, mtime) triple — see `media::deriver`.
    pub id: String,
    /// Handle to the underlying bytes. The engine never rewrites file content.
    pub path: PathBuf,
    pub display_name: String,
    /// Lowercased, derived from the display name.
    pub extension: String,
    pub meta: VideoMeta,
    pub thumbnail: Thumbnail,
    /// Mirror of FavoriteStore membership; never independently authoritative.
    pub is_favorite: bool,
}

impl VideoEntry {
    pub fn quality(&self) -> QualityBucket {
        QualityBucket::of(self.meta.width, self.meta.height)
    }
}

/// Classification of an entry by its larger pixel dimension. Degraded 0x0
/// entries land in `Sd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityBucket {
    Uhd4k,
    Hd1080,
    Hd720,
    Sd,
}

impl QualityBucket {
    pub fn of(width: u32, height: u32) -> Self {
        let max_dim = width.max(height);
        if max_dim >= 2160 {
            QualityBucket::Uhd4k
        } else if max_dim >= 1080 {
            QualityBucket::Hd1080
        } else if max_dim >= 720 {
            QualityBucket::Hd720
        } else {
            QualityBucket::Sd
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityBucket::Uhd4k => "4k",
            QualityBucket::Hd1080 => "1080p",
            QualityBucket::Hd720 => "720p",
            QualityBucket::Sd => "sd",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "4k" => Some(QualityBucket::Uhd4k),
            "1080p" => Some(QualityBucket::Hd1080),
            "720p" => Some(QualityBucket::Hd720),
            "sd" => Some(QualityBucket::Sd),
            _ => None,
        }
    }
}
