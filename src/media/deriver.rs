use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::media::entry::{Thumbnail, VideoEntry, VideoMeta};
use crate::media::formats::display_extension;
use crate::media::probe::MediaProbe;

/// Compose the stable entry id from the identity triple. Two files agreeing
/// on all three collide by design (accepted limitation).
pub fn video_id(display_name: &str, size_bytes: u64, modified_ms: i64) -> String {
    format!("{}_{}_{}", display_name, size_bytes, modified_ms)
}

/// Build the identity-only skeleton of an entry: stat the file, derive the
/// id, leave every extracted field at its degraded zero value.
pub fn degraded(path: &Path) -> VideoEntry {
    let display_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_owned)
        .unwrap_or_else(|| path.to_string_lossy().into_owned());

    let (size_bytes, modified_ms) = match std::fs::metadata(path) {
        Ok(meta) => {
            let modified_ms = meta
                .modified()
                .ok()
                .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                .map(|d| d.as_millis() as i64)
                .unwrap_or(0);
            (meta.len(), modified_ms)
        }
        Err(e) => {
            tracing::warn!("Cannot stat {}: {}", path.display(), e);
            (0, 0)
        }
    };

    VideoEntry {
        id: video_id(&display_name, size_bytes, modified_ms),
        path: path.to_path_buf(),
        extension: display_extension(&display_name),
        display_name,
        meta: VideoMeta {
            duration_secs: 0.0,
            width: 0,
            height: 0,
            created_at_ms: modified_ms,
            size_bytes,
        },
        thumbnail: Thumbnail::empty(),
        is_favorite: false,
    }
}

/// Derive the full entry for one file. Extraction failure keeps the
/// degraded skeleton — a file is never dropped and this never errors.
pub fn derive(path: &Path, probe: &dyn MediaProbe) -> VideoEntry {
    let mut entry = degraded(path);

    match probe.probe(path) {
        Some(data) => {
            entry.meta.duration_secs = data.duration_secs.max(0.0);
            entry.meta.width = data.width;
            entry.meta.height = data.height;
            if let Some(bytes) = data.thumbnail {
                entry.thumbnail = Thumbnail::from_bytes(bytes);
            }
        }
        None => {
            tracing::warn!(
                "Metadata extraction failed for {} — keeping degraded entry",
                path.display()
            );
        }
    }

    entry
}
