use std::path::Path;

/// Container extensions the library accepts, lowercased. Everything else is
/// silently skipped during enumeration.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm", "ogg", "flv", "wmv"];

/// JPEG quality the playback-snapshot collaborator must encode at.
pub const SNAPSHOT_JPEG_QUALITY: f32 = 0.95;

/// File name for a playback snapshot captured at `epoch_ms`.
pub fn snapshot_file_name(epoch_ms: i64) -> String {
    format!("snapshot-{}.jpg", epoch_ms)
}

/// Whether a path carries one of the supported video container extensions.
/// Extensions are matched case-insensitively.
pub fn is_video_path(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}

/// Lowercased extension of a display name, or "" when it has none.
/// A leading dot alone (".hidden") does not count as an extension.
pub fn display_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
        _ => String::new(),
    }
}

/// Format a duration for display. `secs` is clamped to whole seconds;
/// hours are zero-padded to at least 2 digits.
pub fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let h = total / 3600;
    let m = (total % 3600) / 60;
    let s = total % 60;
    format!("{:02}:{:02}:{:02}", h, m, s)
}
