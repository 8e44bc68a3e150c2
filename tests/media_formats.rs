use std::path::Path;
use vtape::media::formats::{
    display_extension, format_duration, is_video_path, snapshot_file_name, SNAPSHOT_JPEG_QUALITY,
    VIDEO_EXTENSIONS,
};

// ── is_video_path ────────────────────────────────────────────────────────────

#[test]
fn every_whitelisted_extension_is_accepted() {
    for ext in VIDEO_EXTENSIONS {
        let path = format!("/media/clip.{}", ext);
        assert!(is_video_path(Path::new(&path)), "rejected .{}", ext);
    }
}

#[test]
fn extensions_match_case_insensitively() {
    assert!(is_video_path(Path::new("/media/CLIP.MP4")));
    assert!(is_video_path(Path::new("/media/clip.MkV")));
}

#[test]
fn non_video_extensions_are_rejected() {
    assert!(!is_video_path(Path::new("/media/notes.txt")));
    assert!(!is_video_path(Path::new("/media/subs.srt")));
    assert!(!is_video_path(Path::new("/media/song.mp3")));
}

#[test]
fn missing_extension_is_rejected() {
    assert!(!is_video_path(Path::new("/media/noext")));
    assert!(!is_video_path(Path::new("/media/.hidden")));
}

// ── display_extension ────────────────────────────────────────────────────────

#[test]
fn display_extension_is_lowercased() {
    assert_eq!(display_extension("Holiday.MP4"), "mp4");
}

#[test]
fn display_extension_takes_last_dot() {
    assert_eq!(display_extension("backup.2024.mkv"), "mkv");
}

#[test]
fn display_extension_empty_when_none() {
    assert_eq!(display_extension("noext"), "");
    assert_eq!(display_extension(".hidden"), "");
}

// ── snapshot contract ────────────────────────────────────────────────────────

#[test]
fn snapshot_file_name_embeds_epoch_ms() {
    assert_eq!(
        snapshot_file_name(1_700_000_000_000),
        "snapshot-1700000000000.jpg"
    );
}

#[test]
fn snapshot_quality_is_ninety_five_percent() {
    assert_eq!(SNAPSHOT_JPEG_QUALITY, 0.95);
}

// ── format_duration ──────────────────────────────────────────────────────────

#[test]
fn duration_zero() {
    assert_eq!(format_duration(0.0), "00:00:00");
}

#[test]
fn duration_truncates_fraction() {
    assert_eq!(format_duration(59.999), "00:00:59");
}

#[test]
fn duration_one_hour_one_min_one_sec() {
    assert_eq!(format_duration(3661.2), "01:01:01");
}

#[test]
fn duration_negative_clamps_to_zero() {
    assert_eq!(format_duration(-5.0), "00:00:00");
}
