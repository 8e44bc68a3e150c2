use std::io::BufReader;
use std::path::Path;

/// Raw measurements a probe reports for one file. Fields default to zero
/// when the implementation cannot extract them.
#[derive(Debug, Clone, Default)]
pub struct ProbeData {
    pub duration_secs: f64,
    pub width: u32,
    pub height: u32,
    /// Poster-frame bytes, when the implementation decodes frames.
    pub thumbnail: Option<Vec<u8>>,
}

/// Where a poster frame should be sampled: a quarter of the way in, capped
/// at one second. Skips black leading frames without a full decode.
pub fn poster_sample_secs(duration_secs: f64) -> f64 {
    (duration_secs / 4.0).min(1.0).max(0.0)
}

/// Metadata/thumbnail extraction seam. Returns `None` when the file cannot
/// be read as video at all — the deriver keeps a degraded entry either way.
///
/// Implementations that decode frames should sample at
/// `poster_sample_secs(duration)`.
pub trait MediaProbe: Send + Sync {
    fn probe(&self, path: &Path) -> Option<ProbeData>;
}

/// Container-header probe: mp4/m4v/mov through the `mp4` crate, everything
/// else through symphonia (duration only — symphonia does not expose video
/// frame dimensions). Never decodes frames, so thumbnails stay empty.
#[derive(Debug, Default)]
pub struct HeaderProbe;

impl MediaProbe for HeaderProbe {
    fn probe(&self, path: &Path) -> Option<ProbeData> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "mp4" | "m4v" | "mov" => probe_isobmff(path),
            _ => probe_with_symphonia(path),
        }
    }
}

/// Read duration and the first video track's dimensions from an ISO-BMFF
/// container header. Returns None if the header cannot be parsed — never panics.
fn probe_isobmff(path: &Path) -> Option<ProbeData> {
    use mp4::TrackType;

    let file = std::fs::File::open(path).ok()?;
    let file_len = file.metadata().ok()?.len();
    let reader = BufReader::new(file);

    let mp4 = mp4::Mp4Reader::read_header(reader, file_len).ok()?;

    let duration_secs = mp4.duration().as_secs_f64();

    let mut width = 0u32;
    let mut height = 0u32;
    for track in mp4.tracks().values() {
        if matches!(track.track_type(), Ok(TrackType::Video)) {
            width = u32::from(track.width());
            height = u32::from(track.height());
            break;
        }
    }

    Some(ProbeData {
        duration_secs,
        width,
        height,
        thumbnail: None,
    })
}

/// Probe non-ISO-BMFF containers (MKV, WebM, AVI, OGG, ...) with symphonia.
/// Duration comes from the first decodable track's frame count; resolution
/// is left at zero.
fn probe_with_symphonia(path: &Path) -> Option<ProbeData> {
    use symphonia::core::codecs::CODEC_TYPE_NULL;
    use symphonia::core::io::MediaSourceStream;
    use symphonia::core::probe::Hint;

    let file = std::fs::File::open(path).ok()?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &Default::default(), &Default::default())
        .ok()?;

    let format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)?;

    // Duration via n_frames × time_base. For streams without a frame count
    // the duration stays zero and the entry is served as-is.
    let duration_secs = track
        .codec_params
        .time_base
        .and_then(|tb| {
            track.codec_params.n_frames.map(|n| {
                let t = tb.calc_time(n);
                t.seconds as f64 + t.frac
            })
        })
        .unwrap_or(0.0);

    if duration_secs == 0.0 {
        tracing::debug!("No duration for {} (n_frames unavailable)", path.display());
    }

    Some(ProbeData {
        duration_secs,
        width: 0,
        height: 0,
        thumbnail: None,
    })
}
