use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "vtape",
    about = "Local video library browser — `vtape /path/to/videos` and it works",
    long_about = None,
    version = env!("GIT_VERSION"),
    arg_required_else_help = true,
)]
pub struct Args {
    /// Directory containing video files to load into the library
    pub folder: PathBuf,

    /// Case-insensitive substring filter on file names
    #[arg(short, long)]
    pub search: Option<String>,

    /// Restrict to one container format (mp4, mov, avi, mkv, webm, ogg, flv, wmv)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Restrict to a quality bucket: 4k, 1080p, 720p, sd
    #[arg(short, long)]
    pub quality: Option<String>,

    /// Show favorites only
    #[arg(long)]
    pub favorites: bool,

    /// Sort order: name, date, size, duration [default: name]
    #[arg(long)]
    pub sort: Option<String>,

    /// Directory holding the favorites/playlists/tags documents
    #[arg(long, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Path to TOML config file (overrides default search: ./vtape.toml, ~/.config/vtape/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
