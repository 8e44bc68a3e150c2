use clap::Parser;

use vtape::engine::query::{FormatFilter, QualityFilter, QuerySpec};
use vtape::engine::Engine;
use vtape::media::formats::format_duration;
use vtape::store::StorePaths;
use vtape::{cli, config};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Args::parse();

    let file_config = config::find_config_file(args.config.as_deref()).and_then(|path| {
        match config::load_config(&path) {
            Ok(cfg) => {
                tracing::debug!("Loaded config from {}", path.display());
                Some(cfg)
            }
            Err(e) => {
                tracing::warn!("Failed to parse config file: {}", e);
                None
            }
        }
    });

    let config = config::Config::resolve(file_config, &args);

    if !args.folder.is_dir() {
        eprintln!("error: not a directory: {}", args.folder.display());
        std::process::exit(1);
    }

    let mut engine = match Engine::init(StorePaths::in_dir(&config.data_dir)) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: cannot load library state: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = engine.load_folder(&args.folder).await {
        eprintln!(
            "error: cannot read folder {}: {}",
            args.folder.display(),
            e
        );
        std::process::exit(1);
    }

    if engine.entries().is_empty() {
        eprintln!(
            "error: no video files found in {}",
            args.folder.display()
        );
        std::process::exit(1);
    }

    let spec = QuerySpec {
        search_text: args.search.clone().unwrap_or_default(),
        format: args
            .format
            .as_deref()
            .map(FormatFilter::from_name)
            .unwrap_or_default(),
        quality: args
            .quality
            .as_deref()
            .map(QualityFilter::from_name)
            .unwrap_or_default(),
        favorites_only: args.favorites,
        playlist_ids: None,
        sort: config.sort,
    };

    let view = engine.query(&spec);
    tracing::info!(
        "{} of {} entries match",
        view.len(),
        engine.entries().len()
    );

    for entry in view {
        let marker = if entry.is_favorite { "*" } else { " " };
        let tags = engine.tags_for(&entry.id).join(",");
        println!(
            "{} {:>5}  {}  {:>12}  {}  {}",
            marker,
            entry.quality().label(),
            format_duration(entry.meta.duration_secs),
            format_size(entry.meta.size_bytes),
            entry.display_name,
            tags,
        );
    }
}

fn format_size(bytes: u64) -> String {
    const GIB: u64 = 1024 * 1024 * 1024;
    const MIB: u64 = 1024 * 1024;
    const KIB: u64 = 1024;
    if bytes >= GIB {
        format!("{:.1} GiB", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.1} MiB", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.1} KiB", bytes as f64 / KIB as f64)
    } else {
        format!("{} B", bytes)
    }
}
