use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use colorname::api;
use colorname::assets::{AssetCategory, AssetLoader};
use colorname::models::AppConfig;
use colorname::server;
use palette_match::{Catalog, ColorReport, DistanceMetric, QueryError, Srgb};

#[derive(Parser)]
#[command(name = "colorname")]
#[command(about = "Resolve color names and nearest colors against named palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// List available palettes
    List,
    /// Print every color of a palette
    Show {
        /// Palette key (case-insensitive)
        palette: String,
    },
    /// Resolve color names to palette entries
    Names {
        /// Palette key (case-insensitive)
        palette: String,

        /// Color names, e.g. "light blue" grn
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Find the nearest palette entry for color samples
    Colors {
        /// Palette key (case-insensitive)
        palette: String,

        /// Samples as #RRGGBB, #RGB or r,g,b in [0, 1]
        #[arg(required = true)]
        samples: Vec<String>,

        /// Distance metric (RGB, OKLab, DIN99, CIE76, CIEDE2000, CIE94,
        /// CIE94-textiles, CMC2:1, CMC1:1)
        #[arg(short, long)]
        metric: Option<String>,
    },
    /// Show a color in every supported color space
    Convert {
        /// Color as #RRGGBB, #RGB or r,g,b in [0, 1]
        color: String,
    },
    /// Extract embedded assets to filesystem for customization
    Init {
        /// Extract palette files
        #[arg(long)]
        palettes: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Colorname API",
        description = "Color name resolution and perceptual color matching against named palettes",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_list_palettes,
        api::handle_get_palette,
        api::handle_resolve_names,
        api::handle_resolve_colors,
        api::handle_convert,
    ),
    components(schemas(
        api::EntryJson,
        api::PaletteSummary,
        api::PaletteListResponse,
        api::PaletteResponse,
        api::NamesRequest,
        api::NamesResponse,
        api::SampleInput,
        api::ColorsRequest,
        api::ColorMatchJson,
        api::ColorsResponse,
        api::ConvertResponse,
    )),
    tags(
        (name = "Palettes", description = "Palette catalog"),
        (name = "Matching", description = "Name resolution and nearest-color matching"),
        (name = "Colors", description = "Color space conversion")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::List) => run_list_command(),
        Some(Commands::Show { palette }) => run_show_command(&palette),
        Some(Commands::Names { palette, names }) => run_names_command(&palette, &names),
        Some(Commands::Colors {
            palette,
            samples,
            metric,
        }) => run_colors_command(&palette, &samples, metric.as_deref()),
        Some(Commands::Convert { color }) => run_convert_command(&color),
        Some(Commands::Init {
            palettes,
            config,
            all,
            force,
            list,
        }) => run_init_command(palettes, config, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Asset loader with optional external paths from env vars
fn asset_loader_from_env() -> AssetLoader {
    let palettes_dir = std::env::var("PALETTES_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    AssetLoader::new(palettes_dir, config_file)
}

/// Minimal logging and catalog setup shared by the one-shot commands
fn init_cli() -> anyhow::Result<(Catalog, AppConfig)> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorname=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let loader = asset_loader_from_env();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed assets");
    }

    let config = AppConfig::load_from_assets(&loader);
    let catalog = server::load_catalog(&loader, &config)?;
    Ok((catalog, config))
}

fn run_list_command() -> anyhow::Result<()> {
    let (catalog, _) = init_cli()?;

    for palette in catalog.palettes() {
        match palette.metadata().license {
            Some(ref license) => println!("{:<16} {:>4} colors  ({license})", palette.key(), palette.len()),
            None => println!("{:<16} {:>4} colors", palette.key(), palette.len()),
        }
    }
    Ok(())
}

fn run_show_command(key: &str) -> anyhow::Result<()> {
    let (catalog, _) = init_cli()?;
    let palette = catalog.palette(key)?;

    println!("{} ({} colors)", palette.key(), palette.len());
    if let Some(ref source) = palette.metadata().source {
        println!("Source: {source}");
    }
    println!();
    for entry in palette.entries() {
        println!("  {:>3}  {}  {}", entry.index, entry.hex(), entry.name);
    }
    Ok(())
}

fn run_names_command(key: &str, names: &[String]) -> anyhow::Result<()> {
    let (catalog, _) = init_cli()?;

    match catalog.resolve_names(key, names) {
        Ok(entries) => {
            for (query, entry) in names.iter().zip(entries) {
                println!("{query:<24} -> {}  {}", entry.hex(), entry.name);
            }
            Ok(())
        }
        Err(QueryError::UnmatchedNames { palette, unmatched }) => {
            eprintln!("No match in {palette} for:");
            for name in &unmatched {
                let suggestions: Vec<&str> =
                    name.suggestions.iter().map(String::as_str).collect();
                eprintln!("  {:?} (did you mean: {})", name.query, suggestions.join(", "));
            }
            std::process::exit(2);
        }
        Err(e) => Err(e.into()),
    }
}

fn run_colors_command(key: &str, samples: &[String], metric: Option<&str>) -> anyhow::Result<()> {
    let (catalog, config) = init_cli()?;

    let metric = match metric {
        Some(name) => name.parse::<DistanceMetric>()?,
        None => config.metric(),
    };
    let rgb = samples
        .iter()
        .map(|s| api::parse_sample(s))
        .collect::<Result<Vec<_>, _>>()?;

    let matches = catalog.resolve_colors(key, &rgb, Some(metric))?;
    println!("Metric: {}", metric.name());
    for (sample, m) in samples.iter().zip(matches) {
        println!(
            "{sample:<24} -> {}  {:<24} ({:.4})",
            m.entry.hex(),
            m.entry.name,
            m.distance
        );
    }
    Ok(())
}

fn run_convert_command(color: &str) -> anyhow::Result<()> {
    let rgb = api::parse_sample(color)?;
    if rgb.iter().any(|v| !(0.0..=1.0).contains(v)) {
        anyhow::bail!("color components must lie in [0, 1]: {color}");
    }
    let report = ColorReport::from(Srgb::from(rgb));

    fn row(label: &str, values: [f64; 3]) {
        println!(
            "  {label:<10} {:>10.4} {:>10.4} {:>10.4}",
            values[0], values[1], values[2]
        );
    }

    println!("{}", report.srgb.to_hex());
    row("sRGB", report.srgb.to_array());
    row("linear", report.linear.to_array());
    row("XYZ", report.xyz.to_array());
    row("Lab", report.lab.to_array());
    row("LCh", report.lch.to_array());
    row("OKLab", report.oklab.to_array());
    row("DIN99", report.din99.to_array());
    row("HSV", report.hsv.to_array());
    Ok(())
}

/// Extract embedded assets to the filesystem
fn run_init_command(
    palettes: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Palettes:");
        for f in AssetLoader::list_embedded(AssetCategory::Palettes) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    // Determine which categories to extract
    let mut categories = Vec::new();
    if all || palettes {
        categories.push(AssetCategory::Palettes);
    }
    if all || config {
        categories.push(AssetCategory::Config);
    }

    if categories.is_empty() {
        eprintln!("No categories specified. Use --all, --palettes, or --config");
        eprintln!("\nRun 'colorname init --list' to see embedded assets.");
        std::process::exit(1);
    }

    let report = asset_loader_from_env().init(&categories, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();
    let palettes_dir = std::env::var("PALETTES_DIR").ok();

    println!("Colorname v{VERSION}");
    println!("Color names and nearest colors from named palettes\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR    = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTES_DIR = {}",
        palettes_dir.as_deref().unwrap_or("(not set)")
    );

    println!("\nAsset Sources:");

    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("  Config:   {config_source}");

    fn plural(n: usize) -> &'static str {
        if n == 1 {
            "file"
        } else {
            "files"
        }
    }

    let loader = AssetLoader::new(palettes_dir.clone().map(PathBuf::from), None);
    let count = loader.list_palette_files().len();
    let embedded_count = AssetLoader::list_embedded(AssetCategory::Palettes).len();

    match palettes_dir {
        Some(ref path) if PathBuf::from(path).exists() => println!(
            "  Palettes: {path} ({count} {}, {embedded_count} embedded)",
            plural(count)
        ),
        _ => println!(
            "  Palettes: embedded ({embedded_count} {})",
            plural(embedded_count)
        ),
    }

    println!("\nCommands:");
    println!("  colorname serve     Start the HTTP server");
    println!("  colorname list      List palettes");
    println!("  colorname show      Print a palette");
    println!("  colorname names     Resolve color names");
    println!("  colorname colors    Match color samples");
    println!("  colorname convert   Show a color in every color space");
    println!("  colorname init      Extract embedded assets");
    println!("\nRun 'colorname --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "colorname=debug,palette_match=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let palettes_dir = std::env::var("PALETTES_DIR").ok().map(PathBuf::from);
    let config_file = std::env::var("CONFIG_FILE").ok().map(PathBuf::from);
    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let asset_loader = Arc::new(AssetLoader::new(palettes_dir.clone(), config_file.clone()));

    tracing::info!(
        palettes = ?palettes_dir.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        config = ?config_file.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "embedded".to_string()),
        "Asset sources configured"
    );

    match asset_loader.seed_if_configured() {
        Ok(report) if !report.is_empty() => {
            tracing::info!(
                palettes = report.palettes_seeded.len(),
                config = report.config_seeded,
                "Seeded empty directories with embedded assets"
            );
        }
        Err(e) => {
            tracing::warn!(%e, "Failed to seed assets");
        }
        _ => {}
    }

    let state = server::create_app_state(asset_loader)?;

    // OpenAPI documentation is production only
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Colorname server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
