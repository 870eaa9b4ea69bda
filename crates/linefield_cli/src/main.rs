//! linefield CLI
//!
//! Preview underlined text field configurations without a display.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linefield_platform::{HeadlessPlatform, Platform};
use linefield_widgets::{FieldConfig, IndicatorStyle, PlaceholderStyle, ACCESSORY_MARGIN};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod preview;

use preview::PreviewOptions;

#[derive(Parser)]
#[command(name = "linefield")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Underlined text field previewer", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a field on the headless host and print the result
    Preview {
        /// Field configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Field width
        #[arg(long, default_value = "300")]
        width: f32,

        /// Field height
        #[arg(long, default_value = "40")]
        height: f32,

        /// Screen scale factor
        #[arg(long, default_value = "1")]
        scale: f64,

        /// Layout direction (ltr, rtl); defaults to the platform direction
        #[arg(short, long)]
        direction: Option<String>,

        /// Give the field focus
        #[arg(long)]
        focused: bool,

        /// Put the field in its selected state
        #[arg(long)]
        selected: bool,

        /// Render as a design-time preview
        #[arg(long)]
        design_time: bool,
    },

    /// Validate a field configuration file
    Check {
        /// Field configuration (TOML)
        config: PathBuf,
    },

    /// Show version and default appearance
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Preview {
            config,
            width,
            height,
            scale,
            direction,
            focused,
            selected,
            design_time,
        } => {
            let direction = direction
                .as_deref()
                .map(HeadlessPlatform::parse_direction)
                .transpose()?;
            let options = PreviewOptions {
                width,
                height,
                scale_factor: scale,
                direction,
                focused,
                selected,
                design_time,
            };
            cmd_preview(config.as_deref(), &options)
        }

        Commands::Check { config } => cmd_check(&config),

        Commands::Info => cmd_info(),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<FieldConfig> {
    match path {
        Some(path) => FieldConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(FieldConfig::default()),
    }
}

fn cmd_preview(config: Option<&std::path::Path>, options: &PreviewOptions) -> Result<()> {
    if !(options.width >= 0.0 && options.height >= 0.0) {
        anyhow::bail!(
            "Invalid field size {}x{}: dimensions must be non-negative",
            options.width,
            options.height
        );
    }

    let config = load_config(config)?;
    let report = preview::render(&config, options)?;
    println!("{report}");
    Ok(())
}

fn cmd_check(path: &std::path::Path) -> Result<()> {
    let config = load_config(Some(path))?;
    info!("{} is valid", path.display());

    println!("{}: ok", path.display());
    if config.enabled != Some(true) {
        println!("  note: underline is not enabled");
    }
    Ok(())
}

fn cmd_info() -> Result<()> {
    let style = IndicatorStyle::default();
    let placeholder = PlaceholderStyle::default();
    let platform = HeadlessPlatform::new().context("failed to initialize headless platform")?;

    println!("linefield");
    println!("=========");
    println!();
    println!("Version: {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Defaults:");
    println!("  normal color:      {}", style.normal_color.to_hex_string());
    println!("  selected color:    {}", style.selected_color.to_hex_string());
    println!("  line heights:      2/scale normal, 2x normal selected");
    println!("  placeholder color: {}", placeholder.color.to_hex_string());
    println!("  accessory margin:  {}", ACCESSORY_MARGIN);
    println!();
    println!("Platform:  {}", platform.name());
    println!("Direction: {:?}", platform.layout_direction());
    println!("  override with {}", linefield_platform::LAYOUT_DIRECTION_ENV);

    Ok(())
}
