use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use design_hub::api::{ContrastResponse, PaletteResponse};
use design_hub::calculator::{self, Room};
use design_hub::config::HubConfig;
use design_hub::export::{self, ExportFormat};
use design_hub::preferences::PreferenceStore;
use design_hub::{DesignSession, Scheme, contrast_for_hex, is_valid_hex};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "design-hub",
    author,
    version,
    about = "Generate color palettes, check contrast and estimate paint for a room",
    long_about = None
)]
pub struct Cli {
    /// Preferences file remembering the last-used scheme
    #[arg(long, global = true, value_name = "PREFS_FILE")]
    pub prefs: Option<PathBuf>,

    /// Configuration file with harmony and calculator constants
    #[arg(long, global = true, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate a harmony palette from a base color
    Palette {
        /// Base color as #RRGGBB or #RGB
        #[arg(long, value_name = "HEX")]
        base: String,

        /// Harmony scheme; defaults to the last one used
        #[arg(long, value_name = "SCHEME")]
        scheme: Option<Scheme>,

        /// Print the palette as JSON
        #[arg(long)]
        json: bool,
    },
    /// Measure the contrast ratio between two colors
    Contrast {
        #[arg(value_name = "HEX")]
        first: String,

        #[arg(value_name = "HEX")]
        second: String,

        #[arg(long)]
        json: bool,
    },
    /// Export a palette as a plain list or a styled HTML document
    Export {
        #[arg(long, value_name = "HEX")]
        base: String,

        #[arg(long, value_name = "SCHEME")]
        scheme: Option<Scheme>,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Directory receiving the exported file
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },
    /// Estimate paint quantity and cost for the walls of a room
    Estimate {
        /// Room length in metres
        #[arg(long)]
        length: f64,

        /// Room width in metres
        #[arg(long)]
        width: f64,

        /// Wall height in metres
        #[arg(long)]
        height: f64,

        #[arg(long, default_value_t = 1)]
        coats: u32,
    },
    /// Show the stored scheme preference
    Prefs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Html,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ExportFormat::Text,
            Format::Html => ExportFormat::Html,
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, &mut out)
}

pub fn execute<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    let Cli {
        prefs,
        config,
        command,
    } = cli;
    let config = load_config(config.as_deref())?;

    match command {
        Command::Palette { base, scheme, json } => {
            if json && !is_valid_hex(&base) {
                let response = PaletteResponse::rejected(format!("invalid hex color '{base}'"));
                return write_json(out, &response);
            }

            let session = open_session(prefs.as_deref(), &base, scheme, &config)?;
            if json {
                write_json(out, &PaletteResponse::from_session(&session))
            } else {
                write_palette(out, &session)
            }
        }
        Command::Contrast {
            first,
            second,
            json,
        } => {
            let contrast = contrast_for_hex(&first, &second)
                .with_context(|| format!("cannot compare '{first}' with '{second}'"))?;
            if json {
                write_json(out, &ContrastResponse::new(&first, &second, contrast))
            } else {
                writeln!(out, "{first} vs {second}: {contrast}")?;
                Ok(())
            }
        }
        Command::Export {
            base,
            scheme,
            format,
            out_dir,
        } => {
            let session = open_session(prefs.as_deref(), &base, scheme, &config)?;
            let path = export_palette(&session, format.into(), &out_dir)?;
            writeln!(out, "{}", path.display())?;
            Ok(())
        }
        Command::Estimate {
            length,
            width,
            height,
            coats,
        } => {
            let room = Room {
                length,
                width,
                height,
                coats,
            };
            let estimate = calculator::estimate(&room, &config.calculator)
                .context("please enter valid room dimensions")?;
            writeln!(out, "{estimate}")?;
            Ok(())
        }
        Command::Prefs => {
            let store = open_store(prefs.as_deref())?;
            let preferences = store
                .load()
                .with_context(|| format!("failed to read '{}'", store.path().display()))?;
            writeln!(out, "scheme: {}", preferences.scheme)?;
            writeln!(out, "file: {}", store.path().display())?;
            Ok(())
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<HubConfig> {
    match explicit {
        Some(path) => HubConfig::load_from_path(path)
            .with_context(|| format!("failed to load config '{}'", path.display())),
        None => match HubConfig::load() {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!(?err, "falling back to default configuration");
                Ok(HubConfig::default())
            }
        },
    }
}

fn open_store(explicit: Option<&Path>) -> Result<PreferenceStore> {
    match explicit {
        Some(path) => Ok(PreferenceStore::new(path)),
        None => PreferenceStore::locate().context("failed to locate preferences file"),
    }
}

fn open_session(
    prefs: Option<&Path>,
    base: &str,
    scheme: Option<Scheme>,
    config: &HubConfig,
) -> Result<DesignSession> {
    let store = open_store(prefs)?;
    let mut session = DesignSession::open(store, base, config.harmony.clone())
        .with_context(|| format!("'{base}' is not a valid hex color (expected #RRGGBB or #RGB)"))?;
    if let Some(scheme) = scheme {
        session.select_scheme(scheme);
    }
    Ok(session)
}

fn export_palette(session: &DesignSession, format: ExportFormat, out_dir: &Path) -> Result<PathBuf> {
    let now = Utc::now();
    let content = export::render(format, session.scheme(), session.palette(), now.date_naive())?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create export directory '{}'", out_dir.display()))?;
    let path = out_dir.join(export::export_file_name(session.scheme(), format, now));
    fs::write(&path, content)
        .with_context(|| format!("failed to write export to '{}'", path.display()))?;

    info!(
        target: "hub_cli::export",
        scheme = %session.scheme(),
        colors = session.palette().len(),
        path = %path.display(),
        "palette exported"
    );

    Ok(path)
}

fn write_palette<W: Write>(out: &mut W, session: &DesignSession) -> Result<()> {
    writeln!(
        out,
        "{} palette for {}",
        session.scheme().title(),
        session.base()
    )?;
    for swatch in session.palette() {
        writeln!(
            out,
            "  {:<11} {}  {:<18}  {}",
            swatch.label,
            swatch.hex,
            swatch.rgb_label(),
            swatch.contrast
        )?;
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
