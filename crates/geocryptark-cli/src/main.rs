//! geocryptark: location-gated envelope encryption CLI
//!
//! Commands:
//!   encrypt --salt S --coord LAT,LNG [--coord ...]  - encrypt stdin or --input for a set of locations
//!   hash --lat LAT --lng LNG --salt S                - print the geo-hash of one location
//!   validate --lat LAT --lng LNG                     - range-check a coordinate pair
//!   config show                                      - display the active configuration

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use secrecy::{ExposeSecret, SecretString};
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;

use geocryptark_core::{GeoConfig, LogFormat};
use geocryptark_crypto::{validate_coordinates, GeoCoordinate, GeoCrypt, KdfParams};

// ── CLI structure ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "geocryptark",
    version,
    about = "Location-gated multi-recipient encryption",
    long_about = "geocryptark: encrypt data so that knowledge of any one of a set of locations, \
                  plus a shared salt and password, unlocks it"
)]
struct Cli {
    /// Path to config.toml
    #[arg(
        long,
        short = 'c',
        env = "GEOCRYPTARK_CONFIG",
        default_value = "/etc/geocryptark/config.toml"
    )]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long, env = "GEOCRYPTARK_LOG")]
    log: Option<String>,

    /// Log format (text, json); overrides the config file
    #[arg(long, env = "GEOCRYPTARK_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encrypt a plaintext for one or more locations
    ///
    /// Prints the result JSON ({salt, data, iv, keys}) to stdout or --output.
    Encrypt {
        /// Shared salt (not secret; use a fresh one per plaintext)
        #[arg(long, short = 's')]
        salt: String,
        /// Recipient location as LAT,LNG (repeatable, order is preserved)
        #[arg(
            long = "coord",
            value_name = "LAT,LNG",
            required = true,
            allow_hyphen_values = true,
            value_parser = parse_coordinate
        )]
        coords: Vec<GeoCoordinate>,
        /// Plaintext file (default: stdin)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
        /// Output file for the result JSON (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
        /// Common password (prompted for when unset)
        #[arg(long, env = "GEOCRYPTARK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Print the geo-hash of a location
    Hash {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        #[arg(long, short = 's')]
        salt: String,
        /// Common password (prompted for when unset)
        #[arg(long, env = "GEOCRYPTARK_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Check that a coordinate pair is in range
    Validate {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the active configuration (merged defaults + config file)
    Show,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GeoConfig::load(&cli.config)
        .with_context(|| format!("loading config: {}", cli.config.display()))?;

    let level = cli.log.clone().unwrap_or_else(|| config.logging.level.clone());
    let format = cli.log_format.unwrap_or(config.logging.format);
    init_logging(&level, format);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "geocryptark starting"
    );

    match cli.command {
        Commands::Encrypt {
            salt,
            coords,
            input,
            output,
            password,
        } => {
            let password = resolve_password(password)?;
            cmd_encrypt(&config, &salt, &coords, input.as_deref(), output.as_deref(), &password)
                .await
        }
        Commands::Hash {
            lat,
            lng,
            salt,
            password,
        } => {
            let password = resolve_password(password)?;
            cmd_hash(&config, lat, lng, &salt, &password).await
        }
        Commands::Validate { lat, lng } => cmd_validate(lat, lng),
        Commands::Config {
            action: ConfigAction::Show,
        } => cmd_config_show(&config, &cli.config),
    }
}

fn init_logging(level: &str, format: LogFormat) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries command output
    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn engine_from_config(config: &GeoConfig) -> GeoCrypt {
    GeoCrypt::default().with_kdf_params(KdfParams {
        iterations: config.crypto.pbkdf2_iterations,
    })
}

/// Parse `LAT,LNG` into a coordinate. Range is checked by the engine.
fn parse_coordinate(s: &str) -> Result<GeoCoordinate, String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got {s:?}"))?;
    let lat: f64 = lat
        .trim()
        .parse()
        .map_err(|e| format!("invalid latitude {lat:?}: {e}"))?;
    let lng: f64 = lng
        .trim()
        .parse()
        .map_err(|e| format!("invalid longitude {lng:?}: {e}"))?;
    Ok(GeoCoordinate::new(lat, lng))
}

fn resolve_password(flag: Option<String>) -> Result<SecretString> {
    match flag {
        Some(password) => Ok(SecretString::from(password)),
        None => {
            let password = rpassword::prompt_password("Common password: ")
                .context("reading password from terminal")?;
            Ok(SecretString::from(password))
        }
    }
}

async fn read_plaintext(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading plaintext: {}", path.display())),
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("reading plaintext from stdin")?;
            Ok(buf)
        }
    }
}

async fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => tokio::fs::write(path, format!("{content}\n"))
            .await
            .with_context(|| format!("writing result: {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}

// ── `geocryptark encrypt` ─────────────────────────────────────────────────────

async fn cmd_encrypt(
    config: &GeoConfig,
    salt: &str,
    coords: &[GeoCoordinate],
    input: Option<&Path>,
    output: Option<&Path>,
    password: &SecretString,
) -> Result<()> {
    let plaintext = read_plaintext(input).await?;
    let engine = engine_from_config(config);

    let result = engine
        .multi_key_encrypt(&plaintext, coords, salt, password.expose_secret())
        .await
        .context("multi-key encryption failed")?;

    let rendered = result.to_json_pretty().context("serializing result")?;
    write_output(output, &rendered).await?;

    info!(recipients = result.keys.len(), "encrypted");
    Ok(())
}

// ── `geocryptark hash` ────────────────────────────────────────────────────────

async fn cmd_hash(
    config: &GeoConfig,
    lat: f64,
    lng: f64,
    salt: &str,
    password: &SecretString,
) -> Result<()> {
    let engine = engine_from_config(config);
    let hash = engine
        .generate_geo_hash(lat, lng, salt, password.expose_secret())
        .await?;
    println!("{hash}");
    Ok(())
}

// ── `geocryptark validate` ────────────────────────────────────────────────────

fn cmd_validate(lat: f64, lng: f64) -> Result<()> {
    if validate_coordinates(lat, lng) {
        println!("valid");
        Ok(())
    } else {
        println!("invalid");
        anyhow::bail!(
            "lat={lat}, lng={lng} is out of range (latitude -90..=90, longitude -180..=180)"
        )
    }
}

// ── `geocryptark config show` ─────────────────────────────────────────────────

fn cmd_config_show(config: &GeoConfig, config_path: &Path) -> Result<()> {
    if config_path.exists() {
        println!("# Configuration from: {}", config_path.display());
    } else {
        println!(
            "# Configuration: defaults (no file at {})",
            config_path.display()
        );
    }
    println!();
    let rendered = config.to_toml().context("serializing config to TOML")?;
    print!("{rendered}");
    Ok(())
}
