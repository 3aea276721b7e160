//! Interactive terminal client for shortening URLs.
//!
//! Collects a long URL, an optional custom alias and an expiration choice,
//! submits the request to the shortening API and renders the short link,
//! with copy-to-clipboard and QR export on top.
//!
//! # Usage
//!
//! ```bash
//! # Interactive form
//! cargo run
//!
//! # One-shot from flags
//! cargo run -- shorten --url https://example.com/very/long/path --alias mylink
//!
//! # Expiration: a preset or an exact timestamp
//! cargo run -- shorten --url https://example.com --expires-in 1week
//! cargo run -- shorten --url https://example.com --expires-at "2026-03-01T18:30"
//!
//! # Copy the result and save the QR code
//! cargo run -- shorten --url https://example.com --copy --qr-out qr.png
//!
//! # List expiration presets
//! cargo run -- presets
//! ```
//!
//! # Environment Variables
//!
//! - `API_BASE_URL` (required): Base URL of the shortening API
//! - `RUST_LOG` / `LOG_FORMAT`: Logging configuration
//!
//! # Features
//!
//! - **Interactive Prompts**: Guided form with inline validation
//! - **Expiration Control**: Preset lifetimes or a custom date and time
//! - **Clipboard Integration**: Copies the short URL on request
//! - **QR Export**: Saves the server-provided QR code as a PNG
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use shorten_cli::api::ApiClient;
use shorten_cli::clipboard::{ClipboardProvider, NullClipboard, SystemClipboard};
use shorten_cli::config::{self, Config};
use shorten_cli::error::GENERIC_ERROR_MESSAGE;
use shorten_cli::expiration::{self, ExpirationPreset};
use shorten_cli::form::ShortenForm;
use shorten_cli::qr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input, Select};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use url::Url;

/// Terminal client for the URL shortener.
#[derive(Parser)]
#[command(name = "shorten-cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the API base URL from the environment
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<Url>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Top-level commands. Without one, the interactive form runs.
#[derive(Subcommand)]
enum Commands {
    /// Shorten a URL without the interactive form
    Shorten(ShortenArgs),

    /// List the expiration presets
    Presets,

    /// Show the resolved configuration
    Config,
}

/// Flags for the one-shot `shorten` command.
#[derive(Args)]
struct ShortenArgs {
    /// The URL to shorten
    #[arg(short, long)]
    url: String,

    /// Custom alias for the short link (server-generated if omitted)
    #[arg(short, long)]
    alias: Option<String>,

    /// Expiration preset: 10min, 1hour, 1day or 1week
    #[arg(long, value_name = "PRESET", conflicts_with = "expires_at")]
    expires_in: Option<ExpirationPreset>,

    /// Expire at an exact time (RFC 3339, or local `YYYY-MM-DDTHH:MM`)
    #[arg(long, value_name = "DATETIME")]
    expires_at: Option<String>,

    /// Copy the short URL to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Write the QR code PNG to this path
    #[arg(long, value_name = "PATH")]
    qr_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match cli.base_url.as_ref() {
        Some(url) => {
            let config = Config::with_base_url(url.as_str());
            config.validate()?;
            config
        }
        None => config::load_from_env()?,
    };

    init_tracing(&config)?;
    config.print_summary();

    let client = ApiClient::new(config.api_base()?);

    match cli.command {
        Some(Commands::Shorten(args)) => run_shorten(args, &client).await?,
        Some(Commands::Presets) => print_presets(),
        Some(Commands::Config) => print_config(&config),
        None => run_interactive(&client).await?,
    }

    Ok(())
}

/// Initializes the tracing subscriber as configured.
///
/// Logs go to stderr so they never mix with the rendered results on stdout.
fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("invalid RUST_LOG directive '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}

/// Shortens a single URL from command-line flags.
async fn run_shorten(args: ShortenArgs, client: &ApiClient) -> Result<()> {
    let mut form = ShortenForm::new();
    form.set_original_url(args.url);

    if let Some(alias) = args.alias {
        form.set_custom_alias(alias);
    }

    if let Some(preset) = args.expires_in {
        form.select_preset(preset);
    }

    if let Some(raw) = args.expires_at.as_deref() {
        let expires_at = expiration::parse_expires_at(raw)?;
        form.set_custom_expires_at(expires_at);
    }

    if !form.submit(client).await {
        render_error(&form);
        std::process::exit(1);
    }

    render_result(&form);

    if args.copy {
        copy_to_clipboard(&mut form);
    }

    if let Some(path) = args.qr_out {
        save_qr(&form, &path)?;
    }

    println!();
    Ok(())
}

/// Runs the interactive shortening form, looping until the user stops.
async fn run_interactive(client: &ApiClient) -> Result<()> {
    println!("{}", "🔗 URL Shortener".bright_blue().bold());
    println!();

    let mut clipboard = system_clipboard_or_null();
    let mut form = ShortenForm::new();

    loop {
        prompt_fields(&mut form)?;

        if form.submit(client).await {
            render_result(&form);
            offer_copy(&mut form, clipboard.as_mut())?;
            offer_qr_save(&form)?;
        } else {
            render_error(&form);
        }

        println!();
        let again = Confirm::new()
            .with_prompt("Shorten another URL?")
            .default(false)
            .interact()?;

        if !again {
            break;
        }
        println!();
    }

    Ok(())
}

/// Prompts for the form fields, editing the current values in place.
///
/// Previous answers are kept as initial text, so re-running the form after
/// an error only requires fixing the offending field.
fn prompt_fields(form: &mut ShortenForm) -> Result<()> {
    let url: String = Input::new()
        .with_prompt("Long URL")
        .with_initial_text(form.original_url())
        .validate_with(|input: &String| -> Result<(), &str> {
            if Url::parse(input).is_ok() {
                Ok(())
            } else {
                Err("Invalid URL format")
            }
        })
        .interact_text()?;
    form.set_original_url(url);

    let alias: String = Input::new()
        .with_prompt("Custom alias (empty for a generated code)")
        .with_initial_text(form.custom_alias())
        .allow_empty(true)
        .interact_text()?;
    form.set_custom_alias(alias);

    prompt_expiration(form)?;

    Ok(())
}

/// Prompts for expiration: one of the presets or a custom timestamp.
fn prompt_expiration(form: &mut ShortenForm) -> Result<()> {
    let mut items: Vec<String> = ExpirationPreset::ALL
        .iter()
        .map(|preset| preset.label().to_string())
        .collect();
    items.push("Custom date and time".to_string());

    let default_index = match form.preset() {
        Some(preset) => ExpirationPreset::ALL
            .iter()
            .position(|p| *p == preset)
            .unwrap_or(0),
        None => items.len() - 1,
    };

    let selection = Select::new()
        .with_prompt("Expires in")
        .items(&items)
        .default(default_index)
        .interact()?;

    match ExpirationPreset::ALL.get(selection) {
        Some(preset) => form.select_preset(*preset),
        None => {
            let raw: String = Input::new()
                .with_prompt("Expiration date and time (e.g. 2026-03-01T18:30)")
                .validate_with(|input: &String| {
                    expiration::parse_expires_at(input).map(|_| ())
                })
                .interact_text()?;

            // The validator above only lets parseable input through
            let expires_at = expiration::parse_expires_at(&raw)?;
            form.set_custom_expires_at(expires_at);
        }
    }

    Ok(())
}

/// Renders the short link from the last successful submission.
fn render_result(form: &ShortenForm) {
    let Some(short_url) = form.short_url() else {
        return;
    };

    println!();
    println!("{}", "✅ Link shortened!".green().bold());
    println!();
    println!("  Short URL: {}", short_url.bright_yellow().bold());

    if form.qr_code_base64().is_some() {
        println!("  QR code:   {}", "included in the response".bright_black());
    }
}

/// Renders the error message for the last submission inline, in red.
fn render_error(form: &ShortenForm) {
    let message = form.error().unwrap_or(GENERIC_ERROR_MESSAGE);

    println!();
    println!("{} {}", "❌".red(), message.red().bold());
}

/// Offers to copy the short URL, rendering the confirmation.
fn offer_copy(form: &mut ShortenForm, clipboard: &mut dyn ClipboardProvider) -> Result<()> {
    let wants_copy = Confirm::new()
        .with_prompt("Copy the short URL to the clipboard?")
        .default(true)
        .interact()?;

    if !wants_copy {
        return Ok(());
    }

    if form.copy_short_url(clipboard) {
        println!("{}", "📋 Copied!".green());
    } else {
        println!("{}", "⚠️  Could not copy to the clipboard".yellow());
    }

    Ok(())
}

/// Offers to save the QR code when the response includes one.
fn offer_qr_save(form: &ShortenForm) -> Result<()> {
    let Some(payload) = form.qr_code_base64() else {
        return Ok(());
    };

    let wants_save = Confirm::new()
        .with_prompt("Save the QR code as a PNG?")
        .default(false)
        .interact()?;

    if !wants_save {
        return Ok(());
    }

    let path: String = Input::new()
        .with_prompt("Output path")
        .with_initial_text("qr.png")
        .interact_text()?;

    qr::save_png(payload, Path::new(&path))?;
    println!("{} {}", "🖼️  QR code saved to".green(), path.bright_yellow());

    Ok(())
}

/// Copies the short URL using the system clipboard, if there is one.
fn copy_to_clipboard(form: &mut ShortenForm) {
    let mut clipboard = system_clipboard_or_null();

    if form.copy_short_url(clipboard.as_mut()) {
        println!("  {}", "📋 Copied to clipboard".green());
    } else {
        println!("  {}", "⚠️  Could not copy to the clipboard".yellow());
    }
}

/// Writes the QR code from the last response to `path`.
fn save_qr(form: &ShortenForm, path: &Path) -> Result<()> {
    match form.qr_code_base64() {
        Some(payload) => {
            qr::save_png(payload, path)?;
            println!(
                "  {} {}",
                "🖼️  QR code saved to".green(),
                path.display().to_string().bright_yellow()
            );
        }
        None => {
            println!("  {}", "⚠️  The response did not include a QR code".yellow());
        }
    }

    Ok(())
}

/// Connects the OS clipboard, falling back to the no-op provider.
fn system_clipboard_or_null() -> Box<dyn ClipboardProvider> {
    match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(err) => {
            tracing::warn!("{}", err);
            Box::new(NullClipboard::new())
        }
    }
}

/// Lists the expiration presets with their wire tokens.
fn print_presets() {
    println!("{}", "⏱️  Expiration Presets".bright_blue().bold());
    println!();
    println!(
        "  {:<10} {}",
        "Token".bright_white().bold(),
        "Meaning".bright_white().bold()
    );
    println!("  {}", "─".repeat(30).bright_black());

    for preset in ExpirationPreset::ALL {
        println!(
            "  {} {}",
            format!("{:<10}", preset.token()).cyan(),
            preset.label()
        );
    }

    println!();
    println!(
        "  Used when nothing is selected: {}",
        ExpirationPreset::FALLBACK.token().cyan()
    );
    println!();
}

/// Shows the resolved configuration.
fn print_config(config: &Config) {
    println!("{}", "⚙️  Configuration".bright_blue().bold());
    println!();
    println!("  API base URL: {}", config.api_base_url.cyan());
    println!("  Log level:    {}", config.log_level.cyan());
    println!("  Log format:   {}", config.log_format.cyan());
    println!();
}
