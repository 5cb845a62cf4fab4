//! APS CLI - Admin compliance submission
//!
//! Simple CLI for submitting site-admin compliance to the APS API.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::{Map, Value};
use std::fs;

use api::{ApsClient, SaveOutcome};
use config::Config;

#[derive(Parser)]
#[command(name = "aps")]
#[command(about = "APS CLI - Admin compliance submission", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a server and store its URL
    Connect {
        /// Base URL of the APS API
        url: String,
    },

    /// Check the configured server
    Health,

    /// Admin compliance operations
    Compliance {
        #[command(subcommand)]
        action: ComplianceAction,
    },

    /// Show or update configuration
    Config {
        /// Character used when --character-id is omitted
        #[arg(long)]
        default_character_id: Option<i64>,
    },
}

#[derive(Subcommand)]
enum ComplianceAction {
    /// Submit the site-admin compliance form
    Save {
        /// Character ID (defaults to the configured one)
        #[arg(short, long)]
        character_id: Option<i64>,
        /// Also save the organization as preferred
        #[arg(long)]
        preferred_org: bool,
        /// Form field as key=value (repeatable)
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
        /// Read form fields from a JSON object file
        #[arg(long)]
        file: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Connect { url } => cmd_connect(url).await,
        Commands::Health => cmd_health().await,
        Commands::Compliance { action } => cmd_compliance(action).await,
        Commands::Config {
            default_character_id,
        } => cmd_config(default_character_id),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_connect(url: String) -> Result<()> {
    let mut config = Config::load()?;
    config.set_base_url(&url);

    let client = ApsClient::new(&config.base_url);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach APS API at {}", config.base_url);
        }
    }

    config.save()?;
    println!("{} Server saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let client = ApsClient::new(&config.base_url);

    if client.health().await.unwrap_or(false) {
        println!("{} {} is up", "✓".green(), config.base_url.cyan());
        Ok(())
    } else {
        bail!("APS API at {} is not responding", config.base_url);
    }
}

async fn cmd_compliance(action: ComplianceAction) -> Result<()> {
    let config = Config::load()?;
    let client = ApsClient::new(&config.base_url);

    match action {
        ComplianceAction::Save {
            character_id,
            preferred_org,
            fields,
            file,
        } => {
            let character_id = config
                .character_id(character_id)
                .context("No character specified. Use --character-id or set a default with 'aps config'.")?;

            let file_fields = match file {
                Some(path) => {
                    let content = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read file: {}", path))?;
                    Some(parse_payload_file(&content)?)
                }
                None => None,
            };

            let payload = build_payload(character_id, preferred_org, file_fields, fields);

            match client.save_admin_compliance(&payload).await? {
                SaveOutcome::Saved { organization_id } => {
                    println!(
                        "{} Compliance saved for character {} (organization {})",
                        "✓".green(),
                        character_id.to_string().cyan(),
                        organization_id.to_string().cyan()
                    );
                    if preferred_org {
                        println!("  {}", "Preferred organization updated".dimmed());
                    }
                }
                SaveOutcome::Rejected(errors) => {
                    println!("{}", "Form rejected:".red().bold());
                    for error in &errors {
                        println!("  {} {}", error.field.yellow(), error.message);
                    }
                    bail!("{} validation error(s)", errors.len());
                }
            }
        }
    }

    Ok(())
}

fn cmd_config(default_character_id: Option<i64>) -> Result<()> {
    let mut config = Config::load()?;

    if let Some(id) = default_character_id {
        config.default_character_id = Some(id);
        config.save()?;
        println!("{} Default character set to {}", "✓".green(), id);
    }

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  Default Character: {}",
        config
            .default_character_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "None".to_string())
            .cyan()
    );

    Ok(())
}

/// Parse a `key=value` form field
fn parse_field(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

fn parse_payload_file(content: &str) -> Result<Map<String, Value>> {
    match serde_json::from_str::<Value>(content).context("Payload file is not valid JSON")? {
        Value::Object(map) => Ok(map),
        _ => bail!("Payload file must contain a JSON object"),
    }
}

/// File fields first, then --field values, then the request-level keys
fn build_payload(
    character_id: i64,
    preferred_org: bool,
    file_fields: Option<Map<String, Value>>,
    fields: Vec<(String, String)>,
) -> Map<String, Value> {
    let mut payload = file_fields.unwrap_or_default();

    for (key, value) in fields {
        payload.insert(key, Value::String(value));
    }

    payload.insert("character_id".to_string(), Value::from(character_id));
    payload.insert(
        "is_preferred_org_save".to_string(),
        Value::Bool(preferred_org),
    );

    payload
}
