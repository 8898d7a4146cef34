//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Query the management REST API, following pagination to the end
#[derive(Parser, Debug)]
#[command(name = "mgmt-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API root URL (overrides the config file)
    #[arg(short, long, global = true)]
    pub base_url: Option<String>,

    /// Credentials file (JSON with username/password or api_key)
    #[arg(short, long, global = true, default_value = "secrets.json")]
    pub credentials: PathBuf,

    /// API key (takes precedence over the credentials file for API-key commands)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Maximum pages per listing
    #[arg(long, global = true, conflicts_with = "no_page_limit")]
    pub max_pages: Option<u32>,

    /// Follow cursors without a page cap
    #[arg(long, global = true)]
    pub no_page_limit: bool,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// List all users (management credentials)
    Users,

    /// Show one user (management credentials)
    User {
        /// User ID
        user_id: String,
    },

    /// List all organisations (management credentials)
    Organisations,

    /// Create a short-lived admin API key for an organisation (management credentials)
    CreateApiKey {
        /// Organisation ID
        organisation_id: String,
    },

    /// List audit events (API key)
    AuditEvents {
        /// Query parameter as key=value (repeatable)
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// Force a user to change their password (API key)
    DeprecatePassword {
        /// User ID
        user_id: String,
    },

    /// Delete a project (API key)
    DeleteProject {
        /// Project ID
        project_id: String,
    },

    /// GET any path and merge all pages
    Get {
        /// Resource path relative to the API root
        path: String,

        /// Query parameter as key=value (repeatable)
        #[arg(long = "param", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },
}

/// Parse a `key=value` pair
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
