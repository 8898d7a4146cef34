//! CLI runner - executes commands

use crate::auth::{
    load_api_key_credentials, load_basic_credentials, load_credentials, Credential,
};
use crate::cli::commands::{Cli, Commands};
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::endpoints::{ApiKeyApi, ManagementApi};
use crate::error::{Error, Result};
use crate::http::RequestDescriptor;
use crate::types::LogLevel;
use serde_json::{json, Value};
use std::collections::HashMap;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve the effective configuration: file (if any), then flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(url) = &self.cli.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(max) = self.cli.max_pages {
            config.max_pages = Some(max);
        }
        if self.cli.no_page_limit {
            config.max_pages = None;
        }
        if self.cli.verbose {
            config.logging.level = LogLevel::Debug;
        }

        if config.base_url.is_empty() {
            return Err(Error::config(
                "No API URL given (use --base-url or base_url in the config file)",
            ));
        }
        config.validate()?;
        Ok(config)
    }

    /// Run the CLI command and print its result
    pub async fn run(&self, config: &ClientConfig) -> Result<()> {
        let value = self.execute(config).await?;
        let out = if self.cli.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        println!("{out}");
        Ok(())
    }

    /// Execute the CLI command, returning its JSON result
    pub async fn execute(&self, config: &ClientConfig) -> Result<Value> {
        info!("Using {} as base URL", config.base_url);

        match &self.cli.command {
            Commands::Users => self.management(config)?.list_users().await,
            Commands::User { user_id } => self.management(config)?.get_user(user_id).await,
            Commands::Organisations => self.management(config)?.list_organisations().await,
            Commands::CreateApiKey { organisation_id } => {
                self.management(config)?
                    .create_temporary_api_key(organisation_id)
                    .await
            }
            Commands::AuditEvents { params } => {
                self.api_key(config)?
                    .list_audit_events(to_map(params))
                    .await
            }
            Commands::DeprecatePassword { user_id } => {
                self.api_key(config)?.deprecate_password(user_id).await?;
                Ok(json!({"deprecated": user_id}))
            }
            Commands::DeleteProject { project_id } => {
                self.api_key(config)?.delete_project(project_id).await?;
                Ok(json!({"deleted": project_id}))
            }
            Commands::Get { path, params } => {
                let client = ApiClient::from_config(config, self.any_credential()?)?;
                let (value, report) = client
                    .fetch_all_with_report(&RequestDescriptor::get(path).params(to_map(params)))
                    .await?;
                info!("{} page(s), {} item(s)", report.pages, report.items);
                Ok(value)
            }
        }
    }

    fn management(&self, config: &ClientConfig) -> Result<ManagementApi> {
        let credential = load_basic_credentials(&self.cli.credentials)?;
        ManagementApi::from_config(config, credential)
    }

    /// `--api-key` if given, otherwise the file's `api_key` field
    fn api_key(&self, config: &ClientConfig) -> Result<ApiKeyApi> {
        let credential = match &self.cli.api_key {
            Some(key) => Credential::api_key(key.clone()),
            None => load_api_key_credentials(&self.cli.credentials)?,
        };
        let client = ApiClient::from_config(config, credential)?;
        Ok(ApiKeyApi::new(client, config.api_prefix.clone()))
    }

    /// `--api-key` if given, otherwise whatever the credentials file holds
    fn any_credential(&self) -> Result<Credential> {
        match &self.cli.api_key {
            Some(key) => Ok(Credential::api_key(key.clone())),
            None => load_credentials(&self.cli.credentials),
        }
    }
}

fn to_map(params: &[(String, String)]) -> HashMap<String, String> {
    params.iter().cloned().collect()
}
