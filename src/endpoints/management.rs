//! Management API (HTTP Basic)

use super::{any_2xx, join, path_id};
use crate::auth::Credential;
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor, Transport};
use crate::types::JsonValue;
use tracing::debug;

/// Management endpoints, authenticated as a management UI user
#[derive(Debug)]
pub struct ManagementApi<T = HttpClient> {
    client: ApiClient<T>,
    prefix: String,
}

impl ManagementApi<HttpClient> {
    /// Connect with a username/password pair
    pub fn connect(
        config: &ClientConfig,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        Self::from_config(config, Credential::basic(username, password))
    }

    /// Connect with a loaded credential
    pub fn from_config(config: &ClientConfig, credential: Credential) -> Result<Self> {
        let client = ApiClient::from_config(config, credential)?;
        Ok(Self::new(client, config.management_prefix.clone()))
    }
}

impl<T: Transport> ManagementApi<T> {
    /// Wrap a client; `prefix` is prepended to every resource path
    pub fn new(client: ApiClient<T>, prefix: impl Into<String>) -> Self {
        Self {
            client,
            prefix: prefix.into(),
        }
    }

    /// Underlying client
    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// `GET /users`: every user, all pages merged
    pub async fn list_users(&self) -> Result<JsonValue> {
        self.client
            .fetch_all(&RequestDescriptor::get(join(&self.prefix, "users")))
            .await
    }

    /// `GET /users/{userId}`: full data of one user
    pub async fn get_user(&self, user_id: &str) -> Result<JsonValue> {
        let user_id = path_id("user_id", user_id)?;
        self.client
            .fetch_all(&RequestDescriptor::get(join(
                &self.prefix,
                &format!("users/{user_id}"),
            )))
            .await
    }

    /// `GET /organisations`: every organisation, all pages merged
    pub async fn list_organisations(&self) -> Result<JsonValue> {
        self.client
            .fetch_all(&RequestDescriptor::get(join(&self.prefix, "organisations")))
            .await
    }

    /// `POST /organisations/{organisationId}/apikeys`: short-lived admin key.
    ///
    /// The server must have the super-API-key feature enabled.
    pub async fn create_temporary_api_key(&self, organisation_id: &str) -> Result<JsonValue> {
        let organisation_id = path_id("organisation_id", organisation_id)?;
        let request = RequestDescriptor::post(join(
            &self.prefix,
            &format!("organisations/{organisation_id}/apikeys"),
        ))
        .expect_status(&any_2xx());

        let key = self.client.fetch_all(&request).await?;
        debug!("Created temporary API key for organisation {organisation_id}");
        Ok(key)
    }
}
