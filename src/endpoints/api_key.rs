//! API-key endpoints

use super::{join, path_id};
use crate::auth::Credential;
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, RequestDescriptor, Transport};
use crate::types::{JsonValue, StringMap};
use tracing::info;

/// Endpoints reachable with a service-account API key
#[derive(Debug)]
pub struct ApiKeyApi<T = HttpClient> {
    client: ApiClient<T>,
    prefix: String,
}

impl ApiKeyApi<HttpClient> {
    /// Connect with an API key
    pub fn connect(config: &ClientConfig, api_key: impl Into<String>) -> Result<Self> {
        let client = ApiClient::from_config(config, Credential::api_key(api_key))?;
        Ok(Self::new(client, config.api_prefix.clone()))
    }
}

impl<T: Transport> ApiKeyApi<T> {
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

    /// `GET /auditevents`: audit events matching `params`, all pages merged
    pub async fn list_audit_events(&self, params: StringMap) -> Result<JsonValue> {
        self.client
            .fetch_all(&RequestDescriptor::get(join(&self.prefix, "auditevents")).params(params))
            .await
    }

    /// `GET /users/{userId}`
    pub async fn get_user(&self, user_id: &str) -> Result<JsonValue> {
        let user_id = path_id("user_id", user_id)?;
        self.client
            .fetch_all(&RequestDescriptor::get(join(
                &self.prefix,
                &format!("users/{user_id}"),
            )))
            .await
    }

    /// `POST /users/deprecatepassword?userId=…`: force a password change
    pub async fn deprecate_password(&self, user_id: &str) -> Result<()> {
        let user_id = path_id("user_id", user_id)?;
        let request = RequestDescriptor::post(join(&self.prefix, "users/deprecatepassword"))
            .query("userId", user_id)
            .expect_status(&[204]);

        self.client.fetch_all(&request).await?;
        info!("Deprecated password of user {user_id}");
        Ok(())
    }

    /// `DELETE /projects/{projectId}`
    pub async fn delete_project(&self, project_id: &str) -> Result<()> {
        let project_id = path_id("project_id", project_id)?;
        let request = RequestDescriptor::delete(join(
            &self.prefix,
            &format!("projects/{project_id}"),
        ))
        .expect_status(&[204]);

        self.client.fetch_all(&request).await?;
        info!("Deleted project {project_id}");
        Ok(())
    }
}
