use crate::client::{ClientError, ClientResult};
use crate::models::{DeleteMessage, Project};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the taskflow-server REST API
pub struct ApiClient {
    pub base_url: String,
    client: ReqwestClient,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:5000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Execute a request, mapping non-2xx bodies to `ClientError::Api`
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await.map_err(ClientError::from_reqwest)?;
        let status = response.status();
        let body: Value = response.json().await.map_err(ClientError::from_reqwest)?;

        if !status.is_success() {
            return Err(Self::error_from_body(status, &body));
        }

        serde_json::from_value(body).map_err(ClientError::from_json)
    }

    #[track_caller]
    fn error_from_body(status: StatusCode, body: &Value) -> ClientError {
        let (code, message) = match body.get("error") {
            Some(error) => (
                error
                    .get("code")
                    .and_then(|v| v.as_str())
                    .unwrap_or("UNKNOWN")
                    .to_string(),
                error
                    .get("message")
                    .and_then(|v| v.as_str())
                    .unwrap_or("Unknown error")
                    .to_string(),
            ),
            None => (status.as_u16().to_string(), "Unknown error".to_string()),
        };

        ClientError::Api {
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    // =========================================================================
    // Project Operations
    // =========================================================================

    /// List all projects, newest first
    pub async fn list_projects(&self) -> ClientResult<Vec<Project>> {
        let req = self.request(Method::GET, "/api/projects");
        self.execute(req).await
    }

    /// Create a new project
    pub async fn create_project(
        &self,
        name: &str,
        description: Option<&str>,
    ) -> ClientResult<Project> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }

        let body = CreateRequest { name, description };
        let req = self.request(Method::POST, "/api/projects").json(&body);
        self.execute(req).await
    }

    /// Update a project. An omitted field keeps its stored value.
    pub async fn update_project(
        &self,
        id: &str,
        name: Option<&str>,
        description: Option<&str>,
    ) -> ClientResult<Project> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }

        let body = UpdateRequest { name, description };
        let req = self
            .request(Method::PUT, &format!("/api/projects/{}", id))
            .json(&body);
        self.execute(req).await
    }

    /// Delete a project, returning the server's confirmation message
    pub async fn delete_project(&self, id: &str) -> ClientResult<String> {
        let req = self.request(Method::DELETE, &format!("/api/projects/{}", id));
        let confirmation: DeleteMessage = self.execute(req).await?;
        Ok(confirmation.message)
    }
}
