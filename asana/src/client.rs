use crate::config::Credentials;
use crate::types::{DataEnvelope, Project, Task};
use http::StatusCode;
use reqwest::Url;

const PROJECT_OPT_FIELDS: &str = "name,due_on,archived,owner.name,notes,created_at";
const TASK_OPT_FIELDS: &str = "name,due_on,completed,assignee.name,created_at,notes";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP client error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Asana returned {status} for {endpoint}")]
    Status { status: StatusCode, endpoint: String },
}

/// Bearer-authenticated read-only client for the Asana REST API.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl Client {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        Client {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    /// All projects in the configured workspace.
    pub async fn workspace_projects(&self) -> Result<Vec<Project>, Error> {
        let mut url = self.endpoint_url("projects")?;
        url.query_pairs_mut()
            .append_pair("workspace", &self.credentials.workspace)
            .append_pair("opt_fields", PROJECT_OPT_FIELDS);

        self.fetch_collection(url).await
    }

    /// All tasks in a single project.
    pub async fn project_tasks(&self, project_gid: &str) -> Result<Vec<Task>, Error> {
        let mut url = self.endpoint_url(&format!("projects/{project_gid}/tasks"))?;
        url.query_pairs_mut()
            .append_pair("opt_fields", TASK_OPT_FIELDS);

        self.fetch_collection(url).await
    }

    fn endpoint_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| Error::InvalidUrl(e.to_string()))
    }

    async fn fetch_collection<T>(&self, url: Url) -> Result<Vec<T>, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let endpoint = url.path().to_string();

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.credentials.token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status(),
                endpoint,
            });
        }

        Ok(response.json::<DataEnvelope<T>>().await?.data)
    }
}
