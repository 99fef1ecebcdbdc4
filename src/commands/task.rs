//! HTTP Task API
//!
//! `fetch`-backed client for the REST task endpoints.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use super::TaskApi;
use crate::error::ApiError;
use crate::models::{CreateTaskArgs, Task, TaskId, UpdateTaskArgs};

/// REST client rooted at the task collection URL (e.g. `/api/tasks`)
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
    base_url: String,
}

impl HttpTaskApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.base_url
    }

    /// URL of a single task; the id is encoded as one path segment
    pub fn task_url(&self, id: &TaskId) -> String {
        format!(
            "{}/{}",
            self.base_url,
            utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC)
        )
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Any non-2xx status is a failure
fn check_status(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status { status: resp.status() })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        let resp = Request::get(self.collection_url())
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(resp)?).await
    }

    async fn create_task(&self, title: &str) -> Result<Task, ApiError> {
        let resp = Request::post(self.collection_url())
            .json(&CreateTaskArgs { title })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(resp)?).await
    }

    async fn update_task(&self, id: &TaskId, completed: bool) -> Result<Task, ApiError> {
        let resp = Request::put(&self.task_url(id))
            .json(&UpdateTaskArgs { completed })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        decode(check_status(resp)?).await
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        let resp = Request::delete(&self.task_url(id))
            .send()
            .await
            .map_err(transport)?;
        check_status(resp).map(|_| ())
    }
}
