//! HTTP Repository Implementation
//!
//! reqwest-backed `TodoRepository` talking JSON to `{base_url}/todos`.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::traits::TodoRepository;
use crate::config::ApiConfig;
use crate::domain::{NewTodo, RepoError, RepoResult, Todo, TodoPatch};

/// Remote item store over HTTP
#[derive(Clone)]
pub struct HttpTodoRepository {
    client: Client,
    config: ApiConfig,
}

impl HttpTodoRepository {
    pub fn new(config: ApiConfig) -> RepoResult<Self> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(config.request_timeout());
        }
        let client = builder
            .build()
            .map_err(|e| RepoError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Send a request and reject non-2xx responses
    async fn send(request: RequestBuilder, operation: &str) -> RepoResult<Response> {
        let response = request.send().await.map_err(|e| {
            warn!("{} failed: {}", operation, e);
            RepoError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned HTTP {}", operation, status);
            return Err(RepoError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> RepoResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| RepoError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl TodoRepository for HttpTodoRepository {
    async fn list(&self, user_id: u32) -> RepoResult<Vec<Todo>> {
        let url = self.config.todos_url();
        debug!("GET {} userId={}", url, user_id);

        let request = self.client.get(&url).query(&[("userId", user_id)]);
        let response = Self::send(request, "list todos").await?;
        Self::decode(response).await
    }

    async fn create(&self, todo: &NewTodo) -> RepoResult<Todo> {
        let url = self.config.todos_url();
        debug!("POST {} title={:?}", url, todo.title);

        let response = Self::send(self.client.post(&url).json(todo), "create todo").await?;
        Self::decode(response).await
    }

    async fn update(&self, id: u32, patch: &TodoPatch) -> RepoResult<Todo> {
        let url = self.config.todo_url(id);
        debug!("PATCH {} {:?}", url, patch);

        let response = Self::send(self.client.patch(&url).json(patch), "update todo").await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: u32) -> RepoResult<()> {
        let url = self.config.todo_url(id);
        debug!("DELETE {}", url);

        // Body is ignored, some backends answer with `1`, others with nothing
        Self::send(self.client.delete(&url), "delete todo").await?;
        Ok(())
    }
}
