use bytes::Bytes;
use reqwest::{multipart, Client, ClientBuilder, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::{
    ApiError, ApiResult, Credentials, Envelope, Message, MessageId, Project, ProjectId,
    ProjectPayload, TokenBody, UploadBody,
};
use crate::config::AppConfig;

#[derive(Debug)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &AppConfig) -> ApiResult<Self> {
        let mut user_agent = env!("CARGO_PKG_NAME").to_string();
        user_agent.push('/');
        user_agent.push_str(env!("CARGO_PKG_VERSION"));

        let http = ClientBuilder::default()
            .user_agent(user_agent)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}{path}", self.base_url));

        if token.is_empty() {
            builder
        } else {
            builder.bearer_auth(token)
        }
    }

    async fn send(&self, builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, "backend unreachable");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(url = %response.url(), %status, "backend call succeeded");
            return Ok(response);
        }

        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status.as_u16(), &body);
        tracing::warn!(%url, %status, error = %err, "backend call failed");

        Err(err)
    }

    async fn json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let body = self
            .send(builder)
            .await?
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: &B,
    ) -> ApiResult<()> {
        self.send(self.request(method, path, token).json(body))
            .await
            .map(|_| ())
    }

    pub async fn login(&self, credentials: &Credentials) -> ApiResult<String> {
        let body: TokenBody = self
            .json(self.request(Method::POST, "/auth/login", "").json(credentials))
            .await?;

        body.into_token().ok_or(ApiError::MissingToken)
    }

    pub async fn list_projects(&self, token: &str) -> ApiResult<Vec<Project>> {
        let body: Envelope<Vec<Project>> = self
            .json(self.request(Method::GET, "/projects", token))
            .await?;

        Ok(body.into_inner())
    }

    pub async fn find_project(&self, token: &str, id: &ProjectId) -> ApiResult<Project> {
        let path = format!("/projects/find/{}", id.as_ref());
        let body: Envelope<Project> = self.json(self.request(Method::GET, &path, token)).await?;

        Ok(body.into_inner())
    }

    pub async fn create_project(&self, token: &str, payload: &ProjectPayload) -> ApiResult<()> {
        self.send_json(Method::POST, "/projects", token, payload)
            .await
    }

    pub async fn update_project(
        &self,
        token: &str,
        id: &ProjectId,
        payload: &ProjectPayload,
    ) -> ApiResult<()> {
        let path = format!("/projects/{}", id.as_ref());
        self.send_json(Method::PUT, &path, token, payload).await
    }

    pub async fn delete_project(&self, token: &str, id: &ProjectId) -> ApiResult<()> {
        let path = format!("/projects/{}", id.as_ref());
        self.send(self.request(Method::DELETE, &path, token))
            .await
            .map(|_| ())
    }

    pub async fn list_messages(&self, token: &str) -> ApiResult<Vec<Message>> {
        let body: Envelope<Vec<Message>> = self
            .json(self.request(Method::GET, "/messages", token))
            .await?;

        Ok(body.into_inner())
    }

    pub async fn mark_message_read(&self, token: &str, id: &MessageId) -> ApiResult<()> {
        let path = format!("/messages/{}", id.as_ref());
        self.send(self.request(Method::PUT, &path, token))
            .await
            .map(|_| ())
    }

    pub async fn upload_image(
        &self,
        token: &str,
        file_name: String,
        content_type: &str,
        data: Bytes,
    ) -> ApiResult<String> {
        let length = data.len() as u64;
        let part = multipart::Part::stream_with_length(data, length)
            .file_name(file_name)
            .mime_str(content_type)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let form = multipart::Form::new().part("image", part);

        let body: UploadBody = self
            .json(self.request(Method::POST, "/upload/image", token).multipart(form))
            .await?;

        body.into_url().ok_or(ApiError::MissingUrl)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
