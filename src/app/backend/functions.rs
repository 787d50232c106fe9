//! Server functions proxying the browser's calls to the backend. The session
//! token lives in the browser, so each call passes it explicitly.

use leptos::server_fn::codec::Json;
use leptos::*;

use super::{Credentials, Message, MessageId, Project, ProjectId, ProjectPayload, WireError};

#[cfg(feature = "ssr")]
use std::sync::Arc;

#[cfg(feature = "ssr")]
use super::{ApiError, BackendClient, CallError};

#[cfg(feature = "ssr")]
fn backend() -> Result<Arc<BackendClient>, CallError> {
    use_context::<Arc<BackendClient>>()
        .ok_or_else(|| ServerFnError::ServerError("backend client is not configured".to_string()))
}

#[cfg(feature = "ssr")]
fn wrap(err: ApiError) -> CallError {
    ServerFnError::WrappedServerError(WireError(err))
}

#[server]
pub async fn login(credentials: Credentials) -> Result<String, ServerFnError<WireError>> {
    backend()?.login(&credentials).await.map_err(wrap)
}

#[server]
pub async fn list_projects(token: String) -> Result<Vec<Project>, ServerFnError<WireError>> {
    backend()?.list_projects(&token).await.map_err(wrap)
}

#[server]
pub async fn find_project(token: String, id: ProjectId) -> Result<Project, ServerFnError<WireError>> {
    backend()?.find_project(&token, &id).await.map_err(wrap)
}

#[server(input = Json)]
pub async fn create_project(token: String, payload: ProjectPayload) -> Result<(), ServerFnError<WireError>> {
    backend()?
        .create_project(&token, &payload)
        .await
        .map_err(wrap)
}

#[server(input = Json)]
pub async fn update_project(
    token: String,
    id: ProjectId,
    payload: ProjectPayload,
) -> Result<(), ServerFnError<WireError>> {
    backend()?
        .update_project(&token, &id, &payload)
        .await
        .map_err(wrap)
}

#[server]
pub async fn delete_project(token: String, id: ProjectId) -> Result<(), ServerFnError<WireError>> {
    backend()?.delete_project(&token, &id).await.map_err(wrap)
}

#[server]
pub async fn list_messages(token: String) -> Result<Vec<Message>, ServerFnError<WireError>> {
    backend()?.list_messages(&token).await.map_err(wrap)
}

#[server]
pub async fn mark_message_read(token: String, id: MessageId) -> Result<(), ServerFnError<WireError>> {
    backend()?.mark_message_read(&token, &id).await.map_err(wrap)
}

#[server(input = Json)]
pub async fn upload_image(
    token: String,
    file_name: String,
    content_type: String,
    data: Vec<u8>,
) -> Result<String, ServerFnError<WireError>> {
    backend()?
        .upload_image(&token, file_name, &content_type, data.into())
        .await
        .map_err(wrap)
}
