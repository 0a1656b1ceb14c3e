//! Campaign project management

use tapverse_domain::{CreateProjectRequest, Project, UpdateProjectRequest};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Operations on `/projects`.
pub struct ProjectsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProjectsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every project.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<Project>, ApiError> {
        self.client.get("/projects").await
    }

    /// Fetch one project by id.
    #[instrument(skip(self), fields(project_id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Result<Project, ApiError> {
        let path = format!("/projects/{}", encode(id));
        self.client.get(&path).await
    }

    /// Create a project under a client account.
    #[instrument(skip(self, request), fields(client_id = %request.client_id))]
    pub async fn create(&self, request: &CreateProjectRequest) -> Result<Project, ApiError> {
        let project: Project = self.client.post("/projects", request).await?;
        debug!(project_id = %project.id, "project created");
        Ok(project)
    }

    /// Update fields on a project.
    #[instrument(skip(self, request), fields(project_id = %id))]
    pub async fn update(&self, id: &str, request: &UpdateProjectRequest) -> Result<Project, ApiError> {
        let path = format!("/projects/{}", encode(id));
        self.client.put(&path, request).await
    }

    /// Delete a project.
    #[instrument(skip(self), fields(project_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/projects/{}", encode(id));
        self.client.delete::<serde_json::Value>(&path).await?;
        debug!(project_id = %id, "project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tapverse_domain::{SessionData, SessionToken, UpdateProjectRequest};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::ApiClient;
    use crate::auth::MemorySessionStore;

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::builder()
            .base_url(server.uri())
            .session_store(Arc::new(MemorySessionStore::with_session(
                SessionData::token_only(SessionToken::new("test-token")),
            )))
            .build()
            .unwrap()
    }

    fn project_body(id: &str, name: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "client_id": "c-1",
            "name": name,
            "description": null,
            "status": status,
            "created_at": "2026-07-01T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn get_all_decodes_a_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": [project_body("p-1", "Spring push", "active")]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let projects = client.projects().get_all().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Spring push");
    }

    #[tokio::test]
    async fn update_sends_only_the_changed_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/projects/p-1"))
            .and(body_json(serde_json::json!({ "status": "paused" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": project_body("p-1", "Spring push", "paused")
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = UpdateProjectRequest {
            status: Some(tapverse_domain::ProjectStatus::Paused),
            ..Default::default()
        };
        let project = client.projects().update("p-1", &request).await.unwrap();
        assert_eq!(project.status, tapverse_domain::ProjectStatus::Paused);
    }
}
