//! Roadmap task operations

use tapverse_domain::{CreateTaskRequest, RoadmapTask, UpdateTaskRequest};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Operations on `/tasks`.
pub struct TasksApi<'a> {
    client: &'a ApiClient,
}

impl<'a> TasksApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every roadmap task.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<RoadmapTask>, ApiError> {
        self.client.get("/tasks").await
    }

    /// Create a task on a project roadmap.
    #[instrument(skip(self, request), fields(project_id = %request.project_id))]
    pub async fn create(&self, request: &CreateTaskRequest) -> Result<RoadmapTask, ApiError> {
        let task: RoadmapTask = self.client.post("/tasks", request).await?;
        debug!(task_id = %task.id, "task created");
        Ok(task)
    }

    /// Update fields on a task.
    #[instrument(skip(self, request), fields(task_id = %id))]
    pub async fn update(&self, id: &str, request: &UpdateTaskRequest) -> Result<RoadmapTask, ApiError> {
        let path = format!("/tasks/{}", encode(id));
        self.client.put(&path, request).await
    }

    /// Delete a task.
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/tasks/{}", encode(id));
        self.client.delete::<serde_json::Value>(&path).await?;
        debug!(task_id = %id, "task deleted");
        Ok(())
    }
}
