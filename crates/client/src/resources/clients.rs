//! Client account management

use tapverse_domain::{ClientRecord, CreateClientRequest, UpdateClientRequest};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Operations on `/clients`.
pub struct ClientsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ClientsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every client account.
    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<ClientRecord>, ApiError> {
        self.client.get("/clients").await
    }

    /// Fetch one client account by id.
    #[instrument(skip(self), fields(client_id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Result<ClientRecord, ApiError> {
        let path = format!("/clients/{}", encode(id));
        self.client.get(&path).await
    }

    /// Create a client account.
    #[instrument(skip(self, request), fields(company = %request.company_name))]
    pub async fn create(&self, request: &CreateClientRequest) -> Result<ClientRecord, ApiError> {
        let record: ClientRecord = self.client.post("/clients", request).await?;
        debug!(client_id = %record.id, "client created");
        Ok(record)
    }

    /// Update fields on a client account.
    #[instrument(skip(self, request), fields(client_id = %id))]
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateClientRequest,
    ) -> Result<ClientRecord, ApiError> {
        let path = format!("/clients/{}", encode(id));
        self.client.put(&path, request).await
    }

    /// Delete a client account.
    #[instrument(skip(self), fields(client_id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let path = format!("/clients/{}", encode(id));
        self.client.delete::<serde_json::Value>(&path).await?;
        debug!(client_id = %id, "client deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tapverse_domain::{CreateClientRequest, SessionData, SessionToken};
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

    #[tokio::test]
    async fn create_returns_the_server_issued_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/clients"))
            .and(body_json(serde_json::json!({
                "tapverse_client_id": "TC-1",
                "company_name": "Acme",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {
                    "id": "abc",
                    "tapverse_client_id": "TC-1",
                    "company_name": "Acme",
                    "website": null,
                    "industry": null,
                    "contact_email": null
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let request = CreateClientRequest::new("TC-1", "Acme");
        let record = client.clients().create(&request).await.unwrap();

        assert_eq!(record.id, "abc");
        assert_eq!(record.company_name, "Acme");
    }

    #[tokio::test]
    async fn get_by_id_percent_encodes_the_segment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/clients/c%2F1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {
                    "id": "c/1",
                    "tapverse_client_id": "TC-9",
                    "company_name": "Slash Co",
                    "website": null,
                    "industry": null,
                    "contact_email": null
                }
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let record = client.clients().get_by_id("c/1").await.unwrap();
        assert_eq!(record.company_name, "Slash Co");
    }

    #[tokio::test]
    async fn delete_decodes_an_empty_success_payload() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/clients/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {}
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.clients().delete("abc").await.unwrap();
    }
}
