//! Agency client records

use serde::{Deserialize, Serialize};

/// A client of the agency as stored by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    /// Server-minted identifier.
    pub id: String,
    /// Agency-facing client code (e.g. "TC-1").
    pub tapverse_client_id: String,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

/// Request body for `POST /clients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClientRequest {
    pub tapverse_client_id: String,
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}

impl CreateClientRequest {
    /// Minimal request with just the required fields.
    pub fn new(tapverse_client_id: impl Into<String>, company_name: impl Into<String>) -> Self {
        Self {
            tapverse_client_id: tapverse_client_id.into(),
            company_name: company_name.into(),
            website: None,
            industry: None,
            contact_email: None,
        }
    }
}

/// Request body for `PUT /clients/{id}`; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClientRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
}
