//! DTOs for the users API.
//!
//! # Design
//! These mirror the remote API's payloads but are defined independently of
//! the mock-server crate; the hermetic scenarios catch any drift between the
//! two. Field names follow the wire format (`createdAt`, `total_pages`).

use serde::{Deserialize, Serialize};

/// Request payload for creating or updating a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub job: String,
}

impl UserInput {
    pub fn new(name: &str, job: &str) -> Self {
        Self {
            name: name.to_string(),
            job: job.to_string(),
        }
    }
}

/// Response to `POST /api/users`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub name: String,
    pub job: String,
    pub id: String,
    pub created_at: String,
}

/// Response to `PUT /api/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedUser {
    pub name: String,
    pub job: String,
    pub updated_at: String,
}

/// A stored user as returned by the read endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// Response to `GET /api/users?page=N`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPage {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<User>,
}

/// Response to `GET /api/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SingleUser {
    pub data: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_user_reads_camel_case_timestamp() {
        let body = r#"{"name":"morpheus","job":"leader","id":"417","createdAt":"2024-01-01T00:00:00.000Z"}"#;
        let user: CreatedUser = serde_json::from_str(body).unwrap();
        assert_eq!(user.id, "417");
        assert_eq!(user.created_at, "2024-01-01T00:00:00.000Z");
    }

    #[test]
    fn created_user_rejects_numeric_id() {
        let body = r#"{"name":"morpheus","job":"leader","id":417,"createdAt":"x"}"#;
        assert!(serde_json::from_str::<CreatedUser>(body).is_err());
    }

    #[test]
    fn updated_user_requires_timestamp() {
        let body = r#"{"name":"morpheus","job":"zion resident"}"#;
        assert!(serde_json::from_str::<UpdatedUser>(body).is_err());
    }

    #[test]
    fn user_page_ignores_support_block() {
        let body = r#"{"page":2,"per_page":6,"total":12,"total_pages":2,"data":[],"support":{"url":"u","text":"t"}}"#;
        let page: UserPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert!(page.data.is_empty());
    }
}
