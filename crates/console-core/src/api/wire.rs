//! Wire Types
//!
//! Request bodies and response envelopes of the REST backend. Optional
//! request fields are omitted when absent rather than sent as `null`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{AdminUser, MemberRole, RecordId, Restaurant, RestaurantDetail, RestaurantStatus, StaffMember};
use crate::error::{ApiError, ApiResult};
use crate::listing::{Page, PageInfo};

// ========================
// Request bodies
// ========================

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct EmailRequest<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct VerifyOtpRequest<'a> {
    pub otp_id: &'a str,
    pub otp: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ResetPasswordRequest<'a> {
    pub reset_token: &'a str,
    pub new_password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct RestaurantStatusRequest<'a> {
    pub id: &'a RecordId,
    pub status: RestaurantStatus,
}

#[derive(Debug, Serialize)]
pub(crate) struct MemberStatusRequest<'a> {
    pub user_id: &'a RecordId,
    pub status: bool,
}

/// Body of `POST /api/v1/restaurant/add` (create and update)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantPayload {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant_id: Option<RecordId>,
}

/// Body of `POST|PUT /api/v1/member/add`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberPayload {
    pub hotel_id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_role: MemberRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_id: Option<RecordId>,
}

// ========================
// Responses
// ========================

/// Error/confirmation body: only the message matters
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Successful login: the token plus the raw `data` blob cached as the user
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub access_token: String,
    pub user: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginEnvelope {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginEnvelope {
    pub fn into_session(self) -> ApiResult<LoginSession> {
        let data = self.data.unwrap_or(Value::Null);
        match data.get("access_token").and_then(Value::as_str) {
            Some(token) if !token.is_empty() => Ok(LoginSession {
                access_token: token.to_string(),
                user: data,
            }),
            _ => Err(ApiError::Rejected {
                message: Some(
                    self.message
                        .unwrap_or_else(|| "Login failed: No access token received".to_string()),
                ),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OtpChallenge {
    pub otp_id: RecordId,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OtpVerified {
    #[serde(default)]
    pub message: Option<String>,
    pub reset_token: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentUserEnvelope {
    pub data: CurrentUserData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentUserData {
    pub user: AdminUser,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Pagination {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default, alias = "totalPages")]
    pub total_pages: Option<u32>,
    #[serde(default, alias = "hasNextPage")]
    pub has_next_page: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListEnvelope<T> {
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> ListEnvelope<T> {
    /// Trust whichever paging fields the backend reported
    pub fn into_page(self, page: u32, limit: u32) -> Page<T> {
        let items = self.data.unwrap_or_default();
        let pagination = self.pagination.unwrap_or_default();
        let total = pagination.total.or(self.total);
        let total_pages = pagination
            .total_pages
            .or_else(|| total.map(|t| t.div_ceil(u64::from(limit.max(1))) as u32))
            .unwrap_or(1)
            .max(1);
        let has_next = pagination.has_next_page.unwrap_or(page < total_pages);
        let info = PageInfo {
            page,
            limit,
            total: total.unwrap_or(items.len() as u64),
            total_pages,
            has_next,
        };
        Page { items, info }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DetailEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub restaurant: Option<Restaurant>,
    #[serde(default)]
    pub users: Option<Vec<StaffMember>>,
}

impl DetailEnvelope {
    pub fn into_detail(self) -> ApiResult<RestaurantDetail> {
        match (self.success, self.restaurant) {
            (Some(false), _) | (_, None) => Err(ApiError::Rejected { message: self.message }),
            (_, Some(restaurant)) => Ok(RestaurantDetail {
                success: true,
                restaurant,
                users: self.users.unwrap_or_default(),
            }),
        }
    }
}

/// `{success, data, message}` envelope of the save endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct SaveEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SaveEnvelope {
    /// An explicit `success` flag wins; without one, a non-null `data` counts
    /// as success.
    pub fn into_saved(self) -> ApiResult<SavedRecord> {
        let data = self.data.unwrap_or(Value::Null);
        match self.success {
            Some(true) => Ok(SavedRecord { data }),
            None if !data.is_null() => Ok(SavedRecord { data }),
            _ => Err(ApiError::Rejected { message: self.message }),
        }
    }
}

/// `data` of a successful save
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SavedRecord {
    pub data: Value,
}

impl SavedRecord {
    fn id_at(&self, key: &str) -> Option<RecordId> {
        self.data
            .get(key)
            .filter(|v| !v.is_null())
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Restaurant id assigned by the backend
    pub fn restaurant_id(&self) -> Option<RecordId> {
        self.id_at("restaurant_id").or_else(|| self.id_at("id"))
    }

    pub fn member_id(&self) -> Option<RecordId> {
        self.id_at("member_id").or_else(|| self.id_at("link_id")).or_else(|| self.id_at("id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_flag_contract() {
        let ok: SaveEnvelope = serde_json::from_value(json!({"success": true, "data": {"restaurant_id": "r1"}})).unwrap();
        assert_eq!(ok.into_saved().unwrap().restaurant_id(), Some(RecordId::from("r1")));

        let bare: SaveEnvelope = serde_json::from_value(json!({"data": {"id": 5}})).unwrap();
        assert_eq!(bare.into_saved().unwrap().restaurant_id(), Some(RecordId::from("5")));

        let rejected: SaveEnvelope = serde_json::from_value(json!({"success": false, "data": {"id": 5}, "message": "Duplicate"})).unwrap();
        assert_eq!(rejected.into_saved().unwrap_err().backend_message(), Some("Duplicate"));

        let empty: SaveEnvelope = serde_json::from_value(json!({})).unwrap();
        assert!(empty.into_saved().is_err());
    }

    #[test]
    fn test_page_info_from_pagination_block() {
        let env: ListEnvelope<Value> = serde_json::from_value(json!({
            "data": [{}, {}],
            "pagination": {"total": 45, "totalPages": 3, "hasNextPage": true}
        }))
        .unwrap();
        let page = env.into_page(2, 20);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.info.total, 45);
        assert_eq!(page.info.total_pages, 3);
        assert!(page.info.has_next);
    }

    #[test]
    fn test_page_info_from_bare_total() {
        let env: ListEnvelope<Value> = serde_json::from_value(json!({"data": [{}], "total": 41})).unwrap();
        let page = env.into_page(3, 20);
        assert_eq!(page.info.total_pages, 3);
        assert!(!page.info.has_next);

        let env: ListEnvelope<Value> = serde_json::from_value(json!({"data": null})).unwrap();
        let page = env.into_page(1, 20);
        assert!(page.items.is_empty());
        assert_eq!(page.info.total_pages, 1);
    }

    #[test]
    fn test_restaurant_list_decodes() {
        let env: ListEnvelope<Restaurant> = serde_json::from_value(json!({
            "data": [
                {"id": "r1", "name": "Test Diner", "status": "ACTIVE"},
                {"id": 2, "name": "Late Night", "status": "suspended"}
            ],
            "total": 2
        }))
        .unwrap();
        let page = env.into_page(1, 20);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].status, RestaurantStatus::Active);
        assert_eq!(page.items[1].status, RestaurantStatus::Inactive);

        let missing: ListEnvelope<Restaurant> = serde_json::from_value(json!({})).unwrap();
        assert!(missing.into_page(1, 20).items.is_empty());
    }

    #[test]
    fn test_login_without_token_is_rejected() {
        let env: LoginEnvelope = serde_json::from_value(json!({"data": {"email": "a@b.c"}})).unwrap();
        assert_eq!(
            env.into_session().unwrap_err().backend_message(),
            Some("Login failed: No access token received")
        );
    }
}
