//! Restaurant Entity
//!
//! A tenant of the platform plus the detail payload shown in expanded rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use super::member::{lenient_role, MemberRole, StaffMember};
use super::{null_as_default, RecordId};

/// Lifecycle status of a restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum RestaurantStatus {
    Active,
    /// Rows without a status are shown as inactive
    #[default]
    Inactive,
    Pending,
}

impl RestaurantStatus {
    pub const ALL: [RestaurantStatus; 3] = [
        RestaurantStatus::Active,
        RestaurantStatus::Inactive,
        RestaurantStatus::Pending,
    ];

    /// Wire value, also used as the list filter parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            RestaurantStatus::Active => "ACTIVE",
            RestaurantStatus::Inactive => "INACTIVE",
            RestaurantStatus::Pending => "PENDING",
        }
    }

    /// Human label for badges and filter options
    pub fn label(&self) -> &'static str {
        match self {
            RestaurantStatus::Active => "Active",
            RestaurantStatus::Inactive => "Inactive",
            RestaurantStatus::Pending => "Pending",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Some(RestaurantStatus::Active),
            "INACTIVE" => Some(RestaurantStatus::Inactive),
            "PENDING" => Some(RestaurantStatus::Pending),
            _ => None,
        }
    }

    /// Status sent when the admin flips the row switch.
    /// Pending restaurants are activated.
    pub fn toggled(&self) -> Self {
        match self {
            RestaurantStatus::Active => RestaurantStatus::Inactive,
            RestaurantStatus::Inactive | RestaurantStatus::Pending => RestaurantStatus::Active,
        }
    }

    /// CSS modifier for the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            RestaurantStatus::Active => "badge badge-active",
            RestaurantStatus::Inactive => "badge badge-inactive",
            RestaurantStatus::Pending => "badge badge-pending",
        }
    }
}

/// Case-insensitive; unknown or missing values read as inactive so a single
/// odd row cannot fail a whole page.
impl<'de> Deserialize<'de> for RestaurantStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(RestaurantStatus::parse).unwrap_or_default())
    }
}

/// Owner summary embedded in list rows
///
/// Some list responses also carry the owner's password; it is deliberately
/// not part of this type so it is dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OwnerSummary {
    #[serde(default)]
    pub member_id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_role")]
    pub user_role: Option<MemberRole>,
}

/// Restaurant as returned by the list and detail endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default)]
    pub state_code: Option<String>,
    #[serde(default)]
    pub status: RestaurantStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub owner: Option<OwnerSummary>,
}

impl Restaurant {
    /// Inactive restaurants are read-only in the tables
    pub fn controls_enabled(&self) -> bool {
        self.status != RestaurantStatus::Inactive
    }

    /// Creation date as `17 Oct 2026`, or `N/A`
    pub fn created_on(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(parse_timestamp)
            .map(|date| date.format("%d %b %Y").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Payload of `GET /api/v1/restaurant/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetail {
    #[serde(default)]
    pub success: bool,
    pub restaurant: Restaurant,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<StaffMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_active_and_inactive() {
        assert_eq!(RestaurantStatus::Active.toggled(), RestaurantStatus::Inactive);
        assert_eq!(RestaurantStatus::Inactive.toggled(), RestaurantStatus::Active);
        assert_eq!(RestaurantStatus::Pending.toggled(), RestaurantStatus::Active);
    }

    #[test]
    fn test_missing_status_reads_as_inactive() {
        let r: Restaurant = serde_json::from_str(r#"{"id": 7, "name": "Cafe", "status": null}"#).unwrap();
        assert_eq!(r.id.as_str(), "7");
        assert_eq!(r.status, RestaurantStatus::Inactive);
        assert!(!r.controls_enabled());
    }

    #[test]
    fn test_status_decoding_is_lenient() {
        let r: Restaurant = serde_json::from_str(r#"{"id": "r1", "status": "active"}"#).unwrap();
        assert_eq!(r.status, RestaurantStatus::Active);
        let r: Restaurant = serde_json::from_str(r#"{"id": "r2", "status": " Pending "}"#).unwrap();
        assert_eq!(r.status, RestaurantStatus::Pending);
        let r: Restaurant = serde_json::from_str(r#"{"id": "r3", "status": "SUSPENDED"}"#).unwrap();
        assert_eq!(r.status, RestaurantStatus::Inactive);
        let r: Restaurant = serde_json::from_str(r#"{"id": "r4"}"#).unwrap();
        assert_eq!(r.status, RestaurantStatus::Inactive);
        assert_eq!(serde_json::to_string(&RestaurantStatus::Active).unwrap(), r#""ACTIVE""#);
    }

    #[test]
    fn test_owner_password_is_dropped() {
        let r: Restaurant = serde_json::from_str(
            r#"{"id":"r1","name":"Cafe","status":"ACTIVE",
                "owner":{"member_id":"m1","first_name":"Asha","last_name":"Rao",
                         "email":"a@x.io","password":"secret","user_role":"OWNER"}}"#,
        )
        .unwrap();
        let owner = r.owner.unwrap();
        assert_eq!(owner.member_id, Some(RecordId::from("m1")));
        assert_eq!(owner.user_role, Some(MemberRole::Owner));
        assert!(!serde_json::to_string(&owner).unwrap().contains("secret"));
    }

    #[test]
    fn test_created_on_formats() {
        let mut r: Restaurant = serde_json::from_str(r#"{"id":"r1"}"#).unwrap();
        assert_eq!(r.created_on(), "N/A");
        r.created_at = Some("2026-10-17T08:30:00.000Z".to_string());
        assert_eq!(r.created_on(), "17 Oct 2026");
        r.created_at = Some("not a date".to_string());
        assert_eq!(r.created_on(), "N/A");
    }
}
