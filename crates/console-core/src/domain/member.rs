//! Member Entity
//!
//! Users linked to a restaurant with a role. The detail endpoint returns a
//! flat shape (`StaffMember`), the member listing a nested one (`Member`).

use serde::{Deserialize, Deserializer, Serialize};

use super::{null_as_default, RecordId};

/// Role of a member inside one restaurant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MemberRole {
    #[default]
    Owner,
    Manager,
    Cook,
    Waiter,
}

impl MemberRole {
    pub const ALL: [MemberRole; 4] = [
        MemberRole::Owner,
        MemberRole::Manager,
        MemberRole::Cook,
        MemberRole::Waiter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "OWNER",
            MemberRole::Manager => "MANAGER",
            MemberRole::Cook => "COOK",
            MemberRole::Waiter => "WAITER",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Owner => "Owner",
            MemberRole::Manager => "Manager",
            MemberRole::Cook => "Cook",
            MemberRole::Waiter => "Waiter",
        }
    }

    /// Strict parse: only the four wire values are accepted
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "OWNER" => Some(MemberRole::Owner),
            "MANAGER" => Some(MemberRole::Manager),
            "COOK" => Some(MemberRole::Cook),
            "WAITER" => Some(MemberRole::Waiter),
            _ => None,
        }
    }
}

/// Unknown role strings from the backend become `None` instead of failing
/// the whole payload.
pub(crate) fn lenient_role<'de, D>(deserializer: D) -> Result<Option<MemberRole>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(MemberRole::parse))
}

/// Member row inside a restaurant detail payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    #[serde(default)]
    pub link_id: Option<RecordId>,
    #[serde(default)]
    pub user_id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<MemberRole>,
}

impl StaffMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

/// User half of a member listing row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberUser {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,
}

/// Restaurant summary attached to a member listing row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberRestaurant {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
}

/// Row of `GET /api/v1/member/all`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub link_id: RecordId,
    #[serde(default, deserialize_with = "lenient_role")]
    pub role: Option<MemberRole>,
    pub user: MemberUser,
    #[serde(default)]
    pub restaurant: Option<MemberRestaurant>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.user.first_name, self.user.last_name).trim().to_string()
    }

    /// Two-letter avatar text
    pub fn initials(&self) -> String {
        self.user.first_name.chars().take(1)
            .chain(self.user.last_name.chars().take(1))
            .collect::<String>()
            .to_uppercase()
    }

    pub fn role_label(&self) -> &'static str {
        self.role.map(|r| r.as_str()).unwrap_or("N/A")
    }
}
