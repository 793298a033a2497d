//! Owner Sub-form Draft

use crate::api::MemberPayload;
use crate::domain::{MemberRole, OwnerSummary, RecordId};
use crate::validation::{self, FieldErrors};

#[derive(Debug, Clone, PartialEq)]
pub struct OwnerDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Write-only; blank on edit keeps the current password
    pub password: String,
    pub role: Option<MemberRole>,
    /// Set when updating an existing member
    pub member_id: Option<RecordId>,
}

impl Default for OwnerDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            password: String::new(),
            role: Some(MemberRole::Owner),
            member_id: None,
        }
    }
}

impl OwnerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_owner(owner: &OwnerSummary) -> Self {
        Self {
            first_name: owner.first_name.clone(),
            last_name: owner.last_name.clone(),
            email: owner.email.clone(),
            password: String::new(),
            role: Some(owner.user_role.unwrap_or_default()),
            member_id: owner.member_id.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.member_id.is_some()
    }

    /// Role picker input; anything but the four roles clears the choice
    pub fn select_role(&mut self, raw: &str) {
        self.role = MemberRole::parse(raw);
    }

    pub fn validate(&self) -> FieldErrors {
        validation::validate_owner(self)
    }

    /// Payload bound to a restaurant. A blank password is left out.
    pub fn to_payload(&self, restaurant_id: &RecordId) -> MemberPayload {
        MemberPayload {
            hotel_id: restaurant_id.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            user_role: self.role.unwrap_or_default(),
            password: Some(self.password.clone()).filter(|p| !p.trim().is_empty()),
            member_id: self.member_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_password_stripped_from_payload() {
        let mut draft = OwnerDraft {
            first_name: "Asha".into(),
            last_name: "Rao".into(),
            email: "asha@diner.in".into(),
            password: "  ".into(),
            role: Some(MemberRole::Manager),
            member_id: Some(RecordId::from("m1")),
        };
        let json = serde_json::to_value(draft.to_payload(&RecordId::from("r1"))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "hotel_id": "r1", "first_name": "Asha", "last_name": "Rao",
                "email": "asha@diner.in", "user_role": "MANAGER", "member_id": "m1"
            })
        );

        draft.password = "s3cret!!".into();
        draft.member_id = None;
        let json = serde_json::to_value(draft.to_payload(&RecordId::from("r1"))).unwrap();
        assert_eq!(json["password"], "s3cret!!");
        assert!(json.get("member_id").is_none());
    }

    #[test]
    fn test_select_role() {
        let mut draft = OwnerDraft::new();
        assert_eq!(draft.role, Some(MemberRole::Owner));
        draft.select_role("WAITER");
        assert_eq!(draft.role, Some(MemberRole::Waiter));
        draft.select_role("");
        assert_eq!(draft.role, None);
    }
}
