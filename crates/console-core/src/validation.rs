//! Form Validators
//!
//! Pure functions from a draft to a field-name → message map. An empty map
//! means the draft may be submitted. Only trimming is applied before the
//! checks; drafts are never normalized here.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::forms::{OwnerDraft, RestaurantDraft};

/// Loose email shape used by the member form
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email shape pattern"));

/// Stricter shape used by the login and recovery pages
static LOGIN_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("login email pattern"));

pub const LOGIN_PASSWORD_MIN: usize = 8;
pub const RESET_PASSWORD_MIN: usize = 6;
pub const OTP_LENGTH: usize = 6;

/// Field names, shared with the wire payload keys
pub mod fields {
    pub const NAME: &str = "name";
    pub const ADDRESS: &str = "address";
    pub const CITY: &str = "city";
    pub const STATE: &str = "state";
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const USER_ROLE: &str = "user_role";
}

/// Invalid field → human readable message
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Clear one field's error, as the forms do when the user edits it
    pub fn clear(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join(", "))
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_restaurant(draft: &RestaurantDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if blank(&draft.name) {
        errors.insert(fields::NAME, "Restaurant name is required");
    }
    if blank(&draft.address) {
        errors.insert(fields::ADDRESS, "Address is required");
    }
    if blank(&draft.city) {
        errors.insert(fields::CITY, "City is required");
    }
    if blank(&draft.state) {
        errors.insert(fields::STATE, "State is required");
    }
    errors
}

/// Password is only mandatory when the member does not exist yet
pub fn validate_owner(draft: &OwnerDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if blank(&draft.first_name) {
        errors.insert(fields::FIRST_NAME, "First name is required");
    }
    if blank(&draft.last_name) {
        errors.insert(fields::LAST_NAME, "Last name is required");
    }
    if blank(&draft.email) {
        errors.insert(fields::EMAIL, "Email is required");
    } else if !EMAIL_SHAPE.is_match(&draft.email) {
        errors.insert(fields::EMAIL, "Email is invalid");
    }
    if blank(&draft.password) && !draft.is_edit() {
        errors.insert(fields::PASSWORD, "Password is required");
    }
    if draft.role.is_none() {
        errors.insert(fields::USER_ROLE, "Role is required");
    }
    errors
}

pub fn validate_login_email(email: &str) -> Result<(), &'static str> {
    if LOGIN_EMAIL.is_match(email) {
        Ok(())
    } else {
        Err("Please enter a valid email address")
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    validate_login_email(email)?;
    if password.chars().count() < LOGIN_PASSWORD_MIN {
        return Err("Password must be at least 8 characters long");
    }
    Ok(())
}

pub fn validate_otp(code: &str, otp_id: Option<&str>) -> Result<(), &'static str> {
    if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter complete 6-digit code");
    }
    if otp_id.map_or(true, str::is_empty) {
        return Err("OTP session expired. Please request new OTP.");
    }
    Ok(())
}

pub fn validate_new_password(password: &str, confirmation: &str) -> Result<(), &'static str> {
    if password.chars().count() < RESET_PASSWORD_MIN {
        return Err("Password must be at least 6 characters long");
    }
    if password != confirmation {
        return Err("Passwords do not match");
    }
    Ok(())
}
