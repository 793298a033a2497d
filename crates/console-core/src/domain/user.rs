//! Signed-in administrator shown in the header.

use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

impl AdminUser {
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }

    pub fn initials(&self) -> String {
        let initials: String = self.first_name.chars().take(1)
            .chain(self.last_name.chars().take(1))
            .collect();
        if initials.is_empty() {
            self.email.chars().take(1).collect::<String>().to_uppercase()
        } else {
            initials.to_uppercase()
        }
    }
}
