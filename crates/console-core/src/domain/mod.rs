//! Domain Layer
//!
//! Entities exchanged with the restaurant backend plus the static
//! geographic dataset behind the state/city pickers.

mod ids;
mod member;
mod restaurant;
mod user;
pub mod geo;

pub use ids::RecordId;
pub use member::{Member, MemberRestaurant, MemberRole, MemberUser, StaffMember};
pub use restaurant::{OwnerSummary, Restaurant, RestaurantDetail, RestaurantStatus};
pub use user::AdminUser;

use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
