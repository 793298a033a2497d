//! Restaurant Sub-form Draft

use crate::api::RestaurantPayload;
use crate::domain::{geo, RecordId, Restaurant};
use crate::validation::{self, FieldErrors};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RestaurantDraft {
    pub name: String,
    pub address: String,
    pub state: String,
    /// Derived from `state`; empty until a state is chosen
    pub state_code: String,
    pub city: String,
    /// Set when editing an existing restaurant
    pub restaurant_id: Option<RecordId>,
}

impl RestaurantDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill from a stored record. The stored city is kept even when the
    /// state name cannot be mapped back to a code.
    pub fn from_restaurant(restaurant: &Restaurant) -> Self {
        let state_code = restaurant
            .state_code
            .clone()
            .filter(|code| geo::state_by_code(code).is_some())
            .or_else(|| geo::state_code(&restaurant.state).map(str::to_string))
            .unwrap_or_default();
        Self {
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            state: restaurant.state.clone(),
            state_code,
            city: restaurant.city.clone(),
            restaurant_id: Some(restaurant.id.clone()),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.restaurant_id.is_some()
    }

    /// Pick a state by code, or clear it with `None`. Any previously chosen
    /// city is dropped either way.
    pub fn select_state(&mut self, code: Option<&str>) {
        self.city.clear();
        match code.and_then(geo::state_by_code) {
            Some(state) => {
                self.state = state.name.to_string();
                self.state_code = state.code.to_string();
            }
            None => {
                self.state.clear();
                self.state_code.clear();
            }
        }
    }

    /// Cities offered for the current state; empty until one is chosen
    pub fn city_options(&self) -> &'static [&'static str] {
        if self.state_code.is_empty() {
            &[]
        } else {
            geo::cities_of(&self.state_code)
        }
    }

    /// The city picker is locked until a state exists, except when editing
    pub fn can_choose_city(&self) -> bool {
        !self.state_code.is_empty() || self.is_edit()
    }

    /// Returns false when the city is not selectable right now
    pub fn select_city(&mut self, city: &str) -> bool {
        if city.is_empty() {
            self.city.clear();
            return true;
        }
        if !self.can_choose_city() {
            return false;
        }
        let options = self.city_options();
        if options.contains(&city) || (self.is_edit() && options.is_empty()) {
            self.city = city.to_string();
            true
        } else {
            false
        }
    }

    pub fn validate(&self) -> FieldErrors {
        validation::validate_restaurant(self)
    }

    pub fn to_payload(&self) -> RestaurantPayload {
        RestaurantPayload {
            name: self.name.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            state_code: Some(self.state_code.clone()).filter(|c| !c.is_empty()),
            restaurant_id: self.restaurant_id.clone(),
        }
    }
}
