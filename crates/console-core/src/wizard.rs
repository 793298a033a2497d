//! Restaurant Wizard
//!
//! Two-step dialog: the restaurant first, then its owner. The restaurant id
//! assigned by the backend in step one is what the owner is attached to.
//!
//! Each submission is split into `begin_*` (validate, mark loading, build the
//! payload) and `finish_*` (apply the response) so the UI can hold the wizard
//! in a signal across the await. `begin_*` hands out a ticket; `finish_*`
//! applies a response only for the ticket still pending on that wizard.
//! `submit_restaurant`/`submit_owner` chain the two for callers that can hold
//! `&mut self` over the request.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::api::{ConsoleApi, MemberPayload, RestaurantPayload, SavedRecord};
use crate::domain::{OwnerSummary, RecordId, Restaurant};
use crate::error::{ApiError, ApiResult};
use crate::forms::{OwnerDraft, RestaurantDraft};
use crate::notify::{Notice, Notifier};
use crate::validation::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Restaurant,
    Owner,
    Closed,
}

/// How the wizard was closed
#[derive(Debug, Clone, PartialEq)]
pub enum WizardOutcome {
    Saved {
        restaurant_id: RecordId,
        owner: Option<SavedRecord>,
    },
    Cancelled,
}

impl WizardOutcome {
    /// The list behind the dialog must re-fetch
    pub fn needs_refresh(&self) -> bool {
        matches!(self, WizardOutcome::Saved { .. })
    }
}

/// Why a submission did not start
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitBlocked {
    /// A request is already in flight
    Busy,
    /// The current step is not the one being submitted
    WrongStep,
    Invalid(FieldErrors),
    /// Owner step reached without a restaurant id
    NoRestaurant,
}

impl SubmitBlocked {
    /// Toast for the blocked submission, if it gets one
    pub fn notice(&self, step: WizardStep) -> Option<Notice> {
        match self {
            SubmitBlocked::Invalid(_) if step == WizardStep::Restaurant => {
                Some(Notice::error("Please fix the errors above"))
            }
            SubmitBlocked::NoRestaurant => Some(Notice::error("Please create the restaurant first")),
            _ => None,
        }
    }
}

/// Identifies one save request, unique across wizard instances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

impl SubmitTicket {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        SubmitTicket(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Payload to send plus the ticket its response must come back with
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<P> {
    pub ticket: SubmitTicket,
    pub payload: P,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    step: WizardStep,
    pub restaurant: RestaurantDraft,
    pub owner: OwnerDraft,
    errors: FieldErrors,
    in_flight: Option<SubmitTicket>,
    restaurant_id: Option<RecordId>,
    editing: bool,
    outcome: Option<WizardOutcome>,
}

impl Wizard {
    /// Empty wizard for a new restaurant
    pub fn create() -> Self {
        Self {
            step: WizardStep::Restaurant,
            restaurant: RestaurantDraft::new(),
            owner: OwnerDraft::new(),
            errors: FieldErrors::new(),
            in_flight: None,
            restaurant_id: None,
            editing: false,
            outcome: None,
        }
    }

    /// Pre-filled wizard. With an owner it opens on the owner step; otherwise
    /// it opens on the restaurant step and keeps the embedded owner, if any,
    /// so the owner submission becomes an update.
    pub fn edit(restaurant: &Restaurant, owner: Option<&OwnerSummary>) -> Self {
        let (step, owner_draft) = match owner {
            Some(owner) => (WizardStep::Owner, OwnerDraft::from_owner(owner)),
            None => (
                WizardStep::Restaurant,
                restaurant.owner.as_ref().map(OwnerDraft::from_owner).unwrap_or_default(),
            ),
        };
        Self {
            step,
            restaurant: RestaurantDraft::from_restaurant(restaurant),
            owner: owner_draft,
            errors: FieldErrors::new(),
            in_flight: None,
            restaurant_id: Some(restaurant.id.clone()),
            editing: true,
            outcome: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Take the pending ticket if `ticket` is it. Anything else is a response
    /// to a save this wizard no longer waits for.
    fn settle(&mut self, ticket: SubmitTicket, step: WizardStep) -> bool {
        if self.step != step || self.in_flight != Some(ticket) {
            log::debug!("[WIZARD] dropping stale response {:?}", ticket);
            return false;
        }
        self.in_flight = None;
        true
    }

    pub fn is_open(&self) -> bool {
        self.step != WizardStep::Closed
    }

    pub fn restaurant_id(&self) -> Option<&RecordId> {
        self.restaurant_id.as_ref()
    }

    pub fn outcome(&self) -> Option<&WizardOutcome> {
        self.outcome.as_ref()
    }

    pub fn title(&self) -> &'static str {
        match (self.step, self.editing || self.owner.is_edit()) {
            (WizardStep::Owner, true) => "Edit Owner",
            (WizardStep::Owner, false) => "Add Owner",
            (_, true) if self.editing => "Edit Restaurant",
            _ => "Add New Restaurant",
        }
    }

    /// Drop the error of a field the user just edited
    pub fn clear_error(&mut self, field: &str) {
        self.errors.clear(field);
    }

    pub fn can_skip(&self) -> bool {
        self.step == WizardStep::Owner && !self.is_loading() && self.restaurant_id.is_some()
    }

    pub fn can_go_back(&self) -> bool {
        self.step == WizardStep::Owner && !self.is_loading()
    }

    // ========================================================================
    // Restaurant step
    // ========================================================================

    pub fn begin_restaurant_submit(&mut self) -> Result<Submission<RestaurantPayload>, SubmitBlocked> {
        if self.step != WizardStep::Restaurant {
            return Err(SubmitBlocked::WrongStep);
        }
        if self.is_loading() {
            return Err(SubmitBlocked::Busy);
        }
        self.errors = self.restaurant.validate();
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }
        let ticket = SubmitTicket::next();
        self.in_flight = Some(ticket);
        let mut payload = self.restaurant.to_payload();
        // Back from the owner step: save again as an update
        if payload.restaurant_id.is_none() {
            payload.restaurant_id = self.restaurant_id.clone();
        }
        Ok(Submission { ticket, payload })
    }

    /// Apply the save response. `None` when the wizard was closed meanwhile
    /// or the ticket belongs to another submission.
    pub fn finish_restaurant_submit(
        &mut self,
        ticket: SubmitTicket,
        result: ApiResult<SavedRecord>,
    ) -> Option<Notice> {
        if !self.settle(ticket, WizardStep::Restaurant) {
            return None;
        }
        let updating = self.restaurant_id.is_some();
        let saved = result.and_then(|saved| {
            saved
                .restaurant_id()
                .or_else(|| self.restaurant_id.clone())
                .ok_or_else(|| ApiError::Decode("no restaurant id in save response".into()))
        });
        match saved {
            Ok(id) => {
                log::info!("[WIZARD] restaurant {} saved", id);
                self.restaurant_id = Some(id);
                self.step = WizardStep::Owner;
                self.errors.clear_all();
                Some(Notice::success(if updating {
                    "Restaurant updated successfully!"
                } else {
                    "Restaurant created successfully!"
                }))
            }
            Err(e) => {
                log::warn!("[WIZARD] restaurant save failed: {}", e);
                let fallback = match e {
                    ApiError::Rejected { .. } => "Failed to save restaurant",
                    _ => "Error saving restaurant. Please try again.",
                };
                Some(Notice::error(e.user_message(fallback)))
            }
        }
    }

    // ========================================================================
    // Owner step
    // ========================================================================

    pub fn begin_owner_submit(&mut self) -> Result<Submission<MemberPayload>, SubmitBlocked> {
        if self.step != WizardStep::Owner {
            return Err(SubmitBlocked::WrongStep);
        }
        if self.is_loading() {
            return Err(SubmitBlocked::Busy);
        }
        self.errors = self.owner.validate();
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }
        let Some(restaurant_id) = self.restaurant_id.clone() else {
            return Err(SubmitBlocked::NoRestaurant);
        };
        let ticket = SubmitTicket::next();
        self.in_flight = Some(ticket);
        Ok(Submission { ticket, payload: self.owner.to_payload(&restaurant_id) })
    }

    pub fn finish_owner_submit(&mut self, ticket: SubmitTicket, result: ApiResult<SavedRecord>) -> Option<Notice> {
        if !self.settle(ticket, WizardStep::Owner) {
            return None;
        }
        let updating = self.owner.is_edit();
        match (result, self.restaurant_id.clone()) {
            (Ok(saved), Some(restaurant_id)) => {
                log::info!("[WIZARD] owner saved for restaurant {}", restaurant_id);
                self.close(WizardOutcome::Saved { restaurant_id, owner: Some(saved) });
                Some(Notice::success(if updating {
                    "Owner updated successfully!"
                } else {
                    "Owner added successfully!"
                }))
            }
            (Ok(_), None) => Some(Notice::error("Please create the restaurant first")),
            (Err(e), _) => {
                log::warn!("[WIZARD] owner save failed: {}", e);
                let fallback = match e {
                    ApiError::Rejected { .. } => "Failed to add owner",
                    _ => "Error adding owner. Please try again.",
                };
                Some(Notice::error(e.user_message(fallback)))
            }
        }
    }

    /// Finish without an owner
    pub fn skip_owner(&mut self) -> Option<Notice> {
        if !self.can_skip() {
            return None;
        }
        let restaurant_id = self.restaurant_id.clone()?;
        self.close(WizardOutcome::Saved { restaurant_id, owner: None });
        Some(Notice::success("Restaurant saved successfully!"))
    }

    /// Return to the restaurant step; the restaurant id is kept
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.step = WizardStep::Restaurant;
        self.errors.clear_all();
        true
    }

    /// Close from any step, discarding both drafts
    pub fn cancel(&mut self) {
        self.close(WizardOutcome::Cancelled);
    }

    fn close(&mut self, outcome: WizardOutcome) {
        self.step = WizardStep::Closed;
        self.restaurant = RestaurantDraft::new();
        self.owner = OwnerDraft::new();
        self.errors.clear_all();
        self.in_flight = None;
        self.restaurant_id = None;
        self.outcome = Some(outcome);
    }

    // ========================================================================
    // Drivers
    // ========================================================================

    pub async fn submit_restaurant<A>(&mut self, api: &A, notifier: &mut Notifier) -> WizardStep
    where
        A: ConsoleApi + ?Sized,
    {
        match self.begin_restaurant_submit() {
            Ok(Submission { ticket, payload }) => {
                let result = api.save_restaurant(&payload).await;
                if let Some(notice) = self.finish_restaurant_submit(ticket, result) {
                    notifier.post(notice);
                }
            }
            Err(blocked) => {
                if let Some(notice) = blocked.notice(self.step) {
                    notifier.post(notice);
                }
            }
        }
        self.step
    }

    pub async fn submit_owner<A>(&mut self, api: &A, notifier: &mut Notifier) -> WizardStep
    where
        A: ConsoleApi + ?Sized,
    {
        match self.begin_owner_submit() {
            Ok(Submission { ticket, payload }) => {
                let result = api.save_member(&payload).await;
                if let Some(notice) = self.finish_owner_submit(ticket, result) {
                    notifier.post(notice);
                }
            }
            Err(blocked) => {
                if let Some(notice) = blocked.notice(self.step) {
                    notifier.post(notice);
                }
            }
        }
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MemberRole, RestaurantStatus};
    use serde_json::json;

    fn filled() -> Wizard {
        let mut wizard = Wizard::create();
        wizard.restaurant.name = "Test Diner".into();
        wizard.restaurant.address = "1 MG Road".into();
        wizard.restaurant.select_state(Some("MH"));
        assert!(wizard.restaurant.select_city("Pune"));
        wizard
    }

    fn saved(value: serde_json::Value) -> ApiResult<SavedRecord> {
        Ok(SavedRecord { data: value })
    }

    fn at_owner_step() -> Wizard {
        let mut wizard = filled();
        let submission = wizard.begin_restaurant_submit().unwrap();
        wizard.finish_restaurant_submit(submission.ticket, saved(json!({"restaurant_id": "r1"})));
        wizard
    }

    #[test]
    fn test_restaurant_success_moves_to_owner_step() {
        let mut wizard = filled();
        let Submission { ticket, payload } = wizard.begin_restaurant_submit().unwrap();
        assert_eq!(payload.state_code.as_deref(), Some("MH"));
        assert!(wizard.is_loading());
        assert_eq!(wizard.begin_restaurant_submit(), Err(SubmitBlocked::Busy));

        let notice = wizard.finish_restaurant_submit(ticket, saved(json!({"restaurant_id": "r1"}))).unwrap();
        assert_eq!(notice.text, "Restaurant created successfully!");
        assert_eq!(wizard.step(), WizardStep::Owner);
        assert_eq!(wizard.restaurant_id(), Some(&RecordId::from("r1")));
        assert!(!wizard.is_loading());
        assert_eq!(wizard.title(), "Add Owner");
    }

    #[test]
    fn test_restaurant_failure_stays_on_step() {
        let mut wizard = filled();
        let submission = wizard.begin_restaurant_submit().unwrap();
        let notice = wizard
            .finish_restaurant_submit(
                submission.ticket,
                Err(ApiError::Rejected { message: Some("Duplicate name".into()) }),
            )
            .unwrap();
        assert_eq!(notice.text, "Duplicate name");
        assert_eq!(wizard.step(), WizardStep::Restaurant);
        assert_eq!(wizard.restaurant_id(), None);
        assert!(!wizard.is_loading());
    }

    #[test]
    fn test_invalid_restaurant_is_blocked() {
        let mut wizard = Wizard::create();
        match wizard.begin_restaurant_submit() {
            Err(SubmitBlocked::Invalid(errors)) => assert_eq!(errors.len(), 4),
            other => panic!("expected invalid, got {:?}", other),
        }
        assert!(!wizard.is_loading());
        assert_eq!(wizard.errors().get("name"), Some("Restaurant name is required"));
    }

    #[test]
    fn test_skip_closes_without_owner() {
        let mut wizard = at_owner_step();
        assert_eq!(wizard.skip_owner().unwrap().text, "Restaurant saved successfully!");
        assert_eq!(
            wizard.outcome(),
            Some(&WizardOutcome::Saved { restaurant_id: RecordId::from("r1"), owner: None })
        );
        assert!(!wizard.is_open());
        assert_eq!(wizard.restaurant.name, "");
    }

    #[test]
    fn test_back_keeps_restaurant_id_and_resaves_as_update() {
        let mut wizard = at_owner_step();
        assert!(wizard.back());
        assert_eq!(wizard.step(), WizardStep::Restaurant);
        let Submission { ticket, payload } = wizard.begin_restaurant_submit().unwrap();
        assert_eq!(payload.restaurant_id, Some(RecordId::from("r1")));
        let notice = wizard.finish_restaurant_submit(ticket, saved(json!({}))).unwrap();
        assert_eq!(notice.text, "Restaurant updated successfully!");
        assert_eq!(wizard.restaurant_id(), Some(&RecordId::from("r1")));
    }

    #[test]
    fn test_owner_submit_targets_captured_restaurant() {
        let mut wizard = at_owner_step();
        wizard.owner.first_name = "Asha".into();
        wizard.owner.last_name = "Rao".into();
        wizard.owner.email = "asha@diner.in".into();
        wizard.owner.password = "secret".into();
        let Submission { ticket, payload } = wizard.begin_owner_submit().unwrap();
        assert_eq!(payload.hotel_id, RecordId::from("r1"));
        assert_eq!(payload.user_role, MemberRole::Owner);
        assert!(!wizard.can_skip());
        assert!(!wizard.back());

        let notice = wizard.finish_owner_submit(ticket, saved(json!({"member_id": "m9"}))).unwrap();
        assert_eq!(notice.text, "Owner added successfully!");
        assert!(wizard.outcome().unwrap().needs_refresh());
    }

    #[test]
    fn test_cancel_discards_and_ignores_late_response() {
        let mut wizard = filled();
        let submission = wizard.begin_restaurant_submit().unwrap();
        wizard.cancel();
        assert_eq!(wizard.outcome(), Some(&WizardOutcome::Cancelled));
        assert_eq!(wizard.finish_restaurant_submit(submission.ticket, saved(json!({"restaurant_id": "r1"}))), None);
        assert_eq!(wizard.step(), WizardStep::Closed);
        assert_eq!(wizard.restaurant_id(), None);
    }

    #[test]
    fn test_response_without_pending_submit_is_ignored() {
        let mut earlier = filled();
        let stray = earlier.begin_restaurant_submit().unwrap().ticket;

        let mut wizard = Wizard::create();
        assert_eq!(wizard.finish_restaurant_submit(stray, saved(json!({"restaurant_id": "old"}))), None);
        assert_eq!(wizard.step(), WizardStep::Restaurant);
        assert_eq!(wizard.restaurant_id(), None);

        let mut wizard = at_owner_step();
        assert_eq!(wizard.finish_owner_submit(stray, saved(json!({"member_id": "m1"}))), None);
        assert_eq!(wizard.step(), WizardStep::Owner);
        assert_eq!(wizard.outcome(), None);
    }

    #[test]
    fn test_late_response_from_cancelled_wizard_skips_reopened_one() {
        let mut cancelled = filled();
        let old = cancelled.begin_restaurant_submit().unwrap();
        cancelled.cancel();

        let mut reopened = filled();
        let current = reopened.begin_restaurant_submit().unwrap();
        assert_ne!(old.ticket, current.ticket);

        assert_eq!(reopened.finish_restaurant_submit(old.ticket, saved(json!({"restaurant_id": "old"}))), None);
        assert_eq!(reopened.step(), WizardStep::Restaurant);
        assert!(reopened.is_loading());

        reopened.finish_restaurant_submit(current.ticket, saved(json!({"restaurant_id": "new"}))).unwrap();
        assert_eq!(reopened.step(), WizardStep::Owner);
        assert_eq!(reopened.restaurant_id(), Some(&RecordId::from("new")));
    }

    #[test]
    fn test_edit_entry_points() {
        let restaurant: Restaurant = serde_json::from_value(json!({
            "id": "r7", "name": "Spice Route", "address": "2 Park St", "city": "Kolkata",
            "state": "West Bengal", "status": "ACTIVE",
            "owner": {"member_id": "m3", "first_name": "Dev", "last_name": "Sen", "email": "dev@sr.in", "user_role": "OWNER"}
        }))
        .unwrap();
        assert_eq!(restaurant.status, RestaurantStatus::Active);

        let wizard = Wizard::edit(&restaurant, restaurant.owner.as_ref());
        assert_eq!(wizard.step(), WizardStep::Owner);
        assert_eq!(wizard.title(), "Edit Owner");
        assert_eq!(wizard.owner.first_name, "Dev");

        let wizard = Wizard::edit(&restaurant, None);
        assert_eq!(wizard.step(), WizardStep::Restaurant);
        assert_eq!(wizard.title(), "Edit Restaurant");
        assert_eq!(wizard.restaurant.state_code, "WB");
        assert_eq!(wizard.owner.member_id, Some(RecordId::from("m3")));
    }
}
