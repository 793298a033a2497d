//! End-to-end flows across the wizard, tables and guards, driven against
//! the scripted API.

use serde_json::json;

use crate::api::ConsoleApi;
use crate::domain::{RecordId, Restaurant, RestaurantStatus};
use crate::expansion::{RowAction, RowExpansion};
use crate::guards::{resolve, Navigation, Route};
use crate::listing::{apply_status, RestaurantQuery};
use crate::notify::{Notifier, Severity};
use crate::session::MemorySession;
use crate::testing::FakeApi;
use crate::wizard::{Wizard, WizardOutcome, WizardStep};

fn restaurant_row(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id": id, "name": "Test Diner", "address": "1 MG Road", "city": "Pune",
        "state": "Maharashtra", "status": status, "created_at": "2026-10-17T09:30:00Z"
    })
}

#[tokio::test]
async fn test_create_restaurant_then_owner() {
    let api = FakeApi::new();
    api.reply("save_restaurant", json!({"success": true, "data": {"restaurant_id": "r1"}}))
        .reply("save_member", json!({"success": true, "data": {"member_id": "m1"}}));
    let mut notifier = Notifier::default();
    let mut wizard = Wizard::create();

    wizard.restaurant.name = "Test Diner".into();
    wizard.restaurant.address = "1 MG Road".into();
    wizard.restaurant.select_state(Some("MH"));
    wizard.restaurant.select_city("Pune");

    assert_eq!(wizard.submit_restaurant(&api, &mut notifier).await, WizardStep::Owner);
    assert_eq!(
        api.calls_to("save_restaurant"),
        vec![json!({
            "name": "Test Diner", "address": "1 MG Road", "city": "Pune",
            "state": "Maharashtra", "state_code": "MH"
        })]
    );
    assert_eq!(wizard.restaurant_id(), Some(&RecordId::from("r1")));
    assert_eq!(notifier.last().unwrap().severity, Severity::Success);

    wizard.owner.first_name = "Asha".into();
    wizard.owner.last_name = "Rao".into();
    wizard.owner.email = "asha@diner.in".into();
    wizard.owner.password = "secret1".into();
    assert_eq!(wizard.submit_owner(&api, &mut notifier).await, WizardStep::Closed);

    let sent = &api.calls_to("save_member")[0];
    assert_eq!(sent["hotel_id"], "r1");
    assert_eq!(sent["user_role"], "OWNER");
    assert!(wizard.outcome().unwrap().needs_refresh());
    assert_eq!(notifier.last().unwrap().text, "Owner added successfully!");
}

#[tokio::test]
async fn test_restaurant_step_moves_forward_once() {
    let api = FakeApi::new();
    api.reply("save_restaurant", json!({"success": true, "data": {"restaurant_id": "r1"}}));
    let mut notifier = Notifier::default();
    let mut wizard = Wizard::create();
    wizard.restaurant.name = "Test Diner".into();
    wizard.restaurant.address = "1 MG Road".into();
    wizard.restaurant.select_state(Some("MH"));
    wizard.restaurant.select_city("Pune");

    wizard.submit_restaurant(&api, &mut notifier).await;
    // Already on the owner step: a second restaurant submit does nothing
    assert_eq!(wizard.submit_restaurant(&api, &mut notifier).await, WizardStep::Owner);
    assert_eq!(api.calls_to("save_restaurant").len(), 1);
}

#[tokio::test]
async fn test_success_false_keeps_restaurant_step() {
    let api = FakeApi::new();
    api.reply("save_restaurant", json!({"success": false, "message": "Name already taken"}));
    let mut notifier = Notifier::default();
    let mut wizard = Wizard::create();
    wizard.restaurant.name = "Test Diner".into();
    wizard.restaurant.address = "1 MG Road".into();
    wizard.restaurant.select_state(Some("MH"));
    wizard.restaurant.select_city("Pune");

    assert_eq!(wizard.submit_restaurant(&api, &mut notifier).await, WizardStep::Restaurant);
    assert_eq!(notifier.last().unwrap().text, "Name already taken");
    assert!(!wizard.is_loading());
}

#[tokio::test]
async fn test_incomplete_restaurant_never_reaches_backend() {
    let api = FakeApi::new();
    let mut notifier = Notifier::default();
    let mut wizard = Wizard::create();
    wizard.restaurant.name = "  ".into();
    wizard.restaurant.address = "1 MG Road".into();

    assert_eq!(wizard.submit_restaurant(&api, &mut notifier).await, WizardStep::Restaurant);
    let fields: Vec<_> = wizard.errors().fields().collect();
    assert_eq!(fields, vec!["city", "name", "state"]);
    assert_eq!(api.call_count(), 0);
    assert_eq!(notifier.last().unwrap().text, "Please fix the errors above");
}

#[tokio::test]
async fn test_owner_without_email_is_blocked() {
    let api = FakeApi::new();
    let restaurant: Restaurant = serde_json::from_value(restaurant_row("r1", "ACTIVE")).unwrap();
    let mut wizard = Wizard::edit(&restaurant, Some(&Default::default()));
    let mut notifier = Notifier::default();
    wizard.owner.first_name = "Asha".into();
    wizard.owner.last_name = "Rao".into();
    wizard.owner.password = "secret1".into();

    wizard.submit_owner(&api, &mut notifier).await;
    assert_eq!(wizard.errors().len(), 1);
    assert_eq!(wizard.errors().get("email"), Some("Email is required"));
    assert_eq!(api.call_count(), 0);
}

#[tokio::test]
async fn test_owner_edit_without_password_is_an_update() {
    let api = FakeApi::new();
    api.reply("save_member", json!({"data": {"member_id": "m3"}}));
    let restaurant: Restaurant = serde_json::from_value(json!({
        "id": "r1", "name": "Test Diner", "status": "ACTIVE",
        "owner": {"member_id": "m3", "first_name": "Dev", "last_name": "Sen", "email": "dev@sr.in", "user_role": "MANAGER", "password": "hash"}
    }))
    .unwrap();
    let mut wizard = Wizard::edit(&restaurant, restaurant.owner.as_ref());
    let mut notifier = Notifier::default();

    assert_eq!(wizard.submit_owner(&api, &mut notifier).await, WizardStep::Closed);
    assert_eq!(
        api.calls_to("save_member")[0],
        json!({
            "hotel_id": "r1", "first_name": "Dev", "last_name": "Sen",
            "email": "dev@sr.in", "user_role": "MANAGER", "member_id": "m3"
        })
    );
    assert_eq!(notifier.last().unwrap().text, "Owner updated successfully!");
}

#[tokio::test]
async fn test_skip_after_create_reports_restaurant_only() {
    let api = FakeApi::new();
    api.reply("save_restaurant", json!({"success": true, "data": {"id": 17}}));
    let mut notifier = Notifier::default();
    let mut wizard = Wizard::create();
    wizard.restaurant.name = "Chai Point".into();
    wizard.restaurant.address = "MG Road".into();
    wizard.restaurant.select_state(Some("KA"));
    wizard.restaurant.select_city("Bengaluru");
    wizard.submit_restaurant(&api, &mut notifier).await;

    wizard.skip_owner();
    assert_eq!(
        wizard.outcome(),
        Some(&WizardOutcome::Saved { restaurant_id: RecordId::from("17"), owner: None })
    );
}

#[tokio::test]
async fn test_expand_fetches_detail_once() {
    let api = FakeApi::new();
    api.reply("restaurant_detail", json!({"success": true, "restaurant": restaurant_row("r1", "ACTIVE"), "users": []}))
        .reply("restaurant_detail", json!({"success": true, "restaurant": restaurant_row("r1", "ACTIVE"), "users": []}));
    let mut rows = RowExpansion::new();
    let id = RecordId::from("r1");

    for _ in 0..2 {
        if let RowAction::Fetch(ticket) = rows.expand(&id) {
            let detail = api.restaurant_detail(&id).await.ok();
            rows.finish_fetch(&id, ticket, detail);
        }
    }
    assert_eq!(api.calls_to("restaurant_detail").len(), 1);

    rows.toggle(&id);
    if let RowAction::Fetch(ticket) = rows.toggle(&id) {
        let detail = api.restaurant_detail(&id).await.ok();
        rows.finish_fetch(&id, ticket, detail);
    }
    assert_eq!(api.calls_to("restaurant_detail").len(), 2);
    assert!(rows.detail(&id).is_some());
}

#[tokio::test]
async fn test_status_toggle_updates_row_and_refreshes_detail() {
    let api = FakeApi::new();
    api.reply("list_restaurants", json!({"data": [restaurant_row("r1", "ACTIVE")], "total": 1}))
        .reply("restaurant_detail", json!({"success": true, "restaurant": restaurant_row("r1", "ACTIVE"), "users": []}))
        .reply("set_restaurant_status", json!({"success": true}))
        .reply("restaurant_detail", json!({"success": true, "restaurant": restaurant_row("r1", "INACTIVE"), "users": []}));

    let mut page = api.list_restaurants(&RestaurantQuery::new(20)).await.unwrap();
    let mut rows = RowExpansion::new();
    let id = RecordId::from("r1");
    let RowAction::Fetch(ticket) = rows.expand(&id) else {
        panic!("first expand must fetch");
    };
    rows.finish_fetch(&id, ticket, api.restaurant_detail(&id).await.ok());

    let next = page.items[0].status.toggled();
    api.set_restaurant_status(&id, next).await.unwrap();
    assert_eq!(api.calls_to("set_restaurant_status"), vec![json!({"id": "r1", "status": "INACTIVE"})]);

    assert!(apply_status(&mut page.items, &id, next));
    assert_eq!(page.items[0].status.label(), "Inactive");
    assert!(!page.items[0].controls_enabled());

    let RowAction::Fetch(ticket) = rows.refresh(&id) else {
        panic!("open row must refetch after a toggle");
    };
    rows.finish_fetch(&id, ticket, api.restaurant_detail(&id).await.ok());
    assert_eq!(rows.detail(&id).unwrap().restaurant.status, RestaurantStatus::Inactive);
}

#[test]
fn test_route_guards() {
    let anon = MemorySession::new();
    assert_eq!(resolve("/dashboard", &anon), Navigation::Redirect(Route::Login));

    let signed_in = MemorySession::with_token("tok");
    assert_eq!(resolve("/login", &signed_in), Navigation::Redirect(Route::Dashboard));
    assert_eq!(resolve("/dashboard", &signed_in), Navigation::Render(Route::Dashboard));
}
