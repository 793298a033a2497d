//! Scripted ConsoleApi for unit tests
//!
//! Replies are raw JSON bodies decoded through the same envelopes as the
//! HTTP client, so success-flag handling is exercised too. Every call is
//! recorded with the body the HTTP client would have sent.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::api::wire::{
    CurrentUserEnvelope, DetailEnvelope, ListEnvelope, LoginEnvelope, MessageBody, RestaurantStatusRequest,
    SaveEnvelope,
};
use crate::api::{ConsoleApi, LoginSession, MemberPayload, OtpChallenge, OtpVerified, RestaurantPayload, SavedRecord};
use crate::domain::{AdminUser, Member, RecordId, Restaurant, RestaurantDetail, RestaurantStatus};
use crate::error::{ApiError, ApiResult};
use crate::listing::{MemberQuery, Page, RestaurantQuery};

#[derive(Default)]
pub(crate) struct FakeApi {
    replies: RefCell<HashMap<&'static str, VecDeque<ApiResult<Value>>>>,
    calls: RefCell<Vec<(&'static str, Value)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response body for `op`
    pub fn reply(&self, op: &'static str, body: Value) -> &Self {
        self.replies.borrow_mut().entry(op).or_default().push_back(Ok(body));
        self
    }

    pub fn fail(&self, op: &'static str, error: ApiError) -> &Self {
        self.replies.borrow_mut().entry(op).or_default().push_back(Err(error));
        self
    }

    /// Request bodies sent to `op`, oldest first
    pub fn calls_to(&self, op: &str) -> Vec<Value> {
        self.calls.borrow().iter().filter(|(o, _)| *o == op).map(|(_, v)| v.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn answer<T: DeserializeOwned>(&self, op: &'static str, request: impl Serialize) -> ApiResult<T> {
        let request = serde_json::to_value(request)?;
        self.calls.borrow_mut().push((op, request));
        let reply = self
            .replies
            .borrow_mut()
            .get_mut(op)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(ApiError::Transport(format!("no reply scripted for {op}"))))?;
        Ok(serde_json::from_value(reply)?)
    }
}

/// Bodies of the fire-and-forget endpoints only matter when they say `success: false`
fn unit(body: Value) -> ApiResult<()> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        let message = body.get("message").and_then(Value::as_str).map(str::to_string);
        return Err(ApiError::Rejected { message });
    }
    Ok(())
}

#[async_trait(?Send)]
impl ConsoleApi for FakeApi {
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginSession> {
        let envelope: LoginEnvelope =
            self.answer("login", json!({"email": email, "password": password, "type": "super"}))?;
        envelope.into_session()
    }

    async fn forgot_password(&self, email: &str) -> ApiResult<OtpChallenge> {
        self.answer("forgot_password", json!({"email": email}))
    }

    async fn verify_otp(&self, otp_id: &str, otp: &str) -> ApiResult<OtpVerified> {
        self.answer("verify_otp", json!({"otp_id": otp_id, "otp": otp}))
    }

    async fn reset_password(&self, reset_token: &str, new_password: &str) -> ApiResult<Option<String>> {
        let reply: Option<MessageBody> = self.answer(
            "reset_password",
            json!({"reset_token": reset_token, "new_password": new_password}),
        )?;
        Ok(reply.and_then(|r| r.message))
    }

    async fn current_user(&self) -> ApiResult<AdminUser> {
        let envelope: CurrentUserEnvelope = self.answer("current_user", Value::Null)?;
        Ok(envelope.data.user)
    }

    async fn list_restaurants(&self, query: &RestaurantQuery) -> ApiResult<Page<Restaurant>> {
        let envelope: ListEnvelope<Restaurant> = self.answer("list_restaurants", query)?;
        Ok(envelope.into_page(query.page, query.limit))
    }

    async fn restaurant_detail(&self, id: &RecordId) -> ApiResult<RestaurantDetail> {
        let envelope: DetailEnvelope = self.answer("restaurant_detail", id)?;
        envelope.into_detail()
    }

    async fn save_restaurant(&self, payload: &RestaurantPayload) -> ApiResult<SavedRecord> {
        let envelope: SaveEnvelope = self.answer("save_restaurant", payload)?;
        envelope.into_saved()
    }

    async fn set_restaurant_status(&self, id: &RecordId, status: RestaurantStatus) -> ApiResult<()> {
        unit(self.answer("set_restaurant_status", RestaurantStatusRequest { id, status })?)
    }

    async fn delete_restaurant(&self, id: &RecordId) -> ApiResult<()> {
        unit(self.answer("delete_restaurant", id)?)
    }

    async fn save_member(&self, payload: &MemberPayload) -> ApiResult<SavedRecord> {
        let envelope: SaveEnvelope = self.answer("save_member", payload)?;
        envelope.into_saved()
    }

    async fn list_members(&self, query: &MemberQuery) -> ApiResult<Page<Member>> {
        let envelope: ListEnvelope<Member> = self.answer("list_members", query)?;
        Ok(envelope.into_page(query.page, query.limit))
    }

    async fn set_member_active(&self, user_id: &RecordId, active: bool) -> ApiResult<()> {
        unit(self.answer("set_member_active", json!({"user_id": user_id, "status": active}))?)
    }
}
