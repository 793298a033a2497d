//! reqwest-backed ConsoleApi
//!
//! Every request carries the stored bearer token when one exists. Non-2xx
//! responses become `ApiError::Status` with the backend's `message`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::wire::{
    CurrentUserEnvelope, DetailEnvelope, EmailRequest, ListEnvelope, LoginEnvelope, LoginRequest,
    MemberStatusRequest, MessageBody, ResetPasswordRequest, RestaurantStatusRequest, SaveEnvelope,
    VerifyOtpRequest,
};
use super::{paths, ConsoleApi, LoginSession, MemberPayload, OtpChallenge, OtpVerified, RestaurantPayload, SavedRecord};
use crate::config::ConsoleConfig;
use crate::domain::{AdminUser, Member, RecordId, Restaurant, RestaurantDetail, RestaurantStatus};
use crate::error::{ApiError, ApiResult};
use crate::listing::{MemberQuery, Page, RestaurantQuery};
use crate::session::SessionStore;

/// Characters escaped when an id is spliced into a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ').add(b'"').add(b'#').add(b'%').add(b'/')
    .add(b'<').add(b'>').add(b'?').add(b'`').add(b'{').add(b'}');

/// Login type the console authenticates as
const SUPER_ADMIN: &str = "super";

pub struct HttpConsoleApi<S> {
    config: ConsoleConfig,
    client: Client,
    session: S,
}

impl<S: SessionStore> HttpConsoleApi<S> {
    pub fn new(config: ConsoleConfig, session: S) -> Self {
        Self::with_client(config, session, Client::new())
    }

    pub fn with_client(config: ConsoleConfig, session: S, client: Client) -> Self {
        Self { config, client, session }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.config.endpoint(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn record_path(base: &str, id: &RecordId) -> String {
        format!("{}/{}", base, utf8_percent_encode(id.as_str(), PATH_SEGMENT))
    }

    /// Send and return the raw body of a 2xx response
    async fn send_raw(&self, builder: RequestBuilder) -> ApiResult<String> {
        let response = builder.send().await.map_err(|e| {
            log::warn!("[API] transport failure: {}", e);
            ApiError::from(e)
        })?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<MessageBody>(&body)
                .ok()
                .and_then(|b| b.message);
            log::warn!("[API] {} -> {} {:?}", url, status.as_u16(), message);
            return Err(ApiError::Status { status: status.as_u16(), message });
        }
        log::debug!("[API] {} -> {}", url, status.as_u16());
        Ok(body)
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let body = self.send_raw(builder).await?;
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(body)?)
    }

    /// For endpoints whose body is irrelevant unless it says `success: false`
    async fn send_unit(&self, builder: RequestBuilder) -> ApiResult<()> {
        let body = self.send_raw(builder).await?;
        let value: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            let message = value.get("message").and_then(Value::as_str).map(str::to_string);
            return Err(ApiError::Rejected { message });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl<S: SessionStore> ConsoleApi for HttpConsoleApi<S> {
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginSession> {
        let body = LoginRequest { email, password, kind: SUPER_ADMIN };
        let envelope: LoginEnvelope = self
            .send_json(self.request(Method::POST, paths::LOGIN).json(&body))
            .await?;
        envelope.into_session()
    }

    async fn forgot_password(&self, email: &str) -> ApiResult<OtpChallenge> {
        let body = EmailRequest { email };
        self.send_json(self.request(Method::POST, paths::FORGOT_PASSWORD).json(&body)).await
    }

    async fn verify_otp(&self, otp_id: &str, otp: &str) -> ApiResult<OtpVerified> {
        let body = VerifyOtpRequest { otp_id, otp };
        self.send_json(self.request(Method::POST, paths::VERIFY_OTP).json(&body)).await
    }

    async fn reset_password(&self, reset_token: &str, new_password: &str) -> ApiResult<Option<String>> {
        let body = ResetPasswordRequest { reset_token, new_password };
        let reply: Option<MessageBody> = self
            .send_json(self.request(Method::POST, paths::RESET_PASSWORD).json(&body))
            .await?;
        Ok(reply.and_then(|r| r.message))
    }

    async fn current_user(&self) -> ApiResult<AdminUser> {
        let envelope: CurrentUserEnvelope = self
            .send_json(self.request(Method::GET, paths::CURRENT_USER))
            .await?;
        Ok(envelope.data.user)
    }

    async fn list_restaurants(&self, query: &RestaurantQuery) -> ApiResult<Page<Restaurant>> {
        let envelope: ListEnvelope<Restaurant> = self
            .send_json(self.request(Method::GET, paths::RESTAURANTS).query(query))
            .await?;
        Ok(envelope.into_page(query.page, query.limit))
    }

    async fn restaurant_detail(&self, id: &RecordId) -> ApiResult<RestaurantDetail> {
        let path = Self::record_path(paths::RESTAURANT, id);
        let envelope: DetailEnvelope = self.send_json(self.request(Method::GET, &path)).await?;
        envelope.into_detail()
    }

    async fn save_restaurant(&self, payload: &RestaurantPayload) -> ApiResult<SavedRecord> {
        let envelope: SaveEnvelope = self
            .send_json(self.request(Method::POST, paths::RESTAURANT_SAVE).json(payload))
            .await?;
        envelope.into_saved()
    }

    async fn set_restaurant_status(&self, id: &RecordId, status: RestaurantStatus) -> ApiResult<()> {
        let body = RestaurantStatusRequest { id, status };
        self.send_unit(self.request(Method::PUT, paths::RESTAURANT_STATUS).json(&body)).await
    }

    async fn delete_restaurant(&self, id: &RecordId) -> ApiResult<()> {
        let path = Self::record_path(paths::RESTAURANT, id);
        self.send_unit(self.request(Method::DELETE, &path)).await
    }

    async fn save_member(&self, payload: &MemberPayload) -> ApiResult<SavedRecord> {
        let method = if payload.member_id.is_some() { Method::PUT } else { Method::POST };
        let envelope: SaveEnvelope = self
            .send_json(self.request(method, paths::MEMBER_SAVE).json(payload))
            .await?;
        envelope.into_saved()
    }

    async fn list_members(&self, query: &MemberQuery) -> ApiResult<Page<Member>> {
        let envelope: ListEnvelope<Member> = self
            .send_json(self.request(Method::GET, paths::MEMBERS).query(query))
            .await?;
        Ok(envelope.into_page(query.page, query.limit))
    }

    async fn set_member_active(&self, user_id: &RecordId, active: bool) -> ApiResult<()> {
        let body = MemberStatusRequest { user_id, status: active };
        self.send_unit(self.request(Method::PUT, paths::MEMBER_DISABLE).json(&body)).await
    }
}
