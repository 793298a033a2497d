//! REST Backend Bindings
//!
//! `ConsoleApi` is the seam every view talks through. `HttpConsoleApi`
//! implements it over reqwest; tests substitute an in-memory fake.

mod http;
pub(crate) mod wire;

pub use http::HttpConsoleApi;
pub use wire::{
    LoginSession, MemberPayload, OtpChallenge, OtpVerified, RestaurantPayload, SavedRecord,
};

use async_trait::async_trait;

use crate::domain::{AdminUser, Member, RecordId, Restaurant, RestaurantDetail, RestaurantStatus};
use crate::error::ApiResult;
use crate::listing::{MemberQuery, Page, RestaurantQuery};

/// Endpoint paths, relative to the configured API origin
pub mod paths {
    pub const LOGIN: &str = "/api/v1/auth/login-email";
    pub const FORGOT_PASSWORD: &str = "/api/v1/auth/forgot-password";
    pub const VERIFY_OTP: &str = "/api/v1/auth/verify-auth-otp";
    pub const RESET_PASSWORD: &str = "/api/v1/auth/reset-password";
    pub const CURRENT_USER: &str = "/api/v1/user/";
    pub const RESTAURANTS: &str = "/api/v1/restaurant/all";
    pub const RESTAURANT: &str = "/api/v1/restaurant";
    pub const RESTAURANT_SAVE: &str = "/api/v1/restaurant/add";
    pub const RESTAURANT_STATUS: &str = "/api/v1/restaurant/status";
    pub const MEMBER_SAVE: &str = "/api/v1/member/add";
    pub const MEMBERS: &str = "/api/v1/member/all";
    pub const MEMBER_DISABLE: &str = "/api/v1/member/disable";
}

/// Operations the console performs against the backend
///
/// Futures are `?Send`: in the browser every request runs on the single
/// UI thread.
#[async_trait(?Send)]
pub trait ConsoleApi {
    /// Super-admin login; does not touch the session store
    async fn login(&self, email: &str, password: &str) -> ApiResult<LoginSession>;

    async fn forgot_password(&self, email: &str) -> ApiResult<OtpChallenge>;

    async fn verify_otp(&self, otp_id: &str, otp: &str) -> ApiResult<OtpVerified>;

    /// Returns the backend's confirmation message, if any
    async fn reset_password(&self, reset_token: &str, new_password: &str) -> ApiResult<Option<String>>;

    async fn current_user(&self) -> ApiResult<AdminUser>;

    async fn list_restaurants(&self, query: &RestaurantQuery) -> ApiResult<Page<Restaurant>>;

    async fn restaurant_detail(&self, id: &RecordId) -> ApiResult<RestaurantDetail>;

    /// Create, or update when `restaurant_id` is set
    async fn save_restaurant(&self, payload: &RestaurantPayload) -> ApiResult<SavedRecord>;

    async fn set_restaurant_status(&self, id: &RecordId, status: RestaurantStatus) -> ApiResult<()>;

    async fn delete_restaurant(&self, id: &RecordId) -> ApiResult<()>;

    /// POST when creating, PUT when `member_id` is set
    async fn save_member(&self, payload: &MemberPayload) -> ApiResult<SavedRecord>;

    async fn list_members(&self, query: &MemberQuery) -> ApiResult<Page<Member>>;

    async fn set_member_active(&self, user_id: &RecordId, active: bool) -> ApiResult<()>;
}
