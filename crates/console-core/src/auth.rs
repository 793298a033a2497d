//! Auth Flows
//!
//! Login, logout and the three-step password recovery. Each flow returns
//! the text the page shows on failure; the pages own navigation.

use crate::api::{ConsoleApi, LoginSession};
use crate::error::ApiError;
use crate::session::SessionStore;
use crate::validation;

/// Error text of a failed login
pub fn login_error_message(error: &ApiError) -> String {
    if let Some(message) = error.backend_message() {
        return message.to_string();
    }
    if error.is_transport() {
        "Network error. Please check your connection.".to_string()
    } else {
        "Invalid credentials. Please check your email and password.".to_string()
    }
}

/// Validate, authenticate and start the session
pub async fn sign_in<A>(
    api: &A,
    session: &dyn SessionStore,
    email: &str,
    password: &str,
) -> Result<LoginSession, String>
where
    A: ConsoleApi + ?Sized,
{
    validation::validate_login(email, password).map_err(str::to_string)?;
    match api.login(email, password).await {
        Ok(login) => {
            session.begin(&login);
            log::info!("[AUTH] signed in as {}", email);
            Ok(login)
        }
        Err(e) => {
            log::warn!("[AUTH] login failed: {}", e);
            Err(login_error_message(&e))
        }
    }
}

pub fn sign_out(session: &dyn SessionStore) {
    session.clear();
    log::info!("[AUTH] signed out");
}

/// In-memory state carried between the recovery pages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RecoverySession {
    pub email: String,
    pub otp_id: Option<String>,
    pub reset_token: Option<String>,
}

impl RecoverySession {
    pub fn can_reset(&self) -> bool {
        self.reset_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

/// Ask for an OTP; on success the verify page takes over
pub async fn request_otp<A>(api: &A, email: &str) -> Result<(RecoverySession, String), String>
where
    A: ConsoleApi + ?Sized,
{
    validation::validate_login_email(email).map_err(str::to_string)?;
    match api.forgot_password(email).await {
        Ok(challenge) => {
            let recovery = RecoverySession {
                email: email.to_string(),
                otp_id: Some(challenge.otp_id.to_string()),
                reset_token: None,
            };
            let message = challenge
                .message
                .unwrap_or_else(|| "OTP sent successfully to your email!".to_string());
            Ok((recovery, message))
        }
        Err(e) => Err(e.user_message("Unable to process request. Please try again.")),
    }
}

/// Request a fresh OTP; the new id replaces the old one
pub async fn resend_otp<A>(api: &A, recovery: &mut RecoverySession) -> Result<String, String>
where
    A: ConsoleApi + ?Sized,
{
    match api.forgot_password(&recovery.email).await {
        Ok(challenge) => {
            recovery.otp_id = Some(challenge.otp_id.to_string());
            Ok(challenge.message.unwrap_or_else(|| "OTP resent successfully!".to_string()))
        }
        Err(e) => Err(e.user_message("Failed to resend OTP")),
    }
}

pub async fn verify_otp<A>(api: &A, recovery: &mut RecoverySession, code: &str) -> Result<String, String>
where
    A: ConsoleApi + ?Sized,
{
    validation::validate_otp(code, recovery.otp_id.as_deref()).map_err(str::to_string)?;
    let otp_id = recovery.otp_id.clone().unwrap_or_default();
    match api.verify_otp(&otp_id, code).await {
        Ok(verified) => {
            recovery.reset_token = Some(verified.reset_token);
            Ok(verified.message.unwrap_or_else(|| "OTP verified successfully!".to_string()))
        }
        Err(e) => Err(e.user_message("Verification failed")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetFailure {
    /// No verified recovery session: start over from forgot-password
    SessionExpired,
    Rejected(String),
}

impl ResetFailure {
    pub fn message(&self) -> &str {
        match self {
            ResetFailure::SessionExpired => "Invalid reset session. Please verify OTP again.",
            ResetFailure::Rejected(message) => message,
        }
    }
}

pub async fn reset_password<A>(
    api: &A,
    recovery: Option<&RecoverySession>,
    password: &str,
    confirmation: &str,
) -> Result<String, ResetFailure>
where
    A: ConsoleApi + ?Sized,
{
    let Some(token) = recovery.and_then(|r| r.reset_token.as_deref()).filter(|t| !t.is_empty()) else {
        return Err(ResetFailure::SessionExpired);
    };
    validation::validate_new_password(password, confirmation)
        .map_err(|m| ResetFailure::Rejected(m.to_string()))?;
    match api.reset_password(token, password).await {
        Ok(message) => Ok(message.unwrap_or_else(|| "Password reset successfully!".to_string())),
        Err(e) => Err(ResetFailure::Rejected(e.user_message("Password reset failed"))),
    }
}

/// Resend lock of the verify page, ticked once per second. The length
/// comes from `ConsoleConfig::otp_resend_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtpCountdown {
    remaining: u32,
}

impl OtpCountdown {
    pub fn start(secs: u32) -> Self {
        Self { remaining: secs }
    }

    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn can_resend(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySession;
    use crate::testing::FakeApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_sign_in_stores_session() {
        let api = FakeApi::new();
        api.reply("login", json!({"data": {"access_token": "tok", "user": {"first_name": "Ria"}}}));
        let session = MemorySession::new();

        sign_in(&api, &session, "admin@resto.in", "password1").await.unwrap();
        assert_eq!(session.token().as_deref(), Some("tok"));
        assert_eq!(api.calls_to("login")[0]["type"], "super");

        sign_out(&session);
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_sign_in_rejects_before_request() {
        let api = FakeApi::new();
        let session = MemorySession::new();
        let err = sign_in(&api, &session, "admin@resto.in", "short").await.unwrap_err();
        assert_eq!(err, "Password must be at least 8 characters long");
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_sign_in_without_token() {
        let api = FakeApi::new();
        api.reply("login", json!({"data": {}}));
        let session = MemorySession::new();
        let err = sign_in(&api, &session, "admin@resto.in", "password1").await.unwrap_err();
        assert_eq!(err, "Login failed: No access token received");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_login_error_text() {
        assert_eq!(
            login_error_message(&ApiError::Transport("refused".into())),
            "Network error. Please check your connection."
        );
        assert_eq!(
            login_error_message(&ApiError::Status { status: 401, message: None }),
            "Invalid credentials. Please check your email and password."
        );
        assert_eq!(
            login_error_message(&ApiError::Status { status: 403, message: Some("Account locked".into()) }),
            "Account locked"
        );
    }

    #[tokio::test]
    async fn test_recovery_flow() {
        let api = FakeApi::new();
        api.reply("forgot_password", json!({"otp_id": 41, "message": "OTP sent"}))
            .reply("forgot_password", json!({"otp_id": 42}))
            .reply("verify_otp", json!({"message": "Verified", "reset_token": "rt-1"}))
            .reply("reset_password", json!({}));

        let (mut recovery, message) = request_otp(&api, "admin@resto.in").await.unwrap();
        assert_eq!(message, "OTP sent");
        assert_eq!(recovery.otp_id.as_deref(), Some("41"));

        assert_eq!(resend_otp(&api, &mut recovery).await.unwrap(), "OTP resent successfully!");
        assert_eq!(recovery.otp_id.as_deref(), Some("42"));

        assert_eq!(
            verify_otp(&api, &mut recovery, "12a456").await.unwrap_err(),
            "Please enter complete 6-digit code"
        );
        verify_otp(&api, &mut recovery, "123456").await.unwrap();
        assert_eq!(api.calls_to("verify_otp")[0], json!({"otp_id": "42", "otp": "123456"}));
        assert!(recovery.can_reset());

        let done = reset_password(&api, Some(&recovery), "newpass", "newpass").await.unwrap();
        assert_eq!(done, "Password reset successfully!");
    }

    #[tokio::test]
    async fn test_reset_without_session() {
        let api = FakeApi::new();
        let failure = reset_password(&api, None, "newpass", "newpass").await.unwrap_err();
        assert_eq!(failure, ResetFailure::SessionExpired);
        assert_eq!(failure.message(), "Invalid reset session. Please verify OTP again.");

        let recovery = RecoverySession { reset_token: Some("rt".into()), ..Default::default() };
        let failure = reset_password(&api, Some(&recovery), "newpass", "other").await.unwrap_err();
        assert_eq!(failure.message(), "Passwords do not match");
        assert_eq!(api.call_count(), 0);
    }

    #[test]
    fn test_countdown() {
        let mut countdown = OtpCountdown::start(2);
        assert!(!countdown.can_resend());
        countdown.tick();
        assert_eq!(countdown.tick(), 0);
        assert_eq!(countdown.tick(), 0);
        assert!(countdown.can_resend());
        let cooldown = crate::ConsoleConfig::default().otp_resend_secs;
        assert_eq!(OtpCountdown::start(cooldown).remaining(), 60);
    }
}
