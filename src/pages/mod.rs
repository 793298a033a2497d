//! Pages
//!
//! One component per route.

mod auth_card;
mod dashboard;
mod forgot_password;
mod login;
mod placeholder;
mod reset_password;
mod restaurants;
mod users;
mod verify_otp;

pub use dashboard::DashboardPage;
pub use forgot_password::ForgotPasswordPage;
pub use login::LoginPage;
pub use placeholder::{AnalyticsPage, SettingsPage};
pub use reset_password::ResetPasswordPage;
pub use restaurants::RestaurantsPage;
pub use users::UsersPage;
pub use verify_otp::VerifyOtpPage;
