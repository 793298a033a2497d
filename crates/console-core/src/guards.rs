//! Routes and Guards
//!
//! Every route is either public (auth pages) or protected (console pages).
//! Guards look only at token presence; a rejected token is handled where
//! the 401 lands.

use crate::session::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    ForgotPassword,
    VerifyOtp,
    ResetPassword,
    Dashboard,
    Restaurants,
    Users,
    Analytics,
    Settings,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Login,
        Route::ForgotPassword,
        Route::VerifyOtp,
        Route::ResetPassword,
        Route::Dashboard,
        Route::Restaurants,
        Route::Users,
        Route::Analytics,
        Route::Settings,
    ];

    /// Sidebar entries
    pub const NAV: [Route; 3] = [Route::Dashboard, Route::Restaurants, Route::Users];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::ForgotPassword => "/forgot-password",
            Route::VerifyOtp => "/verify-otp",
            Route::ResetPassword => "/reset-password",
            Route::Dashboard => "/dashboard",
            Route::Restaurants => "/restaurants",
            Route::Users => "/users",
            Route::Analytics => "/analytics",
            Route::Settings => "/settings",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::ForgotPassword => "Forgot Password",
            Route::VerifyOtp => "Verify OTP",
            Route::ResetPassword => "Reset Password",
            Route::Dashboard => "Dashboard",
            Route::Restaurants => "Restaurants",
            Route::Users => "Users",
            Route::Analytics => "Analytics",
            Route::Settings => "Settings",
        }
    }

    /// Exact match, ignoring a trailing slash and query string
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|r| r.path() == path)
    }

    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login | Route::ForgotPassword | Route::VerifyOtp | Route::ResetPassword
        )
    }

    pub fn guard(&self) -> &'static dyn RouteGuard {
        if self.is_public() {
            &RedirectIfAuthenticated
        } else {
            &RequireAuth
        }
    }
}

pub trait RouteGuard {
    /// Where to send the visitor instead, if anywhere
    fn redirect(&self, session: &dyn SessionStore) -> Option<Route>;
}

/// Protected pages: no token means the login page
pub struct RequireAuth;

impl RouteGuard for RequireAuth {
    fn redirect(&self, session: &dyn SessionStore) -> Option<Route> {
        (!session.is_authenticated()).then_some(Route::Login)
    }
}

/// Auth pages: a signed-in admin goes straight to the dashboard
pub struct RedirectIfAuthenticated;

impl RouteGuard for RedirectIfAuthenticated {
    fn redirect(&self, session: &dyn SessionStore) -> Option<Route> {
        session.is_authenticated().then_some(Route::Dashboard)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    /// Replace the current location with this route
    Redirect(Route),
}

impl Navigation {
    pub fn route(&self) -> Route {
        match self {
            Navigation::Render(route) | Navigation::Redirect(route) => *route,
        }
    }
}

/// Resolve a location to the page that should render. `/` and unknown
/// paths fall through to the login page and its guard.
pub fn resolve(path: &str, session: &dyn SessionStore) -> Navigation {
    let requested = Route::from_path(path);
    let mut route = requested.unwrap_or(Route::Login);
    let mut redirected = requested.is_none();
    // Guards redirect between the two route classes, so this settles in one hop
    for _ in 0..2 {
        match route.guard().redirect(session) {
            Some(target) => {
                route = target;
                redirected = true;
            }
            None => break,
        }
    }
    if redirected {
        Navigation::Redirect(route)
    } else {
        Navigation::Render(route)
    }
}
