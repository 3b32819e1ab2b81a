//! Static route table and navigation seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every host (web router, terminal) maps the same paths to its own views, so
//! the login flow only ever deals in path strings.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Named destinations reachable from the login flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    ForgotPassword,
    Home,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Login, Route::ForgotPassword, Route::Home];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::ForgotPassword => "/forgot-password",
            Self::Home => "/",
        }
    }

    /// Look up the route for `path`, ignoring any query string or trailing `/`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

/// Programmatic navigation to a path.
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Return `candidate` if it is safe to redirect to after login.
///
/// Only same-origin absolute paths are accepted: they must start with a single
/// `/`, and may not contain a backslash or a scheme.
#[must_use]
pub fn sanitize_redirect(candidate: Option<&str>) -> Option<String> {
    let path = candidate?.trim();
    if !path.starts_with('/') || path.starts_with("//") {
        return None;
    }
    if path.contains('\\') || path.contains("://") || path.chars().any(char::is_control) {
        return None;
    }
    // Never bounce straight back to the login form.
    if Route::from_path(path) == Some(Route::Login) {
        return None;
    }
    Some(path.to_owned())
}

/// Where to go after a successful login: the requested page or home.
#[must_use]
pub fn landing_path(redirect: Option<&str>) -> String {
    sanitize_redirect(redirect).unwrap_or_else(|| Route::Home.path().to_owned())
}
