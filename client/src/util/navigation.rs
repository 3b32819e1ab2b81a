//! Router-backed navigation for the login flow.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos_router::NavigateOptions;
use storefront::Navigator;

/// Adapts a `leptos_router` navigate function to [`Navigator`].
#[derive(Clone)]
pub struct RouterNavigator<F> {
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }
}

/// Redirect target from the `redirect` query parameter, if usable.
#[must_use]
pub fn redirect_param(raw: Option<String>) -> Option<String> {
    storefront::routes::sanitize_redirect(raw.as_deref())
}
