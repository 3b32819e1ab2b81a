//! Auth-state store seam.

use crate::envelope::AuthSession;

/// Holder of the current authenticated identity.
///
/// Implementations decide where the session lives (a reactive signal plus
/// localStorage in the browser, a JSON file in the terminal). Persistence
/// failures are the store's own concern and are not reported back.
pub trait AuthStore {
    fn set_auth(&self, session: &AuthSession);
}
