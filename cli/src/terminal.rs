//! Terminal collaborators for the login controller.
//!
//! Notifications go to stderr, navigation prints the destination URL, and the
//! session is kept in a JSON file.

#[cfg(test)]
#[path = "terminal_test.rs"]
mod terminal_test;

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use storefront::config::ClientConfig;
use storefront::{AuthSession, AuthStore, Navigator, Notifier, ToastOptions};

#[derive(Debug, thiserror::Error)]
pub enum SessionFileError {
    #[error("session file {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("session file {path} is not valid JSON: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
}

fn format_success(message: &str, options: &ToastOptions) -> String {
    match options.icon.as_deref() {
        Some(icon) => format!("{icon} {message}"),
        None => format!("✔ {message}"),
    }
}

fn format_error(message: &str) -> String {
    format!("✖ {message}")
}

/// Prints toasts to stderr.
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str, options: &ToastOptions) {
        eprintln!("{}", format_success(message, options));
    }

    fn error(&self, message: &str) {
        eprintln!("{}", format_error(message));
    }
}

/// Prints the URL of each navigation target and remembers the last one.
#[derive(Debug)]
pub struct TerminalNavigator {
    config: ClientConfig,
    last: RefCell<Option<String>>,
}

impl TerminalNavigator {
    pub fn new(config: &ClientConfig) -> Self {
        Self { config: config.clone(), last: RefCell::new(None) }
    }

    #[cfg(test)]
    pub fn last_visited(&self) -> Option<String> {
        self.last.borrow().clone()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, path: &str) {
        let url = self.config.page_url(path);
        println!("→ {url}");
        *self.last.borrow_mut() = Some(url);
    }
}

/// Keeps the session as pretty-printed JSON at `path`.
#[derive(Debug, Clone)]
pub struct FileAuthStore {
    path: PathBuf,
}

impl FileAuthStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session, `None` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionFileError`] when the file cannot be read or parsed.
    pub fn load(&self) -> Result<Option<AuthSession>, SessionFileError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SessionFileError::Io { path: self.path.clone(), source }),
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| SessionFileError::Json { path: self.path.clone(), source })
    }

    /// Write `session` to the file, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionFileError`] when serialization or the write fails.
    pub fn save(&self, session: &AuthSession) -> Result<(), SessionFileError> {
        let rendered = serde_json::to_string_pretty(session)
            .map_err(|source| SessionFileError::Json { path: self.path.clone(), source })?;
        std::fs::write(&self.path, rendered).map_err(|source| SessionFileError::Io { path: self.path.clone(), source })
    }
}

impl AuthStore for FileAuthStore {
    fn set_auth(&self, session: &AuthSession) {
        match self.save(session) {
            Ok(()) => tracing::debug!(path = %self.path.display(), "session saved"),
            Err(e) => tracing::warn!(error = %e, "failed to save session"),
        }
    }
}
