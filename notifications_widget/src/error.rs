use thiserror::Error;

/// Raised when a widget is configured with a theme outside the built-in
/// allow-list. Carries the rejected value verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown theme: {0}")]
pub struct UnsupportedThemeError(pub String);

impl UnsupportedThemeError {
    pub fn theme(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    UnsupportedTheme(#[from] UnsupportedThemeError),
    #[error("failed to encode widget payload: {0}")]
    Encoding(#[from] serde_json::Error),
}
