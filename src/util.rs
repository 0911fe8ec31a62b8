//! Shared utilities

use std::fmt;

/// A string wrapper that masks its contents in Debug/Display output.
/// Keeps provider API keys out of logs and error messages.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    /// Access the raw secret value (for the authorization header)
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self(s)
    }
}
