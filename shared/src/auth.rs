use tracing::warn;

/// Result of comparing a prompt entry against the shared secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authorization {
    Granted,
    Denied,
    Cancelled,
}

/// Static shared secret guarding unlock and reset.
///
/// The key ships inside the client bundle, so anyone who reads the page
/// source has it. It keeps casual users from toggling the panel and nothing
/// more.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `None` means the prompt was dismissed.
    pub fn check(&self, entry: Option<&str>) -> Authorization {
        match entry {
            None => Authorization::Cancelled,
            Some(key) if key == self.0 => Authorization::Granted,
            Some(_) => {
                warn!("Rejected incorrect secret key");
                Authorization::Denied
            }
        }
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretKey(..)")
    }
}
