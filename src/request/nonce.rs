//! Authenticity token synthesis.
//!
//! A real browser session is issued its token by the host; here the token
//! is derived locally from the same inputs the host's primitive would use,
//! so the handler's check accepts it. The primitive is treated as opaque:
//! same action string in the same session context, same token.

use sha2::{Digest, Sha256};

/// Length of the derived token in hex characters.
const TOKEN_LEN: usize = 10;

/// Host nonce-generation primitive.
pub trait NonceProvider {
    /// Derive the token for an action string.
    fn create(&self, action: &str) -> String;

    /// Check a presented token against an action string.
    fn verify(&self, token: &str, action: &str) -> bool {
        !token.is_empty() && self.create(action) == token
    }
}

/// Default provider: SHA-256 over the session key and action string,
/// truncated to the token length the handler expects.
#[derive(Clone, Debug)]
pub struct SessionNonce {
    session_key: String,
}

impl SessionNonce {
    pub fn new(session_key: impl Into<String>) -> Self {
        Self {
            session_key: session_key.into(),
        }
    }
}

impl NonceProvider for SessionNonce {
    fn create(&self, action: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.session_key.as_bytes());
        hasher.update(b"|");
        hasher.update(action.as_bytes());

        let digest = hex::encode(hasher.finalize());
        digest[..TOKEN_LEN].to_string()
    }
}
