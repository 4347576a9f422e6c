//! Share tokens.

use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Random bytes per token; rendered as twice as many hex chars.
pub const SHARE_TOKEN_BYTES: usize = 32;

/// Fresh token from the thread-local CSPRNG. Collisions are not retried.
#[must_use]
pub fn new_share_token() -> String {
    let mut bytes = [0u8; SHARE_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Public path under which a shared analysis is served.
#[must_use]
pub fn share_path(token: &str) -> String {
    format!("/share/{token}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub share_token: String,
    pub share_url: String,
}

impl ShareLink {
    #[must_use]
    pub fn new(share_token: String) -> Self {
        let share_url = share_path(&share_token);
        Self {
            share_token,
            share_url,
        }
    }
}
