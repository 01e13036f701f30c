//! Parsing of `Authorization: Basic ...` header values.

use base64::{engine::general_purpose::STANDARD, Engine};

/// A username/password pair decoded from a basic-auth header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    /// Decodes `Basic base64(username:password)`. The scheme name is matched
    /// case-insensitively; anything malformed yields `None`.
    pub fn parse(header: &str) -> Option<Self> {
        let (scheme, encoded) = header.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        // passwords may contain ':', usernames may not
        let (username, password) = decoded.split_once(':')?;

        Some(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }

    pub fn encode(username: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
    }
}
