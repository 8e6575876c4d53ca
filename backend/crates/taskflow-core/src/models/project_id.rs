//! Project identifier - a 12-byte id rendered as 24 hex characters.
//!
//! Layout: 4 big-endian bytes of creation seconds followed by 8 random
//! bytes. The string form is always 24 lowercase hex characters; parsing
//! accepts either case.
//!
//! The shape check lives here, not in the HTTP layer: handlers and the
//! store both speak `ProjectId`, so "is this a valid identifier" is a
//! capability of the id type rather than a route-level regex.

use crate::{CoreError, Result};

use std::fmt;
use std::result::Result as StdResult;
use std::str::FromStr;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const ID_BYTES: usize = 12;
const ID_HEX_LEN: usize = 2 * ID_BYTES;

/// Opaque unique identifier for a project. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectId([u8; ID_BYTES]);

impl ProjectId {
    /// Generate a fresh id: creation seconds prefix + random suffix.
    pub fn generate() -> Self {
        let mut bytes = [0u8; ID_BYTES];
        let seconds = Utc::now().timestamp() as u32;
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        let noise: [u8; 8] = rand::rng().random();
        bytes[4..].copy_from_slice(&noise);
        Self(bytes)
    }

    /// Parse a candidate string, enforcing the 24-hex-character shape.
    ///
    /// This is the validity check the API layer runs before touching the
    /// store, so malformed identifiers short-circuit without a lookup.
    #[track_caller]
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() != ID_HEX_LEN || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(CoreError::invalid_project_id(s));
        }

        let mut bytes = [0u8; ID_BYTES];
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            // chunks are guaranteed hex digits, from_str_radix cannot fail
            let pair = std::str::from_utf8(chunk)
                .map_err(|_| CoreError::invalid_project_id(s))?;
            bytes[i] = u8::from_str_radix(pair, 16)
                .map_err(|_| CoreError::invalid_project_id(s))?;
        }

        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl FromStr for ProjectId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for ProjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ProjectId::parse(&s).map_err(serde::de::Error::custom)
    }
}
