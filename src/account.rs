/// Account records and their generation.
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::timestamp::{CreationWindow, format_iso8601};

/// Placeholder password written into every record.
pub const PLACEHOLDER_PASSWORD: &str = "12345678";

/// One mock user, in the field order it is serialized with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRecord {
    pub id: Uuid,
    pub username: String,
    pub password: String,
    pub created_at: String,
    pub session_tokens: Vec<String>,
    pub statistics: u64,
}

impl AccountRecord {
    pub fn new(id: Uuid, username: impl Into<String>, created_at: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: PLACEHOLDER_PASSWORD.to_string(),
            created_at: created_at.into(),
            session_tokens: Vec::new(),
            statistics: 0,
        }
    }

    /// Fresh v4 id plus an independent timestamp draw from `window`.
    pub fn generate<R: Rng>(username: &str, window: &CreationWindow, rng: &mut R) -> Self {
        let created_at = format_iso8601(window.sample(rng));
        Self::new(Uuid::new_v4(), username, created_at)
    }

    /// `account.<id>.json`; the id here and in the body are the same value.
    pub fn file_name(&self) -> String {
        format!("account.{}.json", self.id)
    }
}

/// One record per username, in input order.
pub fn generate_all<S: AsRef<str>, R: Rng>(
    usernames: &[S],
    window: &CreationWindow,
    rng: &mut R,
) -> Vec<AccountRecord> {
    usernames
        .iter()
        .map(|name| AccountRecord::generate(name.as_ref(), window, rng))
        .collect()
}
