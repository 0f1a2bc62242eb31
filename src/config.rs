/// Run configuration. `Config::default()` is the fixed fixture set.
use std::path::PathBuf;

use crate::timestamp::WINDOW_SECS;

/// Where account files go when no override is given.
pub const DEFAULT_OUTPUT_DIR: &str = "./backend-simulation/data";

/// Usernames that get one account file each, in write order.
pub const USERNAMES: [&str; 5] = ["johndoe", "janedoe", "anon1", "gradippp", "joemama"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output_dir: PathBuf,
    pub usernames: Vec<String>,
    /// Length of the `created_at` window, in seconds, ending at run start.
    pub window_secs: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            usernames: USERNAMES.iter().map(|s| s.to_string()).collect(),
            window_secs: WINDOW_SECS,
        }
    }
}

impl Config {
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }
}
