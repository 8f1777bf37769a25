//! Room model.

use serde::{Deserialize, Serialize};

/// Tokens that mark a room as having power outlets.
const TRUTHY_TOKENS: [&str; 7] = ["1", "true", "yes", "y", "on", "○", "有"];

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Unique identifier of the room within the room list.
    pub id: String,
    /// Whether the room has power outlets for the audience.
    #[serde(default)]
    pub has_power: bool,
}

impl Room {
    /// Creates a room without power outlets.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            has_power: false,
        }
    }

    /// Sets the power-outlet flag.
    pub fn with_power(mut self, has_power: bool) -> Self {
        self.has_power = has_power;
        self
    }

    /// Interprets a free-text power-outlet flag.
    ///
    /// Tokens are compared case-insensitively after trimming. Anything that
    /// is not a known truthy token, including a missing value, is `false`.
    ///
    /// # Example
    ///
    /// ```
    /// use room_availability::models::Room;
    ///
    /// assert!(Room::parse_power_flag(Some(" Yes ")));
    /// assert!(!Room::parse_power_flag(Some("no")));
    /// assert!(!Room::parse_power_flag(None));
    /// ```
    pub fn parse_power_flag(token: Option<&str>) -> bool {
        token
            .map(|t| t.trim().to_lowercase())
            .is_some_and(|t| TRUTHY_TOKENS.contains(&t.as_str()))
    }
}
