use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length of a place name, in characters
pub const MAX_PLACE_NAME_LEN: usize = 100;

/// Team identifier value object
///
/// Teams are owned by an external system, so the identifier is kept
/// opaque. Every read and write against places is scoped by one.
///
/// # Invariants
/// - Non-empty
/// - Stored exactly as given, so `"T1"` and `" T1 "` are different teams
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    /// Creates a new TeamId value object
    ///
    /// # Example
    /// ```
    /// use lunch_api::domain::place::value_objects::TeamId;
    ///
    /// let team = TeamId::new("T1").expect("valid team id");
    /// assert_eq!(team.as_str(), "T1");
    /// assert!(TeamId::new("").is_err());
    /// ```
    pub fn new(team_id: impl Into<String>) -> Result<Self, String> {
        let team_id = team_id.into();
        if team_id.is_empty() {
            return Err("Team id cannot be empty".to_string());
        }
        Ok(TeamId(team_id))
    }

    /// Returns the team id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name of a place
///
/// # Invariants
/// - Trimmed of surrounding whitespace
/// - Non-empty
/// - At most [`MAX_PLACE_NAME_LEN`] characters
///
/// Uniqueness per team is a storage constraint and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceName(String);

impl PlaceName {
    /// Creates a new PlaceName value object
    ///
    /// # Returns
    /// * `Ok(PlaceName)` - If the name is valid
    /// * `Err(String)` - If the name is empty or too long
    ///
    /// # Example
    /// ```
    /// use lunch_api::domain::place::value_objects::PlaceName;
    ///
    /// let name = PlaceName::new("Deli").expect("valid name");
    /// assert_eq!(name.as_str(), "Deli");
    /// assert!(PlaceName::new("   ").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Place name cannot be empty".to_string());
        }
        if trimmed.chars().count() > MAX_PLACE_NAME_LEN {
            return Err(format!(
                "Place name cannot be longer than {} characters",
                MAX_PLACE_NAME_LEN
            ));
        }
        Ok(PlaceName(trimmed.to_string()))
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields of a place that may be changed through a partial update
///
/// Counters, timestamps, team and id are deliberately absent: they only
/// change through visit and skip transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceUpdate {
    pub name: Option<PlaceName>,
}

impl PlaceUpdate {
    /// Returns true when the update carries no field to change
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
