use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in the conversation sent to the completion API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single role-tagged message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Body of `POST /agent`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRequest {
    pub messages: Vec<Message>,
}

/// Body of `POST /hobby/suggest`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HobbySuggestRequest {
    pub interests: String,
    #[serde(default)]
    pub mood: Option<String>,
    /// Whole minutes; negative or fractional values are rejected
    #[serde(default)]
    pub time_available: Option<u32>,
}

/// Closed set of expertise levels; anything else is rejected at the boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpertiseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExpertiseLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExpertiseLevel::Beginner => "beginner",
            ExpertiseLevel::Intermediate => "intermediate",
            ExpertiseLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ExpertiseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /hobby/weekly-plan`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyPlanRequest {
    pub hobby: String,
    pub hours_per_day: f64,
    pub expertise_level: ExpertiseLevel,
    /// First day of the plan (`YYYY-MM-DD`)
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}
