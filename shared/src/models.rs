//! Data models for the Fitness Dashboard

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Screen identifier
///
/// The four quick-action screens plus `Home`. Any other action id is kept
/// verbatim in `Other` and renders as the home view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ScreenId {
    #[default]
    Home,
    Workout,
    Schedule,
    Health,
    Settings,
    Other(String),
}

impl ScreenId {
    /// Parse an action id; never fails
    pub fn from_action(action_id: &str) -> Self {
        match action_id {
            "home" => ScreenId::Home,
            "workout" => ScreenId::Workout,
            "schedule" => ScreenId::Schedule,
            "health" => ScreenId::Health,
            "settings" => ScreenId::Settings,
            other => ScreenId::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ScreenId::Home => "home",
            ScreenId::Workout => "workout",
            ScreenId::Schedule => "schedule",
            ScreenId::Health => "health",
            ScreenId::Settings => "settings",
            ScreenId::Other(id) => id,
        }
    }

    /// Whether this screen renders the composite home view
    pub fn is_home_view(&self) -> bool {
        matches!(self, ScreenId::Home | ScreenId::Other(_))
    }
}

impl From<String> for ScreenId {
    fn from(value: String) -> Self {
        ScreenId::from_action(&value)
    }
}

impl From<ScreenId> for String {
    fn from(value: ScreenId) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress figures shown on the stat cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Current weight in kg
    pub weight: f64,
    /// Free-text delta label, e.g. "-2kg esta semana"
    pub weight_change: String,
    pub workouts: u32,
    pub workouts_this_week: String,
}

/// Workout difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Fácil")]
    Easy,
    #[serde(rename = "Médio")]
    Medium,
    #[serde(rename = "Difícil")]
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Fácil",
            Difficulty::Medium => "Médio",
            Difficulty::Hard => "Difícil",
        }
    }
}

/// Workout availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutStatus {
    #[default]
    Available,
    InProgress,
    Completed,
}

impl WorkoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutStatus::Available => "available",
            WorkoutStatus::InProgress => "in-progress",
            WorkoutStatus::Completed => "completed",
        }
    }

    /// Text printed on the card badge.
    ///
    /// The badge table reuses difficulty wording for two of the states.
    pub fn badge_label(&self) -> &'static str {
        match self {
            WorkoutStatus::Available => "Fácil",
            WorkoutStatus::InProgress => "Now",
            WorkoutStatus::Completed => "Difícil",
        }
    }
}

/// A workout offered on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub id: i64,
    pub title: String,
    pub category: String,
    /// Display label such as "20 min"
    pub duration: String,
    pub exercises: u32,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub status: WorkoutStatus,
}

/// Initial dashboard data injected by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSeed {
    pub user_name: String,
    pub stats: UserStats,
    pub workouts: Vec<WorkoutSummary>,
}

impl DashboardSeed {
    /// Demo data shipped with the dashboard
    pub fn demo() -> Self {
        Self {
            user_name: "João Guilherme".to_string(),
            stats: UserStats {
                weight: 73.0,
                weight_change: "-2kg esta semana".to_string(),
                workouts: 12,
                workouts_this_week: "Esta semana".to_string(),
            },
            workouts: vec![
                WorkoutSummary {
                    id: 1,
                    title: "Treino HIIT Iniciante".to_string(),
                    category: "Queima de Gordura".to_string(),
                    duration: "20 min".to_string(),
                    exercises: 8,
                    difficulty: Difficulty::Easy,
                    status: WorkoutStatus::InProgress,
                },
                WorkoutSummary {
                    id: 2,
                    title: "Força para Membros Superiores".to_string(),
                    category: "Ganho de Massa".to_string(),
                    duration: "35 min".to_string(),
                    exercises: 12,
                    difficulty: Difficulty::Medium,
                    status: WorkoutStatus::Available,
                },
                WorkoutSummary {
                    id: 3,
                    title: "Treino de Resistência".to_string(),
                    category: "Condicionamento".to_string(),
                    duration: "40 min".to_string(),
                    exercises: 15,
                    difficulty: Difficulty::Hard,
                    status: WorkoutStatus::Completed,
                },
            ],
        }
    }

    /// Parse a seed from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Row of the `status_checks` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl StatusCheck {
    /// Record written by the insert check; the store fills id and timestamp
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: None,
            client_name: client_name.into(),
            timestamp: None,
        }
    }
}
