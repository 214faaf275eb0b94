//! View controller: screen transitions as a reducer
//!
//! Transitions are pure functions of the current screen and an action.
//! Side effects (log lines, user acknowledgments) are returned as data and
//! applied by whoever owns the state.

use crate::errors::SeedError;
use crate::models::{DashboardSeed, ScreenId, UserStats, WorkoutSummary};
use crate::validation::validate_seed;
use serde::{Deserialize, Serialize};

/// Ids of the quick-action grid, in display order
pub const QUICK_ACTION_IDS: [&str; 4] = ["workout", "schedule", "health", "settings"];

/// User action on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViewAction {
    SelectAction(String),
    GoHome,
    StartWorkout(i64),
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message", rename_all = "snake_case")]
pub enum ViewEffect {
    /// Diagnostic log entry
    Log(String),
    /// Blocking message the user has to acknowledge
    Acknowledge(String),
}

/// Screen after applying `action` on `current`
pub fn next_screen(current: &ScreenId, action: &ViewAction) -> ScreenId {
    match action {
        ViewAction::SelectAction(id) => ScreenId::from_action(id),
        ViewAction::GoHome => ScreenId::Home,
        ViewAction::StartWorkout(_) => current.clone(),
    }
}

/// Effects produced by `action`
pub fn effects_for(action: &ViewAction) -> Vec<ViewEffect> {
    match action {
        ViewAction::SelectAction(id) => vec![ViewEffect::Log(format!("Ação clicada: {id}"))],
        ViewAction::GoHome => Vec::new(),
        ViewAction::StartWorkout(id) => vec![
            ViewEffect::Log(format!("Iniciando treino: {id}")),
            ViewEffect::Acknowledge(format!("Iniciando treino {id}!")),
        ],
    }
}

/// State owned by the view controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub current_screen: ScreenId,
    pub user_name: String,
    pub stats: UserStats,
    pub workouts: Vec<WorkoutSummary>,
}

impl ViewState {
    /// Build the initial state from validated seed data
    pub fn from_seed(seed: DashboardSeed) -> Result<Self, SeedError> {
        validate_seed(&seed)?;
        Ok(Self {
            current_screen: ScreenId::Home,
            user_name: seed.user_name,
            stats: seed.stats,
            workouts: seed.workouts,
        })
    }

    /// Apply an action and return the effects the host must run
    pub fn apply(&mut self, action: &ViewAction) -> Vec<ViewEffect> {
        self.current_screen = next_screen(&self.current_screen, action);
        effects_for(action)
    }

    pub fn select_action(&mut self, action_id: &str) -> Vec<ViewEffect> {
        self.apply(&ViewAction::SelectAction(action_id.to_string()))
    }

    pub fn go_home(&mut self) -> Vec<ViewEffect> {
        self.apply(&ViewAction::GoHome)
    }

    pub fn start_workout(&mut self, workout_id: i64) -> Vec<ViewEffect> {
        self.apply(&ViewAction::StartWorkout(workout_id))
    }

    pub fn workout(&self, workout_id: i64) -> Option<&WorkoutSummary> {
        self.workouts.iter().find(|w| w.id == workout_id)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        let seed = DashboardSeed::demo();
        Self {
            current_screen: ScreenId::Home,
            user_name: seed.user_name,
            stats: seed.stats,
            workouts: seed.workouts,
        }
    }
}
