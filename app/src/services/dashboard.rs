//! Dashboard service - owns the view state and runs its side effects

use crate::notify::Notifier;
use fitness_dashboard_shared::models::{ScreenId, UserStats, WorkoutSummary};
use fitness_dashboard_shared::{
    render, QuoteRefresh, QuoteWidget, ViewAction, ViewDescription, ViewEffect, ViewState,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info};

/// View controller host: reducer state, the quote widget and effect handling
pub struct DashboardService {
    state: ViewState,
    quote: QuoteWidget,
    quote_refresh: QuoteRefresh,
    rng: Box<dyn RngCore + Send>,
    notifier: Arc<dyn Notifier>,
}

impl DashboardService {
    pub fn new(state: ViewState, quote_refresh: QuoteRefresh, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_rng(state, quote_refresh, notifier, Box::new(StdRng::from_entropy()))
    }

    /// Use a specific random source for quote draws
    pub fn with_rng(
        state: ViewState,
        quote_refresh: QuoteRefresh,
        notifier: Arc<dyn Notifier>,
        rng: Box<dyn RngCore + Send>,
    ) -> Self {
        Self {
            state,
            quote: QuoteWidget::new(),
            quote_refresh,
            rng,
            notifier,
        }
    }

    pub fn current_screen(&self) -> &ScreenId {
        &self.state.current_screen
    }

    pub fn stats(&self) -> &UserStats {
        &self.state.stats
    }

    pub fn workouts(&self) -> &[WorkoutSummary] {
        &self.state.workouts
    }

    pub fn quote(&self) -> &QuoteWidget {
        &self.quote
    }

    pub fn select_action(&mut self, action_id: &str) {
        self.dispatch(ViewAction::SelectAction(action_id.to_string()));
    }

    pub fn go_home(&mut self) {
        self.dispatch(ViewAction::GoHome);
    }

    pub fn start_workout(&mut self, workout_id: i64) {
        self.dispatch(ViewAction::StartWorkout(workout_id));
    }

    /// Apply an action, run its effects and manage the quote widget lifetime
    pub fn dispatch(&mut self, action: ViewAction) {
        if let ViewAction::StartWorkout(id) = action {
            match self.state.workout(id) {
                Some(workout) => debug!(id, title = %workout.title, "Starting listed workout"),
                None => debug!(id, "Starting workout not in the list"),
            }
        }

        let was_home = self.state.current_screen.is_home_view();
        let effects = self.state.apply(&action);
        let is_home = self.state.current_screen.is_home_view();

        if !was_home && is_home && self.quote_refresh == QuoteRefresh::PerVisit {
            debug!("Home view re-entered, new quote widget");
            self.quote = QuoteWidget::new();
        }

        for effect in effects {
            match effect {
                ViewEffect::Log(line) => info!(screen = %self.state.current_screen, "{}", line),
                ViewEffect::Acknowledge(message) => self.notifier.acknowledge(&message),
            }
        }
    }

    /// Render the current screen, activating the quote widget on first use
    pub fn render(&mut self) -> ViewDescription {
        if self.state.current_screen.is_home_view() && self.quote.activate(&mut *self.rng) {
            debug!(index = self.quote.index(), "Quote drawn");
        }
        render(&self.state, self.quote.text())
    }
}
