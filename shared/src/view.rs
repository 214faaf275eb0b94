//! Display-ready view descriptions
//!
//! `render` is a pure function of the view state and the quote currently
//! displayed. Hosts draw the result; every interactive element carries the
//! `ViewAction` it dispatches.

use crate::controller::{ViewAction, ViewState, QUICK_ACTION_IDS};
use crate::models::{ScreenId, UserStats, WorkoutSummary};
use crate::quotes::QUOTE_CAPTION;
use serde::Serialize;
use std::fmt;

/// Header shown above every screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub greeting: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuoteView {
    pub text: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickActionView {
    pub id: String,
    pub title: String,
    pub on_press: ViewAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCardView {
    pub title: String,
    pub value: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutCardView {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub duration: String,
    pub exercises_label: String,
    pub difficulty: String,
    pub status: String,
    pub status_badge: String,
    pub start_label: String,
    pub on_start: ViewAction,
}

/// Composite home screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub quote: QuoteView,
    pub quick_actions_title: String,
    pub quick_actions: Vec<QuickActionView>,
    pub stats_title: String,
    pub stat_cards: Vec<StatCardView>,
    pub workouts_title: String,
    pub workouts: Vec<WorkoutCardView>,
}

/// Screen whose feature is not built yet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceholderView {
    pub screen: ScreenId,
    pub title: String,
    pub message: String,
    pub on_back: ViewAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViewBody {
    Home(HomeView),
    Placeholder(PlaceholderView),
}

/// Everything a host needs to draw the current screen
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewDescription {
    pub header: HeaderView,
    pub body: ViewBody,
}

impl ViewDescription {
    pub fn as_home(&self) -> Option<&HomeView> {
        match &self.body {
            ViewBody::Home(home) => Some(home),
            ViewBody::Placeholder(_) => None,
        }
    }

    pub fn as_placeholder(&self) -> Option<&PlaceholderView> {
        match &self.body {
            ViewBody::Placeholder(placeholder) => Some(placeholder),
            ViewBody::Home(_) => None,
        }
    }
}

/// Title shown on a quick-action button
pub fn quick_action_title(id: &str) -> &str {
    match id {
        "workout" => "Novo Treino",
        "schedule" => "Agenda",
        "health" => "Saúde",
        "settings" => "Config",
        other => other,
    }
}

/// Render the current screen
pub fn render(state: &ViewState, quote: &str) -> ViewDescription {
    let header = HeaderView {
        greeting: format!("Olá, {}!", state.user_name),
        subtitle: "Pronto para treinar?".to_string(),
    };

    let body = match &state.current_screen {
        ScreenId::Workout => placeholder(ScreenId::Workout, "Novo Treino"),
        ScreenId::Schedule => placeholder(ScreenId::Schedule, "Agenda"),
        ScreenId::Health => placeholder(ScreenId::Health, "Saúde"),
        ScreenId::Settings => placeholder(ScreenId::Settings, "Configurações"),
        ScreenId::Home | ScreenId::Other(_) => {
            ViewBody::Home(home(&state.stats, &state.workouts, quote))
        }
    };

    ViewDescription { header, body }
}

fn placeholder(screen: ScreenId, title: &str) -> ViewBody {
    ViewBody::Placeholder(PlaceholderView {
        screen,
        title: title.to_string(),
        message: format!("Funcionalidade de {title} em desenvolvimento..."),
        on_back: ViewAction::GoHome,
    })
}

fn home(stats: &UserStats, workouts: &[WorkoutSummary], quote: &str) -> HomeView {
    let quick_actions = QUICK_ACTION_IDS
        .iter()
        .map(|id| QuickActionView {
            id: id.to_string(),
            title: quick_action_title(id).to_string(),
            on_press: ViewAction::SelectAction(id.to_string()),
        })
        .collect();

    HomeView {
        quote: QuoteView {
            text: quote.to_string(),
            caption: QUOTE_CAPTION.to_string(),
        },
        quick_actions_title: "Ações Rápidas".to_string(),
        quick_actions,
        stats_title: "Seu Progresso".to_string(),
        stat_cards: stat_cards(stats),
        workouts_title: "Treinos para Hoje".to_string(),
        workouts: workouts.iter().map(workout_card).collect(),
    }
}

fn stat_cards(stats: &UserStats) -> Vec<StatCardView> {
    vec![
        StatCardView {
            title: "PESO ATUAL".to_string(),
            value: format!("{}kg", stats.weight),
            subtitle: stats.weight_change.clone(),
        },
        StatCardView {
            title: "TREINOS".to_string(),
            value: stats.workouts.to_string(),
            subtitle: stats.workouts_this_week.clone(),
        },
    ]
}

fn workout_card(workout: &WorkoutSummary) -> WorkoutCardView {
    WorkoutCardView {
        id: workout.id,
        title: workout.title.clone(),
        category: workout.category.clone(),
        duration: workout.duration.clone(),
        exercises_label: format!("{} exercícios", workout.exercises),
        difficulty: workout.difficulty.label().to_string(),
        status: workout.status.as_str().to_string(),
        status_badge: workout.status.badge_label().to_string(),
        start_label: "Iniciar Treino".to_string(),
        on_start: ViewAction::StartWorkout(workout.id),
    }
}

impl fmt::Display for ViewDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.greeting)?;
        writeln!(f, "{}", self.header.subtitle)?;
        writeln!(f)?;

        match &self.body {
            ViewBody::Placeholder(view) => {
                writeln!(f, "< {}", view.title)?;
                writeln!(f, "  {}", view.message)?;
            }
            ViewBody::Home(view) => {
                writeln!(f, "\"{}\"", view.quote.text)?;
                writeln!(f, "  {}", view.quote.caption)?;
                writeln!(f)?;

                writeln!(f, "{}", view.quick_actions_title)?;
                for action in &view.quick_actions {
                    writeln!(f, "  [{}] {}", action.id, action.title)?;
                }
                writeln!(f)?;

                writeln!(f, "{}", view.stats_title)?;
                for card in &view.stat_cards {
                    writeln!(f, "  {}: {} ({})", card.title, card.value, card.subtitle)?;
                }
                writeln!(f)?;

                writeln!(f, "{}", view.workouts_title)?;
                for card in &view.workouts {
                    writeln!(
                        f,
                        "  #{} {} [{}] - {}",
                        card.id, card.title, card.status_badge, card.category
                    )?;
                    writeln!(
                        f,
                        "     {} | {} | {}",
                        card.duration, card.exercises_label, card.difficulty
                    )?;
                }
            }
        }

        Ok(())
    }
}
