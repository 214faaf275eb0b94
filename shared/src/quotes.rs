//! Motivational quote widget

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const MOTIVATIONAL_QUOTES: [&str; 7] = [
    "Seu único limite é você mesmo! 💪",
    "Cada treino te aproxima do seu objetivo! 🎯",
    "A consistência é a chave do sucesso! 🔑",
    "Transforme suor em conquista! 🏆",
    "Seu corpo pode fazer isso. É sua mente que você precisa convencer! 🧠",
    "Não pare quando estiver cansado, pare quando terminar! ⚡",
    "O progresso, não a perfeição! 📈",
];

/// Quote shown before the widget is activated
pub const INITIAL_QUOTE_INDEX: usize = 6;

pub const QUOTE_CAPTION: &str = "Dica motivacional do dia";

/// When the home view gets a freshly drawn quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteRefresh {
    /// One draw for the lifetime of the widget
    #[default]
    PerActivation,
    /// A new widget, and a new draw, every time home is entered
    PerVisit,
}

/// Quote state of one widget instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteWidget {
    index: usize,
    activated: bool,
}

impl Default for QuoteWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteWidget {
    pub fn new() -> Self {
        Self {
            index: INITIAL_QUOTE_INDEX,
            activated: false,
        }
    }

    /// Draw the displayed quote; only the first call per instance draws.
    ///
    /// Returns `true` when a draw happened.
    pub fn activate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.activated {
            return false;
        }
        self.index = rng.gen_range(0..MOTIVATIONAL_QUOTES.len());
        self.activated = true;
        true
    }

    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &'static str {
        MOTIVATIONAL_QUOTES[self.index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_initial_quote_is_progress_quote() {
        let widget = QuoteWidget::new();
        assert_eq!(widget.text(), "O progresso, não a perfeição! 📈");
        assert!(!widget.is_activated());
    }

    #[test]
    fn test_activation_draws_once() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut widget = QuoteWidget::new();
        assert!(widget.activate(&mut rng));
        let first = widget.index();

        for _ in 0..50 {
            assert!(!widget.activate(&mut rng));
            assert_eq!(widget.index(), first);
        }
    }

    #[test]
    fn test_every_quote_reachable_across_activations() {
        let mut rng = SmallRng::seed_from_u64(42);
        let seen: HashSet<usize> = (0..500)
            .map(|_| {
                let mut widget = QuoteWidget::new();
                widget.activate(&mut rng);
                widget.index()
            })
            .collect();
        assert_eq!(seen.len(), MOTIVATIONAL_QUOTES.len());
    }

    proptest! {
        #[test]
        fn prop_activated_quote_is_a_known_quote(seed in any::<u64>()) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut widget = QuoteWidget::new();
            widget.activate(&mut rng);
            prop_assert!(widget.index() < MOTIVATIONAL_QUOTES.len());
            prop_assert!(MOTIVATIONAL_QUOTES.contains(&widget.text()));
        }
    }
}
