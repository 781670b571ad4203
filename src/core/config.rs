//! Agent configuration.

use serde::{Deserialize, Serialize};

use super::player::PlayerColor;

/// Agent configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Color the agent plays. Passed to the piece resolver.
    pub color: PlayerColor,

    /// Temperature for action selection (0 = greedy, higher = more exploration).
    pub temperature: f64,

    /// Random seed for action sampling.
    /// Same seed produces the same sampled actions.
    pub seed: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            color: PlayerColor::Yellow,
            temperature: 0.0, // Greedy by default
            seed: 42,
        }
    }
}

impl AgentConfig {
    /// Create a new config with a custom color.
    pub fn with_color(mut self, color: PlayerColor) -> Self {
        self.color = color;
        self
    }

    /// Create a new config with custom temperature.
    pub fn with_temperature(mut self, temp: f64) -> Self {
        self.temperature = temp;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Whether selection is plain argmax.
    #[must_use]
    pub fn is_greedy(&self) -> bool {
        self.temperature <= 0.0
    }
}
