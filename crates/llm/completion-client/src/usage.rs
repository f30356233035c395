//! Coarse token cost estimate.

/// Rate for providers missing from [`COST_PER_TOKEN`].
pub const DEFAULT_COST_PER_TOKEN: f64 = 0.00005;

const COST_PER_TOKEN: &[(&str, f64)] = &[("OpenAI", 0.00003), ("Anthropic", 0.00008)];

pub fn cost_per_token(provider: &str) -> f64 {
    COST_PER_TOKEN
        .iter()
        .find(|(p, _)| *p == provider)
        .map(|(_, rate)| *rate)
        .unwrap_or(DEFAULT_COST_PER_TOKEN)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Usage {
    pub tokens: u64,
    /// Estimated cost in USD.
    pub cost: f64,
}

impl Usage {
    pub fn estimate(tokens: u64, provider: &str) -> Self {
        Self {
            tokens,
            cost: tokens as f64 * cost_per_token(provider),
        }
    }
}
