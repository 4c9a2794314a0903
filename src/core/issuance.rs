//! Approximate Bitcoin issuance schedule.
//!
//! Halvings happen every 1460 days (four 365-day years) instead of every
//! 210 000 blocks, and blocks are assumed to arrive exactly every ten
//! minutes. This keeps the model a pure function of the day offset at the
//! cost of small jumps at each halving boundary, which is acceptable for an
//! illustrative overlay.
//!
//! A day that is an exact multiple of the halving interval already belongs
//! to the new era. Negative day offsets are treated as day 0.

use serde::{Deserialize, Serialize};

pub const INITIAL_BLOCK_REWARD: f64 = 50.0;
pub const HALVING_INTERVAL_DAYS: i64 = 1460;
pub const BLOCKS_PER_HALVING: f64 = 210_000.0;
pub const BLOCKS_PER_DAY: i64 = 144;

/// Power-law fit `price = e^A * sf^B`.
pub const VALUATION_LN_COEFFICIENT: f64 = -1.84;
pub const VALUATION_EXPONENT: f64 = 3.36;

/// Issuance figures for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IssuanceState {
    pub day_offset: i64,
    pub block_reward: f64,
    pub cumulative_supply: f64,
}

impl IssuanceState {
    #[must_use]
    pub fn at(day_offset: i64) -> Self {
        Self {
            day_offset,
            block_reward: block_reward(day_offset),
            cumulative_supply: cumulative_supply(day_offset),
        }
    }

    /// Coins issued per year at the current reward.
    #[must_use]
    pub fn annual_flow(self) -> f64 {
        self.block_reward * 365.0 * BLOCKS_PER_DAY as f64
    }

    #[must_use]
    pub fn stock_to_flow(self) -> f64 {
        self.cumulative_supply / self.annual_flow()
    }
}

fn halvings(day_offset: i64) -> i32 {
    let eras = day_offset.max(0) / HALVING_INTERVAL_DAYS;
    i32::try_from(eras).unwrap_or(i32::MAX)
}

/// Block reward in effect on `day_offset`.
#[must_use]
pub fn block_reward(day_offset: i64) -> f64 {
    INITIAL_BLOCK_REWARD / 2f64.powi(halvings(day_offset))
}

/// Coins issued from genesis up to `day_offset`, starting from zero.
#[must_use]
pub fn cumulative_supply(day_offset: i64) -> f64 {
    let day_offset = day_offset.max(0);
    let completed = halvings(day_offset);

    let mut reward = INITIAL_BLOCK_REWARD;
    let mut supply = 0.0;
    for _ in 0..completed {
        supply += BLOCKS_PER_HALVING * reward;
        reward /= 2.0;
        if reward == 0.0 {
            break;
        }
    }

    let days_in_era = day_offset % HALVING_INTERVAL_DAYS;
    supply + (days_in_era * BLOCKS_PER_DAY) as f64 * block_reward(day_offset)
}

/// Stock held divided by one year of production.
#[must_use]
pub fn stock_to_flow(day_offset: i64) -> f64 {
    IssuanceState::at(day_offset).stock_to_flow()
}

/// Stock-to-flow valuation `e^-1.84 * sf^3.36`.
#[must_use]
pub fn valuation_model(day_offset: i64) -> f64 {
    VALUATION_LN_COEFFICIENT.exp() * stock_to_flow(day_offset).powf(VALUATION_EXPONENT)
}
