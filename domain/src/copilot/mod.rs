//! Copilot fallback chain concepts.
//!
//! A turn walks an ordered list of [`tier::Tier`]s. Each attempt produces a
//! [`tier::TierOutcome`]; the first `Answered` ends the turn. The per-turn
//! flags live in [`turn::TurnState`].

pub mod tier;
pub mod turn;
