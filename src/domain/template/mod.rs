//! Deterministic text templating for the four outreach artifacts.
//!
//! Pure string construction: no state, no I/O, no failure modes. Malformed
//! or empty input degrades to fallback phrases rather than erroring. The
//! exact phrase maps, truncation lengths, and rate table are observable
//! contract: output must match what earlier clients produced and saved,
//! byte for byte.

mod engine;
mod rates;

pub use engine::render;
pub use rates::RateCard;
