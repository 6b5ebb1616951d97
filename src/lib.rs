//! Pitchcraft - Freelance Outreach Generation Backend
//!
//! This crate meters deterministic proposal generation behind a
//! free/premium subscription quota and stores the results per caller.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
