//! Bounded row sampling for card-market opportunities.

pub mod service;
