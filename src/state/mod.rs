//! Reactive state models for the card.

pub mod floor;
