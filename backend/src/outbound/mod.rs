//! Outbound adapters implementing domain ports against real resources.

pub mod persistence;
