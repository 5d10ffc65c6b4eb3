//! Command implementations for seqlookup-cmd

pub mod demo;
pub mod query;
