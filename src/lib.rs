//! Core library for the `burstload` CLI.
//!
//! A run fires `burst` concurrent GET requests every `burst / rate` seconds
//! until the run duration elapses, tallies each outcome into a shared
//! [`metrics::CounterStore`] keyed by status class, and prints the counts once
//! in-flight requests have had a grace period to land.
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod metrics;
