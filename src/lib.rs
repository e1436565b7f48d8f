//! Lunch API Library
//!
//! Tracks a team's candidate lunch places and proposes one for today,
//! avoiding places that were visited or skipped recently. Contains the
//! domain rules, the place service, repository adapters, and the HTTP API.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
