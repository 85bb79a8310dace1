//! Train trip finder.
//!
//! Answers: "which trains run from this station to that one, cheapest
//! (or earliest) first?" against a JSON timetable dataset.

pub mod cli;
pub mod dataset;
pub mod display;
pub mod domain;
pub mod query;
