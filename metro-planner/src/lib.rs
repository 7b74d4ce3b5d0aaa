//! Metro route lookup with delay prediction.
//!
//! Answers: "I'm at this station and want to get to that one. When is the
//! next train, and how late is it likely to be?"

pub mod config;
pub mod domain;
pub mod enrich;
pub mod network;
pub mod planner;
pub mod predict;
pub mod schedule;
pub mod service;
pub mod web;
