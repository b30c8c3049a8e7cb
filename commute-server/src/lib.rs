//! Commute finder server.
//!
//! A web service that answers: "We work at these two stations - where
//! should we live?" Stations are ranked by a blend of both commute times,
//! a fairness preference between the two commuters, and a rent budget.

pub mod config;
pub mod domain;
pub mod graph;
pub mod paths;
pub mod ranking;
pub mod web;
