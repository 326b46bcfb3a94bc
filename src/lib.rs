//! Calibration Certificate Assistant: a Dioxus chat and dashboard client for
//! a calibration-certificate backend.
//!
//! [`state`] holds the single interface state record and its transitions,
//! [`controller`] drives those transitions around the backend calls in
//! [`api`], and [`ui`]/[`views`] render the record.

pub mod api;
pub mod config;
pub mod controller;
pub mod state;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
