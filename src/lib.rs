//! Cardio Intake - Guided cardiovascular risk-factor intake
//!
//! This crate implements the four-step intake flow that collects risk factors,
//! encodes them for the scoring model, and orchestrates the prediction and
//! persistence calls that follow a submission.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
