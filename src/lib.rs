//! Soil fertility decision engine.
//!
//! Takes twelve numeric soil measurements, classifies the sample as fertile
//! or not via a pre-trained model, and derives prioritized remediation
//! guidance from agronomic threshold rules when it is not. The programmatic
//! surface is [`logic::DecisionEngine::evaluate`]; everything the binary
//! does around it (prompting, rendering) is presentation.

pub mod classifier;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod report;

pub use error::{Result, SoilSenseError};
