//! casefile-service: forwards case-file game actions to the Gemini API.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
