//! Recipe ideas from the ingredients you have, courtesy of an LLM.

pub mod auth;
pub mod banner;
pub mod commands;
pub mod completion;
pub mod config;
pub mod consts;
pub mod error;
pub mod kitchen;
pub mod logging;
pub mod pantry;
pub mod prompts;
pub mod recipe;
pub mod render;
pub mod spinner;
