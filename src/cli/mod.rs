//! Command-line front end over the library engine.

pub mod commands;
