// src/core.rs
pub mod config;
pub mod counter;
pub mod library;
pub mod reader;
pub mod report;
