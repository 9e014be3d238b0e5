// ABOUTME: Library crate for the Evol Jewels kiosk exposing its modules for the binary and tests

#![allow(missing_docs)]

pub mod app;
pub mod assets;
pub mod cli;
pub mod components;
pub mod config;
pub mod models;
