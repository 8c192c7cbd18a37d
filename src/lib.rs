// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod params;
pub mod specs;

pub mod csv;
pub mod file;
pub mod gui;
pub mod logging;
pub mod session;
pub mod sort;
pub mod store;
