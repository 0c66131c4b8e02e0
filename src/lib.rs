// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod keys;

pub mod classify;
pub mod loader;
pub mod progress;
pub mod store;

pub mod controller;
pub mod render;

pub mod cli;
pub mod file;
pub mod gui;
