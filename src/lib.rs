//! Terminal UI components with a future-based confirm/alert dialog.
//!
//! The [`dialog`] module is the behavioural core. [`components`] and [`todo`]
//! hold the prop and data types, [`ui`] is a ratatui rendering surface for
//! them, and [`app`] is the demo to-do application driven by `main.rs`.

pub mod app;
pub mod components;
pub mod config;
pub mod dialog;
pub mod logging;
pub mod todo;
pub mod ui;
