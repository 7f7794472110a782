//! Widgets not tied to a single view

pub mod components;
