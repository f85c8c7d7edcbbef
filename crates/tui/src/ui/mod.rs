//! UI rendering module for the portal shell.
//!
//! This module provides the responsive layout, the components, the theme and
//! the runtime that drives them.

pub mod components;
pub mod icons;
pub mod layout;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
