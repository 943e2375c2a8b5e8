//! Core dashboard data and derivations, independent of the terminal UI.

pub mod catalog;
pub mod format;
pub mod logging;
pub mod selection;
