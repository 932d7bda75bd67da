/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The view's state container and its transitions (catalog.rs)

pub mod catalog;
pub mod data;
