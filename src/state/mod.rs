/// State management module
///
/// This module holds all application state as plain data:
/// - Shared data structures (data.rs)
/// - Gallery records and card models (gallery.rs)
/// - The simulated live viewer (viewer.rs)
/// - Persisted preferences (preferences.rs)

pub mod data;
pub mod gallery;
pub mod preferences;
pub mod viewer;
