//! Session module.
//!
//! The application state and the reducer that moves it between views,
//! keeps the products search scope and owns the cart.

mod reducer;
mod state;

pub use reducer::{reduce, Action, Transition};
pub use state::{AppMode, AppState, HeaderConfig, SearchState, View, DEFAULT_LOCATION};
