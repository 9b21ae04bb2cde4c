//! Filter State and Filter Engine for the dashboard's point collection.

pub mod cache;
pub mod engine;
pub mod options;
pub mod selection;
pub mod state;

pub use cache::FilterCache;
pub use engine::{apply, apply_indices};
pub use options::{selector_options, Selector, SelectorOption};
pub use selection::{FilterToken, Selection, UNFILTERED_TOKEN};
pub use state::{Dimension, FilterState, FilterUpdate};
