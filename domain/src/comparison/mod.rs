//! Comparison result types

pub mod value_objects;

pub use value_objects::{ComparisonResult, ProviderReply};
