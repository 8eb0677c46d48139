//! Presence algebra.
//!
//! [`Maybe`] represents a value which may or may not exist, without a null
//! sentinel. Everything in the dispatch path that can come up empty (a route
//! lookup, a header, a query parameter) is expressed with it, and it bridges
//! into failures with [`Maybe::to_result`].

mod combine;
mod maybe;

// Re-export public items
pub use combine::{
    all, Combine, Mapper1, Mapper2, Mapper3, Mapper4, Mapper5, Mapper6, Mapper7, Mapper8, Mapper9,
};
pub use maybe::{any, any_lazy, Maybe};
