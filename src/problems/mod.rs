//! Concrete graphs to search on.
//!
//! These double as worked examples of implementing [`crate::Graph`] and of
//! configuring a [`crate::Search`] for a problem.

pub mod grid;
