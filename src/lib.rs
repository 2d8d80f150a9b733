//! Generic best-first search over implicit graphs.
//!
//! One engine runs Dijkstra's algorithm and A*. Graphs are expanded lazily
//! through a neighbour function or a [`Graph`] implementation, and the search
//! either stops at the first node satisfying a goal or floods everything
//! reachable so distances and paths can be queried afterwards.

use shadow_rs::shadow;

shadow!(build);

// Costs and nodes
// ---------------
pub mod cost;
pub mod float_cost;
pub mod node;

// Internals
// ---------
pub mod derank;
pub mod frontier;
pub mod heap_primitives;

// Search
// ------
pub mod error;
pub mod graph;
pub mod path;
pub mod result;
pub mod search;

// Problems
// --------
pub mod problems;

pub use cost::Cost;
pub use error::ConfigurationError;
pub use error::InvariantViolation;
pub use error::Result;
pub use error::SearchError;
pub use float_cost::FloatCost;
pub use graph::FnGraph;
pub use graph::Graph;
pub use node::Node;
pub use path::Path;
pub use result::SearchResult;
pub use result::SearchStats;
pub use search::Search;
pub use search::search;
