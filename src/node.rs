use std::fmt::Debug;
use std::hash::Hash;

/// A point in a searched space.
///
/// Nodes are caller-owned values. The engine only clones, hashes and compares
/// them, so any `Clone + Eq + Hash + Debug` type is a node.
pub trait Node: Clone + Debug + Eq + Hash {}

impl<T> Node for T where T: Clone + Debug + Eq + Hash {}
