use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::error::ConfigurationError;
use crate::error::Result;
use crate::node::Node;
use crate::path::Path;

/// Counters gathered while traversing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes handed to the visit callback and expanded.
    pub expanded: usize,
    /// Edges produced by the neighbour function.
    pub generated: usize,
    /// Frontier entries discarded because the node had improved since.
    pub stale: usize,
    /// Edges dropped for exceeding the cost ceiling.
    pub pruned: usize,
    /// Largest frontier size seen.
    pub peak_frontier: usize,
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use thousands::Separable;

        write!(
            f,
            "expanded={} generated={} stale={} pruned={} peak_frontier={}",
            self.expanded.separate_with_commas(),
            self.generated.separate_with_commas(),
            self.stale.separate_with_commas(),
            self.pruned.separate_with_commas(),
            self.peak_frontier.separate_with_commas(),
        )
    }
}

/// The outcome of a search.
///
/// Owns every distance found from the origin, and the predecessor links when
/// paths were tracked. Nothing here changes after the search returns, so the
/// same result can answer any number of queries.
#[derive(Clone, Debug)]
pub struct SearchResult<N, C>
where
    N: Node,
    C: Cost,
{
    origin: N,
    destination: Option<N>,
    distance: FxHashMap<N, C>,
    /// Best known previous node. The origin points to itself.
    predecessor: Option<FxHashMap<N, N>>,
    stats: SearchStats,
}

impl<N, C> SearchResult<N, C>
where
    N: Node,
    C: Cost,
{
    pub(crate) fn new(
        origin: N,
        destination: Option<N>,
        distance: FxHashMap<N, C>,
        predecessor: Option<FxHashMap<N, N>>,
        stats: SearchStats,
    ) -> Self {
        debug_assert_eq!(distance.get(&origin).copied(), Some(C::zero()));
        debug_assert!(
            predecessor
                .as_ref()
                .is_none_or(|p| p.len() == distance.len() && p.get(&origin) == Some(&origin))
        );
        Self {
            origin,
            destination,
            distance,
            predecessor,
            stats,
        }
    }

    pub fn origin(&self) -> &N {
        &self.origin
    }

    /// The node that satisfied the goal, if any did.
    pub fn destination(&self) -> Option<&N> {
        self.destination.as_ref()
    }

    pub fn is_found(&self) -> bool {
        self.destination.is_some()
    }

    /// Total cost to the destination.
    pub fn cost(&self) -> Option<C> {
        self.destination.as_ref().and_then(|d| self.cost_to(d))
    }

    /// Best cost found to any node.
    ///
    /// Nodes that were never reached have no cost. After an early exit, nodes
    /// still waiting on the frontier report their best cost so far.
    pub fn cost_to(&self, node: &N) -> Option<C> {
        self.distance.get(node).copied()
    }

    pub fn reached(&self, node: &N) -> bool {
        self.distance.contains_key(node)
    }

    /// Every reached node with its best known cost, in no particular order.
    pub fn distances(&self) -> impl Iterator<Item = (&N, C)> {
        self.distance.iter().map(|(n, c)| (n, *c))
    }

    /// Number of reached nodes.
    pub fn len(&self) -> usize {
        self.distance.len()
    }
    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    pub fn tracks_paths(&self) -> bool {
        self.predecessor.is_some()
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Number of nodes expanded while searching.
    pub fn expanded(&self) -> usize {
        self.stats.expanded
    }

    /// The path to the destination.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::PathNotTracked`] if the search didn't keep
    /// predecessors.
    pub fn path(&self) -> Result<Option<Path<N, C>>> {
        match &self.destination {
            Some(destination) => self.path_to(destination),
            None => {
                self.predecessor
                    .as_ref()
                    .ok_or(ConfigurationError::PathNotTracked)?;
                Ok(None)
            }
        }
    }

    /// The best known path from the origin to `target`.
    ///
    /// Walks the predecessor links back from `target` until the origin.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::PathNotTracked`] if the search didn't keep
    /// predecessors.
    pub fn path_to(&self, target: &N) -> Result<Option<Path<N, C>>> {
        let predecessor = self
            .predecessor
            .as_ref()
            .ok_or(ConfigurationError::PathNotTracked)?;

        let Some(&cost) = self.distance.get(target) else {
            return Ok(None);
        };

        let mut steps = vec![(target.clone(), cost)];
        let mut node = target;
        while let Some(parent) = predecessor.get(node) {
            if parent == node {
                break;
            }
            let Some(&parent_cost) = self.distance.get(parent) else {
                unreachable!("Predecessor {parent:?} of {node:?} was never reached");
            };
            steps.push((parent.clone(), parent_cost));
            debug_assert!(steps.len() <= self.distance.len(), "Predecessor cycle");
            node = parent;
        }
        debug_assert!(*node == self.origin);

        let path = Path::from_reversed_steps(steps);
        debug_assert_eq!(path.cost(), cost);
        debug_assert!(path.seems_valid());
        Ok(Some(path))
    }

    pub fn write_memory_stats<W: std::io::Write>(&self, mut out: W) -> std::io::Result<()> {
        use size::Size;
        use std::mem::size_of;
        use thousands::Separable;

        writeln!(out, "SearchResult Stats:")?;
        let s = size_of::<(N, C)>();
        let l = self.distance.len();
        let c = self.distance.capacity();
        writeln!(
            out,
            "  - |Distances|:    {} ({})",
            l.separate_with_commas(),
            Size::from_bytes(l * s)
        )?;
        writeln!(
            out,
            "  - |Distances|*:   {} ({})",
            c.separate_with_commas(),
            Size::from_bytes(c * s)
        )?;

        if let Some(predecessor) = &self.predecessor {
            let s = size_of::<(N, N)>();
            let l = predecessor.len();
            let c = predecessor.capacity();
            writeln!(
                out,
                "  - |Predecessors|:  {} ({})",
                l.separate_with_commas(),
                Size::from_bytes(l * s)
            )?;
            writeln!(
                out,
                "  - |Predecessors|*: {} ({})",
                c.separate_with_commas(),
                Size::from_bytes(c * s)
            )?;
        }

        writeln!(
            out,
            "  - Expanded nodes: {}",
            self.stats.expanded.separate_with_commas()
        )?;
        writeln!(
            out,
            "  - Peak frontier:  {}",
            self.stats.peak_frontier.separate_with_commas()
        )?;

        Ok(())
    }
}
