//! The open list of a best-first search.
//!
//! There's no decrease-key. Reaching a node through a cheaper path pushes a
//! new entry, and the superseded one stays behind until it's popped and
//! discarded by the search as stale.

use std::cmp::min;

use crate::cost::Cost;
use crate::derank::derank;
use crate::node::Node;

/// The ranking tuple for the frontier.
///
/// We prefer better f-values, tie break for lower h, and then for earlier
/// insertions. With a zero heuristic this is Dijkstra with FIFO ties.
///
/// ```
/// use wayfinder::frontier::Rank;
///
/// assert!(Rank::new(2u32, 0, 7) < Rank::new(0u32, 2, 1));
/// assert!(Rank::new(1u32, 1, 3) < Rank::new(1u32, 1, 4));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rank<C: Cost> {
    f: C,
    h: C,
    sequence: u64,
}
impl<C> Rank<C>
where
    C: Cost,
{
    pub fn new(g: C, h: C, sequence: u64) -> Self {
        Self {
            f: g.saturating_add(&h),
            h,
            sequence,
        }
    }
    pub fn f(&self) -> C {
        self.f
    }
    pub fn h(&self) -> C {
        self.h
    }
}

const HEAP_ARITY: usize = 4usize;
#[inline(always)]
#[must_use]
fn up(i: usize) -> usize {
    crate::heap_primitives::index_parent::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_left(i: usize) -> usize {
    crate::heap_primitives::index_first_children::<HEAP_ARITY>(i)
}
#[inline(always)]
#[must_use]
fn down_right(i: usize) -> usize {
    crate::heap_primitives::index_last_children::<HEAP_ARITY>(i)
}

/// A node waiting for expansion together with the cost it was reached with.
#[derive(Clone, Debug)]
pub struct FrontierEntry<N, C>
where
    C: Cost,
{
    /// The rank of this entry that defines how good it is.
    pub rank: Rank<C>,
    /// The cost at insertion. Ignored when ranking.
    pub g: C,
    /// Ignored when ranking.
    pub node: N,
}

/// PartialEq is forwarded to self.rank's PartialEq
impl<N, C: Cost> PartialEq for FrontierEntry<N, C> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        self.rank.eq(&other.rank)
    }
}
impl<N, C: Cost> Eq for FrontierEntry<N, C> {}

/// PartialOrd is forwarded to Ord::cmp
impl<N, C: Cost> PartialOrd for FrontierEntry<N, C> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
/// Ord is forwarded to self.rank's Ord
impl<N, C: Cost> Ord for FrontierEntry<N, C> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// A d-ary min-heap of [`FrontierEntry`].
#[derive(Debug)]
pub struct Frontier<N, C>
where
    C: Cost,
{
    open: Vec<FrontierEntry<N, C>>,
    /// Insertion counter used to pin the order of equally ranked entries.
    pushed: u64,
}

impl<N, C> Frontier<N, C>
where
    N: Node,
    C: Cost,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            open: Vec::with_capacity(256),
            pushed: 0,
        }
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Total number of entries ever pushed.
    #[inline(always)]
    #[must_use]
    pub fn pushed(&self) -> u64 {
        self.pushed
    }

    #[must_use]
    pub fn peek(&self) -> Option<&FrontierEntry<N, C>> {
        self.open.first()
    }

    pub fn push(&mut self, node: N, g: C, h: C) {
        self.verify_heap();

        let rank = Rank::new(g, h, self.pushed);
        self.pushed += 1;

        let index = self.open.len();
        self.open.push(FrontierEntry { rank, g, node });
        self.sift_up(index);

        self.verify_heap();
    }

    /// Pops the best entry.
    #[must_use]
    pub fn pop(&mut self) -> Option<FrontierEntry<N, C>> {
        match self.open.len() {
            0 | 1 => self.open.pop(),
            _ => {
                self.verify_heap();
                let entry = self.pop_non_trivial_heap();
                self.verify_heap();
                entry
            }
        }
    }

    /// Pops the top entry from a Heap with at least 2 elements.
    ///
    /// Works by unfairly sifting down the top entry to the last level, where it
    /// can be swapped with the very last element of the array and popped.
    fn pop_non_trivial_heap(&mut self) -> Option<FrontierEntry<N, C>> {
        debug_assert!(
            self.open.len() > 1,
            "It doesn't get easier. Why are you calling this?"
        );

        // 1. We pretend there's a hole at the root, and bubble the best child
        //    up until the hole reaches the bottom.
        // 2. If the hole is not the last element, we swap it for the last one.
        // 3. Now the last element is the one that was at the top, we pop it.
        // 4. The element that used to be last may need to go up.
        let len = self.open.len();
        let last = len - 1;

        let mut hole = 0;
        loop {
            let child = down_left(hole);
            if child >= len {
                break;
            }
            debug_assert_eq!(child + HEAP_ARITY, down_right(hole) + 1);
            let child = child + derank(&self.open[child..min(child + HEAP_ARITY, len)]);

            self.open.swap(hole, child);
            hole = child;
        }

        debug_assert!(hole <= last, "The hole={hole} is past last={last}");
        if hole != last {
            self.open.swap(hole, last);
        }
        let entry = self.open.pop();
        if hole != last {
            self.sift_up(hole);
        }

        entry
    }

    /// Raises an entry
    /// Returns it's new index
    #[inline(always)]
    fn sift_up(&mut self, index: usize) -> usize {
        debug_assert!(index < self.open.len(), "Index out of bounds...");

        let mut pos = index;
        while pos != 0 {
            let parent = up(pos);
            if self.open[parent] <= self.open[pos] {
                break;
            }
            self.open.swap(parent, pos);
            pos = parent;
        }
        pos
    }

    #[inline(always)]
    #[cfg(not(feature = "verify"))]
    pub(crate) fn verify_heap(&self) {
        // All good... (hopefully)
    }
    #[inline(always)]
    #[cfg(feature = "verify")]
    pub(crate) fn verify_heap(&self) {
        // Every entry goes after its parent entry, if any.
        for i in 1..self.open.len() {
            let p = up(i);
            assert!(
                self.open[p].rank <= self.open[i].rank,
                "Entry[{p}]={:?} !<= child [{i}]={:?}. Out of heap of len={}",
                self.open[p].rank,
                self.open[i].rank,
                self.open.len(),
            );
        }
    }
}

impl<N, C> Default for Frontier<N, C>
where
    N: Node,
    C: Cost,
{
    fn default() -> Self {
        Self::new()
    }
}
