use std::marker::PhantomData;

use crate::cost::Cost;
use crate::error::Result;
use crate::node::Node;
use crate::result::SearchResult;
use crate::search::Search;

/// An implicit, lazily expanded graph.
///
/// Only the neighbourhood of expanded nodes is ever generated, so the graph
/// may be huge or infinite. Neighbours are requested again every time, and
/// nothing is cached on the caller's behalf.
pub trait Graph<N, C>
where
    N: Node,
    C: Cost,
{
    /// Expands a node into `(neighbour, edge cost)` pairs.
    ///
    /// Edge costs must not be negative.
    fn neighbours(&mut self, node: &N) -> impl IntoIterator<Item = (N, C)>;

    /// Starts configuring a search over this graph.
    fn search_from(&mut self, start: N) -> Search<N, C, &mut Self>
    where
        Self: Sized,
    {
        Search::over(self, start)
    }

    /// Computes distances and paths from `start` to every reachable node.
    ///
    /// Query the result with [`SearchResult::path_to`] and
    /// [`SearchResult::cost_to`].
    ///
    /// # Errors
    ///
    /// Same as [`Search::flood`].
    fn flood_from(&mut self, start: N) -> Result<SearchResult<N, C>>
    where
        Self: Sized,
    {
        self.search_from(start).track_path(true).flood()
    }
}

impl<N, C, G> Graph<N, C> for &mut G
where
    N: Node,
    C: Cost,
    G: Graph<N, C> + ?Sized,
{
    #[inline(always)]
    fn neighbours(&mut self, node: &N) -> impl IntoIterator<Item = (N, C)> {
        (**self).neighbours(node)
    }
}

/// A [`Graph`] backed by a neighbour function.
pub struct FnGraph<F, I> {
    neighbours: F,
    _phantom_neighbours: PhantomData<fn() -> I>,
}

impl<F, I> FnGraph<F, I> {
    pub fn new(neighbours: F) -> Self {
        Self {
            neighbours,
            _phantom_neighbours: PhantomData,
        }
    }
}

impl<N, C, F, I> Graph<N, C> for FnGraph<F, I>
where
    N: Node,
    C: Cost,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
{
    #[inline(always)]
    fn neighbours(&mut self, node: &N) -> impl IntoIterator<Item = (N, C)> {
        (self.neighbours)(node)
    }
}

impl<F, I> std::fmt::Debug for FnGraph<F, I> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "FnGraph")
    }
}
