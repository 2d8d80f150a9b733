//! Best-first search over lazily generated graphs.
//!
//! A single engine covers Dijkstra (zero heuristic) and A*, early exit on a
//! goal predicate, exhaustive flood fills, cost ceilings and optional path
//! tracking.

use rustc_hash::FxHashMap;

use crate::cost::Cost;
use crate::error::ConfigurationError;
use crate::error::InvariantViolation;
use crate::error::Result;
use crate::frontier::Frontier;
use crate::graph::FnGraph;
use crate::graph::Graph;
use crate::node::Node;
use crate::result::SearchResult;
use crate::result::SearchStats;

/// Goal of a flood fill. No node satisfies it.
fn never<N>(_: &N) -> bool {
    false
}

/// Heuristic of Dijkstra's algorithm.
fn zero<N, C: Cost>(_: &N) -> C {
    C::zero()
}

fn ignore<N>(_: &N) {}

/// A configured search, ready to [`run`](Search::run) or
/// [`flood`](Search::flood).
///
/// ```
/// use wayfinder::Search;
///
/// let result = Search::new(0u32, |n: &u32| [(n + 1, 1u32), (n + 2, 3u32)])
///     .goal(|n| *n == 4)
///     .track_path(true)
///     .run()
///     .unwrap()
///     .expect("4 is reachable");
///
/// assert_eq!(result.cost(), Some(4));
/// let path = result.path().unwrap().unwrap();
/// assert_eq!(path.nodes().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
/// ```
pub struct Search<N, C, G, Goal = fn(&N) -> bool, H = fn(&N) -> C, V = fn(&N)>
where
    N: Node,
    C: Cost,
{
    start: N,
    graph: G,
    goal: Goal,
    heuristic: H,
    on_visit: V,
    maximum_cost: Option<C>,
    track_path: bool,
}

impl<N, C, F, I> Search<N, C, FnGraph<F, I>>
where
    N: Node,
    C: Cost,
{
    /// Starts configuring a search from a neighbour function.
    ///
    /// Without further configuration it's an untracked flood fill with no
    /// heuristic and no cost ceiling.
    pub fn new(start: N, neighbours: F) -> Self
    where
        F: FnMut(&N) -> I,
        I: IntoIterator<Item = (N, C)>,
    {
        Search::over(FnGraph::new(neighbours), start)
    }
}

impl<N, C, G> Search<N, C, G>
where
    N: Node,
    C: Cost,
    G: Graph<N, C>,
{
    /// Starts configuring a search on a graph.
    pub fn over(graph: G, start: N) -> Self {
        Self {
            start,
            graph,
            goal: never::<N>,
            heuristic: zero::<N, C>,
            on_visit: ignore::<N>,
            maximum_cost: None,
            track_path: false,
        }
    }
}

impl<N, C, G, Goal, H, V> Search<N, C, G, Goal, H, V>
where
    N: Node,
    C: Cost,
    G: Graph<N, C>,
{
    /// Stops at the first expanded node satisfying `goal`.
    pub fn goal<Goal2>(self, goal: Goal2) -> Search<N, C, G, Goal2, H, V>
    where
        Goal2: FnMut(&N) -> bool,
    {
        Search {
            start: self.start,
            graph: self.graph,
            goal,
            heuristic: self.heuristic,
            on_visit: self.on_visit,
            maximum_cost: self.maximum_cost,
            track_path: self.track_path,
        }
    }

    /// Stops at `target`.
    pub fn goal_node(self, target: N) -> Search<N, C, G, impl FnMut(&N) -> bool, H, V> {
        self.goal(move |n: &N| *n == target)
    }

    /// Estimates the remaining cost from a node to the goal.
    ///
    /// The result is optimal only if the estimate never overestimates, but
    /// only non-negativity is checked.
    pub fn heuristic<H2>(self, heuristic: H2) -> Search<N, C, G, Goal, H2, V>
    where
        H2: FnMut(&N) -> C,
    {
        Search {
            start: self.start,
            graph: self.graph,
            goal: self.goal,
            heuristic,
            on_visit: self.on_visit,
            maximum_cost: self.maximum_cost,
            track_path: self.track_path,
        }
    }

    /// Observes every expansion, in order.
    pub fn on_visit<V2>(self, on_visit: V2) -> Search<N, C, G, Goal, H, V2>
    where
        V2: FnMut(&N),
    {
        Search {
            start: self.start,
            graph: self.graph,
            goal: self.goal,
            heuristic: self.heuristic,
            on_visit,
            maximum_cost: self.maximum_cost,
            track_path: self.track_path,
        }
    }

    /// Prunes every path costing more than `maximum_cost`.
    ///
    /// The bound is inclusive and must be positive.
    pub fn maximum_cost(mut self, maximum_cost: C) -> Self {
        self.maximum_cost = Some(maximum_cost);
        self
    }

    /// Keeps predecessor links so paths can be rebuilt from the result.
    pub fn track_path(mut self, track_path: bool) -> Self {
        self.track_path = track_path;
        self
    }
}

impl<N, C, G, Goal, H, V> Search<N, C, G, Goal, H, V>
where
    N: Node,
    C: Cost,
    G: Graph<N, C>,
    Goal: FnMut(&N) -> bool,
    H: FnMut(&N) -> C,
    V: FnMut(&N),
{
    /// Searches for the goal.
    ///
    /// Finding no node satisfying the goal is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// A [`ConfigurationError`] for a non-positive cost ceiling, and an
    /// [`InvariantViolation`] if the graph or heuristic yield negative values.
    pub fn run(self) -> Result<Option<SearchResult<N, C>>> {
        let result = self.flood()?;
        Ok(result.is_found().then_some(result))
    }

    /// Searches until the goal or until running out of nodes.
    ///
    /// Unlike [`run`](Search::run), running out of nodes still returns every
    /// distance found, with no destination.
    ///
    /// # Errors
    ///
    /// Same as [`run`](Search::run).
    pub fn flood(self) -> Result<SearchResult<N, C>> {
        let maximum_cost = match self.maximum_cost {
            Some(maximum_cost) if maximum_cost <= C::zero() => {
                return Err(ConfigurationError::NonPositiveMaximumCost {
                    maximum_cost: format!("{maximum_cost:?}"),
                }
                .into());
            }
            Some(maximum_cost) => maximum_cost,
            None => C::unbounded(),
        };

        Traversal::new(maximum_cost, self.track_path).run(
            self.start,
            self.graph,
            self.goal,
            self.heuristic,
            self.on_visit,
        )
    }
}

impl<N, C, G, Goal, H, V> std::fmt::Debug for Search<N, C, G, Goal, H, V>
where
    N: Node,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Search")
            .field("start", &self.start)
            .field("maximum_cost", &self.maximum_cost)
            .field("track_path", &self.track_path)
            .finish_non_exhaustive()
    }
}

/// Searches from `start` until `goal` holds.
///
/// Shorthand for [`Search::new`] with a goal, for callers that only need the
/// cost.
///
/// # Errors
///
/// Same as [`Search::run`].
pub fn search<N, C, F, I, Goal>(
    start: N,
    neighbours: F,
    goal: Goal,
) -> Result<Option<SearchResult<N, C>>>
where
    N: Node,
    C: Cost,
    F: FnMut(&N) -> I,
    I: IntoIterator<Item = (N, C)>,
    Goal: FnMut(&N) -> bool,
{
    Search::new(start, neighbours).goal(goal).run()
}

/// The state owned by a single traversal.
struct Traversal<N, C>
where
    N: Node,
    C: Cost,
{
    frontier: Frontier<N, C>,
    /// Lowest cost discovered so far.
    distance: FxHashMap<N, C>,
    /// Best known previous node, when tracking paths.
    predecessor: Option<FxHashMap<N, N>>,
    /// Cost each node was last expanded at.
    ///
    /// An entry popped at a cost that was already expanded, or that's
    /// worse than the known distance, is stale.
    expanded_at: FxHashMap<N, C>,
    maximum_cost: C,
    stats: SearchStats,
}

impl<N, C> Traversal<N, C>
where
    N: Node,
    C: Cost,
{
    fn new(maximum_cost: C, track_path: bool) -> Self {
        Self {
            frontier: Frontier::new(),
            distance: FxHashMap::default(),
            predecessor: track_path.then(FxHashMap::default),
            expanded_at: FxHashMap::default(),
            maximum_cost,
            stats: SearchStats::default(),
        }
    }

    fn run<G, Goal, H, V>(
        mut self,
        start: N,
        mut graph: G,
        mut goal: Goal,
        mut heuristic: H,
        mut on_visit: V,
    ) -> Result<SearchResult<N, C>>
    where
        G: Graph<N, C>,
        Goal: FnMut(&N) -> bool,
        H: FnMut(&N) -> C,
        V: FnMut(&N),
    {
        log::debug!(
            "Searching from {start:?} (maximum_cost={}, track_path={})",
            self.maximum_cost,
            self.predecessor.is_some()
        );

        let h = checked_heuristic(&mut heuristic, &start)?;
        self.distance.insert(start.clone(), C::zero());
        if let Some(predecessor) = self.predecessor.as_mut() {
            predecessor.insert(start.clone(), start.clone());
        }
        self.frontier.push(start.clone(), C::zero(), h);

        let mut destination = None;
        while let Some(entry) = self.frontier.pop() {
            let node = entry.node;
            let g = entry.g;
            if self.is_stale(&node, g) {
                self.stats.stale += 1;
                continue;
            }
            self.expanded_at.insert(node.clone(), g);
            self.stats.expanded += 1;

            log::trace!("Expanding {node:?} (g={g}, f={})", entry.rank.f());
            on_visit(&node);

            if goal(&node) {
                destination = Some(node);
                break;
            }

            for (neighbour, edge_cost) in graph.neighbours(&node) {
                self.stats.generated += 1;
                if !edge_cost.is_non_negative() {
                    return Err(
                        InvariantViolation::negative_edge(&node, &neighbour, edge_cost).into(),
                    );
                }

                let Some(total) = g
                    .checked_add(&edge_cost)
                    .filter(|total| *total <= self.maximum_cost)
                else {
                    self.stats.pruned += 1;
                    continue;
                };
                if self.distance.get(&neighbour).is_some_and(|&d| d <= total) {
                    continue;
                }

                let h = checked_heuristic(&mut heuristic, &neighbour)?;
                self.distance.insert(neighbour.clone(), total);
                if let Some(predecessor) = self.predecessor.as_mut() {
                    predecessor.insert(neighbour.clone(), node.clone());
                }
                self.frontier.push(neighbour, total, h);
            }
            self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        }

        match &destination {
            Some(d) => log::debug!(
                "Reached {d:?} at cost {} ({})",
                self.distance[d],
                self.stats
            ),
            None => log::debug!(
                "Exhausted {} nodes without reaching a goal ({})",
                self.distance.len(),
                self.stats
            ),
        }

        Ok(SearchResult::new(
            start,
            destination,
            self.distance,
            self.predecessor,
            self.stats,
        ))
    }

    /// Whether a popped `(node, g)` was superseded or already processed.
    #[inline(always)]
    fn is_stale(&self, node: &N, g: C) -> bool {
        if self.distance.get(node).is_some_and(|&d| d < g) {
            return true;
        }
        self.expanded_at.get(node).is_some_and(|&e| e <= g)
    }
}

#[inline(always)]
fn checked_heuristic<N, C, H>(heuristic: &mut H, node: &N) -> Result<C>
where
    N: Node,
    C: Cost,
    H: FnMut(&N) -> C,
{
    let h = heuristic(node);
    if !h.is_non_negative() {
        return Err(InvariantViolation::negative_heuristic(node, h).into());
    }
    Ok(h)
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;
    use crate::error::SearchError;
    use crate::float_cost::FloatCost;

    type Adjacency = Vec<Vec<(usize, u32)>>;

    /// `0 -> 1 -> 2 -> 3 -> 4`, all costing 1.
    fn chain(n: &u32) -> Option<(u32, u32)> {
        (*n < 4).then_some((n + 1, 1))
    }

    fn random_graph(rng: &mut ChaCha8Rng) -> Adjacency {
        let n = rng.random_range(1..=7);
        let mut graph = vec![vec![]; n];
        for edges in graph.iter_mut() {
            for _ in 0..rng.random_range(0..=3) {
                edges.push((rng.random_range(0..n), rng.random_range(0..=9)));
            }
        }
        graph
    }

    /// Cheapest cost to every node, trying every simple path.
    fn brute_force(graph: &Adjacency, start: usize) -> Vec<Option<u32>> {
        fn walk(
            graph: &Adjacency,
            node: usize,
            cost: u32,
            on_path: &mut [bool],
            best: &mut [Option<u32>],
        ) {
            if best[node].is_none_or(|b| cost < b) {
                best[node] = Some(cost);
            }
            on_path[node] = true;
            for &(next, w) in &graph[node] {
                if !on_path[next] {
                    walk(graph, next, cost + w, on_path, best);
                }
            }
            on_path[node] = false;
        }

        let mut best = vec![None; graph.len()];
        let mut on_path = vec![false; graph.len()];
        walk(graph, start, 0, &mut on_path, &mut best);
        best
    }

    fn random_graphs() -> impl Iterator<Item = Adjacency> {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        (0..300).map(move |_| random_graph(&mut rng))
    }

    #[test]
    fn linear_chain() {
        let mut visits = 0;
        let result = Search::new(0u32, chain)
            .goal(|n| *n == 4)
            .on_visit(|_| visits += 1)
            .track_path(true)
            .run()
            .unwrap()
            .unwrap();

        assert_eq!(result.cost(), Some(4));
        assert_eq!(result.destination(), Some(&4));
        let path = result.path().unwrap().unwrap();
        assert_eq!(path.nodes().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
        assert_eq!(path.cost(), 4);
        assert_eq!(visits, 5);
        assert_eq!(result.expanded(), 5);
    }

    #[test]
    fn unreachable_goal_is_not_an_error() {
        let islands = |&n: &u32| match n {
            0 => vec![(1, 1), (2, 4)],
            1 => vec![(2, 1), (0, 1)],
            10 => vec![(11, 1)],
            _ => vec![],
        };

        assert!(search(0u32, islands, |n| *n >= 10).unwrap().is_none());

        let mut visited = vec![];
        let result = Search::new(0u32, islands)
            .goal(|n| *n >= 10)
            .on_visit(|n| visited.push(*n))
            .flood()
            .unwrap();
        assert!(!result.is_found());
        assert_eq!(result.cost(), None);
        assert_eq!(result.len(), 3);
        assert!(!result.reached(&10));
        assert_eq!(visited, vec![0, 1, 2]);
    }

    #[test]
    fn start_can_be_the_goal() {
        let result = Search::new(7u32, chain)
            .goal_node(7)
            .track_path(true)
            .run()
            .unwrap()
            .unwrap();
        assert_eq!(result.cost(), Some(0));
        assert_eq!(result.expanded(), 1);
        assert!(result.path().unwrap().unwrap().is_empty());
    }

    #[test]
    fn zero_heuristic_is_optimal() {
        for graph in random_graphs() {
            let expected = brute_force(&graph, 0);
            let neighbours = |n: &usize| graph[*n].clone();

            let flooded = Search::new(0usize, neighbours).flood().unwrap();
            for (target, &best) in expected.iter().enumerate() {
                assert_eq!(flooded.cost_to(&target), best, "{graph:?} to {target}");

                let found = Search::new(0usize, neighbours)
                    .goal_node(target)
                    .run()
                    .unwrap();
                assert_eq!(found.and_then(|r| r.cost()), best, "{graph:?} to {target}");
            }
        }
    }

    #[test]
    fn admissible_heuristics_agree() {
        for graph in random_graphs() {
            let goal = graph.len() - 1;
            let expected = brute_force(&graph, 0)[goal];
            let exact: Vec<u32> = (0..graph.len())
                .map(|n| brute_force(&graph, n)[goal].unwrap_or(0))
                .collect();

            let heuristics: [&dyn Fn(&usize) -> u32; 3] = [
                &|_: &usize| 0,
                &|n: &usize| exact[*n],
                &|n: &usize| exact[*n] / 2,
            ];
            for h in heuristics {
                let found = Search::new(0usize, |n: &usize| graph[*n].clone())
                    .goal_node(goal)
                    .heuristic(h)
                    .run()
                    .unwrap();
                assert_eq!(found.and_then(|r| r.cost()), expected, "{graph:?}");
            }
        }
    }

    #[test]
    fn maximum_cost_is_inclusive() {
        let run = |maximum_cost: u32| {
            Search::new(0u32, chain)
                .goal_node(4)
                .maximum_cost(maximum_cost)
                .run()
                .map(|r| r.and_then(|r| r.cost()))
        };
        assert_eq!(run(100), Ok(Some(4)));
        assert_eq!(run(4), Ok(Some(4)));
        assert_eq!(run(3), Ok(None));

        let pruned = Search::new(0u32, chain)
            .maximum_cost(2)
            .flood()
            .unwrap();
        assert_eq!(pruned.len(), 3);
        assert_eq!(pruned.stats().pruned, 1);
    }

    #[test]
    fn maximum_cost_never_changes_the_optimum() {
        for graph in random_graphs() {
            let goal = graph.len() - 1;
            let Some(best) = brute_force(&graph, 0)[goal] else {
                continue;
            };
            let run = |maximum_cost: u32| {
                Search::new(0usize, |n: &usize| graph[*n].clone())
                    .goal_node(goal)
                    .maximum_cost(maximum_cost)
                    .run()
                    .unwrap()
                    .and_then(|r| r.cost())
            };

            if best > 0 {
                assert_eq!(run(best), Some(best), "{graph:?}");
            }
            if best > 1 {
                assert_eq!(run(best - 1), None, "{graph:?}");
            }
            assert_eq!(run(best + 10), Some(best), "{graph:?}");
        }
    }

    #[test]
    fn non_positive_maximum_cost_is_rejected() {
        let zero = Search::new(0u32, chain).maximum_cost(0).run();
        assert_eq!(
            zero.unwrap_err(),
            SearchError::Configuration(ConfigurationError::NonPositiveMaximumCost {
                maximum_cost: "0".to_string()
            })
        );

        let negative = Search::new(0i32, |&n: &i32| [(n + 1, 1)])
            .maximum_cost(-5)
            .flood();
        assert!(matches!(
            negative,
            Err(SearchError::Configuration(
                ConfigurationError::NonPositiveMaximumCost { .. }
            ))
        ));
    }

    #[test]
    fn untracked_search_keeps_costs() {
        let result = Search::new(0u32, chain)
            .goal_node(4)
            .run()
            .unwrap()
            .unwrap();
        assert_eq!(result.cost(), Some(4));
        assert!(!result.tracks_paths());
        assert_eq!(
            result.path(),
            Err(SearchError::Configuration(ConfigurationError::PathNotTracked))
        );
        assert_eq!(
            result.path_to(&2),
            Err(SearchError::Configuration(ConfigurationError::PathNotTracked))
        );
    }

    #[test]
    fn path_steps_follow_edges() {
        for graph in random_graphs() {
            let result = Search::new(0usize, |n: &usize| graph[*n].clone())
                .track_path(true)
                .flood()
                .unwrap();

            for (target, cost) in result.distances() {
                let path = result.path_to(target).unwrap().unwrap();
                assert_eq!(path.cost(), cost);
                assert_eq!(path.start(), &0);
                assert_eq!(path.end(), target);

                let nodes: Vec<usize> = path.nodes().copied().collect();
                for (pair, delta) in nodes.windows(2).zip(path.edge_costs()) {
                    assert!(
                        graph[pair[0]].contains(&(pair[1], delta)),
                        "{graph:?}: no edge {pair:?} costing {delta}"
                    );
                }
            }
        }
    }

    #[test]
    fn repeated_searches_are_identical() {
        for graph in random_graphs().take(50) {
            let goal = graph.len() - 1;
            let run = || {
                let mut visited = vec![];
                let path = Search::new(0usize, |n: &usize| graph[*n].clone())
                    .goal_node(goal)
                    .on_visit(|n| visited.push(*n))
                    .track_path(true)
                    .run()
                    .unwrap()
                    .map(|r| r.path().unwrap());
                (path, visited)
            };
            assert_eq!(run(), run());
        }
    }

    #[test]
    fn ties_are_first_come_first_served() {
        // 0 -> {1, 2} -> 3, every edge costing 1.
        let diamond = |&n: &u8| match n {
            0 => vec![(1, 1u32), (2, 1)],
            1 | 2 => vec![(3, 1)],
            _ => vec![],
        };
        let mut visited = vec![];
        let result = Search::new(0u8, diamond)
            .on_visit(|n| visited.push(*n))
            .track_path(true)
            .flood()
            .unwrap();

        assert_eq!(visited, vec![0, 1, 2, 3]);
        let path = result.path_to(&3).unwrap().unwrap();
        assert_eq!(path.nodes().copied().collect::<Vec<_>>(), vec![0, 1, 3]);
    }

    #[test]
    fn improved_nodes_leave_stale_entries() {
        // 0 reaches 2 directly for 10, or through 1 for 2.
        let graph = |&n: &u8| match n {
            0 => vec![(2, 10u32), (1, 1)],
            1 => vec![(2, 1)],
            _ => vec![],
        };
        let result = Search::new(0u8, graph)
            .track_path(true)
            .flood()
            .unwrap();

        assert_eq!(result.cost_to(&2), Some(2));
        assert_eq!(result.stats().stale, 1);
        assert_eq!(result.expanded(), 3);
        let path = result.path_to(&2).unwrap().unwrap();
        assert_eq!(path.steps(), &[(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn zero_cost_cycles_terminate() {
        let cycle = |&n: &u8| match n {
            0 => vec![(1, 0u32)],
            1 => vec![(0, 0), (2, 0)],
            _ => vec![(0, 0)],
        };
        let result = Search::new(0u8, cycle).track_path(true).flood().unwrap();
        assert_eq!(result.len(), 3);
        assert_eq!(result.expanded(), 3);
        assert_eq!(result.cost_to(&2), Some(0));
        assert_eq!(result.path_to(&2).unwrap().unwrap().len(), 2);
    }

    #[test]
    fn saturated_costs_are_pruned() {
        let steep = |&n: &u8| (n < 2).then_some((n + 1, 200u8));
        let result = Search::new(0u8, steep).goal_node(2).run().unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn costs_may_reach_the_maximum_value() {
        let single = |&n: &u8| (n == 0).then_some((1u8, u8::MAX));
        let run = |maximum_cost: Option<u8>| {
            let search = Search::new(0u8, single).goal_node(1);
            let result = match maximum_cost {
                Some(maximum_cost) => search.maximum_cost(maximum_cost).run(),
                None => search.run(),
            };
            result.map(|r| r.and_then(|r| r.cost()))
        };
        assert_eq!(run(Some(u8::MAX)), Ok(Some(u8::MAX)));
        assert_eq!(run(None), Ok(Some(u8::MAX)));
        assert_eq!(run(Some(u8::MAX - 1)), Ok(None));

        let halves = |&n: &u32| (n < 2).then_some((n + 1, u32::MAX / 2 + n));
        let result = Search::new(0u32, halves)
            .goal_node(2)
            .maximum_cost(u32::MAX)
            .track_path(true)
            .run()
            .unwrap()
            .unwrap();
        assert_eq!(result.cost(), Some(u32::MAX));
        let path = result.path().unwrap().unwrap();
        assert_eq!(path.cost(), u32::MAX);
        assert_eq!(
            path.edge_costs().collect::<Vec<_>>(),
            vec![u32::MAX / 2, u32::MAX / 2 + 1]
        );
    }

    #[test]
    fn negative_edges_are_rejected() {
        let graph = |&n: &i32| match n {
            0 => vec![(1, 2)],
            1 => vec![(2, -3)],
            _ => vec![],
        };
        let result = Search::new(0i32, graph).goal_node(2).run();
        assert_eq!(
            result.unwrap_err(),
            SearchError::Invariant(InvariantViolation::NegativeEdgeCost {
                from: "1".to_string(),
                to: "2".to_string(),
                cost: "-3".to_string(),
            })
        );
    }

    #[test]
    fn negative_heuristics_are_rejected() {
        let graph = |&n: &i32| [(n + 1, 1)];

        let result = Search::new(0i32, graph)
            .goal_node(5)
            .heuristic(|n| if *n == 3 { -1 } else { 0 })
            .run();
        assert!(matches!(
            result,
            Err(SearchError::Invariant(
                InvariantViolation::NegativeHeuristic { .. }
            ))
        ));

        let at_start = Search::new(0i32, graph).heuristic(|_| -1).flood();
        assert!(at_start.is_err());
    }

    #[test]
    fn float_costs() {
        let half = |&n: &u8| (n < 3).then_some((n + 1, FloatCost::new(0.5f64)));
        let result = Search::new(0u8, half)
            .goal_node(3)
            .run()
            .unwrap()
            .unwrap();
        assert_eq!(result.cost(), Some(FloatCost::new(1.5)));

        let nan = |&n: &u8| [(n + 1, FloatCost::new(f64::NAN))];
        assert!(matches!(
            Search::new(0u8, nan).goal_node(3).run(),
            Err(SearchError::Invariant(
                InvariantViolation::NegativeEdgeCost { .. }
            ))
        ));
    }

    #[test]
    fn stats_add_up() {
        let result = Search::new(0u32, chain).flood().unwrap();
        let stats = result.stats();
        assert_eq!(stats.expanded, 5);
        assert_eq!(stats.generated, 4);
        assert_eq!(stats.stale, 0);
        assert_eq!(stats.peak_frontier, 1);
    }
}
