use crate::cost::Cost;
use crate::node::Node;

const MAX_ELEMENTS_DISPLAYED: usize = 20;

/// A path from an origin, annotated with the running cost at every node.
///
/// Paths always hold at least their origin, at a cost of zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path<N, C>
where
    N: Node,
    C: Cost,
{
    steps: Vec<(N, C)>,
}

impl<N, C> Path<N, C>
where
    N: Node,
    C: Cost,
{
    /// Builds a path out of steps collected walking back from the end.
    pub(crate) fn from_reversed_steps(mut steps: Vec<(N, C)>) -> Self {
        debug_assert!(!steps.is_empty());
        steps.reverse();
        Self { steps }
    }

    pub fn start(&self) -> &N {
        &self.steps[0].0
    }
    pub fn end(&self) -> &N {
        &self.steps[self.steps.len() - 1].0
    }
    pub fn cost(&self) -> C {
        self.steps[self.steps.len() - 1].1
    }

    /// Number of edges followed.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.steps.len() - 1
    }
    /// Whether the path stays at its origin.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn steps(&self) -> &[(N, C)] {
        &self.steps
    }
    pub fn into_steps(self) -> Vec<(N, C)> {
        self.steps
    }
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.steps.iter().map(|(n, _)| n)
    }

    /// The cost of each edge, in order.
    pub fn edge_costs(&self) -> impl Iterator<Item = C> + '_ {
        self.steps.windows(2).map(|w| w[1].1 - w[0].1)
    }

    /// Runs sanity checks
    pub fn seems_valid(&self) -> bool {
        !self.steps.is_empty()
            && self.steps[0].1.is_zero()
            && self.steps.windows(2).all(|w| w[0].1 <= w[1].1)
    }
}

impl<N, C> std::fmt::Display for Path<N, C>
where
    N: Node,
    C: Cost,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Path({}, {:?}:{:?}:{:?})",
            self.cost(),
            self.start(),
            self.nodes()
                .skip(1)
                .take(MAX_ELEMENTS_DISPLAYED)
                .collect::<Vec<_>>(),
            self.end()
        )
    }
}

impl<'a, N, C> IntoIterator for &'a Path<N, C>
where
    N: Node,
    C: Cost,
{
    type Item = &'a (N, C);
    type IntoIter = std::slice::Iter<'a, (N, C)>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
