/*!
Path search between two vertices.

Both searches share one routine that is parameterized by its frontier:
- [`VecDeque`] -> queue semantics -> **BFS**, which yields a path with the fewest edges,
- [`Vec`] -> stack semantics -> **DFS**, which yields *some* path.

Every search is bounded by an iteration cap (one iteration = expanding one vertex), and
reports whether it gave up because of the cap or because nothing was left to explore.
*/

use super::*;
use fxhash::FxHashMap;
use itertools::Either;
use log::{debug, trace};
use std::collections::VecDeque;

/// Iteration cap used by [`Traversal::bfs`] and [`Traversal::dfs`]
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Abstraction for the traversal frontier data structure.
///
/// The implementation determines the traversal order:
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait Frontier<T> {
    /// If *true*, neighbors are pushed in reverse so that they leave the frontier in
    /// adjacency order.
    const PUSH_REVERSED: bool;

    /// Creates a new frontier initialized with a single item.
    fn init(item: T) -> Self;

    /// Pushes an item into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> Frontier<T> for VecDeque<T> {
    const PUSH_REVERSED: bool = false;

    fn init(item: T) -> Self {
        Self::from(vec![item])
    }
    fn push(&mut self, item: T) {
        self.push_back(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> Frontier<T> for Vec<T> {
    const PUSH_REVERSED: bool = true;

    fn init(item: T) -> Self {
        vec![item]
    }
    fn push(&mut self, item: T) {
        self.push(item)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Result of a path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<V> {
    /// A path from start to target (both included)
    Found(Vec<V>),
    /// Every vertex reachable from start was expanded without meeting the target
    Exhausted,
    /// The iteration cap was hit while unexplored vertices remained
    IterationLimit,
}

impl<V> SearchOutcome<V> {
    /// Returns the path if one was found
    pub fn path(&self) -> Option<&[V]> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Consumes the outcome and returns the path if one was found
    pub fn into_path(self) -> Option<Vec<V>> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Returns *true* if a path was found
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Configurable path search between two vertices.
///
/// # Examples
/// ```
/// use adjgraphs::{prelude::*, algo::*, gens::*};
///
/// let mut b = GraphBuilder::new_undirected();
/// b.connect_path(0..10);
/// let g = b.build().unwrap();
///
/// let search = PathSearch::new(&g);
/// assert_eq!(search.bfs(&0, &3).unwrap().into_path(), Some(vec![0, 1, 2, 3]));
///
/// let capped = PathSearch::new(&g).max_iterations(4);
/// assert_eq!(capped.bfs(&0, &9).unwrap(), SearchOutcome::IterationLimit);
/// ```
pub struct PathSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    max_iterations: usize,
}

impl<'a, G> PathSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Creates a search on `graph` capped at [`DEFAULT_MAX_ITERATIONS`]
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Sets the maximum number of vertex expansions
    pub fn set_max_iterations(&mut self, max_iterations: usize) {
        self.max_iterations = max_iterations;
    }

    /// Sets the maximum number of vertex expansions
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.set_max_iterations(max_iterations);
        self
    }

    /// Searches a path with the fewest edges from `start` to `target` in breadth-first order.
    ///
    /// # Errors
    /// Fails with [`GraphError::UnknownVertex`] if `start` is not registered.
    /// An unregistered `target` is never found.
    pub fn bfs(&self, start: &G::V, target: &G::V) -> Result<SearchOutcome<G::V>> {
        self.search::<VecDeque<G::V>>(start, target)
    }

    /// Searches a path from `start` to `target` in depth-first order.
    ///
    /// # Errors
    /// Fails with [`GraphError::UnknownVertex`] if `start` is not registered.
    /// An unregistered `target` is never found.
    pub fn dfs(&self, start: &G::V, target: &G::V) -> Result<SearchOutcome<G::V>> {
        self.search::<Vec<G::V>>(start, target)
    }

    fn search<S>(&self, start: &G::V, target: &G::V) -> Result<SearchOutcome<G::V>>
    where
        S: Frontier<G::V>,
    {
        self.graph.neighbors_of(start)?;
        if start == target {
            return Ok(SearchOutcome::Found(vec![start.clone()]));
        }

        // a vertex is discovered iff it has an entry; the start has no parent
        let mut parents: FxHashMap<G::V, Option<G::V>> = FxHashMap::default();
        parents.insert(start.clone(), None);

        let mut frontier = S::init(start.clone());
        let mut iterations = 0;

        while let Some(u) = frontier.pop() {
            if iterations >= self.max_iterations {
                debug!(
                    "Search from {start:?} to {target:?} stopped after {iterations} iterations \
                     with {} vertices pending",
                    frontier.cardinality() + 1
                );
                return Ok(SearchOutcome::IterationLimit);
            }
            iterations += 1;

            let neighbors = self.graph.neighbors_of(&u)?;
            let ordered = if S::PUSH_REVERSED {
                Either::Left(neighbors.iter().rev())
            } else {
                Either::Right(neighbors.iter())
            };

            for v in ordered {
                if parents.contains_key(v) {
                    continue;
                }
                parents.insert(v.clone(), Some(u.clone()));

                if v == target {
                    let path = path_to(&parents, target);
                    trace!("Found path {path:?} after {iterations} iterations");
                    return Ok(SearchOutcome::Found(path));
                }

                frontier.push(v.clone());
            }
        }

        debug!("No path from {start:?} to {target:?}: search exhausted");
        Ok(SearchOutcome::Exhausted)
    }
}

/// Walks the parent links back from `target` and returns the path in start-to-target order
fn path_to<V: Vertex>(parents: &FxHashMap<V, Option<V>>, target: &V) -> Vec<V> {
    let mut path = vec![target.clone()];
    let mut current = target;
    while let Some(Some(parent)) = parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    path
}

/// Provides path search directly on graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns a configurable [`PathSearch`] on this graph
    fn path_search(&self) -> PathSearch<'_, Self> {
        PathSearch::new(self)
    }

    /// Searches a path with the fewest edges from `start` to `target`,
    /// expanding at most [`DEFAULT_MAX_ITERATIONS`] vertices.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::new([0, 1, 2, 3], [(0, 1), (0, 2), (1, 0), (1, 3), (2, 0), (3, 1)]).unwrap();
    /// assert_eq!(g.bfs(&0, &3).unwrap().path(), Some(&[0, 1, 3][..]));
    /// assert_eq!(g.bfs(&2, &2).unwrap().path(), Some(&[2][..]));
    /// ```
    fn bfs(&self, start: &Self::V, target: &Self::V) -> Result<SearchOutcome<Self::V>> {
        self.path_search().bfs(start, target)
    }

    /// Searches a path from `start` to `target` in depth-first order,
    /// expanding at most [`DEFAULT_MAX_ITERATIONS`] vertices.
    fn dfs(&self, start: &Self::V, target: &Self::V) -> Result<SearchOutcome<Self::V>> {
        self.path_search().dfs(start, target)
    }
}

impl<G> Traversal for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::*};

    #[test]
    fn sample() {
        let g = sample_graph();

        let path = g.bfs(&0, &3).unwrap().into_path().unwrap();
        assert_eq!(path, vec![0, 1, 3]);

        let path = g.dfs(&0, &3).unwrap().into_path().unwrap();
        assert_valid_path(&g, &path, &0, &3);
        assert_eq!(path, vec![0, 1, 3]);

        let path = g.bfs(&2, &3).unwrap().into_path().unwrap();
        assert_eq!(path, vec![2, 0, 1, 3]);
    }

    #[test]
    fn trivial_path() {
        let g = sample_graph();
        for u in 0..4 {
            assert_eq!(g.bfs(&u, &u), Ok(SearchOutcome::Found(vec![u])));
            assert_eq!(g.dfs(&u, &u), Ok(SearchOutcome::Found(vec![u])));
        }
    }

    #[test]
    fn no_path() {
        let g = Graph::edgeless([0, 1]);
        assert_eq!(g.bfs(&0, &1), Ok(SearchOutcome::Exhausted));
        assert_eq!(g.dfs(&0, &1), Ok(SearchOutcome::Exhausted));

        // directed: 1 cannot reach 0
        let g = Graph::new([0, 1, 2], [(0, 1), (1, 2)]).unwrap();
        assert_eq!(g.bfs(&2, &0).unwrap().path(), None);
        assert!(g.dfs(&0, &2).unwrap().is_found());
        assert!(!g.dfs(&1, &0).unwrap().is_found());

        // target not in the graph
        assert_eq!(g.bfs(&0, &7), Ok(SearchOutcome::Exhausted));
    }

    #[test]
    fn unknown_start() {
        let empty: Graph<u32> = Graph::edgeless([]);
        assert_eq!(
            empty.bfs(&0, &1),
            Err(GraphError::UnknownVertex("0".into()))
        );
        assert!(sample_graph().dfs(&9, &0).is_err());
    }

    #[test]
    fn iteration_limit() {
        init_logger();

        let mut b = GraphBuilder::new_undirected();
        b.connect_path(0..200u32);
        let g = b.build().unwrap();

        // default cap expands 100 vertices, reaching vertex 100 at most
        assert_eq!(g.bfs(&0, &150), Ok(SearchOutcome::IterationLimit));
        assert_eq!(g.dfs(&0, &150), Ok(SearchOutcome::IterationLimit));
        assert!(g.bfs(&0, &100).unwrap().is_found());

        let search = g.path_search().max_iterations(200);
        assert_eq!(search.bfs(&0, &150).unwrap().path().map(|p| p.len()), Some(151));
        assert_eq!(search.dfs(&0, &199).unwrap().path().map(|p| p.len()), Some(200));

        let mut search = g.path_search();
        search.set_max_iterations(0);
        assert_eq!(search.bfs(&0, &1), Ok(SearchOutcome::IterationLimit));
        assert_eq!(search.bfs(&3, &3), Ok(SearchOutcome::Found(vec![3])));
    }

    #[test]
    fn dfs_goes_deep_first() {
        // 0 -> 1 -> 2 -> 3 and 0 -> 4 -> 3
        let g = Graph::new([0, 1, 2, 3, 4], [(0, 1), (0, 4), (1, 2), (2, 3), (4, 3)]).unwrap();
        assert_eq!(g.dfs(&0, &3).unwrap().into_path(), Some(vec![0, 1, 2, 3]));
        assert_eq!(g.bfs(&0, &3).unwrap().into_path(), Some(vec![0, 4, 3]));
        // adjacency is left untouched by the reversed expansion
        assert_eq!(g.neighbors_of(&0), Ok(&[1, 4][..]));
    }

    #[test]
    fn string_labels() {
        let mut b = GraphBuilder::new_undirected();
        b.connect_cycle(["a", "b", "c", "d", "e"]);
        let g = b.build().unwrap();
        assert_eq!(
            g.bfs(&"a", &"d").unwrap().into_path(),
            Some(vec!["a", "e", "d"])
        );
    }

    #[test]
    fn bfs_paths_are_shortest() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [10u32, 20, 50] {
            for m_ub in [n as usize, 2 * n as usize] {
                let g = random_undirected_graph(rng, n, m_ub);
                let search = g.path_search().max_iterations(usize::MAX);

                for target in 1..n {
                    let bfs = search.bfs(&0, &target).unwrap();
                    let dfs = search.dfs(&0, &target).unwrap();
                    assert_eq!(bfs.is_found(), dfs.is_found());

                    if let (Some(shortest), Some(any)) = (bfs.path(), dfs.path()) {
                        assert_valid_path(&g, shortest, &0, &target);
                        assert_valid_path(&g, any, &0, &target);
                        assert!(shortest.len() <= any.len());
                    }
                }
            }
        }
    }
}
