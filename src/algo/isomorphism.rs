/*!
# Graph Isomorphism

Two modes are offered by [`IsomorphismTest`]:

- **search** (default): a backtracking search over vertex mappings. Candidates must agree in
  out-degree, in-degree and self-loop, and every partial mapping must preserve adjacency in
  both directions to all previously mapped vertices. Exact, exponential in the worst case.
- **ordered**: the fast positional check that pairs the `i`-th vertex of one graph with the
  `i`-th vertex of the other and compares the relabelled adjacency lists (including neighbor
  order). It only succeeds if that particular pairing is an isomorphism, so it may reject
  isomorphic graphs.
*/

use std::cmp::Reverse;

use fxhash::FxHashSet;
use itertools::Itertools;
use log::trace;

use super::*;

/// Configurable isomorphism test between two graphs.
///
/// # Examples
/// ```
/// use adjgraphs::{prelude::*, algo::*};
///
/// // path 0 - 1 - 2 against path b - a - c
/// let g = Graph::new([0, 1, 2], [(0, 1), (1, 0), (1, 2), (2, 1)]).unwrap();
/// let h = Graph::new(['a', 'b', 'c'], [('a', 'b'), ('b', 'a'), ('a', 'c'), ('c', 'a')]).unwrap();
///
/// assert!(IsomorphismTest::new(&g, &h).is_isomorphic());
/// assert!(!IsomorphismTest::new(&g, &h).ordered(true).is_isomorphic());
/// ```
pub struct IsomorphismTest<'a, G, H>
where
    G: AdjacencyList,
    H: AdjacencyList,
{
    first: &'a G,
    second: &'a H,
    ordered: bool,
}

impl<'a, G, H> IsomorphismTest<'a, G, H>
where
    G: AdjacencyList,
    H: AdjacencyList,
{
    /// Creates a test in search mode
    pub fn new(first: &'a G, second: &'a H) -> Self {
        Self {
            first,
            second,
            ordered: false,
        }
    }

    /// Switches between search mode (`false`) and the positional check (`true`)
    pub fn set_ordered(&mut self, ordered: bool) {
        self.ordered = ordered;
    }

    /// Switches between search mode (`false`) and the positional check (`true`)
    pub fn ordered(mut self, ordered: bool) -> Self {
        self.set_ordered(ordered);
        self
    }

    /// Returns *true* if an isomorphism was found
    pub fn is_isomorphic(&self) -> bool {
        self.find_mapping().is_some()
    }

    /// Returns pairs `(vertex of first, vertex of second)` forming an isomorphism,
    /// listed in the vertex order of the first graph.
    /// Graphs whose vertex or edge collections differ in size are never isomorphic; parallel
    /// edges and repeated vertices count.
    pub fn find_mapping(&self) -> Option<Vec<(G::V, H::V)>> {
        let (first, second) = (self.first, self.second);
        if first.count_vertices() != second.count_vertices()
            || first.count_edges() != second.count_edges()
            || first.number_of_vertices() != second.number_of_vertices()
        {
            return None;
        }

        let mapping = if self.ordered {
            self.positional_mapping()?
        } else {
            self.search_mapping()?
        };

        mapping
            .into_iter()
            .enumerate()
            .map(|(i, j)| {
                Some((
                    self.first.vertex_at(i)?.clone(),
                    self.second.vertex_at(j)?.clone(),
                ))
            })
            .collect()
    }

    /// Pairs vertices by position and checks whether that pairing is an isomorphism
    fn positional_mapping(&self) -> Option<Vec<usize>> {
        let (first, second) = (self.first, self.second);

        if first.degree_sequence() != second.degree_sequence() {
            return None;
        }

        for (u1, u2) in first.vertices().zip(second.vertices()) {
            let (n1, n2) = (first.try_neighbors_of(u1)?, second.try_neighbors_of(u2)?);
            if n1.len() != n2.len() {
                return None;
            }

            for (x1, x2) in n1.iter().zip(n2) {
                if first.index_of(x1)? != second.index_of(x2)? {
                    return None;
                }
            }
        }

        Some((0..first.number_of_vertices()).collect())
    }

    fn search_mapping(&self) -> Option<Vec<usize>> {
        let first = CompactGraph::new(self.first);
        let second = CompactGraph::new(self.second);

        if first.arcs.len() != second.arcs.len()
            || first.signatures.iter().sorted().ne(second.signatures.iter().sorted())
        {
            return None;
        }

        let n = first.len();
        if n == 0 {
            return Some(Vec::new());
        }

        let mut matcher = Matcher {
            order: first.matching_order(),
            first: &first,
            second: &second,
            mapping: vec![None; n],
            used: VertexBitSet::new(n as VertexIndex),
            steps: 0,
        };

        let found = matcher.extend(0);
        trace!(
            "Isomorphism search on {n} vertices took {} steps: {}",
            matcher.steps,
            if found { "found" } else { "none" }
        );

        if found {
            matcher.mapping.into_iter().collect()
        } else {
            None
        }
    }
}

/// Structural summary used to prune candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Signature {
    out_degree: usize,
    in_degree: usize,
    has_loop: bool,
}

/// Index-based copy of a graph: vertex `i` is the `i`-th registered vertex
struct CompactGraph {
    adjacent: Vec<Vec<usize>>,
    arcs: FxHashSet<(usize, usize)>,
    signatures: Vec<Signature>,
}

impl CompactGraph {
    fn new<G: AdjacencyList>(graph: &G) -> Self {
        let n = graph.number_of_vertices();
        let mut adjacent = vec![Vec::new(); n];
        let mut arcs = FxHashSet::default();
        let mut out_degrees = vec![0; n];
        let mut in_degrees = vec![0; n];

        for (i, u) in graph.vertices().enumerate() {
            for v in graph.try_neighbors_of(u).unwrap_or_default() {
                let Some(j) = graph.index_of(v) else {
                    continue;
                };

                arcs.insert((i, j));
                out_degrees[i] += 1;
                in_degrees[j] += 1;
                adjacent[i].push(j);
                if i != j {
                    adjacent[j].push(i);
                }
            }
        }

        let signatures = (0..n)
            .map(|i| Signature {
                out_degree: out_degrees[i],
                in_degree: in_degrees[i],
                has_loop: arcs.contains(&(i, i)),
            })
            .collect();

        Self {
            adjacent,
            arcs,
            signatures,
        }
    }

    fn len(&self) -> usize {
        self.signatures.len()
    }

    fn has_arc(&self, u: usize, v: usize) -> bool {
        self.arcs.contains(&(u, v))
    }

    /// Orders vertices such that each one has as many already ordered neighbors as possible,
    /// which lets the search reject bad candidates early.
    fn matching_order(&self) -> Vec<usize> {
        let n = self.len();
        let mut order = Vec::with_capacity(n);
        let mut placed = vec![false; n];
        let mut links = vec![0usize; n];

        while let Some(next) = (0..n)
            .filter(|&i| !placed[i])
            .max_by_key(|&i| (links[i], self.adjacent[i].len(), Reverse(i)))
        {
            placed[next] = true;
            order.push(next);
            for &j in &self.adjacent[next] {
                links[j] += 1;
            }
        }

        order
    }
}

/// Backtracking state: `mapping[x1] = Some(x2)` maps vertex `x1` of the first graph onto `x2`
struct Matcher<'c> {
    first: &'c CompactGraph,
    second: &'c CompactGraph,
    order: Vec<usize>,
    mapping: Vec<Option<usize>>,
    used: VertexBitSet,
    steps: usize,
}

impl Matcher<'_> {
    fn extend(&mut self, depth: usize) -> bool {
        let Some(&x1) = self.order.get(depth) else {
            return true;
        };

        for x2 in 0..self.second.len() {
            if self.used.get_bit(x2 as VertexIndex)
                || self.first.signatures[x1] != self.second.signatures[x2]
                || !self.is_consistent(depth, x1, x2)
            {
                continue;
            }

            self.steps += 1;
            self.mapping[x1] = Some(x2);
            self.used.set_bit(x2 as VertexIndex);

            if self.extend(depth + 1) {
                return true;
            }

            self.mapping[x1] = None;
            self.used.clear_bit(x2 as VertexIndex);
        }

        false
    }

    /// Checks that mapping `x1 -> x2` preserves arcs to and from all vertices mapped so far
    fn is_consistent(&self, depth: usize, x1: usize, x2: usize) -> bool {
        self.order[..depth].iter().all(|&y1| {
            let Some(y2) = self.mapping[y1] else {
                return false;
            };
            self.first.has_arc(x1, y1) == self.second.has_arc(x2, y2)
                && self.first.has_arc(y1, x1) == self.second.has_arc(y2, x2)
        })
    }
}

/// Provides isomorphism tests directly on graphs
pub trait Isomorphism: AdjacencyList + Sized {
    /// Tests whether `self` and `other` are isomorphic by searching for a mapping
    fn is_isomorphic<H: AdjacencyList>(&self, other: &H) -> bool {
        IsomorphismTest::new(self, other).is_isomorphic()
    }

    /// Tests whether pairing the vertices of both graphs by position is an isomorphism
    fn is_isomorphic_ordered<H: AdjacencyList>(&self, other: &H) -> bool {
        IsomorphismTest::new(self, other).ordered(true).is_isomorphic()
    }

    /// Searches an isomorphism and returns it as `(vertex of self, vertex of other)` pairs
    fn find_isomorphism<H: AdjacencyList>(&self, other: &H) -> Option<Vec<(Self::V, H::V)>> {
        IsomorphismTest::new(self, other).find_mapping()
    }
}

impl<G> Isomorphism for G where G: AdjacencyList {}
