use fxhash::FxHashMap;

use super::*;

/// Grouping of vertices into connected components
pub trait Connectivity: AdjacencyList + Sized {
    /// Partitions the vertices into connected components by a single scan over the edge list.
    ///
    /// Components appear in the order in which the scan first meets them; vertices without
    /// any edge follow as singletons in vertex order. Every registered vertex ends up in
    /// exactly one component. Edges are followed regardless of direction, so for a directed
    /// graph this yields its weakly connected components.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*};
    ///
    /// let g = Graph::new([0, 1, 2, 3, 4], [(0, 1), (1, 0), (3, 2), (2, 3)]).unwrap();
    /// assert_eq!(g.connected_components(), vec![vec![0, 1], vec![3, 2], vec![4]]);
    /// ```
    fn connected_components(&self) -> Vec<Vec<Self::V>>;

    /// Returns the number of connected components
    fn number_of_connected_components(&self) -> usize {
        self.connected_components().len()
    }

    /// Returns *true* if the graph consists of exactly one connected component
    fn is_connected(&self) -> bool {
        self.number_of_connected_components() == 1
    }
}

impl<G> Connectivity for G
where
    G: AdjacencyList,
{
    fn connected_components(&self) -> Vec<Vec<G::V>> {
        // merged components leave a `None` behind so that ids stay stable
        let mut components: Vec<Option<Vec<G::V>>> = Vec::new();
        let mut component_of: FxHashMap<G::V, usize> = FxHashMap::default();

        for Edge(u, v) in self.edge_list() {
            match (component_of.get(u).copied(), component_of.get(v).copied()) {
                (None, None) => {
                    let id = components.len();
                    let mut members = vec![u.clone()];
                    component_of.insert(u.clone(), id);
                    if u != v {
                        members.push(v.clone());
                        component_of.insert(v.clone(), id);
                    }
                    components.push(Some(members));
                }
                (Some(id), None) => {
                    component_of.insert(v.clone(), id);
                    if let Some(members) = &mut components[id] {
                        members.push(v.clone());
                    }
                }
                (None, Some(id)) => {
                    component_of.insert(u.clone(), id);
                    if let Some(members) = &mut components[id] {
                        members.push(u.clone());
                    }
                }
                (Some(a), Some(b)) if a != b => {
                    let (keep, absorb) = (a.min(b), a.max(b));
                    let absorbed = components[absorb].take().unwrap_or_default();
                    for w in &absorbed {
                        component_of.insert(w.clone(), keep);
                    }
                    if let Some(members) = &mut components[keep] {
                        members.extend(absorbed);
                    }
                }
                _ => {}
            }
        }

        let mut components: Vec<Vec<G::V>> = components.into_iter().flatten().collect();
        components.extend(
            self.vertices()
                .filter(|u| !component_of.contains_key(*u))
                .map(|u| vec![u.clone()]),
        );
        components
    }
}
