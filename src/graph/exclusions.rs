use crate::collections::FxIndexSet;


/// Transient set of edges and nodes hidden from a traversal
/// The graph itself is never touched, dropping the set restores the full graph
#[derive(Clone, Debug, Default)]
pub struct Exclusions<'a> {
    edges: FxIndexSet<(&'a str, &'a str)>, // stored with endpoints sorted, graph is undirected
    nodes: FxIndexSet<&'a str>,
}

impl<'a> Exclusions<'a> {

    pub fn new() -> Self {
        Self::default()
    }

    /// Hide the undirected edge between `a` and `b`
    pub fn exclude_edge(&mut self, a: &'a str, b: &'a str) {
        self.edges.insert(ordered(a, b));
    }

    /// Hide a node along with every edge touching it
    pub fn exclude_node(&mut self, node: &'a str) {
        self.nodes.insert(node);
    }

    pub fn is_node_excluded(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// True if the edge `from` -> `to` may be traversed
    pub fn allows(&self, from: &str, to: &str) -> bool {
        !self.nodes.contains(from)
            && !self.nodes.contains(to)
            && !self.edges.contains(&ordered(from, to))
    }
}

fn ordered<'s>(a: &'s str, b: &'s str) -> (&'s str, &'s str) {
    if a <= b { (a, b) } else { (b, a) }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_exclusion_is_undirected() {
        let mut exclusions = Exclusions::new();
        exclusions.exclude_edge("B", "A");

        assert!(!exclusions.allows("A", "B"));
        assert!(!exclusions.allows("B", "A"));
        assert!(exclusions.allows("A", "C"));
    }

    #[test]
    fn test_node_exclusion_hides_incident_edges() {
        let mut exclusions = Exclusions::new();
        exclusions.exclude_node("C");

        assert!(exclusions.is_node_excluded("C"));
        assert!(!exclusions.allows("A", "C"));
        assert!(!exclusions.allows("C", "E"));
        assert!(exclusions.allows("A", "B"));
    }
}
