use laserpath_core::{Edge, Point};
use laserpath_graph::CutGraph;
use proptest::prelude::*;

fn edge(ax: f64, ay: f64, bx: f64, by: f64) -> Edge {
    Edge::between(Point::new(ax, ay), Point::new(bx, by))
}

proptest! {
    #[test]
    fn prop_insertion_is_symmetric(
        ax in -500.0f64..500.0, ay in -500.0f64..500.0,
        bx in -500.0f64..500.0, by in -500.0f64..500.0,
    ) {
        let e = edge(ax, ay, bx, by);
        let mut graph = CutGraph::new();
        graph.add_edge(&e);

        let (u, v) = (e.a().key(), e.b().key());
        prop_assert_eq!(graph.weight(&u, &v), Some(e.length()));
        prop_assert_eq!(graph.weight(&v, &u), Some(e.length()));
    }
}

#[test]
fn test_nodes_keep_duplicates() {
    let graph = CutGraph::from_edges([edge(0.0, 0.0, 1.0, 0.0), edge(1.0, 0.0, 1.0, 1.0)]);
    assert_eq!(graph.nodes().len(), 4);
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.nodes()[1], graph.nodes()[2]);
}

#[test]
fn test_duplicate_edge_last_write_wins() {
    let mut graph = CutGraph::new();
    graph.add_edge(&edge(0.0, 0.0, 2.0, 0.0));
    // Same endpoints, reversed direction, different quantization noise
    graph.add_edge(&edge(2.02, 0.0, 0.0, -0.01));

    let u = Point::new(0.0, 0.0).key();
    let v = Point::new(2.0, 0.0).key();
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.weight(&u, &v), Some(2.0));
    assert_eq!(graph.nodes().len(), 4);
}

#[test]
fn test_empty_graph() {
    let graph = CutGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.nodes().is_empty());
}

#[test]
fn test_collect_from_edges() {
    let graph: CutGraph = vec![edge(0.0, 0.0, 3.0, 4.0)].into_iter().collect();
    let u = Point::new(0.0, 0.0).key();
    let v = Point::new(3.0, 4.0).key();
    assert_eq!(graph.weight(&u, &v), Some(5.0));
    assert_eq!(graph.neighbors(&u).map(|n| n.len()), Some(1));
}
