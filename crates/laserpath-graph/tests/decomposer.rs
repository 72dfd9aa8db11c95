use laserpath_core::{Edge, Point};
use laserpath_graph::{CutGraph, PathDecomposer, TieBreak, CONSUMED};

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn edge(a: Point, b: Point) -> Edge {
    Edge::between(a, b)
}

fn grid(size: usize) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..=size {
        for j in 0..size {
            let (i, j) = (i as f64, j as f64);
            edges.push(edge(p(j, i), p(j + 1.0, i)));
            edges.push(edge(p(i, j), p(i, j + 1.0)));
        }
    }
    edges
}

#[test]
fn test_take_step_picks_nearest_and_consumes_both_directions() {
    let center = p(0.0, 0.0);
    let near = p(1.0, 0.0);
    let far = p(0.0, 4.0);
    let mut graph = CutGraph::from_edges([edge(center, far), edge(center, near)]);

    let (next, weight) = graph
        .take_step(&center.key(), TieBreak::Lexicographic)
        .unwrap();
    assert_eq!(next, near.key());
    assert_eq!(weight, 1.0);
    assert_eq!(graph.weight(&center.key(), &near.key()), Some(CONSUMED));
    assert_eq!(graph.weight(&near.key(), &center.key()), Some(CONSUMED));
    assert_eq!(graph.weight(&center.key(), &far.key()), Some(4.0));
}

#[test]
fn test_take_step_exhausts_node() {
    let center = p(0.0, 0.0);
    let mut graph = CutGraph::from_edges([
        edge(center, p(1.0, 0.0)),
        edge(center, p(0.0, 2.0)),
        edge(center, p(-3.0, 0.0)),
    ]);

    let mut taken = Vec::new();
    while let Some((next, _)) = graph.take_step(&center.key(), TieBreak::Lexicographic) {
        assert!(!taken.contains(&next));
        taken.push(next);
    }

    assert_eq!(taken.len(), 3);
    let neighbors = graph.neighbors(&center.key()).unwrap();
    assert!(neighbors.values().all(|w| *w == CONSUMED));
    assert_eq!(graph.available_edge_count(), 0);
}

#[test]
fn test_take_step_on_unknown_key() {
    let mut graph = CutGraph::new();
    assert!(graph
        .take_step(&p(1.0, 1.0).key(), TieBreak::Unordered)
        .is_none());
}

#[test]
fn test_lexicographic_tie_break() {
    let center = p(0.0, 0.0);
    let mut graph = CutGraph::from_edges([edge(center, p(2.0, 0.0)), edge(center, p(0.0, 2.0))]);
    let (next, _) = graph
        .take_step(&center.key(), TieBreak::Lexicographic)
        .unwrap();
    assert_eq!(next.as_str(), "X0.0Y2.0");
}

#[test]
fn test_single_segment_end_to_end() {
    let mut graph = CutGraph::from_edges([edge(p(0.0, 0.0), p(3.0, 0.0))]);
    let (paths, densities) = PathDecomposer::default().decompose(&mut graph).into_parts();

    let keys: Vec<&str> = paths[0].iter().map(|k| k.as_str()).collect();
    assert_eq!(paths.len(), 1);
    assert_eq!(keys, vec!["X0.0Y0.0", "X3.0Y0.0"]);
    assert_eq!(densities, vec![3.0]);
}

#[test]
fn test_reversal_joins_both_sides_of_start() {
    // M has the smallest x - y, so the walk starts in the middle of the chain
    let m = p(0.0, 10.0);
    let l = p(3.0, 10.0);
    let r = p(0.0, 5.0);
    let mut graph = CutGraph::from_edges([edge(m, l), edge(m, r)]);

    let decomposition = PathDecomposer::default().decompose(&mut graph);
    assert_eq!(decomposition.len(), 1);

    let path = &decomposition.paths[0];
    assert_eq!(path.points, vec![r.key(), m.key(), l.key()]);
    assert_eq!(path.density, 8.0);
}

#[test]
fn test_empty_graph_yields_no_paths() {
    let mut graph = CutGraph::new();
    let decomposition = PathDecomposer::new(TieBreak::Unordered).decompose(&mut graph);
    assert!(decomposition.is_empty());
    assert_eq!(decomposition.into_parts(), (vec![], vec![]));
}

#[test]
fn test_disjoint_segments_become_separate_paths() {
    let mut graph = CutGraph::from_edges([
        edge(p(0.0, 0.0), p(1.0, 0.0)),
        edge(p(10.0, 10.0), p(10.0, 12.0)),
    ]);
    let decomposition = PathDecomposer::default().decompose(&mut graph);
    assert_eq!(decomposition.len(), 2);
    // (10, 12) has the smallest x - y, so its segment comes first
    assert_eq!(decomposition.densities(), vec![2.0, 1.0]);
}

#[test]
fn test_paths_use_each_original_edge_once() {
    for tie_break in [TieBreak::Lexicographic, TieBreak::Unordered] {
        let mut graph = CutGraph::from_edges(grid(4));
        let original = graph.clone();
        let decomposition = PathDecomposer::new(tie_break).decompose(&mut graph);

        let mut walked = Vec::new();
        for path in &decomposition.paths {
            assert!(path.points.len() >= 2);
            for pair in path.points.windows(2) {
                let weight = original.weight(&pair[0], &pair[1]).unwrap();
                assert!(weight > 0.0);
                let mut key = [pair[0].clone(), pair[1].clone()];
                key.sort();
                assert!(!walked.contains(&key), "edge walked twice: {:?}", key);
                walked.push(key);
            }
        }

        assert_eq!(walked.len(), original.edge_count());
        assert_eq!(graph.available_edge_count(), 0);
        assert!((decomposition.total_density() - 40.0).abs() < 1e-9);
    }
}

#[test]
fn test_square_is_one_closed_path() {
    let corners = [p(0.0, 0.0), p(5.0, 0.0), p(5.0, 5.0), p(0.0, 5.0)];
    let edges: Vec<Edge> = (0..4).map(|i| edge(corners[i], corners[(i + 1) % 4])).collect();
    let mut graph = CutGraph::from_edges(edges);

    let decomposition = PathDecomposer::default().decompose(&mut graph);
    assert_eq!(decomposition.len(), 1);
    assert_eq!(decomposition.paths[0].points.len(), 5);
    assert_eq!(decomposition.paths[0].density, 20.0);
    assert_eq!(decomposition.paths[0].edge_count(), 4);
}
