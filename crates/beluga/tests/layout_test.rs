use beluga::graphlib::Graph;
use beluga::{Error, LayoutOptions, layout};

fn new_graph() -> Graph<(), ()> {
    Graph::new()
}

fn add_vertices(g: &mut Graph<(), ()>, ids: &[&str]) {
    for id in ids {
        g.add_vertex(*id, ()).unwrap();
    }
}

#[test]
fn a_chain_stacks_vertically_through_the_slot_center() {
    let mut g = new_graph();
    add_vertices(&mut g, &["a", "b", "c"]);
    g.add_edge("ab", "a", "b", ()).unwrap();
    g.add_edge("bc", "b", "c", ()).unwrap();

    let drawn = layout(&g, &LayoutOptions::default()).unwrap();

    assert_eq!(drawn.vertices["a"].x, 60.0);
    assert_eq!(drawn.vertices["a"].y, 0.0);
    assert_eq!(drawn.vertices["b"].y, 100.0);
    assert_eq!(drawn.vertices["c"].y, 200.0);
    assert!(drawn.edge_bends.is_empty());
}

#[test]
fn every_graph_vertex_gets_a_point_and_synthetics_get_none() {
    let mut g = new_graph();
    add_vertices(&mut g, &["a", "b", "c"]);
    g.add_edge("ab", "a", "b", ()).unwrap();
    g.add_edge("bc", "b", "c", ()).unwrap();
    g.add_edge("ac", "a", "c", ()).unwrap();

    let drawn = layout(&g, &LayoutOptions::default()).unwrap();

    assert_eq!(drawn.vertices.len(), 3);
    for id in ["a", "b", "c"] {
        assert!(drawn.vertices.contains_key(id));
    }
    assert!(!drawn.vertices.contains_key("_d"));
}

#[test]
fn a_long_edge_bends_once_per_skipped_layer() {
    let mut g = new_graph();
    add_vertices(&mut g, &["a", "b", "c", "d"]);
    g.add_edge("ab", "a", "b", ()).unwrap();
    g.add_edge("bc", "b", "c", ()).unwrap();
    g.add_edge("cd", "c", "d", ()).unwrap();
    g.add_edge("ad", "a", "d", ()).unwrap();

    let drawn = layout(&g, &LayoutOptions::default()).unwrap();

    let bends = &drawn.edge_bends["ad"];
    assert_eq!(bends.len(), 2);
    assert_eq!(bends[0].y, 100.0);
    assert_eq!(bends[1].y, 200.0);
}

#[test]
fn layers_spread_over_the_width_of_the_widest_layer() {
    let mut g = new_graph();
    add_vertices(&mut g, &["root", "l", "r", "leaf"]);
    g.add_edge("rl", "root", "l", ()).unwrap();
    g.add_edge("rr", "root", "r", ()).unwrap();
    g.add_edge("ll", "l", "leaf", ()).unwrap();
    g.add_edge("rl2", "r", "leaf", ()).unwrap();

    let drawn = layout(&g, &LayoutOptions::default()).unwrap();

    // Two slots of 120 in the middle layer, one slot of 240 elsewhere.
    assert_eq!(drawn.vertices["root"].x, 120.0);
    assert_eq!(drawn.vertices["leaf"].x, 120.0);
    let mut middle = [drawn.vertices["l"].x, drawn.vertices["r"].x];
    middle.sort_by(f64::total_cmp);
    assert_eq!(middle, [60.0, 180.0]);
}

#[test]
fn layer_height_and_vertex_width_are_tunable() {
    let mut g = new_graph();
    add_vertices(&mut g, &["a", "b"]);
    g.add_edge("ab", "a", "b", ()).unwrap();

    let options = LayoutOptions {
        min_vertex_width: 50.0,
        layer_height: 10.0,
        ..LayoutOptions::default()
    };
    let drawn = layout(&g, &options).unwrap();

    assert_eq!(drawn.vertices["a"].x, 25.0);
    assert_eq!(drawn.vertices["a"].y, 0.0);
    assert_eq!(drawn.vertices["b"].y, 10.0);
}

#[test]
fn a_cyclic_graph_is_rejected() {
    let mut g = new_graph();
    add_vertices(&mut g, &["a", "b"]);
    g.add_edge("ab", "a", "b", ()).unwrap();
    g.add_edge("ba", "b", "a", ()).unwrap();

    let err = layout(&g, &LayoutOptions::default()).unwrap_err();
    assert!(matches!(err, Error::CyclicInput { .. }));
}

#[test]
fn an_empty_graph_draws_nothing() {
    let g = new_graph();
    let drawn = layout(&g, &LayoutOptions::default()).unwrap();
    assert!(drawn.vertices.is_empty());
    assert!(drawn.edge_bends.is_empty());
}
