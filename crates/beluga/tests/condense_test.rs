use beluga::graphlib::{Graph, GraphError, VertexLabel};
use beluga::{CondenseOptions, Error, Retrieval, condense};

fn new_plan() -> Graph<Retrieval, ()> {
    let mut g = Graph::new();
    g.add_vertex("vs", Retrieval::named("virtual source")).unwrap();
    g.add_vertex("vt", Retrieval::named("virtual target")).unwrap();
    g.label_vertex(VertexLabel::VirtualSource, "vs").unwrap();
    g.label_vertex(VertexLabel::VirtualTarget, "vt").unwrap();
    g
}

fn fast(name: &str) -> Retrieval {
    Retrieval::with_times(name, vec![0.0], vec![1.0])
}

fn options(threshold: f64) -> CondenseOptions {
    CondenseOptions { threshold }
}

/// One slow producer feeding a chain of three instant retrievals.
fn chain_plan() -> Graph<Retrieval, ()> {
    let mut g = new_plan();
    g.add_vertex("P", Retrieval::with_times("P", vec![0.0], vec![50.0])).unwrap();
    g.add_vertex("A", Retrieval::with_times("A", vec![10.0], vec![0.0])).unwrap();
    g.add_vertex("B", Retrieval::with_times("B", vec![20.0], vec![0.0])).unwrap();
    g.add_vertex("C", Retrieval::with_times("C", vec![30.0], vec![0.0])).unwrap();
    g.add_edge("vs->P", "vs", "P", ()).unwrap();
    g.add_edge("P->A", "P", "A", ()).unwrap();
    g.add_edge("A->B", "A", "B", ()).unwrap();
    g.add_edge("B->C", "B", "C", ()).unwrap();
    g.add_edge("C->vt", "C", "vt", ()).unwrap();
    g
}

#[test]
fn a_fast_chain_folds_into_one_synthetic_vertex() {
    let g = chain_plan();
    let out = condense(&g, &options(0.0)).unwrap();

    assert_eq!(out.vertex_count(), 4);
    assert!(out.contains_vertex("condensed#A"));
    assert!(!out.contains_vertex("A"));
    assert!(!out.contains_vertex("B"));
    assert!(!out.contains_vertex("C"));
    assert!(out.contains_vertex("P"));

    assert!(out.contains_edge("P->condensed#A"));
    assert!(out.contains_edge("condensed#A->vt"));
    assert_eq!(out.edge_count(), 3);
}

#[test]
fn the_synthetic_payload_spans_first_start_to_last_end() {
    let g = chain_plan();
    let out = condense(&g, &options(0.0)).unwrap();

    let data = out.vertex_data("condensed#A").unwrap();
    assert_eq!(data.start_times, Some(vec![10.0]));
    assert_eq!(data.elapsed_times, Some(vec![20.0]));
    assert_eq!(
        data.condensed_members,
        Some(vec!["A".to_string(), "B".to_string(), "C".to_string()])
    );
    assert_eq!(data.name, "3 retrievals");
}

#[test]
fn fast_vertices_visible_from_different_roots_stay_apart() {
    let mut g = new_plan();
    g.add_vertex("r1", fast("r1")).unwrap();
    g.add_vertex("r2", fast("r2")).unwrap();
    g.add_vertex("m", fast("m")).unwrap();
    g.add_vertex("m1", fast("m1")).unwrap();
    g.add_edge("vs->r1", "vs", "r1", ()).unwrap();
    g.add_edge("vs->r2", "vs", "r2", ()).unwrap();
    g.add_edge("r1->m", "r1", "m", ()).unwrap();
    g.add_edge("r2->m", "r2", "m", ()).unwrap();
    g.add_edge("r1->m1", "r1", "m1", ()).unwrap();
    g.add_edge("m->vt", "m", "vt", ()).unwrap();
    g.add_edge("m1->vt", "m1", "vt", ()).unwrap();

    let out = condense(&g, &options(5.0)).unwrap();

    // m sees both roots, m1 only r1; only {r1, m1} may merge.
    assert!(out.contains_vertex("condensed#r1"));
    assert!(out.contains_vertex("r2"));
    assert!(out.contains_vertex("m"));
    assert!(!out.contains_vertex("r1"));
    assert!(!out.contains_vertex("m1"));

    let members = out
        .vertex_data("condensed#r1")
        .and_then(|d| d.condensed_members.clone())
        .unwrap();
    assert_eq!(members, vec!["r1", "m1"]);
}

#[test]
fn edges_into_and_out_of_a_group_are_remapped_and_deduplicated() {
    let mut g = new_plan();
    g.add_vertex("r", fast("r")).unwrap();
    g.add_vertex("a", fast("a")).unwrap();
    g.add_vertex("b", fast("b")).unwrap();
    g.add_vertex("z", Retrieval::with_times("z", vec![0.0], vec![100.0])).unwrap();
    g.add_edge("vs->r", "vs", "r", ()).unwrap();
    g.add_edge("r->a", "r", "a", ()).unwrap();
    g.add_edge("r->b", "r", "b", ()).unwrap();
    g.add_edge("a->z", "a", "z", ()).unwrap();
    g.add_edge("b->z", "b", "z", ()).unwrap();
    g.add_edge("z->vt", "z", "vt", ()).unwrap();

    let out = condense(&g, &options(5.0)).unwrap();

    // Interior edges vanish, the two edges into z collapse into one.
    assert_eq!(out.edge_count(), 3);
    assert!(out.contains_edge("vs->condensed#r"));
    assert!(out.contains_edge("condensed#r->z"));
    assert!(out.contains_edge("z->vt"));
}

#[test]
fn the_synthetic_vertex_takes_the_first_members_position() {
    let g = chain_plan();
    let out = condense(&g, &options(0.0)).unwrap();

    let ids = out.vertex_ids();
    assert_eq!(ids, vec!["vs", "vt", "P", "condensed#A"]);
}

#[test]
fn sentinel_labels_survive_condensation() {
    let g = chain_plan();
    let out = condense(&g, &options(0.0)).unwrap();

    assert_eq!(out.vertex_by_label(VertexLabel::VirtualSource), Some("vs"));
    assert_eq!(out.vertex_by_label(VertexLabel::VirtualTarget), Some("vt"));
}

#[test]
fn condensing_twice_changes_nothing_more() {
    let g = chain_plan();
    let once = condense(&g, &options(0.0)).unwrap();
    let twice = condense(&once, &options(0.0)).unwrap();
    assert_eq!(once.dumps(), twice.dumps());
}

#[test]
fn vertices_without_timing_are_never_fast() {
    let mut g = new_plan();
    g.add_vertex("bare", Retrieval::named("bare")).unwrap();
    g.add_vertex("quick", fast("quick")).unwrap();
    g.add_edge("vs->bare", "vs", "bare", ()).unwrap();
    g.add_edge("bare->quick", "bare", "quick", ()).unwrap();
    g.add_edge("quick->vt", "quick", "vt", ()).unwrap();

    let out = condense(&g, &options(1_000_000.0)).unwrap();

    assert!(out.contains_vertex("bare"));
    assert!(out.contains_vertex("quick"));
    assert_eq!(out.vertex_count(), 4);
}

#[test]
fn a_vertex_over_the_threshold_on_one_partition_is_not_fast() {
    let mut g = new_plan();
    g.add_vertex("mixed", Retrieval::with_times("mixed", vec![0.0, 0.0], vec![1.0, 30.0]))
        .unwrap();
    g.add_vertex("quick", fast("quick")).unwrap();
    g.add_edge("vs->mixed", "vs", "mixed", ()).unwrap();
    g.add_edge("mixed->quick", "mixed", "quick", ()).unwrap();
    g.add_edge("quick->vt", "quick", "vt", ()).unwrap();

    let out = condense(&g, &CondenseOptions::default()).unwrap();

    assert!(out.contains_vertex("mixed"));
    assert!(out.contains_vertex("quick"));
}

#[test]
fn members_without_start_times_count_from_zero() {
    let mut g = new_plan();
    g.add_vertex("P", Retrieval::with_times("P", vec![0.0], vec![50.0])).unwrap();
    g.add_vertex("a", Retrieval::with_elapsed("a", vec![2.0])).unwrap();
    g.add_vertex("b", Retrieval::with_elapsed("b", vec![3.0])).unwrap();
    g.add_edge("vs->P", "vs", "P", ()).unwrap();
    g.add_edge("P->a", "P", "a", ()).unwrap();
    g.add_edge("a->b", "a", "b", ()).unwrap();
    g.add_edge("b->vt", "b", "vt", ()).unwrap();

    let out = condense(&g, &options(5.0)).unwrap();

    let data = out.vertex_data("condensed#a").unwrap();
    assert_eq!(data.start_times, Some(vec![0.0]));
    assert_eq!(data.elapsed_times, Some(vec![3.0]));
}

#[test]
fn a_plan_with_nothing_fast_keeps_its_shape() {
    let mut g = new_plan();
    g.add_vertex("s1", Retrieval::with_times("s1", vec![0.0], vec![90.0])).unwrap();
    g.add_vertex("s2", Retrieval::with_times("s2", vec![0.0], vec![80.0])).unwrap();
    g.add_edge("vs->s1", "vs", "s1", ()).unwrap();
    g.add_edge("s1->s2", "s1", "s2", ()).unwrap();
    g.add_edge("s2->vt", "s2", "vt", ()).unwrap();

    let out = condense(&g, &CondenseOptions::default()).unwrap();
    assert_eq!(out.dumps(), g.dumps());
}

#[test]
fn a_plan_without_sentinel_labels_is_rejected() {
    let mut g: Graph<Retrieval, ()> = Graph::new();
    g.add_vertex("a", fast("a")).unwrap();

    let err = condense(&g, &CondenseOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        Error::Graph(GraphError::MissingLabel(VertexLabel::VirtualSource))
    ));
}
