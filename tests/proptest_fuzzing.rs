//! Property-Based Testing for Dagwalk
//!
//! Uses proptest to fuzz-test ordering, the walk metric, and the
//! line parsers. Coverage targets:
//! - Topological sort correctness (graph/topo.rs)
//! - Walk weight accounting (graph/walk.rs)
//! - Parser total-ness over arbitrary text (input.rs)
//! - Driver loop robustness (runner.rs)

use proptest::prelude::*;

// =============================================================================
// TEST 1: Topological Sort Correctness
// =============================================================================
// Target: src/graph/topo.rs
// Risk: order violating an edge, duplicated or dropped vertices

mod sort_fuzzing {
    use super::*;
    use dagwalk::Digraph;

    prop_compose! {
        /// Vertex count plus raw edge material; edges are normalized to
        /// point from lower to higher index, so the graph is acyclic by
        /// construction
        fn arb_dag_parts()(
            vertex_count in 2usize..40,
            raw_edges in proptest::collection::vec(
                (any::<usize>(), any::<usize>(), -1000i32..1000),
                0..200,
            ),
        ) -> (usize, Vec<(usize, usize, i32)>) {
            (vertex_count, raw_edges)
        }
    }

    fn build_dag(vertex_count: usize, raw_edges: &[(usize, usize, i32)]) -> Digraph {
        let mut graph = Digraph::new(vertex_count);
        for &(x, y, weight) in raw_edges {
            let (a, b) = (x % vertex_count, y % vertex_count);
            if a != b {
                let (from, to) = if a < b { (a, b) } else { (b, a) };
                graph.add_edge(from, to, weight).unwrap();
            }
        }
        graph
    }

    proptest! {
        /// Property: Every generated DAG sorts, and the order holds each
        /// vertex exactly once
        #[test]
        fn test_sort_is_a_permutation((vertex_count, raw_edges) in arb_dag_parts()) {
            let graph = build_dag(vertex_count, &raw_edges);
            let order = graph.topological_sort().unwrap();

            let mut seen: Vec<usize> = order.iter().map(|v| v.index()).collect();
            seen.sort_unstable();
            let expected: Vec<usize> = (0..vertex_count).collect();
            prop_assert_eq!(seen, expected);
        }

        /// Property: The order puts every edge's source before its target
        #[test]
        fn test_sort_respects_edges((vertex_count, raw_edges) in arb_dag_parts()) {
            let graph = build_dag(vertex_count, &raw_edges);
            let order = graph.topological_sort().unwrap();

            let mut position = vec![0usize; vertex_count];
            for (i, v) in order.iter().enumerate() {
                position[v.index()] = i;
            }
            for v in graph.vertices() {
                for edge in graph.edges_from(v) {
                    prop_assert!(position[v.index()] < position[edge.to.index()]);
                }
            }
        }

        /// Property: Sorting twice yields the identical order
        #[test]
        fn test_sort_is_deterministic((vertex_count, raw_edges) in arb_dag_parts()) {
            let graph = build_dag(vertex_count, &raw_edges);
            prop_assert_eq!(
                graph.topological_sort().unwrap(),
                graph.topological_sort().unwrap()
            );
        }

        /// Property: Adding the reverse of an existing edge always
        /// produces a detected cycle
        #[test]
        fn test_back_edge_is_always_caught((vertex_count, raw_edges) in arb_dag_parts()) {
            let mut graph = build_dag(vertex_count, &raw_edges);
            prop_assume!(graph.edge_count() > 0);

            let (x, y, _) = raw_edges
                .iter()
                .copied()
                .find(|(x, y, _)| x % vertex_count != y % vertex_count)
                .unwrap();
            let (a, b) = (x % vertex_count, y % vertex_count);
            let (from, to) = if a < b { (a, b) } else { (b, a) };

            graph.add_edge(to, from, 1).unwrap();
            prop_assert!(graph.detect_cycles().is_err());
        }
    }
}

// =============================================================================
// TEST 2: Walk Weight Accounting
// =============================================================================
// Target: src/graph/walk.rs
// Risk: missed parallel edges, wrong pair, i32 overflow in the sum

mod walk_fuzzing {
    use super::*;
    use dagwalk::Digraph;

    proptest! {
        /// Property: The metric equals a naive recount of matching edges
        #[test]
        fn test_walk_matches_naive_recount(
            weights in proptest::collection::vec(any::<i32>(), 0..50),
            decoys in proptest::collection::vec(any::<i32>(), 0..10),
        ) {
            // Chain 0 → 1 → 2 so the order is fixed at [0, 1, 2];
            // `weights` are parallel 0 → 1 edges, `decoys` go 1 → 2
            let mut graph = Digraph::new(3);
            graph.add_edge(0, 1, 1).unwrap();
            graph.add_edge(1, 2, 1).unwrap();
            for &w in &weights {
                graph.add_edge(0, 1, w).unwrap();
            }
            for &w in &decoys {
                graph.add_edge(1, 2, w).unwrap();
            }

            let order = graph.topological_sort().unwrap();
            prop_assert_eq!(order[0].index(), 0);
            prop_assert_eq!(order[1].index(), 1);

            let expected: i64 = 1 + weights.iter().map(|&w| i64::from(w)).sum::<i64>();
            prop_assert_eq!(graph.walking_distance(&order).unwrap(), expected);
        }

        /// Property: The metric never overflows for in-bounds graphs
        #[test]
        fn test_walk_survives_extreme_weights(
            count in 1usize..100,
            weight in prop_oneof![Just(i32::MIN), Just(i32::MAX)],
        ) {
            let mut graph = Digraph::new(2);
            for _ in 0..count {
                graph.add_edge(0, 1, weight).unwrap();
            }

            let order = graph.topological_sort().unwrap();
            let total = graph.walking_distance(&order).unwrap();
            prop_assert_eq!(total, count as i64 * i64::from(weight));
        }
    }
}

// =============================================================================
// TEST 3: Parser Total-ness
// =============================================================================
// Target: src/input.rs
// Risk: panics on arbitrary text, wrong classification of bad lines

mod parser_fuzzing {
    use super::*;
    use dagwalk::{parse_edge, parse_header};

    proptest! {
        /// Property: Header parsing never panics, whatever the line
        #[test]
        fn test_parse_header_never_panics(line in ".*") {
            let _ = parse_header(&line, 1);
        }

        /// Property: Edge parsing never panics, whatever the line
        #[test]
        fn test_parse_edge_never_panics(line in ".*") {
            let _ = parse_edge(&line, 1);
        }

        /// Property: Any two in-bounds counts round-trip through the
        /// header parser
        #[test]
        fn test_valid_headers_always_parse(
            vertices in 2usize..=10_000,
            edges in 1usize..=100_000,
        ) {
            let header = parse_header(&format!("{} {}", vertices, edges), 1).unwrap();
            prop_assert_eq!(header.vertex_count, vertices);
            prop_assert_eq!(header.edge_count, edges);
        }

        /// Property: Any integer triple round-trips through the edge
        /// parser
        #[test]
        fn test_integer_triples_always_parse(
            from in any::<i32>(),
            to in any::<i32>(),
            weight in any::<i32>(),
        ) {
            let edge = parse_edge(&format!("{} {} {}", from, to, weight), 1).unwrap();
            prop_assert_eq!(edge.from, i64::from(from));
            prop_assert_eq!(edge.to, i64::from(to));
            prop_assert_eq!(edge.weight, weight);
        }
    }
}

// =============================================================================
// TEST 4: Driver Loop Robustness
// =============================================================================
// Target: src/runner.rs
// Risk: panics or hangs on arbitrary input streams

mod runner_fuzzing {
    use super::*;
    use dagwalk::runner::{RunOptions, Runner};

    proptest! {
        /// Property: The driver loop terminates without panicking on
        /// arbitrary multi-line text
        #[test]
        fn test_process_never_panics(
            lines in proptest::collection::vec("[ -~]{0,24}", 0..24),
        ) {
            let input = lines.join("\n");
            let mut runner = Runner::new(Vec::new(), RunOptions::default());
            let _ = runner.process(input.as_bytes());
        }

        /// Property: Raw byte streams never panic either; invalid UTF-8
        /// surfaces as an error from the line reader
        #[test]
        fn test_process_never_panics_on_raw_bytes(
            bytes in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let mut runner = Runner::new(Vec::new(), RunOptions::default());
            let _ = runner.process(bytes.as_slice());
        }

        /// Property: A well-formed prefix is never spoiled by arbitrary
        /// trailing bytes after the terminator
        #[test]
        fn test_terminator_shields_trailing_garbage(suffix in ".{0,100}") {
            let input = format!("2 1\n0 1 5\n0 0\n{}", suffix);
            let mut runner = Runner::new(Vec::new(), RunOptions::default());
            let summary = runner.process(input.as_bytes()).unwrap();
            prop_assert_eq!(summary.cases, 1);
            prop_assert_eq!(summary.failed, 0);
        }
    }
}
