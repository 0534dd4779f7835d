use jetstream_lib::{
    build_graph, find_optimal_path, Cost, Graph, SearchOptions, SearchStrategy, Segment,
};
use proptest::prelude::*;

fn segments_strategy() -> impl Strategy<Value = Vec<Segment>> {
    prop::collection::vec((0u64..20, 1u64..10, 0u64..60), 1..8).prop_map(|raw| {
        raw.into_iter()
            .map(|(start, span, cost)| Segment::new(start, start + span, cost))
            .collect()
    })
}

fn cheapest(segments: &[Segment], base_cost: Cost) -> Cost {
    let graph = build_graph(segments, base_cost).expect("graph builds");
    find_optimal_path(&graph, &SearchOptions::default())
        .expect("path found")
        .cost
}

proptest! {
    #[test]
    fn cost_never_exceeds_walking(segments in segments_strategy(), base_cost in 1u64..10) {
        let graph = build_graph(&segments, base_cost).expect("graph builds");
        let path = find_optimal_path(&graph, &SearchOptions::default()).expect("path found");
        prop_assert!(path.cost <= graph.track_length() * base_cost);
    }

    #[test]
    fn every_strategy_finds_the_same_cost(segments in segments_strategy(), base_cost in 1u64..10) {
        let graph = build_graph(&segments, base_cost).expect("graph builds");
        let reference = find_optimal_path(&graph, &SearchOptions::default())
            .expect("path found")
            .cost;

        for strategy in [SearchStrategy::DepthFirst, SearchStrategy::BreadthFirst] {
            for milestone_pruning in [true, false] {
                let options = SearchOptions { strategy, milestone_pruning };
                let path = find_optimal_path(&graph, &options).expect("path found");
                prop_assert_eq!(path.cost, reference);
            }
        }
    }

    #[test]
    fn padding_is_idempotent(segments in segments_strategy(), base_cost in 1u64..10) {
        let mut graph = Graph::from_segments(&segments, base_cost).expect("valid");
        graph.pad().expect("pad");
        let once = graph.clone();
        prop_assert_eq!(graph.pad().expect("pad again"), 0);
        prop_assert_eq!(graph, once);
    }

    #[test]
    fn free_flight_only_uses_free_jetstreams(segments in segments_strategy(), base_cost in 1u64..10) {
        let graph = build_graph(&segments, base_cost).expect("graph builds");
        let path = find_optimal_path(&graph, &SearchOptions::default()).expect("path found");
        if path.cost == 0 {
            prop_assert!(!path.segments.is_empty());
            for (start, finish) in &path.segments {
                let free = segments
                    .iter()
                    .any(|s| s.start == *start && s.finish == *finish && s.cost == 0);
                prop_assert!(free, "{start} -> {finish} is not free");
            }
        }
    }

    #[test]
    fn adding_a_jetstream_no_dearer_than_walking_never_hurts(
        segments in segments_strategy(),
        base_cost in 1u64..10,
        raw in (any::<u64>(), any::<u64>(), any::<u64>()),
    ) {
        let before = cheapest(&segments, base_cost);

        let track_length = segments.iter().map(|s| s.finish).max().unwrap_or(1);
        let start = raw.0 % track_length;
        let finish = start + 1 + raw.1 % (track_length - start);
        let cost = raw.2 % (base_cost * (finish - start) + 1);

        let mut extended = segments.clone();
        extended.push(Segment::new(start, finish, cost));
        let after = cheapest(&extended, base_cost);

        prop_assert!(after <= before, "{} > {} after adding {}->{} at {}", after, before, start, finish, cost);
    }
}
