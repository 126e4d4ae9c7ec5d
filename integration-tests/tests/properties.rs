use diskhead_core::{Algorithm, Direction, Input, RequestSet, Status, Stop};
use diskhead_observers::{Limit, Recorder};
use diskhead_policies::{
    compare::{self, Config, Directions},
    schedule, schedule_unobserved,
};
use integration_tests::textbook;
use proptest::prelude::*;

/// A bound plus a head and requests that fit on it.
fn workload() -> impl Strategy<Value = Input> {
    (1_u32..500).prop_flat_map(|bound| {
        (
            prop::collection::vec(0..=bound, 1..24),
            0..=bound,
            Just(bound),
        )
            .prop_map(|(requests, head, bound)| {
                Input::with_bound(RequestSet::new(requests), head, bound).unwrap()
            })
    })
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Up), Just(Direction::Down)]
}

fn path_length(head: u32, stops: &[Stop]) -> u64 {
    stops
        .iter()
        .scan(head, |position, stop| {
            let distance = u64::from(position.abs_diff(stop.cylinder()));
            *position = stop.cylinder();
            Some(distance)
        })
        .sum()
}

#[test]
fn textbook_optimum_with_best_directions() {
    let report = compare::compare(&textbook(), None, &Config::with_directions(Directions::Best)).unwrap();

    assert_eq!(report.optimal_algorithm(), Algorithm::Look);
    assert_eq!(report.optimal_result().total_seek(), 208);
}

proptest! {
    #[test]
    fn total_seek_is_path_length(input in workload(), direction in direction()) {
        for algorithm in Algorithm::ALL {
            let result = schedule_unobserved(algorithm, &input, Some(direction)).unwrap();
            prop_assert_eq!(result.total_seek(), path_length(input.head(), result.stops()));
            prop_assert_eq!(result.status(), Status::Complete);
        }
    }

    #[test]
    fn fcfs_keeps_submission_order(input in workload()) {
        let result = schedule_unobserved(Algorithm::Fcfs, &input, None).unwrap();
        prop_assert_eq!(result.sequence(), input.requests().as_slice());
    }

    #[test]
    fn every_policy_services_each_request_once(input in workload(), direction in direction()) {
        for algorithm in Algorithm::ALL {
            let result = schedule_unobserved(algorithm, &input, Some(direction)).unwrap();
            let mut serviced = result.sequence().to_vec();
            serviced.sort_unstable();
            prop_assert_eq!(serviced, input.requests().sorted());
        }
    }

    #[test]
    fn only_edge_sweeps_leave_the_requests(input in workload(), direction in direction()) {
        for algorithm in [Algorithm::Fcfs, Algorithm::Sstf, Algorithm::Look, Algorithm::CLook] {
            let result = schedule_unobserved(algorithm, &input, Some(direction)).unwrap();
            prop_assert!(result.stops().iter().all(|stop| stop.is_service()));
        }
    }

    #[test]
    fn look_never_costs_more_than_scan(input in workload(), direction in direction()) {
        let scan = schedule_unobserved(Algorithm::Scan, &input, Some(direction)).unwrap();
        let look = schedule_unobserved(Algorithm::Look, &input, Some(direction)).unwrap();
        prop_assert!(look.total_seek() <= scan.total_seek());
    }

    #[test]
    fn optimum_is_minimal(input in workload(), direction in direction()) {
        let report = compare::compare(&input, Some(direction), &Config::default()).unwrap();
        let optimum = report.optimal_result().total_seek();

        prop_assert!(report.all_results().all(|(_, seek)| optimum <= seek));
        prop_assert_eq!(report.entries().len(), Algorithm::ALL.len());
    }

    #[test]
    fn scheduling_is_idempotent(input in workload(), direction in direction()) {
        for algorithm in Algorithm::ALL {
            let first = schedule_unobserved(algorithm, &input, Some(direction)).unwrap();
            let second = schedule_unobserved(algorithm, &input, Some(direction)).unwrap();
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn single_request_costs_its_distance(request in 0_u32..=199, head in 0_u32..=199, direction in direction()) {
        let input = Input::with_bound(RequestSet::new([request]), head, 199).unwrap();

        for algorithm in Algorithm::ALL {
            let result = schedule_unobserved(algorithm, &input, Some(direction)).unwrap();
            prop_assert_eq!(result.sequence(), &[request]);
            prop_assert_eq!(result.total_seek(), u64::from(head.abs_diff(request)));
        }
    }

    #[test]
    fn request_on_head_is_free(input in workload(), direction in direction()) {
        let mut requests = vec![input.head()];
        requests.extend_from_slice(input.requests().as_slice());
        let with_head =
            Input::with_bound(RequestSet::new(requests), input.head(), input.geometry().bound()).unwrap();

        for algorithm in Algorithm::ALL {
            let base = schedule_unobserved(algorithm, &input, Some(direction)).unwrap();
            let extra = schedule_unobserved(algorithm, &with_head, Some(direction)).unwrap();
            prop_assert_eq!(base.total_seek(), extra.total_seek());
        }
    }

    #[test]
    fn recorder_track_matches_result_path(input in workload(), direction in direction()) {
        for algorithm in Algorithm::ALL {
            let mut recorder = Recorder::new(input.head());
            let result = schedule(algorithm, &input, Some(direction), &mut recorder).unwrap();

            prop_assert!(recorder.positions().eq(result.path()));
        }
    }

    #[test]
    fn limit_truncates_trajectory(input in workload(), direction in direction(), moves in 1_usize..8) {
        let full = schedule_unobserved(Algorithm::CScan, &input, Some(direction)).unwrap();
        let limited = schedule(Algorithm::CScan, &input, Some(direction), Limit::new(moves)).unwrap();

        let kept = moves.min(full.stops().len());
        prop_assert_eq!(limited.stops(), &full.stops()[..kept]);
        prop_assert_eq!(limited.total_seek(), path_length(input.head(), limited.stops()));
    }
}
