//! Property-based tests for devices and the transition function.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated states and request sequences.

use proptest::prelude::*;
use switchyard::core::{resolve, State, StateSet, TransitionOutcome};
use switchyard::device::{Device, RecordingReporter};

switchyard::state_graph! {
    enum Order {
        Created => [Paid, Cancelled],
        Paid => [Shipped, Refunded],
        Shipped => [Delivered],
        Delivered => [],
        Refunded => [],
        Cancelled => [Created],
    }
    initial: Created
}

prop_compose! {
    fn arbitrary_state()(index in 0..6usize) -> Order {
        Order::variants()[index]
    }
}

fn pairs_where(keep: fn(&Order, &Order) -> bool) -> impl Strategy<Value = (Order, Order)> {
    let pairs: Vec<(Order, Order)> = Order::variants()
        .into_iter()
        .flat_map(|from| Order::variants().into_iter().map(move |to| (from, to)))
        .filter(|(from, to)| keep(from, to))
        .collect();
    prop::sample::select(pairs)
}

fn allowed_pair() -> impl Strategy<Value = (Order, Order)> {
    pairs_where(|from, to| from.allowed().contains(&to.name()))
}

fn disallowed_pair() -> impl Strategy<Value = (Order, Order)> {
    pairs_where(|from, to| !from.allowed().contains(&to.name()))
}

fn device_in(state: Order) -> Device<Order, RecordingReporter> {
    Device::with_reporter(state, RecordingReporter::new())
}

proptest! {
    #[test]
    fn allowed_target_switches((from, to) in allowed_pair()) {

        let mut device = device_in(from);
        let outcome = device.request_transition(to);

        prop_assert_eq!(outcome, TransitionOutcome::Switched { from, to });
        prop_assert_eq!(device.current_state(), &to);
    }

    #[test]
    fn disallowed_target_is_rejected((from, to) in disallowed_pair()) {

        let mut device = device_in(from);
        let outcome = device.request_transition(to);

        prop_assert_eq!(outcome, TransitionOutcome::Rejected { from, target: to });
        prop_assert_eq!(device.current_state(), &from);
        prop_assert_eq!(device.rejections(), 1);
        prop_assert!(device.history().is_empty());
    }

    #[test]
    fn rejection_is_idempotent(
        (from, to) in disallowed_pair(),
        repeats in 1..20usize,
    ) {

        let mut device = device_in(from);
        for _ in 0..repeats {
            device.request_transition(to);
            prop_assert_eq!(device.current_state(), &from);
        }

        prop_assert_eq!(device.rejections(), repeats);
        prop_assert_eq!(device.reporter().lines().len(), repeats);
    }

    #[test]
    fn device_agrees_with_resolve(from in arbitrary_state(), to in arbitrary_state()) {
        let (expected_state, expected_outcome) = resolve(&from, to);

        let mut device = device_in(from);
        let outcome = device.request_transition(to);

        prop_assert_eq!(device.current_state(), &expected_state);
        prop_assert_eq!(outcome, expected_outcome);
    }

    #[test]
    fn request_sequences_keep_books_balanced(
        requests in prop::collection::vec(arbitrary_state(), 0..40)
    ) {
        let mut device = device_in(Order::default());
        let mut switched = 0;

        for target in &requests {
            if device.request_transition(*target).is_switched() {
                switched += 1;
            }
        }

        prop_assert_eq!(device.history().len(), switched);
        prop_assert_eq!(device.rejections(), requests.len() - switched);
        prop_assert_eq!(device.reporter().lines().len(), requests.len());

        let path = device.history().get_path();
        if let Some(last) = path.last() {
            prop_assert_eq!(path[0], &Order::Created);
            prop_assert_eq!(*last, device.current_state());
        } else {
            prop_assert_eq!(device.current_state(), &Order::Created);
        }
    }

    #[test]
    fn history_chains_accepted_transitions(
        requests in prop::collection::vec(arbitrary_state(), 1..40)
    ) {
        let mut device = device_in(Order::default());
        for target in requests {
            device.request_transition(target);
        }

        for pair in device.history().transitions().windows(2) {
            prop_assert_eq!(pair[0].to, pair[1].from);
            prop_assert!(pair[0].from.can_switch_to(&pair[0].to));
        }
    }

    #[test]
    fn report_line_names_both_states(from in arbitrary_state(), to in arbitrary_state()) {
        let mut device = device_in(from);
        let outcome = device.request_transition(to);

        let line = &device.reporter().lines()[0];
        let prefix = format!("Current State: {} ", from.name());
        prop_assert!(line.starts_with(&prefix));
        prop_assert!(line.contains(to.name()));
        prop_assert_eq!(line.ends_with("not possible!"), outcome.is_rejected());
    }
}
