mod common;

use common::Trace;
use outfold::{
    evaluate, evaluate_list, evaluate_maybe, evaluate_result, map_cmd, map_component,
    map_out_msg, Command,
};
use proptest::prelude::*;

const LABELS: [&str; 4] = ["a", "b", "c", "d"];

fn arb_trace() -> impl Strategy<Value = Trace> {
    proptest::collection::vec(proptest::sample::select(LABELS.to_vec()), 0..4).prop_map(Trace)
}

/// Adds the message to the model and emits one trace entry per call.
fn step(n: u8, model: u32) -> (u32, Trace, u32) {
    let next = model + u32::from(n);
    (next, Trace::of(LABELS[usize::from(n) % LABELS.len()]), next)
}

// The pending command is always merged before the interpretation's command.
proptest! {
    #[test]
    fn prop_evaluate_merge_order(model in any::<u32>().prop_map(|m| m % 1000), pending in arb_trace(), n in any::<u8>()) {
        let (expected_model, step_cmd, expected_out) = step(n, model);
        let out = evaluate(step, (model, pending.clone(), n));
        prop_assert_eq!(out, (expected_model, pending.batch(step_cmd), expected_out));
    }
}

// Absent and error inputs substitute the caller's command and skip interpretation.
proptest! {
    #[test]
    fn prop_absence_discards_pending(model in any::<u32>(), pending in arb_trace(), default in arb_trace()) {
        let out = evaluate_maybe(step, default.clone(), (model, pending.clone(), None));
        prop_assert_eq!(out, (model, default.clone(), None));

        let out = evaluate_result(
            step,
            |_: &String| default.clone(),
            (model, pending, Err("failed".to_string())),
        );
        prop_assert_eq!(out, (model, default, Err("failed".to_string())));
    }
}

// Present and ok inputs behave like `evaluate` with the value wrapped.
proptest! {
    #[test]
    fn prop_presence_matches_evaluate(model in 0u32..1000, pending in arb_trace(), n in any::<u8>()) {
        let (m, c, o) = evaluate(step, (model, pending.clone(), n));

        let maybe = evaluate_maybe(step, Trace::none(), (model, pending.clone(), Some(n)));
        prop_assert_eq!(maybe, (m, c.clone(), Some(o)));

        let result = evaluate_result(step, |_: &()| Trace::none(), (model, pending, Ok(n)));
        prop_assert_eq!(result, (m, c, Ok(o)));
    }
}

// The list evaluator is a left fold of `evaluate` over the items.
proptest! {
    #[test]
    fn prop_list_is_sequential_fold(
        model in 0u32..1000,
        pending in arb_trace(),
        msgs in proptest::collection::vec(any::<u8>(), 0..20),
    ) {
        let (final_model, cmd, outs) = evaluate_list(step, (model, pending.clone(), msgs.clone()));

        let mut expected_model = model;
        let mut expected_cmd = pending;
        let mut expected_outs = Vec::new();
        for &n in &msgs {
            let (m, c, o) = step(n, expected_model);
            expected_model = m;
            expected_cmd = expected_cmd.batch(c);
            expected_outs.push(o);
        }

        prop_assert_eq!(outs.len(), msgs.len());
        prop_assert_eq!(final_model, expected_model);
        prop_assert_eq!(cmd, expected_cmd);
        prop_assert_eq!(outs, expected_outs);
    }
}

// Mapping with the identity is a no-op and mapping twice composes.
proptest! {
    #[test]
    fn prop_map_identity_and_composition(model in any::<u16>(), cmd in arb_trace(), out in any::<i32>()) {
        let triple = (model, cmd, out);

        prop_assert_eq!(map_component(|m| m, triple.clone()), triple.clone());
        prop_assert_eq!(map_cmd(|c| c, triple.clone()), triple.clone());
        prop_assert_eq!(map_out_msg(|o| o, triple.clone()), triple.clone());

        let f = |m: u16| u32::from(m) + 1;
        let g = |m: u32| m * 3;
        prop_assert_eq!(
            map_component(g, map_component(f, triple.clone())),
            map_component(|m| g(f(m)), triple.clone())
        );

        let keep = |c: Trace| c.0.len();
        let double = |n: usize| n * 2;
        prop_assert_eq!(
            map_cmd(double, map_cmd(keep, triple.clone())),
            map_cmd(|c| double(keep(c)), triple.clone())
        );

        let h = |o: i32| i64::from(o) - 7;
        let k = |o: i64| o.to_string();
        prop_assert_eq!(
            map_out_msg(k, map_out_msg(h, triple.clone())),
            map_out_msg(|o| k(h(o)), triple)
        );
    }
}
