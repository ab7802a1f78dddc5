//! Property tests for the pipeline state machine.

use proptest::prelude::*;

use linkchain::{PipelineState, StageKind};

#[derive(Debug, Clone, Copy)]
enum Step {
    Complete(StageKind),
    Fail,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Complete(StageKind::Compile)),
        Just(Step::Complete(StageKind::Archive)),
        Just(Step::Complete(StageKind::Link)),
        Just(Step::Fail),
    ]
}

fn rank(state: PipelineState) -> u8 {
    match state {
        PipelineState::NotStarted => 0,
        PipelineState::Compiled => 1,
        PipelineState::Archived => 2,
        PipelineState::Linked => 3,
        PipelineState::Failed => 4,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: accepted transitions only move forward, and terminal states
    /// accept nothing.
    #[test]
    fn property_state_machine_never_moves_backwards(steps in proptest::collection::vec(step(), 0..12)) {
        let mut state = PipelineState::NotStarted;

        for step in steps {
            let next = match step {
                Step::Complete(stage) => state.advance(stage),
                Step::Fail => state.fail(),
            };

            match next {
                Ok(next) => {
                    prop_assert!(!state.is_terminal());
                    prop_assert!(rank(next) > rank(state));
                    if let Step::Complete(stage) = step {
                        prop_assert_eq!(state.next_stage(), Some(stage));
                    }
                    state = next;
                }
                Err(_) => {
                    let legal = matches!(step, Step::Complete(stage) if state.next_stage() == Some(stage));
                    prop_assert!(!legal || state.is_terminal());
                }
            }
        }
    }

    /// PROPERTY: Linked is only reachable through compile, archive, link in order.
    #[test]
    fn property_linked_requires_full_order(steps in proptest::collection::vec(step(), 0..8)) {
        let mut state = PipelineState::NotStarted;
        let mut completed = Vec::new();

        for step in steps {
            if let Step::Complete(stage) = step {
                if let Ok(next) = state.advance(stage) {
                    completed.push(stage);
                    state = next;
                }
            } else if let Ok(next) = state.fail() {
                state = next;
            }
        }

        if state.is_success() {
            prop_assert_eq!(completed, StageKind::ALL.to_vec());
        }
    }
}
