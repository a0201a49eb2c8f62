use proptest::prelude::*;

use posevote_rs::{
    Choice, GestureClassifier, HoldConfig, Landmark, PoseObservation, SelectionState, VoteTracker,
    transition,
};

const ARM_POINTS: [&str; 4] = ["left_wrist", "left_shoulder", "right_wrist", "right_shoulder"];

fn arb_landmark() -> impl Strategy<Value = Landmark> {
    (
        prop::sample::select(ARM_POINTS.to_vec()),
        0.0f32..640.0,
        0.0f32..480.0,
        0.0f32..=1.0,
    )
        .prop_map(|(name, x, y, score)| Landmark::new(name, x, y, score))
}

fn arb_observation() -> impl Strategy<Value = PoseObservation> {
    prop::collection::vec(arb_landmark(), 0..8).prop_map(PoseObservation::new)
}

fn arb_selection() -> impl Strategy<Value = Option<Choice>> {
    prop_oneof![Just(None), Just(Some(Choice::A)), Just(Some(Choice::B))]
}

/// Both hands clearly above their shoulders, with arbitrary heights.
fn arb_both_hands_up() -> impl Strategy<Value = PoseObservation> {
    (0.0f32..200.0, 1.0f32..200.0, 0.0f32..200.0, 1.0f32..200.0, 0.31f32..=1.0)
        .prop_map(|(lw, lgap, rw, rgap, score)| {
            PoseObservation::new(vec![
                Landmark::new("right_wrist", 0.0, rw, score),
                Landmark::new("right_shoulder", 0.0, rw + rgap, score),
                Landmark::new("left_wrist", 0.0, lw, score),
                Landmark::new("left_shoulder", 0.0, lw + lgap, score),
            ])
        })
}

proptest! {
    #[test]
    fn left_hand_takes_precedence(pose in arb_both_hands_up()) {
        let classifier = GestureClassifier::default();
        prop_assert_eq!(classifier.classify(Some(&pose)), Some(Choice::A));
    }

    #[test]
    fn low_confidence_landmarks_never_count(pose in arb_observation(), low in 0.0f32..=0.3) {
        // Dropping every landmark at or below the threshold must not change the result,
        // and lowering a landmark to the threshold must not create a selection.
        let classifier = GestureClassifier::default();
        let confident: PoseObservation = pose
            .landmarks()
            .iter()
            .filter(|l| l.score > 0.3)
            .cloned()
            .collect();
        let expected = classifier.classify(Some(&confident));

        // First-match lookup means a low-confidence duplicate earlier in the list shadows
        // a confident one, so only compare when names are unique.
        let mut names: Vec<&str> = pose.landmarks().iter().map(|l| l.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() == pose.len() {
            let lowered: PoseObservation = pose
                .landmarks()
                .iter()
                .map(|l| if l.score > 0.3 { l.clone() } else { Landmark { score: low, ..l.clone() } })
                .collect();
            prop_assert_eq!(classifier.classify(Some(&lowered)), expected);
        }

        let all_low: PoseObservation = pose
            .landmarks()
            .iter()
            .map(|l| Landmark { score: low, ..l.clone() })
            .collect();
        prop_assert_eq!(classifier.classify(Some(&all_low)), None);
    }

    #[test]
    fn consecutive_none_ticks_stay_idle(
        current in arb_selection(),
        hold_counter in -30i64..21,
    ) {
        let config = HoldConfig::default();
        let state = SelectionState { current, hold_counter };
        let once = transition(state, None, &config);
        let twice = transition(once.state, None, &config);

        prop_assert_eq!(twice.state, SelectionState::default());
        prop_assert_eq!(twice.commit, None);
    }

    #[test]
    fn tally_never_decreases(selections in prop::collection::vec(arb_selection(), 0..400)) {
        let mut tracker = VoteTracker::default();
        let mut last = (0, 0);

        for selection in selections {
            let outcome = tracker.apply(selection);
            let tally = tracker.tally();
            let now = (tally.count_a(), tally.count_b());

            prop_assert!(now.0 >= last.0 && now.1 >= last.1);
            let increments = (now.0 - last.0) + (now.1 - last.1);
            prop_assert_eq!(increments, u64::from(outcome.commit.is_some()));
            last = now;
        }
    }

    #[test]
    fn hold_counter_stays_in_range(selections in prop::collection::vec(arb_selection(), 0..400)) {
        let mut tracker = VoteTracker::default();
        for selection in selections {
            tracker.apply(selection);
            let state = tracker.state();
            prop_assert!((-30..21).contains(&state.hold_counter));
            if state.current.is_none() {
                prop_assert_eq!(state.hold_counter, 0);
            }
        }
    }
}
