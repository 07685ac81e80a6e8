//! Property-based tests for the list editor
//!
//! Uses proptest to verify properties that should hold for all inputs.

use intake::adapters::storage::MemoryStore;
use intake::core::models::{Collection, Contribution, Contributor, EditorState, Field, Snapshot};
use intake::core::services::SnapshotRepository;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Append,
    Remove(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Append), (0usize..8).prop_map(Op::Remove)]
}

fn snapshot() -> impl Strategy<Value = Snapshot> {
    let contribution = ".{0,20}".prop_map(|d: String| Contribution::new(d));
    let contributor =
        (".{0,10}", ".{0,10}", ".{0,20}").prop_map(|(n, e, c)| Contributor::new(n, e, c));
    (
        prop::collection::vec(contribution, 0..6),
        prop::collection::vec(contributor, 0..6),
    )
        .prop_map(|(contributions, contributors)| Snapshot {
            contributions,
            contributors,
        })
}

proptest! {
    /// Length equals appends minus successful removals
    #[test]
    fn length_tracks_appends_and_removals(ops in prop::collection::vec(op(), 0..40)) {
        let mut state = EditorState::new();
        let mut expected = 0usize;
        for op in ops {
            match op {
                Op::Append => {
                    state = state.append(Collection::Contributors);
                    expected += 1;
                }
                Op::Remove(i) => {
                    if let Ok(next) = state.remove_at(Collection::Contributors, i) {
                        state = next;
                        expected -= 1;
                    }
                }
            }
        }
        prop_assert_eq!(state.len(Collection::Contributors), expected);
        prop_assert_eq!(state.len(Collection::Contributions), 0);
    }

    /// Removal keeps the relative order of the remaining records
    #[test]
    fn remove_preserves_order(snapshot in snapshot(), i in 0usize..6) {
        let state = EditorState::from_snapshot(snapshot.clone());
        prop_assume!(i < snapshot.contributors.len());

        let after = state.remove_at(Collection::Contributors, i).unwrap();
        let mut expected = snapshot.contributors.clone();
        expected.remove(i);

        prop_assert_eq!(after.contributors(), expected.as_slice());
        prop_assert_eq!(after.contributions(), snapshot.contributions.as_slice());
    }

    /// Editing one field leaves every other record and field untouched
    #[test]
    fn edit_is_isolated(snapshot in snapshot(), i in 0usize..6, value in ".{0,20}", f in 0usize..3) {
        prop_assume!(i < snapshot.contributors.len());
        let field = Field::CONTRIBUTOR_FIELDS[f];

        let before = EditorState::from_snapshot(snapshot.clone());
        let after = before
            .edit_field(Collection::Contributors, i, field, value.clone())
            .unwrap();

        for (j, (old, new)) in before.contributors().iter().zip(after.contributors()).enumerate() {
            if j == i {
                for other in Field::CONTRIBUTOR_FIELDS {
                    if other == field {
                        prop_assert_eq!(new.field(other), Some(value.as_str()));
                    } else {
                        prop_assert_eq!(new.field(other), old.field(other));
                    }
                }
            } else {
                prop_assert_eq!(new, old);
            }
        }
        prop_assert_eq!(after.contributions(), before.contributions());
    }

    /// Save then load reproduces the saved snapshot
    #[test]
    fn save_load_round_trip(snapshot in snapshot()) {
        let mut repo = SnapshotRepository::new(MemoryStore::new());
        repo.save(&snapshot).unwrap();
        prop_assert_eq!(repo.load().unwrap(), snapshot);
    }
}
