use idea_scorecard::models::*;
use idea_scorecard::store::IdeaStore;
use idea_scorecard::validation::validate_submission;
use speculate2::speculate;
use uuid::Uuid;

fn make_idea(name: &str) -> Idea {
    validate_submission(Draft::new(
        name,
        Rice::new(10.0, 1.0, 100.0, 7.0),
        Kano::Basic,
        Moscow::Must,
    ))
    .expect("Failed to validate idea")
}

fn names(store: &IdeaStore) -> Vec<&str> {
    store.list().iter().map(|e| e.idea.name()).collect()
}

speculate! {
    before {
        let mut store = IdeaStore::new();
    }

    describe "append" {
        it "starts empty" {
            assert!(store.is_empty());
            assert!(store.list().is_empty());
        }

        it "places the idea last" {
            store.append(make_idea("First"));
            store.append(make_idea("Second"));

            assert_eq!(store.len(), 2);
            assert_eq!(names(&store), ["First", "Second"]);
        }

        it "returns a deep equal copy on read back" {
            let idea = validate_submission(Draft::new(
                "Offline mode",
                Rice {
                    reach: Some(250.0),
                    impact: None,
                    confidence: Some(50.0),
                    effort: Some(3.0),
                },
                Kano::Excitement,
                Moscow::Could,
            )).expect("Failed to validate");

            let id = store.append(idea.clone());

            let last = store.list().last().expect("store is empty");
            assert_eq!(last.idea, idea);
            assert_eq!(last.id, id);
        }

        it "keeps duplicates as distinct entries" {
            let a = store.append(make_idea("Same"));
            let b = store.append(make_idea("Same"));

            assert_eq!(store.len(), 2);
            assert_ne!(a, b);
            assert_eq!(store.list()[0].idea, store.list()[1].idea);
        }
    }

    describe "remove_at" {
        before {
            for name in ["A", "B", "C", "D"] {
                store.append(make_idea(name));
            }
        }

        it "shifts later entries down by one" {
            let ids: Vec<Uuid> = store.list().iter().map(|e| e.id).collect();

            let removed = store.remove_at(1).expect("position 1 should exist");

            assert_eq!(removed.name(), "B");
            assert_eq!(names(&store), ["A", "C", "D"]);
            let remaining: Vec<Uuid> = store.list().iter().map(|e| e.id).collect();
            assert_eq!(remaining, [ids[0], ids[2], ids[3]]);
        }

        it "removes the last entry" {
            store.remove_at(3);
            assert_eq!(names(&store), ["A", "B", "C"]);
        }

        it "ignores out of range positions" {
            assert!(store.remove_at(4).is_none());
            assert!(store.remove_at(usize::MAX).is_none());
            assert_eq!(names(&store), ["A", "B", "C", "D"]);
        }

        it "can empty the store" {
            while store.remove_at(0).is_some() {}
            assert!(store.is_empty());
        }
    }

    describe "remove" {
        it "removes by stable id regardless of position" {
            let a = store.append(make_idea("A"));
            let b = store.append(make_idea("B"));
            let c = store.append(make_idea("C"));

            store.remove(a);
            assert_eq!(store.position_of(c), Some(1));

            let removed = store.remove(c).expect("C should exist");
            assert_eq!(removed.name(), "C");
            assert_eq!(store.position_of(b), Some(0));
            assert_eq!(names(&store), ["B"]);
        }

        it "returns None for an unknown id" {
            store.append(make_idea("A"));
            assert!(store.remove(Uuid::new_v4()).is_none());
            assert_eq!(store.len(), 1);
        }
    }
}
