//! Property-based tests for the template helper queries
//!
//! Random class forests are built in memory and the answers of
//! `has_ancestor`, `parent_has_slots` and `get_descendants` are checked
//! against a straightforward model of the same forest.

use linkml_core::types::{ClassDefinition, SchemaDefinition, SlotDefinition};
use linkml_javagen::generator::{DocumentSource, HelperScope, JavaClass, JavaGenerator};
use linkml_javagen::SchemaView;
use proptest::prelude::*;

/// Shape of one class: optional parent (always an earlier class) and how
/// many attributes it declares
#[derive(Debug, Clone)]
struct ClassShape {
    parent: Option<usize>,
    own_slots: usize,
}

/// Generate a forest of 1 to 12 classes
fn arb_forest() -> impl Strategy<Value = Vec<ClassShape>> {
    prop::collection::vec(
        (any::<bool>(), any::<prop::sample::Index>(), 0usize..3),
        1..12,
    )
    .prop_map(|raw| {
        raw.into_iter()
            .enumerate()
            .map(|(i, (has_parent, index, own_slots))| ClassShape {
                parent: (has_parent && i > 0).then(|| index.index(i)),
                own_slots,
            })
            .collect()
    })
}

fn class_name(i: usize) -> String {
    format!("C{i}")
}

fn build_generator(forest: &[ClassShape]) -> JavaGenerator {
    let mut schema = SchemaDefinition::new("forest");
    for (i, shape) in forest.iter().enumerate() {
        let mut class = ClassDefinition::new(class_name(i));
        class.is_a = shape.parent.map(class_name);
        for k in 0..shape.own_slots {
            let slot = format!("s{i}_{k}");
            class.attributes.insert(slot.clone(), SlotDefinition::new(slot));
        }
        schema.classes.insert(class_name(i), class);
    }
    JavaGenerator::new(SchemaView::new(schema), "org.example.forest")
}

fn classes(generator: &JavaGenerator) -> Vec<JavaClass> {
    generator
        .create_documents()
        .expect("forests are valid schemas")
        .into_iter()
        .map(|doc| doc.class)
        .collect()
}

/// Pre-order walk over the children lists, in declaration order
fn expected_descendants(forest: &[ClassShape], root: usize, out: &mut Vec<String>) {
    for (child, shape) in forest.iter().enumerate() {
        if shape.parent == Some(root) {
            out.push(class_name(child));
            expected_descendants(forest, child, out);
        }
    }
}

proptest! {
    /// Root classes have no ancestors at all
    #[test]
    fn prop_roots_have_no_ancestors(forest in arb_forest()) {
        let generator = build_generator(&forest);
        let scope = HelperScope::new(&generator);
        let classes = classes(&generator);

        for (i, shape) in forest.iter().enumerate() {
            if shape.parent.is_none() {
                for j in 0..forest.len() {
                    prop_assert!(!scope.has_ancestor(&classes[i], &class_name(j)));
                }
            }
        }
        prop_assert!(scope.take_failure().is_none());
    }

    /// A class has its parent as ancestor and otherwise shares its
    /// parent's ancestors
    #[test]
    fn prop_ancestors_follow_parent(forest in arb_forest()) {
        let generator = build_generator(&forest);
        let scope = HelperScope::new(&generator);
        let classes = classes(&generator);

        for (i, shape) in forest.iter().enumerate() {
            let Some(parent) = shape.parent else { continue };
            prop_assert!(scope.has_ancestor(&classes[i], &class_name(parent)));
            for j in (0..forest.len()).filter(|&j| j != parent) {
                prop_assert_eq!(
                    scope.has_ancestor(&classes[i], &class_name(j)),
                    scope.has_ancestor(&classes[parent], &class_name(j))
                );
            }
        }
        prop_assert!(scope.take_failure().is_none());
    }

    /// `parent_has_slots` looks only at the parent's own slots
    #[test]
    fn prop_parent_has_slots(forest in arb_forest()) {
        let generator = build_generator(&forest);
        let scope = HelperScope::new(&generator);
        let classes = classes(&generator);

        for (i, shape) in forest.iter().enumerate() {
            let expected = shape.parent.is_some_and(|p| forest[p].own_slots > 0);
            prop_assert_eq!(scope.parent_has_slots(&classes[i]), expected);
        }
    }

    /// Descendants come in pre-order, each exactly once, and repeated calls
    /// give the same answer
    #[test]
    fn prop_descendants_pre_order(forest in arb_forest()) {
        let generator = build_generator(&forest);
        let scope = HelperScope::new(&generator);

        for i in 0..forest.len() {
            let mut expected = Vec::new();
            expected_descendants(&forest, i, &mut expected);

            let first = scope.get_descendants(&class_name(i));
            let second = scope.get_descendants(&class_name(i));
            prop_assert_eq!(&first, &expected);
            prop_assert_eq!(&first, &second);

            let has_children = forest.iter().any(|s| s.parent == Some(i));
            prop_assert_eq!(first.is_empty(), !has_children);
        }
        prop_assert!(scope.take_failure().is_none());
    }
}
