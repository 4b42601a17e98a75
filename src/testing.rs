//! Shared fixtures for unit tests.
use crate::data::{Dataset, Record, Schema};

/// Condensed from the classic mushroom data: Pungent odor is
/// perfectly poisonous, Almond and Anise perfectly edible, and
/// odorless mushrooms need the spore print to separate.
///
/// The fitted tree is:
///
/// ```text
/// odor = Pungent        -> No
/// odor = Almond         -> Yes
/// odor = Anise          -> Yes
/// odor = None           -> spore-print-color = Black -> Yes
///                          spore-print-color = Green -> No
///                          spore-print-color = Brown -> Yes
/// ```
pub fn mushroom_fixture() -> Dataset {
    let schema = Schema::new(vec![
        "cap-shape".to_string(),
        "odor".to_string(),
        "spore-print-color".to_string(),
    ]);
    let rows: &[(&str, &str, &str, bool)] = &[
        ("Convex", "Pungent", "Black", false),
        ("Convex", "Almond", "Black", true),
        ("Bell", "Anise", "Brown", true),
        ("Convex", "Pungent", "Brown", false),
        ("Convex", "None", "Black", true),
        ("Bell", "None", "Green", false),
        ("Convex", "None", "Brown", true),
        ("Convex", "None", "Green", false),
    ];
    let records = rows
        .iter()
        .map(|(c, o, s, y)| Record::new(vec![c.to_string(), o.to_string(), s.to_string()], *y))
        .collect();
    Dataset::new(schema, records).unwrap()
}

/// A record over the fixture schema, for classification tests.
pub fn mushroom(cap_shape: &str, odor: &str, spore_print: &str, positive: bool) -> Record {
    Record::new(
        vec![cap_shape.to_string(), odor.to_string(), spore_print.to_string()],
        positive,
    )
}
