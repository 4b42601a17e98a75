//! Mushroom Edibility
//! ==================
//! Classic interpretable-model example: induce a decision tree
//! predicting whether a mushroom is edible from its categorical
//! attributes, then print the three renderings of the fitted tree.
//! Pass a dataset path to use your own file; without one a small
//! embedded sample is used.
//!
//! ```bash
//! cargo run --release --example mushrooms [dataset.csv]
//! ```

use amanita::synthesis::{boolean, predicate};
use amanita::{Dataset, Tree};
use std::env;
use std::error::Error;
use std::fs;

const SAMPLE: &str = "\
edible,cap-shape,cap-color,odor,spore-print-color
No,Convex,Brown,Pungent,Black
Yes,Convex,Yellow,Almond,Black
Yes,Bell,White,Anise,Brown
No,Convex,White,Pungent,Brown
Yes,Convex,Gray,None,Black
No,Bell,White,None,Green
Yes,Convex,Brown,None,Brown
No,Convex,Yellow,None,Green
Yes,Bell,Brown,Almond,Brown
No,Flat,Gray,Foul,Black
";

fn main() -> Result<(), Box<dyn Error>> {
    let data = match env::args().nth(1) {
        Some(path) => Dataset::from_path(path)?,
        None => Dataset::from_reader(SAMPLE.as_bytes())?,
    };

    let tree = Tree::fit(&data)?;
    println!(
        "fitted tree: {} nodes, {} leaves, depth {}, training accuracy {:.3}",
        tree.nodes.len(),
        tree.n_leaves,
        tree.depth,
        tree.evaluate(&data)?
    );

    println!("\ndecision paths:\n{tree}");

    let expression = boolean::synthesize(&tree);
    println!("edible iff:\n{}", expression.render(&tree.schema));

    let routine = predicate::synthesize(&tree);
    let source = routine.render(&tree.schema);
    fs::write("classify.py", &source)?;
    println!("\ngenerated predicate written to classify.py:\n{source}");

    Ok(())
}
