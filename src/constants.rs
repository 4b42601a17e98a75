/// Indentation unit used by the tree renderer and the generated
/// predicate source.
pub const INDENT: &str = "    ";

/// Positive-leaf values beyond this count are hoisted into a named
/// constant in the generated predicate, purely for readability of the
/// emitted source.
pub const MEMBERSHIP_CONSTANT_THRESHOLD: usize = 3;

/// Label vocabulary used by dataset files and the tree renderer.
pub const LABEL_POSITIVE: &str = "Yes";
/// Negative counterpart of [`LABEL_POSITIVE`].
pub const LABEL_NEGATIVE: &str = "No";
