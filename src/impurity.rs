//! Split quality measures: binary entropy and information gain over
//! row-index subsets of a dataset.
use crate::data::Dataset;
use crate::errors::AmanitaError;
use hashbrown::HashMap;

/// Binary Shannon entropy of the labels of the rows in `idx`.
///
/// Returns 0 for a pure set. Fails on an empty set; callers must
/// never hand one in.
pub fn entropy(data: &Dataset, idx: &[usize]) -> Result<f64, AmanitaError> {
    if idx.is_empty() {
        return Err(AmanitaError::EmptyRecordSet);
    }
    let positives = idx.iter().filter(|&&i| data.record(i).is_positive()).count();
    let p = positives as f64 / idx.len() as f64;
    if p == 0.0 || p == 1.0 {
        return Ok(0.0);
    }
    Ok(-p * p.log2() - (1.0 - p) * (1.0 - p).log2())
}

/// Group the rows in `idx` by their value of `attribute`, preserving
/// relative row order within each group. Groups appear in the order
/// their value was first encountered; edge insertion order downstream
/// depends on this.
pub fn partition_by_attribute(data: &Dataset, idx: &[usize], attribute: usize) -> Vec<(String, Vec<usize>)> {
    let mut groups: Vec<(String, Vec<usize>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();
    for &i in idx {
        let value = data.record(i).value(attribute);
        match slots.get(value) {
            Some(&slot) => groups[slot].1.push(i),
            None => {
                slots.insert(value, groups.len());
                groups.push((value.to_string(), vec![i]));
            }
        }
    }
    groups
}

/// Entropy reduction achieved by partitioning the rows in `idx` on
/// `attribute`: parent entropy minus the size-weighted average child
/// entropy. Never negative; 0 when the attribute carries no
/// information about the label within this subset.
pub fn information_gain(data: &Dataset, idx: &[usize], attribute: usize) -> Result<f64, AmanitaError> {
    let parent = entropy(data, idx)?;
    let total = idx.len() as f64;
    let mut weighted = 0.0;
    for (_, group) in partition_by_attribute(data, idx, attribute) {
        let weight = group.len() as f64 / total;
        weighted += weight * entropy(data, &group)?;
    }
    Ok(parent - weighted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Record, Schema};

    fn toy() -> Dataset {
        // odor separates the labels perfectly, cap-shape is noise.
        let schema = Schema::new(vec!["cap-shape".to_string(), "odor".to_string()]);
        let rows = [
            (("Convex", "Pungent"), false),
            (("Convex", "Almond"), true),
            (("Bell", "Anise"), true),
            (("Bell", "Pungent"), false),
        ];
        let records = rows
            .iter()
            .map(|((c, o), y)| Record::new(vec![c.to_string(), o.to_string()], *y))
            .collect();
        Dataset::new(schema, records).unwrap()
    }

    #[test]
    fn test_entropy_pure_is_zero() {
        let data = toy();
        assert_eq!(entropy(&data, &[1, 2]).unwrap(), 0.0);
        assert_eq!(entropy(&data, &[0, 3]).unwrap(), 0.0);
        assert_eq!(entropy(&data, &[0]).unwrap(), 0.0);
    }

    #[test]
    fn test_entropy_even_split_is_one() {
        let data = toy();
        assert_eq!(entropy(&data, &[0, 1, 2, 3]).unwrap(), 1.0);
    }

    #[test]
    fn test_entropy_mixed_within_bounds() {
        let data = toy();
        // 2 positive, 1 negative.
        let h = entropy(&data, &[0, 1, 2]).unwrap();
        assert!(h > 0.0 && h <= 1.0);
        let expected = -(2.0f64 / 3.0) * (2.0f64 / 3.0).log2() - (1.0f64 / 3.0) * (1.0f64 / 3.0).log2();
        assert!((h - expected).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_empty_fails() {
        let data = toy();
        assert!(matches!(entropy(&data, &[]), Err(AmanitaError::EmptyRecordSet)));
    }

    #[test]
    fn test_partition_preserves_encounter_order() {
        let data = toy();
        let groups = partition_by_attribute(&data, &[0, 1, 2, 3], 1);
        let values: Vec<&str> = groups.iter().map(|(v, _)| v.as_str()).collect();
        assert_eq!(values, vec!["Pungent", "Almond", "Anise"]);
        assert_eq!(groups[0].1, vec![0, 3]);
    }

    #[test]
    fn test_information_gain_perfect_attribute() {
        let data = toy();
        let gain = information_gain(&data, &[0, 1, 2, 3], 1).unwrap();
        // odor splits into pure subsets, so the gain is the full
        // parent entropy.
        assert!((gain - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_information_gain_nonnegative() {
        let data = toy();
        for attribute in 0..data.schema().n_attributes() {
            assert!(information_gain(&data, &[0, 1, 2, 3], attribute).unwrap() >= 0.0);
        }
    }

    #[test]
    fn test_information_gain_independent_attribute_is_zero() {
        let data = toy();
        // Each cap-shape group holds one positive and one negative.
        let gain = information_gain(&data, &[0, 1, 2, 3], 0).unwrap();
        assert!(gain.abs() < 1e-12);
    }
}
