use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::CorrelationError;

/// Immutable set of labelled correlation coefficients for one component.
///
/// Labels are single characters following the convention of the data source:
/// `A`–`H` for Shomate, `A`–`C` for Antoine, `A`–`D` for RPP, and `1`–`5` for
/// Perry's. The same label can mean unrelated things in different
/// correlations, so a set only has meaning together with the function that
/// evaluates it.
///
/// # Example
///
/// ```
/// use twine_pure::correlation::CoefficientSet;
///
/// let antoine: CoefficientSet = [('A', 4.6543), ('B', 1435.264), ('C', -64.848)]
///     .into_iter()
///     .collect();
///
/// assert_eq!(antoine.get('B'), Ok(1435.264));
/// assert!(antoine.get('D').is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoefficientSet(BTreeMap<char, f64>);

impl CoefficientSet {
    /// Returns the coefficient stored under `label`.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::MissingCoefficient`] if the label is absent.
    pub fn get(&self, label: char) -> Result<f64, CorrelationError> {
        self.0
            .get(&label)
            .copied()
            .ok_or(CorrelationError::MissingCoefficient { label })
    }

    /// Returns the coefficients for all `labels`, in order.
    ///
    /// Every label is looked up before the caller does any arithmetic, so a
    /// missing coefficient is always reported instead of a partial result.
    ///
    /// # Errors
    ///
    /// Returns [`CorrelationError::MissingCoefficient`] for the first absent label.
    pub fn require<const N: usize>(&self, labels: [char; N]) -> Result<[f64; N], CorrelationError> {
        let mut values = [0.0; N];
        for (value, label) in values.iter_mut().zip(labels) {
            *value = self.get(label)?;
        }
        Ok(values)
    }

    /// Returns `true` if the set contains `label`.
    #[must_use]
    pub fn contains(&self, label: char) -> bool {
        self.0.contains_key(&label)
    }

    /// Returns the number of coefficients in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no coefficients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(label, value)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.0.iter().map(|(&label, &value)| (label, value))
    }

    /// Returns a copy of this set with `label` set to `value`.
    ///
    /// Useful for deriving a related set, such as shifting an Antoine `A` by
    /// `+5` to move from a bar basis to a pascal basis.
    #[must_use]
    pub fn with(&self, label: char, value: f64) -> Self {
        let mut values = self.0.clone();
        values.insert(label, value);
        Self(values)
    }
}

impl FromIterator<(char, f64)> for CoefficientSet {
    fn from_iter<I: IntoIterator<Item = (char, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(char, f64); N]> for CoefficientSet {
    fn from(pairs: [(char, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}
