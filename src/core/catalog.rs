//! Type catalog
//!
//! Distinct, lower-cased monument types of a working set, indexed by first
//! appearance. Computed on demand; nothing is cached.

use crate::domain::{Monument, TypeEntry};
use std::collections::HashSet;

/// List the distinct types of `monuments`
///
/// # Example
///
/// ```
/// use heritage::core::catalog::list_types;
/// use heritage::domain::Monument;
///
/// let monuments = vec![
///     Monument::new("1", "Eglise"),
///     Monument::new("2", "Beffroi"),
///     Monument::new("3", "EGLISE"),
/// ];
/// let types = list_types(&monuments);
///
/// assert_eq!(types.len(), 2);
/// assert_eq!(types[0].kind, "eglise");
/// assert_eq!(types[1].id, 1);
/// ```
pub fn list_types(monuments: &[Monument]) -> Vec<TypeEntry> {
    let mut seen = HashSet::new();

    monuments
        .iter()
        .map(|m| m.kind.to_lowercase())
        .filter(|kind| seen.insert(kind.clone()))
        .enumerate()
        .map(|(id, kind)| TypeEntry { id, kind })
        .collect()
}
