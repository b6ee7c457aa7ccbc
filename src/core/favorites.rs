//! Favorites tracker
//!
//! Holds monuments promoted from a working set. Entries are copies, so they
//! outlive any later refresh of the working set. There is no removal.

use crate::domain::{HeritageError, Monument, Result};

/// Monuments marked as favorites, in promotion order
#[derive(Debug, Clone, Default)]
pub struct Favorites {
    monuments: Vec<Monument>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Promote the monument with `id` from `working_set`
    ///
    /// Returns the promoted monument.
    ///
    /// # Errors
    ///
    /// - [`HeritageError::NotFound`] if no monument in `working_set` has `id`;
    ///   monuments without an id are never found
    /// - [`HeritageError::AlreadyFavorited`] if a favorite with `id` exists
    pub fn add(&mut self, working_set: &[Monument], id: &str) -> Result<Monument> {
        let monument = working_set
            .iter()
            .find(|m| !m.id.is_empty() && m.id == id)
            .ok_or_else(|| HeritageError::NotFound(id.to_string()))?;

        if self.contains(id) {
            return Err(HeritageError::AlreadyFavorited(id.to_string()));
        }

        self.monuments.push(monument.clone());
        Ok(monument.clone())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.monuments.iter().any(|m| m.id == id)
    }

    pub fn as_slice(&self) -> &[Monument] {
        &self.monuments
    }

    pub fn len(&self) -> usize {
        self.monuments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monuments.is_empty()
    }
}
