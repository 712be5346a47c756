use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A single atom entry from an XYZ block.
///
/// This struct captures one atom line of the format: the element symbol (an
/// arbitrary label, never validated against a periodic table), the Cartesian
/// position, and any trailing numeric columns the line carried beyond x/y/z
/// (e.g. velocity components or a partial charge). The record is immutable
/// once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtomRecord {
    /// The atom label (e.g. "H", "O", "Ca").
    symbol: String,
    /// The 3D coordinates of the atom.
    position: Point3<f64>,
    /// Extra numeric columns beyond x/y/z, in line order. May be empty.
    extra: Vec<f64>,
}

impl AtomRecord {
    /// Creates a new atom record.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The atom label, stored unparsed.
    /// * `position` - The Cartesian coordinates.
    /// * `extra` - Trailing numeric columns, in line order.
    pub fn new(symbol: impl Into<String>, position: Point3<f64>, extra: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            position,
            extra,
        }
    }

    /// Returns the atom label.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the Cartesian position.
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Returns the extra numeric columns beyond x/y/z.
    pub fn extra(&self) -> &[f64] {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_symbol_position_and_extra_fields() {
        let atom = AtomRecord::new("O", Point3::new(1.0, -2.5, 0.0), vec![0.5]);
        assert_eq!(atom.symbol(), "O");
        assert_eq!(atom.position(), Point3::new(1.0, -2.5, 0.0));
        assert_eq!(atom.extra(), &[0.5]);
    }

    #[test]
    fn symbol_is_kept_verbatim_without_chemical_validation() {
        let atom = AtomRecord::new("Xx1", Point3::origin(), Vec::new());
        assert_eq!(atom.symbol(), "Xx1");
        assert!(atom.extra().is_empty());
    }
}
