use super::atom::AtomRecord;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Comment used by [`MoleculeRecord::from_sites`] when the caller supplies none.
pub const DEFAULT_COMMENT: &str = "Comment";

/// Error returned when the atoms of one molecule disagree on the number of
/// extra columns.
///
/// The XYZ format allows trailing numeric columns on atom lines, but only
/// with the same arity for every atom of a block; a mix is rejected at
/// construction time rather than surfacing later during formatting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Varying input length.")]
pub struct ExtraLengthMismatch {
    /// Extra-column count of the first atom in the record.
    pub expected: usize,
    /// The first disagreeing count encountered.
    pub found: usize,
}

/// One molecule block of an XYZ file.
///
/// Holds the declared atom count, the comment line (whitespace-trimmed), and
/// the atoms in line order. Invariants enforced by construction:
///
/// - `natoms` equals the number of atoms held.
/// - Every atom carries the same number of extra columns (vacuously true for
///   an empty molecule).
///
/// Records are immutable once built and carry no shared state; a parsed file
/// is simply a `Vec<MoleculeRecord>` in file order.
///
/// Deserialization goes through the same validation as construction, so
/// deserialized data cannot smuggle in an inconsistent record either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMoleculeRecord")]
pub struct MoleculeRecord {
    natoms: usize,
    comment: String,
    atoms: Vec<AtomRecord>,
}

/// Error returned when deserialized data describes an inconsistent record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMoleculeRecord {
    /// The declared atom count disagrees with the number of atom entries.
    #[error("Declared atom count {declared} does not match {actual} atom entries")]
    CountMismatch {
        /// The `natoms` value carried by the serialized data.
        declared: usize,
        /// The number of atom entries actually present.
        actual: usize,
    },
    /// The atom entries disagree on extra-column arity.
    #[error(transparent)]
    ExtraLength(#[from] ExtraLengthMismatch),
}

/// Mirror of the serialized field layout, checked before it is allowed to
/// become a [`MoleculeRecord`].
#[derive(Deserialize)]
struct RawMoleculeRecord {
    natoms: usize,
    comment: String,
    atoms: Vec<AtomRecord>,
}

impl TryFrom<RawMoleculeRecord> for MoleculeRecord {
    type Error = InvalidMoleculeRecord;

    fn try_from(raw: RawMoleculeRecord) -> Result<Self, Self::Error> {
        if raw.natoms != raw.atoms.len() {
            return Err(InvalidMoleculeRecord::CountMismatch {
                declared: raw.natoms,
                actual: raw.atoms.len(),
            });
        }
        Ok(MoleculeRecord::new(raw.comment, raw.atoms)?)
    }
}

impl MoleculeRecord {
    /// Creates a molecule record from a comment and its atoms.
    ///
    /// The comment is trimmed of surrounding whitespace and the declared atom
    /// count is taken from `atoms.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtraLengthMismatch`] if two atoms disagree on the number of
    /// extra columns.
    pub fn new(
        comment: impl Into<String>,
        atoms: Vec<AtomRecord>,
    ) -> Result<Self, ExtraLengthMismatch> {
        if let Some(first) = atoms.first() {
            let expected = first.extra().len();
            for atom in &atoms[1..] {
                let found = atom.extra().len();
                if found != expected {
                    return Err(ExtraLengthMismatch { expected, found });
                }
            }
        }
        Ok(Self {
            natoms: atoms.len(),
            comment: comment.into().trim().to_string(),
            atoms,
        })
    }

    /// Builds a record from an external geometry: one `(label, position)`
    /// pair per atom.
    ///
    /// Every atom gets an empty extra-column list, so the arity invariant
    /// holds by construction and the call cannot fail. When `comment` is
    /// `None`, the fixed placeholder [`DEFAULT_COMMENT`] is used.
    pub fn from_sites<I, S>(sites: I, comment: Option<&str>) -> Self
    where
        I: IntoIterator<Item = (S, Point3<f64>)>,
        S: Into<String>,
    {
        let atoms: Vec<AtomRecord> = sites
            .into_iter()
            .map(|(label, position)| AtomRecord::new(label, position, Vec::new()))
            .collect();
        Self {
            natoms: atoms.len(),
            comment: comment.unwrap_or(DEFAULT_COMMENT).trim().to_string(),
            atoms,
        }
    }

    /// Returns the declared atom count.
    pub fn natoms(&self) -> usize {
        self.natoms
    }

    /// Returns the comment line, trimmed.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Returns the atoms in line order.
    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(symbol: &str, extra: Vec<f64>) -> AtomRecord {
        AtomRecord::new(symbol, Point3::origin(), extra)
    }

    #[test]
    fn new_accepts_uniform_extra_column_counts() {
        let molecule = MoleculeRecord::new(
            "with charges",
            vec![atom("H", vec![0.1]), atom("O", vec![-0.2])],
        )
        .unwrap();
        assert_eq!(molecule.natoms(), 2);
        assert_eq!(molecule.comment(), "with charges");
    }

    #[test]
    fn new_rejects_mixed_extra_column_counts() {
        let err = MoleculeRecord::new("bad", vec![atom("H", vec![0.1]), atom("O", Vec::new())])
            .unwrap_err();
        assert_eq!(
            err,
            ExtraLengthMismatch {
                expected: 1,
                found: 0
            }
        );
        assert_eq!(err.to_string(), "Varying input length.");
    }

    #[test]
    fn new_trims_the_comment_line() {
        let molecule = MoleculeRecord::new("  water \t", Vec::new()).unwrap();
        assert_eq!(molecule.comment(), "water");
    }

    #[test]
    fn new_allows_an_empty_molecule() {
        let molecule = MoleculeRecord::new("empty", Vec::new()).unwrap();
        assert_eq!(molecule.natoms(), 0);
        assert!(molecule.atoms().is_empty());
    }

    #[test]
    fn from_sites_defaults_the_comment_and_leaves_extras_empty() {
        let molecule = MoleculeRecord::from_sites(
            vec![("H", Point3::new(0.0, -1.0, 0.0)), ("O", Point3::origin())],
            None,
        );
        assert_eq!(molecule.comment(), DEFAULT_COMMENT);
        assert_eq!(molecule.natoms(), 2);
        assert!(molecule.atoms().iter().all(|a| a.extra().is_empty()));
    }

    #[test]
    fn deserialization_rejects_a_count_that_disagrees_with_the_atom_list() {
        let err = toml::from_str::<MoleculeRecord>("natoms = 5\ncomment = \"ok\"\natoms = []\n")
            .unwrap_err();
        assert!(err.to_string().contains("does not match"));
    }

    #[test]
    fn deserialization_rejects_mixed_extra_column_counts() {
        let valid = MoleculeRecord::new(
            "charges",
            vec![
                AtomRecord::new("H", Point3::new(0.0, 0.0, 0.0), vec![0.25]),
                AtomRecord::new("O", Point3::new(0.0, 0.0, 1.0), vec![0.25]),
            ],
        )
        .unwrap();

        let mut text = toml::to_string(&valid).unwrap();
        let start = text.rfind("[0.25]").unwrap();
        text.replace_range(start..start + "[0.25]".len(), "[]");

        let err = toml::from_str::<MoleculeRecord>(&text).unwrap_err();
        assert!(err.to_string().contains("Varying input length."));
    }

    #[test]
    fn serde_round_trip_preserves_a_valid_record() {
        let original = MoleculeRecord::new(
            "water",
            vec![AtomRecord::new(
                "H",
                Point3::new(0.0, -1.0, 0.0),
                Vec::new(),
            )],
        )
        .unwrap();
        let text = toml::to_string(&original).unwrap();
        assert_eq!(toml::from_str::<MoleculeRecord>(&text).unwrap(), original);
    }

    #[test]
    fn from_sites_uses_the_caller_comment_when_given() {
        let molecule =
            MoleculeRecord::from_sites(vec![("He", Point3::origin())], Some("helium frame"));
        assert_eq!(molecule.comment(), "helium frame");
        assert_eq!(molecule.atoms()[0].symbol(), "He");
    }
}
