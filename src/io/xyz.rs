use crate::io::traits::ChemicalFile;
use crate::models::atom::AtomRecord;
use crate::models::molecule::{ExtraLengthMismatch, MoleculeRecord};
use nalgebra::Point3;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, trace};

/// Width of the left-justified symbol column in formatted atom lines.
const SYMBOL_WIDTH: usize = 3;
/// Field width of each formatted coordinate or extra value, sign included.
const VALUE_WIDTH: usize = 13;
/// Digits after the decimal point for formatted values.
const VALUE_PRECISION: usize = 8;

/// Errors produced while reading or writing XYZ data.
#[derive(Debug, Error)]
pub enum XyzError {
    /// The underlying line source failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The block grammar was violated (count line, comment line, block
    /// length, or extra-column arity).
    #[error("Format error: {0}")]
    Format(#[from] XyzFormatErrorKind),
    /// An atom line had fewer than the four mandatory whitespace-separated
    /// tokens (symbol plus three coordinates).
    #[error("XYZ requires at least an atom symbol and three coordinates. Got: {line}")]
    MalformedAtomLine {
        /// The offending raw line.
        line: String,
    },
    /// A coordinate or extra token failed to parse as a float. Propagated
    /// as-is so callers see the raw conversion failure.
    #[error(transparent)]
    InvalidNumber(#[from] std::num::ParseFloatError),
}

/// The block-grammar violations reported as [`XyzError::Format`].
#[derive(Debug, Error)]
pub enum XyzFormatErrorKind {
    /// The count line did not parse as a non-negative integer.
    #[error("Expected number of atoms. Got {value}")]
    InvalidAtomCount {
        /// The offending count-line content.
        value: String,
    },
    /// The source ended right after a count line, before the comment line.
    #[error("Expected a comment line after the atom count")]
    MissingComment,
    /// The source ended before the declared number of atom lines was read.
    #[error("Expected to find {expected} atoms. Found only {found}")]
    TruncatedBlock {
        /// The count declared by the count line.
        expected: usize,
        /// Atom lines actually read before exhaustion.
        found: usize,
    },
    /// Atoms within one block disagreed on the number of extra columns.
    #[error(transparent)]
    VaryingExtraLength(#[from] ExtraLengthMismatch),
}

/// Reader and writer for the XYZ text format.
///
/// A file is a sequence of blocks, each laid out as:
///
/// ```text
/// <natoms>
/// <comment>
/// <symbol> <x> <y> <z> [extra...]
/// ...
/// ```
///
/// Reading is strict: blank lines between blocks are not skipped (a blank
/// count line is a format error), the comment line is mandatory even for a
/// zero-atom block, and the first violation aborts the whole parse with no
/// partial result.
pub struct XyzFile;

impl XyzFile {
    /// Parses molecule records from an in-memory sequence of lines.
    ///
    /// The sequence is consumed through a forward-only cursor, each line at
    /// most once. An empty sequence yields an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// Returns an [`XyzError`] on the first grammar violation or numeric
    /// conversion failure.
    pub fn parse_lines<I>(lines: I) -> Result<Vec<MoleculeRecord>, XyzError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        parse_records(lines.into_iter().map(|line| Ok(line.as_ref().to_string())))
    }

    /// Renders one molecule record as a canonical XYZ block.
    ///
    /// Pure function: the count line, the comment, then one line per atom
    /// with the symbol left-justified to width 3 and every numeric value
    /// right-aligned in a 13-character field with 8 decimal digits. Lines are
    /// newline-joined with no trailing newline, so callers control
    /// inter-block separation.
    pub fn format_molecule(molecule: &MoleculeRecord) -> String {
        let mut lines = Vec::with_capacity(molecule.natoms() + 2);
        lines.push(molecule.natoms().to_string());
        lines.push(molecule.comment().to_string());
        for atom in molecule.atoms() {
            let position = atom.position();
            let mut line = format!(
                "{:<sym$}{:>w$.p$}{:>w$.p$}{:>w$.p$}",
                atom.symbol(),
                position.x,
                position.y,
                position.z,
                sym = SYMBOL_WIDTH,
                w = VALUE_WIDTH,
                p = VALUE_PRECISION,
            );
            for value in atom.extra() {
                line.push_str(&format!(
                    "{:>w$.p$}",
                    value,
                    w = VALUE_WIDTH,
                    p = VALUE_PRECISION
                ));
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}

impl ChemicalFile for XyzFile {
    type Data = Vec<MoleculeRecord>;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Data, Self::Error> {
        let molecules = parse_records(reader.lines())?;
        debug!("Parsed {} molecule records from XYZ input", molecules.len());
        Ok(molecules)
    }

    fn write_to(data: &Self::Data, writer: &mut impl Write) -> Result<(), Self::Error> {
        for molecule in data {
            writeln!(writer, "{}", Self::format_molecule(molecule))?;
        }
        debug!("Wrote {} molecule records as XYZ output", data.len());
        Ok(())
    }
}

fn parse_records<I>(mut lines: I) -> Result<Vec<MoleculeRecord>, XyzError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut molecules = Vec::new();
    // Exhaustion at a block boundary is the normal termination condition.
    while let Some(count_line) = lines.next().transpose()? {
        let molecule = parse_molecule(&mut lines, &count_line)?;
        trace!(
            natoms = molecule.natoms(),
            comment = molecule.comment(),
            "parsed molecule block"
        );
        molecules.push(molecule);
    }
    Ok(molecules)
}

fn parse_molecule<I>(lines: &mut I, count_line: &str) -> Result<MoleculeRecord, XyzError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let natoms: usize =
        count_line
            .trim()
            .parse()
            .map_err(|_| XyzFormatErrorKind::InvalidAtomCount {
                value: count_line.to_string(),
            })?;

    let comment = lines
        .next()
        .transpose()?
        .ok_or(XyzFormatErrorKind::MissingComment)?;

    // The count line is untrusted input; never reserve memory from it.
    let mut atoms = Vec::new();
    for _ in 0..natoms {
        let line = lines
            .next()
            .transpose()?
            .ok_or(XyzFormatErrorKind::TruncatedBlock {
                expected: natoms,
                found: atoms.len(),
            })?;
        atoms.push(parse_atom_line(&line)?);
    }

    let molecule = MoleculeRecord::new(comment, atoms).map_err(XyzFormatErrorKind::from)?;
    Ok(molecule)
}

fn parse_atom_line(line: &str) -> Result<AtomRecord, XyzError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(XyzError::MalformedAtomLine {
            line: line.to_string(),
        });
    }
    let x: f64 = tokens[1].parse()?;
    let y: f64 = tokens[2].parse()?;
    let z: f64 = tokens[3].parse()?;
    let extra = tokens[4..]
        .iter()
        .map(|token| token.parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(AtomRecord::new(tokens[0], Point3::new(x, y, z), extra))
}
