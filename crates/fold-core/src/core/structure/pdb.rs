use super::{Atom, Residue, Structure};
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for an ATOM/HETATM record (must cover the B-factor columns)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Parses an opaque structure payload as PDB text.
///
/// Only `ATOM` and `HETATM` records are interpreted; every other record
/// type (headers, `TER`, `END`, remarks) is skipped. Atoms are grouped
/// into residues on change of chain id or residue sequence number, in
/// file order. A payload with no atom records parses to an empty
/// [`Structure`]; deciding whether that is an error is left to the caller.
pub fn read_from(reader: &mut impl BufRead) -> Result<Structure, PdbError> {
    let mut structure = Structure::default();
    let mut current: Option<(char, isize)> = None;

    for (line_num, line_res) in reader.lines().enumerate() {
        let line = line_res?;
        let line_num = line_num + 1;

        let record_type = slice_and_trim(&line, 0, 6);
        if record_type != "ATOM" && record_type != "HETATM" {
            continue;
        }
        if line.len() < 66 {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::LineTooShort,
            });
        }

        let serial_str = slice_and_trim(&line, 6, 11);
        let name_str = slice_and_trim(&line, 12, 16);
        let res_name_str = slice_and_trim(&line, 17, 20);
        let chain_id = slice_and_trim(&line, 21, 22).chars().next().unwrap_or('A');
        let res_seq_str = slice_and_trim(&line, 22, 26);
        let x_str = slice_and_trim(&line, 30, 38);
        let y_str = slice_and_trim(&line, 38, 46);
        let z_str = slice_and_trim(&line, 46, 54);
        let occupancy_str = slice_and_trim(&line, 54, 60);
        let b_factor_str = slice_and_trim(&line, 60, 66);

        let serial: usize = serial_str.parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidInt {
                columns: "7-11".into(),
                value: serial_str.into(),
            },
        })?;
        let res_seq: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
            line: line_num,
            kind: PdbParseErrorKind::InvalidInt {
                columns: "23-26".into(),
                value: res_seq_str.into(),
            },
        })?;

        let parse_float = |value: &str, columns: &str| -> Result<f64, PdbError> {
            value.parse().map_err(|_| PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::InvalidFloat {
                    columns: columns.into(),
                    value: value.into(),
                },
            })
        };
        let x = parse_float(x_str, "31-38")?;
        let y = parse_float(y_str, "39-46")?;
        let z = parse_float(z_str, "47-54")?;
        let occupancy = if occupancy_str.is_empty() {
            1.0
        } else {
            parse_float(occupancy_str, "55-60")?
        };
        if b_factor_str.is_empty() {
            return Err(PdbError::Parse {
                line: line_num,
                kind: PdbParseErrorKind::MissingRequiredField {
                    columns: "61-66".into(),
                },
            });
        }
        let b_factor = parse_float(b_factor_str, "61-66")?;

        if current != Some((chain_id, res_seq)) {
            structure.residues.push(Residue {
                name: res_name_str.to_string(),
                chain_id,
                seq_number: res_seq,
                atoms: Vec::new(),
            });
            current = Some((chain_id, res_seq));
        }
        if let Some(residue) = structure.residues.last_mut() {
            residue.atoms.push(Atom {
                serial,
                name: name_str.to_string(),
                position: Point3::new(x, y, z),
                occupancy,
                b_factor,
            });
        }
    }

    Ok(structure)
}

/// Parses an in-memory payload string without touching the filesystem.
pub fn parse_str(payload: &str) -> Result<Structure, PdbError> {
    read_from(&mut payload.as_bytes())
}
