//! `grid-template-areas` parsing and checking.
//!
//! ```css
//! body {
//!     grid-template-areas: "h h" "n m" "f f";
//! }
//! ```
//!
//! Each quoted string is a row, each whitespace-separated token in it a
//! column. A token made only of dots (`.`, `...`) is a null cell and is
//! stored as `.`.

use std::fmt;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_till,
    character::complete::{char, multispace0},
    combinator::all_consuming,
    multi::many1,
    sequence::{delimited, preceded, terminated},
};

use crate::checker::Check;
use crate::error::CheckError;

/// Name used for cells that belong to no area.
pub const NULL_CELL: &str = ".";

/// A row-major matrix of area names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTemplate {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<String>>,
}

impl GridTemplate {
    /// Parses and structurally validates a `grid-template-areas` value.
    ///
    /// Rows must all have the same number of columns and every named area
    /// must fill a single rectangle.
    pub fn parse(raw: &str) -> Result<Self, CheckError> {
        let unparsable = || CheckError::UnparsableValue {
            value: raw.trim().to_string(),
            expected: "quoted grid area rows",
        };

        let (_, segments) = all_consuming(terminated(many1(quoted_row), multispace0))(raw)
            .map_err(|_: nom::Err<nom::error::Error<&str>>| unparsable())?;

        let mut cells = Vec::with_capacity(segments.len());
        for segment in segments {
            let row: Vec<String> = segment.split_whitespace().map(normalize_cell).collect();
            if row.is_empty() || !row.iter().all(|name| is_cell_token(name)) {
                return Err(unparsable());
            }
            cells.push(row);
        }

        let template = Self::from_rows(cells)?;
        template.validate_areas()?;
        Ok(template)
    }

    /// Builds a template from already split rows, rejecting ragged input.
    pub fn from_rows(cells: Vec<Vec<String>>) -> Result<Self, CheckError> {
        let cols = cells.first().map_or(0, Vec::len);
        if cells.iter().any(|row| row.len() != cols) {
            return Err(CheckError::RaggedGrid {
                counts: cells.iter().map(Vec::len).collect(),
            });
        }
        Ok(Self {
            rows: cells.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    /// Checks that every named area covers exactly one filled rectangle.
    ///
    /// Areas are reported in order of first appearance, row by row.
    pub fn validate_areas(&self) -> Result<(), CheckError> {
        let mut areas: Vec<(&str, Extent)> = Vec::new();

        for (row, names) in self.cells.iter().enumerate() {
            for (col, name) in names.iter().enumerate() {
                if name == NULL_CELL {
                    continue;
                }
                match areas.iter_mut().find(|(area, _)| *area == name.as_str()) {
                    Some((_, extent)) => extent.include(row, col),
                    None => areas.push((name.as_str(), Extent::at(row, col))),
                }
            }
        }

        // Every counted cell lies inside the bounding box, so equal counts
        // mean the box is completely filled.
        match areas.iter().find(|(_, extent)| extent.cells != extent.area()) {
            Some((area, _)) => Err(CheckError::InvalidGridShape {
                area: area.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for GridTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "\"{}\"", row.join(" "))?;
        }
        Ok(())
    }
}

/// Bounding box and cell count of one named area.
#[derive(Debug, Clone, Copy)]
struct Extent {
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
    cells: usize,
}

impl Extent {
    fn at(row: usize, col: usize) -> Self {
        Self {
            top: row,
            left: col,
            bottom: row,
            right: col,
            cells: 1,
        }
    }

    fn include(&mut self, row: usize, col: usize) {
        self.top = self.top.min(row);
        self.left = self.left.min(col);
        self.bottom = self.bottom.max(row);
        self.right = self.right.max(col);
        self.cells += 1;
    }

    fn area(&self) -> usize {
        (self.bottom - self.top + 1) * (self.right - self.left + 1)
    }
}

fn quoted_row(input: &str) -> IResult<&str, &str> {
    preceded(
        multispace0,
        alt((
            delimited(char('"'), take_till(|c: char| c == '"'), char('"')),
            delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
        )),
    )(input)
}

fn normalize_cell(token: &str) -> String {
    if token.chars().all(|c| c == '.') {
        NULL_CELL.to_string()
    } else {
        token.to_string()
    }
}

fn is_cell_token(name: &str) -> bool {
    name == NULL_CELL
        || name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii())
}

/// Expected `grid-template-areas` layout.
///
/// Verification runs in a fixed order: parse, ragged rows, area shapes,
/// overall dimensions, then cell by cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridAreaChecker {
    rows: usize,
    cols: usize,
    matrix: Vec<Vec<String>>,
}

impl GridAreaChecker {
    pub fn new<R, C, S>(rows: usize, cols: usize, matrix: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows,
            cols,
            matrix: matrix
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Derives the expected dimensions from the matrix itself.
    pub fn from_matrix<R, C, S>(matrix: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut checker = Self::new(0, 0, matrix);
        checker.rows = checker.matrix.len();
        checker.cols = checker.matrix.first().map_or(0, Vec::len);
        checker
    }

    fn expected_cell(&self, row: usize, col: usize) -> &str {
        self.matrix
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }
}

impl Check for GridAreaChecker {
    fn verify(&self, raw: &str) -> Result<(), CheckError> {
        let actual = GridTemplate::parse(raw)?;

        if actual.rows() != self.rows || actual.cols() != self.cols {
            return Err(CheckError::GridShapeMismatch {
                expected_rows: self.rows,
                expected_cols: self.cols,
                actual_rows: actual.rows(),
                actual_cols: actual.cols(),
            });
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                let expected = self.expected_cell(row, col);
                let found = actual.get(row, col).unwrap_or_default();
                if expected != found {
                    return Err(CheckError::GridCellMismatch {
                        row,
                        col,
                        expected: expected.to_string(),
                        actual: found.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#""h h" "n m" "f f""#;

    fn page_checker() -> GridAreaChecker {
        GridAreaChecker::new(3, 2, [["h", "h"], ["n", "m"], ["f", "f"]])
    }

    #[test]
    fn parses_rows_and_columns() {
        let template = GridTemplate::parse(PAGE).unwrap();
        assert_eq!((template.rows(), template.cols()), (3, 2));
        assert_eq!(template.get(1, 1), Some("m"));
        assert_eq!(template.get(3, 0), None);
    }

    #[test]
    fn display_serializes_back() {
        let template = GridTemplate::parse("\"a  b\"\n   'c d'").unwrap();
        assert_eq!(template.to_string(), r#""a b" "c d""#);
    }

    #[test]
    fn dot_sequences_are_null_cells() {
        let template = GridTemplate::parse(r#""h ..." ". m""#).unwrap();
        assert_eq!(template.get(0, 1), Some(NULL_CELL));
        assert_eq!(template.get(1, 0), Some(NULL_CELL));
    }

    #[test]
    fn matching_layout_passes() {
        assert!(page_checker().verify(PAGE).is_ok());
    }

    #[test]
    fn ragged_rows() {
        let err = page_checker().verify(r#""h h" "n m x" "f f""#).unwrap_err();
        assert_eq!(
            err,
            CheckError::RaggedGrid {
                counts: vec![2, 3, 2]
            }
        );
    }

    #[test]
    fn l_shaped_area_is_invalid() {
        let err = GridTemplate::parse(r#""a a" "a b""#).unwrap_err();
        assert_eq!(err, CheckError::InvalidGridShape { area: "a".into() });
    }

    #[test]
    fn disjoint_area_is_invalid() {
        let err = GridTemplate::parse(r#""a b a""#).unwrap_err();
        assert_eq!(err, CheckError::InvalidGridShape { area: "a".into() });
    }

    #[test]
    fn null_cells_may_repeat_anywhere() {
        assert!(GridTemplate::parse(r#"". a ." "b a .""#).is_ok());
    }

    #[test]
    fn shape_mismatch() {
        let err = GridAreaChecker::new(2, 3, [["h", "h"], ["n", "m"], ["f", "f"]])
            .verify(PAGE)
            .unwrap_err();
        assert_eq!(
            err,
            CheckError::GridShapeMismatch {
                expected_rows: 2,
                expected_cols: 3,
                actual_rows: 3,
                actual_cols: 2
            }
        );
    }

    #[test]
    fn cell_mismatch_reports_position() {
        let err = page_checker().verify(r#""h h" "m n" "f f""#).unwrap_err();
        assert_eq!(
            err,
            CheckError::GridCellMismatch {
                row: 1,
                col: 0,
                expected: "n".into(),
                actual: "m".into()
            }
        );
    }

    #[test]
    fn unquoted_or_empty_rows_are_unparsable() {
        for raw in ["none", "h h", r#""h h" x"#, r#""""#, r#""h h"#, r#""h/h""#] {
            assert!(
                matches!(
                    GridTemplate::parse(raw),
                    Err(CheckError::UnparsableValue { .. })
                ),
                "{raw} should not parse"
            );
        }
    }

    #[test]
    fn from_matrix_derives_dimensions() {
        let checker = GridAreaChecker::from_matrix([["a", "b", "c"]]);
        assert!(checker.verify(r#""a b c""#).is_ok());
    }
}
