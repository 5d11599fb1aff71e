// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Rule table loading and the in-memory rule matrix.
//!
//! The rule source is a comma-separated UTF-8 table: a fixed number of
//! leading non-data lines, then one data row per body part in ordinal order.
//! Each data row carries leading metadata fields (part name, description)
//! followed by one expected-bearing field per body part. An empty field or 0
//! means "no constraint between this pair".
//!
//! The matrix is built once at startup and stays immutable for the process
//! lifetime; the classifier receives it by reference.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::Array2;

use crate::body_part::{BodyPart, NUM_BODY_PARTS};
use crate::error::{FallDetectionError, Result};

/// Shape of the rule table source.
///
/// The current rule data carries one header line plus one units line before
/// data rows begin, and two descriptive fields before the angle columns. Both
/// offsets are explicit configuration: an off-by-one in the skip count would
/// silently drop a rule row.
///
/// # Example
///
/// ```rust
/// use fall_detection::RuleFormat;
///
/// let format = RuleFormat::new()
///     .with_skip_lines(1)
///     .with_metadata_columns(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFormat {
    /// Number of leading non-data lines to skip.
    pub skip_lines: usize,
    /// Number of leading descriptive fields per data row.
    pub metadata_columns: usize,
}

impl Default for RuleFormat {
    fn default() -> Self {
        Self {
            skip_lines: 2,
            metadata_columns: 2,
        }
    }
}

impl RuleFormat {
    /// Create a format with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of leading non-data lines to skip.
    ///
    /// # Arguments
    ///
    /// * `lines` - Lines to skip before the first data row.
    ///
    /// # Returns
    ///
    /// * The modified `RuleFormat`.
    #[must_use]
    pub const fn with_skip_lines(mut self, lines: usize) -> Self {
        self.skip_lines = lines;
        self
    }

    /// Set the number of leading descriptive fields per data row.
    ///
    /// # Arguments
    ///
    /// * `columns` - Fields to skip before the angle columns.
    ///
    /// # Returns
    ///
    /// * The modified `RuleFormat`.
    #[must_use]
    pub const fn with_metadata_columns(mut self, columns: usize) -> Self {
        self.metadata_columns = columns;
        self
    }
}

/// One configured constraint: the expected bearing from one body part to
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint {
    /// The "from" body part (matrix row).
    pub from: BodyPart,
    /// The "to" body part (matrix column).
    pub to: BodyPart,
    /// Expected bearing angle in degrees, in [1, 359].
    pub expected: u32,
}

/// The square table of expected bearing angles between body part pairs.
///
/// Row index is the "from" part ordinal, column index the "to" part ordinal.
/// A cell value of 0 means no constraint. Constraints are also precomputed as
/// a row-major list so classification never scans empty cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMatrix {
    matrix: Array2<u32>,
    constraints: Vec<Constraint>,
}

impl RuleMatrix {
    /// Load a rule matrix from a file using the default [`RuleFormat`].
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV rule table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the table is
    /// structurally invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with(path, &RuleFormat::default())
    }

    /// Load a rule matrix from a file with an explicit format.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the CSV rule table.
    /// * `format` - Shape of the source table.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the table is
    /// structurally invalid.
    pub fn load_with<P: AsRef<Path>>(path: P, format: &RuleFormat) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            FallDetectionError::RuleTableError(format!("cannot open {}: {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file), format)
    }

    /// Parse a rule matrix from any buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - Source of the CSV rule table.
    /// * `format` - Shape of the source table.
    ///
    /// # Errors
    ///
    /// Returns an error on IO failure, on a data row with too few fields, on
    /// an unparseable non-empty angle field, on an angle outside [0, 359], or
    /// when fewer than 17 data rows are present. Parsing fails fast rather
    /// than defaulting malformed cells, so bad rule data cannot be masked.
    pub fn from_reader<R: BufRead>(reader: R, format: &RuleFormat) -> Result<Self> {
        let mut matrix = Array2::zeros((NUM_BODY_PARTS, NUM_BODY_PARTS));
        let mut row = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line_no < format.skip_lines {
                continue;
            }
            if row == NUM_BODY_PARTS {
                // Trailing lines after the 17th data row are ignored.
                break;
            }

            let fields: Vec<&str> = line.split(',').collect();
            let needed = format.metadata_columns + NUM_BODY_PARTS;
            if fields.len() < needed {
                return Err(FallDetectionError::RuleTableError(format!(
                    "line {}: expected at least {needed} fields, found {}",
                    line_no + 1,
                    fields.len()
                )));
            }

            for col in 0..NUM_BODY_PARTS {
                let field = fields[format.metadata_columns + col].trim();
                if field.is_empty() {
                    continue;
                }
                let angle: u32 = field.parse().map_err(|_| {
                    FallDetectionError::RuleTableError(format!(
                        "line {}, column {}: invalid angle '{field}'",
                        line_no + 1,
                        format.metadata_columns + col + 1
                    ))
                })?;
                if angle > 359 {
                    return Err(FallDetectionError::RuleTableError(format!(
                        "line {}, column {}: angle {angle} out of range [0, 359]",
                        line_no + 1,
                        format.metadata_columns + col + 1
                    )));
                }
                matrix[[row, col]] = angle;
            }
            row += 1;
        }

        if row < NUM_BODY_PARTS {
            return Err(FallDetectionError::RuleTableError(format!(
                "expected {NUM_BODY_PARTS} data rows, found {row}"
            )));
        }

        Ok(Self::from_array(matrix))
    }

    /// Parse a rule matrix from an in-memory string.
    ///
    /// # Arguments
    ///
    /// * `text` - The CSV rule table.
    /// * `format` - Shape of the source table.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RuleMatrix::from_reader`].
    pub fn parse(text: &str, format: &RuleFormat) -> Result<Self> {
        Self::from_reader(text.as_bytes(), format)
    }

    /// Build a rule matrix directly from a 17x17 array.
    ///
    /// # Panics
    ///
    /// Panics if `matrix` is not 17x17.
    #[must_use]
    pub fn from_array(matrix: Array2<u32>) -> Self {
        assert_eq!(
            matrix.shape(),
            [NUM_BODY_PARTS, NUM_BODY_PARTS],
            "rule matrix must be {NUM_BODY_PARTS}x{NUM_BODY_PARTS}"
        );

        // Precompute the non-zero cells in row-major order. Classification
        // iterates this list, which keeps the short-circuit deterministic.
        let mut constraints = Vec::new();
        for (row, &from) in BodyPart::all().iter().enumerate() {
            for (col, &to) in BodyPart::all().iter().enumerate() {
                let expected = matrix[[row, col]];
                if expected > 0 {
                    constraints.push(Constraint { from, to, expected });
                }
            }
        }

        Self {
            matrix,
            constraints,
        }
    }

    /// An all-zero matrix: no rules configured.
    ///
    /// Callers that fail to load their rule source can degrade to this value;
    /// every sufficiently confident pose then classifies as normal.
    #[must_use]
    pub fn unconstrained() -> Self {
        Self {
            matrix: Array2::zeros((NUM_BODY_PARTS, NUM_BODY_PARTS)),
            constraints: Vec::new(),
        }
    }

    /// Get the expected bearing angle from one body part to another.
    ///
    /// # Returns
    ///
    /// * The configured angle in degrees, 0 meaning unconstrained.
    #[must_use]
    pub fn expected(&self, from: BodyPart, to: BodyPart) -> u32 {
        self.matrix[[from.ordinal(), to.ordinal()]]
    }

    /// Get the configured constraints in row-major order.
    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Check whether no constraints are configured.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        self.constraints.is_empty()
    }
}
