//! Row templates
//!
//! A template lists the colorable cells of a row, left to right, and which of
//! them hosts the index label. Templates are validated when constructed so row
//! building itself cannot fail.

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("template has no cells")]
    NoCells,

    #[error("label cell {index} is out of range for {cells} cells")]
    LabelOutOfRange { index: usize, cells: usize },

    #[error("cell {index} has invalid weight {weight}")]
    InvalidWeight { index: usize, weight: f32 },

    #[error("could not parse cell weight {0:?}")]
    Parse(String),
}

/// One colorable cell of a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSpec {
    /// Share of the row width relative to the other cells
    pub weight: f32,
}

impl CellSpec {
    pub fn new(weight: f32) -> Self {
        Self { weight }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowTemplate {
    cells: Vec<CellSpec>,
    label_cell: usize,
}

impl RowTemplate {
    pub fn new(cells: Vec<CellSpec>, label_cell: usize) -> Result<Self, TemplateError> {
        if cells.is_empty() {
            return Err(TemplateError::NoCells);
        }
        if label_cell >= cells.len() {
            return Err(TemplateError::LabelOutOfRange {
                index: label_cell,
                cells: cells.len(),
            });
        }
        if let Some((index, cell)) = cells
            .iter()
            .enumerate()
            .find(|(_, c)| !(c.weight.is_finite() && c.weight > 0.0))
        {
            return Err(TemplateError::InvalidWeight {
                index,
                weight: cell.weight,
            });
        }
        Ok(Self { cells, label_cell })
    }

    pub fn cells(&self) -> &[CellSpec] {
        &self.cells
    }

    pub fn label_cell(&self) -> usize {
        self.label_cell
    }

    /// Return a copy with the label moved to another cell
    pub fn with_label_cell(self, label_cell: usize) -> Result<Self, TemplateError> {
        Self::new(self.cells, label_cell)
    }
}

impl Default for RowTemplate {
    /// Three equal cells, label in the first one
    fn default() -> Self {
        Self {
            cells: vec![CellSpec::new(1.0); 3],
            label_cell: 0,
        }
    }
}

/// Parses a comma separated list of weights, e.g. `"1,2,1"`. The label goes in the first cell.
impl FromStr for RowTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f32>()
                    .map(CellSpec::new)
                    .map_err(|_| TemplateError::Parse(part.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cells, 0)
    }
}
