//! View model: rows, containers and layout parameters

use crate::color::Rgb;

/// Size of a container along one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Fill the parent
    MatchParent,
    /// Size to content
    WrapContent,
    /// Fixed size in points
    Exact(f32),
}

/// Layout parameters shared between the visible container and the offscreen one
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    pub width: Dimension,
    pub height: Dimension,
    /// Outer margin in points, applied on every side
    pub margin: f32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            width: Dimension::MatchParent,
            height: Dimension::WrapContent,
            margin: 0.0,
        }
    }
}

/// One colored cell of a row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub color: Rgb,
    pub weight: f32,
}

/// A built row. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    index: usize,
    cells: Vec<Cell>,
    label: String,
    label_cell: usize,
}

impl Row {
    pub(crate) fn new(index: usize, cells: Vec<Cell>, label: String, label_cell: usize) -> Self {
        Self {
            index,
            cells,
            label,
            label_cell,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Position of the cell that hosts the label
    pub fn label_cell(&self) -> usize {
        self.label_cell
    }

    /// Sum of all cell weights
    pub fn total_weight(&self) -> f32 {
        self.cells.iter().map(|c| c.weight).sum()
    }
}

/// Rows stacked top to bottom, in push order
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    layout: LayoutParams,
    rows: Vec<Row>,
}

impl Container {
    pub fn vertical(layout: LayoutParams) -> Self {
        Self {
            layout,
            rows: Vec::new(),
        }
    }

    /// Make room for at least `additional` more rows
    pub fn reserve(&mut self, additional: usize) {
        self.rows.reserve(additional);
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn layout(&self) -> &LayoutParams {
        &self.layout
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The on-screen holder: empty, or holding exactly one attached container
#[derive(Debug, Default)]
pub struct VisibleContainer {
    layout: LayoutParams,
    child: Option<Container>,
}

impl VisibleContainer {
    pub fn new(layout: LayoutParams) -> Self {
        Self {
            layout,
            child: None,
        }
    }

    pub fn layout(&self) -> &LayoutParams {
        &self.layout
    }

    /// Attach a container as the sole child, replacing anything already attached.
    /// Returns the replaced container, if any.
    pub fn attach(&mut self, container: Container) -> Option<Container> {
        self.child.replace(container)
    }

    /// Remove all content. Returns whether anything was removed.
    pub fn clear(&mut self) -> bool {
        self.child.take().is_some()
    }

    pub fn child(&self) -> Option<&Container> {
        self.child.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.child.is_none()
    }

    /// Number of rows currently displayed
    pub fn row_count(&self) -> usize {
        self.child.as_ref().map_or(0, Container::len)
    }
}
