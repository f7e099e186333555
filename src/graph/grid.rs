use super::search::{self, SearchSpace};
use crate::data::{Record, ensure_unique_ids};
use crate::error::InputError;
use crate::layout::LayoutConfig;
use crate::model::{Element, Frame, Status};
use ahash::AHashMap;

/// Cell value that marks a wall.
pub const WALL: f64 = 1.0;

/// A row-major maze. Cells are records; `val == 1` is a wall.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Record>,
    cols: usize,
    index: AHashMap<String, usize>,
}

impl Grid {
    pub fn new(cells: &[Record], cols: usize) -> Result<Self, InputError> {
        if cols == 0 {
            return Err(InputError::ZeroColumns);
        }
        ensure_unique_ids(cells)?;
        let index = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.id.clone(), i))
            .collect();
        Ok(Self {
            cells: cells.to_vec(),
            cols,
            index,
        })
    }

    pub fn is_wall(&self, i: usize) -> bool {
        self.cells[i].value == Some(WALL)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn cell(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 || col as usize >= self.cols {
            return None;
        }
        let i = row as usize * self.cols + col as usize;
        (i < self.cells.len()).then_some(i)
    }
}

impl SearchSpace for Grid {
    /// Up, right, down, left; walls and out-of-bounds cells are skipped.
    fn neighbors(&self, id: &str) -> Vec<String> {
        let Some(&i) = self.index.get(id) else {
            return Vec::new();
        };
        let (row, col) = ((i / self.cols) as isize, (i % self.cols) as isize);
        [(-1, 0), (0, 1), (1, 0), (0, -1)]
            .into_iter()
            .filter_map(|(dr, dc)| self.cell(row + dr, col + dc))
            .filter(|&n| !self.is_wall(n))
            .map(|n| self.cells[n].id.clone())
            .collect()
    }

    fn directed(&self) -> bool {
        false
    }

    fn elements(&self, distances: &AHashMap<String, f64>, config: &LayoutConfig) -> Vec<Element> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let position = config.origin.offset(
                    (i % self.cols) as f64 * config.cell_size,
                    (i / self.cols) as f64 * config.cell_size,
                );
                let element = Element::boxed(
                    cell.id.clone(),
                    distances.get(&cell.id).copied(),
                    position,
                    config.cell_size,
                    config.cell_size,
                );
                if self.is_wall(i) {
                    element.with_status(Status::wall())
                } else {
                    element
                }
            })
            .collect()
    }
}

fn prepare(cells: &[Record], cols: usize, start: &str, end: &str) -> Result<Grid, InputError> {
    let grid = Grid::new(cells, cols)?;
    for id in [start, end] {
        if !grid.contains(id) {
            return Err(InputError::UnknownNode(id.to_string()));
        }
    }
    Ok(grid)
}

/// Layer-at-a-time BFS through the open cells.
pub fn bfs(cells: &[Record], cols: usize, start: &str, end: &str, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let grid = prepare(cells, cols, start, end)?;
    Ok(search::layered_bfs(&grid, start, end, config))
}

pub fn dfs(cells: &[Record], cols: usize, start: &str, end: &str, config: &LayoutConfig) -> Result<Vec<Frame>, InputError> {
    let grid = prepare(cells, cols, start, end)?;
    Ok(search::dfs(&grid, start, end, config))
}
