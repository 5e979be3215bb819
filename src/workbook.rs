use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};

use crate::error::LoadError;

/// One worksheet as absolute, zero-indexed rows of equal width.
///
/// calamine trims leading empty rows and columns off a range; they are put
/// back here so that "row 2" always means the sheet's third row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Data>>,
    width: usize,
}

impl Grid {
    pub fn new(mut rows: Vec<Vec<Data>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Data::Empty);
        }
        Self { rows, width }
    }

    fn from_range(range: &Range<Data>) -> Self {
        let Some((start_row, start_col)) = range.start() else {
            return Self::default();
        };
        let (start_row, start_col) = (start_row as usize, start_col as usize);
        let mut rows = vec![Vec::new(); start_row];
        for row in range.rows() {
            let mut padded = vec![Data::Empty; start_col];
            padded.extend_from_slice(row);
            rows.push(padded);
        }
        Self::new(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, idx: usize) -> Option<&[Data]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Data]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// Every sheet of an uploaded workbook, held in memory.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<(String, Grid)>,
}

impl Workbook {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let mut xlsx = Xlsx::new(Cursor::new(bytes.to_vec()))
            .map_err(|e: calamine::XlsxError| LoadError::Workbook(e.to_string()))?;

        let mut sheets = Vec::new();
        for name in xlsx.sheet_names() {
            match xlsx.worksheet_range(&name) {
                Ok(range) => {
                    let grid = Grid::from_range(&range);
                    tracing::debug!(sheet = %name, rows = grid.height(), cols = grid.width(), "sheet read");
                    sheets.push((name, grid));
                }
                Err(e) => tracing::warn!(sheet = %name, error = %e, "skipping unreadable sheet"),
            }
        }
        Ok(Self { sheets })
    }

    #[cfg(test)]
    pub fn from_grids(sheets: Vec<(String, Grid)>) -> Self {
        Self { sheets }
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn sheet(&self, name: &str) -> Result<&Grid, LoadError> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, grid)| grid)
            .ok_or_else(|| LoadError::SheetNotFound(name.to_string()))
    }
}
