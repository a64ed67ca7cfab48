//! Whitespace-delimited numeric table reader.
//!
//! Parameter files store one logical vector per on-disk *column*, so
//! [`Table::read`] loads each column as one in-memory row. Callers that want
//! the visual on-disk orientation apply [`Table::transpose`] afterwards.

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::TableError;

/// Rectangular table of `f64` values.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    mat: Vec<Vec<f64>>,
}

impl Table {
    /// Build a table directly from rows. Callers are expected to pass
    /// rectangular data; accessors assume it.
    pub fn from_rows(mat: Vec<Vec<f64>>) -> Self {
        Self { mat }
    }

    /// Read a delimited text file into a table.
    ///
    /// Blank lines and lines whose first non-whitespace character is `#`
    /// are skipped. Every data line must carry the same number of
    /// whitespace-separated numeric columns. Each on-disk column becomes
    /// one row of the returned table.
    pub fn read(path: &Path) -> Result<Self, TableError> {
        let contents = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut disk_rows: Vec<Vec<f64>> = Vec::new();
        let mut ncols = 0usize;

        for (idx, line) in contents.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let mut row = Vec::with_capacity(ncols.max(4));
            for token in trimmed.split_whitespace() {
                let value = token.parse::<f64>().map_err(|_| TableError::Parse {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    token: token.to_string(),
                })?;
                row.push(value);
            }

            if disk_rows.is_empty() {
                ncols = row.len();
            } else if row.len() != ncols {
                return Err(TableError::Ragged {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    cols: row.len(),
                    expected: ncols,
                });
            }
            disk_rows.push(row);
        }

        if disk_rows.is_empty() {
            return Err(TableError::Empty {
                path: path.to_path_buf(),
            });
        }

        debug!(
            "loaded {}x{} table from {}",
            disk_rows.len(),
            ncols,
            path.display()
        );

        // Store columns as rows; transpose() recovers the on-disk layout.
        let nrows_disk = disk_rows.len();
        let mat = (0..ncols)
            .map(|j| (0..nrows_disk).map(|i| disk_rows[i][j]).collect())
            .collect();
        Ok(Self { mat })
    }

    /// Number of rows in the current orientation.
    pub fn nrows(&self) -> usize {
        self.mat.len()
    }

    /// Number of columns in the current orientation.
    pub fn ncols(&self) -> usize {
        self.mat.first().map_or(0, Vec::len)
    }

    /// One row of the table.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.mat[i]
    }

    /// All rows in the current orientation.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.mat
    }

    /// Swap rows and columns in place.
    pub fn transpose(&mut self) {
        let nrows = self.nrows();
        let ncols = self.ncols();
        self.mat = (0..ncols)
            .map(|j| (0..nrows).map(|i| self.mat[i][j]).collect())
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TableError;
    use std::io::Write;

    fn write_temp(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.1D");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn read_stores_columns_as_rows() {
        let (_dir, path) = write_temp("1 2 3 4\n5 6 7 8\n9 10 11 12\n");
        let table = Table::read(&path).unwrap();
        // 3 disk lines x 4 columns -> 4 rows x 3 columns in memory
        assert_eq!(table.nrows(), 4);
        assert_eq!(table.ncols(), 3);
        assert_eq!(table.row(0), &[1.0, 5.0, 9.0]);
        assert_eq!(table.row(3), &[4.0, 8.0, 12.0]);
    }

    #[test]
    fn transpose_recovers_disk_layout() {
        let (_dir, path) = write_temp("1 2 3 4\n5 6 7 8\n9 10 11 12\n");
        let mut table = Table::read(&path).unwrap();
        table.transpose();
        assert_eq!(table.nrows(), 3);
        assert_eq!(table.ncols(), 4);
        assert_eq!(table.row(1), &[5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn transpose_is_an_involution() {
        let mut table = Table::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let before = table.clone();
        table.transpose();
        assert_eq!(table.nrows(), 3);
        assert_eq!(table.row(2), &[3.0, 6.0]);
        table.transpose();
        assert_eq!(table, before);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let (_dir, path) = write_temp("# header comment\n\n  # indented comment\n1 2\n3 4\n");
        let table = Table::read(&path).unwrap();
        assert_eq!(table.nrows(), 2);
        assert_eq!(table.ncols(), 2);
        assert_eq!(table.row(0), &[1.0, 3.0]);
    }

    #[test]
    fn ragged_table_is_rejected() {
        let (_dir, path) = write_temp("1 2 3\n4 5\n");
        match Table::read(&path) {
            Err(TableError::Ragged {
                line,
                cols,
                expected,
                ..
            }) => {
                assert_eq!(line, 2);
                assert_eq!(cols, 2);
                assert_eq!(expected, 3);
            }
            other => panic!("expected Ragged error, got {other:?}"),
        }
    }

    #[test]
    fn bad_token_is_rejected() {
        let (_dir, path) = write_temp("1 2\n3 oops\n");
        match Table::read(&path) {
            Err(TableError::Parse { line, token, .. }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_rejected() {
        let (_dir, path) = write_temp("# only a comment\n\n");
        assert!(matches!(Table::read(&path), Err(TableError::Empty { .. })));
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_file.1D");
        assert!(matches!(Table::read(&path), Err(TableError::Io { .. })));
    }
}
