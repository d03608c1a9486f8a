use crate::numeric::error::NumericError;
use serde::{Deserialize, Serialize};

/// Axis of a row-major 2-D grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Down the columns
    First,
    /// Along each row
    #[default]
    Last,
}

/// Cell edges for a run of cell centres.
///
/// Interior edges are midpoints between neighbours; the outer two are
/// extrapolated by half the neighbouring spacing. Ascending and descending
/// centres both work, the result keeps the input's direction.
pub fn edges(centres: &[f64]) -> Result<Vec<f64>, NumericError> {
    let n = centres.len();
    if n < 2 {
        return Err(NumericError::TooFewValues(n));
    }

    let mut result = Vec::with_capacity(n + 1);
    result.push(centres[0] - (centres[1] - centres[0]) / 2.0);
    result.extend(centres.windows(2).map(|pair| (pair[0] + pair[1]) / 2.0));
    result.push(centres[n - 1] + (centres[n - 1] - centres[n - 2]) / 2.0);
    Ok(result)
}

/// Edges along one axis of a rectangular grid of rows
pub fn edges_2d(rows: &[Vec<f64>], axis: Axis) -> Result<Vec<Vec<f64>>, NumericError> {
    let width = rows.first().map_or(0, Vec::len);
    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(NumericError::Ragged {
                row,
                found: values.len(),
                expected: width,
            });
        }
    }

    match axis {
        Axis::Last => rows.iter().map(|row| edges(row)).collect(),
        Axis::First => {
            if rows.len() < 2 {
                return Err(NumericError::TooFewValues(rows.len()));
            }
            let columns = (0..width)
                .map(|col| {
                    let column: Vec<f64> = rows.iter().map(|row| row[col]).collect();
                    edges(&column)
                })
                .collect::<Result<Vec<_>, _>>()?;

            // Back to rows: one more row than the input
            Ok((0..rows.len() + 1)
                .map(|i| columns.iter().map(|column| column[i]).collect())
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_centres() {
        assert_eq!(edges(&[1.0, 2.0, 3.0]).unwrap(), vec![0.5, 1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_descending_centres() {
        assert_eq!(edges(&[3.0, 2.0, 1.0]).unwrap(), vec![3.5, 2.5, 1.5, 0.5]);
    }

    #[test]
    fn test_uneven_centres() {
        assert_eq!(edges(&[0.0, 1.0, 4.0]).unwrap(), vec![-0.5, 0.5, 2.5, 5.5]);
    }

    #[test]
    fn test_too_few_values() {
        assert_eq!(edges(&[1.0]), Err(NumericError::TooFewValues(1)));
        assert_eq!(edges(&[]), Err(NumericError::TooFewValues(0)));
    }

    #[test]
    fn test_grid_along_rows() {
        let grid = vec![vec![0.0, 2.0], vec![10.0, 20.0]];
        let result = edges_2d(&grid, Axis::Last).unwrap();
        assert_eq!(result, vec![vec![-1.0, 1.0, 3.0], vec![5.0, 15.0, 25.0]]);
    }

    #[test]
    fn test_grid_along_columns() {
        let grid = vec![vec![0.0, 10.0], vec![2.0, 20.0]];
        let result = edges_2d(&grid, Axis::First).unwrap();
        assert_eq!(
            result,
            vec![vec![-1.0, 5.0], vec![1.0, 15.0], vec![3.0, 25.0]]
        );
    }

    #[test]
    fn test_ragged_grid() {
        let grid = vec![vec![0.0, 1.0], vec![2.0]];
        assert_eq!(
            edges_2d(&grid, Axis::Last),
            Err(NumericError::Ragged {
                row: 1,
                found: 1,
                expected: 2
            })
        );
    }
}
