use crate::math::ops::MatrixOps;
use crate::math::vector::Vector;

/// Row-major dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>,
}

impl Matrix {
    /// Builds a matrix from row data. All rows must have the same length.
    pub fn from_data(data: Vec<Vec<f64>>) -> Matrix {
        let cols = data.first().map_or(0, |row| row.len());
        assert!(
            data.iter().all(|row| row.len() == cols),
            "Matrix rows are of unequal length"
        );
        Matrix {
            rows: data.len(),
            cols,
            data,
        }
    }

    fn assert_same_shape(&self, rhs: &Matrix) {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            panic!("Matrices are of incorrect sizes")
        }
    }
}

impl MatrixOps for Matrix {
    type Vector = Vector;

    fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix {
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows],
        }
    }

    fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Matrix
    where
        F: FnMut(usize, usize) -> f64,
    {
        let data = (0..rows)
            .map(|i| (0..cols).map(|j| f(i, j)).collect())
            .collect();
        Matrix { rows, cols, data }
    }

    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row][col]
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row][col] = value;
    }

    fn mul_vec(&self, v: &Vector) -> Vector {
        if self.cols != v.data.len() {
            panic!("Matrices are of incorrect sizes")
        }

        let data = self
            .data
            .iter()
            .map(|row| row.iter().zip(&v.data).map(|(w, x)| w * x).sum())
            .collect();
        Vector { data }
    }

    fn transpose(&self) -> Matrix {
        let mut res = Matrix::zeros(self.cols, self.rows);

        for i in 0..res.rows {
            for j in 0..res.cols {
                res.data[i][j] = self.data[j][i];
            }
        }

        res
    }

    fn outer(col: &Vector, row: &Vector) -> Matrix {
        let data = col
            .data
            .iter()
            .map(|&c| row.data.iter().map(|&r| c * r).collect())
            .collect();
        Matrix {
            rows: col.data.len(),
            cols: row.data.len(),
            data,
        }
    }

    fn add_assign(&mut self, rhs: &Matrix) {
        self.assert_same_shape(rhs);
        for (row, rhs_row) in self.data.iter_mut().zip(&rhs.data) {
            for (a, b) in row.iter_mut().zip(rhs_row) {
                *a += b;
            }
        }
    }

    fn scaled_sub_assign(&mut self, k: f64, rhs: &Matrix) {
        self.assert_same_shape(rhs);
        for (row, rhs_row) in self.data.iter_mut().zip(&rhs.data) {
            for (a, b) in row.iter_mut().zip(rhs_row) {
                *a -= k * b;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::ops::VectorOps;

    #[test]
    fn mul_vec_computes_row_dot_products() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let v = Vector::new(vec![1.0, 0.0, -1.0]);
        assert_eq!(m.mul_vec(&v).data, vec![-2.0, -2.0]);
    }

    #[test]
    fn transpose_swaps_shape() {
        let m = Matrix::from_data(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        let t = m.transpose();
        assert_eq!((t.rows, t.cols), (3, 2));
        assert_eq!(t.data[2], vec![3.0, 6.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn outer_has_column_by_row_shape() {
        let col = Vector::new(vec![1.0, 2.0]);
        let row = Vector::new(vec![3.0, 4.0, 5.0]);
        let m = Matrix::outer(&col, &row);
        assert_eq!((m.rows, m.cols), (2, 3));
        assert_eq!(m.data[1], vec![6.0, 8.0, 10.0]);
    }

    #[test]
    fn scaled_sub_assign_descends() {
        let mut m = Matrix::from_fn(2, 2, |i, j| (i + j) as f64);
        let g = Matrix::from_fn(2, 2, |_, _| 1.0);
        m.scaled_sub_assign(0.25, &g);
        assert_eq!(m.data, vec![vec![-0.25, 0.75], vec![0.75, 1.75]]);
    }

    #[test]
    fn zeros_vector_has_requested_len() {
        assert_eq!(Vector::zeros(4).len(), 4);
    }

    #[test]
    #[should_panic]
    fn add_assign_rejects_mismatched_shapes() {
        let mut a = Matrix::zeros(2, 3);
        a.add_assign(&Matrix::zeros(3, 2));
    }
}
