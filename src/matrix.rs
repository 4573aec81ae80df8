//! Dense matrices over Z_q with arbitrary-precision entries.
//!
//! Every algebraic operation reduces its result to `[0, q)` and returns a
//! freshly allocated matrix; operands are never mutated or aliased. Row-level
//! loops of multiply, scalar multiply, add, subtract and negate run on the
//! rayon thread pool unless parallelism has been switched off for the
//! receiving instance. All tasks write disjoint output cells and read only
//! immutable inputs, so results are bit-identical to a sequential run.

use num_bigint::{BigInt, RandBigInt};
use num_traits::{One, Zero};
use rand::Rng;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::modular::reduce;

/// Dense `rows x cols` matrix over Z_q, row-major.
#[derive(Clone, Debug)]
pub struct Matrix {
    data: Vec<BigInt>,
    rows: usize,
    cols: usize,
    concurrent: bool,
}

impl PartialEq for Matrix {
    /// Shape and entries only; the parallelism switch is not an observable
    /// value.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.data == other.data
    }
}

impl Eq for Matrix {}

impl Matrix {
    /// All-zero `rows x cols` matrix. Panics when either dimension is zero.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| BigInt::zero())
    }

    /// Build a matrix by evaluating `f(row, col)` for every entry in row-major
    /// order. Panics when either dimension is zero.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> BigInt,
    {
        assert!(rows > 0 && cols > 0, "matrix shape must be at least 1x1");
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Matrix {
            data,
            rows,
            cols,
            concurrent: true,
        }
    }

    /// Build from explicit rows; rejects empty or ragged input.
    pub fn from_rows(rows: Vec<Vec<BigInt>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or(0);
        if nrows == 0 || ncols == 0 {
            return Err(Error::shape("from_rows", (nrows, ncols), (nrows, ncols)));
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != ncols) {
            return Err(Error::shape("from_rows", (nrows, ncols), (1, bad.len())));
        }
        let data = rows.into_iter().flatten().collect();
        Ok(Matrix {
            data,
            rows: nrows,
            cols: ncols,
            concurrent: true,
        })
    }

    /// Fill every entry with a uniform draw from `[0, q)`.
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R, q: &BigInt) -> Self {
        let zero = BigInt::zero();
        Self::from_fn(rows, cols, |_, _| rng.gen_bigint_range(&zero, q))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Entry at `(row, col)`. Panics when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> &BigInt {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) outside {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }

    /// Borrow row `i` as a slice.
    pub fn row(&self, i: usize) -> &[BigInt] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Entries of a single-row or single-column matrix, in order.
    pub fn as_vector(&self) -> Result<Vec<BigInt>> {
        if self.rows != 1 && self.cols != 1 {
            return Err(Error::shape(
                "as_vector",
                self.shape(),
                (1, self.rows * self.cols),
            ));
        }
        Ok(self.data.clone())
    }

    /// One-way switch: run this instance's row loops sequentially from now
    /// on. Output values are unaffected; set before sharing across threads.
    pub fn disable_parallelism(&mut self) {
        self.concurrent = false;
    }

    pub fn is_parallel(&self) -> bool {
        self.concurrent
    }

    /// Compute output rows independently, on the rayon pool when enabled.
    fn map_rows<F>(&self, f: F) -> Vec<BigInt>
    where
        F: Fn(usize) -> Vec<BigInt> + Send + Sync,
    {
        if self.concurrent {
            (0..self.rows).into_par_iter().flat_map_iter(f).collect()
        } else {
            (0..self.rows).flat_map(f).collect()
        }
    }

    fn map_entries<F>(&self, f: F) -> Matrix
    where
        F: Fn(&BigInt) -> BigInt + Send + Sync,
    {
        let data = self.map_rows(|i| self.row(i).iter().map(&f).collect());
        Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
            concurrent: self.concurrent,
        }
    }

    fn zip_entries<F>(&self, other: &Matrix, op: &'static str, f: F) -> Result<Matrix>
    where
        F: Fn(&BigInt, &BigInt) -> BigInt + Send + Sync,
    {
        if self.shape() != other.shape() {
            return Err(Error::shape(op, self.shape(), other.shape()));
        }
        let data = self.map_rows(|i| {
            self.row(i)
                .iter()
                .zip(other.row(i))
                .map(|(a, b)| f(a, b))
                .collect()
        });
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
            concurrent: self.concurrent,
        })
    }

    /// `self · other mod q`. Requires `self.cols == other.rows`.
    ///
    /// Each inner-product sum is accumulated in full and reduced once per
    /// output cell.
    pub fn multiply(&self, other: &Matrix, q: &BigInt) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(Error::shape("multiply", self.shape(), other.shape()));
        }
        let data = self.map_rows(|i| {
            let lhs = self.row(i);
            (0..other.cols)
                .map(|j| {
                    let mut acc = BigInt::zero();
                    for (k, a) in lhs.iter().enumerate() {
                        acc += a * &other.data[k * other.cols + j];
                    }
                    reduce(&acc, q)
                })
                .collect()
        });
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: other.cols,
            concurrent: self.concurrent,
        })
    }

    /// Entrywise `k · x mod q`.
    pub fn scalar_multiply(&self, k: &BigInt, q: &BigInt) -> Matrix {
        self.map_entries(|x| reduce(&(k * x), q))
    }

    /// Entrywise modular sum. Requires identical shapes.
    pub fn add(&self, other: &Matrix, q: &BigInt) -> Result<Matrix> {
        self.zip_entries(other, "add", |a, b| reduce(&(a + b), q))
    }

    /// Entrywise modular difference. Requires identical shapes; mathematical
    /// mod keeps results in `[0, q)`.
    pub fn subtract(&self, other: &Matrix, q: &BigInt) -> Result<Matrix> {
        self.zip_entries(other, "subtract", |a, b| reduce(&(a - b), q))
    }

    /// Entrywise `(-x) mod q`.
    pub fn negate(&self, q: &BigInt) -> Matrix {
        self.map_entries(|x| reduce(&(-x), q))
    }

    /// `(i, j) -> (j, i)`. A pure permutation, no reduction.
    pub fn transpose(&self) -> Matrix {
        let mut out = Self::from_fn(self.cols, self.rows, |i, j| self.get(j, i).clone());
        out.concurrent = self.concurrent;
        out
    }

    /// New `(rows+1) x cols` matrix with `v` appended as the last row.
    pub fn add_row(&self, v: &[BigInt]) -> Result<Matrix> {
        if v.len() != self.cols {
            return Err(Error::shape("add_row", self.shape(), (1, v.len())));
        }
        let mut data = self.data.clone();
        data.extend_from_slice(v);
        Ok(Matrix {
            data,
            rows: self.rows + 1,
            cols: self.cols,
            concurrent: self.concurrent,
        })
    }

    /// New `rows x (cols+1)` matrix with `v` appended as the last column.
    pub fn add_column(&self, v: &[BigInt]) -> Result<Matrix> {
        if v.len() != self.rows {
            return Err(Error::shape("add_column", self.shape(), (v.len(), 1)));
        }
        let mut data = Vec::with_capacity(self.rows * (self.cols + 1));
        for i in 0..self.rows {
            data.extend_from_slice(self.row(i));
            data.push(v[i].clone());
        }
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols + 1,
            concurrent: self.concurrent,
        })
    }

    /// Bits of a non-negative `x`, lsb first, as an `ell x 1` column.
    ///
    /// For `x < 2^ell` the weighted sum of the bits reconstructs `x`.
    pub fn decompose(x: &BigInt, ell: usize) -> Matrix {
        Self::from_fn(ell, 1, |i, _| (x >> i) & BigInt::one())
    }
}
