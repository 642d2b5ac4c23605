use crate::Matrix;
use crate::activation::{sigmoid, sigmoid_derivative};

/// Fully-connected weights from a source layer to a destination layer.
///
/// The weight matrix has shape `(source_len + 1, dest_len)`; the last row holds the
/// bias weights and is driven by the source layer's bias unit, whose activation is
/// always `1.0`. The network owns two of these: input->hidden and hidden->output.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    weights: Matrix,
}

impl Connection {
    #[inline]
    pub fn new(weights: Matrix) -> Self {
        Self { weights }
    }

    /// Number of source activations read, bias unit included.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.weights.rows()
    }

    #[inline]
    pub fn dest_len(&self) -> usize {
        self.weights.cols()
    }

    #[inline]
    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// Forward pass.
    ///
    /// Computes `dest[o] = sigmoid(sum_i W[i][o] * source[i])` with the sum running over
    /// every source row, bias included. Slots of `dest` past `dest_len` (the
    /// destination's own bias unit) are left untouched.
    ///
    /// Shape contract:
    /// - `source.len() == self.source_len()`
    /// - `dest.len() >= self.dest_len()`
    pub fn forward(&self, source: &[f32], dest: &mut [f32]) {
        debug_assert_eq!(source.len(), self.source_len());
        debug_assert!(dest.len() >= self.dest_len());

        for (o, out) in dest[..self.dest_len()].iter_mut().enumerate() {
            let mut net = 0.0_f32;
            for (i, &a) in source.iter().enumerate() {
                net = self.weights.get(i, o).mul_add(a, net);
            }
            *out = sigmoid(net);
        }
    }

    /// Propagates destination deltas back to the source layer.
    ///
    /// Overwrites `source_deltas[j] = (sum_o W[j][o] * dest_deltas[o]) * sigmoid'(source[j])`.
    /// The bias row has no delta, so `source_deltas` is one shorter than `source`.
    ///
    /// Shape contract:
    /// - `dest_deltas.len() == self.dest_len()`
    /// - `source_deltas.len() + 1 == self.source_len()`
    /// - `source.len() == self.source_len()`
    pub fn backprop(&self, dest_deltas: &[f32], source: &[f32], source_deltas: &mut [f32]) {
        debug_assert_eq!(dest_deltas.len(), self.dest_len());
        debug_assert_eq!(source_deltas.len() + 1, self.source_len());
        debug_assert_eq!(source.len(), self.source_len());

        for (j, delta) in source_deltas.iter_mut().enumerate() {
            let mut sum = 0.0_f32;
            for (&w, &d) in self.weights.row(j).iter().zip(dest_deltas) {
                sum = w.mul_add(d, sum);
            }
            *delta = sum * sigmoid_derivative(source[j]);
        }
    }

    /// Online weight update: `W[i][o] += learning_rate * source[i] * dest_deltas[o]`,
    /// bias row included.
    pub fn apply(&mut self, source: &[f32], dest_deltas: &[f32], learning_rate: f32) {
        debug_assert_eq!(source.len(), self.source_len());
        debug_assert_eq!(dest_deltas.len(), self.dest_len());

        for (i, &a) in source.iter().enumerate() {
            let scale = learning_rate * a;
            for (w, &d) in self.weights.row_mut(i).iter_mut().zip(dest_deltas) {
                *w += scale * d;
            }
        }
    }
}
