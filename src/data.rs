//! Contiguous dataset helpers.
//!
//! Training reads instances as slices to avoid per-step allocations. `Dataset`
//! provides validated, row-major storage for feature/target matrices.

use crate::{Error, Result};

/// One labelled example: a feature vector and its one-hot target vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instance<'a> {
    pub features: &'a [f32],
    pub targets: &'a [f32],
}

/// A supervised dataset of features (X) and one-hot targets (Y).
///
/// Stored as contiguous buffers with row-major layout:
/// - `features.len() == len * input_dim`
/// - `targets.len() == len * target_dim`
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<f32>,
    targets: Vec<f32>,
    len: usize,
    input_dim: usize,
    target_dim: usize,
}

impl Dataset {
    /// Build a dataset from flat buffers.
    ///
    /// `features` is `(len, input_dim)` and `targets` is `(len, target_dim)`.
    pub fn from_flat(
        features: Vec<f32>,
        targets: Vec<f32>,
        input_dim: usize,
        target_dim: usize,
    ) -> Result<Self> {
        if input_dim == 0 {
            return Err(Error::InvalidData("input_dim must be > 0".to_owned()));
        }
        if target_dim == 0 {
            return Err(Error::InvalidData("target_dim must be > 0".to_owned()));
        }
        if features.len() % input_dim != 0 {
            return Err(Error::InvalidData(format!(
                "features length {} is not divisible by input_dim {input_dim}",
                features.len()
            )));
        }

        let len = features.len() / input_dim;
        if targets.len() != len * target_dim {
            return Err(Error::InvalidData(format!(
                "targets length {} does not match len * target_dim ({len} * {target_dim})",
                targets.len()
            )));
        }

        Ok(Self {
            features,
            targets,
            len,
            input_dim,
            target_dim,
        })
    }

    /// Build a dataset from per-instance rows.
    ///
    /// This is a convenience constructor (it copies into contiguous storage).
    pub fn from_rows(features: &[Vec<f32>], targets: &[Vec<f32>]) -> Result<Self> {
        if features.len() != targets.len() {
            return Err(Error::InvalidData(format!(
                "features/targets length mismatch: {} vs {}",
                features.len(),
                targets.len()
            )));
        }
        if features.is_empty() {
            return Err(Error::InvalidData("dataset must not be empty".to_owned()));
        }

        let input_dim = check_rows("feature", features)?;
        let target_dim = check_rows("target", targets)?;
        Self::from_flat(features.concat(), targets.concat(), input_dim, target_dim)
    }

    /// Build a dataset from class labels, one-hot encoding them over `classes`.
    pub fn from_labels(features: &[Vec<f32>], labels: &[usize], classes: usize) -> Result<Self> {
        if classes == 0 {
            return Err(Error::InvalidData("classes must be > 0".to_owned()));
        }
        if let Some((i, label)) = labels.iter().enumerate().find(|&(_, &l)| l >= classes) {
            return Err(Error::InvalidData(format!(
                "label {label} at row {i} is out of range for {classes} classes"
            )));
        }

        let targets: Vec<Vec<f32>> = labels.iter().map(|&l| one_hot(l, classes)).collect();
        Self::from_rows(features, &targets)
    }

    #[inline]
    /// Returns the number of instances.
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    /// Returns true if there are no instances.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    #[inline]
    pub fn target_dim(&self) -> usize {
        self.target_dim
    }

    #[inline]
    /// Returns the `idx`-th instance.
    ///
    /// Panics if `idx >= len`.
    pub fn instance(&self, idx: usize) -> Instance<'_> {
        let f = idx * self.input_dim;
        let t = idx * self.target_dim;
        Instance {
            features: &self.features[f..f + self.input_dim],
            targets: &self.targets[t..t + self.target_dim],
        }
    }

    /// Instances in storage order.
    pub fn iter(&self) -> impl Iterator<Item = Instance<'_>> + '_ {
        self.features
            .chunks_exact(self.input_dim)
            .zip(self.targets.chunks_exact(self.target_dim))
            .map(|(features, targets)| Instance { features, targets })
    }
}

/// One-hot vector of length `classes` with `class` set to `1.0`.
///
/// Panics if `class >= classes`.
pub fn one_hot(class: usize, classes: usize) -> Vec<f32> {
    let mut v = vec![0.0; classes];
    v[class] = 1.0;
    v
}

fn check_rows(kind: &str, rows: &[Vec<f32>]) -> Result<usize> {
    let dim = rows[0].len();
    if dim == 0 {
        return Err(Error::InvalidData(format!("{kind} rows must not be empty")));
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != dim {
            return Err(Error::InvalidData(format!(
                "{kind} row {i} has len {}, expected {dim}",
                row.len()
            )));
        }
    }
    Ok(dim)
}
