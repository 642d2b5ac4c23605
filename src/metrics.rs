//! Metrics.
//!
//! Evaluation helpers; none of these take part in backprop.

use crate::{Dataset, Error, Network, Result};

/// Index of the largest value. The first maximum wins and NaN entries are skipped;
/// `None` if there is no non-NaN value.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        match best {
            Some((_, max)) if v > max => best = Some((idx, v)),
            Some(_) => {}
            None => best = Some((idx, v)),
        }
    }
    best.map(|(idx, _)| idx)
}

/// Class encoded by a one-hot target vector.
///
/// Returns the index of the last entry equal to `1.0`, so a vector with several
/// hot entries reports the highest of them. `None` if no entry is hot.
pub fn target_classification(targets: &[f32]) -> Option<usize> {
    targets.iter().rposition(|&t| t == 1.0)
}

/// Sum of squared errors `sum (t - o)^2`.
///
/// Shape contract: `outputs.len() == targets.len()`.
#[inline]
pub fn squared_error(outputs: &[f32], targets: &[f32]) -> f32 {
    debug_assert_eq!(outputs.len(), targets.len());
    outputs
        .iter()
        .zip(targets)
        .map(|(&o, &t)| (t - o) * (t - o))
        .sum()
}

impl Network {
    /// Fraction of `data` whose classification matches its target class.
    ///
    /// Instances whose target has no hot entry, or whose outputs are all NaN, count
    /// as misclassified.
    pub fn classification_accuracy(&mut self, data: &Dataset) -> Result<f32> {
        if data.is_empty() {
            return Err(Error::InvalidData("dataset must not be empty".to_owned()));
        }
        self.check_dataset(data)?;

        let mut correct = 0_usize;
        for instance in data.iter() {
            let predicted = self.classify(instance.features);
            if predicted.is_some() && predicted == target_classification(instance.targets) {
                correct += 1;
            }
        }
        Ok(correct as f32 / data.len() as f32)
    }

    pub(crate) fn check_dataset(&self, data: &Dataset) -> Result<()> {
        if data.input_dim() != self.input_count() {
            return Err(Error::InvalidData(format!(
                "dataset input_dim {} does not match network input_count {}",
                data.input_dim(),
                self.input_count()
            )));
        }
        if data.target_dim() != self.output_count() {
            return Err(Error::InvalidData(format!(
                "dataset target_dim {} does not match network output_count {}",
                data.target_dim(),
                self.output_count()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Matrix;

    #[test]
    fn argmax_prefers_first_maximum() {
        assert_eq!(argmax(&[0.1, 0.9, 0.3]), Some(1));
        assert_eq!(argmax(&[0.7, 0.2, 0.7]), Some(0));
        assert_eq!(argmax(&[0.2, 0.5, 0.5]), Some(1));
        assert_eq!(argmax(&[]), None);
    }

    #[test]
    fn argmax_skips_nan_outputs() {
        assert_eq!(argmax(&[0.5, f32::NAN, 0.3]), Some(0));
        assert_eq!(argmax(&[f32::NAN, 0.2, 0.4]), Some(2));
        assert_eq!(argmax(&[f32::NAN, f32::NAN]), None);
    }

    #[test]
    fn target_classification_takes_last_hot_entry() {
        assert_eq!(target_classification(&[0.0, 0.0, 1.0, 0.0]), Some(2));
        assert_eq!(target_classification(&[1.0, 0.0, 1.0]), Some(2));
        assert_eq!(target_classification(&[0.0, 0.5, 0.0]), None);
    }

    #[test]
    fn squared_error_sums_componentwise() {
        let e = squared_error(&[0.5, 0.25], &[1.0, 0.0]);
        assert!((e - (0.25 + 0.0625)).abs() < 1e-6);
    }

    #[test]
    fn accuracy_counts_matching_classes() {
        // Zero weights: every output is 0.5, so class 0 is always predicted.
        let mut net = Network::from_weights(Matrix::zeros(3, 2), Matrix::zeros(3, 2), 1.0).unwrap();
        let data = Dataset::from_labels(
            &[vec![0.0, 1.0], vec![1.0, 0.0], vec![0.5, 0.5], vec![1.0, 1.0]],
            &[0, 1, 0, 1],
            2,
        )
        .unwrap();
        assert_eq!(net.classification_accuracy(&data).unwrap(), 0.5);
    }

    #[test]
    fn accuracy_rejects_mismatched_dataset() {
        let mut net = Network::from_weights(Matrix::zeros(3, 2), Matrix::zeros(3, 2), 1.0).unwrap();
        let data = Dataset::from_labels(&[vec![0.0, 1.0, 2.0]], &[0], 2).unwrap();
        assert!(net.classification_accuracy(&data).is_err());
    }
}
