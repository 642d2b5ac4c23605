use crate::metrics::squared_error;
use crate::{Dataset, Error, Network, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainConfig {
    pub max_epochs: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self { max_epochs: 10 }
    }
}

impl TrainConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_epochs == 0 {
            return Err(Error::InvalidConfig("max_epochs must be > 0".to_owned()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochReport {
    pub epoch: usize,
    /// Classification accuracy on the evaluation set after this epoch.
    pub accuracy: f32,
    /// Mean squared error over the training set, measured before each update.
    pub train_error: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainReport {
    pub epochs: Vec<EpochReport>,
}

impl TrainReport {
    pub fn accuracies(&self) -> Vec<f32> {
        self.epochs.iter().map(|e| e.accuracy).collect()
    }

    pub fn final_accuracy(&self) -> Option<f32> {
        self.epochs.last().map(|e| e.accuracy)
    }
}

impl Network {
    /// Online training for `max_epochs` epochs, evaluating on `eval` after each.
    ///
    /// Returns the evaluation accuracy of every epoch.
    pub fn train_on_dataset(
        &mut self,
        train: &Dataset,
        eval: &Dataset,
        max_epochs: usize,
    ) -> Result<Vec<f32>> {
        let report = self.fit(train, eval, &TrainConfig { max_epochs })?;
        Ok(report.accuracies())
    }

    /// Train on `train` one instance at a time, in order, with a forward pass,
    /// backward pass and weight update per instance.
    ///
    /// Shapes are validated before any weight is touched.
    ///
    /// Logs a `trace` event per training instance and an `info` event per epoch.
    /// The per-instance event is filtered out cheaply unless `trace` is enabled.
    pub fn fit(
        &mut self,
        train: &Dataset,
        eval: &Dataset,
        cfg: &TrainConfig,
    ) -> Result<TrainReport> {
        cfg.validate()?;
        if train.is_empty() {
            return Err(Error::InvalidData("train dataset must not be empty".to_owned()));
        }
        if eval.is_empty() {
            return Err(Error::InvalidData("eval dataset must not be empty".to_owned()));
        }
        self.check_dataset(train)?;
        self.check_dataset(eval)?;

        let mut report = TrainReport {
            epochs: Vec::with_capacity(cfg.max_epochs),
        };

        for epoch in 0..cfg.max_epochs {
            let mut total_error = 0.0_f32;
            for (index, instance) in train.iter().enumerate() {
                tracing::trace!(epoch, index, "training on instance");
                let outputs = self.compute_activations(instance.features);
                total_error += squared_error(outputs, instance.targets);
                self.compute_deltas(instance.targets);
                self.apply_weight_deltas();
            }

            let accuracy = self.classification_accuracy(eval)?;
            let train_error = total_error / train.len() as f32;
            tracing::info!(epoch, accuracy, train_error, "epoch complete");

            report.epochs.push(EpochReport {
                epoch,
                accuracy,
                train_error,
            });
        }

        Ok(report)
    }
}
