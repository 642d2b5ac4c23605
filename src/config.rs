use crate::{Error, Result};

/// Architecture and hyperparameters of a [`crate::Network`].
///
/// The default is the handwritten-digit setup: 28x28 pixel inputs, 200 hidden
/// units, 10 classes, learning rate `1.0`, weights initialized in `[-0.1, 0.1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NetworkConfig {
    pub input_count: usize,
    pub hidden_count: usize,
    pub output_count: usize,
    /// Fixed for the lifetime of the network.
    pub learning_rate: f32,
    /// Initial weights are drawn uniformly from `[-init_range, init_range]`.
    pub init_range: f32,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            input_count: 784,
            hidden_count: 200,
            output_count: 10,
            learning_rate: 1.0,
            init_range: 0.1,
        }
    }
}

impl NetworkConfig {
    /// Default hyperparameters with the given layer sizes.
    pub fn with_sizes(input_count: usize, hidden_count: usize, output_count: usize) -> Self {
        Self {
            input_count,
            hidden_count,
            output_count,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.input_count == 0 || self.hidden_count == 0 || self.output_count == 0 {
            return Err(Error::InvalidConfig(format!(
                "all layer sizes must be > 0, got {}/{}/{}",
                self.input_count, self.hidden_count, self.output_count
            )));
        }
        validate_learning_rate(self.learning_rate)?;
        // The sampled interval has width `2 * init_range`, which must stay finite.
        if !(self.init_range >= 0.0 && (2.0 * self.init_range).is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "init_range must be >= 0 with a finite interval width, got {}",
                self.init_range
            )));
        }
        Ok(())
    }
}

pub(crate) fn validate_learning_rate(learning_rate: f32) -> Result<()> {
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(Error::InvalidConfig(format!(
            "learning_rate must be finite and > 0, got {learning_rate}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_digit_architecture() {
        let cfg = NetworkConfig::default();
        assert_eq!(
            (cfg.input_count, cfg.hidden_count, cfg.output_count),
            (784, 200, 10)
        );
        assert_eq!(cfg.learning_rate, 1.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_values() {
        assert!(NetworkConfig::with_sizes(0, 2, 2).validate().is_err());
        assert!(NetworkConfig::with_sizes(2, 0, 2).validate().is_err());

        let mut cfg = NetworkConfig::with_sizes(2, 2, 2);
        cfg.learning_rate = 0.0;
        assert!(cfg.validate().is_err());
        cfg.learning_rate = f32::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = NetworkConfig::with_sizes(2, 2, 2);
        cfg.init_range = -0.1;
        assert!(cfg.validate().is_err());
        cfg.init_range = f32::INFINITY;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn init_range_with_overflowing_width_is_rejected() {
        let mut cfg = NetworkConfig::with_sizes(2, 2, 2);
        cfg.init_range = f32::MAX;
        assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
        assert!(matches!(
            crate::Network::new_with_seed(&cfg, 0),
            Err(Error::InvalidConfig(_))
        ));

        cfg.init_range = f32::MAX / 4.0;
        assert!(cfg.validate().is_ok());
    }
}
