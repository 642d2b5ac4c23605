use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::activation::sigmoid_derivative;
use crate::config::validate_learning_rate;
use crate::metrics::argmax;
use crate::{Connection, Error, Matrix, NetworkConfig, Result};

pub(crate) const INPUT: usize = 0;
pub(crate) const HIDDEN: usize = 1;
pub(crate) const OUTPUT: usize = 2;

/// Activation and error-signal buffers of one layer.
///
/// Input and hidden layers carry a trailing bias unit pinned to `1.0`. The input
/// layer has no deltas and the bias unit never gets one.
#[derive(Debug, Clone)]
struct LayerState {
    activations: Vec<f32>,
    deltas: Vec<f32>,
}

impl LayerState {
    fn with_bias(units: usize, has_deltas: bool) -> Self {
        let mut activations = vec![0.0; units + 1];
        activations[units] = 1.0;
        Self {
            activations,
            deltas: vec![0.0; if has_deltas { units } else { 0 }],
        }
    }

    fn output(units: usize) -> Self {
        Self {
            activations: vec![0.0; units],
            deltas: vec![0.0; units],
        }
    }
}

/// A fully-connected network with exactly one hidden layer of sigmoid units,
/// trained online by backpropagation.
///
/// All buffers are allocated once at construction and overwritten in place by
/// every forward/backward pass, so the per-instance hot path never allocates.
///
/// The hot-path methods panic on length mismatches; those are caller errors.
#[derive(Debug, Clone)]
pub struct Network {
    /// `connections[k]` feeds `layers[k]` into `layers[k + 1]`.
    connections: [Connection; 2],
    layers: [LayerState; 3],
    learning_rate: f32,
}

impl Network {
    /// Network with the given layer sizes, default learning rate and an
    /// entropy-seeded weight initialization.
    pub fn new(input_count: usize, hidden_count: usize, output_count: usize) -> Result<Self> {
        Self::from_config(&NetworkConfig::with_sizes(
            input_count,
            hidden_count,
            output_count,
        ))
    }

    pub fn from_config(config: &NetworkConfig) -> Result<Self> {
        Self::new_with_rng(config, &mut rand::thread_rng())
    }

    /// Reproducible initialization.
    pub fn new_with_seed(config: &NetworkConfig, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(config, &mut rng)
    }

    pub fn new_with_rng<R: Rng + ?Sized>(config: &NetworkConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let first = Matrix::random_uniform(
            config.input_count + 1,
            config.hidden_count,
            config.init_range,
            rng,
        );
        let second = Matrix::random_uniform(
            config.hidden_count + 1,
            config.output_count,
            config.init_range,
            rng,
        );
        Self::from_weights(first, second, config.learning_rate)
    }

    /// Network with explicit weights.
    ///
    /// `first` must be `(input_count + 1) x hidden_count` and `second`
    /// `(hidden_count + 1) x output_count`; the last row of each is the bias row.
    pub fn from_weights(first: Matrix, second: Matrix, learning_rate: f32) -> Result<Self> {
        validate_learning_rate(learning_rate)?;
        if first.rows() < 2 || first.cols() == 0 || second.cols() == 0 {
            return Err(Error::InvalidShape(format!(
                "weights {}x{} and {}x{} leave an empty layer",
                first.rows(),
                first.cols(),
                second.rows(),
                second.cols()
            )));
        }
        if second.rows() != first.cols() + 1 {
            return Err(Error::InvalidShape(format!(
                "second weights have {} rows, expected hidden_count + 1 = {}",
                second.rows(),
                first.cols() + 1
            )));
        }

        let input_count = first.rows() - 1;
        let hidden_count = first.cols();
        let output_count = second.cols();
        tracing::debug!(
            input_count,
            hidden_count,
            output_count,
            learning_rate,
            "network initialized"
        );

        Ok(Self {
            connections: [Connection::new(first), Connection::new(second)],
            layers: [
                LayerState::with_bias(input_count, false),
                LayerState::with_bias(hidden_count, true),
                LayerState::output(output_count),
            ],
            learning_rate,
        })
    }

    #[inline]
    pub fn input_count(&self) -> usize {
        self.layers[INPUT].activations.len() - 1
    }

    #[inline]
    pub fn hidden_count(&self) -> usize {
        self.layers[HIDDEN].activations.len() - 1
    }

    #[inline]
    pub fn output_count(&self) -> usize {
        self.layers[OUTPUT].activations.len()
    }

    #[inline]
    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    /// Input->hidden weights, shape `(input_count + 1) x hidden_count`.
    #[inline]
    pub fn first_weights(&self) -> &Matrix {
        self.connections[0].weights()
    }

    /// Hidden->output weights, shape `(hidden_count + 1) x output_count`.
    #[inline]
    pub fn second_weights(&self) -> &Matrix {
        self.connections[1].weights()
    }

    /// Input activations of the last forward pass, bias unit last.
    #[inline]
    pub fn input_activations(&self) -> &[f32] {
        &self.layers[INPUT].activations
    }

    /// Hidden activations of the last forward pass, bias unit last.
    #[inline]
    pub fn hidden_activations(&self) -> &[f32] {
        &self.layers[HIDDEN].activations
    }

    #[inline]
    pub fn output_activations(&self) -> &[f32] {
        &self.layers[OUTPUT].activations
    }

    #[inline]
    pub fn hidden_deltas(&self) -> &[f32] {
        &self.layers[HIDDEN].deltas
    }

    #[inline]
    pub fn output_deltas(&self) -> &[f32] {
        &self.layers[OUTPUT].deltas
    }

    /// Forward pass for one feature vector.
    ///
    /// Overwrites the input, hidden and output activations; weights are only read.
    /// Returns the output activations.
    ///
    /// Panics if `features.len() != self.input_count()`.
    pub fn compute_activations(&mut self, features: &[f32]) -> &[f32] {
        let input_count = self.input_count();
        assert_eq!(
            features.len(),
            input_count,
            "features len {} does not match network input_count {input_count}",
            features.len(),
        );

        self.layers[INPUT].activations[..input_count].copy_from_slice(features);
        for (k, connection) in self.connections.iter().enumerate() {
            let (left, right) = self.layers.split_at_mut(k + 1);
            connection.forward(&left[k].activations, &mut right[0].activations);
        }

        &self.layers[OUTPUT].activations
    }

    /// Backward pass for the instance of the most recent forward pass.
    ///
    /// Overwrites output and hidden deltas.
    ///
    /// Panics if `targets.len() != self.output_count()`.
    pub fn compute_deltas(&mut self, targets: &[f32]) {
        assert_eq!(
            targets.len(),
            self.output_count(),
            "targets len {} does not match network output_count {}",
            targets.len(),
            self.output_count()
        );

        let LayerState {
            activations,
            deltas,
        } = &mut self.layers[OUTPUT];
        for ((delta, &a), &t) in deltas.iter_mut().zip(activations.iter()).zip(targets) {
            *delta = (t - a) * sigmoid_derivative(a);
        }

        // The input layer has no deltas, so stop at connection 1.
        for k in (1..self.connections.len()).rev() {
            let (left, right) = self.layers.split_at_mut(k + 1);
            let LayerState {
                activations,
                deltas,
            } = &mut left[k];
            self.connections[k].backprop(&right[0].deltas, activations, deltas);
        }
    }

    /// Applies one online update from the current activations and deltas.
    pub fn apply_weight_deltas(&mut self) {
        let learning_rate = self.learning_rate;
        for (k, connection) in self.connections.iter_mut().enumerate() {
            connection.apply(
                &self.layers[k].activations,
                &self.layers[k + 1].deltas,
                learning_rate,
            );
        }
    }

    /// Forward pass, backward pass and weight update for a single instance.
    pub fn train_on_instance(&mut self, features: &[f32], targets: &[f32]) {
        self.compute_activations(features);
        self.compute_deltas(targets);
        self.apply_weight_deltas();
    }

    /// Index of the most active output unit. Ties go to the lowest index.
    ///
    /// NaN outputs (diverged weights) are skipped; `None` if every output is NaN.
    pub fn classify(&mut self, features: &[f32]) -> Option<usize> {
        let outputs = self.compute_activations(features);
        argmax(outputs)
    }
}
