//! A single-hidden-layer sigmoid network trained by online backpropagation.
//!
//! `backprop-net` classifies fixed-size feature vectors (e.g. 28x28 handwritten-digit
//! images) into a small number of classes. Every training instance runs a forward
//! pass, a backward pass and an immediate weight update; there is no batching.
//!
//! # Layout
//!
//! - Scalars are `f32`; the sigmoid is evaluated in `f64` and narrowed.
//! - Weights are stored as [`Matrix`] with shape `(source_units + 1, dest_units)`.
//!   The last row holds bias weights, driven by a bias unit whose activation is
//!   always `1.0`.
//! - The network owns all activation and delta buffers. They are allocated once
//!   and overwritten in place, so the per-instance hot path never allocates.
//!
//! # Panics vs `Result`
//!
//! - Hot path (panics on misuse): [`Network::compute_activations`],
//!   [`Network::compute_deltas`], [`Network::apply_weight_deltas`],
//!   [`Network::train_on_instance`], [`Network::classify`].
//!   Length mismatches are programmer error and panic via `assert_eq!`.
//! - Boundary APIs (validated): constructors, [`Dataset`] builders,
//!   [`Network::train_on_dataset`], [`Network::fit`],
//!   [`Network::classification_accuracy`]. These return [`Result`].
//!
//! # Logging
//!
//! Training emits `tracing` events: `info` per epoch, `debug` at construction and
//! `trace` per instance. Install a subscriber to see them.
//!
//! # Quick start
//!
//! ```rust
//! use backprop_net::{Dataset, Network, NetworkConfig};
//!
//! # fn main() -> backprop_net::Result<()> {
//! let xs = vec![
//!     vec![0.0, 0.1],
//!     vec![0.1, 0.0],
//!     vec![0.9, 1.0],
//!     vec![1.0, 0.9],
//! ];
//! let data = Dataset::from_labels(&xs, &[0, 0, 1, 1], 2)?;
//!
//! let mut net = Network::new_with_seed(&NetworkConfig::with_sizes(2, 4, 2), 0)?;
//! let accuracies = net.train_on_dataset(&data, &data, 50)?;
//! assert_eq!(accuracies.len(), 50);
//!
//! let class = net.classify(&[0.95, 0.95]);
//! assert!(class.is_some_and(|c| c < 2));
//! # Ok(())
//! # }
//! ```
//!
//! # Driving a single step
//!
//! ```rust
//! use backprop_net::{Network, NetworkConfig};
//!
//! # fn main() -> backprop_net::Result<()> {
//! let mut net = Network::new_with_seed(&NetworkConfig::with_sizes(3, 5, 2), 0)?;
//! let x = [0.1_f32, 0.7, 0.3];
//! let t = [0.0_f32, 1.0];
//!
//! net.compute_activations(&x);
//! net.compute_deltas(&t);
//! net.apply_weight_deltas();
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod config;
pub mod connection;
pub mod data;
pub mod error;
pub mod matrix;
pub mod metrics;
pub mod network;
pub mod train;

pub use config::NetworkConfig;
pub use connection::Connection;
pub use data::{Dataset, Instance, one_hot};
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use metrics::{argmax, squared_error, target_classification};
pub use network::Network;
pub use train::{EpochReport, TrainConfig, TrainReport};
