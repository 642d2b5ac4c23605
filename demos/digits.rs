//! Trains a 784-200-10 network on synthetic 28x28 "digit" images.
//!
//! Each class is a fixed random stroke pattern; instances are noisy copies of it.
//! Per-epoch progress is logged at `info` level: `cargo run --release --example digits`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use backprop_net::{Dataset, Network, NetworkConfig, TrainConfig};

const SIDE: usize = 28;
const CLASSES: usize = 10;

fn prototype(rng: &mut StdRng) -> Vec<f32> {
    // A handful of random horizontal and vertical strokes.
    let mut img = vec![0.0_f32; SIDE * SIDE];
    for _ in 0..4 {
        let fixed = rng.gen_range(4..SIDE - 4);
        let start = rng.gen_range(2..SIDE / 2);
        let len = rng.gen_range(6..SIDE / 2);
        let vertical = rng.gen_bool(0.5);
        for step in start..start + len {
            let (row, col) = if vertical { (step, fixed) } else { (fixed, step) };
            img[row * SIDE + col] = 1.0;
        }
    }
    img
}

fn noisy_copies(
    rng: &mut StdRng,
    prototypes: &[Vec<f32>],
    per_class: usize,
) -> backprop_net::Result<Dataset> {
    let mut xs = Vec::with_capacity(prototypes.len() * per_class);
    let mut labels = Vec::with_capacity(prototypes.len() * per_class);
    for _ in 0..per_class {
        for (class, proto) in prototypes.iter().enumerate() {
            let x: Vec<f32> = proto
                .iter()
                .map(|&p| if rng.gen_bool(0.05) { 1.0 - p } else { p })
                .collect();
            xs.push(x);
            labels.push(class);
        }
    }
    Dataset::from_labels(&xs, &labels, CLASSES)
}

fn main() -> backprop_net::Result<()> {
    tracing_subscriber::fmt::init();

    let mut rng = StdRng::seed_from_u64(0);
    let prototypes: Vec<Vec<f32>> = (0..CLASSES).map(|_| prototype(&mut rng)).collect();
    let train = noisy_copies(&mut rng, &prototypes, 30)?;
    let test = noisy_copies(&mut rng, &prototypes, 10)?;

    let mut net = Network::new_with_seed(&NetworkConfig::default(), 0)?;
    let report = net.fit(&train, &test, &TrainConfig::default())?;

    for epoch in &report.epochs {
        println!(
            "epoch {}: accuracy={:.3} train_error={:.4}",
            epoch.epoch, epoch.accuracy, epoch.train_error
        );
    }

    Ok(())
}
