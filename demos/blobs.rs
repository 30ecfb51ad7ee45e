use nudgenet::data::train_test_split;
use nudgenet::{DataInstance, Network, TrainConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() {
    let mut rng = ChaCha8Rng::seed_from_u64(87123401);

    // Two Gaussian-ish blobs around (-1, -1) and (1, 1).
    let mut dataset: Vec<DataInstance> = (0..120)
        .map(|i| {
            let label = i % 2;
            let center = if label == 0 { -1.0 } else { 1.0 };
            let x = center + rng.gen_range(-0.8..0.8);
            let y = center + rng.gen_range(-0.8..0.8);
            DataInstance::new(vec![x, y], label)
        })
        .collect();
    let (train, test) = train_test_split(&mut dataset, 0.6, 87123401);

    let mut network = Network::new(&[2, 3, 2], &mut rng).expect("valid topology");
    println!("{} parameters, {} training / {} testing instances",
             network.parameter_count(), train.len(), test.len());

    let config = TrainConfig::new(50, 0.01);
    let report = network.train(&train, &test, &config, &rng).expect("training failed");

    for stats in &report.history {
        println!("{}: [loss:{:.6}] [accuracy:{:.6}]", stats.iteration, stats.train_loss, stats.test_accuracy);
    }
    println!("stopped: {:?}", report.stop_reason);
}
