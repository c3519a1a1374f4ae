//! Demo: generate two coupled Poisson spike trains and score them.
//!
//! Usage:
//!   cargo run -p mears-synchrony --example synchrony_demo -- [rate_hz] [seconds]
//!
//! Prints close-pair counts, the tiling coefficient across a sweep of
//! windows, and the smoothed overlap covariance across a sweep of lags.

use std::env;

use rand::prelude::*;
use rand::rngs::StdRng;

use mears_neighbours::close_neighbours;
use mears_synchrony::{stoic_lagged, sttc, StoicParams};

/// Homogeneous Poisson train at `rate` Hz over `duration` seconds.
fn poisson_train(rng: &mut StdRng, rate: f64, duration: f64) -> Vec<f64> {
    let mut times = Vec::new();
    let mut t = 0.0;
    loop {
        t -= (1.0 - rng.random::<f64>()).ln() / rate;
        if t >= duration {
            break;
        }
        times.push(t);
    }
    times
}

/// Copy of `base` where each event survives with probability 0.8 and is
/// jittered by a few milliseconds, then merged with independent noise.
fn coupled_copy(rng: &mut StdRng, base: &[f64], duration: f64) -> Vec<f64> {
    let mut times: Vec<f64> = base
        .iter()
        .filter_map(|&t| {
            (rng.random::<f64>() < 0.8).then(|| t + 0.002 * (rng.random::<f64>() - 0.5))
        })
        .collect();
    times.extend(poisson_train(rng, 2.0, duration));
    times.sort_by(|x, y| x.partial_cmp(y).expect("finite times"));
    times
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let rate: f64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(10.0);
    let duration: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(30.0);

    let mut rng = StdRng::seed_from_u64(42);
    let a = poisson_train(&mut rng, rate, duration);
    let b = coupled_copy(&mut rng, &a, duration);
    println!(
        "Generated {} + {} events over {:.0} s at ~{:.0} Hz",
        a.len(),
        b.len(),
        duration,
        rate
    );

    // -- close pairs at a few windows --
    for delta in [0.001, 0.005, 0.025] {
        let mat = close_neighbours(&a, &b, delta).expect("valid trains");
        println!(
            "delta {:>6.3} s: {:>5} close pairs ({} x {} matrix)",
            delta,
            mat.nnz(),
            mat.rows(),
            mat.cols()
        );
    }

    // -- tiling coefficient sweep --
    println!("\nsttc:");
    for delta in [0.001, 0.005, 0.025] {
        let score = sttc(&a, &b, delta).expect("valid trains");
        println!("  delta {:>6.3} s: {:+.4}", delta, score);
    }

    // -- overlap covariance against lag --
    println!("\nstoic against lag:");
    let params = StoicParams::with_sigma(0.005);
    for lag_ms in [-20.0, -5.0, 0.0, 5.0, 20.0] {
        let score = stoic_lagged(&a, &b, &params, lag_ms / 1000.0).expect("valid trains");
        println!("  lag {:>5.0} ms: {:.4}", lag_ms, score);
    }
}
