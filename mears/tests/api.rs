use anyhow::Result;
use rstest::*;

use mears::core::models::SpikeTrain;
use mears::intensity::convolve_gaussian;
use mears::neighbours::{close_neighbours, scan_close_pairs};
use mears::synchrony::{stoic_lagged, stoic_with, sttc, sttc_lagged, StoicParams};

#[fixture]
fn regular_train() -> Vec<f64> {
    // 20 events at 20 Hz
    (0..20).map(|i| i as f64 * 0.05).collect()
}

#[fixture]
fn jittered_train(regular_train: Vec<f64>) -> Vec<f64> {
    // deterministic sub-millisecond jitter, small against the spacing
    regular_train
        .iter()
        .enumerate()
        .map(|(i, t)| t + (i % 3) as f64 * 0.0004 - 0.0004)
        .collect()
}

mod tests {
    use super::*;

    #[rstest]
    fn matrix_and_scan_agree_on_the_pair_count(
        regular_train: Vec<f64>,
        jittered_train: Vec<f64>,
    ) -> Result<()> {
        let mat = close_neighbours(&regular_train, &jittered_train, 0.001)?;

        let mut count = 0usize;
        scan_close_pairs(&regular_train, &jittered_train, 0.001, |_, _, _, _| {
            count += 1;
        })?;

        assert_eq!(mat.nnz(), count);
        assert_eq!(mat.shape(), (20, 20));
        // every event is within a millisecond of its jittered copy
        assert_eq!(count, 20);
        Ok(())
    }

    #[rstest]
    fn sttc_separates_aligned_from_displaced(
        regular_train: Vec<f64>,
        jittered_train: Vec<f64>,
    ) -> Result<()> {
        let aligned = sttc(&regular_train, &jittered_train, 0.005)?;
        assert!(aligned > 0.9, "aligned trains should score high: {aligned}");

        let displaced: Vec<f64> = regular_train.iter().map(|t| t + 0.025).collect();
        let apart = sttc(&regular_train, &displaced, 0.005)?;
        assert!(apart < 0.1, "displaced trains should score low: {apart}");
        Ok(())
    }

    #[rstest]
    fn lagged_variants_accept_the_train_model(regular_train: Vec<f64>) -> Result<()> {
        let a = SpikeTrain::with_unit("ch01", regular_train.clone());
        let displaced = SpikeTrain::with_unit(
            "ch02",
            regular_train.iter().map(|t| t + 0.025).collect::<Vec<_>>(),
        );

        // undoing the displacement recovers the self-similarity score
        let sttc_realigned = sttc_lagged(&a, &displaced, 0.005, -0.025)?;
        assert!((sttc_realigned - 1.0).abs() < 1e-12);

        // adjacent events sit exactly on the scan window here, so allow
        // for their tiny kernel tails flipping in or out
        let params = StoicParams::with_sigma(0.005);
        let stoic_realigned = stoic_lagged(&a, &displaced, &params, -0.025)?;
        assert!((stoic_realigned - 1.0).abs() < 1e-9);
        Ok(())
    }

    #[rstest]
    fn stoic_scores_fall_with_kernel_width(
        regular_train: Vec<f64>,
        jittered_train: Vec<f64>,
    ) -> Result<()> {
        let tolerant = stoic_with(
            &regular_train,
            &jittered_train,
            &StoicParams::with_sigma(0.01),
        )?;
        let strict = stoic_with(
            &regular_train,
            &jittered_train,
            &StoicParams::with_sigma(0.0002),
        )?;

        assert!(tolerant > strict);
        assert!(tolerant <= 1.0 + 1e-12);
        assert!(strict > 0.0);
        Ok(())
    }

    #[rstest]
    fn intensity_mass_matches_the_event_count(regular_train: Vec<f64>) {
        let rate = convolve_gaussian(&regular_train, 0.02);

        // trapezoid over a span well past both ends of the train
        let step = 1e-3;
        let mut mass = 0.0;
        let mut x = -0.5;
        while x < 1.5 {
            mass += rate(x) * step;
            x += step;
        }
        assert!((mass - 20.0).abs() < 0.05, "mass {mass}");
    }

    #[rstest]
    fn faults_convert_into_anyhow_reports(regular_train: Vec<f64>) {
        let unsorted = vec![1.0, 0.5];
        let err = sttc(&regular_train, &unsorted, 0.005).unwrap_err();
        let report = anyhow::Error::from(err);
        assert!(report.to_string().contains("index 1"));
    }
}
