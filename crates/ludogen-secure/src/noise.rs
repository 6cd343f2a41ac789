use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Add zero-mean Gaussian noise to a usage metric and clamp to `floor`.
///
/// The reported value stays plausible in aggregate while no longer revealing
/// the exact behavior of one user. A degenerate (negative or non-finite)
/// standard deviation leaves the base value untouched apart from the clamp.
pub fn inject_noise<R: Rng + ?Sized>(base: i64, floor: i64, std_dev: f64, rng: &mut R) -> i64 {
    let noisy = match Normal::new(0.0, std_dev) {
        Ok(normal) => base + normal.sample(rng).round() as i64,
        Err(_) => base,
    };
    noisy.max(floor)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn never_reports_below_the_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            // A huge sigma relative to the base forces strongly negative draws.
            let value = inject_noise(2, 1, 50.0, &mut rng);
            assert!(value >= 1);
        }
    }

    #[test]
    fn perturbs_values_around_the_base() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let values: Vec<i64> = (0..100)
            .map(|_| inject_noise(40, 1, 2.0, &mut rng))
            .collect();
        assert!(values.iter().any(|v| *v != 40), "noise should move values");
        assert!(values.iter().all(|v| (*v - 40).abs() < 20));
    }

    #[test]
    fn zero_sigma_degrades_to_a_clamp() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(inject_noise(40, 1, 0.0, &mut rng), 40);
        assert_eq!(inject_noise(-3, 1, 0.0, &mut rng), 1);
    }
}
