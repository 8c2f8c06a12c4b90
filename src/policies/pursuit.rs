use crate::distribution::{first_argmax, sample_cdf};
use crate::error::{BanditError, Result};
use crate::policy::{Policy, SelectionLog};

/// Pursuit policy (Thathachar & Sastry)
///
/// Keeps an explicit selection distribution `p` over the arms. Every call
/// moves `p` a step of size `beta` towards the point mass on the current
/// best arm, then samples the arm from `p`. Unlike softmax, the distribution
/// carries over between calls.
#[derive(Clone)]
pub struct Pursuit {
    beta: f64,
    probabilities: Vec<f64>,
    log: SelectionLog,
}

impl std::fmt::Debug for Pursuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pursuit")
            .field("beta", &self.beta)
            .field("probabilities", &self.probabilities)
            .field("plays", &self.log.selected().len())
            .finish()
    }
}

impl Pursuit {
    /// Creates a new Pursuit policy with learning rate `beta` in `(0, 1)`
    pub fn new(n_arms: usize, beta: f64) -> Result<Self> {
        if !(beta > 0.0 && beta < 1.0) {
            return Err(BanditError::config(format!(
                "beta must be strictly between 0 and 1, got {beta}"
            )));
        }
        let log = SelectionLog::new("pursuit", n_arms)?;
        Ok(Self {
            beta,
            probabilities: vec![1.0 / n_arms as f64; n_arms],
            log,
        })
    }

    /// Enables diagnostic logging for this instance
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.log.set_verbose(verbose);
        if verbose {
            log::debug!("beta: {:6.4}", self.beta);
        }
        self
    }

    /// Gets the learning rate
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Current selection distribution
    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }

    fn pursue(&mut self, best_arm: usize) {
        let keep = 1.0 - self.beta;
        for p in &mut self.probabilities {
            *p *= keep;
        }
        self.probabilities[best_arm] += self.beta;
    }
}

impl Policy for Pursuit {
    fn select_arm(
        &mut self,
        mean_estimates: &[f64],
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        self.log.validate(mean_estimates)?;
        self.pursue(first_argmax(mean_estimates));

        let arm = sample_cdf(&self.probabilities, rng);
        if self.log.verbose() {
            log::debug!("pursuit: distribution {:?}", self.probabilities);
        }
        self.log.record(arm);
        Ok(arm)
    }

    fn selected_arms(&self) -> &[usize] {
        self.log.selected()
    }

    fn n_arms(&self) -> usize {
        self.log.n_arms()
    }

    fn name(&self) -> &'static str {
        self.log.name()
    }

    fn reset(&mut self) {
        let k = self.log.n_arms();
        self.probabilities = vec![1.0 / k as f64; k];
        self.log.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use rand::SeedableRng;

    #[test]
    fn test_pursuit_starts_uniform() {
        let policy = Pursuit::new(4, 0.1).unwrap();
        assert_eq!(policy.probabilities(), &[0.25; 4]);
    }

    #[test]
    fn test_pursuit_single_step() {
        let mut policy = Pursuit::new(4, 0.2).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        policy.select_arm(&[0.1, 0.9, 0.9, 0.3], &mut rng).unwrap();

        // First maximum (arm 1) receives the boost
        let p = policy.probabilities();
        assert_abs_diff_eq!(p[0], 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(p[1], 0.4, epsilon = 1e-12);
        assert_abs_diff_eq!(p[2], 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(p[3], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_pursuit_converges_to_best_arm() {
        let mut policy = Pursuit::new(3, 0.1).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..300 {
            policy.select_arm(&[0.2, 0.1, 0.7], &mut rng).unwrap();
        }
        assert!(policy.probabilities()[2] > 0.999);

        let tail = &policy.selected_arms()[250..];
        assert!(tail.iter().filter(|&&a| a == 2).count() >= 48);
    }

    #[test]
    fn test_pursuit_rejects_bad_beta() {
        assert!(Pursuit::new(3, 0.0).is_err());
        assert!(Pursuit::new(3, 1.0).is_err());
        assert!(Pursuit::new(3, f64::NAN).is_err());
        assert!(Pursuit::new(0, 0.5).is_err());
    }

    #[test]
    fn test_pursuit_reset() {
        let mut policy = Pursuit::new(2, 0.5).unwrap();
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        policy.select_arm(&[1.0, 0.0], &mut rng).unwrap();
        assert!(policy.probabilities()[0] > 0.5);

        policy.reset();
        assert_eq!(policy.probabilities(), &[0.5, 0.5]);
        assert!(policy.selected_arms().is_empty());
    }
}
