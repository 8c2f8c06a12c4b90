use super::Anneal;
use crate::distribution::first_argmax;
use crate::error::{BanditError, Result};
use crate::policy::{Policy, SelectionLog};
use rand::Rng;

/// Epsilon-greedy policy - explores with probability epsilon, exploits otherwise
///
/// Exploitation picks the first arm holding the highest mean estimate.
/// Exploration picks any arm uniformly, so the current best arm can be drawn
/// on an exploring turn as well.
#[derive(Clone)]
pub struct EpsilonGreedy {
    epsilon: f64,
    log: SelectionLog,
}

impl std::fmt::Debug for EpsilonGreedy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EpsilonGreedy")
            .field("n_arms", &self.log.n_arms())
            .field("epsilon", &self.epsilon)
            .field("plays", &self.log.selected().len())
            .finish()
    }
}

fn check_epsilon(epsilon: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&epsilon) {
        return Err(BanditError::config(format!(
            "epsilon must be between 0 and 1, got {epsilon}"
        )));
    }
    Ok(())
}

impl EpsilonGreedy {
    /// Creates a new EpsilonGreedy policy over `n_arms` arms
    pub fn new(n_arms: usize, epsilon: f64) -> Result<Self> {
        check_epsilon(epsilon)?;
        Ok(Self {
            epsilon,
            log: SelectionLog::new("epsilon-greedy", n_arms)?,
        })
    }

    /// Enables diagnostic logging for this instance
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.log.set_verbose(verbose);
        if verbose {
            log::debug!("epsilon: {:6.4}", self.epsilon);
        }
        self
    }

    /// Gets the epsilon value
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Sets the epsilon value
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<()> {
        check_epsilon(epsilon)?;
        self.epsilon = epsilon;
        Ok(())
    }
}

impl Policy for EpsilonGreedy {
    fn select_arm(
        &mut self,
        mean_estimates: &[f64],
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        self.log.validate(mean_estimates)?;
        let best_arm = first_argmax(mean_estimates);

        // Explore with probability epsilon
        let r: f64 = rng.random();
        let arm = if self.epsilon > r {
            rng.random_range(0..self.log.n_arms())
        } else {
            best_arm
        };

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
        self.log.clear();
    }
}

impl Anneal for EpsilonGreedy {
    const ANNEALED_NAME: &'static str = "epsilon-greedy-annealing";

    fn parameter(&self) -> f64 {
        self.epsilon
    }

    fn set_parameter(&mut self, value: f64) {
        self.epsilon = value.clamp(0.0, 1.0);
    }

    fn verbose(&self) -> bool {
        self.log.verbose()
    }

    fn set_verbose(&mut self, verbose: bool) {
        self.log.set_verbose(verbose);
    }
}
