use crate::error::{BanditError, Result};
use crate::policy::{Policy, SelectionLog};
use rand::Rng;

/// Upper Confidence Bound (UCB1) policy
///
/// Each arm is scored as its mean estimate plus an exploration bonus
/// `(ln t / n_i)^(1 / c)`, where `t` counts plays and `n_i` counts how often
/// the policy picked arm `i`. Arms picked rarely keep a large bonus, so
/// uncertain arms get revisited even when their estimate is low.
///
/// Attempt counts start at 1 so the bonus is always defined. Exact ties on
/// the best score are broken uniformly at random.
#[derive(Clone)]
pub struct Ucb1 {
    /// Confidence parameter, used as a root exponent on the bonus
    c: f64,
    /// Selections per arm, starting from 1
    action_attempts: Vec<u64>,
    /// Total number of rounds played
    plays: u64,
    log: SelectionLog,
}

impl std::fmt::Debug for Ucb1 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ucb1")
            .field("c", &self.c)
            .field("plays", &self.plays)
            .field("action_attempts", &self.action_attempts)
            .finish()
    }
}

fn exploration_bonus(plays: u64, attempts: u64, c: f64) -> f64 {
    let ratio = (plays as f64).ln() / attempts as f64;
    let bonus = ratio.powf(1.0 / c);
    if bonus.is_nan() { 0.0 } else { bonus }
}

impl Ucb1 {
    /// Confidence parameter used by [`Ucb1::with_defaults`]
    pub const DEFAULT_C: f64 = 2.0;

    /// Creates a new UCB1 policy with the given confidence parameter
    ///
    /// # Arguments
    /// * `n_arms` - Number of arms, must be positive
    /// * `c` - Confidence parameter, finite and non-zero. `c = 2` gives the
    ///   classic square-root bonus; larger values flatten the bonus
    pub fn new(n_arms: usize, c: f64) -> Result<Self> {
        if !c.is_finite() || c == 0.0 {
            return Err(BanditError::config(format!(
                "c must be finite and non-zero, got {c}"
            )));
        }
        let log = SelectionLog::new("ucb1", n_arms)?;
        Ok(Self {
            c,
            action_attempts: vec![1; n_arms],
            plays: 0,
            log,
        })
    }

    /// Creates a new UCB1 policy with `c = 2`
    pub fn with_defaults(n_arms: usize) -> Result<Self> {
        Self::new(n_arms, Self::DEFAULT_C)
    }

    /// Enables diagnostic logging for this instance
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.log.set_verbose(verbose);
        if verbose {
            log::debug!("c: {:6.4}", self.c);
        }
        self
    }

    /// Gets the confidence parameter
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Per-arm selection counts, each starting at 1
    pub fn action_attempts(&self) -> &[u64] {
        &self.action_attempts
    }

    /// Gets the total number of rounds played
    pub fn plays(&self) -> u64 {
        self.plays
    }

    /// Exploration bonuses the next selection will add to the mean estimates
    pub fn bonuses(&self) -> Vec<f64> {
        let t = self.plays + 1;
        self.action_attempts
            .iter()
            .map(|&n| exploration_bonus(t, n, self.c))
            .collect()
    }
}

impl Policy for Ucb1 {
    fn select_arm(
        &mut self,
        mean_estimates: &[f64],
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        self.log.validate(mean_estimates)?;

        let scores: Vec<f64> = mean_estimates
            .iter()
            .zip(self.bonuses())
            .map(|(m, b)| m + b)
            .collect();
        self.plays += 1;

        let top = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let ties: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s == top)
            .map(|(i, _)| i)
            .collect();
        // A unique maximum consumes no randomness.
        let arm = match ties.as_slice() {
            [only] => *only,
            _ => ties[rng.random_range(0..ties.len())],
        };

        self.action_attempts[arm] += 1;
        if self.log.verbose() {
            log::debug!("ucb1: scores {scores:?}");
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
        self.action_attempts.iter_mut().for_each(|n| *n = 1);
        self.plays = 0;
        self.log.clear();
    }
}
