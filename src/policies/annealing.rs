use super::{Anneal, EpsilonGreedy, Softmax};
use crate::error::{BanditError, Result};
use crate::policy::Policy;

/// Decay rule for an annealed exploration parameter
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Schedule {
    /// `initial / t` on the t-th play
    #[default]
    Inverse,
    /// `initial * rate^(t - 1)` on the t-th play, `rate` in `(0, 1]`
    Exponential { rate: f64 },
}

impl Schedule {
    /// Parameter value to use on play `t` (1-based)
    pub fn value(&self, initial: f64, t: usize) -> f64 {
        let t = t.max(1);
        match *self {
            Schedule::Inverse => initial / t as f64,
            Schedule::Exponential { rate } => {
                initial * rate.powi(i32::try_from(t - 1).unwrap_or(i32::MAX))
            }
        }
    }

    fn check(&self) -> Result<()> {
        match *self {
            Schedule::Inverse => Ok(()),
            Schedule::Exponential { rate } if rate > 0.0 && rate <= 1.0 => Ok(()),
            Schedule::Exponential { rate } => Err(BanditError::config(format!(
                "exponential schedule rate must be in (0, 1], got {rate}"
            ))),
        }
    }
}

/// Wraps a policy and decays its exploration parameter before every selection
///
/// The wrapped policy keeps all of its selection logic; the wrapper only
/// counts plays and overwrites the parameter from the schedule, so after the
/// t-th call the parameter equals `schedule.value(initial, t)`.
#[derive(Clone, Debug)]
pub struct Annealed<P> {
    inner: P,
    initial: f64,
    plays: usize,
    schedule: Schedule,
}

/// Epsilon-greedy with `epsilon = epsilon_zero / t`
pub type EpsilonGreedyAnnealing = Annealed<EpsilonGreedy>;

/// Softmax with `tau = tau_zero / t`
pub type SoftmaxAnnealing = Annealed<Softmax>;

impl<P> Annealed<P>
where
    P: Policy + Anneal,
{
    /// Anneals `inner` starting from its current parameter value
    pub fn wrap(inner: P) -> Self {
        Self {
            initial: inner.parameter(),
            inner,
            plays: 0,
            schedule: Schedule::Inverse,
        }
    }

    /// Replaces the default inverse schedule
    pub fn with_schedule(mut self, schedule: Schedule) -> Result<Self> {
        schedule.check()?;
        self.schedule = schedule;
        Ok(self)
    }

    /// Enables diagnostic logging for this instance
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.inner.set_verbose(verbose);
        if verbose {
            log::debug!(
                "{}: initial parameter {:6.4}, schedule {:?}",
                P::ANNEALED_NAME,
                self.initial,
                self.schedule
            );
        }
        self
    }

    /// Number of selections made since construction or the last reset
    pub fn plays(&self) -> usize {
        self.plays
    }

    /// Parameter value before any decay
    pub fn initial(&self) -> f64 {
        self.initial
    }

    /// Parameter value used by the most recent selection
    pub fn parameter(&self) -> f64 {
        self.inner.parameter()
    }

    pub fn schedule(&self) -> Schedule {
        self.schedule
    }

    /// The wrapped policy
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

impl Annealed<EpsilonGreedy> {
    /// Creates an annealing epsilon-greedy policy starting at `epsilon`
    pub fn new(n_arms: usize, epsilon: f64) -> Result<Self> {
        Ok(Self::wrap(EpsilonGreedy::new(n_arms, epsilon)?))
    }

    /// Current epsilon
    pub fn epsilon(&self) -> f64 {
        self.inner.epsilon()
    }
}

impl Annealed<Softmax> {
    /// Creates an annealing softmax policy starting at temperature `tau`
    pub fn new(n_arms: usize, tau: f64) -> Result<Self> {
        Ok(Self::wrap(Softmax::new(n_arms, tau)?))
    }

    /// Current temperature
    pub fn tau(&self) -> f64 {
        self.inner.tau()
    }
}

impl<P> Policy for Annealed<P>
where
    P: Policy + Anneal,
{
    fn select_arm(
        &mut self,
        mean_estimates: &[f64],
        rng: &mut dyn rand::RngCore,
    ) -> Result<usize> {
        let previous = self.inner.parameter();
        let t = self.plays + 1;
        let value = self.schedule.value(self.initial, t);
        self.inner.set_parameter(value);

        match self.inner.select_arm(mean_estimates, rng) {
            Ok(arm) => {
                self.plays = t;
                if self.inner.verbose() {
                    log::debug!("{}: play {t} parameter {value:.6}", P::ANNEALED_NAME);
                }
                Ok(arm)
            }
            Err(err) => {
                self.inner.set_parameter(previous);
                Err(err)
            }
        }
    }

    fn selected_arms(&self) -> &[usize] {
        self.inner.selected_arms()
    }

    fn n_arms(&self) -> usize {
        self.inner.n_arms()
    }

    fn name(&self) -> &'static str {
        P::ANNEALED_NAME
    }

    fn reset(&mut self) {
        self.inner.reset();
        self.inner.set_parameter(self.initial);
        self.plays = 0;
    }
}
