//! Declarative policy configuration.
//!
//! A [`PolicyConfig`] names a policy variant and its parameters and builds a
//! boxed [`Policy`]. With the `serde` feature it can be read from any serde
//! format, which lets experiment drivers describe their policies as data.

use crate::error::Result;
use crate::policies::{Annealed, EpsilonGreedy, Policy, Pursuit, Schedule, Softmax, Ucb1};

#[cfg(feature = "serde")]
fn default_c() -> f64 {
    Ucb1::DEFAULT_C
}

/// Policy variant and its exploration parameter
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "policy", rename_all = "snake_case"))]
pub enum PolicyKind {
    EpsilonGreedy {
        epsilon: f64,
    },
    EpsilonGreedyAnnealing {
        epsilon: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        schedule: Schedule,
    },
    Softmax {
        tau: f64,
    },
    SoftmaxAnnealing {
        tau: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        schedule: Schedule,
    },
    Pursuit {
        beta: f64,
    },
    Ucb1 {
        #[cfg_attr(feature = "serde", serde(default = "default_c"))]
        c: f64,
    },
}

/// Everything needed to build a policy instance
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolicyConfig {
    pub n_arms: usize,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub kind: PolicyKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub verbose: bool,
}

impl PolicyConfig {
    pub fn new(n_arms: usize, kind: PolicyKind) -> Self {
        Self {
            n_arms,
            kind,
            verbose: false,
        }
    }

    pub fn epsilon_greedy(n_arms: usize, epsilon: f64) -> Self {
        Self::new(n_arms, PolicyKind::EpsilonGreedy { epsilon })
    }

    pub fn epsilon_greedy_annealing(n_arms: usize, epsilon: f64) -> Self {
        Self::new(
            n_arms,
            PolicyKind::EpsilonGreedyAnnealing {
                epsilon,
                schedule: Schedule::Inverse,
            },
        )
    }

    pub fn softmax(n_arms: usize, tau: f64) -> Self {
        Self::new(n_arms, PolicyKind::Softmax { tau })
    }

    pub fn softmax_annealing(n_arms: usize, tau: f64) -> Self {
        Self::new(
            n_arms,
            PolicyKind::SoftmaxAnnealing {
                tau,
                schedule: Schedule::Inverse,
            },
        )
    }

    pub fn pursuit(n_arms: usize, beta: f64) -> Self {
        Self::new(n_arms, PolicyKind::Pursuit { beta })
    }

    pub fn ucb1(n_arms: usize, c: f64) -> Self {
        Self::new(n_arms, PolicyKind::Ucb1 { c })
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate the parameters and construct the policy
    pub fn build(&self) -> Result<Box<dyn Policy>> {
        let n = self.n_arms;
        let verbose = self.verbose;
        let policy: Box<dyn Policy> = match self.kind {
            PolicyKind::EpsilonGreedy { epsilon } => {
                Box::new(EpsilonGreedy::new(n, epsilon)?.with_verbose(verbose))
            }
            PolicyKind::EpsilonGreedyAnnealing { epsilon, schedule } => Box::new(
                Annealed::wrap(EpsilonGreedy::new(n, epsilon)?)
                    .with_schedule(schedule)?
                    .with_verbose(verbose),
            ),
            PolicyKind::Softmax { tau } => Box::new(Softmax::new(n, tau)?.with_verbose(verbose)),
            PolicyKind::SoftmaxAnnealing { tau, schedule } => Box::new(
                Annealed::wrap(Softmax::new(n, tau)?)
                    .with_schedule(schedule)?
                    .with_verbose(verbose),
            ),
            PolicyKind::Pursuit { beta } => Box::new(Pursuit::new(n, beta)?.with_verbose(verbose)),
            PolicyKind::Ucb1 { c } => Box::new(Ucb1::new(n, c)?.with_verbose(verbose)),
        };
        Ok(policy)
    }
}
