//! armpick: action-selection policies for stochastic multi-armed bandits.
//!
//! Each policy looks at the caller's current mean reward estimate per arm
//! and picks the next arm to pull, trading exploration of uncertain arms
//! against exploitation of the arm that currently looks best. Policies keep
//! their own state (exploration schedule, pursuit distribution, attempt
//! counts) and a history of every arm they selected; the reward estimates
//! themselves stay with the caller.
//!
//! Available policies: [`EpsilonGreedy`](policies::EpsilonGreedy),
//! [`EpsilonGreedyAnnealing`](policies::EpsilonGreedyAnnealing),
//! [`Softmax`](policies::Softmax),
//! [`SoftmaxAnnealing`](policies::SoftmaxAnnealing),
//! [`Pursuit`](policies::Pursuit) and [`Ucb1`](policies::Ucb1).
//!
//! # Quick Start
//!
//! ```
//! use armpick::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut policy = Ucb1::with_defaults(3).unwrap();
//! let mut estimates = RewardEstimates::new(3).unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! for _ in 0..10 {
//!     let arm = policy.select_arm(estimates.means(), &mut rng).unwrap();
//!     // Pull the arm and observe a reward
//!     let reward = if arm == 2 { 1.0 } else { 0.0 };
//!     estimates.record(arm, reward).unwrap();
//! }
//! assert_eq!(policy.selected_arms().len(), 10);
//! ```

mod config;
mod distribution;
mod error;
mod estimates;
pub mod policies;
mod policy;
pub mod sampling;

// Re-export main types
pub use config::{PolicyConfig, PolicyKind};
pub use error::{BanditError, Result};
pub use estimates::RewardEstimates;
pub use policy::Policy;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use armpick::prelude::*;
/// ```
pub mod prelude {
    pub use crate::policies::{
        Annealed, EpsilonGreedy, EpsilonGreedyAnnealing, Policy, Pursuit, Schedule, Softmax,
        SoftmaxAnnealing, Ucb1,
    };
    pub use crate::{BanditError, PolicyConfig, PolicyKind, Result, RewardEstimates};
}
