mod annealing;
mod epsilon_greedy;
mod pursuit;
mod softmax;
mod ucb;

pub use annealing::{Annealed, EpsilonGreedyAnnealing, Schedule, SoftmaxAnnealing};
pub use epsilon_greedy::EpsilonGreedy;
pub use pursuit::Pursuit;
pub use softmax::{Softmax, softmax_probabilities};
pub use ucb::Ucb1;

pub use crate::policy::Policy;

/// A policy with a single exploration parameter that [`Annealed`] can decay
///
/// Implementors expose the parameter raw: `set_parameter` is called with
/// schedule output and may only clamp it into the policy's valid range.
pub trait Anneal {
    /// Name reported by the annealed wrapper
    const ANNEALED_NAME: &'static str;

    /// Current value of the exploration parameter
    fn parameter(&self) -> f64;

    /// Overwrite the exploration parameter
    fn set_parameter(&mut self, value: f64);

    fn verbose(&self) -> bool;

    fn set_verbose(&mut self, verbose: bool);
}
