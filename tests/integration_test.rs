//! End-to-end decision loops against a noise-free environment.

use armpick::prelude::*;
use armpick::sampling::{sample_uniform, select_subset_mask};
use rand::SeedableRng;

const TRUE_MEANS: [f64; 3] = [0.2, 0.5, 0.8];

fn run(mut policy: Box<dyn Policy>, steps: usize, seed: u64) -> Box<dyn Policy> {
    let mut estimates = RewardEstimates::new(TRUE_MEANS.len()).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    for _ in 0..steps {
        // Untried arms look optimistic so every policy samples them early
        let means: Vec<f64> = estimates
            .means()
            .iter()
            .zip(estimates.pulls())
            .map(|(&m, &n)| if n == 0 { 1.0 } else { m })
            .collect();
        let arm = policy.select_arm(&means, &mut rng).unwrap();
        estimates.record(arm, TRUE_MEANS[arm]).unwrap();
    }
    assert_eq!(estimates.total_pulls(), steps as u64);
    policy
}

fn tail_share(policy: &dyn Policy, arm: usize, tail: usize) -> f64 {
    let history = policy.selected_arms();
    let tail = &history[history.len() - tail..];
    tail.iter().filter(|&&a| a == arm).count() as f64 / tail.len() as f64
}

#[test]
fn test_every_policy_finds_the_best_arm() {
    let configs = [
        PolicyConfig::epsilon_greedy(3, 0.1),
        PolicyConfig::epsilon_greedy_annealing(3, 1.0),
        PolicyConfig::softmax(3, 0.1),
        PolicyConfig::softmax_annealing(3, 1.0),
        PolicyConfig::pursuit(3, 0.01),
        PolicyConfig::ucb1(3, 2.0),
    ];

    for config in configs {
        let policy = run(config.build().unwrap(), 2000, 42);
        assert_eq!(policy.selected_arms().len(), 2000);
        let share = tail_share(policy.as_ref(), 2, 500);
        assert!(share > 0.6, "{}: best arm share {share}", policy.name());
    }
}

#[test]
fn test_same_seed_same_history() {
    let a = run(PolicyConfig::softmax(3, 0.3).build().unwrap(), 300, 11);
    let b = run(PolicyConfig::softmax(3, 0.3).build().unwrap(), 300, 11);
    assert_eq!(a.selected_arms(), b.selected_arms());

    let c = run(PolicyConfig::softmax(3, 0.3).build().unwrap(), 300, 12);
    assert_ne!(a.selected_arms(), c.selected_arms());
}

#[test]
fn test_reset_replays_identically() {
    let mut policy = PolicyConfig::pursuit(3, 0.05).build().unwrap();
    let means = [0.3, 0.1, 0.2];

    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    for _ in 0..50 {
        policy.select_arm(&means, &mut rng).unwrap();
    }
    let first = policy.selected_arms().to_vec();

    policy.reset();
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    for _ in 0..50 {
        policy.select_arm(&means, &mut rng).unwrap();
    }
    assert_eq!(policy.selected_arms(), first.as_slice());
}

#[test]
fn test_sampling_helpers_build_an_environment() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let arm_means = sample_uniform(10, &mut rng);
    let active = select_subset_mask(10, 3, &mut rng);
    assert_eq!(active.iter().filter(|&&on| on).count(), 3);

    let chosen: Vec<f64> = arm_means
        .iter()
        .zip(&active)
        .filter(|&(_, &on)| on)
        .map(|(m, _)| *m)
        .collect();
    assert_eq!(chosen.len(), 3);

    let mut policy = Ucb1::with_defaults(chosen.len()).unwrap();
    let arm = policy.select_arm(&chosen, &mut rng).unwrap();
    assert!(arm < 3);
}
