use armpick::Policy;
use armpick::policies::{Softmax, SoftmaxAnnealing, softmax_probabilities};
use rand::SeedableRng;

#[test]
fn test_softmax_degenerate_range_samples_uniformly() {
    let mut policy = Softmax::new(4, 1.0).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    assert_eq!(policy.probabilities(&[5.0; 4]).unwrap(), vec![0.25; 4]);

    let n_samples = 8000;
    let mut counts = [0usize; 4];
    for _ in 0..n_samples {
        counts[policy.select_arm(&[5.0, 5.0, 5.0, 5.0], &mut rng).unwrap()] += 1;
    }
    for count in counts {
        let proportion = count as f64 / n_samples as f64;
        assert!((proportion - 0.25).abs() < 0.03);
    }
}

#[test]
fn test_softmax_low_temperature_concentrates() {
    let mut policy = Softmax::new(3, 0.001).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let mut hits = 0;
    for _ in 0..1000 {
        if policy.select_arm(&[1.0, 2.0, 5.0], &mut rng).unwrap() == 2 {
            hits += 1;
        }
    }
    assert!(hits >= 990);
}

#[test]
fn test_softmax_follows_its_distribution() {
    let means = [0.0, 0.5, 1.0];
    let mut policy = Softmax::new(3, 0.5).unwrap();
    let p = policy.probabilities(&means).unwrap();
    assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    assert!(p[0] < p[1] && p[1] < p[2]);

    let mut rng = rand::rngs::StdRng::seed_from_u64(99);
    let n_samples = 10000;
    let mut counts = [0usize; 3];
    for _ in 0..n_samples {
        counts[policy.select_arm(&means, &mut rng).unwrap()] += 1;
    }
    for (count, expected) in counts.iter().zip(&p) {
        let proportion = *count as f64 / n_samples as f64;
        assert!((proportion - expected).abs() < 0.02);
    }
}

#[test]
fn test_high_temperature_approaches_uniform() {
    let p = softmax_probabilities(&[0.0, 10.0, 3.0], 1e6).unwrap();
    for x in p {
        assert!((x - 1.0 / 3.0).abs() < 1e-5);
    }
}

#[test]
fn test_softmax_annealing_sharpens() {
    let mut policy = SoftmaxAnnealing::new(2, 1.0).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(5);

    for _ in 0..200 {
        policy.select_arm(&[0.0, 1.0], &mut rng).unwrap();
    }
    assert!((policy.tau() - 1.0 / 200.0).abs() < 1e-15);

    // tau <= 0.01 from play 100 on, so arm 0 has weight below e^-100
    let tail = &policy.selected_arms()[100..];
    assert!(tail.iter().all(|&a| a == 1));
}
