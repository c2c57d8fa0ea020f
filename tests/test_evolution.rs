use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use bitga::{
    breeding::MutationPolicy,
    chromosome::Chromosome,
    error::GeneticError,
    evolution::{
        run_ga, sweep, Challenge, EvolutionLauncher, EvolutionOptions, LogLevel, OddPopulation,
        TargetOnes,
    },
    rng::RandomNumberGenerator,
};

fn lab_options() -> EvolutionOptions {
    EvolutionOptions::default()
}

#[test]
fn test_lab_configuration_converges() {
    let options = lab_options();
    let seeds: Vec<u64> = (0..20).collect();

    let summary = sweep(&options, &seeds).unwrap();

    assert_eq!(summary.runs.len(), 20);
    assert!(
        summary.optimal_runs >= 18,
        "only {} of 20 runs reached the maximum",
        summary.optimal_runs
    );
}

#[test]
fn test_result_invariants_across_seeds() {
    let options = EvolutionOptions::builder()
        .population_size(60)
        .chromosome_length(30)
        .target_ones(7)
        .max_fitness(30)
        .num_generations(25)
        .build();
    let challenge = TargetOnes::new(7, 30);

    for seed in 0..10 {
        let mut rng = RandomNumberGenerator::from_seed(seed);
        let result = EvolutionLauncher::from_options(&options)
            .unwrap()
            .evolve(&options, &mut rng)
            .unwrap();

        assert_eq!(result.best.len(), 30);
        assert_eq!(result.curve.len(), 25);
        assert_eq!(result.best_fitness, challenge.score(&result.best));
        assert!(result.best_fitness <= 30);

        let running = result.best_so_far();
        assert!(running.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*running.last().unwrap(), result.best_fitness);
    }
}

#[test]
fn test_same_seed_same_result() {
    let a = run_ga(100, 40, 20, 40, 20, 3, 0.9, 1.0 / 40.0, 1234).unwrap();
    let b = run_ga(100, 40, 20, 40, 20, 3, 0.9, 1.0 / 40.0, 1234).unwrap();

    assert_eq!(a.best, b.best);
    assert_eq!(a.best_fitness, b.best_fitness);
    assert_eq!(a.curve, b.curve);
}

#[test]
fn test_different_seeds_explore_differently() {
    let a = run_ga(50, 64, 16, 64, 3, 2, 0.9, 0.01, 1).unwrap();
    let b = run_ga(50, 64, 16, 64, 3, 2, 0.9, 0.01, 2).unwrap();

    // Random 64-bit individuals from different streams essentially never coincide
    assert_ne!(a.best, b.best);
}

#[test]
fn test_parallel_evaluation_is_deterministic() {
    let sequential = EvolutionOptions::builder()
        .population_size(120)
        .num_generations(10)
        .parallel_threshold(usize::MAX)
        .build();
    let parallel = EvolutionOptions::builder()
        .population_size(120)
        .num_generations(10)
        .parallel_threshold(1)
        .build();

    let mut rng_a = RandomNumberGenerator::from_seed(77);
    let mut rng_b = RandomNumberGenerator::from_seed(77);

    let a = EvolutionLauncher::from_options(&sequential)
        .unwrap()
        .evolve(&sequential, &mut rng_a)
        .unwrap();
    let b = EvolutionLauncher::from_options(&parallel)
        .unwrap()
        .evolve(&parallel, &mut rng_b)
        .unwrap();

    assert_eq!(a, b);
}

#[test]
fn test_single_bit_mutation_policy_converges() {
    let options = EvolutionOptions::builder()
        .mutation_policy(MutationPolicy::SingleBit)
        .crossover_rate(1.0)
        .tournament_size(2)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(99);

    let result = EvolutionLauncher::from_options(&options)
        .unwrap()
        .evolve(&options, &mut rng)
        .unwrap();

    assert_eq!(result.best_fitness, 80);
    assert_eq!(result.best.ones_count(), 40);
}

#[test]
fn test_odd_population_is_truncated() {
    let options = EvolutionOptions::builder()
        .population_size(7)
        .chromosome_length(10)
        .target_ones(5)
        .max_fitness(10)
        .num_generations(5)
        .tournament_size(2)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(5);

    let result = EvolutionLauncher::from_options(&options)
        .unwrap()
        .evolve(&options, &mut rng)
        .unwrap();
    assert_eq!(result.curve.len(), 5);

    let strict = EvolutionOptions::builder()
        .population_size(7)
        .odd_population(OddPopulation::RejectOdd)
        .tournament_size(2)
        .build();
    assert!(matches!(
        EvolutionLauncher::from_options(&strict),
        Err(GeneticError::Configuration(_))
    ));
}

#[test]
fn test_cancellation_from_another_thread() {
    let options = EvolutionOptions::builder()
        .population_size(40)
        .chromosome_length(20)
        .target_ones(10)
        .max_fitness(20)
        .num_generations(1_000_000)
        .build();
    let cancel = Arc::new(AtomicBool::new(false));

    let flag = Arc::clone(&cancel);
    let handle = std::thread::spawn(move || {
        let mut rng = RandomNumberGenerator::from_seed(8);
        EvolutionLauncher::from_options(&options)
            .unwrap()
            .evolve_with_cancel(&options, &mut rng, &flag)
    });

    std::thread::sleep(std::time::Duration::from_millis(50));
    cancel.store(true, Ordering::Relaxed);

    let result = handle.join().unwrap().unwrap();
    assert!(result.cancelled);
    assert!(result.generations_run >= 1);
    assert!(result.generations_run < 1_000_000);
    assert_eq!(result.curve.len(), result.generations_run);
}

#[test]
fn test_concrete_fitness_scenario() {
    let challenge = TargetOnes::new(5, 10);
    let individual = Chromosome::from_bits(vec![1, 1, 1, 1, 1, 0, 0, 0, 0, 0]).unwrap();

    assert_eq!(challenge.score(&individual), 10);
}

#[test]
fn test_logging_levels_do_not_change_results() {
    // try_init: another test may already have installed a subscriber
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    let quiet = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(5)
        .build();
    let verbose = EvolutionOptions::builder()
        .population_size(20)
        .num_generations(5)
        .log_level(LogLevel::Verbose)
        .build();

    let mut rng_a = RandomNumberGenerator::from_seed(3);
    let mut rng_b = RandomNumberGenerator::from_seed(3);

    let a = EvolutionLauncher::from_options(&quiet)
        .unwrap()
        .evolve(&quiet, &mut rng_a)
        .unwrap();
    let b = EvolutionLauncher::from_options(&verbose)
        .unwrap()
        .evolve(&verbose, &mut rng_b)
        .unwrap();

    assert_eq!(a, b);
}
