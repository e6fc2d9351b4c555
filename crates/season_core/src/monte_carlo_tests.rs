use super::*;

fn quick_config(n_seasons: u32) -> SimConfig {
    SimConfig {
        n_seasons,
        ..Default::default()
    }
}

#[test]
fn test_single_season_average_is_raw_count() {
    let config = quick_config(1);
    let runner = MonteCarloRunner::new(config.clone()).unwrap();

    let raw = simulate_one_baseline_season(&config, &mut seeded_rng(42)).unwrap();
    let avg = runner.run_baseline_simulation(1, &mut seeded_rng(42)).unwrap();
    assert_eq!(
        avg.as_tuple(),
        (f64::from(raw.weak_qualified), f64::from(raw.weak_group_winners))
    );

    let raw = simulate_one_swiss_season(&config, &mut seeded_rng(42)).unwrap();
    let avg = runner.run_swiss_simulation(1, &mut seeded_rng(42)).unwrap();
    assert_eq!(
        avg.as_tuple(),
        (f64::from(raw.weak_top8), f64::from(raw.weak_top24))
    );
}

#[test]
fn test_average_is_mean_of_seasons() {
    let config = quick_config(5);
    let runner = MonteCarloRunner::new(config.clone()).unwrap();

    let mut rng = seeded_rng(9);
    let seasons: Vec<_> = (0..5)
        .map(|_| simulate_one_swiss_season(&config, &mut rng).unwrap())
        .collect();
    let expected_top24 = seasons.iter().map(|c| f64::from(c.weak_top24)).sum::<f64>() / 5.0;

    let avg = runner.run_swiss_simulation(5, &mut seeded_rng(9)).unwrap();
    assert!((avg.avg_weak_top24 - expected_top24).abs() < 1e-12);
}

#[test]
fn test_zero_seasons_rejected() {
    let runner = MonteCarloRunner::new(SimConfig::default()).unwrap();
    assert!(matches!(
        runner.run_baseline_simulation(0, &mut seeded_rng(1)),
        Err(SimError::NoSeasons)
    ));
    assert!(matches!(
        runner.run_swiss_parallel(0, 4),
        Err(SimError::NoSeasons)
    ));
}

#[test]
fn test_averages_in_bounds() {
    let runner = MonteCarloRunner::new(SimConfig::default()).unwrap();
    let baseline = runner.run_baseline_simulation(300, &mut seeded_rng(42)).unwrap();
    assert!((0.0..=16.0).contains(&baseline.avg_weak_qualified));
    assert!((0.0..=8.0).contains(&baseline.avg_weak_group_winners));

    let swiss = runner.run_swiss_simulation(300, &mut seeded_rng(42)).unwrap();
    assert!((0.0..=8.0).contains(&swiss.avg_weak_top8));
    assert!((0.0..=24.0).contains(&swiss.avg_weak_top24));
}

#[test]
fn test_raising_threshold_never_lowers_average() {
    let low = MonteCarloRunner::new(SimConfig::default()).unwrap();
    let high = MonteCarloRunner::new(SimConfig {
        weak_threshold: 1900,
        ..Default::default()
    })
    .unwrap();

    let a = low.run_baseline_simulation(200, &mut seeded_rng(42)).unwrap();
    let b = high.run_baseline_simulation(200, &mut seeded_rng(42)).unwrap();
    assert!(b.avg_weak_qualified >= a.avg_weak_qualified);
    assert!(b.avg_weak_group_winners >= a.avg_weak_group_winners);

    let a = low.run_swiss_simulation(200, &mut seeded_rng(42)).unwrap();
    let b = high.run_swiss_simulation(200, &mut seeded_rng(42)).unwrap();
    assert!(b.avg_weak_top8 >= a.avg_weak_top8);
    assert!(b.avg_weak_top24 >= a.avg_weak_top24);
}

#[test]
fn test_worker_share_covers_every_season() {
    for (n, workers) in [(10, 3), (7, 7), (3, 5), (20_000, 8)] {
        let total: u32 = (0..workers).map(|w| worker_share(n, workers, w)).sum();
        assert_eq!(total, n);
    }
    assert_eq!(worker_share(10, 3, 0), 4);
    assert_eq!(worker_share(10, 3, 2), 3);
}

#[test]
fn test_parallel_single_worker_matches_sequential() {
    let runner = MonteCarloRunner::new(SimConfig::default()).unwrap();
    let sequential = runner.run_swiss_simulation(50, &mut seeded_rng(42)).unwrap();
    let parallel = runner.run_swiss_parallel(50, 1).unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_parallel_is_reproducible() {
    let runner = MonteCarloRunner::new(SimConfig::default()).unwrap();
    let a = runner.run_baseline_parallel(120, 4).unwrap();
    let b = runner.run_baseline_parallel(120, 4).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parallel_rejects_zero_workers() {
    let runner = MonteCarloRunner::new(SimConfig::default()).unwrap();
    assert!(matches!(
        runner.run_baseline_parallel(10, 0),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn test_comparison_uses_fresh_stream_per_format() {
    let config = quick_config(20);
    let summary = run_comparison(&config, 1).unwrap();

    let runner = MonteCarloRunner::new(config.clone()).unwrap();
    let baseline = runner.run_baseline_simulation(20, &mut seeded_rng(42)).unwrap();
    assert_eq!(summary.baseline, baseline);
    assert_eq!(summary.n_seasons, 20);
}

#[test]
fn test_comparison_validates_config() {
    let config = SimConfig {
        draw_prob: -0.1,
        ..quick_config(5)
    };
    assert!(run_comparison(&config, 1).is_err());
}

#[test]
fn test_runner_rejects_empty_tier_interval() {
    let mut config = SimConfig::default();
    config.swiss_tiers[0].max = config.swiss_tiers[0].min;
    assert!(matches!(
        MonteCarloRunner::new(config),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn test_runner_rejects_bad_draw_prob() {
    let config = SimConfig {
        draw_prob: 2.0,
        ..Default::default()
    };
    assert!(matches!(
        MonteCarloRunner::new(config),
        Err(SimError::InvalidConfig(_))
    ));
}
