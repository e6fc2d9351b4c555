use super::*;
use crate::rng::seeded_rng;
use crate::team::{generate_pool, TierSpec};
use crate::SimError;

fn pool(seed: u64) -> Vec<Team> {
    generate_pool(&TierSpec::group_stage_defaults(), &mut seeded_rng(seed))
}

#[test]
fn test_groups_partition_the_pool() {
    let mut rng = seeded_rng(11);
    for _ in 0..20 {
        let groups = draw_groups(&mut rng);
        assert_eq!(groups.len(), NUM_GROUPS);

        let mut seen = vec![0u8; 32];
        for group in &groups {
            for &i in group {
                seen[i] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1), "every team in exactly one group");
    }
}

#[test]
fn test_round_robin_plays_twelve_fixtures() {
    let teams = pool(2);
    let mut points = vec![0; teams.len()];
    let group = [0, 1, 2, 3];

    let fixtures = play_round_robin(&teams, &group, 0.25, &mut points, &mut seeded_rng(2));
    assert_eq!(fixtures, 12);

    // Each fixture hands out 2 or 3 points in total
    let total: u32 = group.iter().map(|&i| points[i]).sum();
    assert!((24..=36).contains(&total), "total {total}");
    assert!(points[4..].iter().all(|&p| p == 0));
}

#[test]
fn test_all_draws_give_six_points_each() {
    let teams = pool(3);
    let mut points = vec![0; teams.len()];
    play_round_robin(&teams, &[4, 5, 6, 7], 1.0, &mut points, &mut seeded_rng(3));
    // 3 opponents, 2 legs, 1 point each
    assert_eq!(&points[4..8], &[6, 6, 6, 6]);
}

#[test]
fn test_group_stage_points_match_fixture_count() {
    let teams = pool(4);
    let stage = simulate_group_stage(&teams, 0.25, &mut seeded_rng(4)).unwrap();

    assert_eq!(stage.groups.len(), 8);
    for group in &stage.groups {
        let total: u32 = group.iter().map(|&i| stage.points[i]).sum();
        assert!((24..=36).contains(&total));
    }
    // No team can earn more than 6 wins
    assert!(stage.points.iter().all(|&p| p <= 18));
}

#[test]
fn test_rejects_wrong_pool_size() {
    let teams = generate_pool(&TierSpec::swiss_defaults(), &mut seeded_rng(1));
    let err = simulate_group_stage(&teams, 0.25, &mut seeded_rng(1)).unwrap_err();
    assert!(matches!(
        err,
        SimError::PoolSize {
            format: FormatKind::GroupStage,
            expected: 32,
            actual: 36
        }
    ));
}

#[test]
fn test_same_seed_same_group_stage() {
    let teams = pool(6);
    let a = simulate_group_stage(&teams, 0.25, &mut seeded_rng(6)).unwrap();
    let b = simulate_group_stage(&teams, 0.25, &mut seeded_rng(6)).unwrap();
    assert_eq!(a.groups, b.groups);
    assert_eq!(a.points, b.points);
}
