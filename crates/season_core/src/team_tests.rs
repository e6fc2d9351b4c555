use super::*;
use crate::rng::seeded_rng;

#[test]
fn test_group_stage_pool_has_32_teams() {
    let mut rng = seeded_rng(1);
    let teams = generate_pool(&TierSpec::group_stage_defaults(), &mut rng);
    assert_eq!(teams.len(), 32);
}

#[test]
fn test_swiss_pool_tier_counts() {
    let mut rng = seeded_rng(1);
    let teams = generate_pool(&TierSpec::swiss_defaults(), &mut rng);
    assert_eq!(teams.len(), 36);

    let count = |prefix: &str| teams.iter().filter(|t| t.name.starts_with(prefix)).count();
    assert_eq!(count("Team_Top_"), 8);
    assert_eq!(count("Team_Strong_"), 10);
    assert_eq!(count("Team_Mid_"), 10);
    assert_eq!(count("Team_Weak_"), 8);
}

#[test]
fn test_ratings_stay_inside_tier_intervals() {
    let tiers = TierSpec::swiss_defaults();
    let mut rng = seeded_rng(99);

    for _ in 0..50 {
        for team in generate_pool(&tiers, &mut rng) {
            let spec = tiers
                .iter()
                .find(|s| team.name.starts_with(&format!("Team_{}_", s.tier.label())))
                .expect("generated name carries its tier");
            assert!(team.rating >= spec.min && team.rating < spec.max, "{team:?}");
        }
    }
}

#[test]
fn test_names_are_unique() {
    let mut rng = seeded_rng(3);
    let teams = generate_pool(&TierSpec::swiss_defaults(), &mut rng);
    let mut names: Vec<_> = teams.iter().map(|t| t.name.as_str()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), 36);
}

#[test]
fn test_pool_is_shuffled() {
    // Unshuffled order would list every Top team before any Weak team
    let mut rng = seeded_rng(5);
    let teams = generate_pool(&TierSpec::group_stage_defaults(), &mut rng);
    let first_eight_all_top = teams[..8].iter().all(|t| t.name.starts_with("Team_Top_"));
    assert!(!first_eight_all_top);
}

#[test]
fn test_same_seed_same_pool() {
    let tiers = TierSpec::group_stage_defaults();
    let a = generate_pool(&tiers, &mut seeded_rng(42));
    let b = generate_pool(&tiers, &mut seeded_rng(42));
    assert_eq!(a, b);
}

#[test]
fn test_weak_is_strictly_below_threshold() {
    assert!(Team::new("a", 1499).is_weak(1500));
    assert!(!Team::new("b", 1500).is_weak(1500));
    assert!(is_weak(1499.5_f64, 1500));
    assert!(!is_weak(1500.0_f64, 1500));
}
