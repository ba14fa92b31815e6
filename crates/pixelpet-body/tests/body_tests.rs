use pixelpet_body::{
    AnimationFrame, Animator, BodyType, Primitive, ShapeProfileCache, generate_shape_profile,
    render_frame,
};
use pixelpet_life::{Evolution, Mood};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

fn circles(primitives: &[Primitive]) -> usize {
    primitives
        .iter()
        .filter(|p| matches!(p, Primitive::Circle { .. }))
        .count()
}

#[test]
fn test_render_is_deterministic() {
    let mut cache = ShapeProfileCache::new(42);
    let mut animator = Animator::new(42);

    for body_type in BodyType::all() {
        let profile = cache.profile_for(*body_type).clone();
        for _ in 0..30 {
            let frame = *animator.tick(*body_type);
            for mood in [Mood::Happy, Mood::Normal, Mood::Sad] {
                for sleeping in [false, true] {
                    let a = render_frame(&profile, mood, sleeping, &frame);
                    let b = render_frame(&profile, mood, sleeping, &frame);
                    assert_eq!(a, b);
                    assert!(!a.is_empty());
                }
            }
        }
    }
}

#[test]
fn test_body_type_follows_evolution() {
    assert_eq!(BodyType::from_evolution(None), BodyType::Baby);
    assert_eq!(BodyType::from_evolution(Some(Evolution::Good)), BodyType::Good);
    assert_eq!(BodyType::from_evolution(Some(Evolution::Evil)), BodyType::Evil);
}

#[test]
fn test_profile_stable_across_frames() {
    let mut cache = ShapeProfileCache::new(7);
    let profile = cache.profile_for(BodyType::Good).clone();
    for _ in 0..100 {
        assert_eq!(*cache.profile_for(BodyType::Good), profile);
    }
    assert_eq!(cache.generations(), 1);
}

#[test]
fn test_evolution_rerolls_profile_once() {
    let mut cache = ShapeProfileCache::new(7);
    cache.profile_for(BodyType::Baby);
    cache.profile_for(BodyType::Baby);
    let evil = cache.profile_for(BodyType::Evil).clone();
    assert_eq!(evil.body_type, BodyType::Evil);
    assert_eq!(evil.tentacles.len(), 3);
    assert_eq!(evil.cracks.len(), 2);
    cache.profile_for(BodyType::Evil);
    assert_eq!(cache.generations(), 2);
}

#[test]
fn test_only_good_has_particles() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(1);
    let frame = AnimationFrame::at(5);

    let good = generate_shape_profile(BodyType::Good, &mut rng);
    let rendered = render_frame(&good, Mood::Normal, false, &frame);
    assert_eq!(circles(&rendered), 8);
    assert!(rendered[..8].iter().all(|p| matches!(p, Primitive::Circle { radius, .. } if *radius == 1.0)));

    // awake evil eyes pulse with one glow circle each
    let evil = generate_shape_profile(BodyType::Evil, &mut rng);
    assert_eq!(circles(&render_frame(&evil, Mood::Normal, false, &frame)), 2);
    assert_eq!(circles(&render_frame(&evil, Mood::Normal, true, &frame)), 0);

    let baby = generate_shape_profile(BodyType::Baby, &mut rng);
    assert_eq!(circles(&render_frame(&baby, Mood::Normal, false, &frame)), 0);
}

#[test]
fn test_sleeping_draws_eyelids() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(2);
    let good = generate_shape_profile(BodyType::Good, &mut rng);
    let asleep = render_frame(&good, Mood::Happy, true, &AnimationFrame::at(0));
    let lids = asleep
        .iter()
        .filter(|p| matches!(p, Primitive::Rect { size, .. } if size.x == 8.0 && size.y == 1.0))
        .count();
    assert_eq!(lids, 2);
}

#[test]
fn test_particles_orbit_with_phase() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(3);
    let good = generate_shape_profile(BodyType::Good, &mut rng);
    let still = AnimationFrame::at(4);
    let moved = AnimationFrame {
        particle_phase: 1.0,
        ..still
    };
    let a = render_frame(&good, Mood::Normal, false, &still);
    let b = render_frame(&good, Mood::Normal, false, &moved);
    assert_ne!(a[0], b[0]);
    assert_eq!(a[8..], b[8..]);
}

#[test]
fn test_primitives_roundtrip_through_ron() {
    let mut rng = Xoshiro256StarStar::seed_from_u64(4);
    let evil = generate_shape_profile(BodyType::Evil, &mut rng);
    let frame = render_frame(&evil, Mood::Sad, false, &AnimationFrame::at(9));
    let text = ron::to_string(&frame).unwrap();
    let back: Vec<Primitive> = ron::from_str(&text).unwrap();
    assert_eq!(frame.len(), back.len());
}
