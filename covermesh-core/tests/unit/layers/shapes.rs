use super::*;

fn default_config() -> CoverConfig {
    CoverConfig::default()
}

#[test]
fn stripe_layer_stays_in_drawn_ranges() {
    let cfg = default_config();
    let half_span = f64::from(cfg.height) / 1.8;
    for seed in 0..200 {
        let mut rng = Rng64::new(seed);
        let layer = StripeLayer::draw(&cfg, &mut rng);
        assert!((0.0..=360.0).contains(&layer.rotation_deg));
        assert!((3..=5).contains(&layer.bands.len()));
        assert_eq!(layer.length, 1200f64.hypot(630.0) * 1.5);
        for band in &layer.bands {
            assert!((25.0..=55.0).contains(&band.thickness));
            assert!(band.offset.abs() <= half_span);
        }
    }
}

#[test]
fn hero_is_anchored_near_center() {
    let cfg = default_config();
    for seed in 0..200 {
        let mut rng = Rng64::new(seed);
        let cluster = CircleCluster::draw(&cfg, &mut rng);
        assert!((cluster.hero.center.x - 600.0).abs() <= 40.0);
        assert!((cluster.hero.center.y - 315.0).abs() <= 20.0);
        assert!((220.0..=260.0).contains(&cluster.hero.radius));
    }
}

#[test]
fn satellites_respect_cap_bounds_and_clearance() {
    let cfg = default_config();
    for seed in 0..500 {
        let mut rng = Rng64::new(seed);
        let cluster = CircleCluster::draw(&cfg, &mut rng);
        assert!(cluster.satellites.len() <= MAX_SATELLITES);

        for (i, sat) in cluster.satellites.iter().enumerate() {
            assert!((50.0..=100.0).contains(&sat.radius));
            assert!(sat.center.x - sat.radius >= 0.0);
            assert!(sat.center.y - sat.radius >= 0.0);
            assert!(sat.center.x + sat.radius <= f64::from(cfg.width));
            assert!(sat.center.y + sat.radius <= f64::from(cfg.height));

            let hero_dist = sat.center.distance(cluster.hero.center);
            assert!(hero_dist >= sat.radius + cluster.hero.radius + CIRCLE_GAP);

            for other in &cluster.satellites[i + 1..] {
                let d = sat.center.distance(other.center);
                assert!(d >= sat.radius + other.radius + CIRCLE_GAP);
            }
        }
    }
}

#[test]
fn placement_is_deterministic() {
    let cfg = default_config();
    let a = CircleCluster::draw(&cfg, &mut Rng64::new(42));
    let b = CircleCluster::draw(&cfg, &mut Rng64::new(42));
    assert_eq!(a.hero.center, b.hero.center);
    assert_eq!(a.hero.radius, b.hero.radius);
    assert_eq!(a.satellites.len(), b.satellites.len());
    for (sa, sb) in a.satellites.iter().zip(&b.satellites) {
        assert_eq!(sa.center, sb.center);
        assert_eq!(sa.radius, sb.radius);
    }
}

#[test]
fn tiny_canvas_places_no_out_of_bounds_satellites() {
    // On a 120-unit canvas larger candidates cannot fit at all and smaller
    // ones always collide with the hero, so nothing is accepted.
    let cfg = CoverConfig::new(120, 120, "#FFFFFF", 45.0).unwrap();
    let mut rng = Rng64::new(9);
    let cluster = CircleCluster::draw(&cfg, &mut rng);
    assert!(cluster.satellites.is_empty());
}
