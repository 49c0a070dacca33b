//! Tests for geometry, the catalog, attack profiles, and draw geometry.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::catalog::{CatalogError, TowerCatalog};
use crate::components::{AttackProfile, TowerId};
use crate::draw::{self, DrawCommand};
use crate::enums::{HighlightColor, LineCap, TargetingPolicy, TowerKind};
use crate::types::Point;

// ---- Geometry ----

#[test]
fn squared_distance_avoids_root() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.squared_distance_to(&b), 25.0);
    assert_eq!(b.squared_distance_to(&a), 25.0);
    assert_eq!(a.squared_distance_to(&a), 0.0);
}

#[test]
fn angle_to_straight_right_is_zero() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(30.0, 0.0);
    assert_eq!(a.angle_to(&b), 0.0);
}

#[test]
fn angle_to_straight_left_is_pi() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(-10.0, 0.0);
    assert_eq!(a.angle_to(&b), PI);
}

#[test]
fn angle_to_vertical_below_is_half_pi() {
    let a = Point::new(5.0, 5.0);
    let b = Point::new(5.0, 20.0);
    assert_eq!(a.angle_to(&b), FRAC_PI_2);
}

#[test]
fn angle_to_vertical_above_is_three_half_pi() {
    let a = Point::new(5.0, 5.0);
    let b = Point::new(5.0, -20.0);
    assert_eq!(a.angle_to(&b), 3.0 * FRAC_PI_2);
}

#[test]
fn angle_to_identical_points_is_three_half_pi() {
    let p = Point::new(7.0, -3.0);
    assert_eq!(p.angle_to(&p), 3.0 * FRAC_PI_2);
}

#[test]
fn angle_to_uses_inverted_slope_in_right_half_plane() {
    // Down-right on screen comes out as +π/4, not -π/4: the slope is
    // measured with y inverted. The quadrant convention is part of the
    // firing contract.
    let a = Point::new(0.0, 0.0);
    let b = Point::new(10.0, 10.0);
    assert!((a.angle_to(&b) - FRAC_PI_4).abs() < 1e-12);
}

#[test]
fn angle_to_left_half_plane_adds_pi() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(-10.0, 10.0);
    // atan((0 - 10) / (0 + 10)) = -π/4, plus π.
    assert!((a.angle_to(&b) - 3.0 * FRAC_PI_4).abs() < 1e-12);
}

// ---- Catalog ----

#[test]
fn standard_catalog_lists_kinds_in_registration_order() {
    let catalog = TowerCatalog::standard();
    let kinds: Vec<TowerKind> = catalog.kinds().collect();
    assert_eq!(
        kinds,
        vec![
            TowerKind::Shoot,
            TowerKind::Bomb,
            TowerKind::Laser,
            TowerKind::Monkey,
            TowerKind::Sniper,
            TowerKind::Missile,
        ]
    );
    assert_eq!(catalog.len(), 6);
}

#[test]
fn catalog_range_and_price_match_profiles() {
    let catalog = TowerCatalog::standard();
    assert_eq!(catalog.range(TowerKind::Shoot).unwrap(), 80.0);
    assert_eq!(catalog.range(TowerKind::Bomb).unwrap(), 45.0);
    assert_eq!(catalog.range(TowerKind::Laser).unwrap(), 60.0);
    assert_eq!(catalog.range(TowerKind::Monkey).unwrap(), 60.0);
    assert_eq!(catalog.range(TowerKind::Sniper).unwrap(), 300.0);
    assert_eq!(catalog.range(TowerKind::Missile).unwrap(), 110.0);

    assert_eq!(catalog.base_price(TowerKind::Shoot).unwrap(), 200);
    assert_eq!(catalog.base_price(TowerKind::Bomb).unwrap(), 400);
    assert_eq!(catalog.base_price(TowerKind::Laser).unwrap(), 600);
    assert_eq!(catalog.base_price(TowerKind::Monkey).unwrap(), 1000);
    assert_eq!(catalog.base_price(TowerKind::Sniper).unwrap(), 1000);
    assert_eq!(catalog.base_price(TowerKind::Missile).unwrap(), 1000);
}

#[test]
fn instantiate_roundtrip_matches_static_queries() {
    let catalog = TowerCatalog::standard();
    for (i, kind) in catalog.kinds().collect::<Vec<_>>().into_iter().enumerate() {
        let (pos, tower) = catalog
            .instantiate(kind, TowerId(i as u32), 12.0, 34.0)
            .unwrap();
        assert_eq!(pos, Point::new(12.0, 34.0));
        assert_eq!(tower.kind, kind);
        assert_eq!(tower.attack.range, catalog.range(kind).unwrap());
        assert_eq!(tower.theta, 0.0);
        assert_eq!(tower.cooldown_remaining, 0);
        assert_eq!(tower.targeting, TargetingPolicy::Close);
        assert!(tower.current_target.is_none());
    }
}

#[test]
fn instantiate_fire_rates_match_documented_constants() {
    let catalog = TowerCatalog::standard();
    let expect = [
        (TowerKind::Shoot, 25),
        (TowerKind::Bomb, 60),
        (TowerKind::Laser, 15),
        (TowerKind::Monkey, 2),
        (TowerKind::Sniper, 45),
        (TowerKind::Missile, 30),
    ];
    for (kind, fire_rate) in expect {
        let (_, tower) = catalog.instantiate(kind, TowerId(0), 0.0, 0.0).unwrap();
        assert_eq!(tower.attack.fire_rate, fire_rate, "{kind:?}");
    }
}

#[test]
fn partial_catalog_fails_loudly_on_unknown_kind() {
    let mut catalog = TowerCatalog::new();
    catalog.register(TowerKind::Shoot, 200);

    assert_eq!(
        catalog.range(TowerKind::Bomb),
        Err(CatalogError::UnknownKind(TowerKind::Bomb))
    );
    assert!(catalog
        .instantiate(TowerKind::Laser, TowerId(0), 0.0, 0.0)
        .is_err());
    assert_eq!(catalog.range(TowerKind::Shoot).unwrap(), 80.0);
}

#[test]
fn reregistering_keeps_listing_position() {
    let mut catalog = TowerCatalog::new();
    catalog.register(TowerKind::Shoot, 200);
    catalog.register(TowerKind::Bomb, 400);
    catalog.register(TowerKind::Shoot, 250);

    let kinds: Vec<TowerKind> = catalog.kinds().collect();
    assert_eq!(kinds, vec![TowerKind::Shoot, TowerKind::Bomb]);
    assert_eq!(catalog.base_price(TowerKind::Shoot).unwrap(), 250);
}

// ---- Attack profiles ----

#[test]
fn beam_kinds_carry_no_projectile_payload() {
    let catalog = TowerCatalog::standard();
    for kind in [TowerKind::Laser, TowerKind::Sniper] {
        let (_, tower) = catalog.instantiate(kind, TowerId(0), 0.0, 0.0).unwrap();
        assert_eq!(tower.attack.projectile_speed, 0.0);
        assert_eq!(tower.attack.projectile_pierce, 0);
        assert_eq!(tower.attack.projectile_lifespan, 0);
        assert_eq!(tower.attack.explosion_size, 0.0);
    }
}

#[test]
fn area_kinds_carry_explosion_size() {
    let catalog = TowerCatalog::standard();
    let (_, bomb) = catalog
        .instantiate(TowerKind::Bomb, TowerId(0), 0.0, 0.0)
        .unwrap();
    let (_, missile) = catalog
        .instantiate(TowerKind::Missile, TowerId(1), 0.0, 0.0)
        .unwrap();
    assert_eq!(bomb.attack.explosion_size, 30.0);
    assert_eq!(missile.attack.explosion_size, 40.0);
}

#[test]
fn default_profile_matches_base_tower() {
    let profile = AttackProfile::default();
    assert_eq!(profile.range, 50.0);
    assert_eq!(profile.fire_rate, 10);
    assert_eq!(profile.projectile_damage, 0);
}

// ---- Draw geometry ----

#[test]
fn tower_body_is_two_arrows_and_a_circle() {
    let at = Point::new(1.0, 2.0);
    for kind in TowerCatalog::standard().kinds() {
        let commands = draw::tower_body(kind, at, 0.5, HighlightColor::Solid);
        assert_eq!(commands.len(), 3, "{kind:?}");
        assert!(matches!(commands[0], DrawCommand::Arrow { .. }));
        assert!(matches!(commands[1], DrawCommand::Arrow { .. }));
        match commands[2] {
            DrawCommand::StrokeCircle { radius, .. } => assert_eq!(radius, 5.0),
            _ => panic!("expected body circle"),
        }
    }
}

#[test]
fn sniper_barrel_is_longest() {
    let at = Point::default();
    let barrel_length = |kind| {
        match draw::tower_body(kind, at, 0.0, HighlightColor::Solid)[0] {
            DrawCommand::Arrow { length, .. } => length,
            _ => panic!("expected arrow"),
        }
    };
    assert_eq!(barrel_length(TowerKind::Sniper), 12.0);
    assert!(barrel_length(TowerKind::Sniper) > barrel_length(TowerKind::Shoot));
    assert!(barrel_length(TowerKind::Monkey) < barrel_length(TowerKind::Shoot));
}

#[test]
fn area_kinds_have_round_capped_rear_head() {
    let at = Point::default();
    for kind in [TowerKind::Bomb, TowerKind::Missile] {
        match draw::tower_body(kind, at, 0.0, HighlightColor::Solid)[1] {
            DrawCommand::Arrow { head, width, head_cap, .. } => {
                assert_eq!(head, 2.0);
                assert_eq!(width, 5.0);
                assert_eq!(head_cap, LineCap::Round);
            }
            _ => panic!("expected arrow"),
        }
    }
}

#[test]
fn range_ring_uses_highlight_color_and_range_radius() {
    match draw::range_ring(Point::new(3.0, 4.0), 80.0) {
        DrawCommand::StrokeCircle { at, radius, color, .. } => {
            assert_eq!(at, Point::new(3.0, 4.0));
            assert_eq!(radius, 80.0);
            assert_eq!(color, HighlightColor::UltraBright);
        }
        _ => panic!("expected circle"),
    }
}
