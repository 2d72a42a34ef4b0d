// Host-side tests for scene contents and their animation laws.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/scene.rs"]
mod scene;

use constants::*;
use rand::prelude::*;
use scene::*;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn object_counts_are_fixed_at_construction() {
    let mut r = rng();
    assert_eq!(
        SceneContents::build(SceneKind::Hero, &mut r).meshes.len(),
        HERO_MESH_COUNT
    );
    assert_eq!(SceneContents::build(SceneKind::Helix, &mut r).meshes.len(), 2);
    assert_eq!(
        SceneContents::build(SceneKind::Gallery, &mut r).meshes.len(),
        GALLERY_PANEL_COUNT
    );
    let particles = SceneContents::build(SceneKind::Particles, &mut r);
    assert_eq!(particles.particles.len(), PARTICLE_COUNT);
    assert!(!particles.particle_template.is_empty());
    assert_eq!(
        SceneContents::build(SceneKind::Bars, &mut r).meshes.len(),
        BAR_COUNT
    );
    assert_eq!(
        SceneContents::build(SceneKind::Torus, &mut r).meshes.len(),
        TORUS_COUNT
    );
}

#[test]
fn vertex_count_never_changes_while_stepping() {
    for kind in [
        SceneKind::Hero,
        SceneKind::Helix,
        SceneKind::Gallery,
        SceneKind::Particles,
        SceneKind::Bars,
        SceneKind::Torus,
    ] {
        let mut r = rng();
        let mut contents = SceneContents::build(kind, &mut r);
        let before = contents.line_vertex_count();
        assert!(before > 0, "{kind:?} produced no geometry");
        for frame in 0..300 {
            contents.step(frame as f32 / 60.0);
        }
        assert_eq!(contents.line_vertex_count(), before, "{kind:?} count drifted");
    }
}

#[test]
fn particles_below_floor_reset_on_next_step() {
    let mut r = rng();
    let mut contents = SceneContents::build(SceneKind::Particles, &mut r);
    // Force one particle well past the floor with downward velocity.
    contents.particles[0].position.y = PARTICLE_FLOOR_Y - 0.5;
    contents.particles[0].velocity_y = -0.3;
    contents.step(0.0);
    assert_eq!(contents.particles[0].position.y, PARTICLE_RESET_Y);
    assert_eq!(contents.particles[0].velocity_y, 0.0);
}

#[test]
fn particles_never_fall_unboundedly() {
    let mut r = rng();
    let mut contents = SceneContents::build(SceneKind::Particles, &mut r);
    for frame in 0..2000 {
        contents.step(frame as f32 / 60.0);
        for (i, p) in contents.particles.iter().enumerate() {
            assert!(
                p.position.y >= PARTICLE_FLOOR_Y,
                "particle {i} escaped below the floor at frame {frame}: {}",
                p.position.y
            );
        }
    }
}

#[test]
fn rotation_advances_proportionally_to_index() {
    let mut r = rng();
    let mut contents = SceneContents::build(SceneKind::Bars, &mut r);
    contents.step(0.0);
    for (i, m) in contents.meshes.iter().enumerate() {
        let expected = SPIN_RATE * (i as f32 + 1.0);
        assert!((m.rotation.x - expected).abs() < 1e-6);
        assert!((m.rotation.y - expected).abs() < 1e-6);
    }
}

#[test]
fn helix_strands_spin_together_about_y_only() {
    let mut r = rng();
    let mut contents = SceneContents::build(SceneKind::Helix, &mut r);
    for frame in 0..10 {
        contents.step(frame as f32 / 60.0);
    }
    for m in &contents.meshes {
        assert_eq!(m.rotation.x, 0.0);
        assert!((m.rotation.y - SPIN_RATE * 10.0).abs() < 1e-6);
    }
    let [a, b] = [&contents.meshes[0], &contents.meshes[1]];
    assert!((a.rotation.y - b.rotation.y).abs() < 1e-6);
}

#[test]
fn hero_bob_moves_at_most_the_amplitude_per_frame() {
    let mut r = rng();
    let mut contents = SceneContents::build(SceneKind::Hero, &mut r);
    let before: Vec<_> = contents.meshes.iter().map(|m| m.position).collect();
    contents.step(1.234);
    for (i, m) in contents.meshes.iter().enumerate() {
        let delta = (m.position.y - before[i].y).abs();
        assert!(delta <= HERO_BOB_AMPLITUDE + 1e-6, "mesh {i} bobbed {delta}");
        assert_eq!(m.position.x, before[i].x, "mesh {i} drifted laterally");
        assert_eq!(m.position.z, before[i].z, "mesh {i} drifted in depth");
    }
}

#[test]
fn helix_second_strand_is_half_a_turn_out_of_phase() {
    let a = helix_strand_points(0.0);
    let b = helix_strand_points(std::f32::consts::PI);
    assert_eq!(a.len(), HELIX_SEGMENTS + 1);
    assert_eq!(b.len(), HELIX_SEGMENTS + 1);
    for (p, q) in a.iter().zip(b.iter()) {
        assert!((q.x + p.x).abs() < 1e-4, "x not mirrored: {p:?} vs {q:?}");
        assert!((q.z + p.z).abs() < 1e-4, "z not mirrored: {p:?} vs {q:?}");
        assert!((q.y - p.y).abs() < 1e-6, "heights diverge: {p:?} vs {q:?}");
    }
}

#[test]
fn bars_are_evenly_spaced_and_sit_on_the_ground() {
    let mut r = rng();
    let contents = SceneContents::build(SceneKind::Bars, &mut r);
    for (i, m) in contents.meshes.iter().enumerate() {
        let expected_x = (i as f32 - 2.0) * 0.8;
        assert!((m.position.x - expected_x).abs() < 1e-6);
        // position.y is half the bar height, so height stays in [0.5, 2.5]
        let height = m.position.y * 2.0;
        assert!((0.5..=2.5).contains(&height), "bar {i} height {height}");
    }
}

#[test]
fn bar_colors_sweep_distinct_hues() {
    let mut r = rng();
    let contents = SceneContents::build(SceneKind::Bars, &mut r);
    for i in 0..contents.meshes.len() {
        for j in (i + 1)..contents.meshes.len() {
            let a = contents.meshes[i].color;
            let b = contents.meshes[j].color;
            assert!(
                (a - b).length() > 1e-3,
                "bars {i} and {j} share a color: {a:?}"
            );
        }
    }
}

#[test]
fn wire_generators_have_expected_edge_counts() {
    assert_eq!(box_wire(1.0, 1.0, 1.0).len(), 12);
    assert_eq!(octahedron_wire(0.5).len(), 12);
    assert_eq!(plane_wire(1.0, 1.0).len(), 4);
    let pts = helix_strand_points(0.0);
    assert_eq!(polyline_segments(&pts).len(), HELIX_SEGMENTS);
}

#[test]
fn world_segments_visit_every_vertex_once() {
    let mut r = rng();
    let contents = SceneContents::build(SceneKind::Gallery, &mut r);
    let mut visited = 0usize;
    contents.for_each_world_segment(|_, _, _| visited += 2);
    assert_eq!(visited, contents.line_vertex_count());
}

#[test]
fn hsl_primaries_round_trip() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-6 && red[1].abs() < 1e-6 && red[2].abs() < 1e-6);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    assert!(green[1] > 0.99 && green[0] < 0.01 && green[2] < 0.01);
    let gray = hsl_to_rgb(0.5, 0.0, 0.5);
    assert!((gray[0] - 0.5).abs() < 1e-6 && (gray[1] - 0.5).abs() < 1e-6);
}
