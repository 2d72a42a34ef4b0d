//! Scene contents and their per-frame animation laws.
//!
//! Everything here is pure data + math (glam and an injected RNG), so the
//! native tests can build scenes deterministically and step them without a
//! browser. The web layer owns the canvases and feeds the tessellated line
//! segments to the GPU.

use glam::{EulerRot, Mat4, Vec3, Vec4};
use rand::prelude::*;

use super::constants::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    /// Floating random wireframe solids with a sinusoidal bob.
    Hero,
    /// Double helix of two interleaved line strips.
    Helix,
    /// Floating flat wireframe panels.
    Gallery,
    /// Falling-and-recycling particle spheres.
    Particles,
    /// Bar chart with a hue sweep keyed by index.
    Bars,
    /// Random wireframe tori.
    Torus,
}

/// A wireframe object: local-space line segments plus a transform.
#[derive(Clone, Debug)]
pub struct WireMesh {
    pub segments: Vec<[Vec3; 2]>,
    pub color: Vec4,
    pub position: Vec3,
    /// Euler XYZ rotation in radians.
    pub rotation: Vec3,
}

impl WireMesh {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// A visual point with a single vertical velocity. Not a physical model:
/// no collision, no horizontal motion, recycled forever.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub velocity_y: f32,
}

pub struct SceneContents {
    pub kind: SceneKind,
    pub meshes: Vec<WireMesh>,
    pub particles: Vec<Particle>,
    /// Shared local-space wire for every particle (empty for other kinds).
    pub particle_template: Vec<[Vec3; 2]>,
}

impl SceneContents {
    pub fn build(kind: SceneKind, rng: &mut impl Rng) -> Self {
        match kind {
            SceneKind::Hero => hero_contents(rng),
            SceneKind::Helix => helix_contents(),
            SceneKind::Gallery => gallery_contents(rng),
            SceneKind::Particles => particle_contents(rng),
            SceneKind::Bars => bar_contents(rng),
            SceneKind::Torus => torus_contents(rng),
        }
    }

    /// Advance one display-refresh step. `elapsed_sec` drives the hero bob.
    pub fn step(&mut self, elapsed_sec: f32) {
        match self.kind {
            SceneKind::Helix => {
                // Both strands spin together about Y at the base rate.
                for m in &mut self.meshes {
                    m.rotation.y += SPIN_RATE;
                }
            }
            SceneKind::Particles => {
                for p in &mut self.particles {
                    p.position.y += p.velocity_y;
                    p.velocity_y -= PARTICLE_GRAVITY;
                    if p.position.y < PARTICLE_FLOOR_Y {
                        p.position.y = PARTICLE_RESET_Y;
                        p.velocity_y = 0.0;
                    }
                }
            }
            _ => {
                for (i, m) in self.meshes.iter_mut().enumerate() {
                    let rate = SPIN_RATE * (i as f32 + 1.0);
                    m.rotation.x += rate;
                    m.rotation.y += rate;
                    if self.kind == SceneKind::Hero {
                        m.position.y += (elapsed_sec + i as f32).sin() * HERO_BOB_AMPLITUDE;
                    }
                }
            }
        }
    }

    /// Total line-list vertex count; fixed for the lifetime of the scene.
    pub fn line_vertex_count(&self) -> usize {
        let mesh_verts: usize = self.meshes.iter().map(|m| m.segments.len() * 2).sum();
        mesh_verts + self.particles.len() * self.particle_template.len() * 2
    }

    /// Walk every world-space line segment with its color.
    pub fn for_each_world_segment(&self, mut f: impl FnMut(Vec3, Vec3, Vec4)) {
        for m in &self.meshes {
            let model = m.model_matrix();
            for seg in &m.segments {
                f(
                    model.transform_point3(seg[0]),
                    model.transform_point3(seg[1]),
                    m.color,
                );
            }
        }
        let color = Vec4::from((Vec3::from(PALETTE_PINK), 0.8));
        for p in &self.particles {
            for seg in &self.particle_template {
                f(seg[0] + p.position, seg[1] + p.position, color);
            }
        }
    }
}

// ---------------- builders ----------------

fn hero_contents(rng: &mut impl Rng) -> SceneContents {
    let palette = [PALETTE_INDIGO, PALETTE_PURPLE, PALETTE_PINK];
    let meshes = (0..HERO_MESH_COUNT)
        .map(|_| {
            let segments = match rng.gen_range(0..4) {
                0 => box_wire(1.0, 1.0, 1.0),
                1 => sphere_wire(0.5, 6, 12),
                2 => torus_wire(0.5, 0.2, 8, 16),
                _ => octahedron_wire(0.5),
            };
            let rgb = palette[rng.gen_range(0..palette.len())];
            WireMesh {
                segments,
                color: Vec4::from((Vec3::from(rgb), 0.8)),
                position: Vec3::new(
                    (rng.gen::<f32>() - 0.5) * 8.0,
                    (rng.gen::<f32>() - 0.5) * 8.0,
                    (rng.gen::<f32>() - 0.5) * 8.0,
                ),
                rotation: Vec3::new(
                    rng.gen::<f32>() * std::f32::consts::PI,
                    rng.gen::<f32>() * std::f32::consts::PI,
                    rng.gen::<f32>() * std::f32::consts::PI,
                ),
            }
        })
        .collect();
    SceneContents {
        kind: SceneKind::Hero,
        meshes,
        particles: Vec::new(),
        particle_template: Vec::new(),
    }
}

fn helix_contents() -> SceneContents {
    let strand = |phase: f32, rgb: [f32; 3]| WireMesh {
        segments: polyline_segments(&helix_strand_points(phase)),
        color: Vec4::from((Vec3::from(rgb), 0.8)),
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };
    SceneContents {
        kind: SceneKind::Helix,
        meshes: vec![
            strand(0.0, PALETTE_INDIGO),
            strand(std::f32::consts::PI, PALETTE_PURPLE),
        ],
        particles: Vec::new(),
        particle_template: Vec::new(),
    }
}

fn gallery_contents(rng: &mut impl Rng) -> SceneContents {
    let meshes = (0..GALLERY_PANEL_COUNT)
        .map(|_| WireMesh {
            segments: plane_wire(1.0, 1.0),
            color: Vec4::from((Vec3::from(PALETTE_INDIGO), 0.6)),
            position: Vec3::new(
                (rng.gen::<f32>() - 0.5) * 4.0,
                (rng.gen::<f32>() - 0.5) * 4.0,
                (rng.gen::<f32>() - 0.5) * 4.0,
            ),
            rotation: Vec3::ZERO,
        })
        .collect();
    SceneContents {
        kind: SceneKind::Gallery,
        meshes,
        particles: Vec::new(),
        particle_template: Vec::new(),
    }
}

fn particle_contents(rng: &mut impl Rng) -> SceneContents {
    let particles = (0..PARTICLE_COUNT)
        .map(|_| Particle {
            position: Vec3::new(
                (rng.gen::<f32>() - 0.5) * 4.0,
                (rng.gen::<f32>() - 0.5) * 4.0,
                (rng.gen::<f32>() - 0.5) * 4.0,
            ),
            velocity_y: rng.gen::<f32>() * PARTICLE_SEED_VELOCITY_SPAN
                - PARTICLE_SEED_VELOCITY_SPAN / 2.0,
        })
        .collect();
    SceneContents {
        kind: SceneKind::Particles,
        meshes: Vec::new(),
        particles,
        particle_template: sphere_wire(0.05, 3, 6),
    }
}

fn bar_contents(rng: &mut impl Rng) -> SceneContents {
    let meshes = (0..BAR_COUNT)
        .map(|i| {
            let height = rng.gen::<f32>() * 2.0 + 0.5;
            WireMesh {
                segments: box_wire(0.3, height, 0.3),
                color: Vec4::from((
                    Vec3::from(hsl_to_rgb(i as f32 / BAR_COUNT as f32, 0.8, 0.6)),
                    0.8,
                )),
                position: Vec3::new((i as f32 - 2.0) * 0.8, height / 2.0, 0.0),
                rotation: Vec3::ZERO,
            }
        })
        .collect();
    SceneContents {
        kind: SceneKind::Bars,
        meshes,
        particles: Vec::new(),
        particle_template: Vec::new(),
    }
}

fn torus_contents(rng: &mut impl Rng) -> SceneContents {
    let meshes = (0..TORUS_COUNT)
        .map(|_| WireMesh {
            segments: torus_wire(0.3, 0.1, 6, 12),
            color: Vec4::from((Vec3::from(PALETTE_PURPLE), 0.6)),
            position: Vec3::new(
                (rng.gen::<f32>() - 0.5) * 3.0,
                (rng.gen::<f32>() - 0.5) * 3.0,
                (rng.gen::<f32>() - 0.5) * 3.0,
            ),
            rotation: Vec3::ZERO,
        })
        .collect();
    SceneContents {
        kind: SceneKind::Torus,
        meshes,
        particles: Vec::new(),
        particle_template: Vec::new(),
    }
}

// ---------------- wireframe generators ----------------

pub fn box_wire(w: f32, h: f32, d: f32) -> Vec<[Vec3; 2]> {
    let (x, y, z) = (w / 2.0, h / 2.0, d / 2.0);
    let c = [
        Vec3::new(-x, -y, -z),
        Vec3::new(x, -y, -z),
        Vec3::new(x, y, -z),
        Vec3::new(-x, y, -z),
        Vec3::new(-x, -y, z),
        Vec3::new(x, -y, z),
        Vec3::new(x, y, z),
        Vec3::new(-x, y, z),
    ];
    vec![
        [c[0], c[1]],
        [c[1], c[2]],
        [c[2], c[3]],
        [c[3], c[0]],
        [c[4], c[5]],
        [c[5], c[6]],
        [c[6], c[7]],
        [c[7], c[4]],
        [c[0], c[4]],
        [c[1], c[5]],
        [c[2], c[6]],
        [c[3], c[7]],
    ]
}

/// Latitude rings plus meridians, enough to read as a sphere in wireframe.
pub fn sphere_wire(radius: f32, rings: usize, segments: usize) -> Vec<[Vec3; 2]> {
    let mut out = Vec::new();
    let point = |ring: usize, seg: usize| {
        let phi = std::f32::consts::PI * ring as f32 / rings as f32;
        let theta = std::f32::consts::TAU * seg as f32 / segments as f32;
        Vec3::new(
            radius * phi.sin() * theta.cos(),
            radius * phi.cos(),
            radius * phi.sin() * theta.sin(),
        )
    };
    for ring in 1..rings {
        for seg in 0..segments {
            out.push([point(ring, seg), point(ring, seg + 1)]);
        }
    }
    for seg in 0..segments {
        for ring in 0..rings {
            out.push([point(ring, seg), point(ring + 1, seg)]);
        }
    }
    out
}

pub fn torus_wire(
    radius: f32,
    tube: f32,
    radial_segments: usize,
    tubular_segments: usize,
) -> Vec<[Vec3; 2]> {
    let point = |i: usize, j: usize| {
        let u = std::f32::consts::TAU * j as f32 / tubular_segments as f32;
        let v = std::f32::consts::TAU * i as f32 / radial_segments as f32;
        Vec3::new(
            (radius + tube * v.cos()) * u.cos(),
            tube * v.sin(),
            (radius + tube * v.cos()) * u.sin(),
        )
    };
    let mut out = Vec::new();
    for i in 0..radial_segments {
        for j in 0..tubular_segments {
            out.push([point(i, j), point(i, j + 1)]);
            out.push([point(i, j), point(i + 1, j)]);
        }
    }
    out
}

pub fn octahedron_wire(radius: f32) -> Vec<[Vec3; 2]> {
    let v = [
        Vec3::new(radius, 0.0, 0.0),
        Vec3::new(-radius, 0.0, 0.0),
        Vec3::new(0.0, radius, 0.0),
        Vec3::new(0.0, -radius, 0.0),
        Vec3::new(0.0, 0.0, radius),
        Vec3::new(0.0, 0.0, -radius),
    ];
    vec![
        [v[0], v[2]],
        [v[0], v[3]],
        [v[0], v[4]],
        [v[0], v[5]],
        [v[1], v[2]],
        [v[1], v[3]],
        [v[1], v[4]],
        [v[1], v[5]],
        [v[2], v[4]],
        [v[4], v[3]],
        [v[3], v[5]],
        [v[5], v[2]],
    ]
}

pub fn plane_wire(w: f32, h: f32) -> Vec<[Vec3; 2]> {
    let (x, y) = (w / 2.0, h / 2.0);
    let c = [
        Vec3::new(-x, -y, 0.0),
        Vec3::new(x, -y, 0.0),
        Vec3::new(x, y, 0.0),
        Vec3::new(-x, y, 0.0),
    ];
    vec![[c[0], c[1]], [c[1], c[2]], [c[2], c[3]], [c[3], c[0]]]
}

/// One helix strand: HELIX_SEGMENTS + 1 samples of a parametric curve,
/// `phase` offsets the second strand by half a turn.
pub fn helix_strand_points(phase: f32) -> Vec<Vec3> {
    (0..=HELIX_SEGMENTS)
        .map(|i| {
            let t = i as f32 / HELIX_SEGMENTS as f32;
            let angle = t * HELIX_TURNS * std::f32::consts::TAU + phase;
            Vec3::new(
                angle.cos() * HELIX_RADIUS,
                (t - 0.5) * HELIX_HEIGHT,
                angle.sin() * HELIX_RADIUS,
            )
        })
        .collect()
}

pub fn polyline_segments(points: &[Vec3]) -> Vec<[Vec3; 2]> {
    points.windows(2).map(|w| [w[0], w[1]]).collect()
}

/// Hue sweep color for the bar chart, h/s/l in [0, 1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (h.rem_euclid(1.0)) * 6.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [r + m, g + m, b + m]
}
