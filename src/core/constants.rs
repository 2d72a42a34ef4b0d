// Shared layout/animation tuning constants for the scene and interaction layers.

// Canvas sizing (CSS pixels, fixed per the page layout)
pub const HERO_CANVAS_SIZE: u32 = 400;
pub const PROJECT_CANVAS_WIDTH: u32 = 300;
pub const PROJECT_CANVAS_HEIGHT: u32 = 200;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const HERO_CAMERA_Z: f32 = 5.0;
pub const ABOUT_CAMERA_Z: f32 = 8.0;
pub const PROJECT_CAMERA_Z: f32 = 5.0;

// Object counts, fixed at construction
pub const HERO_MESH_COUNT: usize = 8;
pub const HELIX_SEGMENTS: usize = 50; // sampled at segments + 1 points
pub const GALLERY_PANEL_COUNT: usize = 6;
pub const PARTICLE_COUNT: usize = 50;
pub const BAR_COUNT: usize = 5;
pub const TORUS_COUNT: usize = 8;

// Helix geometry
pub const HELIX_RADIUS: f32 = 2.0;
pub const HELIX_HEIGHT: f32 = 4.0;
pub const HELIX_TURNS: f32 = 2.0; // angle sweep = turns * 2π

// Per-frame animation rates (per display refresh, matching the page's feel)
pub const SPIN_RATE: f32 = 0.01; // radians per frame, scaled by (index + 1)
pub const HERO_BOB_AMPLITUDE: f32 = 0.01;
pub const PARTICLE_GRAVITY: f32 = 0.01; // velocity drop per frame
pub const PARTICLE_FLOOR_Y: f32 = -2.0;
pub const PARTICLE_RESET_Y: f32 = 2.0;
pub const PARTICLE_SEED_VELOCITY_SPAN: f32 = 0.02; // seeded in [-span/2, +span/2)

// Shared palette (matches the page theme)
pub const PALETTE_INDIGO: [f32; 3] = [0.4, 0.494, 0.918]; // #667eea
pub const PALETTE_PURPLE: [f32; 3] = [0.463, 0.294, 0.635]; // #764ba2
pub const PALETTE_PINK: [f32; 3] = [0.941, 0.576, 0.984]; // #f093fb

// Navigation
pub const NAV_SECTION_LOOKAHEAD_PX: f64 = 200.0;

// Entrance transitions
pub const ENTRANCE_START_FRACTION: f64 = 0.8; // trigger top vs viewport height

// Secondary effects
pub const PARALLAX_FACTOR: f64 = 0.5;
pub const TILT_MAX_DEG: f32 = 5.0;
pub const TYPEWRITER_START_DELAY_MS: i32 = 1000;
pub const TYPEWRITER_INTERVAL_MS: i32 = 100;
pub const CARD_HOVER_SCALE: f32 = 1.05;
pub const SKILL_HOVER_SCALE: f32 = 1.1;
pub const HOVER_DURATION_MS: u32 = 300;

// Window resize handling
pub const RESIZE_DEBOUNCE_MS: i32 = 250;
