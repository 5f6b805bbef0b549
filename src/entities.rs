/// All game entity types: pure data, no logic.

// ── Geometry ──────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// RGB colour, each channel in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

// ── Actors ────────────────────────────────────────────────────────────────────

/// Horizontal movement intent set by input, consumed by the frame update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Movement {
    #[default]
    None,
    Left,
    Right,
}

/// A cube-shaped actor (the player or the enemy).
#[derive(Clone, Debug, PartialEq)]
pub struct Cube {
    pub center: Point,
    /// Edge length; used for drawing and for hit/bound tests.
    pub size: f32,
    pub color: Color,
    /// Only meaningful for the enemy: dead enemies are neither drawn,
    /// moved nor hit-tested until the next spawn.
    pub is_alive: bool,
    /// Only meaningful for the player.
    pub movement: Movement,
}

impl Cube {
    pub fn new(center: Point, size: f32, color: Color) -> Self {
        Self {
            center,
            size,
            color,
            is_alive: false,
            movement: Movement::None,
        }
    }

    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }

    pub fn bottom_edge(&self) -> f32 {
        self.center.y - self.half_size()
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver,
}

/// The entire mutable game state. Owned by the driver and handed to the
/// update functions by reference.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Cube,
    pub enemy: Cube,
    pub score: u32,
    pub is_laser_firing: bool,
    pub status: GameStatus,
}

impl GameState {
    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
