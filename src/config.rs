/// World constants and the values derived from them.
///
/// Everything here is compiled in; `GameConfig::validate` exists so a bad
/// edit to a constant fails at start-up instead of producing a broken game.

use crate::entities::{Color, Point};
use crate::error::ConfigError;

pub mod consts {
    use crate::entities::{Color, Point};

    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;
    pub const CANVAS_TITLE: &str = "Blaster Game";

    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);
    /// Plane on which every actor's centre lies.
    pub const Z_PLANE: f32 = -15.0;

    pub const FRAMES_PER_SECOND: u32 = 30;

    pub const PLAYER_SIZE: f32 = 25.0;
    pub const ENEMY_SIZE: f32 = 25.0;

    pub const BG_COLOR: Color = Color::new(1.0, 1.0, 1.0);
    pub const PLAYER_COLOR: Color = Color::new(0.0, 0.0, 0.0);
    pub const ENEMY_COLOR: Color = Color::new(0.9, 0.1, 0.1);

    /// Spawn interval bounds in milliseconds (inclusive).
    pub const ENEMY_MIN_TIME_MS: u64 = 2750;
    pub const ENEMY_MAX_TIME_MS: u64 = 3500;

    /// Seconds for an enemy to travel the full canvas height.
    pub const ENEMY_TOTAL_TIME: f32 = 2.5;
    /// Seconds for the player to travel the full canvas width.
    pub const PLAYER_TOTAL_TIME: f32 = 0.75;

    pub const LASER_DURATION_MS: u64 = 150;
    /// World y at which the laser beam ends.
    pub const LASER_TOP: f32 = 200.0;

    pub const SCOREBOARD_ANCHOR: Point = Point::new(125.0, 180.0, Z_PLANE + 15.0);
    pub const GAME_OVER_ANCHOR: Point = Point::new(-80.0, 0.0, Z_PLANE + 15.0);
    pub const GAME_OVER_MESSAGE: &str = "Too Bad! You Lost...";
    pub const GAME_OVER_BG_COLOR: Color = Color::new(1.0, 1.0, 1.0);
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub origin: Point,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub title: &'static str,
    pub z_plane: f32,
    pub frames_per_second: u32,

    pub player_size: f32,
    pub enemy_size: f32,
    pub bg_color: Color,
    pub player_color: Color,
    pub enemy_color: Color,

    pub enemy_min_time_ms: u64,
    pub enemy_max_time_ms: u64,
    pub enemy_total_time: f32,
    pub player_total_time: f32,

    pub laser_duration_ms: u64,
    pub laser_top: f32,

    pub scoreboard_anchor: Point,
    pub game_over_anchor: Point,
    pub game_over_message: &'static str,
    pub game_over_bg_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        use consts::*;
        Self {
            origin: ORIGIN,
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            title: CANVAS_TITLE,
            z_plane: Z_PLANE,
            frames_per_second: FRAMES_PER_SECOND,
            player_size: PLAYER_SIZE,
            enemy_size: ENEMY_SIZE,
            bg_color: BG_COLOR,
            player_color: PLAYER_COLOR,
            enemy_color: ENEMY_COLOR,
            enemy_min_time_ms: ENEMY_MIN_TIME_MS,
            enemy_max_time_ms: ENEMY_MAX_TIME_MS,
            enemy_total_time: ENEMY_TOTAL_TIME,
            player_total_time: PLAYER_TOTAL_TIME,
            laser_duration_ms: LASER_DURATION_MS,
            laser_top: LASER_TOP,
            scoreboard_anchor: SCOREBOARD_ANCHOR,
            game_over_anchor: GAME_OVER_ANCHOR,
            game_over_message: GAME_OVER_MESSAGE,
            game_over_bg_color: GAME_OVER_BG_COLOR,
        }
    }
}

impl GameConfig {
    /// Reject constants that would make the simulation meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames_per_second == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        positive("canvas width", self.canvas_width)?;
        positive("canvas height", self.canvas_height)?;
        positive("player size", self.player_size)?;
        positive("enemy size", self.enemy_size)?;
        positive("enemy travel time", self.enemy_total_time)?;
        positive("player travel time", self.player_total_time)?;
        positive("enemy travel distance", self.canvas_height - self.enemy_size)?;
        positive("player travel distance", self.canvas_width - self.player_size)?;
        positive("laser duration", self.laser_duration_ms as f32)?;

        ordered("enemy spawn x", self.enemy_min_x() as i64, self.enemy_max_x() as i64)?;
        ordered(
            "enemy spawn time",
            self.enemy_min_time_ms as i64,
            self.enemy_max_time_ms as i64,
        )?;
        positive("enemy spawn time", self.enemy_min_time_ms as f32)?;
        Ok(())
    }

    /// Timer interval between frames, truncated to whole milliseconds.
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / self.frames_per_second as u64
    }

    /// Vertical distance the enemy falls each frame.
    pub fn enemy_step_dist(&self) -> f32 {
        let total_dist = self.canvas_height - self.enemy_size;
        total_dist / self.enemy_total_time / self.frames_per_second as f32
    }

    /// Horizontal distance the player moves each frame.
    pub fn player_step_dist(&self) -> f32 {
        let total_dist = self.canvas_width - self.player_size;
        total_dist / self.player_total_time / self.frames_per_second as f32
    }

    pub fn player_start(&self) -> Point {
        Point::new(
            self.origin.x,
            self.canvas_bottom() + self.player_size / 2.0,
            self.z_plane,
        )
    }

    /// Spawn point above the top edge of the canvas.
    pub fn enemy_start(&self) -> Point {
        Point::new(
            self.origin.x,
            self.origin.y + self.canvas_height / 2.0 + self.enemy_size / 2.0,
            self.z_plane,
        )
    }

    pub fn enemy_min_x(&self) -> i32 {
        (self.origin.x - self.canvas_width / 2.0 + self.enemy_size / 2.0) as i32
    }

    pub fn enemy_max_x(&self) -> i32 {
        (self.origin.x + self.canvas_width / 2.0 - self.enemy_size / 2.0) as i32
    }

    /// Leftmost x the player's centre may occupy.
    pub fn player_left_bound(&self) -> f32 {
        self.origin.x - self.canvas_width / 2.0 + self.player_size
    }

    /// Rightmost x the player's centre may occupy.
    pub fn player_right_bound(&self) -> f32 {
        self.origin.x + self.canvas_width / 2.0 - self.player_size
    }

    pub fn canvas_bottom(&self) -> f32 {
        self.origin.y - self.canvas_height / 2.0
    }

    pub fn canvas_left(&self) -> f32 {
        self.origin.x - self.canvas_width / 2.0
    }

    pub fn canvas_right(&self) -> f32 {
        self.origin.x + self.canvas_width / 2.0
    }

    pub fn canvas_top(&self) -> f32 {
        self.origin.y + self.canvas_height / 2.0
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            name,
            value: value as f64,
        })
    }
}

fn ordered(name: &'static str, min: i64, max: i64) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        Err(ConfigError::EmptyRange { name, min, max })
    }
}
