/// Game-logic functions.
///
/// Every public function takes the current `GameState` by mutable reference
/// (plus the world `GameConfig`, and an RNG handle where needed). None of
/// them touch rendering or timers; the driver schedules whatever they ask for.

use log::{debug, info};

use crate::config::GameConfig;
use crate::entities::{Cube, GameState, GameStatus, Movement};
use crate::random::RandomRange;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial game state. The enemy starts dead until the first spawn.
pub fn init_state(config: &GameConfig) -> GameState {
    GameState {
        player: Cube::new(config.player_start(), config.player_size, config.player_color),
        enemy: Cube::new(config.enemy_start(), config.enemy_size, config.enemy_color),
        score: 0,
        is_laser_firing: false,
        status: GameStatus::Playing,
    }
}

// ── Spawn scheduler ──────────────────────────────────────────────────────────

/// Place the enemy at a random x above the top of the canvas and bring it to
/// life. Returns the delay in milliseconds before the next spawn.
pub fn spawn_enemy(state: &mut GameState, config: &GameConfig, rng: &mut impl RandomRange) -> u64 {
    let x = rng.range_i32(config.enemy_min_x(), config.enemy_max_x());
    state.enemy.center.y = config.enemy_start().y;
    state.enemy.center.x = x as f32;
    state.enemy.is_alive = true;

    let delay = rng.range_u64(config.enemy_min_time_ms, config.enemy_max_time_ms);
    debug!("enemy spawned at x={x}, next spawn in {delay}ms");
    delay
}

// ── Per-frame simulation ─────────────────────────────────────────────────────

/// Move a live enemy down one step; an enemy whose lower edge falls below the
/// canvas ends the game.
pub fn update_enemy(state: &mut GameState, config: &GameConfig) {
    if !state.enemy.is_alive {
        return;
    }
    state.enemy.center.y -= config.enemy_step_dist();
    if state.enemy.bottom_edge() < config.canvas_bottom() {
        state.status = GameStatus::GameOver;
        info!("enemy reached the bottom, final score {}", state.score);
    }
}

/// Move the player one whole step in its intended direction, or not at all
/// if that step would leave the allowed band.
pub fn update_player(state: &mut GameState, config: &GameConfig) {
    let step = config.player_step_dist();
    let x = state.player.center.x;
    match state.player.movement {
        Movement::Left if x - step >= config.player_left_bound() => {
            state.player.center.x = x - step;
        }
        Movement::Right if x + step <= config.player_right_bound() => {
            state.player.center.x = x + step;
        }
        _ => {}
    }
}

/// Headless part of a frame tick: enemy first, then player.
pub fn advance_frame(state: &mut GameState, config: &GameConfig) {
    update_enemy(state, config);
    update_player(state, config);
}

// ── Combat ───────────────────────────────────────────────────────────────────

pub fn add_point(state: &mut GameState) {
    state.score += 1;
}

pub fn kill_enemy(state: &mut GameState) {
    state.enemy.is_alive = false;
}

/// Horizontal-only hit test: the laser spans the whole canvas height, so only
/// the player's x against the enemy's width matters. Returns whether it hit.
pub fn test_hit(state: &mut GameState) -> bool {
    let enemy = &state.enemy;
    let px = state.player.center.x;
    let hit = enemy.is_alive
        && px < enemy.center.x + enemy.half_size()
        && px > enemy.center.x - enemy.half_size();
    if hit {
        kill_enemy(state);
        add_point(state);
        info!("enemy destroyed, score {}", state.score);
    }
    hit
}

/// Start firing if the laser is idle. Returns `true` when it was activated,
/// meaning the caller must arm the disable timer.
pub fn activate_laser(state: &mut GameState) -> bool {
    if state.is_laser_firing {
        return false;
    }
    state.is_laser_firing = true;
    debug!("laser fired from x={}", state.player.center.x);
    test_hit(state);
    true
}

pub fn disable_laser(state: &mut GameState) {
    state.is_laser_firing = false;
}
