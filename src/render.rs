/// Drawing seam between the simulation and whatever puts pixels (or cells)
/// on screen. The core only ever talks to `Renderer`.

use std::io;

use crate::config::GameConfig;
use crate::entities::{Color, Cube, GameState};

pub trait Renderer {
    /// Clear the frame to `background`.
    fn begin_frame(&mut self, background: Color) -> io::Result<()>;

    fn draw_cube(&mut self, cube: &Cube) -> io::Result<()>;

    /// Vertical beam from just above `origin` to the top of the canvas.
    fn draw_laser(&mut self, origin: &Cube) -> io::Result<()>;

    fn draw_scoreboard(&mut self, score: u32) -> io::Result<()>;

    /// Clear to the terminal background and print the losing message.
    fn draw_game_over_screen(&mut self) -> io::Result<()>;

    fn present_frame(&mut self) -> io::Result<()>;
}

/// Render one complete frame from the current state.
pub fn draw_all_objects<R: Renderer + ?Sized>(
    renderer: &mut R,
    state: &GameState,
    config: &GameConfig,
) -> io::Result<()> {
    renderer.begin_frame(config.bg_color)?;
    renderer.draw_scoreboard(state.score)?;
    renderer.draw_cube(&state.player)?;
    if state.enemy.is_alive {
        renderer.draw_cube(&state.enemy)?;
    }
    if state.is_laser_firing {
        renderer.draw_laser(&state.player)?;
    }
    renderer.present_frame()
}
