/// Rendering layer: all terminal I/O lives here.
///
/// `TerminalRenderer` implements `Renderer` by projecting the 400×400 world
/// onto whatever cell grid the terminal currently offers. No game logic is
/// performed; this module only translates draw calls into terminal commands.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color as TermColor, Print},
    terminal, QueueableCommand,
};

use crate::config::GameConfig;
use crate::entities::{Color, Cube, Point};
use crate::render::Renderer;

const C_HINT: TermColor = TermColor::DarkGrey;
const CUBE_GLYPH: &str = "█";
const LASER_GLYPH: &str = "│";

fn to_term_color(c: Color) -> TermColor {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    TermColor::Rgb {
        r: channel(c.r),
        g: channel(c.g),
        b: channel(c.b),
    }
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    config: GameConfig,
    cols: u16,
    /// Rows available to the canvas; the last terminal row holds the hint.
    rows: u16,
    background: Color,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, config: GameConfig, width: u16, height: u16) -> Self {
        let background = config.bg_color;
        let mut renderer = Self {
            out,
            config,
            cols: 1,
            rows: 1,
            background,
        };
        renderer.resize(width, height);
        renderer
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.cols = width.max(1);
        self.rows = height.saturating_sub(1).max(1);
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Cell holding world point (x, y), or `None` if it lies off the canvas.
    fn to_cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let fx = (x - self.config.canvas_left()) / self.config.canvas_width;
        let fy = (self.config.canvas_top() - y) / self.config.canvas_height;
        if !(0.0..=1.0).contains(&fx) || !(0.0..=1.0).contains(&fy) {
            return None;
        }
        let col = (fx * (self.cols - 1) as f32).round() as u16;
        let row = (fy * (self.rows - 1) as f32).round() as u16;
        Some((col, row))
    }

    fn print_at(&mut self, anchor: Point, text: &str, color: Color) -> io::Result<()> {
        if let Some((col, row)) = self.to_cell(anchor.x, anchor.y) {
            let room = self.cols.saturating_sub(col) as usize;
            let clipped: String = text.chars().take(room).collect();
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(to_term_color(color)))?;
            self.out.queue(Print(clipped))?;
        }
        Ok(())
    }

    fn clear(&mut self, background: Color) -> io::Result<()> {
        self.background = background;
        self.out.queue(style::SetBackgroundColor(to_term_color(background)))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin_frame(&mut self, background: Color) -> io::Result<()> {
        self.clear(background)?;

        self.out.queue(cursor::MoveTo(0, self.rows))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print("H / L : Move   SPACE : Fire   Q : Quit"))?;
        Ok(())
    }

    fn draw_cube(&mut self, cube: &Cube) -> io::Result<()> {
        let half = cube.half_size();
        // Clip the cube's square to the visible canvas.
        let left = (cube.center.x - half).max(self.config.canvas_left());
        let right = (cube.center.x + half).min(self.config.canvas_right());
        let top = (cube.center.y + half).min(self.config.canvas_top());
        let bottom = (cube.center.y - half).max(self.config.canvas_bottom());
        if left > right || bottom > top {
            return Ok(());
        }
        let (Some((c0, r0)), Some((c1, r1))) =
            (self.to_cell(left, top), self.to_cell(right, bottom))
        else {
            return Ok(());
        };
        let line = CUBE_GLYPH.repeat((c1 - c0 + 1) as usize);

        self.out.queue(style::SetForegroundColor(to_term_color(cube.color)))?;
        for row in r0..=r1 {
            self.out.queue(cursor::MoveTo(c0, row))?;
            self.out.queue(Print(&line))?;
        }
        Ok(())
    }

    fn draw_laser(&mut self, origin: &Cube) -> io::Result<()> {
        let base = origin.center.y + origin.size;
        let Some((col, bottom)) = self.to_cell(origin.center.x, base) else {
            return Ok(());
        };
        let top = self
            .to_cell(origin.center.x, self.config.laser_top)
            .map(|(_, row)| row)
            .unwrap_or(0);

        self.out.queue(style::SetForegroundColor(to_term_color(origin.color)))?;
        for r in top..=bottom {
            self.out.queue(cursor::MoveTo(col, r))?;
            self.out.queue(Print(LASER_GLYPH))?;
        }
        Ok(())
    }

    fn draw_scoreboard(&mut self, score: u32) -> io::Result<()> {
        let text = format!("Score: {score}");
        self.print_at(self.config.scoreboard_anchor, &text, self.config.player_color)
    }

    fn draw_game_over_screen(&mut self) -> io::Result<()> {
        self.clear(self.config.game_over_bg_color)?;
        self.print_at(
            self.config.game_over_anchor,
            self.config.game_over_message,
            self.config.player_color,
        )?;

        self.out.queue(cursor::MoveTo(0, self.rows))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print("Q : Quit"))?;
        Ok(())
    }

    fn present_frame(&mut self) -> io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::SetBackgroundColor(to_term_color(self.background)))?;
        self.out.queue(cursor::MoveTo(0, self.rows))?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::consts;

    fn renderer() -> TerminalRenderer<Vec<u8>> {
        TerminalRenderer::new(Vec::new(), GameConfig::default(), 81, 41)
    }

    #[test]
    fn canvas_corners_map_to_grid_corners() {
        let r = renderer();
        assert_eq!(r.to_cell(-200.0, 200.0), Some((0, 0)));
        assert_eq!(r.to_cell(200.0, -200.0), Some((80, 39)));
        assert_eq!(r.to_cell(0.0, 0.0), Some((40, 20)));
    }

    #[test]
    fn off_canvas_points_are_clipped() {
        let r = renderer();
        assert_eq!(r.to_cell(0.0, 212.5), None);
        assert_eq!(r.to_cell(-201.0, 0.0), None);
    }

    #[test]
    fn scoreboard_text_is_written() {
        let mut r = renderer();
        r.draw_scoreboard(7).unwrap();
        r.present_frame().unwrap();
        let bytes = r.into_inner();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Score: 7"));
    }

    #[test]
    fn text_anchors_come_from_config() {
        let config = GameConfig {
            // Off the canvas, so the scoreboard is clipped away.
            scoreboard_anchor: Point::new(0.0, 300.0, 0.0),
            game_over_message: "Bye",
            ..GameConfig::default()
        };
        let mut r = TerminalRenderer::new(Vec::new(), config, 81, 41);
        r.draw_scoreboard(3).unwrap();
        r.draw_game_over_screen().unwrap();
        let text = String::from_utf8_lossy(&r.into_inner()).into_owned();
        assert!(!text.contains("Score: 3"));
        assert!(text.contains("Bye"));
        assert!(!text.contains(consts::GAME_OVER_MESSAGE));
    }

    #[test]
    fn game_over_screen_prints_message() {
        let mut r = renderer();
        r.draw_game_over_screen().unwrap();
        let text = String::from_utf8_lossy(&r.into_inner()).into_owned();
        assert!(text.contains(consts::GAME_OVER_MESSAGE));
    }

    #[test]
    fn cube_above_canvas_draws_nothing() {
        let mut r = renderer();
        let cube = Cube::new(Point::new(0.0, 240.0, -15.0), 25.0, consts::ENEMY_COLOR);
        r.draw_cube(&cube).unwrap();
        assert!(!String::from_utf8_lossy(&r.into_inner()).contains(CUBE_GLYPH));
    }

    #[test]
    fn partly_visible_cube_is_drawn() {
        let mut r = renderer();
        let cube = Cube::new(Point::new(0.0, 200.0, -15.0), 25.0, consts::ENEMY_COLOR);
        r.draw_cube(&cube).unwrap();
        assert!(String::from_utf8_lossy(&r.into_inner()).contains(CUBE_GLYPH));
    }
}
