/// Top-level driver: owns the state, the timer queue and the random source,
/// and routes timer and key callbacks into the logic in `compute`.

use std::io;

use log::info;

use crate::compute;
use crate::config::GameConfig;
use crate::entities::GameState;
use crate::error::ConfigError;
use crate::input::{self, Command};
use crate::random::RandomRange;
use crate::render::{self, Renderer};
use crate::scheduler::{Scheduler, TimerEvent};

/// What the caller should do after a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Game<R: RandomRange> {
    pub state: GameState,
    config: GameConfig,
    scheduler: Scheduler,
    rng: R,
}

impl<R: RandomRange> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            state: compute::init_state(&config),
            config,
            scheduler: Scheduler::new(),
            rng,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Spawn the first enemy and arm the first frame.
    pub fn start(&mut self) {
        self.spawn_enemy();
        self.scheduler
            .schedule(self.config.frame_interval_ms(), TimerEvent::AdvanceFrame);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_deadline()
    }

    /// Fire every timer due at or before `now` (ms since start), then leave
    /// the clock at `now` so key events are timed from there.
    pub fn run_due<W: Renderer + ?Sized>(&mut self, now: u64, renderer: &mut W) -> io::Result<()> {
        while let Some(event) = self.scheduler.pop_due(now) {
            self.fire(event, renderer)?;
        }
        self.scheduler.advance_to(now);
        Ok(())
    }

    fn fire<W: Renderer + ?Sized>(
        &mut self,
        event: TimerEvent,
        renderer: &mut W,
    ) -> io::Result<()> {
        match event {
            TimerEvent::SpawnEnemy => {
                if !self.state.is_game_over() {
                    self.spawn_enemy();
                }
                Ok(())
            }
            TimerEvent::AdvanceFrame => self.advance_frame(renderer),
            TimerEvent::DisableLaser => {
                compute::disable_laser(&mut self.state);
                Ok(())
            }
        }
    }

    fn spawn_enemy(&mut self) {
        let delay = compute::spawn_enemy(&mut self.state, &self.config, &mut self.rng);
        self.scheduler.schedule(delay, TimerEvent::SpawnEnemy);
    }

    /// One frame: draw what the previous tick produced, then update. On the
    /// tick that ends the game the loser screen replaces the re-arm.
    pub fn advance_frame<W: Renderer + ?Sized>(&mut self, renderer: &mut W) -> io::Result<()> {
        if self.state.is_game_over() {
            return Ok(());
        }
        render::draw_all_objects(renderer, &self.state, &self.config)?;
        compute::advance_frame(&mut self.state, &self.config);

        if self.state.is_game_over() {
            renderer.draw_game_over_screen()?;
            renderer.present_frame()
        } else {
            self.scheduler
                .schedule(self.config.frame_interval_ms(), TimerEvent::AdvanceFrame);
            Ok(())
        }
    }

    pub fn key_down(&mut self, key: char) -> Control {
        match input::map_key_down(key) {
            Some(command) => self.apply(command),
            None => Control::Continue,
        }
    }

    pub fn key_up(&mut self, key: char) -> Control {
        match input::map_key_up(key) {
            Some(command) => self.apply(command),
            None => Control::Continue,
        }
    }

    fn apply(&mut self, command: Command) -> Control {
        match command {
            // Frozen: only quitting still does anything.
            Command::SetMovement(_) | Command::FireLaser if self.state.is_game_over() => {}
            Command::SetMovement(movement) => {
                self.state.player.movement = movement;
            }
            Command::FireLaser => {
                if compute::activate_laser(&mut self.state) {
                    self.scheduler
                        .schedule(self.config.laser_duration_ms, TimerEvent::DisableLaser);
                }
            }
            Command::Quit => {
                info!("quit requested, score {}", self.state.score);
                return Control::Quit;
            }
        }
        Control::Continue
    }
}
