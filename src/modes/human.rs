use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info};

use crate::game::{GameEngine, GameState, TickResult};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::{GameMetrics, format_elapsed};
use crate::render::Renderer;

use super::screen::Screen;

/// Interactive game played from the keyboard
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    screen: Screen,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl HumanMode {
    pub fn new(mut engine: GameEngine) -> Self {
        let state = engine.new_game();
        let renderer = Renderer::new(engine.config());

        Self {
            engine,
            state,
            screen: Screen::Intro,
            metrics: GameMetrics::new(),
            renderer,
            input_handler: InputHandler::new(),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            width = self.engine.config().screen_width,
            height = self.engine.config().screen_height,
            fps = self.engine.config().fps,
            palette = ?self.engine.config().palette,
            "Session started"
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        if let Err(err) = self.cleanup_terminal(&mut terminal) {
            error!(?err, "Failed to restore terminal");
            if result.is_ok() {
                return Err(err);
            }
        }

        info!(
            games_played = self.metrics.games_played,
            best_score = self.metrics.best_score,
            "Session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // One world update and one redraw per frame
        let frame_interval = Duration::from_secs_f64(1.0 / self.engine.config().fps as f64);
        let mut frame_timer = interval(frame_interval);
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.screen = Screen::Exit,
                    }
                }

                // Advance the world and redraw
                _ = frame_timer.tick() => {
                    self.update_game();
                    terminal.draw(|frame| self.draw(frame)).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.screen = Screen::Exit;
                }
            }

            if self.screen == Screen::Exit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            let action = self.input_handler.handle_key_event(key);
            self.handle_key(action);
        }
    }

    /// Apply one key press to the world and the screen state
    fn handle_key(&mut self, action: KeyAction) {
        let previous = self.screen;

        if let (Screen::Playing, KeyAction::Turn(direction)) = (previous, action) {
            if self.engine.turn(&mut self.state, direction) {
                debug!(?direction, "Heading changed");
            }
        }

        let next = previous.next(action);
        if next == previous {
            return;
        }

        debug!(from = ?previous, to = ?next, "Screen changed");
        match (previous, next) {
            (Screen::Intro, Screen::Playing) => self.metrics.on_round_start(),
            (Screen::GameOver, Screen::Playing) => self.restart(),
            _ => {}
        }
        self.screen = next;
    }

    /// Advance one tick while a round is being played
    fn update_game(&mut self) -> Option<TickResult> {
        if !self.screen.is_running() {
            return None;
        }

        let result = self.engine.tick(&mut self.state);

        if result.ate_food {
            self.metrics.on_food_eaten();
            debug!(
                score = self.state.score.get_score(),
                length = self.state.snake.length,
                food = ?self.state.food.position,
                "Food eaten"
            );
        }

        if result.is_game_over() {
            let summary = self.metrics.on_round_end(self.state.score.get_score());
            info!(
                score = summary.score,
                foods = summary.foods_eaten,
                duration = %format_elapsed(summary.duration),
                collision = ?result.collision,
                board_full = result.board_full,
                best_score = summary.best_score,
                "Game over"
            );
            self.screen = Screen::GameOver;
        }

        Some(result)
    }

    fn restart(&mut self) {
        self.engine.reset(&mut self.state);
        self.metrics.on_round_start();
    }

    fn draw(&self, frame: &mut Frame) {
        match self.screen {
            Screen::Intro => self.renderer.render_screen(frame, &self.renderer.intro_messages()),
            Screen::Playing => self.renderer.render_playing(frame, &self.state),
            Screen::Paused => self.renderer.render_screen(frame, &self.renderer.pause_messages()),
            Screen::GameOver | Screen::Exit => {
                let messages = self.renderer.game_over_messages(self.state.score.get_score());
                self.renderer.render_screen(frame, &messages);
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
