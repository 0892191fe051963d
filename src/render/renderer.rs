use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Colors, GameConfig, GameState, Position};

use super::text::{FontSize, Message};

/// Terminal columns used for one grid cell, so cells look square
const CELL_WIDTH: u16 = 2;

pub struct Renderer {
    config: GameConfig,
    colors: Colors,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: config.clone(),
            colors: config.colors(),
        }
    }

    /// Draw a frame of the round in progress
    pub fn render_playing(&self, frame: &mut Frame, state: &GameState) {
        let Some(inner) = self.draw_board_frame(frame) else {
            return;
        };

        let grid = self.render_grid(state);
        frame.render_widget(grid, inner);

        let score = self.render_score(state.score.get_score());
        frame.render_widget(score, Rect::new(inner.x, inner.y, inner.width, 1));
    }

    /// Draw a message screen: intro, pause or game over
    pub fn render_screen(&self, frame: &mut Frame, messages: &[Message]) {
        let Some(inner) = self.draw_board_frame(frame) else {
            return;
        };

        let background =
            Block::default().style(Style::default().bg(self.colors.screen_background.into()));
        frame.render_widget(background, inner);

        for message in messages {
            if let Some(area) = self.message_area(inner, message) {
                let line = Line::from(Span::styled(
                    message.shaped(),
                    message.size.style(message.color, self.colors.screen_background),
                ));
                frame.render_widget(Paragraph::new(line), area);
            }
        }
    }

    pub fn intro_messages(&self) -> Vec<Message> {
        vec![
            Message::new(&self.config.title, self.colors.title, FontSize::Large, -100),
            Message::new("Press ENTER to Play", self.colors.prompt, FontSize::Medium, 20),
            Message::new("Press ESC to Quit", self.colors.prompt, FontSize::Medium, 100),
        ]
    }

    pub fn pause_messages(&self) -> Vec<Message> {
        vec![
            Message::new(&self.config.title, self.colors.title, FontSize::Large, -100),
            Message::new("Press ENTER to Continue", self.colors.prompt, FontSize::Medium, 20),
            Message::new("Press ESC to Quit", self.colors.prompt, FontSize::Medium, 100),
        ]
    }

    pub fn game_over_messages(&self, score: u32) -> Vec<Message> {
        vec![
            Message::new("Game Over", self.colors.title, FontSize::Large, -100),
            Message::new(format!("Score {score}"), self.colors.title, FontSize::Large, -40),
            Message::new("Press ENTER to play", self.colors.prompt, FontSize::Medium, 60),
            Message::new("Press ESC to Quit", self.colors.prompt, FontSize::Medium, 100),
        ]
    }

    /// Terminal size needed to show the whole board, border included
    pub fn required_size(&self) -> (u16, u16) {
        let columns = u16::try_from(self.config.columns()).unwrap_or(u16::MAX);
        let rows = u16::try_from(self.config.rows()).unwrap_or(u16::MAX);
        let width = columns.saturating_mul(CELL_WIDTH).saturating_add(2);
        let height = rows.saturating_add(2);
        (width, height)
    }

    /// Draws the bordered board centred in the frame and returns its inner area,
    /// or a notice and `None` when the terminal is too small.
    fn draw_board_frame(&self, frame: &mut Frame) -> Option<Rect> {
        let area = frame.area();
        let (width, height) = self.required_size();

        if area.width < width || area.height < height {
            let notice = self.render_too_small(width, height);
            frame.render_widget(notice, area);
            return None;
        }

        let board = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::White))
            .title(format!(" {} ", self.config.title));
        let inner = block.inner(board);
        frame.render_widget(block, board);

        Some(inner)
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let columns = self.config.columns() as usize;
        let rows = self.config.rows() as usize;
        let mut cells = vec![self.colors.playfield; columns * rows];

        // Food first, then the snake on top of it
        if let Some(index) = self.cell_index(state.food.position) {
            cells[index] = self.colors.food;
        }
        for pos in &state.snake.body {
            if let Some(index) = self.cell_index(*pos) {
                cells[index] = self.colors.snake;
            }
        }

        let lines: Vec<Line> = cells
            .chunks(columns)
            .map(|row| {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|color| Span::styled("  ", Style::default().bg((*color).into())))
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines)
    }

    fn render_score(&self, score: u32) -> Paragraph<'_> {
        let size = FontSize::Small;
        let text = Line::from(Span::styled(
            format!("score: {score}"),
            size.style(self.colors.score, self.colors.playfield),
        ));
        Paragraph::new(text)
    }

    fn render_too_small(&self, width: u16, height: u16) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("Enlarge it to at least {width}x{height}")),
        ];
        Paragraph::new(text).alignment(Alignment::Center)
    }

    /// Index into the row-major cell grid, or `None` for cells off the board
    fn cell_index(&self, pos: Position) -> Option<usize> {
        let bs = self.config.block_size;
        if pos.x < 0
            || pos.y < 0
            || pos.x >= self.config.screen_width
            || pos.y >= self.config.screen_height
        {
            return None;
        }
        let col = (pos.x / bs) as usize;
        let row = (pos.y / bs) as usize;
        Some(row * self.config.columns() as usize + col)
    }

    /// One-row rect for a message, centred and shifted by its pixel offsets
    fn message_area(&self, inner: Rect, message: &Message) -> Option<Rect> {
        let bs = self.config.block_size;
        let text_width = message.shaped().chars().count() as i32;
        let width = text_width.min(inner.width as i32);

        let centre_x =
            inner.x as i32 + inner.width as i32 / 2 + message.x_change / bs * CELL_WIDTH as i32;
        let x = (centre_x - width / 2)
            .clamp(inner.x as i32, (inner.x + inner.width) as i32 - width);
        let y = inner.y as i32 + inner.height as i32 / 2 + message.y_change / bs;

        if y < inner.y as i32 || y >= (inner.y + inner.height) as i32 {
            return None;
        }
        Some(Rect::new(x as u16, y as u16, width as u16, 1))
    }
}
