use alloc::format;
use serde::{Deserialize, Serialize};

use crate::*;

const BORDER_WIDTH: u32 = 8;
const LABEL_STYLE: TextStyle = TextStyle::new(40, Ink::Label);
const MINE_STYLE: TextStyle = TextStyle::new(40, Ink::Mine);
const CAPTION_STYLE: TextStyle = TextStyle::new(60, Ink::Caption);
const CAPTION_TOP: i32 = 50;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Active,
    Ended,
}

impl GameState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Active
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Runs one game on a surface: a single reveal ends it, closing the window exits.
#[derive(Debug)]
pub struct GameController<S> {
    surface: S,
    board: Board,
    clock: GameClock,
    state: GameState,
    running: bool,
}

impl<S: RenderSurface> GameController<S> {
    pub fn new(
        surface: S,
        config: GameConfig,
        generator: impl PlacementGenerator,
    ) -> Result<Self> {
        let layout = BoardLayout::new(surface.size(), config.board_size)?;
        let board = Board::generate(layout, config, generator)?;
        let clock = GameClock::start(surface.elapsed_millis());
        log::info!(
            "new game: {}x{} board, {} mines",
            config.board_size,
            config.board_size,
            board.mine_count()
        );

        Ok(Self {
            surface,
            board,
            clock,
            state: Default::default(),
            running: true,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handles at most one pending event, draws the frame and ticks the clock.
    pub fn frame(&mut self) -> LoopControl {
        if let Some(event) = self.surface.poll_event() {
            self.handle_event(event);
        }

        self.render();

        if self.state.is_active() {
            self.clock.advance(self.surface.elapsed_millis());
        }

        if self.running {
            LoopControl::Continue
        } else {
            LoopControl::Exit
        }
    }

    /// Calls [`Self::frame`] until the surface reports a quit.
    pub fn run_to_exit(&mut self) {
        while self.frame() == LoopControl::Continue {}
    }

    fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                log::debug!("quit requested");
                self.running = false;
            }
            InputEvent::PointerReleased { x, y } if self.state.is_active() => {
                log::trace!("pointer released at ({}, {})", x, y);
                let outcome = self.board.reveal_at((x, y));
                if outcome.has_update() {
                    log::info!(
                        "game over after {}s: {:?}",
                        self.clock.elapsed_secs(),
                        outcome
                    );
                    self.state = GameState::Ended;
                }
            }
            InputEvent::PointerReleased { .. } => {}
        }
    }

    fn render(&mut self) {
        let Self {
            surface,
            board,
            clock,
            state,
            ..
        } = self;

        surface.clear();

        for cell in board.cells() {
            surface.draw_rect_outline(cell.rect(), BORDER_WIDTH, Ink::Border);
            if let Some(label) = cell.label() {
                let text = format!("{label}");
                draw_centered(surface, &text, cell.rect(), LABEL_STYLE);
            }
        }

        let mines_caption = format!("Mines: {}", board.mine_count());
        let (surface_width, _) = surface.size();
        let (caption_width, _) = surface.measure_text(&mines_caption, CAPTION_STYLE);
        let mines_left = surface_width as i32 - 2 * caption_width as i32;
        surface.draw_text(&mines_caption, (mines_left, CAPTION_TOP), CAPTION_STYLE);

        let timer_caption = format!("Timer: {}", clock.elapsed_secs());
        surface.draw_text(&timer_caption, (0, CAPTION_TOP), CAPTION_STYLE);

        if !state.is_active() {
            for coords in board.all_mine_coordinates() {
                let rect = board.layout().cell_rect(coords);
                draw_centered(surface, MINE_MARKER, rect, MINE_STYLE);
            }
        }
    }
}

fn draw_centered<S: RenderSurface>(surface: &mut S, text: &str, rect: Rect, style: TextStyle) {
    let size = surface.measure_text(text, style);
    surface.draw_text(text, rect.centered(size), style);
}
