use crate::*;

/// Input the surface reports, at most one per poll.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    PointerReleased { x: i32, y: i32 },
}

/// Semantic colors; the surface decides what they look like.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ink {
    Border,
    Caption,
    Label,
    Mine,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub size: u16,
    pub ink: Ink,
}

impl TextStyle {
    pub const fn new(size: u16, ink: Ink) -> Self {
        Self { size, ink }
    }
}

/// Window, input and drawing service the controller runs against.
///
/// Presenting a finished frame is left to whoever drives
/// [`GameController::frame`], since backends differ in how they flip.
pub trait RenderSurface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Next pending input event, without blocking.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Monotonic milliseconds since the surface was created.
    fn elapsed_millis(&self) -> u64;

    fn clear(&mut self);

    fn draw_rect_outline(&mut self, rect: Rect, thickness: u32, ink: Ink);

    /// Draws `text` with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: ScreenPos, style: TextStyle);

    /// Width and height of the box `text` occupies when drawn.
    fn measure_text(&self, text: &str, style: TextStyle) -> (u32, u32);
}
