use macroquad::prelude as mq;
use sweeplet_core::{Ink, InputEvent, Rect, RenderSurface, ScreenPos, TextStyle};

use crate::theme::Theme;

/// [`RenderSurface`] over the macroquad window.
///
/// Requires `prevent_quit` to have been called so closing the window shows up as an event.
#[derive(Debug)]
pub(crate) struct MacroquadSurface {
    theme: Theme,
}

impl MacroquadSurface {
    pub(crate) fn new(theme: Theme) -> Self {
        log::debug!("theme-scheme: {}", theme.scheme());
        Self { theme }
    }
}

impl RenderSurface for MacroquadSurface {
    fn size(&self) -> (u32, u32) {
        (mq::screen_width() as u32, mq::screen_height() as u32)
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        if mq::is_quit_requested() {
            return Some(InputEvent::Quit);
        }

        if mq::is_mouse_button_released(mq::MouseButton::Left) {
            let (x, y) = mq::mouse_position();
            log::trace!("mouse up at ({}, {})", x, y);
            return Some(InputEvent::PointerReleased {
                x: x as i32,
                y: y as i32,
            });
        }

        None
    }

    fn elapsed_millis(&self) -> u64 {
        (mq::get_time() * 1000.0) as u64
    }

    fn clear(&mut self) {
        mq::clear_background(self.theme.background());
    }

    fn draw_rect_outline(&mut self, rect: Rect, thickness: u32, ink: Ink) {
        mq::draw_rectangle_lines(
            rect.left as f32,
            rect.top as f32,
            rect.width as f32,
            rect.height as f32,
            thickness as f32,
            self.theme.color(ink),
        );
    }

    fn draw_text(&mut self, text: &str, (x, y): ScreenPos, style: TextStyle) {
        // macroquad places text by its baseline
        let dimensions = mq::measure_text(text, None, style.size, 1.0);
        mq::draw_text(
            text,
            x as f32,
            y as f32 + dimensions.offset_y,
            f32::from(style.size),
            self.theme.color(style.ink),
        );
    }

    fn measure_text(&self, text: &str, style: TextStyle) -> (u32, u32) {
        let dimensions = mq::measure_text(text, None, style.size, 1.0);
        (
            dimensions.width.ceil() as u32,
            dimensions.height.ceil() as u32,
        )
    }
}
