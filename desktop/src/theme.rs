use clap::ValueEnum;
use macroquad::color::{self, Color};
use sweeplet_core::Ink;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Dark => "dark",
            Light => "light",
        }
    }

    pub(crate) const fn background(self) -> Color {
        match self {
            Theme::Dark => color::BLACK,
            Theme::Light => color::WHITE,
        }
    }

    pub(crate) const fn color(self, ink: Ink) -> Color {
        use Ink::*;
        match (self, ink) {
            (_, Border) => color::BLUE,
            (Theme::Dark, Caption | Label) => color::GREEN,
            (Theme::Light, Caption | Label) => color::DARKGREEN,
            (_, Mine) => color::RED,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::Dark
    }
}
