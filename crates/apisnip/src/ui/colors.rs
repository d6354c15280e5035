use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

pub enum Theme {
  Dark,
  Light,
}

pub struct Colors {
  enabled: bool,
  theme: Theme,
}

pub trait IntoComfyColor {
  fn into(self) -> ComfyColor;
}

impl IntoComfyColor for Color {
  fn into(self) -> ComfyColor {
    match self {
      Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
      Color::AnsiValue(val) => ComfyColor::AnsiValue(val),
      _ => ComfyColor::Reset,
    }
  }
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, dark: Color, light: Color) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    match self.theme {
      Theme::Dark => dark,
      Theme::Light => light,
    }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Color::Rgb { r: 110, g: 160, b: 160 }, Color::Rgb { r: 95, g: 70, b: 40 })
  }

  pub const fn primary(&self) -> Color {
    self.pick(Color::Rgb { r: 196, g: 160, b: 60 }, Color::Rgb { r: 70, g: 48, b: 28 })
  }

  pub const fn accent(&self) -> Color {
    self.pick(Color::Rgb { r: 180, g: 92, b: 60 }, Color::Rgb { r: 205, g: 100, b: 70 })
  }

  pub const fn label(&self) -> Color {
    self.pick(Color::Rgb { r: 215, g: 170, b: 30 }, Color::Rgb { r: 170, g: 105, b: 60 })
  }

  pub const fn value(&self) -> Color {
    self.pick(Color::Rgb { r: 238, g: 214, b: 96 }, Color::Rgb { r: 196, g: 148, b: 80 })
  }

  pub const fn success(&self) -> Color {
    self.pick(Color::Rgb { r: 120, g: 170, b: 130 }, Color::Rgb { r: 40, g: 140, b: 90 })
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

fn detect_terminal_theme() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg_num) = bg.parse::<u8>()
  {
    return if bg_num >= 8 { Theme::Light } else { Theme::Dark };
  }

  Theme::Dark
}
