use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use raylib::prelude::*;

use crate::carousel::CarouselConfig;
use crate::constants::*;
use crate::state::{MountPolicy, ReloadPosition};

/// Plays a directory of images and text files as a carousel.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Directory holding the slides (png, jpg, jpeg, bmp, gif, txt)
    pub slide_dir: PathBuf,

    /// Autoplay interval in milliseconds
    #[arg(long)]
    pub interval: Option<String>,

    /// How slides are mounted
    #[arg(long, value_enum, default_value_t)]
    pub policy: MountPolicy,

    /// Position after the slide directory is reloaded
    #[arg(long, value_enum, default_value_t)]
    pub on_reload: ReloadPosition,

    /// Fixed carousel width in pixels (defaults to the window width)
    #[arg(long)]
    pub width: Option<i32>,

    /// Carousel height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: i32,

    /// Upper bound on the carousel width in pixels
    #[arg(long, default_value_t = DEFAULT_MAX_WIDTH)]
    pub max_width: i32,
}

impl Args {
    pub fn carousel_config(&self) -> CarouselConfig {
        CarouselConfig {
            policy: self.policy,
            interval: parse_interval(self.interval.as_deref()),
            reload: self.on_reload,
        }
    }

    pub fn sizing(&self) -> Sizing {
        Sizing { width: self.width, height: self.height, max_width: self.max_width }
    }
}

/// Reads the leading digits of `raw`, after an optional `+`, as milliseconds.
/// Anything that does not yield a positive number falls back to the default
/// interval.
pub fn parse_interval(raw: Option<&str>) -> Duration {
    let millis = raw
        .map(|s| {
            let s = s.trim_start();
            let s = s.strip_prefix('+').unwrap_or(s);
            let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
            &s[..end]
        })
        .and_then(|digits| digits.parse::<u64>().ok())
        .filter(|&ms| ms > 0);

    millis.map(Duration::from_millis).unwrap_or(DEFAULT_INTERVAL)
}

/// Outer size of the carousel. The internal layout follows from the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sizing {
    pub width: Option<i32>,
    pub height: i32,
    pub max_width: i32,
}

impl Default for Sizing {
    fn default() -> Self {
        Self { width: None, height: DEFAULT_HEIGHT, max_width: DEFAULT_MAX_WIDTH }
    }
}

impl Sizing {
    /// Carousel rectangle centred in a `screen_width` x `screen_height` window.
    pub fn bounds(&self, screen_width: i32, screen_height: i32) -> Rectangle {
        let width = self.width.unwrap_or(screen_width).min(self.max_width).max(0);
        let height = self.height.max(0);

        Rectangle::new(
            ((screen_width - width) / 2).max(0) as f32,
            ((screen_height - height) / 2).max(0) as f32,
            width as f32,
            height as f32,
        )
    }
}
