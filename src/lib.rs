//! A carousel widget: slides with previous/next navigation, position
//! indicators and timed autoplay that pauses while the pointer hovers.
//!
//! The widget itself ([`Carousel`]) is independent of rendering and is driven
//! by frame deltas. The `view`, `loader` and `config` modules host it in a
//! raylib window.

pub mod autoplay;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod direct;
pub mod engine;
pub mod loader;
pub mod loop_clone;
pub mod position;
pub mod registry;
pub mod slide;
pub mod state;
pub mod view;

pub use crate::carousel::{Carousel, CarouselConfig};
pub use crate::state::{MountPolicy, ReloadPosition};
