use std::time::Duration;

pub const FPS: u32 = 60;                                   // Target frames per second

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000); // Autoplay cadence when none is configured
pub const TRANSITION_DURATION: f32 = 0.5;                  // Track slide animation (seconds)

pub const DEFAULT_WIDTH: i32 = 600;                        // Window width on start-up
pub const DEFAULT_HEIGHT: i32 = 250;                       // Carousel height
pub const DEFAULT_MAX_WIDTH: i32 = 600;                    // Carousel width cap

pub const BORDER_THICKNESS: f32 = 2.0;
pub const DOT_SIZE: f32 = 12.0;                            // Indicator diameter
pub const DOT_GAP: f32 = 8.0;                              // Space between indicators
pub const DOT_BOTTOM_MARGIN: f32 = 10.0;
pub const BUTTON_FONT_SIZE: i32 = 32;
pub const BUTTON_PADDING_X: f32 = 10.0;
pub const BUTTON_PADDING_Y: f32 = 3.0;
pub const SLIDE_FONT_SIZE: i32 = 32;
pub const SLIDE_FILL: f32 = 0.9;                           // Share of the slide an image may cover
