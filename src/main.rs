use anyhow::Result;
use clap::Parser;
use log::{error, info};
use raylib::prelude::*;

use carousel::{Carousel, MountPolicy};
use carousel::config::Args;
use carousel::constants::*;
use carousel::loader::load_slides;
use carousel::view::{self, Hit, Layout};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let sizing = args.sizing();

    let (mut rl, thread) = raylib::init()
        .size(args.width.unwrap_or(DEFAULT_WIDTH), sizing.height)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let slides = load_slides(&mut rl, &thread, &args.slide_dir)?;
    info!("Loaded {} slides from {}", slides.len(), args.slide_dir.display());

    let mut carousel = Carousel::new(args.carousel_config());
    carousel.mount(slides);

    let mut pointer_inside = false;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let bounds = sizing.bounds(rl.get_screen_width(), rl.get_screen_height());
        let layout = Layout::new(bounds, carousel.indicators().len());

        // Pointer enter/leave
        let mouse = rl.get_mouse_position();
        let inside = layout.contains(mouse);
        if inside != pointer_inside {
            if inside {
                carousel.pointer_entered();
            } else {
                carousel.pointer_left();
            }
            pointer_inside = inside;
        }

        let hover = layout.hit(mouse);
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match hover {
                Some(Hit::Previous) => carousel.previous(),
                Some(Hit::Next) => carousel.next(),
                Some(Hit::Indicator(i)) => carousel.select(i),
                None => {}
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            carousel.previous();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            carousel.next();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_R) {
            let policy = carousel.config().policy;
            if policy != MountPolicy::Direct {
                // Only the direct policy follows slide set changes
                info!("Reload skipped for {:?} carousel", policy);
            } else {
                match load_slides(&mut rl, &thread, &args.slide_dir) {
                    Ok(slides) => {
                        info!("Reloaded {} slides", slides.len());
                        carousel.slides_changed(slides);
                    }
                    Err(e) => error!("Reload failed: {:#}", e),
                }
            }
        }

        carousel.update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);
        // A reload may have changed the indicator count
        let layout = Layout::new(bounds, carousel.indicators().len());
        view::draw(&mut d, &carousel, &layout, hover);
    }

    // Textures must go before the window does
    carousel.unmount();
    Ok(())
}
