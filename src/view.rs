use raylib::prelude::*;

use crate::carousel::Carousel;
use crate::constants::*;
use crate::loader::SlideContent;

const SLIDE_BACKGROUND: Color = Color::new(0xf4, 0xf4, 0xf4, 255);
const BORDER: Color = Color::new(0xcc, 0xcc, 0xcc, 255);
const BUTTON: Color = Color::new(0, 0, 0, 102);
const BUTTON_HOVER: Color = Color::new(0, 0, 0, 153);
const DOT: Color = Color::new(0xcc, 0xcc, 0xcc, 255);
const DOT_ACTIVE: Color = Color::new(0x33, 0x33, 0x33, 255);
const TEXT: Color = Color::new(0x22, 0x22, 0x22, 255);

/// Control under a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Previous,
    Next,
    Indicator(usize),
}

/// Fixed placement of the track, buttons and indicator row within the bounds.
pub struct Layout {
    pub bounds: Rectangle,
    pub previous: Rectangle,
    pub next: Rectangle,
    pub indicators: Vec<Rectangle>,
}

impl Layout {
    pub fn new(bounds: Rectangle, indicator_count: usize) -> Self {
        let button_width = BUTTON_FONT_SIZE as f32 * 0.6 + BUTTON_PADDING_X * 2.0;
        let button_height = BUTTON_FONT_SIZE as f32 + BUTTON_PADDING_Y * 2.0;
        let button_y = bounds.y + (bounds.height - button_height) / 2.0;

        let previous = Rectangle::new(bounds.x, button_y, button_width, button_height);
        let next = Rectangle::new(bounds.x + bounds.width - button_width, button_y, button_width, button_height);

        let row_width = indicator_count as f32 * DOT_SIZE + indicator_count.saturating_sub(1) as f32 * DOT_GAP;
        let row_x = bounds.x + (bounds.width - row_width) / 2.0;
        let row_y = bounds.y + bounds.height - DOT_BOTTOM_MARGIN - DOT_SIZE;
        let indicators = (0..indicator_count)
            .map(|i| Rectangle::new(row_x + i as f32 * (DOT_SIZE + DOT_GAP), row_y, DOT_SIZE, DOT_SIZE))
            .collect();

        Self { bounds, previous, next, indicators }
    }

    pub fn contains(&self, point: Vector2) -> bool {
        self.bounds.check_collision_point_rec(point)
    }

    pub fn hit(&self, point: Vector2) -> Option<Hit> {
        if self.previous.check_collision_point_rec(point) {
            return Some(Hit::Previous);
        }
        if self.next.check_collision_point_rec(point) {
            return Some(Hit::Next);
        }
        self.indicators
            .iter()
            .position(|dot| dot.check_collision_point_rec(point))
            .map(Hit::Indicator)
    }
}

pub fn draw(d: &mut RaylibDrawHandle, carousel: &Carousel<SlideContent>, layout: &Layout, hover: Option<Hit>) {
    let bounds = layout.bounds;
    d.draw_rectangle_rec(bounds, SLIDE_BACKGROUND);

    // Text is measured up front; the scissor guard holds the draw handle.
    let visible: Vec<_> = carousel
        .slides()
        .iter()
        .enumerate()
        .filter_map(|(i, slide)| {
            let x = bounds.x + (i as f32 - carousel.offset()) * bounds.width;
            if x + bounds.width <= bounds.x || x >= bounds.x + bounds.width {
                return None;
            }
            let text_width = match slide.content() {
                SlideContent::Text(text) => d.measure_text(text, SLIDE_FONT_SIZE),
                SlideContent::Image(_) => 0,
            };
            Some((slide.content(), x, text_width))
        })
        .collect();

    {
        let mut track = d.begin_scissor_mode(
            bounds.x as i32,
            bounds.y as i32,
            bounds.width as i32,
            bounds.height as i32,
        );
        for (content, x, text_width) in visible {
            let area = Rectangle::new(x, bounds.y, bounds.width, bounds.height);
            draw_slide(&mut track, content, area, text_width);
        }
    }

    draw_button(d, layout.previous, "<", hover == Some(Hit::Previous));
    draw_button(d, layout.next, ">", hover == Some(Hit::Next));

    for (dot, indicator) in layout.indicators.iter().zip(carousel.indicators()) {
        let color = if indicator.active { DOT_ACTIVE } else { DOT };
        d.draw_circle(
            (dot.x + dot.width / 2.0) as i32,
            (dot.y + dot.height / 2.0) as i32,
            DOT_SIZE / 2.0,
            color,
        );
    }

    d.draw_rectangle_lines_ex(bounds, BORDER_THICKNESS, BORDER);
}

fn draw_slide(d: &mut impl RaylibDraw, content: &SlideContent, area: Rectangle, text_width: i32) {
    match content {
        SlideContent::Image(texture) => {
            let tex_width = texture.width() as f32;
            let tex_height = texture.height() as f32;

            // Only shrink, never enlarge
            let scale = (area.width * SLIDE_FILL / tex_width)
                .min(area.height * SLIDE_FILL / tex_height)
                .min(1.0);
            let width = tex_width * scale;
            let height = tex_height * scale;

            d.draw_texture_pro(
                texture,
                Rectangle::new(0.0, 0.0, tex_width, tex_height),
                Rectangle::new(
                    area.x + (area.width - width) / 2.0,
                    area.y + (area.height - height) / 2.0,
                    width,
                    height,
                ),
                Vector2::new(0.0, 0.0),
                0.0,
                Color::WHITE,
            );
        }
        SlideContent::Text(text) => {
            let lines = text.lines().count().max(1) as i32;
            let height = lines * SLIDE_FONT_SIZE;
            d.draw_text(
                text,
                (area.x + (area.width - text_width as f32) / 2.0) as i32,
                (area.y + (area.height - height as f32) / 2.0) as i32,
                SLIDE_FONT_SIZE,
                TEXT,
            );
        }
    }
}

fn draw_button(d: &mut RaylibDrawHandle, rect: Rectangle, label: &str, hovered: bool) {
    d.draw_rectangle_rec(rect, if hovered { BUTTON_HOVER } else { BUTTON });
    let width = d.measure_text(label, BUTTON_FONT_SIZE);
    d.draw_text(
        label,
        (rect.x + (rect.width - width as f32) / 2.0) as i32,
        (rect.y + (rect.height - BUTTON_FONT_SIZE as f32) / 2.0) as i32,
        BUTTON_FONT_SIZE,
        Color::WHITE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(dots: usize) -> Layout {
        Layout::new(Rectangle::new(0.0, 0.0, 600.0, 250.0), dots)
    }

    #[test]
    fn buttons_sit_on_the_edges() {
        let layout = layout(3);
        assert_eq!(layout.hit(Vector2::new(2.0, 125.0)), Some(Hit::Previous));
        assert_eq!(layout.hit(Vector2::new(598.0, 125.0)), Some(Hit::Next));
        assert_eq!(layout.hit(Vector2::new(300.0, 20.0)), None);
    }

    #[test]
    fn indicator_row_is_centred() {
        let layout = layout(3);
        assert_eq!(layout.indicators.len(), 3);

        let row_width = 3.0 * DOT_SIZE + 2.0 * DOT_GAP;
        assert_eq!(layout.indicators[0].x, (600.0 - row_width) / 2.0);
        assert_eq!(layout.indicators[0].y, 250.0 - DOT_BOTTOM_MARGIN - DOT_SIZE);

        for (i, dot) in layout.indicators.iter().enumerate() {
            let centre = Vector2::new(dot.x + DOT_SIZE / 2.0, dot.y + DOT_SIZE / 2.0);
            assert_eq!(layout.hit(centre), Some(Hit::Indicator(i)));
        }
    }

    #[test]
    fn no_slides_no_indicators() {
        let layout = layout(0);
        assert!(layout.indicators.is_empty());
        assert_eq!(layout.hit(Vector2::new(300.0, 235.0)), None);
    }

    #[test]
    fn contains_tracks_bounds() {
        let layout = Layout::new(Rectangle::new(100.0, 50.0, 200.0, 100.0), 2);
        assert!(layout.contains(Vector2::new(150.0, 100.0)));
        assert!(!layout.contains(Vector2::new(50.0, 100.0)));
    }
}
