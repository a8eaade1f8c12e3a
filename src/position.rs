use log::debug;
use raylib::prelude::*;

use crate::constants::*;
use crate::engine::WrapStrategy;
use crate::slide::Indicator;

struct Transition {
    tween: ease::Tween,
    elapsed: f32,
    target: f32,
    snap_back: bool,
}

impl Transition {
    fn new(from: f32, to: f32, snap_back: bool) -> Self {
        Self {
            tween: ease::Tween::new(ease::cubic_in_out, from, to, TRANSITION_DURATION),
            elapsed: 0.0,
            target: to,
            snap_back,
        }
    }
}

/// Current index and visual offset of the slide track. The offset is measured
/// in slide widths: slide `i` is fully visible when `offset == i`.
pub struct PositionController {
    strategy: Box<dyn WrapStrategy>,
    current: usize,
    offset: f32,
    transition: Option<Transition>,
}

impl PositionController {
    pub fn new(strategy: Box<dyn WrapStrategy>) -> Self {
        Self { strategy, current: 0, offset: 0.0, transition: None }
    }

    pub fn strategy(&self) -> &dyn WrapStrategy {
        self.strategy.as_ref()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Drops any position state, e.g. before the slide set is rebuilt.
    pub fn clear(&mut self) {
        self.current = 0;
        self.offset = 0.0;
        self.transition = None;
    }

    /// Moves to `target`, wrapped by the strategy. Fewer than two real slides
    /// (one indicator each) make this a no-op.
    pub fn go_to(&mut self, target: isize, animate: bool, indicators: &mut [Indicator]) {
        let real_len = indicators.len();
        if real_len < 2 {
            return;
        }

        self.settle();

        let mv = self.strategy.resolve(self.current, target, real_len);
        // Jumping mid-flight would be visible; from a moving track animate directly.
        if let Some(from) = mv.jump_from.filter(|_| self.transition.is_none()) {
            self.offset = from as f32;
        }
        self.current = mv.index;

        let destination = mv.index as f32;
        if animate && (destination - self.offset).abs() > f32::EPSILON {
            self.transition = Some(Transition::new(self.offset, destination, mv.snap_back));
        } else {
            self.transition = None;
            self.offset = destination;
            if mv.snap_back {
                self.snap_back();
            }
        }

        activate(indicators, mv.indicator);
    }

    /// `go_to(current + delta)`, resolved after any pending snap-back so the
    /// step starts from a real slide.
    pub fn step(&mut self, delta: isize, indicators: &mut [Indicator]) {
        self.settle();
        self.go_to(self.current as isize + delta, true, indicators);
    }

    /// Advances the running transition by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };

        transition.elapsed += dt;
        self.offset = transition.tween.apply(dt);

        if transition.elapsed >= TRANSITION_DURATION {
            let (target, snap_back) = (transition.target, transition.snap_back);
            self.transition = None;
            self.offset = target;
            if snap_back {
                self.snap_back();
            }
        }
    }

    /// Applies a pending snap-back immediately. Other transitions are left to
    /// be superseded by the next move.
    fn settle(&mut self) {
        if self.transition.as_ref().is_some_and(|t| t.snap_back) {
            self.transition = None;
            self.snap_back();
        }
    }

    // The duplicate and the first slide look the same, so this jump is invisible.
    fn snap_back(&mut self) {
        debug!("Snapping back from duplicate slide {} to 0", self.current);
        self.current = 0;
        self.offset = 0.0;
    }
}

fn activate(indicators: &mut [Indicator], index: usize) {
    for (i, indicator) in indicators.iter_mut().enumerate() {
        indicator.active = i == index;
    }
}
