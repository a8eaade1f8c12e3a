use std::time::Duration;

use log::debug;

use crate::autoplay::AutoplayTimer;
use crate::constants::DEFAULT_INTERVAL;
use crate::engine::strategy_for;
use crate::position::PositionController;
use crate::registry::SlideRegistry;
use crate::slide::{Indicator, Slide};
use crate::state::{MountPolicy, ReloadPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselConfig {
    pub policy: MountPolicy,
    pub interval: Duration,
    pub reload: ReloadPosition,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            policy: MountPolicy::default(),
            interval: DEFAULT_INTERVAL,
            reload: ReloadPosition::default(),
        }
    }
}

/// The carousel widget: slide registry, position controller and autoplay
/// timer behind the surface a host drives.
///
/// All methods are safe to call in any state. While unmounted, or with fewer
/// than two slides, navigation and autoplay do nothing.
pub struct Carousel<T> {
    config: CarouselConfig,
    registry: SlideRegistry<T>,
    position: PositionController,
    autoplay: AutoplayTimer,
    mounted: bool,
    hovered: bool,
}

impl<T> Carousel<T> {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            registry: SlideRegistry::new(),
            position: PositionController::new(strategy_for(config.policy)),
            autoplay: AutoplayTimer::new(config.interval),
            mounted: false,
            hovered: false,
        }
    }

    /// Takes ownership of the host's fragments, shows the first one and
    /// starts autoplay unless the pointer is over the widget. Mounting again
    /// replaces the previous slides.
    pub fn mount(&mut self, fragments: impl IntoIterator<Item = T>) {
        if self.mounted {
            self.unmount();
        }

        let append_duplicate = self.position.strategy().appends_duplicate();
        self.registry.build(fragments, append_duplicate);
        self.position.clear();
        self.position.go_to(0, false, self.registry.indicators_mut());
        self.mounted = true;

        debug!(
            "Mounted {} slides ({:?}, every {:?})",
            self.registry.real_len(),
            self.config.policy,
            self.autoplay.interval()
        );
        if !self.hovered {
            self.autoplay.start(self.registry.real_len());
        }
    }

    pub fn unmount(&mut self) {
        self.autoplay.stop();
        self.registry.clear();
        self.position.clear();
        self.mounted = false;
        debug!("Unmounted");
    }

    /// The host's slide set changed. Only the direct policy follows such
    /// changes; a loop carousel keeps the slides it was mounted with.
    pub fn slides_changed(&mut self, fragments: impl IntoIterator<Item = T>) {
        if !self.mounted {
            return;
        }
        if self.config.policy != MountPolicy::Direct {
            debug!("Ignoring slide set change for {:?} carousel", self.config.policy);
            return;
        }

        let previous = self.position.current();
        self.registry.build(fragments, false);
        self.position.clear();

        let real_len = self.registry.real_len();
        let target = match self.config.reload {
            ReloadPosition::Reset => 0,
            ReloadPosition::Preserve => previous.min(real_len.saturating_sub(1)),
        };
        self.position.go_to(target as isize, false, self.registry.indicators_mut());

        debug!("Slide set changed: {} slides, at {}", real_len, self.position.current());
        self.autoplay.stop();
        if !self.hovered {
            self.autoplay.start(real_len);
        }
    }

    pub fn next(&mut self) {
        self.navigate(1);
    }

    pub fn previous(&mut self) {
        self.navigate(-1);
    }

    /// Indicator click.
    pub fn select(&mut self, indicator: usize) {
        if !self.mounted || indicator >= self.registry.real_len() {
            return;
        }
        self.position.go_to(indicator as isize, true, self.registry.indicators_mut());
        self.autoplay.reset(self.registry.real_len());
    }

    pub fn go_to(&mut self, target: isize, animate: bool) {
        if self.mounted {
            self.position.go_to(target, animate, self.registry.indicators_mut());
        }
    }

    pub fn pointer_entered(&mut self) {
        self.hovered = true;
        self.autoplay.stop();
    }

    pub fn pointer_left(&mut self) {
        self.hovered = false;
        if self.mounted {
            self.autoplay.start(self.registry.real_len());
        }
    }

    /// Advances the track animation and the autoplay timer by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.mounted {
            return;
        }

        self.position.update(dt);

        let elapsed = Duration::try_from_secs_f32(dt).unwrap_or_default();
        for _ in 0..self.autoplay.tick(elapsed) {
            self.position.step(1, self.registry.indicators_mut());
        }
    }

    fn navigate(&mut self, delta: isize) {
        if !self.mounted {
            return;
        }
        self.position.step(delta, self.registry.indicators_mut());
        self.autoplay.reset(self.registry.real_len());
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn slides(&self) -> &[Slide<T>] {
        self.registry.slides()
    }

    pub fn indicators(&self) -> &[Indicator] {
        self.registry.indicators()
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.registry.indicators().iter().position(|i| i.active)
    }

    pub fn real_len(&self) -> usize {
        self.registry.real_len()
    }

    pub fn current_index(&self) -> usize {
        self.position.current()
    }

    /// Track translation in slide widths.
    pub fn offset(&self) -> f32 {
        self.position.offset()
    }
}
