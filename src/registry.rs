use std::rc::Rc;

use crate::slide::{Indicator, Slide};

/// Normalized slide list and one indicator per real slide.
pub struct SlideRegistry<T> {
    slides: Vec<Slide<T>>,
    indicators: Vec<Indicator>,
}

impl<T> SlideRegistry<T> {
    pub fn new() -> Self {
        Self { slides: Vec::new(), indicators: Vec::new() }
    }

    /// Replaces the slide list with `fragments`, in order. With
    /// `append_duplicate` the first slide is repeated after the last one.
    /// The first indicator starts out active.
    pub fn build(&mut self, fragments: impl IntoIterator<Item = T>, append_duplicate: bool) {
        self.slides = fragments.into_iter().map(|f| Slide::new(Rc::new(f))).collect();

        self.indicators = vec![Indicator::default(); self.slides.len()];
        if let Some(first) = self.indicators.first_mut() {
            first.active = true;
        }

        if append_duplicate {
            if let Some(duplicate) = self.slides.first().map(Slide::duplicate) {
                self.slides.push(duplicate);
            }
        }
    }

    pub fn clear(&mut self) {
        self.slides.clear();
        self.indicators.clear();
    }

    pub fn slides(&self) -> &[Slide<T>] {
        &self.slides
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn indicators_mut(&mut self) -> &mut [Indicator] {
        &mut self.indicators
    }

    /// Number of host-supplied slides, excluding the duplicate.
    pub fn real_len(&self) -> usize {
        self.indicators.len()
    }
}

impl<T> Default for SlideRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_build_keeps_order() {
        let mut registry = SlideRegistry::new();
        registry.build(["a", "b", "c"], false);

        let contents: Vec<_> = registry.slides().iter().map(|s| *s.content()).collect();
        assert_eq!(contents, ["a", "b", "c"]);
        assert_eq!(registry.real_len(), 3);
        assert!(registry.slides().iter().all(|s| !s.is_synthetic()));
    }

    #[test]
    fn loop_build_appends_duplicate_without_indicator() {
        let mut registry = SlideRegistry::new();
        registry.build(["a", "b", "c"], true);

        assert_eq!(registry.slides().len(), 4);
        assert_eq!(registry.indicators().len(), 3);
        let last = registry.slides().last().unwrap();
        assert!(last.is_synthetic());
        assert_eq!(*last.content(), "a");
    }

    #[test]
    fn first_indicator_active() {
        let mut registry = SlideRegistry::new();
        registry.build([1, 2], false);
        assert_eq!(registry.indicators(), [Indicator { active: true }, Indicator { active: false }]);
    }

    #[test]
    fn empty_build_has_nothing() {
        let mut registry = SlideRegistry::<&str>::new();
        registry.build([], true);
        assert!(registry.slides().is_empty());
        assert!(registry.indicators().is_empty());
    }

    #[test]
    fn rebuild_replaces_previous_set() {
        let mut registry = SlideRegistry::new();
        registry.build(["a", "b", "c"], false);
        registry.build(["x"], false);
        assert_eq!(registry.real_len(), 1);
        assert!(registry.indicators()[0].active);
    }
}
