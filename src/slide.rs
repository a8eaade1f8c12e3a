use std::rc::Rc;

/// One entry of the slide list. The content belongs to the host; a slide only
/// holds a shared handle to it, so the synthetic loop duplicate costs nothing.
#[derive(Debug)]
pub struct Slide<T> {
    content: Rc<T>,
    synthetic: bool,
}

impl<T> Slide<T> {
    pub fn new(content: Rc<T>) -> Self {
        Self { content, synthetic: false }
    }

    /// A trailing copy of `self` that only exists so the track can wrap forward.
    pub fn duplicate(&self) -> Self {
        Self { content: Rc::clone(&self.content), synthetic: true }
    }

    pub fn content(&self) -> &T {
        &self.content
    }

    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }
}

/// Position marker for one real slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Indicator {
    pub active: bool,
}
