use crate::direct::DirectWrap;
use crate::loop_clone::LoopCloneWrap;
use crate::state::MountPolicy;

/// Outcome of resolving a navigation target against the slide list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// New current index into the slide list.
    pub index: usize,
    /// Real slide whose indicator becomes active.
    pub indicator: usize,
    /// Place the track here without animation before moving to `index`.
    pub jump_from: Option<usize>,
    /// `index` is the synthetic duplicate; return to 0 once the track arrives.
    pub snap_back: bool,
}

/// The "advance position" capability. Each mount policy wraps out-of-range
/// targets its own way.
pub trait WrapStrategy {
    /// Whether the slide list carries a trailing duplicate of the first slide.
    fn appends_duplicate(&self) -> bool;

    /// `real_len` is at least 2; callers never navigate smaller lists.
    fn resolve(&self, current: usize, target: isize, real_len: usize) -> Move;
}

pub fn strategy_for(policy: MountPolicy) -> Box<dyn WrapStrategy> {
    match policy {
        MountPolicy::Direct => Box::new(DirectWrap),
        MountPolicy::LoopClone => Box::new(LoopCloneWrap),
    }
}
