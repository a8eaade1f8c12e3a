use crate::engine::{Move, WrapStrategy};

/// Seamless wrap through a duplicate of the first slide placed after the last
/// one. Moving forward from the last slide lands on the duplicate, which the
/// position controller swaps for the real first slide once the track stops.
pub struct LoopCloneWrap;

impl WrapStrategy for LoopCloneWrap {
    fn appends_duplicate(&self) -> bool {
        true
    }

    fn resolve(&self, current: usize, target: isize, real_len: usize) -> Move {
        if target == real_len as isize {
            return Move { index: real_len, indicator: 0, jump_from: None, snap_back: true };
        }

        let index = target.rem_euclid(real_len as isize) as usize;

        // Backwards from the first slide: start on the duplicate so the track
        // slides left into the last slide instead of sweeping across all of them.
        let jump_from = (target < 0 && current == 0 && index == real_len - 1).then_some(real_len);

        Move { index, indicator: index, jump_from, snap_back: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_from_last_enters_duplicate() {
        let mv = LoopCloneWrap.resolve(2, 3, 3);
        assert_eq!(mv, Move { index: 3, indicator: 0, jump_from: None, snap_back: true });
    }

    #[test]
    fn in_range_targets_apply_directly() {
        for target in 0..3 {
            let mv = LoopCloneWrap.resolve(0, target, 3);
            assert_eq!(mv.index, target as usize);
            assert_eq!(mv.indicator, target as usize);
            assert!(!mv.snap_back);
        }
    }

    #[test]
    fn backwards_from_first_starts_on_duplicate() {
        let mv = LoopCloneWrap.resolve(0, -1, 3);
        assert_eq!(mv.index, 2);
        assert_eq!(mv.jump_from, Some(3));
    }

    #[test]
    fn far_targets_wrap() {
        assert_eq!(LoopCloneWrap.resolve(0, 5, 3).index, 2);
        let mv = LoopCloneWrap.resolve(1, -2, 3);
        assert_eq!(mv.index, 1);
        assert_eq!(mv.jump_from, None);
    }
}
