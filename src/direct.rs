use crate::engine::{Move, WrapStrategy};

/// Modulo wrap: stepping past either end lands on the other end.
pub struct DirectWrap;

impl WrapStrategy for DirectWrap {
    fn appends_duplicate(&self) -> bool {
        false
    }

    fn resolve(&self, _current: usize, target: isize, real_len: usize) -> Move {
        let index = target.rem_euclid(real_len as isize) as usize;
        Move { index, indicator: index, jump_from: None, snap_back: false }
    }
}
