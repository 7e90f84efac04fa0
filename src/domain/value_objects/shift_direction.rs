//! Shift direction for reordering selected siblings

/// Which neighbour a selected project swaps places with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShiftDirection {
    /// Swap with the preceding sibling
    #[default]
    Backward,
    /// Swap with the following sibling
    Forward,
}

impl ShiftDirection {
    /// Host-facing mapping: `reverse == false` shifts backward
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            ShiftDirection::Forward
        } else {
            ShiftDirection::Backward
        }
    }

    /// Index of the neighbour to swap with, or `None` at the boundary
    pub fn neighbour(&self, index: usize, len: usize) -> Option<usize> {
        match self {
            ShiftDirection::Backward => index.checked_sub(1),
            ShiftDirection::Forward => {
                let next = index + 1;
                (next < len).then_some(next)
            }
        }
    }
}
