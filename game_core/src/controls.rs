use crate::components::Side;

/// Logical paddle controls, independent of the physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
}

impl Intent {
    pub fn side(self) -> Side {
        match self {
            Intent::LeftUp | Intent::LeftDown => Side::Left,
            Intent::RightUp | Intent::RightDown => Side::Right,
        }
    }

    /// Direction along y (y grows downwards)
    pub fn dir(self) -> i8 {
        match self {
            Intent::LeftUp | Intent::RightUp => -1,
            Intent::LeftDown | Intent::RightDown => 1,
        }
    }
}

/// Discrete input delivered between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Intent),
    /// Releasing either key of a side stops that paddle
    Released(Intent),
    /// Continue after a lost point
    Confirm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_side_and_direction() {
        assert_eq!(Intent::LeftUp.side(), Side::Left);
        assert_eq!(Intent::RightDown.side(), Side::Right);
        assert_eq!(Intent::LeftUp.dir(), -1);
        assert_eq!(Intent::RightDown.dir(), 1);
    }
}
