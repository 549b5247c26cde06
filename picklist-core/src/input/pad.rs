//! Pad button bitmasks

use core::ops::{BitAnd, BitOr, BitOrAssign};

/// Set of pad buttons, one bit per button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(u16);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);
    pub const UP: Buttons = Buttons(1 << 0);
    pub const DOWN: Buttons = Buttons(1 << 1);
    pub const LEFT: Buttons = Buttons(1 << 2);
    pub const RIGHT: Buttons = Buttons(1 << 3);
    /// Primary action button
    pub const CONFIRM: Buttons = Buttons(1 << 4);
    /// Secondary action button
    pub const CANCEL: Buttons = Buttons(1 << 5);

    /// All four directions
    pub const DIRECTIONS: Buttons = Buttons(0x0f);

    /// Build a set from raw bits (unknown bits are kept but never matched)
    pub const fn from_bits(bits: u16) -> Self {
        Buttons(bits)
    }

    /// Raw bit representation
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// True if every button in `other` is in this set
    pub const fn contains(self, other: Buttons) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// True if any button in `other` is in this set
    pub const fn intersects(self, other: Buttons) -> bool {
        self.0 & other.0 != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Add buttons to the set
    pub fn insert(&mut self, other: Buttons) {
        self.0 |= other.0;
    }
}

impl BitOr for Buttons {
    type Output = Buttons;

    fn bitor(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    fn bitor_assign(&mut self, rhs: Buttons) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Buttons;

    fn bitand(self, rhs: Buttons) -> Buttons {
        Buttons(self.0 & rhs.0)
    }
}

/// Pad directions, in the order their steps are applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Application order: up, down, left, right
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Button bit for this direction
    pub const fn button(self) -> Buttons {
        match self {
            Direction::Up => Buttons::UP,
            Direction::Down => Buttons::DOWN,
            Direction::Left => Buttons::LEFT,
            Direction::Right => Buttons::RIGHT,
        }
    }

    /// Index into per-direction arrays
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// One frame of pad state as reported by the input collaborator
///
/// `held` is the level state used for repeat; `pushed` holds the buttons
/// that went down since the previous poll (edge-triggered).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PadSnapshot {
    pub held: Buttons,
    pub pushed: Buttons,
}

impl PadSnapshot {
    /// Nothing held, nothing pushed
    pub const IDLE: PadSnapshot = PadSnapshot {
        held: Buttons::NONE,
        pushed: Buttons::NONE,
    };

    pub const fn new(held: Buttons, pushed: Buttons) -> Self {
        Self { held, pushed }
    }

    /// Buttons held this frame and pushed on this very frame
    pub const fn press(buttons: Buttons) -> Self {
        Self {
            held: buttons,
            pushed: buttons,
        }
    }

    /// Buttons held over from an earlier frame
    pub const fn hold(buttons: Buttons) -> Self {
        Self {
            held: buttons,
            pushed: Buttons::NONE,
        }
    }
}
