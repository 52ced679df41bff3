//! Indicator dot types

use crate::error::CoreError;

/// One of the four indicator dots, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dot {
    MostLeft,
    MiddleLeft,
    MiddleRight,
    MostRight,
}

impl Dot {
    pub const ALL: [Self; 4] = [
        Self::MostLeft,
        Self::MiddleLeft,
        Self::MiddleRight,
        Self::MostRight,
    ];

    /// Position 0..=3
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::MostLeft => 0,
            Self::MiddleLeft => 1,
            Self::MiddleRight => 2,
            Self::MostRight => 3,
        }
    }
}

impl TryFrom<usize> for Dot {
    type Error = CoreError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoreError::InvalidDotIndex(index))
    }
}

/// Fixed 4-slot dot layout sent to the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotSelection {
    pub most_left: bool,
    pub middle_left: bool,
    pub middle_right: bool,
    pub most_right: bool,
}

impl DotSelection {
    #[must_use]
    pub fn new(most_left: bool, middle_left: bool, middle_right: bool, most_right: bool) -> Self {
        Self {
            most_left,
            middle_left,
            middle_right,
            most_right,
        }
    }

    /// Build the layout from a sparse list of lit dots
    #[must_use]
    pub fn from_dots(dots: &[Dot]) -> Self {
        let mut selection = Self::default();
        for dot in dots {
            selection.set(*dot, true);
        }
        selection
    }

    pub fn set(&mut self, dot: Dot, lit: bool) {
        match dot {
            Dot::MostLeft => self.most_left = lit,
            Dot::MiddleLeft => self.middle_left = lit,
            Dot::MiddleRight => self.middle_right = lit,
            Dot::MostRight => self.most_right = lit,
        }
    }

    #[must_use]
    pub fn is_lit(&self, dot: Dot) -> bool {
        self.to_array()[dot.index()]
    }

    #[must_use]
    pub fn to_array(self) -> [bool; 4] {
        [
            self.most_left,
            self.middle_left,
            self.middle_right,
            self.most_right,
        ]
    }
}

impl From<[bool; 4]> for DotSelection {
    fn from(slots: [bool; 4]) -> Self {
        Self::new(slots[0], slots[1], slots[2], slots[3])
    }
}
