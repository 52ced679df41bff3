//! Dot selection input adapters
//!
//! The controller does not care how the UI collects the dot choice; it only
//! needs the fixed 4-slot layout.

use crate::error::CoreResult;
use crate::types::{Dot, DotSelection};

/// Converts a UI dot selection into the 4-slot layout.
pub trait DotInput: Send {
    /// Current selection as sent to the device
    fn selection(&self) -> DotSelection;

    /// Called once the selection has been dispatched
    fn after_submit(&mut self) {}
}

/// One checkbox per dot. The choice persists across submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckboxDots {
    slots: [bool; 4],
}

impl CheckboxDots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, dot: Dot, checked: bool) {
        self.slots[dot.index()] = checked;
    }

    pub fn toggle(&mut self, dot: Dot) {
        self.slots[dot.index()] = !self.slots[dot.index()];
    }

    #[must_use]
    pub fn is_checked(&self, dot: Dot) -> bool {
        self.slots[dot.index()]
    }
}

impl DotInput for CheckboxDots {
    fn selection(&self) -> DotSelection {
        DotSelection::from(self.slots)
    }
}

/// Multi-select list of dots. Emptied after each submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSelectDots {
    selected: Vec<Dot>,
}

impl MultiSelectDots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, dot: Dot) {
        if !self.selected.contains(&dot) {
            self.selected.push(dot);
        }
    }

    pub fn deselect(&mut self, dot: Dot) {
        self.selected.retain(|d| *d != dot);
    }

    /// Replace the selection with raw UI indices.
    ///
    /// Any index outside 0..=3 rejects the whole selection and leaves the
    /// previous one in place.
    pub fn select_indices(&mut self, indices: &[usize]) -> CoreResult<()> {
        let dots = indices
            .iter()
            .map(|i| Dot::try_from(*i))
            .collect::<CoreResult<Vec<_>>>()?;
        self.selected.clear();
        for dot in dots {
            self.select(dot);
        }
        Ok(())
    }

    #[must_use]
    pub fn selected(&self) -> &[Dot] {
        &self.selected
    }
}

impl DotInput for MultiSelectDots {
    fn selection(&self) -> DotSelection {
        DotSelection::from_dots(&self.selected)
    }

    fn after_submit(&mut self) {
        self.selected.clear();
    }
}
