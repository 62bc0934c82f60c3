//! Constituents with restricted navigation, for tests.

use super::*;

/// Forward only view of a slice, so that provided navigation is used.
pub(crate) struct ForwardOnly<'a>(pub &'a [u32]);

impl<'a> Collection for ForwardOnly<'a> {
    type Element = u32;
    type Index = usize;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.0.len()
    }

    fn at(&self, index: &usize) -> u32 {
        self.0[*index]
    }

    fn index_after(&self, index: &usize) -> usize {
        precondition!(*index < self.0.len(), "Can't advance past end index");
        index + 1
    }
}

/// Bidirectional but not random access.
pub(crate) struct Stepper<'a>(pub &'a [u32]);

impl<'a> Collection for Stepper<'a> {
    type Element = u32;
    type Index = usize;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.0.len()
    }

    fn at(&self, index: &usize) -> u32 {
        self.0[*index]
    }

    fn index_after(&self, index: &usize) -> usize {
        precondition!(*index < self.0.len(), "Can't advance past end index");
        index + 1
    }

    fn index_offset_by(&self, index: &usize, distance: isize) -> usize {
        walk_offset_bidirectional(self, index, distance)
    }
}

impl<'a> BidirectionalCollection for Stepper<'a> {
    fn index_before(&self, index: &usize) -> usize {
        precondition!(*index > 0, "Can't step before start index");
        index - 1
    }
}

/// Forward only view that tallies its steps.
pub(crate) struct Tally<'a> {
    pub data: &'a [u32],
    pub steps: std::cell::Cell<usize>,
}

impl<'a> Tally<'a> {
    pub fn new(data: &'a [u32]) -> Self {
        Self {
            data,
            steps: std::cell::Cell::new(0),
        }
    }
}

impl<'a> Collection for Tally<'a> {
    type Element = u32;
    type Index = usize;

    fn start_index(&self) -> usize {
        0
    }

    fn end_index(&self) -> usize {
        self.data.len()
    }

    fn at(&self, index: &usize) -> u32 {
        self.data[*index]
    }

    fn index_after(&self, index: &usize) -> usize {
        precondition!(*index < self.data.len(), "Can't advance past end index");
        self.steps.set(self.steps.get() + 1);
        index + 1
    }
}
