//! Collection protocol for std containers.

use super::{precondition::signed, BidirectionalCollection, Collection, RandomAccessCollection};
use std::{collections::VecDeque, ops::Range};

/// Offset within `0..=len`.
#[track_caller]
fn offset_within(index: usize, distance: isize, len: usize) -> usize {
    index
        .checked_add_signed(distance)
        .filter(|&target| target <= len)
        .unwrap_or_else(|| {
            fail!(
                "Offset {} from {} is out of bounds 0..={}",
                distance,
                index,
                len
            )
        })
}

#[track_caller]
fn after_within(index: usize, len: usize) -> usize {
    precondition!(index < len, "Can't advance past end index {}", len);
    index + 1
}

#[track_caller]
fn before_within(index: usize, len: usize) -> usize {
    precondition!(
        index > 0 && index <= len,
        "Can't step before start index from {}",
        index
    );
    index - 1
}

/// Implements the protocol for a container with `usize` positions and `len()`.
macro_rules! sequence_collection {
    (impl[$($g:tt)*] for $ty:ty => $element:ty, |$this:ident, $index:ident| $at:expr) => {
        impl<$($g)*> Collection for $ty {
            type Element = $element;
            type Index = usize;

            fn start_index(&self) -> usize {
                0
            }

            fn end_index(&self) -> usize {
                self.len()
            }

            fn at(&self, index: &usize) -> $element {
                let $this = self;
                let $index = *index;
                $at.unwrap_or_else(|| {
                    fail!("Can't subscript index {} of length {}", $index, $this.len())
                })
            }

            fn index_after(&self, index: &usize) -> usize {
                after_within(*index, self.len())
            }

            fn is_empty(&self) -> bool {
                self.len() == 0
            }

            fn count(&self) -> usize {
                self.len()
            }

            fn distance(&self, from: &usize, to: &usize) -> isize {
                signed(*to) - signed(*from)
            }

            fn index_offset_by(&self, index: &usize, distance: isize) -> usize {
                offset_within(*index, distance, self.len())
            }
        }

        impl<$($g)*> BidirectionalCollection for $ty {
            fn index_before(&self, index: &usize) -> usize {
                before_within(*index, self.len())
            }
        }

        impl<$($g)*> RandomAccessCollection for $ty {}
    };
}

sequence_collection!(impl['a, T] for &'a [T] => &'a T, |this, index| <[T]>::get(*this, index));
sequence_collection!(impl[T: Clone] for Vec<T> => T, |this, index| this.get(index).cloned());
sequence_collection!(impl[T: Clone] for VecDeque<T> => T, |this, index| this.get(index).cloned());

/// Implements the protocol for ranges of integers, where index and element are the value.
macro_rules! range_collection {
    ($($int:ty),+) => {
        $(
            impl Collection for Range<$int> {
                type Element = $int;
                type Index = $int;

                fn start_index(&self) -> $int {
                    self.start
                }

                fn end_index(&self) -> $int {
                    self.end.max(self.start)
                }

                fn at(&self, index: &$int) -> $int {
                    precondition!(
                        self.contains(index),
                        "Can't subscript {} outside of {:?}",
                        index,
                        self
                    );
                    *index
                }

                fn index_after(&self, index: &$int) -> $int {
                    precondition!(
                        *index < self.end_index(),
                        "Can't advance past end index {}",
                        self.end_index()
                    );
                    index + 1
                }

                fn is_empty(&self) -> bool {
                    self.start >= self.end
                }

                fn count(&self) -> usize {
                    usize::try_from((self.end_index() as i128) - (self.start as i128))
                        .unwrap_or_else(|_| fail!("Count of {:?} overflows usize", self))
                }

                fn distance(&self, from: &$int, to: &$int) -> isize {
                    isize::try_from((*to as i128) - (*from as i128))
                        .unwrap_or_else(|_| fail!("Distance from {} to {} overflows isize", from, to))
                }

                fn index_offset_by(&self, index: &$int, distance: isize) -> $int {
                    let target = (*index as i128) + distance as i128;
                    precondition!(
                        (self.start as i128) <= target && target <= (self.end_index() as i128),
                        "Offset {} from {} is out of bounds {:?}",
                        distance,
                        index,
                        self
                    );
                    // Within the range, so it fits.
                    target as $int
                }
            }

            impl BidirectionalCollection for Range<$int> {
                fn index_before(&self, index: &$int) -> $int {
                    precondition!(
                        self.start < *index && *index <= self.end_index(),
                        "Can't step before start index from {}",
                        index
                    );
                    index - 1
                }
            }

            impl RandomAccessCollection for Range<$int> {}
        )+
    };
}

range_collection!(usize, u32, u64, i32, i64);
