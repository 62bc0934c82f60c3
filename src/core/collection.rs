use super::{precondition::signed, Indices, Iter};
use std::{cmp::Ordering, fmt::Debug};

/// Ordered, multi-pass collection addressed by indices.
///
/// Valid indices are `start_index()` up to and including `end_index()`, where
/// `end_index()` is past the last element and can't be subscripted.
///
/// Provided navigation walks one index at a time. Collections that can do better
/// override `count`, `distance`, and `index_offset_by`.
pub trait Collection {
    type Element;
    type Index: Clone + Ord + Debug;

    /// Index of the first element, or `end_index()` if empty.
    fn start_index(&self) -> Self::Index;

    fn end_index(&self) -> Self::Index;

    /// Element at index.
    ///
    /// Panics if index is `end_index()` or otherwise invalid.
    fn at(&self, index: &Self::Index) -> Self::Element;

    /// Panics if index is `end_index()`.
    fn index_after(&self, index: &Self::Index) -> Self::Index;

    fn form_index_after(&self, index: &mut Self::Index) {
        *index = self.index_after(index);
    }

    fn is_empty(&self) -> bool {
        self.start_index() == self.end_index()
    }

    fn count(&self) -> usize {
        walk_count(self, &self.start_index(), &self.end_index())
    }

    /// Number of steps from `from` to `to`, negative if `to` is before `from`.
    fn distance(&self, from: &Self::Index, to: &Self::Index) -> isize {
        match from.cmp(to) {
            Ordering::Equal => 0,
            Ordering::Less => signed(walk_count(self, from, to)),
            Ordering::Greater => -signed(walk_count(self, to, from)),
        }
    }

    /// Panics if result would be outside of `start_index()..=end_index()`.
    ///
    /// Negative distances are supported only by collections that override this.
    fn index_offset_by(&self, index: &Self::Index, distance: isize) -> Self::Index {
        precondition!(
            distance >= 0,
            "Can't offset by {} in forward only collection",
            distance
        );
        let mut index = index.clone();
        for _ in 0..distance {
            self.form_index_after(&mut index);
        }
        index
    }

    /// Same as `index_offset_by` but returns None if `limit` would be passed
    /// before reaching the destination.
    fn index_offset_by_limited(
        &self,
        index: &Self::Index,
        distance: isize,
        limit: &Self::Index,
    ) -> Option<Self::Index> {
        let to_limit = self.distance(index, limit);
        let crossed = if distance > 0 {
            (0..distance).contains(&to_limit)
        } else {
            (distance + 1..=0).contains(&to_limit)
        };
        if crossed {
            None
        } else {
            Some(self.index_offset_by(index, distance))
        }
    }

    fn form_index_offset_by(&self, index: &mut Self::Index, distance: isize) {
        *index = self.index_offset_by(index, distance);
    }

    fn first_element(&self) -> Option<Self::Element> {
        let start = self.start_index();
        if start == self.end_index() {
            None
        } else {
            Some(self.at(&start))
        }
    }

    fn elements(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    fn indices(&self) -> Indices<'_, Self> {
        Indices::new(self)
    }
}

/// Collection that can also step backward.
pub trait BidirectionalCollection: Collection {
    /// Panics if index is `start_index()`.
    fn index_before(&self, index: &Self::Index) -> Self::Index;

    fn form_index_before(&self, index: &mut Self::Index) {
        *index = self.index_before(index);
    }

    fn last_element(&self) -> Option<Self::Element> {
        if self.is_empty() {
            None
        } else {
            Some(self.at(&self.index_before(&self.end_index())))
        }
    }
}

/// Marker for collections with O(1) `distance` and `index_offset_by`.
pub trait RandomAccessCollection: BidirectionalCollection {}

/// Offset by walking in either direction.
///
/// For bidirectional collections that don't have anything faster.
pub fn walk_offset_bidirectional<C: BidirectionalCollection + ?Sized>(
    collection: &C,
    index: &C::Index,
    distance: isize,
) -> C::Index {
    let mut index = index.clone();
    if distance >= 0 {
        for _ in 0..distance {
            collection.form_index_after(&mut index);
        }
    } else {
        for _ in distance..0 {
            collection.form_index_before(&mut index);
        }
    }
    index
}

/// Steps from `from` until `to`. Panics if end is reached first.
fn walk_count<C: Collection + ?Sized>(collection: &C, from: &C::Index, to: &C::Index) -> usize {
    let end = collection.end_index();
    let mut index = from.clone();
    let mut count = 0;
    while &index != to {
        precondition!(index != end, "Index {:?} isn't reachable from {:?}", to, from);
        collection.form_index_after(&mut index);
        count += 1;
    }
    count
}
