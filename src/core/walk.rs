//! Navigation of a single constituent of a composite collection.

use super::{BidirectionalCollection, Collection, Movement};

/// Next index that can be subscripted, None if it would be end.
pub fn next_subscriptable<C: Collection + ?Sized>(
    collection: &C,
    index: &C::Index,
) -> Option<C::Index> {
    let next = collection.index_after(index);
    if next == collection.end_index() {
        None
    } else {
        Some(next)
    }
}

/// Index of last element, None if empty.
pub fn last_subscriptable<C: BidirectionalCollection + ?Sized>(
    collection: &C,
) -> Option<C::Index> {
    if collection.is_empty() {
        None
    } else {
        Some(collection.index_before(&collection.end_index()))
    }
}

/// Linear index of `index`.
pub fn offset_from_start<C: Collection + ?Sized>(collection: &C, index: &C::Index) -> usize {
    let distance = collection.distance(&collection.start_index(), index);
    usize::try_from(distance)
        .unwrap_or_else(|_| fail!("Index {:?} is before start index", index))
}

/// Index of linear index `offset`.
pub fn index_at_offset<C: Collection + ?Sized>(collection: &C, offset: usize) -> C::Index {
    collection.index_offset_by(
        &collection.start_index(),
        super::precondition::signed(offset),
    )
}

/// Whether `index` can step forward at all, without stepping.
pub fn classify_step<C: Collection + ?Sized>(collection: &C, index: &C::Index) -> Movement<()> {
    if *index == collection.end_index() {
        Movement::Misnavigation
    } else {
        Movement::Moved(())
    }
}

/// Steps once forward.
pub fn attempt_step<C: Collection + ?Sized>(
    collection: &C,
    index: &C::Index,
) -> Movement<C::Index> {
    if *index == collection.end_index() {
        return Movement::Misnavigation;
    }
    match next_subscriptable(collection, index) {
        Some(next) => Movement::Moved(next),
        None => Movement::BecameEnd,
    }
}

/// Classifies offset of `index` by `distance` in collection of `count` elements,
/// without moving.
pub fn classify_offset<C: Collection + ?Sized>(
    collection: &C,
    index: &C::Index,
    distance: isize,
    count: usize,
) -> Movement<()> {
    match offset_from_start(collection, index).checked_add_signed(distance) {
        Some(target) if target < count => Movement::Moved(()),
        Some(target) if target == count => Movement::BecameEnd,
        _ => Movement::Misnavigation,
    }
}

/// Offsets `index` by `distance` in collection of `count` elements.
///
/// Backward offsets are taken from start, so forward only collections support them.
pub fn attempt_offset<C: Collection + ?Sized>(
    collection: &C,
    index: &C::Index,
    distance: isize,
    count: usize,
) -> Movement<C::Index> {
    classify_offset(collection, index, distance, count).map(|()| {
        if distance >= 0 {
            collection.index_offset_by(index, distance)
        } else {
            let target = offset_from_start(collection, index) - distance.unsigned_abs();
            index_at_offset(collection, target)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping() {
        let v = vec![1, 2, 3];
        assert_eq!(next_subscriptable(&v, &0), Some(1));
        assert_eq!(next_subscriptable(&v, &2), None);
        assert_eq!(last_subscriptable(&v), Some(2));
        assert_eq!(last_subscriptable(&Vec::<u8>::new()), None);
    }

    #[test]
    fn steps() {
        let v = vec![1, 2];
        assert_eq!(attempt_step(&v, &0), Movement::Moved(1));
        assert_eq!(attempt_step(&v, &1), Movement::BecameEnd);
        assert_eq!(attempt_step(&v, &2), Movement::Misnavigation);
        assert_eq!(classify_step(&v, &1), Movement::Moved(()));
        assert_eq!(classify_step(&v, &2), Movement::Misnavigation);
    }

    #[test]
    fn offsets() {
        let r = 10usize..15;
        assert_eq!(offset_from_start(&r, &12), 2);
        assert_eq!(index_at_offset(&r, 4), 14);
        assert_eq!(attempt_offset(&r, &11, 2, 5), Movement::Moved(13));
        assert_eq!(attempt_offset(&r, &11, 4, 5), Movement::BecameEnd);
        assert_eq!(attempt_offset(&r, &11, 5, 5), Movement::Misnavigation);
        assert_eq!(attempt_offset(&r, &11, -2, 5), Movement::Misnavigation);
        assert_eq!(attempt_offset(&r, &15, -1, 5), Movement::Moved(14));
    }

    #[test]
    fn backward_in_forward_only() {
        let c = crate::core::testing::ForwardOnly(&[1, 2, 3]);
        assert_eq!(attempt_offset(&c, &2, -2, 3), Movement::Moved(0));
        assert_eq!(attempt_offset(&c, &3, -1, 3), Movement::Moved(2));
    }

    #[test]
    fn classify_shorter_count() {
        let v = vec![1, 2, 3, 4];
        assert_eq!(classify_offset(&v, &0, 2, 2), Movement::BecameEnd);
        assert_eq!(classify_offset(&v, &0, 3, 2), Movement::Misnavigation);
    }
}
