use super::{BidirectionalCollection, Collection};
use std::iter::FusedIterator;

/// Iterator over elements of a collection.
pub struct Iter<'a, C: Collection + ?Sized> {
    collection: &'a C,
    front: C::Index,
    back: C::Index,
    remaining: usize,
}

impl<'a, C: Collection + ?Sized> Iter<'a, C> {
    pub fn new(collection: &'a C) -> Self {
        Self {
            collection,
            front: collection.start_index(),
            back: collection.end_index(),
            remaining: collection.count(),
        }
    }
}

impl<'a, C: Collection + ?Sized> Iterator for Iter<'a, C> {
    type Item = C::Element;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let element = self.collection.at(&self.front);
        self.collection.form_index_after(&mut self.front);
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, C: BidirectionalCollection + ?Sized> DoubleEndedIterator for Iter<'a, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.collection.form_index_before(&mut self.back);
        self.remaining -= 1;
        Some(self.collection.at(&self.back))
    }
}

impl<'a, C: Collection + ?Sized> ExactSizeIterator for Iter<'a, C> {}

impl<'a, C: Collection + ?Sized> FusedIterator for Iter<'a, C> {}

/// Iterator over valid, non end, indices of a collection.
pub struct Indices<'a, C: Collection + ?Sized> {
    collection: &'a C,
    front: C::Index,
    back: C::Index,
}

impl<'a, C: Collection + ?Sized> Indices<'a, C> {
    pub fn new(collection: &'a C) -> Self {
        Self {
            collection,
            front: collection.start_index(),
            back: collection.end_index(),
        }
    }
}

impl<'a, C: Collection + ?Sized> Iterator for Indices<'a, C> {
    type Item = C::Index;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let next = self.collection.index_after(&self.front);
        Some(std::mem::replace(&mut self.front, next))
    }
}

impl<'a, C: BidirectionalCollection + ?Sized> DoubleEndedIterator for Indices<'a, C> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.collection.form_index_before(&mut self.back);
        Some(self.back.clone())
    }
}

impl<'a, C: Collection + ?Sized> FusedIterator for Indices<'a, C> {}

#[cfg(test)]
mod tests {
    use crate::core::testing::{ForwardOnly, Stepper};
    use super::*;

    #[test]
    fn forward() {
        let c = ForwardOnly(&[1, 2, 3]);
        let iter = c.elements();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn both_ends() {
        let c = Stepper(&[1, 2, 3, 4]);
        let mut iter = c.elements();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn reversed() {
        let c = Stepper(&[1, 2, 3]);
        assert_eq!(c.elements().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(c.indices().rev().collect::<Vec<_>>(), vec![2, 1, 0]);
    }

    #[test]
    fn indices() {
        let c = ForwardOnly(&[5, 6]);
        assert_eq!(c.indices().collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(ForwardOnly(&[]).indices().next(), None);
    }
}
