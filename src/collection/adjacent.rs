use crate::core::{
    cache::Cache, linear, walk, BidirectionalCollection, Collection, Iter, LockstepIndex,
    Position, RandomAccessCollection,
};
use crate::product::*;
use getset::Getters;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines collection of overlapping windows of given width over one base.
macro_rules! adjacent_collection {
    ($(#[$meta:meta])* $name:ident, $uniform:ident, $width:literal;) => {
        $(#[$meta])*
        #[derive(Getters, Clone, Debug)]
        #[getset(get = "pub")]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name<C: Collection> {
            base: C,
            #[getset(skip)]
            #[cfg_attr(feature = "serde", serde(skip))]
            cache: Cache<$uniform<C::Index>, 1>,
        }

        impl<C: Collection> $name<C> {
            pub const WIDTH: usize = $width;

            pub fn new(base: C) -> Self {
                Self {
                    base,
                    cache: Cache::new(),
                }
            }

            pub fn set_base(&mut self, base: C) {
                self.base = base;
                self.cache.invalidate();
            }

            #[must_use]
            pub fn with_base(mut self, base: C) -> Self {
                self.set_base(base);
                self
            }

            pub fn into_inner(self) -> C {
                self.base
            }

            /// Linear index of `index`, where end is `count()`.
            pub fn linear(&self, index: &LockstepIndex<$uniform<C::Index>>) -> usize {
                match index.as_position() {
                    Position::End => self.count(),
                    Position::At(window) => walk::offset_from_start(&self.base, window.first()),
                }
            }

            /// Index at linear index `offset` in `0..=count()`.
            pub fn position_at(&self, offset: usize) -> Position<$uniform<C::Index>> {
                let count = self.count();
                precondition!(
                    offset <= count,
                    "Linear index {} is out of bounds 0..={}",
                    offset,
                    count
                );
                if offset == count {
                    Position::End
                } else {
                    Position::At(self.window_from(walk::index_at_offset(&self.base, offset)))
                }
            }

            /// Window whose first element is at `start`.
            fn window_from(&self, start: C::Index) -> $uniform<C::Index> {
                let mut index = start;
                $uniform::from_array(std::array::from_fn(|k| {
                    if k > 0 {
                        self.base.form_index_after(&mut index);
                    }
                    index.clone()
                }))
            }

            fn base_count(&self) -> usize {
                self.cache.counts(|| [self.base.count()])[0]
            }

            fn check(&self, window: &$uniform<C::Index>) {
                pedantic!(
                    *window.last() < self.base.end_index(),
                    "Window {:?} is past end of base",
                    window
                );
                pedantic!(
                    walk::offset_from_start(&self.base, window.last())
                        == walk::offset_from_start(&self.base, window.first()) + $width - 1,
                    "Window {:?} isn't consecutive",
                    window
                );
            }
        }

        impl<C: Collection> Collection for $name<C> {
            type Element = $uniform<C::Element>;
            type Index = LockstepIndex<$uniform<C::Index>>;

            fn start_index(&self) -> Self::Index {
                self.cache
                    .first(|| {
                        if self.is_empty() {
                            Position::End
                        } else {
                            Position::At(self.window_from(self.base.start_index()))
                        }
                    })
                    .clone()
                    .into()
            }

            fn end_index(&self) -> Self::Index {
                LockstepIndex::end()
            }

            fn at(&self, index: &Self::Index) -> Self::Element {
                let window = index.as_position().expect_position("subscript");
                self.check(window);
                $uniform::from_array(window.clone().into_array().map(|index| self.base.at(&index)))
            }

            fn index_after(&self, index: &Self::Index) -> Self::Index {
                let window = index.as_position().expect_position("advance past");
                self.check(window);
                match walk::next_subscriptable(&self.base, window.last()) {
                    Some(next) => LockstepIndex::at(window.clone().pushed_leftward(next)),
                    None => LockstepIndex::end(),
                }
            }

            fn count(&self) -> usize {
                self.base_count().saturating_sub($width - 1)
            }

            fn is_empty(&self) -> bool {
                self.count() == 0
            }

            fn distance(&self, from: &Self::Index, to: &Self::Index) -> isize {
                linear::distance(self.linear(from), self.linear(to))
            }

            fn index_offset_by(&self, index: &Self::Index, distance: isize) -> Self::Index {
                let target = linear::offset(self.linear(index), distance, self.count());
                self.position_at(target).into()
            }
        }

        impl<C: BidirectionalCollection> BidirectionalCollection for $name<C> {
            fn index_before(&self, index: &Self::Index) -> Self::Index {
                let window = match index.as_position() {
                    Position::End => {
                        precondition!(!self.is_empty(), "Can't step before start index");
                        return self
                            .cache
                            .last(|| {
                                let mut index = self.base.end_index();
                                let mut window: [C::Index; $width] = std::array::from_fn(|_| {
                                    self.base.form_index_before(&mut index);
                                    index.clone()
                                });
                                window.reverse();
                                Position::At($uniform::from_array(window))
                            })
                            .clone()
                            .into();
                    }
                    Position::At(window) => window,
                };
                self.check(window);
                precondition!(
                    *window.first() != self.base.start_index(),
                    "Can't step before start index"
                );
                let previous = self.base.index_before(window.first());
                LockstepIndex::at(window.clone().pushed_rightward(previous))
            }
        }

        impl<C: RandomAccessCollection> RandomAccessCollection for $name<C> {}

        impl<'a, C: Collection> IntoIterator for &'a $name<C> {
            type Item = $uniform<C::Element>;
            type IntoIter = Iter<'a, $name<C>>;

            fn into_iter(self) -> Self::IntoIter {
                Iter::new(self)
            }
        }

        impl<C: Collection + PartialEq> PartialEq for $name<C> {
            fn eq(&self, other: &Self) -> bool {
                self.base == other.base
            }
        }

        impl<C: Collection + Eq> Eq for $name<C> {}

        impl<C: Collection + Hash> Hash for $name<C> {
            fn hash<S: Hasher>(&self, state: &mut S) {
                self.base.hash(state);
            }
        }
    };
}

adjacent_collection!(
    /// Overlapping pairs of consecutive elements.
    Adjacent2Collection, Uniform2, 2;
);

adjacent_collection!(
    /// Overlapping windows of three consecutive elements.
    Adjacent3Collection, Uniform3, 3;
);

adjacent_collection!(Adjacent4Collection, Uniform4, 4;);
adjacent_collection!(Adjacent5Collection, Uniform5, 5;);
adjacent_collection!(Adjacent6Collection, Uniform6, 6;);
adjacent_collection!(Adjacent7Collection, Uniform7, 7;);
adjacent_collection!(Adjacent8Collection, Uniform8, 8;);
adjacent_collection!(Adjacent9Collection, Uniform9, 9;);
