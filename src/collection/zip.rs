use crate::core::{
    cache::Cache, linear, walk, BidirectionalCollection, Collection, Iter, LockstepIndex,
    Position, RandomAccessCollection,
};
use crate::product::*;
use getset::Getters;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines zip collection of given arity.
///
/// All components of a position are at the same offset in their constituents,
/// so the first one stands for the whole position.
macro_rules! zip_collection {
    (
        $(#[$meta:meta])*
        $name:ident, $product:ident, $arity:literal;
        $($c:ident $f:ident $k:literal $set:ident $with:ident),+;
    ) => {
        $(#[$meta])*
        #[derive(Getters, Clone, Debug)]
        #[getset(get = "pub")]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name<$($c: Collection),+> {
            $($f: $c,)+
            #[getset(skip)]
            #[cfg_attr(feature = "serde", serde(skip))]
            cache: Cache<$product<$($c::Index),+>, $arity>,
        }

        impl<$($c: Collection),+> $name<$($c),+> {
            pub fn new($($f: $c),+) -> Self {
                Self {
                    $($f,)+
                    cache: Cache::new(),
                }
            }

            $(
                pub fn $set(&mut self, $f: $c) {
                    self.$f = $f;
                    self.cache.invalidate();
                }

                #[must_use]
                pub fn $with(mut self, $f: $c) -> Self {
                    self.$set($f);
                    self
                }
            )+

            pub fn into_inner(self) -> $product<$($c),+> {
                $product::new($(self.$f),+)
            }

            /// Linear index of `index`, where end is `count()`.
            pub fn linear(&self, index: &LockstepIndex<$product<$($c::Index),+>>) -> usize {
                match index.as_position() {
                    Position::End => self.count(),
                    Position::At(position) => walk::offset_from_start(&self.a, &position.a),
                }
            }

            /// Index at linear index `offset` in `0..=count()`.
            pub fn position_at(&self, offset: usize) -> Position<$product<$($c::Index),+>> {
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
                    Position::At($product::new($(walk::index_at_offset(&self.$f, offset)),+))
                }
            }

            fn counts(&self) -> &[usize; $arity] {
                self.cache.counts(|| [$(self.$f.count()),+])
            }

            fn check(&self, position: &$product<$($c::Index),+>) {
                pedantic!(
                    true $(&& position.$f < self.$f.end_index())+,
                    "Position {:?} is past end of a constituent",
                    position
                );
            }

            /// Walks every constituent from its start, so only for offsets.
            fn check_lockstep(&self, position: &$product<$($c::Index),+>) {
                pedantic!(
                    {
                        let lead = walk::offset_from_start(&self.a, &position.a);
                        true $(&& walk::offset_from_start(&self.$f, &position.$f) == lead)+
                    },
                    "Position {:?} isn't in lockstep",
                    position
                );
            }
        }

        impl<$($c: Collection),+> Collection for $name<$($c),+> {
            type Element = $product<$($c::Element),+>;
            type Index = LockstepIndex<$product<$($c::Index),+>>;

            fn start_index(&self) -> Self::Index {
                self.cache
                    .first(|| {
                        if self.is_empty() {
                            Position::End
                        } else {
                            Position::At($product::new($(self.$f.start_index()),+))
                        }
                    })
                    .clone()
                    .into()
            }

            fn end_index(&self) -> Self::Index {
                LockstepIndex::end()
            }

            fn at(&self, index: &Self::Index) -> Self::Element {
                let position = index.as_position().expect_position("subscript");
                self.check(position);
                $product::new($(self.$f.at(&position.$f)),+)
            }

            fn index_after(&self, index: &Self::Index) -> Self::Index {
                let position = index.as_position().expect_position("advance past");
                self.check(position);
                coalesce_movements!($product {
                    $($f: walk::attempt_step(&self.$f, &position.$f),
                        walk::classify_step(&self.$f, &position.$f));+
                })
                .into_position("advance")
                .into()
            }

            fn is_empty(&self) -> bool {
                false $(|| self.$f.is_empty())+
            }

            fn count(&self) -> usize {
                if self.is_empty() {
                    0
                } else {
                    self.counts().iter().copied().min().unwrap_or(0)
                }
            }

            fn distance(&self, from: &Self::Index, to: &Self::Index) -> isize {
                linear::distance(self.linear(from), self.linear(to))
            }

            fn index_offset_by(&self, index: &Self::Index, distance: isize) -> Self::Index {
                let target = linear::offset(self.linear(index), distance, self.count());
                let position = match index.as_position() {
                    Position::End => return self.position_at(target).into(),
                    Position::At(position) => position,
                };
                self.check_lockstep(position);
                let counts = self.counts();
                coalesce_movements!($product {
                    $($f: walk::attempt_offset(&self.$f, &position.$f, distance, counts[$k]),
                        walk::classify_offset(&self.$f, &position.$f, distance, counts[$k]));+
                })
                .into_position("offset")
                .into()
            }
        }

        impl<$($c: BidirectionalCollection),+> BidirectionalCollection for $name<$($c),+> {
            fn index_before(&self, index: &Self::Index) -> Self::Index {
                let position = match index.as_position() {
                    Position::End => {
                        precondition!(!self.is_empty(), "Can't step before start index");
                        return self
                            .cache
                            .last(|| self.position_at(self.count() - 1))
                            .clone()
                            .into();
                    }
                    Position::At(position) => position,
                };
                self.check(position);
                precondition!(
                    position.a != self.a.start_index(),
                    "Can't step before start index"
                );
                LockstepIndex::at($product::new($(self.$f.index_before(&position.$f)),+))
            }
        }

        impl<$($c: RandomAccessCollection),+> RandomAccessCollection for $name<$($c),+> {}

        impl<'a, $($c: Collection),+> IntoIterator for &'a $name<$($c),+> {
            type Item = $product<$($c::Element),+>;
            type IntoIter = Iter<'a, $name<$($c),+>>;

            fn into_iter(self) -> Self::IntoIter {
                Iter::new(self)
            }
        }

        impl<$($c: Collection + PartialEq),+> PartialEq for $name<$($c),+> {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$f == other.$f)+
            }
        }

        impl<$($c: Collection + Eq),+> Eq for $name<$($c),+> {}

        impl<$($c: Collection + Hash),+> Hash for $name<$($c),+> {
            fn hash<S: Hasher>(&self, state: &mut S) {
                $(self.$f.hash(state);)+
            }
        }
    };
}

zip_collection!(
    /// Elementwise zip of two collections, as long as the shortest.
    ProductZip2Collection, Product2, 2;
    A a 0 set_a with_a, B b 1 set_b with_b;
);

zip_collection!(
    /// Elementwise zip of three collections, as long as the shortest.
    ProductZip3Collection, Product3, 3;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c;
);

zip_collection!(
    /// Elementwise zip of four collections, as long as the shortest.
    ProductZip4Collection, Product4, 4;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d;
);

zip_collection!(
    /// Elementwise zip of five collections, as long as the shortest.
    ProductZip5Collection, Product5, 5;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e;
);

zip_collection!(
    /// Elementwise zip of six collections, as long as the shortest.
    ProductZip6Collection, Product6, 6;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e, F f 5 set_f with_f;
);

zip_collection!(
    /// Elementwise zip of seven collections, as long as the shortest.
    ProductZip7Collection, Product7, 7;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e, F f 5 set_f with_f, G g 6 set_g with_g;
);

zip_collection!(
    /// Elementwise zip of eight collections, as long as the shortest.
    ProductZip8Collection, Product8, 8;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e, F f 5 set_f with_f, G g 6 set_g with_g, H h 7 set_h with_h;
);

zip_collection!(
    /// Elementwise zip of nine collections, as long as the shortest.
    ProductZip9Collection, Product9, 9;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e, F f 5 set_f with_f, G g 6 set_g with_g, H h 7 set_h with_h,
    I i 8 set_i with_i;
);
