use crate::core::{
    cache::Cache, linear, walk, BidirectionalCollection, Collection, Iter, Position,
    RandomAccessCollection,
};
use crate::product::*;
use getset::Getters;
use std::{
    hash::{Hash, Hasher},
    ops::Range,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines concatenation of given arity, with its slot index.
///
/// `tail` are the constituents after the first, which must share its element type.
/// `reversed` lists constituents from the last.
macro_rules! chain_collection {
    (
        $(#[$meta:meta])*
        $name:ident, $slot:ident, $product:ident, $arity:literal;
        $($c:ident $f:ident $k:literal $set:ident $with:ident),+;
        tail: $($t:ident),+;
        reversed: $($rc:ident $rf:ident $rk:literal),+;
    ) => {
        /// Index into one constituent of a chain.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $slot<$($c),+> {
            $($c($c)),+
        }

        $(#[$meta])*
        #[derive(Getters, Clone, Debug)]
        #[getset(get = "pub")]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name<A: Collection, $($t: Collection<Element = A::Element>),+> {
            $($f: $c,)+
            #[getset(skip)]
            #[cfg_attr(feature = "serde", serde(skip))]
            cache: Cache<$slot<$($c::Index),+>, $arity>,
        }

        impl<A: Collection, $($t: Collection<Element = A::Element>),+> $name<$($c),+> {
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

            /// Range of constituent `k` in linear index space.
            pub fn range(&self, k: usize) -> Range<usize> {
                self.cache.ranges().range(k, &|j| self.constituent_count(j))
            }

            /// Linear index of `index`, where end is `count()`.
            pub fn linear(&self, index: &Position<$slot<$($c::Index),+>>) -> usize {
                match index {
                    Position::End => self.count(),
                    $(Position::At($slot::$c(index)) => {
                        self.range($k).start + walk::offset_from_start(&self.$f, index)
                    })+
                }
            }

            /// Index at linear index `offset` in `0..=count()`.
            pub fn position_at(&self, offset: usize) -> Position<$slot<$($c::Index),+>> {
                let count = self.count();
                precondition!(
                    offset <= count,
                    "Linear index {} is out of bounds 0..={}",
                    offset,
                    count
                );
                $(
                    let range = self.range($k);
                    if range.contains(&offset) {
                        let index = walk::index_at_offset(&self.$f, offset - range.start);
                        return Position::At($slot::$c(index));
                    }
                )+
                Position::End
            }

            fn constituent_count(&self, k: usize) -> usize {
                match k {
                    $($k => self.$f.count(),)+
                    _ => fail!("Chain has no constituent {}", k),
                }
            }

            /// First index of the first non empty constituent from `k` on.
            fn start_from(&self, k: usize) -> Position<$slot<$($c::Index),+>> {
                $(
                    if k <= $k && !self.$f.is_empty() {
                        return Position::At($slot::$c(self.$f.start_index()));
                    }
                )+
                Position::End
            }
        }

        impl<A: Collection, $($t: Collection<Element = A::Element>),+> Collection
            for $name<$($c),+>
        {
            type Element = A::Element;
            type Index = Position<$slot<$($c::Index),+>>;

            fn start_index(&self) -> Self::Index {
                self.cache.first(|| self.start_from(0)).clone()
            }

            fn end_index(&self) -> Self::Index {
                Position::End
            }

            fn at(&self, index: &Self::Index) -> Self::Element {
                match index.expect_position("subscript") {
                    $($slot::$c(index) => {
                        pedantic!(
                            *index < self.$f.end_index(),
                            "Index {:?} is past end of constituent {}",
                            index,
                            $k
                        );
                        self.$f.at(index)
                    })+
                }
            }

            fn index_after(&self, index: &Self::Index) -> Self::Index {
                match index.expect_position("advance past") {
                    $($slot::$c(index) => match walk::next_subscriptable(&self.$f, index) {
                        Some(next) => Position::At($slot::$c(next)),
                        None => self.start_from($k + 1),
                    },)+
                }
            }

            fn is_empty(&self) -> bool {
                true $(&& self.$f.is_empty())+
            }

            fn count(&self) -> usize {
                self.cache.ranges().total(&|j| self.constituent_count(j))
            }

            fn distance(&self, from: &Self::Index, to: &Self::Index) -> isize {
                linear::distance(self.linear(from), self.linear(to))
            }

            fn index_offset_by(&self, index: &Self::Index, distance: isize) -> Self::Index {
                let target = linear::offset(self.linear(index), distance, self.count());
                self.position_at(target)
            }
        }

        impl<A: BidirectionalCollection, $($t: BidirectionalCollection<Element = A::Element>),+>
            $name<$($c),+>
        {
            /// Last index of the last non empty constituent before `k`.
            fn last_before(&self, k: usize) -> Position<$slot<$($c::Index),+>> {
                $(
                    if $rk < k && !self.$rf.is_empty() {
                        let last = self.$rf.index_before(&self.$rf.end_index());
                        return Position::At($slot::$rc(last));
                    }
                )+
                Position::End
            }
        }

        impl<A: BidirectionalCollection, $($t: BidirectionalCollection<Element = A::Element>),+>
            BidirectionalCollection for $name<$($c),+>
        {
            fn index_before(&self, index: &Self::Index) -> Self::Index {
                let previous = match index {
                    Position::End => self.cache.last(|| self.last_before($arity)).clone(),
                    $(Position::At($slot::$c(index)) => {
                        if *index != self.$f.start_index() {
                            return Position::At($slot::$c(self.$f.index_before(index)));
                        }
                        self.last_before($k)
                    })+
                };
                precondition!(!previous.is_end(), "Can't step before start index");
                previous
            }
        }

        impl<A: RandomAccessCollection, $($t: RandomAccessCollection<Element = A::Element>),+>
            RandomAccessCollection for $name<$($c),+>
        {
        }

        impl<'a, A: Collection, $($t: Collection<Element = A::Element>),+> IntoIterator
            for &'a $name<$($c),+>
        {
            type Item = A::Element;
            type IntoIter = Iter<'a, $name<$($c),+>>;

            fn into_iter(self) -> Self::IntoIter {
                Iter::new(self)
            }
        }

        impl<A: Collection + PartialEq, $($t: Collection<Element = A::Element> + PartialEq),+>
            PartialEq for $name<$($c),+>
        {
            fn eq(&self, other: &Self) -> bool {
                true $(&& self.$f == other.$f)+
            }
        }

        impl<A: Collection + Eq, $($t: Collection<Element = A::Element> + Eq),+> Eq
            for $name<$($c),+>
        {
        }

        impl<A: Collection + Hash, $($t: Collection<Element = A::Element> + Hash),+> Hash
            for $name<$($c),+>
        {
            fn hash<S: Hasher>(&self, state: &mut S) {
                $(self.$f.hash(state);)+
            }
        }
    };
}

chain_collection!(
    /// Concatenation of two collections.
    Chain2Collection, Chain2Slot, Product2, 2;
    A a 0 set_a with_a, B b 1 set_b with_b;
    tail: B;
    reversed: B b 1, A a 0;
);

chain_collection!(
    /// Concatenation of three collections.
    Chain3Collection, Chain3Slot, Product3, 3;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c;
    tail: B, C;
    reversed: C c 2, B b 1, A a 0;
);

chain_collection!(
    /// Concatenation of four collections.
    Chain4Collection, Chain4Slot, Product4, 4;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d;
    tail: B, C, D;
    reversed: D d 3, C c 2, B b 1, A a 0;
);

chain_collection!(
    /// Concatenation of five collections.
    Chain5Collection, Chain5Slot, Product5, 5;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e;
    tail: B, C, D, E;
    reversed: E e 4, D d 3, C c 2, B b 1, A a 0;
);

chain_collection!(
    /// Concatenation of six collections.
    Chain6Collection, Chain6Slot, Product6, 6;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e, F f 5 set_f with_f;
    tail: B, C, D, E, F;
    reversed: F f 5, E e 4, D d 3, C c 2, B b 1, A a 0;
);

chain_collection!(
    /// Concatenation of seven collections.
    Chain7Collection, Chain7Slot, Product7, 7;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e, F f 5 set_f with_f, G g 6 set_g with_g;
    tail: B, C, D, E, F, G;
    reversed: G g 6, F f 5, E e 4, D d 3, C c 2, B b 1, A a 0;
);

chain_collection!(
    /// Concatenation of eight collections.
    Chain8Collection, Chain8Slot, Product8, 8;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e, F f 5 set_f with_f, G g 6 set_g with_g, H h 7 set_h with_h;
    tail: B, C, D, E, F, G, H;
    reversed: H h 7, G g 6, F f 5, E e 4, D d 3, C c 2, B b 1, A a 0;
);

chain_collection!(
    /// Concatenation of nine collections.
    Chain9Collection, Chain9Slot, Product9, 9;
    A a 0 set_a with_a, B b 1 set_b with_b, C c 2 set_c with_c, D d 3 set_d with_d,
    E e 4 set_e with_e, F f 5 set_f with_f, G g 6 set_g with_g, H h 7 set_h with_h,
    I i 8 set_i with_i;
    tail: B, C, D, E, F, G, H, I;
    reversed: I i 8, H h 7, G g 6, F f 5, E e 4, D d 3, C c 2, B b 1, A a 0;
);
