use crate::core::{
    cache::Cache, linear, walk, BidirectionalCollection, Collection, Iter, Position,
    RandomAccessCollection,
};
use crate::product::*;
use getset::Getters;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines cartesian product collection of given arity.
///
/// `odometer` lists fields from the least significant, which advances fastest,
/// to the most significant.
macro_rules! product_collection {
    (
        $(#[$meta:meta])*
        $name:ident, $product:ident, $arity:literal;
        $($c:ident $f:ident $set:ident $with:ident),+;
        odometer: $($rf:ident),+;
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

            /// Constituents.
            pub fn into_inner(self) -> $product<$($c),+> {
                $product::new($(self.$f),+)
            }

            /// Linear index of `index`, where end is `count()`.
            pub fn linear(&self, index: &Position<$product<$($c::Index),+>>) -> usize {
                match index {
                    Position::End => self.count(),
                    Position::At(position) => {
                        let digits = [$(walk::offset_from_start(&self.$f, &position.$f)),+];
                        linear::linearize(&digits, self.strides())
                    }
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
                    return Position::End;
                }
                let [$($f),+] = linear::delinearize(offset, self.strides());
                Position::At($product::new($(walk::index_at_offset(&self.$f, $f)),+))
            }

            fn counts(&self) -> &[usize; $arity] {
                self.cache.counts(|| [$(self.$f.count()),+])
            }

            fn strides(&self) -> &[usize; $arity] {
                self.cache.strides(|| linear::strides(self.counts()))
            }

            fn check(&self, position: &$product<$($c::Index),+>) {
                pedantic!(
                    true $(&& self.$f.start_index() <= position.$f && position.$f < self.$f.end_index())+,
                    "Position {:?} isn't in product",
                    position
                );
            }
        }

        impl<$($c: Collection),+> Collection for $name<$($c),+> {
            type Element = $product<$($c::Element),+>;
            type Index = Position<$product<$($c::Index),+>>;

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
            }

            fn end_index(&self) -> Self::Index {
                Position::End
            }

            fn at(&self, index: &Self::Index) -> Self::Element {
                let position = index.expect_position("subscript");
                self.check(position);
                $product::new($(self.$f.at(&position.$f)),+)
            }

            fn index_after(&self, index: &Self::Index) -> Self::Index {
                let position = index.expect_position("advance past");
                self.check(position);
                let mut next = position.clone();
                $(
                    match walk::next_subscriptable(&self.$rf, &next.$rf) {
                        Some(index) => {
                            next.$rf = index;
                            return Position::At(next);
                        }
                        None => next.$rf = self.$rf.start_index(),
                    }
                )+
                Position::End
            }

            fn is_empty(&self) -> bool {
                false $(|| self.$f.is_empty())+
            }

            fn count(&self) -> usize {
                if self.is_empty() {
                    0
                } else {
                    linear::product_count(self.counts())
                }
            }

            fn distance(&self, from: &Self::Index, to: &Self::Index) -> isize {
                linear::distance(self.linear(from), self.linear(to))
            }

            fn index_offset_by(&self, index: &Self::Index, distance: isize) -> Self::Index {
                let target = linear::offset(self.linear(index), distance, self.count());
                self.position_at(target)
            }
        }

        impl<$($c: BidirectionalCollection),+> $name<$($c),+> {
            fn final_position(&self) -> &Position<$product<$($c::Index),+>> {
                self.cache.last(|| {
                    if self.is_empty() {
                        Position::End
                    } else {
                        Position::At($product::new($(self.$f.index_before(&self.$f.end_index())),+))
                    }
                })
            }
        }

        impl<$($c: BidirectionalCollection),+> BidirectionalCollection for $name<$($c),+> {
            fn index_before(&self, index: &Self::Index) -> Self::Index {
                let position = match index {
                    Position::End => {
                        precondition!(!self.is_empty(), "Can't step before start index");
                        return self.final_position().clone();
                    }
                    Position::At(position) => position,
                };
                self.check(position);
                let mut previous = position.clone();
                $(
                    if previous.$rf == self.$rf.start_index() {
                        previous.$rf = self.$rf.index_before(&self.$rf.end_index());
                    } else {
                        previous.$rf = self.$rf.index_before(&previous.$rf);
                        return Position::At(previous);
                    }
                )+
                fail!("Can't step before start index")
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

product_collection!(
    /// Cartesian product of two collections.
    Product2Collection, Product2, 2;
    A a set_a with_a, B b set_b with_b;
    odometer: b, a;
);

product_collection!(
    /// Cartesian product of three collections.
    Product3Collection, Product3, 3;
    A a set_a with_a, B b set_b with_b, C c set_c with_c;
    odometer: c, b, a;
);

product_collection!(
    /// Cartesian product of four collections.
    Product4Collection, Product4, 4;
    A a set_a with_a, B b set_b with_b, C c set_c with_c, D d set_d with_d;
    odometer: d, c, b, a;
);

product_collection!(
    /// Cartesian product of five collections.
    Product5Collection, Product5, 5;
    A a set_a with_a, B b set_b with_b, C c set_c with_c, D d set_d with_d,
    E e set_e with_e;
    odometer: e, d, c, b, a;
);

product_collection!(
    /// Cartesian product of six collections.
    Product6Collection, Product6, 6;
    A a set_a with_a, B b set_b with_b, C c set_c with_c, D d set_d with_d,
    E e set_e with_e, F f set_f with_f;
    odometer: f, e, d, c, b, a;
);

product_collection!(
    /// Cartesian product of seven collections.
    Product7Collection, Product7, 7;
    A a set_a with_a, B b set_b with_b, C c set_c with_c, D d set_d with_d,
    E e set_e with_e, F f set_f with_f, G g set_g with_g;
    odometer: g, f, e, d, c, b, a;
);

product_collection!(
    /// Cartesian product of eight collections.
    Product8Collection, Product8, 8;
    A a set_a with_a, B b set_b with_b, C c set_c with_c, D d set_d with_d,
    E e set_e with_e, F f set_f with_f, G g set_g with_g, H h set_h with_h;
    odometer: h, g, f, e, d, c, b, a;
);

product_collection!(
    /// Cartesian product of nine collections.
    Product9Collection, Product9, 9;
    A a set_a with_a, B b set_b with_b, C c set_c with_c, D d set_d with_d,
    E e set_e with_e, F f set_f with_f, G g set_g with_g, H h set_h with_h,
    I i set_i with_i;
    odometer: i, h, g, f, e, d, c, b, a;
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{ForwardOnly, Stepper};

    fn all_indices<C: Collection>(collection: &C) -> Vec<C::Index> {
        let mut indices = collection.indices().collect::<Vec<_>>();
        indices.push(collection.end_index());
        indices
    }

    #[test]
    fn odometer_order() {
        let product = Product2Collection::new(0usize..2, 0usize..2);
        assert_eq!(
            product.elements().collect::<Vec<_>>(),
            vec![
                Product2::new(0, 0),
                Product2::new(0, 1),
                Product2::new(1, 0),
                Product2::new(1, 1)
            ]
        );
    }

    #[test]
    fn count() {
        let product = Product3Collection::new(vec![1, 2], vec!['a', 'b', 'c'], 0u32..4);
        assert_eq!(product.count(), 24);
        assert_eq!(product.elements().count(), 24);
        assert_eq!(
            product.elements().nth(5),
            Some(Product3::new(1, 'b', 1))
        );
    }

    #[test]
    fn empty_constituent() {
        let product = Product3Collection::new(vec![1], Vec::<u8>::new(), vec![2]);
        assert!(product.is_empty());
        assert_eq!(product.count(), 0);
        assert_eq!(product.start_index(), product.end_index());
        assert_eq!(product.elements().next(), None);
        assert_eq!(product.position_at(0), Position::End);
    }

    #[test]
    fn after_last_is_end() {
        let product = Product2Collection::new(vec![1, 2], vec![3]);
        let last = Position::At(Product2::new(1, 0));
        assert_eq!(product.index_after(&last), product.end_index());
        assert_eq!(product.index_before(&product.end_index()), last);
        assert_eq!(product.last_element(), Some(Product2::new(2, 3)));
    }

    #[test]
    fn linear_round_trip() {
        let product = Product3Collection::new(0u32..3, vec![1, 2], 5i64..9);
        for k in 0..=product.count() {
            assert_eq!(product.linear(&product.position_at(k)), k);
        }
        for (k, index) in product.indices().enumerate() {
            assert_eq!(product.linear(&index), k);
        }
    }

    #[test]
    fn offset_inverts_distance() {
        let product = Product2Collection::new(vec![1, 2, 3], 0usize..2);
        let indices = all_indices(&product);
        for i in &indices {
            for j in &indices {
                assert_eq!(product.index_offset_by(i, product.distance(i, j)), *j);
            }
        }
    }

    #[test]
    fn offset_from_end() {
        let product = Product2Collection::new(vec![1, 2, 3], 0usize..2);
        let index = product.index_offset_by(&product.end_index(), -3);
        assert_eq!(product.at(&index), Product2::new(2, 1));
        assert_eq!(
            product.index_offset_by_limited(&index, 4, &product.end_index()),
            None
        );
        assert_eq!(
            product.index_offset_by_limited(&index, 3, &product.end_index()),
            Some(Position::End)
        );
    }

    #[test]
    fn reversed() {
        let product = Product3Collection::new(vec![1, 2], 0usize..3, vec!['x', 'y']);
        let mut forward = product.elements().collect::<Vec<_>>();
        forward.reverse();
        assert_eq!(product.elements().rev().collect::<Vec<_>>(), forward);
    }

    #[test]
    fn forward_only_constituents() {
        let product = Product2Collection::new(ForwardOnly(&[1, 2]), ForwardOnly(&[3, 4, 5]));
        assert_eq!(product.count(), 6);
        let start = product.start_index();
        let index = product.index_offset_by(&start, 4);
        assert_eq!(product.at(&index), Product2::new(2, 4));
        assert_eq!(product.distance(&index, &start), -4);
        assert_eq!(product.index_offset_by(&index, -3), product.index_after(&start));
    }

    #[test]
    fn bidirectional_constituents() {
        let product = Product2Collection::new(Stepper(&[1, 2]), Stepper(&[3, 4]));
        assert_eq!(
            product.elements().rev().map(|p| p.b).collect::<Vec<_>>(),
            vec![4, 3, 4, 3]
        );
    }

    #[test]
    fn mutation_invalidates() {
        let mut product = Product2Collection::new(vec![1, 2], vec![3]);
        assert_eq!(product.count(), 2);
        assert_eq!(product.start_index(), Position::At(Product2::new(0, 0)));
        product.set_b(Vec::new());
        assert_eq!(product.count(), 0);
        assert_eq!(product.start_index(), Position::End);
        let product = product.with_b(vec![5, 6, 7]);
        assert_eq!(product.count(), 6);
        assert_eq!(product.last_element(), Some(Product2::new(2, 7)));
        assert_eq!(product.b(), &vec![5, 6, 7]);
        assert_eq!(product.into_inner().a, vec![1, 2]);
    }

    #[test]
    fn widest() {
        let product = Product9Collection::new(
            0u32..2,
            0u32..1,
            0u32..2,
            0u32..1,
            0u32..2,
            0u32..1,
            0u32..2,
            0u32..1,
            0u32..3,
        );
        assert_eq!(product.count(), 48);
        assert_eq!(product.elements().last(), Some(Product9::new(1, 0, 1, 0, 1, 0, 1, 0, 2)));
    }

    #[test]
    #[should_panic(expected = "Can't subscript end index")]
    fn subscript_end() {
        let product = Product2Collection::new(vec![1], vec![2]);
        product.at(&product.end_index());
    }

    #[test]
    #[should_panic(expected = "Can't advance past end index")]
    fn advance_end() {
        let product = Product2Collection::new(vec![1], vec![2]);
        product.index_after(&product.end_index());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn offset_past_end() {
        let product = Product2Collection::new(vec![1, 2], vec![2]);
        product.index_offset_by(&product.start_index(), 3);
    }

    #[test]
    #[should_panic(expected = "Can't step before start index")]
    fn before_start() {
        let product = Product2Collection::new(vec![1, 2], vec![2]);
        product.index_before(&product.start_index());
    }

    #[test]
    fn equality_over_constituents() {
        let x = Product2Collection::new(vec![1], vec![2, 3]);
        let y = Product2Collection::new(vec![1], vec![2, 3]);
        x.count();
        assert_eq!(x, y);
        assert_ne!(x, y.with_a(vec![0]));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_skips_cache() {
        let product = Product2Collection::new(vec![1, 2], vec![3]);
        product.count();
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"a":[1,2],"b":[3]}"#);
        let back: Product2Collection<Vec<i32>, Vec<i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
        assert_eq!(back.count(), 2);
    }

    #[test]
    fn doppelganger() {
        use rand::*;
        let mut rand = thread_rng();
        for _ in 0..100 {
            let a = (0..rand.gen_range(0..5)).map(|_| rand.gen::<u8>()).collect::<Vec<_>>();
            let b = (0..rand.gen_range(0..5)).map(|_| rand.gen::<u8>()).collect::<Vec<_>>();
            let c = 0u32..rand.gen_range(0..4);
            let product = Product3Collection::new(a.clone(), b.clone(), c.clone());

            let mut doppelganger = Vec::new();
            for &x in &a {
                for &y in &b {
                    for z in c.clone() {
                        doppelganger.push(Product3::new(x, y, z));
                    }
                }
            }

            assert_eq!(product.count(), doppelganger.len());
            assert_eq!(product.elements().collect::<Vec<_>>(), doppelganger);
            if doppelganger.is_empty() {
                assert!(product.is_empty());
                continue;
            }
            for _ in 0..10 {
                let from = rand.gen_range(0..doppelganger.len());
                let to = rand.gen_range(0..doppelganger.len());
                let index = product.index_offset_by(&product.position_at(from), to as isize - from as isize);
                assert_eq!(product.at(&index), doppelganger[to]);
            }
        }
    }
}
