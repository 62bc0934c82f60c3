use crate::core::Leading;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines product of given arity with fields `$f` of types `$t`.
///
/// `rest` are the components after the first and `init` are the components
/// before the last, needed for pushing.
macro_rules! algebraic_product {
    (
        $(#[$meta:meta])*
        $name:ident, $arity:literal;
        $($t:ident $f:ident $with:ident),+;
        rest: $($rt:ident $rf:ident),+;
        init: $($it:ident $if_:ident),+;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub struct $name<$($t),+> {
            $(pub $f: $t),+
        }

        impl<$($t),+> $name<$($t),+> {
            pub const ARITY: usize = $arity;

            pub fn new($($f: $t),+) -> Self {
                Self { $($f),+ }
            }

            pub fn into_tuple(self) -> ($($t,)+) {
                ($(self.$f,)+)
            }

            $(
                /// Same product with this component replaced.
                #[must_use]
                pub fn $with(mut self, $f: $t) -> Self {
                    self.$f = $f;
                    self
                }
            )+

            /// Drops the first component and appends `appending` as the last.
            pub fn pushed_leftward<Z>(self, appending: Z) -> $name<$($rt,)+ Z> {
                $name::new($(self.$rf,)+ appending)
            }

            /// Drops the last component and prepends `prepending` as the first.
            pub fn pushed_rightward<Z>(self, prepending: Z) -> $name<Z, $($it),+> {
                $name::new(prepending, $(self.$if_),+)
            }
        }

        impl<$($t),+> From<($($t,)+)> for $name<$($t),+> {
            fn from(($($f,)+): ($($t,)+)) -> Self {
                Self { $($f),+ }
            }
        }

        impl<$($t),+> From<$name<$($t),+>> for ($($t,)+) {
            fn from(product: $name<$($t),+>) -> Self {
                product.into_tuple()
            }
        }

        impl<$($t: fmt::Display),+> fmt::Display for $name<$($t),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let components: [&dyn fmt::Display; $arity] = [$(&self.$f),+];
                write!(f, "(")?;
                for (k, component) in components.iter().enumerate() {
                    if k > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", component)?;
                }
                write!(f, ")")
            }
        }

        impl<$($t),+> Leading for $name<$($t),+>
        where
            A: Ord,
        {
            type Lead = A;

            fn leading(&self) -> &A {
                &self.a
            }
        }
    };
}

algebraic_product!(
    /// Product of two components.
    Product2, 2;
    A a with_a, B b with_b;
    rest: B b;
    init: A a;
);

algebraic_product!(
    /// Product of three components.
    Product3, 3;
    A a with_a, B b with_b, C c with_c;
    rest: B b, C c;
    init: A a, B b;
);

algebraic_product!(
    /// Product of four components.
    Product4, 4;
    A a with_a, B b with_b, C c with_c, D d with_d;
    rest: B b, C c, D d;
    init: A a, B b, C c;
);

algebraic_product!(
    /// Product of five components.
    Product5, 5;
    A a with_a, B b with_b, C c with_c, D d with_d, E e with_e;
    rest: B b, C c, D d, E e;
    init: A a, B b, C c, D d;
);

algebraic_product!(
    /// Product of six components.
    Product6, 6;
    A a with_a, B b with_b, C c with_c, D d with_d, E e with_e, F f with_f;
    rest: B b, C c, D d, E e, F f;
    init: A a, B b, C c, D d, E e;
);

algebraic_product!(
    /// Product of seven components.
    Product7, 7;
    A a with_a, B b with_b, C c with_c, D d with_d, E e with_e, F f with_f, G g with_g;
    rest: B b, C c, D d, E e, F f, G g;
    init: A a, B b, C c, D d, E e, F f;
);

algebraic_product!(
    /// Product of eight components.
    Product8, 8;
    A a with_a, B b with_b, C c with_c, D d with_d, E e with_e, F f with_f, G g with_g,
    H h with_h;
    rest: B b, C c, D d, E e, F f, G g, H h;
    init: A a, B b, C c, D d, E e, F f, G g;
);

algebraic_product!(
    /// Product of nine components.
    Product9, 9;
    A a with_a, B b with_b, C c with_c, D d with_d, E e with_e, F f with_f, G g with_g,
    H h with_h, I i with_i;
    rest: B b, C c, D d, E e, F f, G g, H h, I i;
    init: A a, B b, C c, D d, E e, F f, G g, H h;
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicographic() {
        assert!(Product3::new(1, 9, 9) < Product3::new(2, 0, 0));
        assert!(Product3::new(1, 2, 3) < Product3::new(1, 2, 4));
        assert!(Product2::new("b", 0) > Product2::new("a", 5));
    }

    #[test]
    fn push_leftward() {
        let window = Product3::new(1, 2, 3).pushed_leftward(4);
        assert_eq!(window, Product3::new(2, 3, 4));
        let mixed: Product2<&str, char> = Product2::new(1, "x").pushed_leftward('y');
        assert_eq!(mixed, Product2::new("x", 'y'));
    }

    #[test]
    fn push_rightward() {
        assert_eq!(
            Product4::new(1, 2, 3, 4).pushed_rightward(0),
            Product4::new(0, 1, 2, 3)
        );
    }

    #[test]
    fn push_is_mirrored() {
        let product = Product9::new(1, 2, 3, 4, 5, 6, 7, 8, 9);
        assert_eq!(product.pushed_leftward(10).pushed_rightward(1), product);
    }

    #[test]
    fn with_derivation() {
        let product = Product3::new(1, "b", 'c').with_b("x").with_c('z');
        assert_eq!(product, Product3::new(1, "x", 'z'));
    }

    #[test]
    fn tuples() {
        let product: Product2<u8, &str> = (1, "a").into();
        assert_eq!(product.into_tuple(), (1, "a"));
        let tuple: (u8, &str) = product.into();
        assert_eq!(tuple, (1, "a"));
        assert_eq!(Product5::<u8, u8, u8, u8, u8>::ARITY, 5);
    }

    #[test]
    fn display() {
        assert_eq!(Product3::new(1, "two", 3.5).to_string(), "(1, two, 3.5)");
        assert_eq!(Product2::new('a', 'b').to_string(), "(a, b)");
    }

    #[test]
    fn leading_is_first() {
        assert_eq!(Product3::new(7, 8, 9).leading(), &7);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn keyed_format() {
        let product = Product3::new(1, "x".to_string(), true);
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"a":1,"b":"x","c":true}"#);
        let back: Product3<i32, String, bool> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
