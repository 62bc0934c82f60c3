//! Componentwise arithmetic of products.

use super::*;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

macro_rules! product_arith {
    ($name:ident; $($t:ident $f:ident),+) => {
        impl<$($t: Add<Output = $t>),+> Add for $name<$($t),+> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                $name::new($(self.$f + rhs.$f),+)
            }
        }

        impl<$($t: Sub<Output = $t>),+> Sub for $name<$($t),+> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                $name::new($(self.$f - rhs.$f),+)
            }
        }

        impl<$($t: Neg<Output = $t>),+> Neg for $name<$($t),+> {
            type Output = Self;

            fn neg(self) -> Self {
                $name::new($(-self.$f),+)
            }
        }

        impl<$($t: AddAssign),+> AddAssign for $name<$($t),+> {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$f += rhs.$f;)+
            }
        }

        impl<$($t: SubAssign),+> SubAssign for $name<$($t),+> {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$f -= rhs.$f;)+
            }
        }

        impl<$($t),+> $name<$($t),+> {
            /// Every component multiplied by `factor`.
            #[must_use]
            pub fn scaled<S: Copy>(self, factor: S) -> Self
            where
                $($t: Mul<S, Output = $t>),+
            {
                $name::new($(self.$f * factor),+)
            }
        }
    };
}

product_arith!(Product2; A a, B b);
product_arith!(Product3; A a, B b, C c);
product_arith!(Product4; A a, B b, C c, D d);
product_arith!(Product5; A a, B b, C c, D d, E e);
product_arith!(Product6; A a, B b, C c, D d, E e, F f);
product_arith!(Product7; A a, B b, C c, D d, E e, F f, G g);
product_arith!(Product8; A a, B b, C c, D d, E e, F f, G g, H h);
product_arith!(Product9; A a, B b, C c, D d, E e, F f, G g, H h, I i);
