use super::*;

pub type Uniform2<T> = Product2<T, T>;
pub type Uniform3<T> = Product3<T, T, T>;
pub type Uniform4<T> = Product4<T, T, T, T>;
pub type Uniform5<T> = Product5<T, T, T, T, T>;
pub type Uniform6<T> = Product6<T, T, T, T, T, T>;
pub type Uniform7<T> = Product7<T, T, T, T, T, T, T>;
pub type Uniform8<T> = Product8<T, T, T, T, T, T, T, T>;
pub type Uniform9<T> = Product9<T, T, T, T, T, T, T, T, T>;

/// Product whose components are all of type `T`.
pub trait Homogeneous<T, const N: usize>: Sized {
    fn from_array(array: [T; N]) -> Self;

    fn into_array(self) -> [T; N];

    fn first(&self) -> &T;

    fn last(&self) -> &T;
}

macro_rules! homogeneous {
    ($name:ident, $arity:literal; $($f:ident),+; last: $last:ident) => {
        impl<T> Homogeneous<T, $arity> for $name<T> {
            fn from_array(array: [T; $arity]) -> Self {
                let [$($f),+] = array;
                Self { $($f),+ }
            }

            fn into_array(self) -> [T; $arity] {
                [$(self.$f),+]
            }

            fn first(&self) -> &T {
                &self.a
            }

            fn last(&self) -> &T {
                &self.$last
            }
        }
    };
}

homogeneous!(Uniform2, 2; a, b; last: b);
homogeneous!(Uniform3, 3; a, b, c; last: c);
homogeneous!(Uniform4, 4; a, b, c, d; last: d);
homogeneous!(Uniform5, 5; a, b, c, d, e; last: e);
homogeneous!(Uniform6, 6; a, b, c, d, e, f; last: f);
homogeneous!(Uniform7, 7; a, b, c, d, e, f, g; last: g);
homogeneous!(Uniform8, 8; a, b, c, d, e, f, g, h; last: h);
homogeneous!(Uniform9, 9; a, b, c, d, e, f, g, h, i; last: i);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrays() {
        let window = Uniform4::from_array([1, 2, 3, 4]);
        assert_eq!(window, Product4::new(1, 2, 3, 4));
        assert_eq!(window.first(), &1);
        assert_eq!(window.last(), &4);
        assert_eq!(window.into_array(), [1, 2, 3, 4]);
    }

    #[test]
    fn mapped() {
        let window = Uniform3::from_array([1, 2, 3]);
        let strings = Uniform3::from_array(window.into_array().map(|x| x.to_string()));
        assert_eq!(strings.to_string(), "(1, 2, 3)");
    }

    #[test]
    fn widest() {
        let window = Uniform9::from_array([0u8; 9]).with_i(9);
        assert_eq!(window.last(), &9);
    }
}
