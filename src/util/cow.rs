use log::*;
use std::{fmt, ops::Deref, rc::Rc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Copy on write handle to a value.
///
/// Clones share the value. Mutation goes through `make_mut`, which mutates in
/// place when this handle is the only one and clones the value first otherwise.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CowProduct<P>(Rc<P>);

impl<P> CowProduct<P> {
    pub fn new(value: P) -> Self {
        CowProduct(Rc::new(value))
    }

    pub fn get(&self) -> &P {
        &self.0
    }

    /// True if no other handle shares the value.
    pub fn is_unique(&self) -> bool {
        Rc::strong_count(&self.0) == 1 && Rc::weak_count(&self.0) == 0
    }

    /// True if both handles share the same value.
    pub fn shares(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<P: Clone> CowProduct<P> {
    pub fn make_mut(&mut self) -> &mut P {
        if !self.is_unique() {
            trace!(
                "Forking value shared by {} handles",
                Rc::strong_count(&self.0)
            );
        }
        Rc::make_mut(&mut self.0)
    }

    pub fn update<R>(&mut self, update: impl FnOnce(&mut P) -> R) -> R {
        update(self.make_mut())
    }

    pub fn into_inner(self) -> P {
        Rc::try_unwrap(self.0).unwrap_or_else(|shared| P::clone(&shared))
    }
}

impl<P> Deref for CowProduct<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.0
    }
}

impl<P> From<P> for CowProduct<P> {
    fn from(value: P) -> Self {
        CowProduct::new(value)
    }
}

impl<P: fmt::Debug> fmt::Debug for CowProduct<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<P: fmt::Display> fmt::Display for CowProduct<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

#[cfg(feature = "serde")]
impl<P: Serialize> Serialize for CowProduct<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, P: Deserialize<'de>> Deserialize<'de> for CowProduct<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        P::deserialize(deserializer).map(CowProduct::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Product2;

    #[test]
    fn unique_mutates_in_place() {
        let mut value = CowProduct::new(Product2::new(1, 2));
        let address = value.get() as *const _;
        value.make_mut().a = 5;
        assert_eq!(value.get() as *const _, address);
        assert_eq!(*value, Product2::new(5, 2));
    }

    #[test]
    fn shared_forks() {
        let mut value = CowProduct::new(Product2::new(1, 2));
        let other = value.clone();
        assert!(value.shares(&other));
        assert!(!value.is_unique());
        value.update(|product| product.b = 7);
        assert!(!value.shares(&other));
        assert!(value.is_unique());
        assert_eq!(other.b, 2);
        assert_eq!(value.b, 7);
    }

    #[test]
    fn into_inner() {
        let value = CowProduct::new(vec![1, 2]);
        let other = value.clone();
        assert_eq!(value.into_inner(), vec![1, 2]);
        assert!(other.is_unique());
        assert_eq!(other.into_inner(), vec![1, 2]);
    }

    #[test]
    fn compares_values() {
        let x = CowProduct::new(Product2::new(1, 2));
        let y = CowProduct::from(Product2::new(1, 2));
        assert_eq!(x, y);
        assert!(!x.shares(&y));
        assert!(x < CowProduct::new(Product2::new(1, 3)));
        assert_eq!(x.to_string(), "(1, 2)");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_as_value() {
        let value = CowProduct::new(Product2::new(1, 2));
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"a":1,"b":2}"#);
        let back: CowProduct<Product2<i32, i32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
