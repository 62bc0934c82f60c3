use ahash::AHashSet;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    rc::Rc,
};

/// Shared object compared and hashed by identity, not by value.
pub struct ObjectWrapper<T: ?Sized>(Rc<T>);

impl<T: ?Sized> ObjectWrapper<T> {
    pub fn new(object: Rc<T>) -> Self {
        ObjectWrapper(object)
    }

    pub fn object(&self) -> &Rc<T> {
        &self.0
    }

    pub fn into_inner(self) -> Rc<T> {
        self.0
    }

    fn address(&self) -> *const () {
        Rc::as_ptr(&self.0) as *const ()
    }
}

impl<T: ?Sized> Clone for ObjectWrapper<T> {
    fn clone(&self) -> Self {
        ObjectWrapper(self.0.clone())
    }
}

impl<T: ?Sized> PartialEq for ObjectWrapper<T> {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl<T: ?Sized> Eq for ObjectWrapper<T> {}

impl<T: ?Sized> Hash for ObjectWrapper<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl<T: ?Sized> Deref for ObjectWrapper<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> From<Rc<T>> for ObjectWrapper<T> {
    fn from(object: Rc<T>) -> Self {
        ObjectWrapper(object)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ObjectWrapper<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{:p}", &*self.0, self.address())
    }
}

/// Set of shared objects by identity.
pub struct ObjectSet<T: ?Sized> {
    objects: AHashSet<ObjectWrapper<T>>,
}

impl<T: ?Sized> ObjectSet<T> {
    pub fn new() -> Self {
        ObjectSet {
            objects: AHashSet::new(),
        }
    }

    /// False if this object was already present.
    pub fn insert(&mut self, object: Rc<T>) -> bool {
        self.objects.insert(ObjectWrapper(object))
    }

    pub fn contains(&self, object: &Rc<T>) -> bool {
        self.objects.contains(&ObjectWrapper(object.clone()))
    }

    /// False if this object wasn't present.
    pub fn remove(&mut self, object: &Rc<T>) -> bool {
        self.objects.remove(&ObjectWrapper(object.clone()))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<T>> + '_ {
        self.objects.iter().map(ObjectWrapper::object)
    }
}

impl<T: ?Sized> Default for ObjectSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for ObjectSet<T> {
    fn clone(&self) -> Self {
        ObjectSet {
            objects: self.objects.clone(),
        }
    }
}

impl<T: ?Sized> FromIterator<Rc<T>> for ObjectSet<T> {
    fn from_iter<I: IntoIterator<Item = Rc<T>>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: ?Sized> Extend<Rc<T>> for ObjectSet<T> {
    fn extend<I: IntoIterator<Item = Rc<T>>>(&mut self, iter: I) {
        self.objects.extend(iter.into_iter().map(ObjectWrapper));
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for ObjectSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.objects.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_not_value() {
        let x = Rc::new(1);
        let y = Rc::new(1);
        let mut set = ObjectSet::new();
        assert!(set.insert(x.clone()));
        assert!(set.insert(y.clone()));
        assert!(!set.insert(x.clone()));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&x));
        assert!(!set.contains(&Rc::new(1)));
    }

    #[test]
    fn remove() {
        let x = Rc::new("x".to_string());
        let mut set = [x.clone()].into_iter().collect::<ObjectSet<_>>();
        assert!(set.remove(&x));
        assert!(!set.remove(&x));
        assert!(set.is_empty());
    }

    #[test]
    fn unsized_objects() {
        let x: Rc<str> = Rc::from("shared");
        let mut set = ObjectSet::<str>::default();
        set.extend([x.clone(), x.clone(), Rc::from("shared")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().filter(|object| Rc::ptr_eq(object, &x)).count(), 1);
    }

    #[test]
    fn wrapper() {
        let x = Rc::new(vec![1]);
        let wrapper = ObjectWrapper::new(x.clone());
        assert_eq!(wrapper, ObjectWrapper::from(x.clone()));
        assert_ne!(wrapper, ObjectWrapper::new(Rc::new(vec![1])));
        assert_eq!(wrapper.len(), 1);
        assert!(Rc::ptr_eq(&wrapper.into_inner(), &x));
    }
}
