use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index storage of composite collections.
///
/// Either a concrete position or the end sentinel, which carries no position.
/// End orders after every position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Position<P> {
    At(P),
    End,
}

impl<P> Position<P> {
    pub fn is_end(&self) -> bool {
        matches!(self, Position::End)
    }

    pub fn position(&self) -> Option<&P> {
        match self {
            Position::At(position) => Some(position),
            Position::End => None,
        }
    }

    pub fn into_position(self) -> Option<P> {
        match self {
            Position::At(position) => Some(position),
            Position::End => None,
        }
    }

    pub fn map<Q>(self, map: impl FnOnce(P) -> Q) -> Position<Q> {
        match self {
            Position::At(position) => Position::At(map(position)),
            Position::End => Position::End,
        }
    }

    /// Position for operation `op` which isn't defined on end.
    #[track_caller]
    pub fn expect_position(&self, op: &str) -> &P {
        match self {
            Position::At(position) => position,
            Position::End => fail!("Can't {} end index", op),
        }
    }
}

impl<P> From<Option<P>> for Position<P> {
    fn from(position: Option<P>) -> Self {
        match position {
            Some(position) => Position::At(position),
            None => Position::End,
        }
    }
}

/// Outcome of an attempt to move an index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement<T> {
    Moved(T),
    /// Move landed exactly on end.
    BecameEnd,
    /// Move would leave the valid range of indices.
    Misnavigation,
}

impl<T> Movement<T> {
    pub fn is_misnavigation(&self) -> bool {
        matches!(self, Movement::Misnavigation)
    }

    pub fn map<U>(self, map: impl FnOnce(T) -> U) -> Movement<U> {
        match self {
            Movement::Moved(value) => Movement::Moved(map(value)),
            Movement::BecameEnd => Movement::BecameEnd,
            Movement::Misnavigation => Movement::Misnavigation,
        }
    }

    /// Misnavigation is fatal.
    #[track_caller]
    pub fn into_position(self, op: &str) -> Position<T> {
        match self {
            Movement::Moved(value) => Position::At(value),
            Movement::BecameEnd => Position::End,
            Movement::Misnavigation => fail!("Misnavigation while trying to {}", op),
        }
    }
}

/// Coalesces per component movements into one movement of composite `$product`.
///
/// Components are evaluated in order. Misnavigation of any component is the result.
/// Once a component became end, the following components are only checked with
/// `$check` for misnavigation and not moved, and the result is end.
/// Otherwise the result is the product of moved components.
macro_rules! coalesce_movements {
    ($product:ident { $($field:ident: $attempt:expr, $check:expr);+ $(;)? }) => {
        'coalesce: {
            let mut became_end = false;
            $(
                let $field = if became_end {
                    let check: $crate::core::Movement<()> = $check;
                    if check.is_misnavigation() {
                        break 'coalesce $crate::core::Movement::Misnavigation;
                    }
                    None
                } else {
                    match $attempt {
                        $crate::core::Movement::Moved(index) => Some(index),
                        $crate::core::Movement::BecameEnd => {
                            became_end = true;
                            None
                        }
                        $crate::core::Movement::Misnavigation => {
                            break 'coalesce $crate::core::Movement::Misnavigation
                        }
                    }
                };
            )+
            if became_end {
                $crate::core::Movement::BecameEnd
            } else {
                match ($($field,)+) {
                    ($(Some($field),)+) => $crate::core::Movement::Moved($product { $($field),+ }),
                    _ => $crate::core::Movement::BecameEnd,
                }
            }
        }
    };
}

/// Component that orders a lockstep position.
pub trait Leading {
    type Lead: Ord;

    fn leading(&self) -> &Self::Lead;
}

/// Index whose position components move together, so the leading component
/// alone orders and identifies it.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LockstepIndex<P>(Position<P>);

impl<P> LockstepIndex<P> {
    pub fn at(position: P) -> Self {
        LockstepIndex(Position::At(position))
    }

    pub fn end() -> Self {
        LockstepIndex(Position::End)
    }

    pub fn as_position(&self) -> &Position<P> {
        &self.0
    }

    pub fn into_position(self) -> Position<P> {
        self.0
    }

    pub fn is_end(&self) -> bool {
        self.0.is_end()
    }
}

impl<P> From<Position<P>> for LockstepIndex<P> {
    fn from(position: Position<P>) -> Self {
        LockstepIndex(position)
    }
}

impl<P: Leading> PartialEq for LockstepIndex<P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<P: Leading> Eq for LockstepIndex<P> {}

impl<P: Leading> PartialOrd for LockstepIndex<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: Leading> Ord for LockstepIndex<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Position::At(a), Position::At(b)) => a.leading().cmp(b.leading()),
            (Position::At(_), Position::End) => Ordering::Less,
            (Position::End, Position::At(_)) => Ordering::Greater,
            (Position::End, Position::End) => Ordering::Equal,
        }
    }
}

impl<P: Leading> Hash for LockstepIndex<P>
where
    P::Lead: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.position().map(Leading::leading).hash(state);
    }
}

impl<P: fmt::Debug> fmt::Debug for LockstepIndex<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}
