//! crates/logging-sink/src/args.rs
//! Typed argument slots and the cursor that stands in for a C `va_list`.
//!
//! Upstream call sites hand the redirect layer a printf-style format string
//! together with a positional argument list. The layer never interprets the
//! arguments; it only needs to drop a fixed number of leading items and pass
//! the rest on in order. [`ArgCursor`] captures exactly that: a borrowed slice
//! plus a read position. Discarding arguments advances the position, and the
//! sink receives the cursor by value so alignment between format specifiers
//! and slots is visible in the types rather than hidden in stack traversal.

use std::fmt;

/// A single positional argument supplied alongside a format string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg<'a> {
    /// Signed integer (`%d`, `%i`, `%ld`, ...).
    Int(i64),
    /// Unsigned integer (`%u`, `%x`, `%lu`, ...).
    Uint(u64),
    /// Single character (`%c`).
    Char(char),
    /// Borrowed string (`%s`).
    Str(&'a str),
    /// Pointer value (`%p`), stored as an address.
    Ptr(usize),
    /// Floating point value (`%f`, `%g`, ...).
    Float(f64),
}

impl<'a> Arg<'a> {
    /// Returns the slot as a signed integer when it holds one of the integer variants.
    #[must_use]
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(value),
            Self::Uint(value) => {
                if value <= i64::MAX as u64 {
                    Some(value as i64)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Returns the borrowed string held by a [`Arg::Str`] slot.
    #[must_use]
    pub const fn as_str(self) -> Option<&'a str> {
        match self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the character held by a [`Arg::Char`] slot.
    #[must_use]
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Char(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Uint(value) => write!(f, "{value}"),
            Self::Char(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
            Self::Ptr(value) => write!(f, "{value:#x}"),
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

macro_rules! arg_from_signed {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg<'_> {
            fn from(value: $ty) -> Self {
                Self::Int(i64::from(value))
            }
        })*
    };
}

macro_rules! arg_from_unsigned {
    ($($ty:ty),*) => {
        $(impl From<$ty> for Arg<'_> {
            fn from(value: $ty) -> Self {
                Self::Uint(u64::from(value))
            }
        })*
    };
}

arg_from_signed!(i8, i16, i32, i64);
arg_from_unsigned!(u8, u16, u32, u64);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        Self::Int(value as i64)
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Self::Uint(value as u64)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Str(value.as_str())
    }
}

impl<T> From<*const T> for Arg<'_> {
    fn from(value: *const T) -> Self {
        Self::Ptr(value as usize)
    }
}

impl<T> From<*mut T> for Arg<'_> {
    fn from(value: *mut T) -> Self {
        Self::Ptr(value as usize)
    }
}

/// Read cursor over a borrowed argument list.
///
/// The cursor is `Copy`, so handing it to a sink never disturbs the caller's
/// view. [`skip`](Self::skip) saturates at the end of the slice: a call that
/// claims more leading arguments than it supplied ends up with an empty
/// remainder instead of reading past the list.
///
/// # Examples
///
/// ```
/// use logging_sink::{Arg, ArgCursor};
///
/// let slots = [Arg::Str("wifi"), Arg::Uint(1234), Arg::Int(42)];
/// let mut cursor = ArgCursor::new(&slots).skip(2);
///
/// assert_eq!(cursor.consumed(), 2);
/// assert_eq!(cursor.next(), Some(Arg::Int(42)));
/// assert!(cursor.is_empty());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArgCursor<'a> {
    slots: &'a [Arg<'a>],
    position: usize,
}

impl<'a> ArgCursor<'a> {
    /// Creates a cursor positioned at the first slot.
    #[must_use]
    pub const fn new(slots: &'a [Arg<'a>]) -> Self {
        Self { slots, position: 0 }
    }

    /// Creates a cursor over an empty argument list.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            slots: &[],
            position: 0,
        }
    }

    /// Returns a cursor advanced past `count` slots.
    #[must_use]
    pub const fn skip(self, count: usize) -> Self {
        let target = self.position.saturating_add(count);
        let position = if target > self.slots.len() {
            self.slots.len()
        } else {
            target
        };
        Self {
            slots: self.slots,
            position,
        }
    }

    /// Returns the slots that have not been read or skipped yet.
    #[must_use]
    pub fn remaining(&self) -> &'a [Arg<'a>] {
        &self.slots[self.position..]
    }

    /// Returns how many slots have been read or skipped.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.position
    }

    /// Returns the number of remaining slots.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len() - self.position
    }

    /// Reports whether every slot has been read or skipped.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ArgCursor<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> Iterator for ArgCursor<'a> {
    type Item = Arg<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.slots.get(self.position).copied()?;
        self.position += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for ArgCursor<'_> {}
