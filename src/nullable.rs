use core::fmt;
use core::hash::Hash;
use core::hash::Hasher;

/// A value with a distinguished null state.
pub trait MaybeNull: Sized {
    fn null() -> Self;
    fn is_null(&self) -> bool;
    /// Takes the value out, leaving a null in its place.
    fn take(&mut self) -> Self;
    fn replace(&mut self, new: Self) -> Self;
}

/// Either a present value of `T` or an explicit null.
///
/// Null is tracked by a flag, never inferred from the contents: `Nullable::new(0)`
/// is present. While null, the stored value is kept at `T::default()`.
#[derive(Copy, Clone, Default)]
pub struct Nullable<T> {
    value: T,
    not_null: bool,
}

impl<T> Nullable<T> {
    /// Wraps `value` as present, whatever it holds.
    #[inline]
    pub const fn new(value: T) -> Nullable<T> {
        return Nullable {
            value: value,
            not_null: true,
        };
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        return !self.not_null;
    }

    #[inline]
    pub fn not_null(&self) -> bool {
        return self.not_null;
    }

    /// Reports whether this is the "omit" state, i.e. null.
    ///
    /// Suitable for `#[serde(skip_serializing_if = "Nullable::is_zero")]`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        return self.is_null();
    }

    /// Borrows the value, or `None` when null.
    #[inline]
    pub fn get_ref(&self) -> Option<&T> {
        if self.is_null() {
            return None;
        }
        return Some(&self.value);
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.is_null() {
            return None;
        }
        return Some(&mut self.value);
    }

    #[inline]
    pub fn get(self) -> Option<T> {
        if self.is_null() {
            return None;
        }
        return Some(self.value);
    }

    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.not_null = true;
    }

    /// Stores `value` as present and returns the previous contents.
    #[inline]
    pub fn replace(&mut self, value: T) -> Nullable<T> {
        return core::mem::replace(self, Nullable::new(value));
    }

    #[inline]
    pub fn value_or(self, fallback: T) -> T {
        if self.is_null() {
            return fallback;
        }
        return self.value;
    }
}

impl<T: Default> Nullable<T> {
    #[inline]
    pub fn null() -> Nullable<T> {
        return Nullable {
            value: T::default(),
            not_null: false,
        };
    }

    /// Builds a present value from `convert(source)`, or null when there is no source.
    /// `convert` is only called when `source` is `Some`.
    #[inline]
    pub fn convert_ref<S, F>(source: Option<&S>, convert: F) -> Nullable<T>
    where
        S: ?Sized,
        F: FnOnce(&S) -> T,
    {
        if let Some(source) = source {
            return Nullable::new(convert(source));
        }
        return Nullable::null();
    }

    #[inline]
    pub fn from_option(value: Option<T>) -> Nullable<T> {
        if let Some(value) = value {
            return Nullable::new(value);
        }
        return Nullable::null();
    }

    /// Resets to null. The previous value is dropped, not kept as a placeholder.
    #[inline]
    pub fn unset(&mut self) {
        self.value = T::default();
        self.not_null = false;
    }

    /// Takes the value out, leaving a null in its place.
    #[inline]
    pub fn take(&mut self) -> Nullable<T> {
        return core::mem::take(self);
    }

    /// The held value, or `T::default()` when null.
    #[inline]
    pub fn into_value(self) -> T {
        if self.is_null() {
            return T::default();
        }
        return self.value;
    }

    pub fn map<U: Default, F>(self, f: F) -> Nullable<U>
    where
        F: FnOnce(T) -> U,
    {
        if self.is_null() {
            return Nullable::null();
        }
        return Nullable::new(f(self.value));
    }
}

impl<T: Clone + Default> Nullable<T> {
    /// Copies the referenced value, or null when there is no reference.
    #[inline]
    pub fn from_ref(value: Option<&T>) -> Nullable<T> {
        return Nullable::convert_ref(value, T::clone);
    }

    /// A copy of the held value, or `T::default()` when null.
    #[inline]
    pub fn value(&self) -> T {
        if self.is_null() {
            return T::default();
        }
        return self.value.clone();
    }
}

impl<T: Default> MaybeNull for Nullable<T> {
    #[inline]
    fn null() -> Self {
        return Nullable::null();
    }
    #[inline]
    fn is_null(&self) -> bool {
        return Nullable::is_null(self);
    }
    #[inline]
    fn take(&mut self) -> Self {
        return Nullable::take(self);
    }
    #[inline]
    fn replace(&mut self, new: Self) -> Self {
        return core::mem::replace(self, new);
    }
}

impl<T> MaybeNull for Option<T> {
    #[inline]
    fn null() -> Self {
        return None;
    }
    #[inline]
    fn is_null(&self) -> bool {
        return self.is_none();
    }
    #[inline]
    fn take(&mut self) -> Self {
        return Option::take(self);
    }
    #[inline]
    fn replace(&mut self, new: Self) -> Self {
        return core::mem::replace(self, new);
    }
}

impl<T> From<T> for Nullable<T> {
    #[inline]
    fn from(value: T) -> Nullable<T> {
        return Nullable::new(value);
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    #[inline]
    fn from(value: Option<T>) -> Nullable<T> {
        return Nullable::from_option(value);
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    #[inline]
    fn from(value: Nullable<T>) -> Option<T> {
        return value.get();
    }
}

// Null compares equal to null whatever the placeholder holds.
impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Nullable<T>) -> bool {
        if let (Some(a), Some(b)) = (self.get_ref(), other.get_ref()) {
            return a == b;
        }
        return self.is_null() && other.is_null();
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: Hash> Hash for Nullable<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.not_null.hash(state);
        if let Some(value) = self.get_ref() {
            value.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.get_ref() {
            return fmt::Display::fmt(value, f);
        }
        return f.write_str("null");
    }
}

impl<T: fmt::Debug> fmt::Debug for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(value) = self.get_ref() {
            return f.debug_tuple("Nullable").field(value).finish();
        }
        return f.write_str("Nullable(null)");
    }
}
