use crate::error::EmptyAccess;
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

/// A slot holding zero or one value of type `T`
///
/// The value lives inline, without a heap allocation. Storing a new value
/// drops the old one first, and [`Optional::clear`] drops it immediately, so a
/// held value is always dropped exactly once.
///
/// Reading the value goes through one of two paths:
///
/// - [`Optional::get_value`] checks for emptiness and returns [`EmptyAccess`]
/// - `*slot` (via [`Deref`]) trusts the caller and panics when the slot is empty
///
/// Because of the `Deref` impl, methods of `T` can be called on the slot
/// directly. The slot's own methods take precedence over `T`'s methods of the
/// same name (`set`, `clear`, `take`, `replace`, `iter`, `is_empty`, ...):
/// `Optional<Vec<u8>>::is_empty` reports whether the slot is empty, not the
/// vector. Write `slot.get_value()?.is_empty()` or `(*slot).is_empty()` to
/// reach `T`'s method. Method calls also need the element type to be known,
/// so annotate slots created with `Optional::none()`.
///
/// Empty slots compare equal and order before any held value.
///
/// # Examples
///
/// ```
/// use sovran_vocab::Optional;
///
/// fn checked_sqrt(value: f64) -> Optional<f64> {
///     if value < 0.0 {
///         Optional::none()
///     } else {
///         Optional::some(value.sqrt())
///     }
/// }
///
/// let mut slot = checked_sqrt(-1.0);
/// assert_eq!(slot.get_value_or(-1.0), -1.0);
///
/// slot = checked_sqrt(9.0);
/// assert_eq!(slot.get_value_or(-1.0), 3.0);
/// assert_eq!(*slot, 3.0);
/// ```
#[derive(Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Optional<T> {
    slot: Option<T>,
}

impl<T> Optional<T> {
    /// Creates an empty slot
    pub const fn none() -> Self {
        Self { slot: None }
    }

    /// Alias for [`Optional::none`]
    pub const fn new() -> Self {
        Self::none()
    }

    /// Creates a slot holding `value`
    pub const fn some(value: T) -> Self {
        Self { slot: Some(value) }
    }

    /// Constructs the value from constructor arguments directly in the slot
    ///
    /// Works for types with neither `Default` nor `Clone`.
    ///
    /// ```
    /// use sovran_vocab::Optional;
    ///
    /// struct Point { x: i32, y: i32 }
    ///
    /// impl From<(i32, i32)> for Point {
    ///     fn from((x, y): (i32, i32)) -> Self { Point { x, y } }
    /// }
    ///
    /// let slot = Optional::<Point>::in_place((42, 24));
    /// let point = slot.get_value().unwrap();
    /// assert_eq!((point.x, point.y), (42, 24));
    /// ```
    pub fn in_place<A>(args: A) -> Self
    where
        T: From<A>,
    {
        Self::with(|| T::from(args))
    }

    /// Creates a slot holding the value produced by `make`
    pub fn with<F>(make: F) -> Self
    where
        F: FnOnce() -> T,
    {
        Self::some(make())
    }

    /// Returns true if a value is held
    pub fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns true if no value is held; see the type docs for how this
    /// shadows `T::is_empty`
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Reference to the held value
    ///
    /// # Errors
    ///
    /// Returns `EmptyAccess` if the slot is empty.
    pub fn get_value(&self) -> Result<&T, EmptyAccess> {
        self.slot.as_ref().ok_or(EmptyAccess)
    }

    /// Mutable reference to the held value
    ///
    /// # Errors
    ///
    /// Returns `EmptyAccess` if the slot is empty.
    pub fn get_value_mut(&mut self) -> Result<&mut T, EmptyAccess> {
        self.slot.as_mut().ok_or(EmptyAccess)
    }

    /// Copy of the held value, or `default` converted to `T` when empty
    pub fn get_value_or<U>(&self, default: U) -> T
    where
        T: Clone,
        U: Into<T>,
    {
        match &self.slot {
            Some(value) => value.clone(),
            None => default.into(),
        }
    }

    /// Reference to the held value without checking for emptiness
    ///
    /// # Safety
    ///
    /// The slot must hold a value.
    pub unsafe fn get_unchecked(&self) -> &T {
        // SAFETY: upheld by the caller.
        unsafe { self.slot.as_ref().unwrap_unchecked() }
    }

    /// Mutable reference to the held value without checking for emptiness
    ///
    /// # Safety
    ///
    /// The slot must hold a value.
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        // SAFETY: upheld by the caller.
        unsafe { self.slot.as_mut().unwrap_unchecked() }
    }

    /// Drops the held value; does nothing when empty
    pub fn clear(&mut self) {
        if self.slot.take().is_some() {
            crate::trace!(
                stored = std::any::type_name::<T>(),
                "clearing optional value"
            );
        }
    }

    /// Drops the held value, if any, then stores `value`
    pub fn set(&mut self, value: T) {
        self.clear();
        self.slot = Some(value);
    }

    /// Drops the held value, if any, then constructs a new one from
    /// constructor arguments and returns a reference to it
    pub fn emplace<A>(&mut self, args: A) -> &mut T
    where
        T: From<A>,
    {
        self.clear();
        self.slot.insert(T::from(args))
    }

    /// Stores `value` and returns the previous contents
    pub fn replace(&mut self, value: T) -> Optional<T> {
        Optional {
            slot: self.slot.replace(value),
        }
    }

    /// Moves the contents out, leaving `self` empty
    pub fn take(&mut self) -> Optional<T> {
        Optional {
            slot: self.slot.take(),
        }
    }

    /// Borrows the contents as a standard `Option`
    pub fn as_option(&self) -> Option<&T> {
        self.slot.as_ref()
    }

    /// Mutably borrows the contents as a standard `Option`
    pub fn as_option_mut(&mut self) -> Option<&mut T> {
        self.slot.as_mut()
    }

    /// Converts into a standard `Option`
    pub fn into_option(self) -> Option<T> {
        self.slot
    }

    /// Iterates over the held value, if any
    pub fn iter(&self) -> std::option::Iter<'_, T> {
        self.slot.iter()
    }
}

/// Builds an [`Optional`] holding a `T` constructed from `args`
pub fn make_optional<T, A>(args: A) -> Optional<T>
where
    T: From<A>,
{
    Optional::in_place(args)
}

impl<T: Clone> Clone for Optional<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }

    /// Drops the current value before cloning `source`'s into place
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if let Some(value) = &source.slot {
            self.slot = Some(value.clone());
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::some(value)
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(slot: Option<T>) -> Self {
        Self { slot }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.slot
    }
}

/// Trusted access: panics with the [`EmptyAccess`] message when empty.
/// Use [`Optional::get_value`] for the checked path. The slot's inherent
/// methods shadow `T`'s methods of the same name.
impl<T> Deref for Optional<T> {
    type Target = T;

    fn deref(&self) -> &T {
        match &self.slot {
            Some(value) => value,
            None => panic!("{}", EmptyAccess),
        }
    }
}

impl<T> DerefMut for Optional<T> {
    fn deref_mut(&mut self) -> &mut T {
        match &mut self.slot {
            Some(value) => value,
            None => panic!("{}", EmptyAccess),
        }
    }
}

impl<'a, T> IntoIterator for &'a Optional<T> {
    type Item = &'a T;
    type IntoIter = std::option::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Optional<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.slot.into_iter()
    }
}

/// A bare value compares as a non-empty slot holding it
impl<T: PartialEq> PartialEq<T> for Optional<T> {
    fn eq(&self, other: &T) -> bool {
        self.slot.as_ref() == Some(other)
    }
}

impl<T: PartialOrd> PartialOrd<T> for Optional<T> {
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        match &self.slot {
            Some(value) => value.partial_cmp(other),
            None => Some(Ordering::Less),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.slot {
            Some(value) => f.debug_tuple("Optional").field(value).finish(),
            None => f.write_str("Optional(<empty>)"),
        }
    }
}
