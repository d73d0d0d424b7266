use crate::cell::{Cell, Holder};
use crate::error::BadAnyCast;
use crate::TypeInfo;
use std::fmt;

/// A container for a single value of any cloneable type
///
/// `AnyValue` owns at most one value behind a uniform handle. The concrete type
/// is recorded when the value is stored and checked again whenever the value is
/// read back, so a value can only ever be extracted as exactly the type it was
/// stored as.
///
/// Cloning an `AnyValue` clones the held value, whatever its type. Storing a
/// value of a different type simply replaces the previous one.
///
/// # Examples
///
/// ```
/// use sovran_vocab::{any_cast, AnyValue, BadAnyCast, TypeInfo};
///
/// let mut value = AnyValue::new(42i32);
/// assert_eq!(value.type_info(), TypeInfo::of::<i32>());
/// assert_eq!(any_cast::<i32>(&value)?, 42);
///
/// value.set(String::from("hello"));
/// assert!(value.is::<String>());
/// assert!(matches!(any_cast::<i32>(&value), Err(BadAnyCast::TypeMismatch { .. })));
///
/// value.clear();
/// assert!(!value.has_value());
/// # Ok::<(), BadAnyCast>(())
/// ```
#[derive(Default)]
pub struct AnyValue {
    cell: Option<Box<dyn Cell>>,
}

impl AnyValue {
    /// Creates an empty value
    pub const fn empty() -> Self {
        Self { cell: None }
    }

    /// Stores `value`
    ///
    /// Passing an `AnyValue` adopts it instead of nesting one container inside
    /// another.
    ///
    /// ```
    /// use sovran_vocab::{AnyValue, TypeInfo};
    ///
    /// let inner = AnyValue::new(1.5f64);
    /// let outer = AnyValue::new(inner);
    /// assert_eq!(outer.type_info(), TypeInfo::of::<f64>());
    /// ```
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        let mut slot = Some(value);
        let erased: &mut dyn std::any::Any = &mut slot;
        if let Some(adopted) = erased.downcast_mut::<Option<AnyValue>>() {
            return adopted.take().unwrap_or_default();
        }
        Self {
            cell: slot.map(Holder::boxed),
        }
    }

    /// Constructs a `T` from constructor arguments directly into a new value
    ///
    /// ```
    /// use sovran_vocab::AnyValue;
    ///
    /// #[derive(Clone, Debug, PartialEq)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// impl From<(i32, i32)> for Point {
    ///     fn from((x, y): (i32, i32)) -> Self { Point { x, y } }
    /// }
    ///
    /// let value = AnyValue::in_place::<Point, _>((42, 24));
    /// assert_eq!(value.downcast_ref::<Point>(), Some(&Point { x: 42, y: 24 }));
    /// ```
    pub fn in_place<T, A>(args: A) -> Self
    where
        T: From<A> + Clone + 'static,
    {
        Self::with(|| T::from(args))
    }

    /// Stores the value produced by `make`
    ///
    /// As with [`AnyValue::new`], an `AnyValue` produced by `make` is adopted.
    pub fn with<T, F>(make: F) -> Self
    where
        T: Clone + 'static,
        F: FnOnce() -> T,
    {
        Self::new(make())
    }

    /// Returns true if a value is held
    pub fn has_value(&self) -> bool {
        self.cell.is_some()
    }

    /// Returns true if no value is held
    pub fn is_empty(&self) -> bool {
        self.cell.is_none()
    }

    /// Returns true if a value of exactly type `T` is held
    pub fn is<T: 'static>(&self) -> bool {
        self.cell.as_ref().is_some_and(|cell| cell.is::<T>())
    }

    /// Identity of the held value's type, or [`TypeInfo::void`] when empty
    pub fn type_info(&self) -> TypeInfo {
        self.cell
            .as_ref()
            .map_or_else(TypeInfo::void, |cell| cell.type_info())
    }

    /// Destroys the held value, if any
    pub fn clear(&mut self) {
        if let Some(cell) = self.cell.take() {
            crate::trace!(stored = cell.type_info().name(), "clearing any value");
            drop(cell);
        }
    }

    /// Replaces the held value with `value`, whatever the previous type was
    pub fn set<T: Clone + 'static>(&mut self, value: T) {
        let next = AnyValue::new(value);
        crate::trace!(
            previous = self.type_info().name(),
            next = next.type_info().name(),
            "replacing any value"
        );
        self.clear();
        *self = next;
    }

    /// Replaces the held value with a `T` built from constructor arguments
    /// and returns a reference to it
    ///
    /// When `T` is `AnyValue` the built value is adopted and the returned
    /// reference is `self`.
    pub fn emplace<T, A>(&mut self, args: A) -> &mut T
    where
        T: From<A> + Clone + 'static,
    {
        self.clear();
        self.set(T::from(args));
        let value = if TypeInfo::of::<T>().is::<AnyValue>() {
            (self as &mut dyn std::any::Any).downcast_mut::<T>()
        } else {
            self.downcast_mut::<T>()
        };
        match value {
            Some(value) => value,
            None => unreachable!("freshly stored value is a `{}`", TypeInfo::of::<T>()),
        }
    }

    /// Moves the held value out, leaving `self` empty
    pub fn take(&mut self) -> AnyValue {
        AnyValue {
            cell: self.cell.take(),
        }
    }

    /// Reference to the held value if it is exactly a `T`
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.cell.as_ref()?.downcast_ref::<T>()
    }

    /// Mutable reference to the held value if it is exactly a `T`
    pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.cell.as_mut()?.downcast_mut::<T>()
    }

    /// Copy of the held value
    ///
    /// # Errors
    ///
    /// - Returns `BadAnyCast::Empty` if no value is held
    /// - Returns `BadAnyCast::TypeMismatch` if the held value is not exactly a `T`
    pub fn cast<T: Clone + 'static>(&self) -> Result<T, BadAnyCast> {
        self.downcast_ref::<T>()
            .cloned()
            .ok_or_else(|| self.mismatch::<T>())
    }

    /// Moves the held value out of the container
    ///
    /// # Errors
    ///
    /// Same conditions as [`AnyValue::cast`]. On error the container is dropped.
    pub fn into_inner<T: 'static>(self) -> Result<T, BadAnyCast> {
        let requested = TypeInfo::of::<T>();
        match self.cell {
            None => Err(BadAnyCast::Empty { requested }),
            Some(cell) => cell
                .downcast::<T>()
                .map_err(|stored| BadAnyCast::TypeMismatch { stored, requested }),
        }
    }

    pub(crate) fn mismatch<T: 'static>(&self) -> BadAnyCast {
        BadAnyCast::new(self.type_info(), TypeInfo::of::<T>())
    }
}

impl Clone for AnyValue {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.as_ref().map(|cell| cell.clone_cell()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.cell = source.cell.as_ref().map(|cell| cell.clone_cell());
    }
}

impl fmt::Debug for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cell {
            Some(cell) => write!(f, "AnyValue({})", cell.type_info()),
            None => f.write_str("AnyValue(<empty>)"),
        }
    }
}
