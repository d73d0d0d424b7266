//! Free-function extraction for [`AnyValue`]
//!
//! The checked forms ([`any_cast`], [`any_cast_owned`]) return a
//! [`BadAnyCast`] error when the container is empty or holds another type.
//! The pointer forms ([`any_cast_ref`], [`any_cast_mut`]) never fail and
//! answer `None` instead, which makes them the tool for dispatching on the
//! runtime type of a collection of values.

use crate::error::BadAnyCast;
use crate::AnyValue;

/// Returns a copy of the value held by `any`
///
/// # Errors
///
/// - Returns `BadAnyCast::Empty` if `any` is empty
/// - Returns `BadAnyCast::TypeMismatch` if `any` holds something other than exactly a `T`
///
/// # Examples
///
/// ```
/// use sovran_vocab::{any_cast, AnyValue, BadAnyCast};
///
/// let value = AnyValue::new(2.5f64);
/// assert_eq!(any_cast::<f64>(&value), Ok(2.5));
///
/// // No numeric widening or narrowing
/// assert!(matches!(any_cast::<f32>(&value), Err(BadAnyCast::TypeMismatch { .. })));
/// ```
pub fn any_cast<T: Clone + 'static>(any: &AnyValue) -> Result<T, BadAnyCast> {
    any.cast::<T>()
}

/// Moves the value out of a container that is about to be discarded
///
/// # Errors
///
/// Same conditions as [`any_cast`].
pub fn any_cast_owned<T: 'static>(any: AnyValue) -> Result<T, BadAnyCast> {
    any.into_inner::<T>()
}

/// Reference to the held value, or `None` if `any` is absent, empty, or holds
/// another type
///
/// # Examples
///
/// ```
/// use sovran_vocab::{any_cast_ref, AnyValue};
///
/// let values = vec![AnyValue::new(1i32), AnyValue::new("two"), AnyValue::empty()];
///
/// let ints: Vec<i32> = values
///     .iter()
///     .filter_map(|value| any_cast_ref::<i32>(Some(value)).copied())
///     .collect();
/// assert_eq!(ints, vec![1]);
///
/// assert!(any_cast_ref::<i32>(None).is_none());
/// ```
pub fn any_cast_ref<T: 'static>(any: Option<&AnyValue>) -> Option<&T> {
    any?.downcast_ref::<T>()
}

/// Mutable reference to the held value, or `None` if `any` is absent, empty,
/// or holds another type
pub fn any_cast_mut<T: 'static>(any: Option<&mut AnyValue>) -> Option<&mut T> {
    any?.downcast_mut::<T>()
}

/// Builds an [`AnyValue`] holding a `T` constructed from `args`
///
/// ```
/// use sovran_vocab::{make_any, any_cast};
///
/// let value = make_any::<String, _>("built in place");
/// assert_eq!(any_cast::<String>(&value).unwrap(), "built in place");
/// ```
pub fn make_any<T, A>(args: A) -> AnyValue
where
    T: From<A> + Clone + 'static,
{
    AnyValue::in_place::<T, A>(args)
}
