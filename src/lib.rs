//! # sovran-vocab
//!
//! Two vocabulary types for values whose type or presence is only known at runtime.
//!
//! - [`AnyValue`] holds a single value of any cloneable type behind a uniform
//!   handle. The type is checked at runtime whenever the value is read back.
//! - [`Optional<T>`] holds zero or one value of a statically known type, with
//!   explicit emptiness and a checked accessor.
//!
//! ## Key Features
//!
//! - **Exact type checks**: a value is only ever extracted as the type it was stored as
//! - **Value semantics**: cloning clones the held value, moving moves it, and every
//!   held value is dropped exactly once
//! - **Two access tiers**: checked accessors return `Result`, pointer-style accessors
//!   return `Option` and never fail
//! - **In-place construction**: build stored values directly from constructor arguments
//!
//! ## Usage Examples
//!
//! ### Dispatching on a runtime type
//!
//! ```rust
//! use sovran_vocab::{any_cast_ref, AnyValue, TypeInfo};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let values = vec![
//!     AnyValue::new(42i32),
//!     AnyValue::new(2.5f64),
//!     AnyValue::new(String::from("hello")),
//!     AnyValue::new(Point { x: 42, y: 24 }),
//! ];
//!
//! for value in &values {
//!     if let Some(n) = any_cast_ref::<i32>(Some(value)) {
//!         println!("int: {}", n);
//!     } else if let Some(f) = any_cast_ref::<f64>(Some(value)) {
//!         println!("double: {}", f);
//!     } else if value.type_info() == TypeInfo::of::<String>() {
//!         println!("string: {}", value.downcast_ref::<String>().unwrap());
//!     } else if let Some(p) = value.downcast_ref::<Point>() {
//!         println!("point: {}x{}", p.x, p.y);
//!     }
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_vocab::{any_cast, AnyValue, BadAnyCast};
//!
//! let mut value = AnyValue::new(String::from("The cake is a lie!"));
//!
//! match any_cast::<bool>(&value) {
//!     Ok(flag) => println!("Flag: {}", flag),
//!     Err(BadAnyCast::TypeMismatch { stored, requested }) => {
//!         println!("Holds {} rather than {}", stored, requested)
//!     }
//!     Err(BadAnyCast::Empty { .. }) => println!("Nothing stored"),
//! }
//!
//! value.clear();
//! assert!(matches!(any_cast::<String>(&value), Err(BadAnyCast::Empty { .. })));
//! ```
//!
//! ### Optional values
//!
//! ```rust
//! use sovran_vocab::{make_optional, Optional, VocabError};
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! impl From<(i32, i32)> for Point {
//!     fn from((x, y): (i32, i32)) -> Self {
//!         Point { x, y }
//!     }
//! }
//!
//! fn main() -> Result<(), VocabError> {
//!     let mut point = make_optional::<Point, _>((42, 24));
//!     assert_eq!(point.get_value()?, &Point { x: 42, y: 24 });
//!
//!     point.clear();
//!     assert!(!point.has_value());
//!     assert!(point.get_value().is_err());
//!
//!     let empty: Optional<f64> = Optional::none();
//!     assert_eq!(empty.get_value_or(-1.0), -1.0);
//!     Ok(())
//! }
//! ```

macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}
pub(crate) use trace;

mod any_value;
mod cast;
mod cell;
mod error;
mod optional;
mod type_info;

#[cfg(test)]
mod optional_tests;

pub use any_value::AnyValue;
pub use cast::{any_cast, any_cast_mut, any_cast_owned, any_cast_ref, make_any};
pub use error::{BadAnyCast, EmptyAccess, VocabError};
pub use optional::{make_optional, Optional};
pub use type_info::TypeInfo;
