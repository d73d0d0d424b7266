use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Runtime identity of a stored type
///
/// Two `TypeInfo`s are equal exactly when they describe the same concrete type.
/// The name is carried for diagnostics only and never takes part in comparisons.
///
/// # Examples
///
/// ```
/// use sovran_vocab::{AnyValue, TypeInfo};
///
/// let value = AnyValue::new(42i32);
/// assert_eq!(value.type_info(), TypeInfo::of::<i32>());
/// assert_ne!(value.type_info(), TypeInfo::of::<i64>());
///
/// // An empty value reports the void identity
/// assert_eq!(AnyValue::empty().type_info(), TypeInfo::void());
/// ```
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Identity of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Identity reported for "no type", i.e. an empty container
    pub fn void() -> Self {
        Self::of::<()>()
    }

    /// The underlying `TypeId`
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Type name, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Check whether this identity describes `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Check whether this is the identity of an empty container
    pub fn is_void(&self) -> bool {
        self.is::<()>()
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialEq<TypeId> for TypeInfo {
    fn eq(&self, other: &TypeId) -> bool {
        self.id == *other
    }
}

impl From<TypeInfo> for TypeId {
    fn from(info: TypeInfo) -> Self {
        info.id
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeInfo({})", self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
