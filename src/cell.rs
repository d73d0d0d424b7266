use crate::TypeInfo;
use std::any::Any;

/// Owning storage cell behind an [`AnyValue`](crate::AnyValue) handle
///
/// Implemented by `Holder<T>`, one instantiation per stored type.
pub(crate) trait Cell {
    /// Deep copy of the cell and its value
    fn clone_cell(&self) -> Box<dyn Cell>;

    fn type_info(&self) -> TypeInfo;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

pub(crate) struct Holder<T> {
    value: T,
}

impl<T: Clone + 'static> Holder<T> {
    pub(crate) fn boxed(value: T) -> Box<dyn Cell> {
        Box::new(Self { value })
    }
}

impl<T: Clone + 'static> Cell for Holder<T> {
    fn clone_cell(&self) -> Box<dyn Cell> {
        Holder::boxed(self.value.clone())
    }

    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn Cell {
    pub(crate) fn is<T: 'static>(&self) -> bool {
        self.type_info().is::<T>()
    }

    pub(crate) fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.as_any()
            .downcast_ref::<Holder<T>>()
            .map(|holder| &holder.value)
    }

    pub(crate) fn downcast_mut<T: 'static>(&mut self) -> Option<&mut T> {
        self.as_any_mut()
            .downcast_mut::<Holder<T>>()
            .map(|holder| &mut holder.value)
    }

    /// Move the value out of the cell, reporting the stored type on a mismatch
    pub(crate) fn downcast<T: 'static>(self: Box<Self>) -> Result<T, TypeInfo> {
        let stored = self.type_info();
        self.into_any()
            .downcast::<Holder<T>>()
            .map(|holder| holder.value)
            .map_err(|_| stored)
    }
}
