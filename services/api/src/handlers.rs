//! HTTP handlers, one module per feature

pub mod app;
pub mod facilities;
pub mod files;
pub mod finances;
pub mod reports;
pub mod rents;
pub mod room_types;
pub mod rooms;
pub mod tenants;
pub mod users;

/// Validate `value` with `f` only when it is present
pub(crate) fn when_present<T: ?Sized>(
    value: Option<&T>,
    f: impl FnOnce(&T) -> Result<(), String>,
) -> Result<(), String> {
    value.map_or(Ok(()), f)
}
