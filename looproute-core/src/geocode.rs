//! Resolve addresses to coordinates.

use geo::Coord;

use crate::ServiceError;

/// Resolve a free-form address to a coordinate.
///
/// `Ok(None)` means the service answered but knows no such address; callers
/// decide whether to drop the stop or abort. [`ServiceError`] is reserved for
/// transport and quota failures.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use looproute_core::{Geocoder, ServiceError};
///
/// struct FixedGeocoder;
///
/// impl Geocoder for FixedGeocoder {
///     fn resolve(&self, address: &str) -> Result<Option<Coord<f64>>, ServiceError> {
///         if address == "home" {
///             Ok(Some(Coord { x: -105.0, y: 39.9 }))
///         } else {
///             Ok(None)
///         }
///     }
/// }
///
/// assert!(FixedGeocoder.resolve("home")?.is_some());
/// assert!(FixedGeocoder.resolve("nowhere")?.is_none());
/// # Ok::<(), ServiceError>(())
/// ```
pub trait Geocoder {
    /// Resolve `address`, returning `Ok(None)` when it cannot be geocoded.
    fn resolve(&self, address: &str) -> Result<Option<Coord<f64>>, ServiceError>;
}

impl<T: Geocoder + ?Sized> Geocoder for &T {
    fn resolve(&self, address: &str) -> Result<Option<Coord<f64>>, ServiceError> {
        (**self).resolve(address)
    }
}
