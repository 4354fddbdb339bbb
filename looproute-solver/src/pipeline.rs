//! Address resolution ahead of the solve.
//!
//! Solvers require every stop to carry a coordinate; this pipeline is the
//! single place addresses turn into [`Stop`]s, so that invariant holds by
//! construction.

use log::warn;
use looproute_core::{Geocoder, ServiceError, Stop};
use thiserror::Error;

/// Errors from [`resolve_stops`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The start address could not be geocoded; without it there is no tour.
    #[error("start address {address:?} could not be geocoded")]
    StartNotFound {
        /// The address as entered.
        address: String,
    },
    /// A geocoding call failed at the transport level.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Resolve the start and stop addresses for a solve.
///
/// An unresolvable start aborts with [`ResolveError::StartNotFound`]. An
/// unresolvable stop is dropped with a warning — the tour simply will not
/// visit it. Transport failures propagate; they are never treated as
/// "address unknown".
pub fn resolve_stops<G: Geocoder>(
    geocoder: &G,
    start_address: &str,
    stop_addresses: &[String],
) -> Result<(Stop, Vec<Stop>), ResolveError> {
    let start_location =
        geocoder
            .resolve(start_address)?
            .ok_or_else(|| ResolveError::StartNotFound {
                address: start_address.to_owned(),
            })?;
    let start = Stop::new(start_address, start_location);

    let mut stops = Vec::with_capacity(stop_addresses.len());
    for address in stop_addresses {
        match geocoder.resolve(address)? {
            Some(location) => stops.push(Stop::new(address.clone(), location)),
            None => warn!("dropping unresolvable stop address {address:?}"),
        }
    }
    Ok((start, stops))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Coord;
    use looproute_core::test_support::TableGeocoder;

    fn geocoder() -> TableGeocoder {
        let mut geocoder = TableGeocoder::new();
        geocoder.insert("A", Coord { x: 0.0, y: 0.0 });
        geocoder.insert("B", Coord { x: 1.0, y: 0.0 });
        geocoder.insert("C", Coord { x: 2.0, y: 0.0 });
        geocoder
    }

    #[test]
    fn resolves_start_and_stops() {
        let (start, stops) =
            resolve_stops(&geocoder(), "A", &["B".into(), "C".into()]).unwrap();
        assert_eq!(start.address, "A");
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[1].location, Coord { x: 2.0, y: 0.0 });
    }

    #[test]
    fn drops_unresolvable_stops() {
        let (_, stops) =
            resolve_stops(&geocoder(), "A", &["B".into(), "atlantis".into()]).unwrap();
        let kept: Vec<&str> = stops.iter().map(|s| s.address.as_str()).collect();
        assert_eq!(kept, vec!["B"]);
    }

    #[test]
    fn unresolvable_start_aborts() {
        let err = resolve_stops(&geocoder(), "atlantis", &["B".into()]).unwrap_err();
        assert_eq!(
            err,
            ResolveError::StartNotFound {
                address: "atlantis".into()
            }
        );
    }
}
