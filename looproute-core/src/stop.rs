use geo::Coord;

/// A tour stop whose address has been resolved to a coordinate.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
///
/// A `Stop` is only ever constructed from a successful geocode, so solvers
/// never observe an unresolved address.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use looproute_core::Stop;
///
/// let stop = Stop::new("2910 Arapahoe Rd, Erie, CO", Coord { x: -105.05, y: 40.02 });
/// assert_eq!(stop.location.y, 40.02);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    /// The address as entered by the user.
    pub address: String,
    /// Resolved position of the address.
    pub location: Coord<f64>,
}

impl Stop {
    /// Construct a resolved stop.
    pub fn new(address: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            address: address.into(),
            location,
        }
    }
}
