//! # campo-geo
//!
//! Upstream HTTP clients behind the Campo proxy endpoints:
//! - [`GeocodeClient`]: free-text place search against Nominatim, returned unmodified
//! - [`SatelliteClient`]: STAC scene search plus the cloud-cover selection policy
//!
//! Neither client retries; upstream failures surface as [`GeoError`].

pub mod nominatim;
pub mod scenes;
pub mod stac;

mod error;
mod http;

pub use error::GeoError;
pub use nominatim::GeocodeClient;
pub use scenes::{BoundingBox, CloudPolicy, SatelliteImage, Scene};
pub use stac::SatelliteClient;
