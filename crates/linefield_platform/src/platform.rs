//! Platform trait and abstraction

use linefield_core::LayoutDirection;

use crate::error::PlatformError;

/// Application-wide environment a field is created in
///
/// Implemented once per backend. Fields read it at construction time only;
/// later changes of the system direction are not observed.
pub trait Platform {
    /// Create a new platform instance
    fn new() -> Result<Self, PlatformError>
    where
        Self: Sized;

    /// Get the platform name
    fn name(&self) -> &'static str;

    /// The application's user interface layout direction
    fn layout_direction(&self) -> LayoutDirection;

    /// Default display scale factor (physical pixels per logical pixel)
    fn scale_factor(&self) -> f64;
}
