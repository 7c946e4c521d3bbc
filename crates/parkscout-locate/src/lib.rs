mod error;
mod provider;
mod source;

pub use error::LocationError;
pub use provider::LocationProvider;
pub use source::{
    DeviceFix, PermissionState, PositionFault, PositionRequest, PositionSource,
    StaticPositionSource,
};
