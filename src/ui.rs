//! Kiosk presentation layer
//!
//! Decision code (adaptation) is kept apart from the surface it is applied
//! to, so everything here runs against the in-memory [`ViewTree`] in tests
//! and in the running kiosk alike.

pub mod adaptation;
pub mod format;
pub mod region;
pub mod render;
pub mod surface;
pub mod wind;

pub use adaptation::{
    Adaptation, Labels, apply_adaptations, attach_wind_annotation, decide_adaptations,
};
pub use region::Region;
pub use surface::{RegionView, UiSurface, ViewTree};
pub use wind::WindUnit;
