//! Position value types in decimal degrees, degrees/minutes/seconds and
//! degrees/decimal minutes
//!
//! The types hold no logic of their own: every `to_*`/`from_*` method
//! delegates to [`crate::conversion`]. There are no implicit conversions;
//! wrapping a value into [`Position`] keeps its notation.

pub mod dd;
pub mod ddm;
pub mod direction;
pub mod dms;
pub mod position;

pub use dd::PositionDd;
pub use ddm::PositionDdm;
pub use direction::Direction;
pub use dms::PositionDms;
pub use position::{Notation, Position};
