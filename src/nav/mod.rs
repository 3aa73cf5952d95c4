//! Camera navigation: room bounds, obstacle collision, orbit controls and
//! keyboard movement.

mod bounds;
mod collision;
mod controller;
mod obstacles;
mod orbit;

pub use bounds::RoomBounds;
pub use collision::{is_colliding_with_any, is_point_colliding, Obstacle};
pub use controller::{FrameReport, NavigationController, StepOutcome};
pub use obstacles::ObstacleRegistry;
pub use orbit::{OrbitDelta, OrbitRig};
