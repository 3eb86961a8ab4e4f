pub mod config;
pub mod form;
pub mod frame;
pub mod geometry;
pub mod ray;
pub mod scene;
pub mod snapshot;

pub use config::{Config, SimulationConfig};
pub use frame::{build_frame, FramePlan};
pub use geometry::{Vec2, Viewport};
pub use ray::{cast_rays, resolve_ray_endpoint, RaySegment};
pub use scene::{InputSnapshot, LightSource, Occluder, SimulationState};
