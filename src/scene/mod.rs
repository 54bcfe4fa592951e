mod camera;
mod helpers;
mod setup;

pub use camera::{OrbitCamera, orbit_camera_system};
pub use setup::setup_scene;
