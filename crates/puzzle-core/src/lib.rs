pub mod camera;
pub mod constants;
pub mod drag;
pub mod input;
pub mod piece;
pub mod round;
pub mod scatter;
pub mod scene;
pub mod snap;

pub use camera::*;
pub use constants::*;
pub use drag::*;
pub use input::*;
pub use piece::*;
pub use round::*;
pub use scatter::*;
pub use scene::*;
pub use snap::*;
