//! Vehicle module containing kinematics, collision detection, and radar
//! sensing.

mod radar;
mod vehicle;

pub use radar::RadarReading;
pub use vehicle::*;
