pub mod attendance;
pub mod log;
pub mod push;
pub mod timer;
