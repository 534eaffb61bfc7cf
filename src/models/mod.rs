pub mod attendance;
pub mod interval;
pub mod timer_state;
