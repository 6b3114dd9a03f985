pub mod booking;
pub mod duration;
pub mod pricing;
pub mod time_slot;
pub mod venue;
