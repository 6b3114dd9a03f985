pub mod durations;
pub mod pricing;
pub mod slots;
