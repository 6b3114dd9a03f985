pub mod durations;
pub mod health;
pub mod pricing;
pub mod slots;
