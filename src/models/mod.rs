pub mod alert;

pub use alert::{AlertRule, Direction};
