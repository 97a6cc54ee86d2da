pub mod charts;
pub mod temperature;
