// Domain layer: submission model and ports. No transport code in here.

pub mod model;
pub mod ports;
