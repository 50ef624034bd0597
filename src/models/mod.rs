pub mod common;
pub mod order;
pub mod shipment;

pub use common::*;
pub use order::*;
pub use shipment::*;
