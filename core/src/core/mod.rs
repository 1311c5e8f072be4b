pub mod clock;
pub mod stage;
pub mod status;
pub mod timestamp;

// Re-export key types for easier access from other modules (and lib.rs)
pub use clock::{Clock, FixedClock, SystemClock};
pub use stage::{Stage, StageDescriptor, DELIVERY_OFFSET_DAYS};
pub use status::OrderStatus;
pub use timestamp::{parse_order_timestamp, OrderDate};
