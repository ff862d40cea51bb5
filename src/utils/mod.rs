pub mod logging;
pub mod shared;
