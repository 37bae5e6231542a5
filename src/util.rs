pub mod bit_util;
pub mod logger;
pub mod unit;
