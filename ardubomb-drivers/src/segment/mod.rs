//! Seven-segment display drivers

pub mod tm1637;

pub use tm1637::{encode_digit, Tm1637, Tm1637Error};
