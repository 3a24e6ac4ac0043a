#![no_std]

pub mod ttl;
pub mod utils;
