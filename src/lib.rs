#![allow(non_snake_case)]

pub mod client;
pub mod filter;
pub mod model;
