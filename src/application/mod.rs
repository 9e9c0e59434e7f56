pub mod ports;
pub mod processors;
pub mod services;
