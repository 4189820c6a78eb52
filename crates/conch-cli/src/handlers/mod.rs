pub mod device;
pub mod hardware;
pub mod mbo;
