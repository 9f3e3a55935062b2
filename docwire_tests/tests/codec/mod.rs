pub mod boundary;
pub mod scenario;
