pub mod service;

pub use service::AccessResolver;
