// HTTP middleware implementations

pub mod timing;

pub use timing::RequestTiming;
