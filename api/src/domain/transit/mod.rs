pub mod fare;
pub mod samples;
