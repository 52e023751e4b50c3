pub mod results;
pub mod status;
