pub mod assessment;
pub mod instrument;
pub mod severity;
