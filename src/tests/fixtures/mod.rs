pub mod state;
pub mod training;
