pub mod state;
pub mod synchronizer;
