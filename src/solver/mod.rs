pub mod domain;
pub mod engine;
pub mod grid;
pub mod inequality;
pub mod mutation;
pub mod rules;
pub mod state;
pub mod stats;
pub mod validity;
