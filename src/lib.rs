pub mod backend;
pub mod brancher;
pub mod config;
pub mod constraint;
pub mod events;
pub mod instance;
pub mod linear;
pub mod model;
pub mod objective_function;
pub mod propagator;
pub mod report;
pub mod runner;
pub mod search;
pub mod solver;
pub mod store;
pub mod variable_selector;
