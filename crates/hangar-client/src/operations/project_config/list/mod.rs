mod runner;

pub use runner::run;
