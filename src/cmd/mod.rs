pub mod audit;
pub mod devices;
pub mod generate;
pub mod reset;
