// Library exports for testing
// The binary (main.rs) imports these as well

pub mod args;
pub mod check;
pub mod definition;
pub mod error;
pub mod logger;
pub mod report;

#[cfg(test)]
mod tests;
