mod error;
mod report;
