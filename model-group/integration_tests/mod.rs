mod access;
mod assignment;
mod config;
mod errors;
mod helpers;
mod nesting;
mod validation;
