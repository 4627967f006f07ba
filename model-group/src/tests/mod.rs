mod config;
mod path;
