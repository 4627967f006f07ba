mod assignment;
mod builder;
mod validation;
