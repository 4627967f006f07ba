mod check;
mod form_model;
