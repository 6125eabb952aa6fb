mod fake;

mod checked;
mod profile;
