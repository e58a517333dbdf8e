mod check_active;
mod mutators;
