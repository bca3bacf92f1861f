mod autocomplete;
mod clear_reveal;
mod commands;
mod history;
mod matrix;
mod navigation;
mod page;
