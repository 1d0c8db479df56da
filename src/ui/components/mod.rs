pub mod chat_area;
pub mod confirm_clear;
pub mod header;
pub mod input_bar;
pub mod launcher;
