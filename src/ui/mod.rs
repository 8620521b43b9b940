pub mod ci;
pub mod context;
pub mod error;
pub mod icon;
pub mod json;
pub mod terminal;
pub mod views;
