pub mod app;
pub mod components;
pub mod controller;
pub mod history;
pub mod input;
pub mod layout;
pub mod router;
pub mod state;
pub mod tui;
pub mod update;
pub mod util;
pub mod views;
