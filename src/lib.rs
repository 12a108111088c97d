pub mod api;
pub mod config;
pub mod disc;
pub mod error;
pub mod scorer;
pub mod selector;
pub mod shot;
pub mod trajectory;
// cmd and reports belong to the binary (main.rs).
