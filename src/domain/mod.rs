pub mod duty_logic;
pub mod models;
pub mod settings_model;
