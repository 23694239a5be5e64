pub mod browser;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod toast;
