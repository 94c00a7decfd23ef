pub mod checks;
pub mod dashboard;
pub mod health;
pub mod helpers;
pub mod layout;
pub mod settings;
