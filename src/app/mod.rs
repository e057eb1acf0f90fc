pub mod controller;

pub use controller::PrefsController;
