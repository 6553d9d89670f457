//! Application service layer: the spa-booking facade.

mod bookings;
mod facade;
mod services;
mod spas;
mod users;

pub use facade::Facade;
