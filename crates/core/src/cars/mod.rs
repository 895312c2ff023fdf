//! Cars module - inventory domain models, services, and traits.

mod cars_model;
mod cars_service;
mod cars_traits;


pub use cars_model::{Car, CarSale, CarStatus, CarUpdate, NewCar};
pub use cars_service::CarService;
pub use cars_traits::{CarRepositoryTrait, CarServiceTrait};
