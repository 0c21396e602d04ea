//! Food item service.

pub mod service;

pub use service::FoodItemService;
