//! Shareholders module - investors who co-fund cars and share in their profit.

mod shareholders_model;
mod shareholders_service;
mod shareholders_traits;

pub use shareholders_model::{
    NewShareholder, Shareholder, ShareholderCarLine, ShareholderStatement, ShareholderUpdate,
};
pub use shareholders_service::ShareholderService;
pub use shareholders_traits::{ShareholderRepositoryTrait, ShareholderServiceTrait};
