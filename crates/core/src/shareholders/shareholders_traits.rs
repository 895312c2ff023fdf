use async_trait::async_trait;

use super::shareholders_model::{
    NewShareholder, Shareholder, ShareholderStatement, ShareholderUpdate,
};
use crate::errors::Result;

/// Persistence contract for shareholders. Soft-deleted rows are not returned.
#[async_trait]
pub trait ShareholderRepositoryTrait: Send + Sync {
    fn get_by_id(&self, shareholder_id: &str) -> Result<Shareholder>;
    fn list(&self) -> Result<Vec<Shareholder>>;
    /// Includes soft-deleted shareholders, for reports on past sales.
    fn list_all(&self) -> Result<Vec<Shareholder>>;
    async fn create(&self, new_shareholder: NewShareholder) -> Result<Shareholder>;
    async fn update(&self, shareholder_update: ShareholderUpdate) -> Result<Shareholder>;
    async fn soft_delete(&self, shareholder_id: &str) -> Result<usize>;
}

#[async_trait]
pub trait ShareholderServiceTrait: Send + Sync {
    fn get_shareholders(&self) -> Result<Vec<Shareholder>>;
    fn get_shareholder(&self, shareholder_id: &str) -> Result<Shareholder>;
    async fn create_shareholder(&self, new_shareholder: NewShareholder) -> Result<Shareholder>;
    async fn update_shareholder(&self, shareholder_update: ShareholderUpdate)
        -> Result<Shareholder>;
    async fn delete_shareholder(&self, shareholder_id: &str) -> Result<()>;
    fn get_shareholder_statement(&self, shareholder_id: &str) -> Result<ShareholderStatement>;
}
