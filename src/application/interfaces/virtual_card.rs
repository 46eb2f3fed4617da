use crate::error::AppError;
use crate::model::query::TransactionQuery;
use crate::model::requests::{
    CreateVirtualCardRequest, UpdateVirtualCardRequest, VirtualCardPageableRequest,
};
use crate::model::responses::{TransactionsResponse, VirtualCardResponse, VirtualCardsResponse};
use async_trait::async_trait;

/// Interface for the virtual card operations
#[async_trait]
pub trait VirtualCardService: Send + Sync {
    /// Gets the virtual cards visible to the signed-in user
    ///
    /// The pageable request is sent as the JSON body of a `GET /virtualcards`.
    async fn get_user_virtual_cards(
        &self,
        request: &VirtualCardPageableRequest,
    ) -> Result<VirtualCardsResponse, AppError>;

    /// Gets a single virtual card
    async fn get_virtual_card(&self, id: &str) -> Result<VirtualCardResponse, AppError>;

    /// Gets the transactions of a virtual card
    ///
    /// # Arguments
    /// * `id` - Virtual card identifier
    /// * `query` - Optional filters; unset filters are not sent
    async fn get_virtual_card_transactions(
        &self,
        id: &str,
        query: &TransactionQuery,
    ) -> Result<TransactionsResponse, AppError>;

    /// Creates a virtual card
    async fn create_virtual_card(
        &self,
        request: &CreateVirtualCardRequest,
    ) -> Result<VirtualCardResponse, AppError>;

    /// Updates a virtual card
    async fn update_virtual_card(
        &self,
        id: &str,
        request: &UpdateVirtualCardRequest,
    ) -> Result<VirtualCardResponse, AppError>;

    /// Cancels a virtual card
    async fn cancel_virtual_card(&self, id: &str) -> Result<VirtualCardResponse, AppError>;

    /// Rejects a requested virtual card
    async fn reject_virtual_card(&self, id: &str) -> Result<VirtualCardResponse, AppError>;
}
