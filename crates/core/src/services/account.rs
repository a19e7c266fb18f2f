//! Account operations

use ctct_domain::constants::endpoints;
use ctct_domain::resources::VERIFIED_EMAIL_ADDRESS;
use ctct_domain::{QueryParams, Record, Result};
use tracing::instrument;

use super::BaseService;
use crate::response;

/// Account service
#[derive(Clone)]
pub struct AccountService {
    base: BaseService,
}

impl AccountService {
    pub fn new(base: BaseService) -> Self {
        Self { base }
    }

    /// Sender addresses verified for the account; filter with `status`
    /// (`CONFIRMED` or `UNCONFIRMED`).
    #[instrument(skip(self, access_token))]
    pub async fn get_verified_email_addresses(&self, access_token: &str, params: &QueryParams) -> Result<Vec<Record>> {
        let raw = self.base.get(access_token, endpoints::ACCOUNT_VERIFIED_ADDRESSES, &[], params).await?;
        response::records(&raw, &VERIFIED_EMAIL_ADDRESS)
    }
}
