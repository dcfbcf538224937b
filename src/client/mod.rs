//! API client for the transaction and alias endpoints.
//!
//! The client validates requests locally, sends them through an
//! [`HttpTransport`] and decodes typed responses. Error responses from the
//! gateway are mapped to [`DatatransError::Api`] with the structured error
//! block preserved when one is present.
//!
//! # Example
//!
//! ```no_run
//! use datatrans::client::DatatransClient;
//! use datatrans::config::DatatransConfig;
//! use datatrans::models::InitRequest;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DatatransConfig::load()?;
//! let client = DatatransClient::from_config(&config)?;
//!
//! let mut request = InitRequest::new("CHF", "order-1");
//! request.amount = Some(1000);
//!
//! let response = client.init_transaction(&request, None).await?;
//! let redirect = client.redirect_url(&response.transaction_id);
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::DatatransError;

use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::adapters::ReqwestTransport;
use crate::config::{DatatransConfig, Environment};
use crate::models::{
    AliasInfoResponse, AliasPatchRequest, AuthorizeRequest, AuthorizeResponse,
    AuthorizeSplitRequest, AuthorizeSplitResponse, CreditRequest, CreditResponse, DccRequest,
    DccResponse, GatewayErrorBody, IncreaseRequest, IncreaseResponse, InitRequest, InitResponse,
    ScreenRequest, ScreenResponse, SecureFieldsInitRequest, SecureFieldsInitResponse,
    SettleRequest, StatusResponse, ValidateRequest, ValidateResponse,
};
use crate::ports::{HttpTransport, TransportResponse};

/// Client for the Datatrans API, generic over its HTTP transport.
pub struct DatatransClient<T: HttpTransport> {
    transport: T,
    environment: Environment,
}

impl DatatransClient<ReqwestTransport> {
    /// Builds a client backed by the default HTTPS transport.
    pub fn from_config(config: &DatatransConfig) -> Result<Self, DatatransError> {
        let transport = ReqwestTransport::new(
            config.environment,
            config.merchant_id.clone(),
            config.password.clone(),
        )?;
        Ok(Self {
            transport,
            environment: config.environment,
        })
    }
}

impl<T: HttpTransport> DatatransClient<T> {
    /// Builds a client over a custom transport.
    pub fn with_transport(transport: T, environment: Environment) -> Self {
        Self {
            transport,
            environment,
        }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Generates a fresh idempotency key for safely retried POSTs.
    pub fn idempotency_key() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Redirect URL for a transaction initialized for the payment page.
    pub fn redirect_url(&self, transaction_id: &str) -> String {
        self.environment.redirect_url(transaction_id)
    }

    // ── Transaction operations ──────────────────────────────────────

    /// Initializes a transaction for Redirect or Lightbox integration.
    pub async fn init_transaction(
        &self,
        request: &InitRequest,
        idempotency_key: Option<&str>,
    ) -> Result<InitResponse, DatatransError> {
        request.validate()?;
        self.post("/v1/transactions", request, idempotency_key).await
    }

    /// Initializes a Secure Fields transaction.
    pub async fn secure_fields_init(
        &self,
        request: &SecureFieldsInitRequest,
        idempotency_key: Option<&str>,
    ) -> Result<SecureFieldsInitResponse, DatatransError> {
        request.validate()?;
        self.post("/v1/transactions/secureFields", request, idempotency_key)
            .await
    }

    /// Authorizes a merchant-initiated transaction.
    pub async fn authorize(
        &self,
        request: &AuthorizeRequest,
        idempotency_key: Option<&str>,
    ) -> Result<AuthorizeResponse, DatatransError> {
        request.validate()?;
        self.post("/v1/transactions/authorize", request, idempotency_key)
            .await
    }

    /// Authorizes a previously authenticated transaction.
    pub async fn authorize_split(
        &self,
        transaction_id: &str,
        request: &AuthorizeSplitRequest,
    ) -> Result<AuthorizeSplitResponse, DatatransError> {
        request.validate()?;
        let path = format!("/v1/transactions/{transaction_id}/authorize-split");
        self.post(&path, request, None).await
    }

    /// Validates an existing alias without moving money.
    pub async fn validate_alias(
        &self,
        request: &ValidateRequest,
    ) -> Result<ValidateResponse, DatatransError> {
        request.validate()?;
        self.post("/v1/transactions/validate", request, None).await
    }

    /// Fetches the current status of a transaction.
    pub async fn get_status(&self, transaction_id: &str) -> Result<StatusResponse, DatatransError> {
        let path = format!("/v1/transactions/{transaction_id}/status");
        let response = self.transport.send(Method::GET, &path, None, None).await?;
        Self::decode(Self::check(response)?)
    }

    /// Settles (captures) an authorized transaction.
    pub async fn settle(
        &self,
        transaction_id: &str,
        request: &SettleRequest,
    ) -> Result<(), DatatransError> {
        request.validate()?;
        let path = format!("/v1/transactions/{transaction_id}/settle");
        let body = serde_json::to_value(request)?;
        let response = self
            .transport
            .send(Method::POST, &path, Some(body), None)
            .await?;
        Self::check(response).map(|_| ())
    }

    /// Cancels an open transaction, releasing any authorization.
    pub async fn cancel(&self, transaction_id: &str) -> Result<(), DatatransError> {
        let path = format!("/v1/transactions/{transaction_id}/cancel");
        let response = self
            .transport
            .send(Method::POST, &path, Some(serde_json::json!({})), None)
            .await?;
        Self::check(response).map(|_| ())
    }

    /// Refunds a settled transaction.
    pub async fn refund(
        &self,
        transaction_id: &str,
        request: &CreditRequest,
    ) -> Result<CreditResponse, DatatransError> {
        request.validate()?;
        let path = format!("/v1/transactions/{transaction_id}/credit");
        self.post(&path, request, None).await
    }

    /// Raises the authorized amount of an open transaction.
    pub async fn increase_amount(
        &self,
        transaction_id: &str,
        request: &IncreaseRequest,
    ) -> Result<IncreaseResponse, DatatransError> {
        request.validate()?;
        let path = format!("/v1/transactions/{transaction_id}/increase");
        self.post(&path, request, None).await
    }

    /// Requests a Dynamic Currency Conversion quote.
    pub async fn get_dcc_options(
        &self,
        request: &DccRequest,
    ) -> Result<DccResponse, DatatransError> {
        request.validate()?;
        self.post("/v1/transactions/dcc", request, None).await
    }

    /// Screens a customer for pay-by-invoice eligibility.
    pub async fn screen_customer(
        &self,
        request: &ScreenRequest,
    ) -> Result<ScreenResponse, DatatransError> {
        request.validate()?;
        self.post("/v1/transactions/screen", request, None).await
    }

    // ── Alias operations ────────────────────────────────────────────

    /// Fetches details of a stored alias.
    pub async fn get_alias_info(&self, alias: &str) -> Result<AliasInfoResponse, DatatransError> {
        let path = format!("/v1/aliases/{alias}");
        let response = self.transport.send(Method::GET, &path, None, None).await?;
        Self::decode(Self::check(response)?)
    }

    /// Deletes a stored alias.
    pub async fn delete_alias(&self, alias: &str) -> Result<(), DatatransError> {
        let path = format!("/v1/aliases/{alias}");
        let response = self.transport.send(Method::DELETE, &path, None, None).await?;
        Self::check(response).map(|_| ())
    }

    /// Updates a stored alias.
    pub async fn update_alias(
        &self,
        alias: &str,
        request: &AliasPatchRequest,
    ) -> Result<AliasInfoResponse, DatatransError> {
        request.validate()?;
        let path = format!("/v1/aliases/{alias}");
        let body = serde_json::to_value(request)?;
        let response = self
            .transport
            .send(Method::PATCH, &path, Some(body), None)
            .await?;
        Self::decode(Self::check(response)?)
    }

    // ── Plumbing ────────────────────────────────────────────────────

    async fn post<Req, Resp>(
        &self,
        path: &str,
        request: &Req,
        idempotency_key: Option<&str>,
    ) -> Result<Resp, DatatransError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let body = serde_json::to_value(request)?;
        let response = self
            .transport
            .send(Method::POST, path, Some(body), idempotency_key)
            .await?;
        Self::decode(Self::check(response)?)
    }

    fn check(response: TransportResponse) -> Result<TransportResponse, DatatransError> {
        if response.is_success() {
            return Ok(response);
        }

        let detail = serde_json::from_slice::<GatewayErrorBody>(&response.body)
            .ok()
            .map(|body| body.error);
        let message = detail
            .as_ref()
            .map(|d| d.message.clone())
            .unwrap_or_else(|| format!("API error {}", response.status));

        tracing::warn!(status = response.status, "gateway returned an error");
        Err(DatatransError::Api {
            status: response.status,
            message,
            detail,
        })
    }

    fn decode<Resp: DeserializeOwned>(response: TransportResponse) -> Result<Resp, DatatransError> {
        Ok(serde_json::from_slice(&response.body)?)
    }
}
