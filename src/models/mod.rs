//! Wire models for the transaction API.

pub mod card;
pub mod common;
pub mod extension;
pub mod requests;
pub mod responses;

pub use card::{Card, CardOnFile, CardholderData};
pub use common::{
    Address, Article, CardInfo, Customer, DccOption, Language, Metadata, Order, PaymentMethod,
    Redirect, ThreeDSecure, TransactionOptions, TransactionType, WebhookOptions,
};
pub use extension::{ExtensionBag, ExtensionValue};
pub use requests::{
    AliasPatchRequest, AuthorizeRequest, AuthorizeSplitRequest, CreditRequest, DccCardType,
    DccRequest, IncreaseRequest, InitRequest, ScreenRequest, SecureFieldsInitRequest,
    SettleRequest, ValidateRequest,
};
pub use responses::{
    AliasInfoResponse, AuthorizeResponse, AuthorizeSplitResponse, CardInfoResponse, CreditResponse,
    DccResponse,
    GatewayErrorBody, GatewayErrorDetail, HistoryEntry, IncreaseResponse, InitResponse,
    NetworkTokenInfo, ResourceInfo, ScreenResponse, SecureFieldsInitResponse, StatusDetail,
    StatusResponse, ValidateResponse,
};
