//! Integration tests for the API client over a scripted transport.

use datatrans::adapters::MockTransport;
use datatrans::client::{DatatransClient, DatatransError};
use datatrans::config::Environment;
use datatrans::models::{
    AliasPatchRequest, AuthorizeRequest, Card, CreditRequest, DccCardType, DccRequest,
    IncreaseRequest, InitRequest, Redirect, ScreenRequest, SecureFieldsInitRequest, SettleRequest,
    ValidateRequest,
};
use http::Method;

fn client(transport: MockTransport) -> DatatransClient<MockTransport> {
    DatatransClient::with_transport(transport, Environment::Sandbox)
}

// ══════════════════════════════════════════════════════════════
// Payment Flow
// ══════════════════════════════════════════════════════════════

#[tokio::test]
async fn init_authorize_settle_flow() {
    let transport = MockTransport::new();
    transport.enqueue_json(
        200,
        serde_json::json!({"transactionId": "240101123456789012"}),
    );
    transport.enqueue_json(
        200,
        serde_json::json!({
            "transactionId": "240101123456789012",
            "acquirerAuthorizationCode": "123456",
        }),
    );
    transport.enqueue_empty(200);

    let client = client(transport);

    let mut init = InitRequest::new("CHF", "order-77");
    init.amount = Some(1000);
    init.redirect = Some(Redirect {
        success_url: Some("https://shop.test/ok".to_string()),
        cancel_url: Some("https://shop.test/cancel".to_string()),
        error_url: Some("https://shop.test/error".to_string()),
    });
    let initialized = client.init_transaction(&init, None).await.unwrap();
    assert_eq!(initialized.transaction_id, "240101123456789012");

    let authorize = AuthorizeRequest::new(1000, "CHF", "order-77");
    let authorized = client.authorize(&authorize, None).await.unwrap();
    assert_eq!(
        authorized.acquirer_authorization_code.as_deref(),
        Some("123456")
    );

    let settle = SettleRequest::new(1000, "CHF", "order-77");
    client
        .settle(&initialized.transaction_id, &settle)
        .await
        .unwrap();

    let requests = client_requests(&client);
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].path, "/v1/transactions");
    assert_eq!(requests[1].path, "/v1/transactions/authorize");
    assert_eq!(
        requests[2].path,
        "/v1/transactions/240101123456789012/settle"
    );
    assert!(requests.iter().all(|r| r.method == Method::POST));
}

#[tokio::test]
async fn authorize_with_alias_card() {
    let transport = MockTransport::new();
    transport.enqueue_json(200, serde_json::json!({"transactionId": "tx1"}));

    let client = client(transport);
    let mut request = AuthorizeRequest::new(1000, "CHF", "order-1");
    request.card = Some(Card::Alias {
        alias: "70119122433810042".to_string(),
        expiry_month: Some("06".to_string()),
        expiry_year: Some("26".to_string()),
        cardholder: None,
        card_on_file: None,
    });
    client.authorize(&request, None).await.unwrap();

    let recorded = client_requests(&client).remove(0);
    let body = recorded.body.unwrap();
    assert_eq!(body["card"]["type"], "ALIAS");
    assert_eq!(body["card"]["alias"], "70119122433810042");
}

#[tokio::test]
async fn secure_fields_init_returns_resources() {
    let transport = MockTransport::new();
    transport.enqueue_json(
        200,
        serde_json::json!({
            "transactionId": "tx1",
            "resources": [{"integrity": "sha384-abc"}],
        }),
    );

    let client = client(transport);
    let request = SecureFieldsInitRequest::new("CHF", "https://shop.test/back", 1000);
    let response = client.secure_fields_init(&request, None).await.unwrap();

    assert_eq!(response.resources[0].integrity, "sha384-abc");
    assert_eq!(
        client_requests(&client)[0].path,
        "/v1/transactions/secureFields"
    );
}

#[tokio::test]
async fn refund_and_increase_round_trip() {
    let transport = MockTransport::new();
    transport.enqueue_json(200, serde_json::json!({"transactionId": "refund-tx"}));
    transport.enqueue_json(200, serde_json::json!({"increasedAmount": 500}));

    let client = client(transport);

    let mut credit = CreditRequest::new("CHF", "order-1");
    credit.amount = Some(300);
    let refund = client.refund("tx1", &credit).await.unwrap();
    assert_eq!(refund.transaction_id, "refund-tx");

    let increase = IncreaseRequest {
        amount: 500,
        currency: "CHF".to_string(),
        refno: "order-1".to_string(),
        metadata: None,
    };
    let increased = client.increase_amount("tx1", &increase).await.unwrap();
    assert_eq!(increased.increased_amount, 500);

    let requests = client_requests(&client);
    assert_eq!(requests[0].path, "/v1/transactions/tx1/credit");
    assert_eq!(requests[1].path, "/v1/transactions/tx1/increase");
}

#[tokio::test]
async fn validate_alias_posts_to_validate() {
    let transport = MockTransport::new();
    transport.enqueue_json(200, serde_json::json!({"transactionId": "tx1"}));

    let client = client(transport);
    let request = ValidateRequest {
        refno: "order-1".to_string(),
        currency: "CHF".to_string(),
        card: Some(Card::Alias {
            alias: "70119122433810042".to_string(),
            expiry_month: None,
            expiry_year: None,
            cardholder: None,
            card_on_file: None,
        }),
        ..Default::default()
    };
    client.validate_alias(&request).await.unwrap();

    assert_eq!(client_requests(&client)[0].path, "/v1/transactions/validate");
}

#[tokio::test]
async fn screen_customer_parses_int_block() {
    let transport = MockTransport::new();
    transport.enqueue_json(
        200,
        serde_json::json!({
            "transactionId": "tx1",
            "INT": {"eligible": true},
        }),
    );

    let client = client(transport);
    let request = ScreenRequest {
        amount: 1000,
        currency: "CHF".to_string(),
        refno: "order-1".to_string(),
        ..Default::default()
    };
    let response = client.screen_customer(&request).await.unwrap();
    assert!(response.int.is_some());
}

#[tokio::test]
async fn dcc_quote_round_trip() {
    let transport = MockTransport::new();
    transport.enqueue_json(
        200,
        serde_json::json!({
            "dccAvailable": true,
            "originalOption": {"amount": 1000, "currency": "CHF", "exponent": 2},
            "dccOption": {"amount": 1080, "currency": "EUR", "exponent": 2},
        }),
    );

    let client = client(transport);
    let request = DccRequest {
        card_type: DccCardType::Plain,
        currency: "CHF".to_string(),
        amount: 1000,
        card_number: Some("4242424242424242".to_string()),
        alias: None,
    };
    let response = client.get_dcc_options(&request).await.unwrap();

    assert!(response.dcc_available);
    assert_eq!(client_requests(&client)[0].path, "/v1/transactions/dcc");
}

// ══════════════════════════════════════════════════════════════
// Alias Lifecycle
// ══════════════════════════════════════════════════════════════

#[tokio::test]
async fn alias_get_patch_delete() {
    let transport = MockTransport::new();
    transport.enqueue_json(
        200,
        serde_json::json!({
            "alias": "70119122433810042",
            "dateCreated": "2024-01-01T12:00:00Z",
            "type": "CARD",
            "masked": "424242xxxxxx4242",
        }),
    );
    transport.enqueue_json(
        200,
        serde_json::json!({
            "alias": "70119122433810042",
            "dateCreated": "2024-01-01T12:00:00Z",
            "type": "CARD",
        }),
    );
    transport.enqueue_empty(200);

    let client = client(transport);

    let info = client.get_alias_info("70119122433810042").await.unwrap();
    assert_eq!(info.masked.as_deref(), Some("424242xxxxxx4242"));

    let patch = AliasPatchRequest {
        expiry_month: Some("07".to_string()),
        expiry_year: Some("27".to_string()),
        ..Default::default()
    };
    client.update_alias("70119122433810042", &patch).await.unwrap();

    client.delete_alias("70119122433810042").await.unwrap();

    let requests = client_requests(&client);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[1].method, Method::PATCH);
    assert_eq!(requests[2].method, Method::DELETE);
    assert!(requests.iter().all(|r| r.path == "/v1/aliases/70119122433810042"));
}

// ══════════════════════════════════════════════════════════════
// Failure Handling
// ══════════════════════════════════════════════════════════════

#[tokio::test]
async fn transport_error_is_propagated() {
    let transport = MockTransport::new();
    transport.enqueue_error(datatrans::ports::TransportError::Timeout);

    let client = client(transport);
    let error = client
        .get_status("tx1")
        .await
        .unwrap_err();

    assert!(matches!(error, DatatransError::Transport(_)));
    assert!(error.is_retryable());
}

#[tokio::test]
async fn malformed_response_body_is_a_decode_error() {
    let transport = MockTransport::new();
    transport.enqueue(datatrans::ports::TransportResponse {
        status: 200,
        body: b"<html>gateway maintenance</html>".to_vec(),
    });

    let client = client(transport);
    let error = client.get_status("tx1").await.unwrap_err();

    assert!(matches!(error, DatatransError::Decode(_)));
}

#[tokio::test]
async fn unstructured_gateway_error_still_maps() {
    let transport = MockTransport::new();
    transport.enqueue(datatrans::ports::TransportResponse {
        status: 503,
        body: Vec::new(),
    });

    let client = client(transport);
    let error = client.get_status("tx1").await.unwrap_err();

    match error {
        DatatransError::Api {
            status,
            message,
            detail,
        } => {
            assert_eq!(status, 503);
            assert_eq!(message, "API error 503");
            assert!(detail.is_none());
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

fn client_requests(
    client: &DatatransClient<MockTransport>,
) -> Vec<datatrans::adapters::RecordedRequest> {
    client.transport().requests()
}
