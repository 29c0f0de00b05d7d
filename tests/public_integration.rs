use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gemini_api_client::GeminiError;
use gemini_api_client::rest::RestClient;
use gemini_api_client::rest::public::{OrderBookRequest, TradeType, TradesRequest};
use gemini_api_client::types::Symbol;
use rust_decimal::Decimal;

fn build_client(server: &MockServer) -> RestClient {
    RestClient::builder().base_url(server.uri()).build()
}

#[tokio::test]
async fn test_get_symbols() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/symbols"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!(["btcusd", "ethusd", "ethbtc"])),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let symbols = client.get_symbols().await.unwrap();

    assert_eq!(symbols, vec!["btcusd", "ethusd", "ethbtc"]);
}

#[tokio::test]
async fn test_get_ticker() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "bid": "977.59",
        "ask": "977.35",
        "last": "977.65",
        "volume": {"BTC": "2210.505328803", "USD": "2135477.463379586263", "timestamp": 1483018200000u64}
    });

    Mock::given(method("GET"))
        .and(path("/v1/pubticker/btcusd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let ticker = client.get_ticker(Symbol::BtcUsd).await.unwrap();

    assert_eq!(ticker.last, "977.65".parse::<Decimal>().unwrap());
    let volume = ticker.volume.unwrap();
    assert_eq!(volume.timestamp_ms, Some(1_483_018_200_000));
    assert!(volume.get("USD").is_some());
}

#[tokio::test]
async fn test_get_trades_default_query() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "timestamp": 1547146811,
        "timestampms": 1547146811357u64,
        "tid": 5335307668u64,
        "price": "3610.85",
        "amount": "0.27413495",
        "exchange": "gemini",
        "type": "buy"
    }]);

    Mock::given(method("GET"))
        .and(path("/v1/trades/ethusd"))
        .and(query_param("limit_trades", "50"))
        .and(query_param("include_breaks", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let trades = client
        .get_trades(Symbol::EthUsd, &TradesRequest::default())
        .await
        .unwrap();

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].tid, 5_335_307_668);
    assert_eq!(trades[0].trade_type, TradeType::Buy);
    assert!(trades[0].broken.is_none());
}

#[tokio::test]
async fn test_get_trades_with_breaks_and_since() {
    let server = MockServer::start().await;
    let response = serde_json::json!([{
        "timestamp": 1547146811,
        "timestampms": 1547146811357u64,
        "tid": 7,
        "price": "3610.85",
        "amount": "0.1",
        "exchange": "gemini",
        "type": "sell",
        "broken": true
    }]);

    Mock::given(method("GET"))
        .and(path("/v1/trades/btcusd"))
        .and(query_param("limit_trades", "10"))
        .and(query_param("include_breaks", "1"))
        .and(query_param("timestamp", "1547146000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let request = TradesRequest::default()
        .limit(10)
        .include_breaks(true)
        .since(1_547_146_000);
    let trades = client.get_trades(Symbol::BtcUsd, &request).await.unwrap();

    assert_eq!(trades[0].broken, Some(true));
}

#[tokio::test]
async fn test_get_order_book() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "bids": [{"price": "3607.85", "amount": "6.643373", "timestamp": "1547147541"}],
        "asks": [{"price": "3607.86", "amount": "14.68205084", "timestamp": "1547147541"}]
    });

    Mock::given(method("GET"))
        .and(path("/v1/book/btcusd"))
        .and(query_param("limit_bids", "50"))
        .and(query_param("limit_asks", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let book = client
        .get_order_book(Symbol::BtcUsd, &OrderBookRequest::default())
        .await
        .unwrap();

    assert_eq!(book.best_bid().unwrap().price, "3607.85".parse::<Decimal>().unwrap());
    assert_eq!(book.best_ask().unwrap().timestamp, Some(1_547_147_541));
}

#[tokio::test]
async fn test_public_error_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/pubticker/zecusd"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "result": "error",
            "reason": "InvalidSymbol",
            "message": "Supplied value 'zecusd' is not a valid symbol"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_ticker(Symbol::ZecUsd).await.unwrap_err();

    let exchange = err.exchange_error().unwrap();
    assert_eq!(exchange.reason, "InvalidSymbol");
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/symbols"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get_symbols().await.unwrap_err();

    match err {
        GeminiError::MalformedResponse(message) => {
            assert!(message.contains("502"));
            assert!(message.contains("Bad Gateway"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_unexpected_shape_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/book/btcusd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"bids": "none"})))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client
        .get_order_book(Symbol::BtcUsd, &OrderBookRequest::depth(5))
        .await
        .unwrap_err();

    assert!(matches!(err, GeminiError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_request_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/symbols"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([]))
                .set_delay(std::time::Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = RestClient::builder()
        .base_url(server.uri())
        .timeout(std::time::Duration::from_millis(100))
        .build();
    let err = client.get_symbols().await.unwrap_err();

    assert!(err.is_timeout());
    assert!(err.is_retryable());
}
