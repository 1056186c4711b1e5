use marketstack_api::{Client, DividendQuery, EodQuery, Error, IntradayQuery, TickerQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn eod_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("eod.json");

    Mock::given(method("GET"))
        .and(path("/eod"))
        .and(query_param("symbols", "AAPL"))
        .and(query_param("access_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let resp = client
        .eod(&EodQuery::default().with_symbol("AAPL"))
        .await
        .unwrap();

    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.pagination.total, 252);
    assert_eq!(resp.data[0].symbol, "AAPL");
    assert_eq!(resp.data[0].close, 216.3);
}

#[tokio::test]
async fn eod_empty_data_is_ok() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("eod_empty.json");

    Mock::given(method("GET"))
        .and(path("/eod"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let resp = client
        .eod(&EodQuery::default().with_symbol("ZZZZ"))
        .await
        .unwrap();

    assert!(resp.data.is_empty());
    assert_eq!(resp.pagination.total, 0);
}

#[tokio::test]
async fn eod_latest_hits_latest_path() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("eod.json");

    Mock::given(method("GET"))
        .and(path("/eod/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let result = client.eod_latest(&EodQuery::default().with_symbol("AAPL")).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn eod_server_error_maps_to_http_status() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("error_invalid_key.json");

    Mock::given(method("GET"))
        .and(path("/eod"))
        .respond_with(ResponseTemplate::new(401).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "bad-key").unwrap();
    let result = client.eod(&EodQuery::default().with_symbol("AAPL")).await;

    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("invalid_access_key"));
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn eod_multibyte_error_body_becomes_http_status() {
    let mock_server = MockServer::start().await;
    // Error pages are arbitrary provider HTML; this one is multi-byte
    // throughout, so the snippet cut lands mid-character.
    let body = format!("a{}", "é".repeat(1200));

    Mock::given(method("GET"))
        .and(path("/eod"))
        .respond_with(ResponseTemplate::new(500).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let result = client.eod(&EodQuery::default().with_symbol("AAPL")).await;

    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.ends_with("...[truncated]"));
        }
        other => panic!("expected HttpStatus error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn transport_failure_log_never_contains_access_key() {
    use std::sync::{Arc, Mutex};
    use tracing::instrument::WithSubscriber;

    #[derive(Clone)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedBuf {
        type Writer = SharedBuf;
        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    let buf = SharedBuf(Arc::new(Mutex::new(Vec::new())));
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buf.clone())
        .with_ansi(false)
        .finish();

    // Port 1 refuses the connection, producing a transport-level error
    // whose Display would carry the full request URL.
    let client = Client::with_base_url("http://127.0.0.1:1", "super-secret-key").unwrap();
    let result = async { client.eod(&EodQuery::default().with_symbol("AAPL")).await }
        .with_subscriber(subscriber)
        .await;

    assert!(matches!(result, Err(Error::RequestFailed)));
    let log = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(log.contains("Failed to get /eod"));
    assert!(!log.contains("super-secret-key"));
}

#[tokio::test]
async fn eod_malformed_json_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eod"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let result = client.eod(&EodQuery::default().with_symbol("AAPL")).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn intraday_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("intraday.json");

    Mock::given(method("GET"))
        .and(path("/intraday"))
        .and(query_param("interval", "1min"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let query = IntradayQuery::default()
        .with_symbol("AAPL")
        .with_interval("1min".parse().unwrap());
    let resp = client.intraday(&query).await.unwrap();

    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].last, Some(215.97));
    assert_eq!(resp.data[1].last, None);
}

#[tokio::test]
async fn intraday_latest_hits_latest_path() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("intraday.json");

    Mock::given(method("GET"))
        .and(path("/intraday/latest"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let result = client
        .intraday_latest(&IntradayQuery::default().with_symbol("AAPL"))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn dividends_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("dividends.json");

    Mock::given(method("GET"))
        .and(path("/dividends"))
        .and(query_param("symbols", "AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let resp = client
        .dividends(&DividendQuery::default().with_symbol("AAPL"))
        .await
        .unwrap();

    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].dividend, 0.25);
}

#[tokio::test]
async fn tickers_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("tickers.json");

    Mock::given(method("GET"))
        .and(path("/tickers"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri(), "test-key").unwrap();
    let resp = client.tickers(&TickerQuery::default()).await.unwrap();

    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].stock_exchange.mic, "XNAS");
}
