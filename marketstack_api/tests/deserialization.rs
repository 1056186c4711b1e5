use marketstack_api::types::{
    Dividend, EodBar, ErrorEnvelope, IntradayBar, PaginatedResponse, Split, Ticker,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_eod_full() {
    let json = load_fixture("eod.json");
    let resp: PaginatedResponse<EodBar> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.pagination.limit, 100);
    assert_eq!(resp.pagination.total, 252);

    let bar = &resp.data[0];
    assert_eq!(bar.open, 214.16);
    assert_eq!(bar.close, 216.3);
    assert_eq!(bar.adj_close, Some(216.06));
    assert_eq!(bar.split_factor, 1.0);
    assert_eq!(bar.dividend, 0.0);
    assert_eq!(bar.exchange, "XNAS");
    assert_eq!(bar.date, "2024-06-14T00:00:00+0000");

    assert_eq!(resp.data[1].dividend, 0.25);
}

#[test]
fn deserialize_eod_null_adjusted_fields() {
    let json = r#"{
        "open": 10.0, "high": 11.0, "low": 9.5, "close": 10.5, "volume": 1000.0,
        "adj_open": null, "adj_high": null, "adj_low": null, "adj_close": null,
        "adj_volume": null, "split_factor": 1.0, "dividend": 0.0,
        "symbol": "XYZ", "exchange": "XNYS", "date": "2024-01-02T00:00:00+0000"
    }"#;
    let bar: EodBar = serde_json::from_str(json).unwrap();
    assert_eq!(bar.adj_close, None);
    assert_eq!(bar.adj_volume, None);
}

#[test]
fn deserialize_eod_empty() {
    let json = load_fixture("eod_empty.json");
    let resp: PaginatedResponse<EodBar> = serde_json::from_str(&json).unwrap();
    assert!(resp.data.is_empty());
    assert_eq!(resp.pagination.count, 0);
}

#[test]
fn deserialize_intraday_with_null_quote_fields() {
    let json = load_fixture("intraday.json");
    let resp: PaginatedResponse<IntradayBar> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].last, Some(215.97));
    assert_eq!(resp.data[1].close, None);
    assert_eq!(resp.data[1].volume, None);
}

#[test]
fn deserialize_dividends() {
    let json = load_fixture("dividends.json");
    let resp: PaginatedResponse<Dividend> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].date, "2024-05-10");
    assert_eq!(resp.data[1].dividend, 0.24);
}

#[test]
fn deserialize_splits() {
    let json = load_fixture("splits.json");
    let resp: PaginatedResponse<Split> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].split_factor, 4.0);
    assert_eq!(resp.data[1].date, "2014-06-09");
}

#[test]
fn deserialize_tickers() {
    let json = load_fixture("tickers.json");
    let resp: PaginatedResponse<Ticker> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);
    assert_eq!(resp.data[0].name, "Apple Inc");
    assert_eq!(resp.data[0].stock_exchange.acronym, "NASDAQ");
    assert_eq!(resp.data[1].symbol, "MSFT");
}

#[test]
fn deserialize_error_envelope() {
    let json = load_fixture("error_invalid_key.json");
    let envelope: ErrorEnvelope = serde_json::from_str(&json).unwrap();
    assert_eq!(envelope.error.code, "invalid_access_key");
    assert!(envelope.error.message.contains("Access Key"));
}

#[test]
fn reserialized_eod_keeps_wire_names() {
    let json = load_fixture("eod.json");
    let resp: PaginatedResponse<EodBar> = serde_json::from_str(&json).unwrap();
    let out = serde_json::to_value(&resp).unwrap();
    assert!(out["pagination"]["total"].is_i64());
    assert_eq!(out["data"][0]["adj_close"], 216.06);
    assert_eq!(out["data"][0]["split_factor"], 1.0);
}
