//! Drives `PrivatBankClient` and `RateFetcher` against a local HTTP responder.
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use approx::assert_relative_eq;
use chrono::NaiveDate;
use rates_common::{ClientConfig, PrivatBankClient, Query, RateFetcher, RatesError, RateSource};

/// Canned reply: status line code and JSON body.
struct Reply {
    status: u16,
    body: String,
}

fn ok(body: &str) -> Reply {
    Reply { status: 200, body: body.to_string() }
}

fn status(code: u16) -> Reply {
    Reply { status: code, body: String::from("{}") }
}

/// Serves `replies` to consecutive connections and reports each request line.
fn serve(replies: Vec<Reply>) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/p24api/exchange_rates", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let mut replies = replies.into_iter();
        for stream in listener.incoming() {
            let Some(reply) = replies.next() else { break };
            let mut stream = stream.unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            loop {
                let mut header = String::new();
                reader.read_line(&mut header).unwrap();
                if header == "\r\n" || header.is_empty() {
                    break;
                }
            }
            let _ = tx.send(request_line.trim_end().to_string());

            let response = format!(
                "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.status,
                reply.body.len(),
                reply.body
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
    });

    (base_url, rx)
}

fn client(base_url: String) -> PrivatBankClient {
    PrivatBankClient::new(ClientConfig {
        base_url,
        timeout: Some(Duration::from_secs(5)),
    })
    .unwrap()
}

fn day_body(date: &str, usd: f64) -> String {
    format!(
        r#"{{"date":"{date}","bank":"PB","baseCurrency":980,"baseCurrencyLit":"UAH","exchangeRate":[
            {{"baseCurrency":"UAH","currency":"EUR","saleRateNB":41.1,"purchaseRateNB":41.1}},
            {{"baseCurrency":"UAH","currency":"USD","saleRateNB":{usd},"purchaseRateNB":{usd},"saleRate":38.5,"purchaseRate":37.9}}
        ]}}"#
    )
}

#[test]
fn sends_json_flag_and_date() {
    let (base_url, requests) = serve(vec![ok(&day_body("17.10.2026", 41.25))]);

    let response = client(base_url).rates_on("17.10.2026").unwrap();

    assert_eq!(response.date, "17.10.2026");
    assert_eq!(
        requests.recv().unwrap(),
        "GET /p24api/exchange_rates?json&date=17.10.2026 HTTP/1.1"
    );
}

#[test]
fn non_200_status_is_a_service_error() {
    let (base_url, _requests) = serve(vec![status(404)]);

    let err = client(base_url).rates_on("17.10.2026").unwrap_err();

    assert!(matches!(err, RatesError::Service { status: 404 }));
    assert_eq!(err.to_string(), "Failed to get exchange rates. Status code: 404");
}

#[test]
fn malformed_body_is_unexpected() {
    let (base_url, _requests) = serve(vec![ok("<html>maintenance</html>")]);

    let err = client(base_url).rates_on("17.10.2026").unwrap_err();

    assert!(matches!(err, RatesError::Json(_)));
    assert!(!err.is_expected());
}

#[test]
fn fetches_each_day_in_order() {
    let (base_url, requests) = serve(vec![
        ok(&day_body("17.10.2026", 41.25)),
        ok(&day_body("16.10.2026", 41.2)),
        ok(&day_body("15.10.2026", 41.1)),
    ]);
    let fetcher = RateFetcher::new(client(base_url));
    let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();

    let rates = fetcher
        .fetch_since(&Query::parse("usd", "3").unwrap(), today)
        .unwrap();

    let lines: Vec<String> = rates.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["17.10.2026: 41.25", "16.10.2026: 41.2", "15.10.2026: 41.1"]);
    assert_relative_eq!(rates.as_slice()[1].rate(), 41.2);

    let seen: Vec<String> = requests.try_iter().collect();
    assert_eq!(seen.len(), 3);
    assert!(seen[2].contains("date=15.10.2026"));
}

#[test]
fn status_404_returns_no_rates() {
    let (base_url, requests) = serve(vec![status(404), ok(&day_body("16.10.2026", 41.2))]);
    let fetcher = RateFetcher::new(client(base_url));
    let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();

    let result = fetcher.fetch_since(&Query::parse("USD", "2").unwrap(), today);

    assert!(matches!(result, Err(RatesError::Service { status: 404 })));
    assert_eq!(requests.try_iter().count(), 1);
}
