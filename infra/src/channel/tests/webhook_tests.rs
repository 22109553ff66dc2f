//! Unit tests for webhook channel

use relay_core::services::ChannelSender;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::channel::WebhookChannel;
use crate::config::ChannelConfig;
use crate::InfrastructureError;

fn config(url: &str) -> ChannelConfig {
    ChannelConfig {
        provider: "webhook".to_string(),
        webhook_url: Some(url.to_string()),
        auth_token: Some("secret-token".to_string()),
        timeout_secs: 5,
    }
}

/// Serve exactly one HTTP request with a canned response and hand back the
/// raw request text.
async fn one_shot_gateway(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/send", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&request);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if request.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&request).into_owned()
    });

    (url, handle)
}

#[test]
fn test_missing_url_is_config_error() {
    let result = WebhookChannel::new(&ChannelConfig {
        provider: "webhook".to_string(),
        ..ChannelConfig::default()
    });
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_non_http_url_rejected() {
    let result = WebhookChannel::new(&config("ftp://gateway.local/send"));
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_recipient_strips_plus_and_formatting() {
    assert_eq!(WebhookChannel::recipient("+90 555 111 22 33").unwrap(), "905551112233");
    assert_eq!(WebhookChannel::recipient("05551112233").unwrap(), "05551112233");
    assert!(WebhookChannel::recipient("+").is_err());
}

#[tokio::test]
async fn test_send_posts_json_with_bearer_token() {
    let (url, gateway) = one_shot_gateway("HTTP/1.1 200 OK", r#"{"id":"wamid-1"}"#).await;
    let channel = WebhookChannel::new(&config(&url)).unwrap();

    let message_id = channel
        .send_text("+905551112233", "🔐 OTP Kodunuz: 0042")
        .await
        .unwrap();
    assert_eq!(message_id, "wamid-1");
    assert!(channel.is_ready());

    let request = gateway.await.unwrap();
    assert!(request.starts_with("POST /send"));
    assert!(request
        .to_ascii_lowercase()
        .contains("authorization: bearer secret-token"));
    assert!(request.contains(r#""to":"905551112233""#));
    assert!(request.contains("0042"));
}

#[tokio::test]
async fn test_missing_message_id_is_generated() {
    let (url, gateway) = one_shot_gateway("HTTP/1.1 200 OK", "{}").await;
    let channel = WebhookChannel::new(&config(&url)).unwrap();

    let message_id = channel.send_text("+905551112233", "hi").await.unwrap();
    assert!(message_id.starts_with("webhook_"));
    gateway.await.unwrap();
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let (url, gateway) =
        one_shot_gateway("HTTP/1.1 503 Service Unavailable", r#"{"error":"offline"}"#).await;
    let channel = WebhookChannel::new(&config(&url)).unwrap();

    let err = channel.send_text("+905551112233", "hi").await.unwrap_err();
    assert!(err.to_string().contains("503"));
    gateway.await.unwrap();
}

#[tokio::test]
async fn test_unreachable_gateway_marks_channel_down() {
    // bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/send", listener.local_addr().unwrap());
    drop(listener);

    let channel = WebhookChannel::new(&config(&url)).unwrap();
    assert!(channel.is_ready());

    assert!(channel.send_text("+905551112233", "hi").await.is_err());
    assert!(!channel.is_ready());
}
