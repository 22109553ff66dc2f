//! Unit tests for mock channel

use relay_core::services::ChannelSender;

use crate::channel::mock_channel::SentMessage;
use crate::channel::MockChannel;

#[tokio::test]
async fn test_mock_send_success() {
    let channel = MockChannel::new();
    let result = channel.send_text("+905551112233", "Test message").await;

    assert_eq!(result.unwrap(), "mock_1");
    assert_eq!(channel.get_message_count(), 1);
    assert_eq!(
        channel.messages(),
        vec![SentMessage {
            to: "+905551112233".to_string(),
            text: "Test message".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_mock_simulate_failure() {
    let channel = MockChannel::new();
    channel.set_simulate_failure(true);

    let result = channel.send_text("+905551112233", "Test message").await;
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Simulated channel failure"));
    assert!(!channel.is_ready());
    assert_eq!(channel.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_not_ready() {
    let channel = MockChannel::with_options(false, false);
    assert!(!channel.is_ready());
    assert!(channel.send_text("+905551112233", "x").await.is_err());

    channel.set_ready(true);
    assert!(channel.is_ready());
    assert!(channel.send_text("+905551112233", "x").await.is_ok());
}

#[tokio::test]
async fn test_mock_counter() {
    let channel = MockChannel::new();

    for i in 1..=3 {
        let id = channel
            .send_text("+905551112233", &format!("Message {}", i))
            .await
            .unwrap();
        assert_eq!(id, format!("mock_{}", i));
        assert_eq!(channel.get_message_count(), i);
    }
}
