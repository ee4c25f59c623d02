//! FILENAME: tests/test_commands.rs
//! Integration tests for the command endpoint and its outbound queue.

mod common;

use std::time::Duration;

use app_lib::commands::greet;
use common::TestHarness;

#[tokio::test]
async fn test_on_command_replies_with_greeting() {
    let mut harness = TestHarness::new();
    let mut rx = harness.take_receiver();

    let reply = harness.send("Hello").await.unwrap();
    assert_eq!(reply, "Hello, Hello! You've been greeted from Rust!");
    assert_eq!(reply, greet("Hello"));
    assert_eq!(rx.recv().await, Some("Hello".to_string()));
}

#[tokio::test]
async fn test_on_command_forwards_event_message() {
    let mut harness = TestHarness::new();
    let mut rx = harness.take_receiver();

    let reply = harness.send("Time: 5").await.unwrap();
    assert_eq!(reply, "Hello, Time: 5! You've been greeted from Rust!");
    assert_eq!(rx.recv().await.as_deref(), Some("Time: 5"));
}

#[tokio::test]
async fn test_on_command_fails_without_worker() {
    let mut harness = TestHarness::new();
    drop(harness.take_receiver());

    let err = harness.send("Hello").await.unwrap_err();
    assert!(err.contains("closed"), "unexpected error: {}", err);
}

#[tokio::test(start_paused = true)]
async fn test_full_queue_applies_backpressure() {
    let mut harness = TestHarness::with_capacity(1);
    let mut rx = harness.take_receiver();

    harness.send("first").await.unwrap();

    let blocked = tokio::time::timeout(Duration::from_millis(50), harness.send("second")).await;
    assert!(blocked.is_err(), "second send should wait for the worker");

    assert_eq!(rx.recv().await.as_deref(), Some("first"));
    harness.send("third").await.unwrap();
    assert_eq!(rx.recv().await.as_deref(), Some("third"));
}

#[test]
fn test_state_carries_config() {
    let harness = TestHarness::with_capacity(3);
    assert_eq!(harness.state.config.outbound_capacity, 3);
    assert_eq!(harness.state.config.tick_interval_ms, 1000);
}
