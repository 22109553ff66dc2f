//! Unit tests for channel module

mod mock_channel_tests;
mod webhook_tests;
