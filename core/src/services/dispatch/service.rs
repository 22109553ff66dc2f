//! Main dispatch service implementation

use chrono::Utc;
use relay_shared::phone::mask_phone_number;
use relay_shared::validation::validators;
use std::sync::Arc;

use crate::domain::entities::{OtpCode, RequestType};
use crate::errors::{DomainResult, ValidationError};
use crate::services::intent::IntentClassifier;
use crate::services::store::OtpStore;

use super::config::DispatchConfig;
use super::messages::{code_found_reply, code_missing_reply};
use super::traits::ChannelSender;
use super::types::{DepositReceipt, DepositRequest, Delivery, IgnoreReason, InboundOutcome};

/// Dispatch service wiring the store, classifier and outbound channel
pub struct DispatchService {
    /// Shared OTP pool
    store: Arc<OtpStore>,
    /// Inbound text classifier
    classifier: IntentClassifier,
    /// Outbound channel for replies
    channel: Arc<dyn ChannelSender>,
}

impl DispatchService {
    /// Create a new dispatch service
    ///
    /// # Arguments
    ///
    /// * `store` - OTP store shared with the sweeper and status endpoints
    /// * `channel` - Channel used to reply to subscribers
    /// * `config` - Service configuration
    pub fn new(store: Arc<OtpStore>, channel: Arc<dyn ChannelSender>, config: DispatchConfig) -> Self {
        Self {
            store,
            classifier: IntentClassifier::new(config.keywords),
            channel,
        }
    }

    pub fn store(&self) -> &Arc<OtpStore> {
        &self.store
    }

    pub fn channel(&self) -> &Arc<dyn ChannelSender> {
        &self.channel
    }

    /// Validate a deposit and store its code
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// 1. `tur`, `otp` and `tel` are present and non-blank
    /// 2. `tur` names a known request type
    /// 3. `tel` starts with `+`
    /// 4. `otp` is exactly four ASCII digits
    ///
    /// # Returns
    ///
    /// * `Ok(DepositReceipt)` - Canonical phone, request type and time of storage
    /// * `Err(DomainError::Validation)` - If any check fails
    pub fn deposit(&self, request: DepositRequest) -> DomainResult<DepositReceipt> {
        let tur = required("tur", request.tur.as_deref())?;
        let otp = required("otp", request.otp.as_deref())?;
        let tel = required("tel", request.tel.as_deref())?;

        let request_type: RequestType = tur.parse()?;

        if !tel.starts_with('+') {
            return Err(ValidationError::PhoneMissingPlus.into());
        }

        let code = OtpCode::parse(otp)?;

        let phone = self.store.put(tel, request_type, code);

        tracing::info!(
            phone = %mask_phone_number(&phone),
            request_type = %request_type,
            event = "otp_deposited",
            "OTP deposit accepted"
        );

        Ok(DepositReceipt {
            phone,
            request_type,
            timestamp: Utc::now(),
        })
    }

    /// Answer one inbound message
    ///
    /// Blank senders and text without an OTP intent are ignored. Otherwise the
    /// code is claimed and a reply is sent once, found or not. Send failures
    /// are reported in the outcome and never retried.
    pub async fn handle_inbound(&self, text: &str, phone_raw: &str) -> InboundOutcome {
        if !validators::not_blank(phone_raw) {
            tracing::debug!("Inbound message without sender ignored");
            return InboundOutcome::Ignored {
                reason: IgnoreReason::MissingSender,
            };
        }

        let Some(request_type) = self.classifier.classify(text) else {
            tracing::debug!(
                phone = %mask_phone_number(phone_raw),
                "Inbound message has no OTP intent"
            );
            return InboundOutcome::Ignored {
                reason: IgnoreReason::NoIntent,
            };
        };

        tracing::info!(
            phone = %mask_phone_number(phone_raw),
            request_type = %request_type,
            event = "otp_requested",
            "OTP requested over channel"
        );

        // claim completes and releases the store lock before the send
        let claimed = self.store.claim(phone_raw, request_type);
        let code_found = claimed.is_some();
        let reply = match &claimed {
            Some(code) => code_found_reply(code, self.store.ttl()),
            None => code_missing_reply(),
        };

        let delivery = match self.channel.send_text(phone_raw, &reply).await {
            Ok(message_id) => {
                tracing::info!(
                    phone = %mask_phone_number(phone_raw),
                    message_id = %message_id,
                    code_found,
                    event = "reply_sent",
                    "Reply delivered"
                );
                Delivery::Delivered { message_id }
            }
            Err(e) => {
                tracing::warn!(
                    phone = %mask_phone_number(phone_raw),
                    error = %e,
                    code_found,
                    event = "reply_failed",
                    "Reply delivery failed"
                );
                Delivery::Failed {
                    reason: e.to_string(),
                }
            }
        };

        InboundOutcome::Replied {
            request_type,
            code_found,
            delivery,
        }
    }
}

fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    match value {
        Some(v) if validators::not_blank(v) => Ok(v),
        _ => Err(ValidationError::RequiredField {
            field: field.to_string(),
        }),
    }
}
