//! Tests for the OTP store

use chrono::{Duration, TimeZone, Utc};
use std::sync::{Arc, Barrier};
use std::thread;

use crate::domain::entities::{OtpCode, RequestType};
use crate::services::identity::PhoneNormalizer;
use crate::services::store::{OtpStore, OtpStoreConfig};

fn code(raw: &str) -> OtpCode {
    OtpCode::parse(raw).unwrap()
}

fn store() -> OtpStore {
    OtpStore::new(OtpStoreConfig::default(), PhoneNormalizer::default())
}

fn t0() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_put_returns_canonical_phone() {
    let store = store();
    let phone = store.put_at("05551112233", RequestType::Creation, code("1234"), t0());
    assert_eq!(phone, "+905551112233");
    assert_eq!(store.size(), 1);
}

#[test]
fn test_claim_removes_entry() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("1234"), t0());

    let claimed = store.claim_at("+905551112233", RequestType::Creation, t0());
    assert_eq!(claimed, Some(code("1234")));
    assert!(store.is_empty());

    // second claim finds nothing
    assert_eq!(store.claim_at("+905551112233", RequestType::Creation, t0()), None);
}

#[test]
fn test_claim_is_scoped_by_request_type() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("1111"), t0());
    store.put_at("+905551112233", RequestType::Edit, code("2222"), t0());
    assert_eq!(store.size(), 2);

    assert_eq!(
        store.claim_at("+905551112233", RequestType::Edit, t0()),
        Some(code("2222"))
    );
    assert_eq!(
        store.claim_at("+905551112233", RequestType::Creation, t0()),
        Some(code("1111"))
    );
}

#[test]
fn test_concurrent_claims_yield_one_winner() {
    const CLAIMERS: usize = 16;

    let store = Arc::new(store());
    store.put("+905551112233", RequestType::Creation, code("4321"));

    let barrier = Arc::new(Barrier::new(CLAIMERS));
    let handles: Vec<_> = (0..CLAIMERS)
        .map(|i| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            // mix spellings so different variants race for the same entry
            let phone = if i % 2 == 0 { "+905551112233" } else { "05551112233" };
            thread::spawn(move || {
                barrier.wait();
                store.claim(phone, RequestType::Creation)
            })
        })
        .collect();

    let results: Vec<Option<OtpCode>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners: Vec<&OtpCode> = results.iter().flatten().collect();

    assert_eq!(winners.len(), 1);
    assert_eq!(winners[0].as_str(), "4321");
    assert_eq!(results.iter().filter(|r| r.is_none()).count(), CLAIMERS - 1);
    assert!(store.is_empty());
}

#[test]
fn test_claim_after_ttl_is_not_found() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("1234"), t0());

    let later = t0() + Duration::minutes(5);
    assert_eq!(store.claim_at("+905551112233", RequestType::Creation, later), None);
    // the stale entry was evicted by the claim
    assert!(store.snapshot_at(later).is_empty());
}

#[test]
fn test_claim_just_before_ttl_succeeds() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("1234"), t0());

    let almost = t0() + Duration::seconds(299);
    assert_eq!(
        store.claim_at("+905551112233", RequestType::Creation, almost),
        Some(code("1234"))
    );
}

#[test]
fn test_overwrite_keeps_latest_code() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("1111"), t0());
    store.put_at("905551112233", RequestType::Creation, code("2222"), t0());
    assert_eq!(store.size(), 1);

    assert_eq!(
        store.claim_at("+905551112233", RequestType::Creation, t0()),
        Some(code("2222"))
    );
    assert_eq!(store.claim_at("+905551112233", RequestType::Creation, t0()), None);
}

#[test]
fn test_overwrite_refreshes_deposit_time() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("1111"), t0());
    store.put_at(
        "+905551112233",
        RequestType::Creation,
        code("2222"),
        t0() + Duration::minutes(4),
    );

    let later = t0() + Duration::minutes(6);
    assert_eq!(
        store.claim_at("+905551112233", RequestType::Creation, later),
        Some(code("2222"))
    );
}

#[test]
fn test_variant_spellings_resolve_to_same_entry() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("0042"), t0());

    assert_eq!(
        store.claim_at("05551112233", RequestType::Creation, t0()),
        Some(code("0042"))
    );

    store.put_at("+905551112233", RequestType::Creation, code("0043"), t0());
    assert_eq!(
        store.claim_at("5551112233", RequestType::Creation, t0()),
        Some(code("0043"))
    );

    store.put_at("+355691234567", RequestType::Edit, code("7777"), t0());
    assert_eq!(
        store.claim_at("691234567", RequestType::Edit, t0()),
        Some(code("7777"))
    );
}

#[test]
fn test_different_subscriber_not_found() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("0042"), t0());

    assert_eq!(store.claim_at("+905551112299", RequestType::Creation, t0()), None);
    assert_eq!(store.size(), 1);
}

#[test]
fn test_claim_with_unusable_phone() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("0042"), t0());

    assert_eq!(store.claim_at("", RequestType::Creation, t0()), None);
    assert_eq!(store.claim_at("unknown", RequestType::Creation, t0()), None);
    assert_eq!(store.size(), 1);
}

#[test]
fn test_expired_variant_skipped_for_fresh_one() {
    let store = store();
    // raw spelling holds a stale entry, canonical spelling a fresh one
    store.put_at("+5551112233", RequestType::Creation, code("1111"), t0());
    store.put_at(
        "+905551112233",
        RequestType::Creation,
        code("2222"),
        t0() + Duration::minutes(4),
    );

    let now = t0() + Duration::minutes(6);
    assert_eq!(
        store.claim_at("5551112233", RequestType::Creation, now),
        Some(code("2222"))
    );
    assert!(store.is_empty());
}

#[test]
fn test_sweep_removes_only_expired() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("1111"), t0());
    store.put_at(
        "+905551114455",
        RequestType::Edit,
        code("2222"),
        t0() + Duration::minutes(3),
    );

    let now = t0() + Duration::minutes(5);
    assert_eq!(store.sweep_at(now), 1);
    assert_eq!(store.size(), 1);
    assert_eq!(
        store.claim_at("+905551114455", RequestType::Edit, now),
        Some(code("2222"))
    );
}

#[test]
fn test_sweep_twice_is_noop() {
    let store = store();
    store.put_at("+905551112233", RequestType::Creation, code("1111"), t0());

    let now = t0() + Duration::minutes(10);
    assert_eq!(store.sweep_at(now), 1);
    assert_eq!(store.sweep_at(now), 0);
    assert!(store.is_empty());
}

#[test]
fn test_sweep_empty_store() {
    let store = store();
    assert_eq!(store.sweep(), 0);
    assert_eq!(store.sweep(), 0);
}

#[test]
fn test_snapshot_is_redacted_and_ordered() {
    let store = store();
    store.put_at("+905551112233", RequestType::Edit, code("9876"), t0());
    store.put_at("+905551112233", RequestType::Creation, code("1234"), t0());
    store.put_at("+355691234567", RequestType::Creation, code("5555"), t0());

    let snapshot = store.snapshot_at(t0() + Duration::seconds(150));
    assert_eq!(snapshot.len(), 3);

    assert_eq!(snapshot[0].phone, "+355691234567");
    assert_eq!(snapshot[1].phone, "+905551112233");
    assert_eq!(snapshot[1].request_type, RequestType::Creation);
    assert_eq!(snapshot[1].code, "12**");
    assert_eq!(snapshot[2].request_type, RequestType::Edit);
    assert_eq!(snapshot[2].code, "98**");
    assert!(snapshot.iter().all(|e| e.age_seconds == 150));
}

#[test]
fn test_custom_ttl() {
    let store = OtpStore::new(
        OtpStoreConfig { ttl_seconds: 30 },
        PhoneNormalizer::default(),
    );
    assert_eq!(store.ttl(), Duration::seconds(30));

    store.put_at("+905551112233", RequestType::Creation, code("1234"), t0());
    assert_eq!(
        store.claim_at("+905551112233", RequestType::Creation, t0() + Duration::seconds(30)),
        None
    );
}
