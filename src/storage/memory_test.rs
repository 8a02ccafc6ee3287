use super::*;

#[test]
fn new_store_is_empty() {
    let store = MemoryStorage::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
}

#[test]
fn get_missing_key_returns_none() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("accessToken"), None);
}

#[test]
fn set_then_get_returns_value() {
    let mut store = MemoryStorage::new();
    store.set("accessToken", "T1");
    assert_eq!(store.get("accessToken").as_deref(), Some("T1"));
    assert_eq!(store.len(), 1);
}

#[test]
fn set_replaces_previous_value() {
    let mut store = MemoryStorage::new();
    store.set("accessToken", "T1");
    store.set("accessToken", "T2");
    assert_eq!(store.get("accessToken").as_deref(), Some("T2"));
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_deletes_entry() {
    let mut store = MemoryStorage::new();
    store.set("user", "{}");
    store.remove("user");
    assert_eq!(store.get("user"), None);
    assert!(store.is_empty());
}

#[test]
fn remove_missing_key_is_noop() {
    let mut store = MemoryStorage::new();
    store.remove("user");
    assert!(store.is_empty());
}
