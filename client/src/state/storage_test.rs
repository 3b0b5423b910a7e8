use super::*;

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "t1").unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t1"));
}

#[test]
fn memory_storage_overwrites_existing_value() {
    let storage = MemoryStorage::new();
    storage.set(TOKEN_KEY, "old").unwrap();
    storage.set(TOKEN_KEY, "new").unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("new"));
}

#[test]
fn memory_storage_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove(USER_KEY), Ok(()));
    storage.set(USER_KEY, "{}").unwrap();
    storage.remove(USER_KEY).unwrap();
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
    assert_eq!(StorageError::Write("quota".into()).to_string(), "storage write failed: quota");
}
