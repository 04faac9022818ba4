use satang_core::KeyValueStore;
use satang_storage_json::JsonFileStore;
use tempfile::tempdir;

#[test]
fn get_on_missing_key_yields_none() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    assert!(store.get("saved_transactions").expect("get").is_none());
}

#[test]
fn set_then_get_round_trips_bytes() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");

    store.set("saved_transactions", b"[1,2,3]").expect("set");
    let value = store.get("saved_transactions").expect("get").expect("some");
    assert_eq!(value, b"[1,2,3]");

    let path = store.key_path("saved_transactions");
    assert_eq!(path.extension().and_then(|ext| ext.to_str()), Some("json"));
    assert!(path.exists());
}

#[test]
fn set_overwrites_previous_value() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");

    store.set("saved_transactions", b"old").expect("first set");
    store.set("saved_transactions", b"new").expect("second set");
    let value = store.get("saved_transactions").expect("get").expect("some");
    assert_eq!(value, b"new");
}

#[test]
fn no_tmp_file_survives_a_write() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");
    store.set("saved_transactions", b"[]").expect("set");

    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .expect("read dir")
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext == "tmp")
                .unwrap_or(false)
        })
        .collect();
    assert!(leftovers.is_empty(), "tmp file left behind: {leftovers:?}");
}

#[test]
fn keys_are_sanitized_into_file_names() {
    let dir = tempdir().expect("tempdir");
    let store = JsonFileStore::new(dir.path().to_path_buf()).expect("create store");

    let path = store.key_path("Saved Transactions!");
    let name = path.file_name().and_then(|name| name.to_str()).unwrap();
    assert_eq!(name, "saved_transactions_.json");
}
