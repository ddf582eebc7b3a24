use super::*;

#[test]
fn test_is_uuid_valid() {
    assert!(is_uuid("a3f2b1c9-4d5e-6f7a-8b9c-0d1e2f3a4b5c"));
    assert!(is_uuid("550e8400-e29b-41d4-a716-446655440000"));
}

#[test]
fn test_is_uuid_invalid() {
    assert!(!is_uuid("not-a-uuid"));
    assert!(!is_uuid("1000"));
    assert!(!is_uuid(""));
}

#[test]
fn test_is_contract_file() {
    assert!(is_contract_file("550e8400-e29b-41d4-a716-446655440000.md"));
    assert!(!is_contract_file("550e8400-e29b-41d4-a716-446655440000.md.tmp"));
    assert!(!is_contract_file("config.toml"));
    assert!(!is_contract_file("lease.md"));
}

#[test]
fn test_contract_id_from_filename() {
    assert_eq!(
        contract_id_from_filename("550e8400-e29b-41d4-a716-446655440000.md"),
        Some("550e8400-e29b-41d4-a716-446655440000")
    );
    assert_eq!(contract_id_from_filename("550e8400-e29b-41d4-a716-446655440000"), None);
}

#[test]
fn test_generate_contract_id() {
    let id = generate_contract_id();
    assert!(is_uuid(&id));
    assert_ne!(id, generate_contract_id());
}

#[test]
fn test_short_id() {
    assert_eq!(short_id("a3f2b1c9-4d5e-6f7a-8b9c-0d1e2f3a4b5c"), "a3f2b1c9");
    assert_eq!(short_id("abc"), "abc");
}
