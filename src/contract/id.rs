//! Contract identity helpers. Identities are UUID v4 strings, also used as file names.
use uuid::Uuid;

/// Check if a string is a valid UUID
#[must_use]
pub fn is_uuid(s: &str) -> bool { Uuid::parse_str(s).is_ok() }

/// Check if a filename is a stored contract document (`<uuid>.md`)
#[must_use]
pub fn is_contract_file(name: &str) -> bool { contract_id_from_filename(name).is_some() }

/// Extract the contract ID from a markdown filename (removes .md extension)
#[must_use]
pub fn contract_id_from_filename(name: &str) -> Option<&str> {
    let id = name.strip_suffix(".md")?;
    if is_uuid(id) { Some(id) } else { None }
}

/// Generate a new identity for a contract
#[must_use]
pub fn generate_contract_id() -> String { Uuid::new_v4().to_string() }

/// Get the short form of a contract ID (first 8 characters)
#[must_use]
pub fn short_id(id: &str) -> &str { id.get(..8).unwrap_or(id) }

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
