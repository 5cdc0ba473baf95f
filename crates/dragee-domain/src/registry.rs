use crate::error::RegistryError;
use std::collections::BTreeSet;

/// Reject id collisions at registration time; lookups by id must be unambiguous.
pub(crate) fn ensure_unique_ids<'a>(
    namespace: &str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), RegistryError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RegistryError::DuplicateId {
                namespace: namespace.to_string(),
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_collision_is_reported() {
        let err = ensure_unique_ids("ns", ["ns/a", "ns/b", "ns/a", "ns/b"]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateId {
                namespace: "ns".to_string(),
                id: "ns/a".to_string(),
            }
        );
    }

    #[test]
    fn distinct_ids_pass() {
        assert!(ensure_unique_ids("ns", ["ns/a", "ns/b"]).is_ok());
        assert!(ensure_unique_ids("ns", []).is_ok());
    }
}
