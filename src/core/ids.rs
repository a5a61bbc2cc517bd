//! Identifier helpers.
//!
//! Deterministic UUID-shaped keys for tools, random UUIDs, and a validity
//! check for the hyphenated form.

use uuid::{Uuid, Variant};

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;
const SECONDARY_SEED: u32 = 0x1b87_3593;
const SECONDARY_PRIME: u32 = 0x85eb_ca6b;

/// Derive a UUID-shaped string from `namespace + input`.
///
/// The same input always yields the same output, across runs and machines.
/// Two FNV-1a style accumulators run over the UTF-16 code units of the input;
/// every eighth unit (and the last one) snapshots their low bytes into one of
/// four 4-byte lanes. Version and variant nibbles are forced to `4` and `8`.
pub fn string_to_uuid(input: &str, namespace: &str) -> String {
    let bytes = hash_lanes(namespace.encode_utf16().chain(input.encode_utf16()));

    let mut out = String::with_capacity(36);
    for (i, byte) in bytes.iter().enumerate() {
        out.push_str(&format!("{byte:02x}"));
        if matches!(i, 3 | 5 | 7 | 9) {
            out.push('-');
        }
    }

    // Positions 14 and 19 are the first characters of the third and fourth groups
    out.replace_range(14..15, "4");
    out.replace_range(19..20, "8");
    out
}

fn hash_lanes(units: impl Iterator<Item = u16>) -> [u8; 16] {
    let units: Vec<u16> = units.collect();
    let mut lanes = [0u8; 16];
    let mut h1 = FNV_OFFSET;
    let mut h2 = SECONDARY_SEED;

    for (i, unit) in units.iter().enumerate() {
        let unit = u32::from(*unit);
        h1 = (h1 ^ unit).wrapping_mul(FNV_PRIME);
        h2 = (h2 ^ unit).wrapping_mul(SECONDARY_PRIME);

        if i % 8 == 7 || i == units.len() - 1 {
            let pos = (i / 8) % 4 * 4;
            lanes[pos] = (h1 & 0xff) as u8;
            lanes[pos + 1] = ((h1 >> 8) & 0xff) as u8;
            lanes[pos + 2] = (h2 & 0xff) as u8;
            lanes[pos + 3] = ((h2 >> 8) & 0xff) as u8;
        }
    }

    lanes
}

/// Generate a random version 4 UUID in hyphenated lowercase form.
pub fn generate_random_uuid() -> String {
    Uuid::new_v4().hyphenated().to_string()
}

/// Check whether `value` is a hyphenated UUID with version 1-5 and the
/// RFC 4122 variant. Case-insensitive.
pub fn is_valid_uuid(value: &str) -> bool {
    if value.len() != 36 {
        return false;
    }

    match Uuid::try_parse(value) {
        Ok(uuid) => {
            (1..=5).contains(&uuid.get_version_num()) && uuid.get_variant() == Variant::RFC4122
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_to_uuid_is_deterministic() {
        let a = string_to_uuid("json-formatter", "tool:");
        let b = string_to_uuid("json-formatter", "tool:");
        assert_eq!(a, b);
        assert_ne!(a, string_to_uuid("regex-tester", "tool:"));
    }

    #[test]
    fn test_namespace_changes_output() {
        assert_ne!(
            string_to_uuid("json-formatter", ""),
            string_to_uuid("json-formatter", "tool:")
        );
    }

    #[test]
    fn test_string_to_uuid_shape() {
        let id = string_to_uuid("hash-generator", "");
        assert_eq!(id.len(), 36);
        assert_eq!(&id[14..15], "4");
        assert_eq!(&id[19..20], "8");
        assert!(is_valid_uuid(&id));
    }

    #[test]
    fn test_empty_input_yields_zero_lanes() {
        assert_eq!(
            string_to_uuid("", ""),
            "00000000-0000-4000-8000-000000000000"
        );
    }

    #[test]
    fn test_non_ascii_input() {
        let id = string_to_uuid("二维码生成", "");
        assert!(is_valid_uuid(&id));
    }

    #[test]
    fn test_random_uuid_is_valid() {
        let a = generate_random_uuid();
        assert!(is_valid_uuid(&a));
        assert_ne!(a, generate_random_uuid());
    }

    #[test]
    fn test_is_valid_uuid_rejects_bad_input() {
        assert!(!is_valid_uuid("not-a-uuid"));
        // version 0
        assert!(!is_valid_uuid("123e4567-e89b-02d3-a456-426614174000"));
        // variant outside 8/9/a/b
        assert!(!is_valid_uuid("123e4567-e89b-42d3-c456-426614174000"));
        // simple form without hyphens
        assert!(!is_valid_uuid("123e4567e89b42d3a456426614174000"));
        assert!(is_valid_uuid("123E4567-E89B-42D3-A456-426614174000"));
    }
}
