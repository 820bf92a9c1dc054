use serde::Serialize;
use std::num::Wrapping;

/// When we have separate values it's useful to run a progressive
/// version of djb2 where we pretend that we're still looping over
/// the same value
pub fn progressive_hash<V: Serialize>(h: u32, x: &V) -> u64 {
    let x = bincode::serialize(x).expect("Failed to convert variables to Vec<u8> for hashing");

    let mut h = Wrapping(h as u64);

    for byte in x {
        h = (h << 5) + h + Wrapping(byte as u64)
    }

    h.0
}

#[cfg(test)]
mod tests {
    use super::progressive_hash;

    #[derive(Serialize, Clone)]
    struct Variables {
        type_: String
    }

    #[test]
    fn same_variables_hash_to_the_same_key() {
        let a = Variables {
            type_: "tags".to_string()
        };
        let b = Variables {
            type_: "tags".to_string()
        };
        assert_eq!(progressive_hash(1, &a), progressive_hash(1, &b));
    }

    #[test]
    fn different_variables_hash_to_different_keys() {
        let a = Variables {
            type_: "tags".to_string()
        };
        let b = Variables {
            type_: "persons".to_string()
        };
        assert_ne!(progressive_hash(1, &a), progressive_hash(1, &b));
    }

    #[test]
    fn different_query_keys_diverge_for_the_same_variables() {
        let a = Variables {
            type_: "tags".to_string()
        };
        assert_ne!(progressive_hash(1, &a), progressive_hash(2, &a));
    }
}
