//! Short random identifiers (base36), in the shape the stored records use.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

pub fn user_id() -> String {
    random_base36(9)
}

pub fn log_id() -> String {
    random_base36(9)
}

pub fn machine_id() -> String {
    format!("mac-{}", random_base36(5))
}

pub fn category_id() -> String {
    format!("cat-{}", random_base36(5))
}

pub fn item_id() -> String {
    format!("item-{}", random_base36(5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixed_ids_have_expected_shape() {
        let m = machine_id();
        assert!(m.starts_with("mac-"));
        assert_eq!(m.len(), 9);
        assert_eq!(item_id().len(), 10);
        assert!(
            user_id()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }
}
