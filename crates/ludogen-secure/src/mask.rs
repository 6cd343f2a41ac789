/// Longest prefix of the local part preserved by the mask.
const VISIBLE_PREFIX: usize = 3;

/// Irreversible display form of an email address: up to the first three
/// characters of the local part, a fixed `***` placeholder, and the literal
/// domain. The rest of the local part is not recoverable from the output.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let prefix: String = local.chars().take(VISIBLE_PREFIX).collect();
            format!("{prefix}***@{domain}")
        }
        // Not address-shaped; redact everything rather than leak it.
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_three_chars_and_the_domain() {
        assert_eq!(mask_email("ada.lovelace@example.com"), "ada***@example.com");
    }

    #[test]
    fn short_local_parts_stay_short() {
        assert_eq!(mask_email("al@example.com"), "al***@example.com");
        assert_eq!(mask_email("@example.com"), "***@example.com");
    }

    #[test]
    fn non_addresses_are_fully_redacted() {
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
