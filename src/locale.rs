//! Language code used for the `locale` query parameter.

/// Used when the environment does not name a usable language.
pub const DEFAULT_LANGUAGE: &str = "en";

const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Two-letter language code of the current process locale, e.g. `"fr"` for
/// `LANG=fr_FR.UTF-8`. Checks `LC_ALL`, `LC_MESSAGES` then `LANG`.
pub fn language_code() -> String {
    LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|value| language_from_locale(&value))
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string())
}

/// Extract the ISO 639-1 code from a POSIX or BCP 47 locale string.
///
/// `"de_DE.UTF-8"`, `"de-AT"` and `"DE"` all give `"de"`. `"C"`, `"POSIX"`
/// and anything else without a two-letter language return `None`.
pub fn language_from_locale(locale: &str) -> Option<String> {
    let lang = locale
        .trim()
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default();

    if lang.len() == 2 && lang.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(lang.to_ascii_lowercase())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_language_from_locale() {
        assert_eq!(language_from_locale("fr_FR.UTF-8").as_deref(), Some("fr"));
        assert_eq!(language_from_locale("de-AT").as_deref(), Some("de"));
        assert_eq!(language_from_locale("EN").as_deref(), Some("en"));
        assert_eq!(language_from_locale("sr_RS@latin").as_deref(), Some("sr"));
        assert_eq!(language_from_locale("C"), None);
        assert_eq!(language_from_locale("POSIX"), None);
        assert_eq!(language_from_locale(""), None);
    }

    #[test]
    #[serial]
    fn test_language_code_precedence() {
        let saved: Vec<_> = LOCALE_VARS.iter().map(|v| std::env::var_os(v)).collect();

        std::env::remove_var("LC_ALL");
        std::env::set_var("LC_MESSAGES", "C");
        std::env::set_var("LANG", "es_ES.UTF-8");
        let from_lang = language_code();

        std::env::set_var("LC_ALL", "ja_JP.UTF-8");
        let from_lc_all = language_code();

        std::env::remove_var("LC_ALL");
        std::env::remove_var("LC_MESSAGES");
        std::env::remove_var("LANG");
        let fallback = language_code();

        for (var, value) in LOCALE_VARS.iter().zip(saved) {
            match value {
                Some(v) => std::env::set_var(var, v),
                None => std::env::remove_var(var),
            }
        }

        assert_eq!(from_lang, "es");
        assert_eq!(from_lc_all, "ja");
        assert_eq!(fallback, DEFAULT_LANGUAGE);
    }
}
