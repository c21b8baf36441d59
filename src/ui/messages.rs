//! Localized message texts.
//!
//! A [`MessageCatalog`] is built once for a [`Locale`] and passed to the
//! presenter; it is never mutated afterwards.

use super::VersionFailure;

/// Supported message languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

/// Environment variables consulted for the user's language, in order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

impl Locale {
    /// Parse a language tag such as `fr`, `fr_FR.UTF-8`, or `en-US`.
    ///
    /// Anything that is not French falls back to English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("fr") {
            Locale::Fr
        } else {
            Locale::En
        }
    }

    /// Detect the locale from `LC_ALL`, `LC_MESSAGES`, then `LANG`.
    pub fn detect() -> Self {
        Self::detect_with(|key| std::env::var(key).ok())
    }

    /// Detect the locale using a custom variable lookup.
    pub fn detect_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        LOCALE_VARS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::from_tag(&value))
            .unwrap_or_default()
    }
}

/// Message templates for one locale.
///
/// Placeholders: `{current}`, `{required}`, `{runtime}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    locale: Locale,
    title: &'static str,
    out_of_date: &'static str,
    requirement: &'static str,
    download_hint: &'static str,
}

impl MessageCatalog {
    /// Build the catalog for `locale`.
    pub fn new(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                locale,
                title: "Invalid runtime environment",
                out_of_date: "The version of your runtime environment ({current}) is out of date.",
                requirement: "To run, the application requires the version {required} (or more) of {runtime}.",
                download_hint: "You can download it from:",
            },
            Locale::Fr => Self {
                locale,
                title: "Environnement d'exécution invalide",
                out_of_date: "La version de votre environnement d'exécution ({current}) n'est pas à jour.",
                requirement: "Pour fonctionner, l'application nécessite la version {required} (ou plus) de {runtime}.",
                download_hint: "Vous pouvez la télécharger depuis :",
            },
        }
    }

    /// Locale this catalog was built for.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Short title for the failure.
    pub fn title(&self) -> &str {
        self.title
    }

    /// Lead-in shown before the download link.
    pub fn download_hint(&self) -> &str {
        self.download_hint
    }

    /// The two body lines explaining which versions are involved.
    pub fn body_lines(&self, failure: &VersionFailure) -> [String; 2] {
        [
            self.out_of_date.replace("{current}", &failure.current),
            self.requirement
                .replace("{required}", &failure.required)
                .replace("{runtime}", &failure.runtime_name),
        ]
    }

    /// Full plain-text message, download URL included when known.
    pub fn version_too_low(&self, failure: &VersionFailure) -> String {
        let mut text = self.body_lines(failure).join("\n");
        if let Some(url) = &failure.download_url {
            text.push('\n');
            text.push_str(self.download_hint);
            text.push('\n');
            text.push_str(url);
        }
        text
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn failure(url: Option<&str>) -> VersionFailure {
        VersionFailure {
            current: "1.7.0_80".to_string(),
            required: "1.8.0_40".to_string(),
            runtime_name: "Java".to_string(),
            download_url: url.map(String::from),
        }
    }

    #[test]
    fn from_tag_recognizes_french() {
        assert_eq!(Locale::from_tag("fr"), Locale::Fr);
        assert_eq!(Locale::from_tag("fr_FR.UTF-8"), Locale::Fr);
        assert_eq!(Locale::from_tag("FR-ca"), Locale::Fr);
    }

    #[test]
    fn from_tag_falls_back_to_english() {
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::from_tag("de"), Locale::En);
        assert_eq!(Locale::from_tag("C"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn detect_prefers_lc_all() {
        let vars: HashMap<&str, &str> = [("LC_ALL", "fr_FR.UTF-8"), ("LANG", "en_US.UTF-8")]
            .into_iter()
            .collect();
        let locale = Locale::detect_with(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(locale, Locale::Fr);
    }

    #[test]
    fn detect_skips_empty_values() {
        let vars: HashMap<&str, &str> = [("LC_ALL", ""), ("LANG", "fr_BE")].into_iter().collect();
        let locale = Locale::detect_with(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(locale, Locale::Fr);
    }

    #[test]
    fn detect_without_variables_is_english() {
        assert_eq!(Locale::detect_with(|_| None), Locale::En);
    }

    #[test]
    fn english_message_names_versions() {
        let catalog = MessageCatalog::new(Locale::En);
        let text = catalog.version_too_low(&failure(None));
        assert_eq!(
            text,
            "The version of your runtime environment (1.7.0_80) is out of date.\n\
             To run, the application requires the version 1.8.0_40 (or more) of Java."
        );
    }

    #[test]
    fn french_message_names_versions() {
        let catalog = MessageCatalog::new(Locale::Fr);
        let text = catalog.version_too_low(&failure(None));
        assert!(text.contains("(1.7.0_80) n'est pas à jour"));
        assert!(text.contains("la version 1.8.0_40 (ou plus) de Java"));
        assert_eq!(catalog.title(), "Environnement d'exécution invalide");
    }

    #[test]
    fn message_includes_download_url() {
        let catalog = MessageCatalog::new(Locale::En);
        let text = catalog.version_too_low(&failure(Some("https://example.com/jre")));
        assert!(text.ends_with("You can download it from:\nhttps://example.com/jre"));
    }

    #[test]
    fn default_catalog_is_english() {
        assert_eq!(MessageCatalog::default().locale(), Locale::En);
    }
}
