use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Catalog;

/// Loaded Fluent bundles plus the locale currently in effect.
pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Catalog::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            if let Some(content) = Catalog::get(filename) {
                let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
                let res =
                    FluentResource::try_new(source).expect("embedded FTL catalog should parse");
                let mut bundle = FluentBundle::new(vec![locale.clone()]);
                bundle
                    .add_resource(res)
                    .expect("embedded FTL catalog should have unique message ids");
                bundles.insert(locale.clone(), bundle);
                available_locales.push(locale);
            }
        }

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Looks up `key` in the current locale's bundle. Returns a visible
    /// `MISSING:` marker rather than panicking when a key is absent, so an
    /// incomplete catalog degrades gracefully.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let try_parse = |s: &str| -> Option<LanguageIdentifier> {
        s.parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // CLI argument takes precedence over the config file, which takes
    // precedence over the OS locale.
    if let Some(lang) = cli_lang.as_deref().and_then(try_parse) {
        return Some(lang);
    }
    if let Some(lang) = config.language.as_deref().and_then(try_parse) {
        return Some(lang);
    }
    sys_locale::get_locale().as_deref().and_then(try_parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn locales(tags: &[&str]) -> Vec<LanguageIdentifier> {
        tags.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn resolve_locale_prefers_cli_argument() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let available = locales(&["en-US", "fr"]);
        let lang = resolve_locale(Some("fr".to_string()), &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_config() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let available = locales(&["en-US", "fr"]);
        let lang = resolve_locale(None, &config, &available);
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_ignores_unavailable_languages() {
        let config = Config {
            language: Some("de".to_string()),
            ..Config::default()
        };
        let available = locales(&["en-US", "fr"]);
        let lang = resolve_locale(None, &config, &available);
        // OS locale dependent, but never an unavailable language.
        if let Some(l) = lang {
            assert!(available.contains(&l));
        }
    }

    #[test]
    fn tr_resolves_embedded_catalog() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let i18n = I18n::new(None, &config);
        assert_eq!(
            i18n.tr("dialog-no-notifications"),
            "You have no new notifications."
        );
    }

    #[test]
    fn tr_marks_missing_keys() {
        let i18n = I18n::default();
        assert_eq!(
            i18n.tr("not-a-real-key"),
            "MISSING: not-a-real-key".to_string()
        );
    }
}
