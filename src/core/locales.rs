/// The enumerated locales of a project and which of them is canonical.
///
/// The canonical locale's store maps every key to itself and defines the key
/// universe. Locales keep their configured order; the canonical locale is
/// always a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSet {
    canonical: String,
    locales: Vec<String>,
}

impl LocaleSet {
    /// Build a locale set. Duplicates are dropped and the canonical locale is
    /// prepended if the list does not already contain it.
    pub fn new(canonical: impl Into<String>, locales: impl IntoIterator<Item = String>) -> Self {
        let canonical = canonical.into();
        let mut unique: Vec<String> = Vec::new();
        for locale in locales {
            if !unique.contains(&locale) {
                unique.push(locale);
            }
        }
        if !unique.contains(&canonical) {
            unique.insert(0, canonical.clone());
        }
        Self {
            canonical,
            locales: unique,
        }
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn is_canonical(&self, locale: &str) -> bool {
        self.canonical == locale
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }

    /// All locales, canonical included.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}
