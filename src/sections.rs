use crate::i18n::{text, Locale, UiKey};

/// Id of the hero header; navigation target for the brand and "back to top".
pub const HOME_ID: &str = "home";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

const REGISTRY: [(&str, UiKey); 6] = [
    ("about", UiKey::NavAbout),
    ("experience", UiKey::NavExperience),
    ("projects", UiKey::NavProjects),
    ("blog", UiKey::NavBlog),
    ("testimonials", UiKey::NavTestimonials),
    ("contact", UiKey::NavContact),
];

pub fn list_sections(locale: Locale) -> Vec<SectionDescriptor> {
    REGISTRY
        .iter()
        .map(|&(id, key)| SectionDescriptor {
            id,
            label: text(locale, key),
        })
        .collect()
}

/// Case-insensitive substring match on labels, registry order preserved.
pub fn filter_sections(sections: &[SectionDescriptor], query: &str) -> Vec<SectionDescriptor> {
    let needle = query.to_lowercase();
    sections
        .iter()
        .filter(|section| section.label.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(sections: &[SectionDescriptor]) -> Vec<&'static str> {
        sections.iter().map(|section| section.id).collect()
    }

    #[test]
    fn registry_order_is_fixed_across_locales() {
        let expected = vec!["about", "experience", "projects", "blog", "testimonials", "contact"];
        for locale in Locale::ALL {
            assert_eq!(ids(&list_sections(locale)), expected);
        }
        assert_eq!(list_sections(Locale::Id)[0].label, "Tentang");
        assert_eq!(list_sections(Locale::En)[0].label, "About");
    }

    #[test]
    fn filter_ignores_case() {
        let sections = list_sections(Locale::En);
        assert_eq!(
            filter_sections(&sections, "ABOUT"),
            filter_sections(&sections, "about")
        );
        assert_eq!(ids(&filter_sections(&sections, "ABOUT")), vec!["about"]);
    }

    #[test]
    fn empty_query_returns_whole_registry() {
        let sections = list_sections(Locale::Id);
        assert_eq!(filter_sections(&sections, ""), sections);
    }

    #[test]
    fn substring_matches_keep_registry_order() {
        let sections = list_sections(Locale::En);
        assert_eq!(
            ids(&filter_sections(&sections, "o")),
            vec!["about", "projects", "blog", "testimonials", "contact"]
        );
        assert!(filter_sections(&sections, "zzz").is_empty());
    }
}
