//! Locale selection and the UI string tables.
//!
//! Every [`UiKey`] resolves through an exhaustive `match` per locale, so a table
//! without a key does not compile.

pub const LOCALE_COUNT: usize = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Id,
    En,
}

impl Locale {
    #[cfg(test)]
    pub const ALL: [Locale; LOCALE_COUNT] = [Locale::Id, Locale::En];

    pub fn code(self) -> &'static str {
        match self {
            Locale::Id => "id",
            Locale::En => "en",
        }
    }

    pub fn badge(self) -> &'static str {
        match self {
            Locale::Id => "ID",
            Locale::En => "EN",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Locale::Id => Locale::En,
            Locale::En => Locale::Id,
        }
    }

    fn index(self) -> usize {
        match self {
            Locale::Id => 0,
            Locale::En => 1,
        }
    }
}

/// A value with one entry per supported locale, ordered `id`, `en`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Localized<T> {
    values: [T; LOCALE_COUNT],
}

impl<T: Copy> Localized<T> {
    pub const fn new(values: [T; LOCALE_COUNT]) -> Self {
        Self { values }
    }

    pub fn pick(&self, locale: Locale) -> T {
        self.values[locale.index()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UiKey {
    NavAbout,
    NavExperience,
    NavProjects,
    NavBlog,
    NavTestimonials,
    NavContact,
    Available,
    Preview,
    SeeProjects,
    ContactMe,
    AboutTitle,
    AboutSub,
    ExpTitle,
    ExpSub,
    ProjTitle,
    ProjSub,
    BlogTitle,
    BlogSub,
    SkillsTitle,
    SkillsSub,
    TestiTitle,
    TestiSub,
    ContactTitle,
    ContactSub,
    SendMsg,
    FormName,
    FormEmail,
    FormMessage,
    FormSend,
    FormSending,
    FormSent,
    FormFailed,
    ErrMissingName,
    ErrNameTooLong,
    ErrInvalidEmail,
    ErrMissingMessage,
    ErrMessageTooLong,
    Info,
    Collab,
    PaletteHint,
    PaletteEmpty,
    BackToTop,
    Copy,
    Copied,
    NotFound,
}

#[cfg(test)]
impl UiKey {
    pub const ALL: [UiKey; 45] = [
        UiKey::NavAbout,
        UiKey::NavExperience,
        UiKey::NavProjects,
        UiKey::NavBlog,
        UiKey::NavTestimonials,
        UiKey::NavContact,
        UiKey::Available,
        UiKey::Preview,
        UiKey::SeeProjects,
        UiKey::ContactMe,
        UiKey::AboutTitle,
        UiKey::AboutSub,
        UiKey::ExpTitle,
        UiKey::ExpSub,
        UiKey::ProjTitle,
        UiKey::ProjSub,
        UiKey::BlogTitle,
        UiKey::BlogSub,
        UiKey::SkillsTitle,
        UiKey::SkillsSub,
        UiKey::TestiTitle,
        UiKey::TestiSub,
        UiKey::ContactTitle,
        UiKey::ContactSub,
        UiKey::SendMsg,
        UiKey::FormName,
        UiKey::FormEmail,
        UiKey::FormMessage,
        UiKey::FormSend,
        UiKey::FormSending,
        UiKey::FormSent,
        UiKey::FormFailed,
        UiKey::ErrMissingName,
        UiKey::ErrNameTooLong,
        UiKey::ErrInvalidEmail,
        UiKey::ErrMissingMessage,
        UiKey::ErrMessageTooLong,
        UiKey::Info,
        UiKey::Collab,
        UiKey::PaletteHint,
        UiKey::PaletteEmpty,
        UiKey::BackToTop,
        UiKey::Copy,
        UiKey::Copied,
        UiKey::NotFound,
    ];
}

pub fn text(locale: Locale, key: UiKey) -> &'static str {
    match locale {
        Locale::Id => indonesian(key),
        Locale::En => english(key),
    }
}

pub fn footer(year: i32, name: &str) -> String {
    format!("© {year} {name}. Built for the web.")
}

fn indonesian(key: UiKey) -> &'static str {
    match key {
        UiKey::NavAbout => "Tentang",
        UiKey::NavExperience => "Pengalaman",
        UiKey::NavProjects => "Proyek",
        UiKey::NavBlog => "Blog",
        UiKey::NavTestimonials => "Testimoni",
        UiKey::NavContact => "Kontak",
        UiKey::Available => "Tersedia untuk freelance & remote",
        UiKey::Preview => "Jalankan perintah di bawah untuk mulai ✨",
        UiKey::SeeProjects => "Lihat Proyek",
        UiKey::ContactMe => "Hubungi Saya",
        UiKey::AboutTitle => "Tentang Saya",
        UiKey::AboutSub => "Ringkasan singkat, fokus pada hal teknis & dampak.",
        UiKey::ExpTitle => "Pengalaman",
        UiKey::ExpSub => "Perjalanan profesional & tanggung jawab.",
        UiKey::ProjTitle => "Proyek Terpilih",
        UiKey::ProjSub => "Beberapa karya yang paling relevan.",
        UiKey::BlogTitle => "Blog",
        UiKey::BlogSub => "Catatan teknis ringkas.",
        UiKey::SkillsTitle => "Keahlian",
        UiKey::SkillsSub => "Tooling & teknologi yang sering dipakai.",
        UiKey::TestiTitle => "Testimoni",
        UiKey::TestiSub => "Apa kata rekan & klien.",
        UiKey::ContactTitle => "Kontak",
        UiKey::ContactSub => "Kirim email atau DM untuk kolaborasi.",
        UiKey::SendMsg => "Kirim Pesan",
        UiKey::FormName => "Nama",
        UiKey::FormEmail => "Email",
        UiKey::FormMessage => "Pesan",
        UiKey::FormSend => "Kirim",
        UiKey::FormSending => "Mengirim...",
        UiKey::FormSent => "Terkirim!",
        UiKey::FormFailed => "Pesan gagal terkirim. Coba lagi sebentar lagi.",
        UiKey::ErrMissingName => "Nama wajib diisi.",
        UiKey::ErrNameTooLong => "Nama maksimal 80 karakter.",
        UiKey::ErrInvalidEmail => "Format email tidak valid.",
        UiKey::ErrMissingMessage => "Pesan wajib diisi.",
        UiKey::ErrMessageTooLong => "Pesan maksimal 2000 karakter.",
        UiKey::Info => "Informasi",
        UiKey::Collab => "Preferensi Kolaborasi",
        UiKey::PaletteHint => "Ketik untuk mencari bagian...",
        UiKey::PaletteEmpty => "Tidak ada hasil",
        UiKey::BackToTop => "Kembali ke atas",
        UiKey::Copy => "Salin",
        UiKey::Copied => "Tersalin",
        UiKey::NotFound => "Halaman tidak ditemukan",
    }
}

fn english(key: UiKey) -> &'static str {
    match key {
        UiKey::NavAbout => "About",
        UiKey::NavExperience => "Experience",
        UiKey::NavProjects => "Projects",
        UiKey::NavBlog => "Blog",
        UiKey::NavTestimonials => "Testimonials",
        UiKey::NavContact => "Contact",
        UiKey::Available => "Available for freelance & remote",
        UiKey::Preview => "Run the command below to get started ✨",
        UiKey::SeeProjects => "See Projects",
        UiKey::ContactMe => "Contact Me",
        UiKey::AboutTitle => "About Me",
        UiKey::AboutSub => "Short summary, focused on tech & impact.",
        UiKey::ExpTitle => "Experience",
        UiKey::ExpSub => "Professional journey & responsibilities.",
        UiKey::ProjTitle => "Selected Projects",
        UiKey::ProjSub => "Work I'm most proud of.",
        UiKey::BlogTitle => "Blog",
        UiKey::BlogSub => "Concise technical notes.",
        UiKey::SkillsTitle => "Skills",
        UiKey::SkillsSub => "Tooling & technologies I use often.",
        UiKey::TestiTitle => "Testimonials",
        UiKey::TestiSub => "What colleagues & clients say.",
        UiKey::ContactTitle => "Contact",
        UiKey::ContactSub => "Email or DM for collaboration.",
        UiKey::SendMsg => "Send a Message",
        UiKey::FormName => "Name",
        UiKey::FormEmail => "Email",
        UiKey::FormMessage => "Message",
        UiKey::FormSend => "Send",
        UiKey::FormSending => "Sending...",
        UiKey::FormSent => "Sent!",
        UiKey::FormFailed => "Your message could not be sent. Please try again shortly.",
        UiKey::ErrMissingName => "Please enter your name.",
        UiKey::ErrNameTooLong => "Name must be at most 80 characters.",
        UiKey::ErrInvalidEmail => "Please enter a valid email address.",
        UiKey::ErrMissingMessage => "Please write a message.",
        UiKey::ErrMessageTooLong => "Message must be at most 2000 characters.",
        UiKey::Info => "Information",
        UiKey::Collab => "Collaboration Preferences",
        UiKey::PaletteHint => "Type to search sections...",
        UiKey::PaletteEmpty => "No results",
        UiKey::BackToTop => "Back to top",
        UiKey::Copy => "Copy",
        UiKey::Copied => "Copied",
        UiKey::NotFound => "Page not found",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn defined_keys(locale: Locale) -> HashSet<UiKey> {
        UiKey::ALL
            .iter()
            .copied()
            .filter(|key| !text(locale, *key).trim().is_empty())
            .collect()
    }

    #[test]
    fn every_locale_defines_the_same_keys() {
        let expected: HashSet<UiKey> = UiKey::ALL.iter().copied().collect();
        assert_eq!(expected.len(), UiKey::ALL.len());
        for locale in Locale::ALL {
            assert_eq!(defined_keys(locale), expected, "locale {}", locale.code());
        }
    }

    #[test]
    fn toggling_alternates_between_locales() {
        assert_eq!(Locale::default(), Locale::Id);
        assert_eq!(Locale::Id.toggled(), Locale::En);
        assert_eq!(Locale::Id.toggled().toggled(), Locale::Id);
    }

    #[test]
    fn localized_values_follow_locale_order() {
        let greeting = Localized::new(["Halo", "Hello"]);
        assert_eq!(greeting.pick(Locale::Id), "Halo");
        assert_eq!(greeting.pick(Locale::En), "Hello");
    }

    #[test]
    fn footer_mentions_year_and_name() {
        assert_eq!(footer(2025, "Daril"), "© 2025 Daril. Built for the web.");
    }
}
