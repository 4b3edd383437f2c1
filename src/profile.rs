use std::cmp::Ordering;

use crate::i18n::{Locale, Localized};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
    Github,
    Linkedin,
    Mail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkillIcon {
    Sparkles,
    Layers,
    Code,
    Wind,
    Film,
    Server,
    Database,
    Boxes,
    Globe,
    Cpu,
}

impl SkillIcon {
    /// Resolves a skill label to its icon; unknown skills get the generic chip.
    pub fn for_skill(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "react" => SkillIcon::Sparkles,
            "next.js" | "nextjs" => SkillIcon::Layers,
            "typescript" => SkillIcon::Code,
            "tailwind" | "tailwindcss" => SkillIcon::Wind,
            "framer motion" => SkillIcon::Film,
            "node" | "node.js" | "nodejs" => SkillIcon::Server,
            "postgresql" => SkillIcon::Database,
            "prisma" | "docker" => SkillIcon::Boxes,
            "graphql" => SkillIcon::Globe,
            _ => SkillIcon::Cpu,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SkillIcon::Sparkles => "✦",
            SkillIcon::Layers => "◫",
            SkillIcon::Code => "</>",
            SkillIcon::Wind => "≋",
            SkillIcon::Film => "▶",
            SkillIcon::Server => "▤",
            SkillIcon::Database => "⛁",
            SkillIcon::Boxes => "▣",
            SkillIcon::Globe => "◍",
            SkillIcon::Cpu => "⌬",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Social {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: SocialIcon,
}

#[derive(Clone, Debug)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Clone, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: &'static str,
    pub repo: &'static str,
}

#[derive(Clone, Debug)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
}

#[derive(Clone, Debug)]
pub struct Post {
    pub slug: &'static str,
    pub title: Localized<&'static str>,
    pub date: &'static str,
    pub tags: &'static [&'static str],
    pub excerpt: Localized<&'static str>,
}

#[derive(Debug)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub socials: &'static [Social],
    pub skills: &'static [&'static str],
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    pub testimonials: &'static [Testimonial],
    pub posts: &'static [Post],
}

impl Profile {
    pub fn first_name(&self) -> &'static str {
        self.name.split_whitespace().next().unwrap_or("Brand")
    }

    /// Posts ordered newest first.
    pub fn posts_by_date(&self) -> Vec<&'static Post> {
        let mut posts: Vec<&'static Post> = self.posts.iter().collect();
        posts.sort_by(|a, b| compare_dates(b.date, a.date));
        posts
    }

    pub fn quick_start(&self) -> String {
        format!(
            "# quick start\n{QUICK_START_INSTALL}$ echo \"hello, i'm {}\"\n$ printf \"stack: %s\\n\" \"React/Next/TS/Tailwind/Node\"",
            self.name
        )
    }
}

const QUICK_START_INSTALL: &str =
    "npx create-next-app my-portfolio --ts\ncd my-portfolio\nnpm i framer-motion lucide-react\n";

static PROFILE: Profile = Profile {
    name: "Daril Pratomo Sriramdanu",
    role: "Software Engineer & Web Developer",
    tagline: "Menulis kode bersih, scalable, dan berperforma tinggi.",
    location: "Jakarta, Indonesia",
    email: "kamu@example.com",
    phone: "+62 812-3456-7890",
    socials: &[
        Social {
            label: "GitHub",
            href: "https://github.com/username",
            icon: SocialIcon::Github,
        },
        Social {
            label: "LinkedIn",
            href: "https://linkedin.com/in/username",
            icon: SocialIcon::Linkedin,
        },
        Social {
            label: "Email",
            href: "mailto:kamu@example.com",
            icon: SocialIcon::Mail,
        },
    ],
    skills: &[
        "React",
        "Next.js",
        "TypeScript",
        "TailwindCSS",
        "Framer Motion",
        "Node.js",
        "PostgreSQL",
        "Prisma",
        "GraphQL",
        "Docker",
        "AWS",
    ],
    experience: &[
        Experience {
            company: "PT. Hyper Kreatif",
            role: "Senior Frontend Engineer",
            period: "2023 — Sekarang",
            points: &[
                "Leading design system berbasis Tailwind.",
                "Optimasi Web Vitals (LCP/CLS) hingga 40%.",
                "Membangun komponen reusable + Storybook.",
            ],
        },
        Experience {
            company: "Tech Nusantara",
            role: "Frontend Engineer",
            period: "2021 — 2023",
            points: &[
                "Realtime dashboard (WebSocket).",
                "CI/CD GitHub Actions + Docker.",
                "Eksperimen UX A/B berkelanjutan.",
            ],
        },
    ],
    projects: &[
        Project {
            title: "Aurora Analytics",
            description: "Analitik modern: interactive charts & minimal ETL.",
            tags: &["Next.js", "PostgreSQL", "Recharts"],
            link: "https://example.com",
            repo: "https://github.com/username/aurora",
        },
        Project {
            title: "Nimbus UI Kit",
            description: "UI components reusable (Tailwind + Radix).",
            tags: &["Tailwind", "Radix"],
            link: "https://example.com",
            repo: "https://github.com/username/nimbus",
        },
        Project {
            title: "Atlas CMS",
            description: "Headless CMS: GraphQL API + Markdown editor.",
            tags: &["GraphQL", "TypeScript"],
            link: "https://example.com",
            repo: "https://github.com/username/atlas-cms",
        },
    ],
    testimonials: &[
        Testimonial {
            name: "Andi Pratama",
            role: "Head of Product, Tech Nusantara",
            quote: "Kualitas eksekusi dan detail UI di atas rata-rata.",
        },
        Testimonial {
            name: "Bunga Sari",
            role: "Design Lead, PT. Hyper Kreatif",
            quote: "Desain kompleks jadi interaksi yang natural.",
        },
    ],
    posts: &[
        Post {
            slug: "mendesain-ux-cepat",
            title: Localized::new([
                "Mendesain UX yang Cepat & Elegan",
                "Designing Fast, Elegant UX",
            ]),
            date: "2025-06-21",
            tags: &["UX", "Performance"],
            excerpt: Localized::new([
                "Prinsip sederhana menurunkan beban kognitif & meningkatkan LCP.",
                "Simple principles to lower cognitive load & improve LCP.",
            ]),
        },
        Post {
            slug: "nextjs-streaming",
            title: Localized::new(["Streaming UI di Next.js", "UI Streaming in Next.js"]),
            date: "2025-05-05",
            tags: &["Next.js", "React"],
            excerpt: Localized::new([
                "Membagi payload & perceived performance.",
                "Split payload & perceived performance.",
            ]),
        },
        Post {
            slug: "framer-motion-recipes",
            title: Localized::new([
                "Resep Animasi Framer Motion",
                "Framer Motion Animation Recipes",
            ]),
            date: "2025-03-18",
            tags: &["Animation", "Framer Motion"],
            excerpt: Localized::new(["Pola animasi reusable.", "Reusable animation patterns."]),
        },
    ],
};

pub fn profile() -> &'static Profile {
    &PROFILE
}

fn compare_dates(left: &str, right: &str) -> Ordering {
    parse_date(left).cmp(&parse_date(right))
}

fn parse_date(date: &str) -> (i32, i32, i32) {
    let parts: Vec<&str> = date.split('-').collect();
    let year = parts.first().and_then(|v| v.parse().ok()).unwrap_or(0);
    let month = parts.get(1).and_then(|v| v.parse().ok()).unwrap_or(0);
    let day = parts.get(2).and_then(|v| v.parse().ok()).unwrap_or(0);
    (year, month, day)
}

/// Short date as the browser's `id-ID` / `en-US` locale formats render it.
pub fn format_post_date(date: &str, locale: Locale) -> String {
    let (year, month, day) = parse_date(date);
    let month_label = match locale {
        Locale::Id => match month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "Mei",
            6 => "Jun",
            7 => "Jul",
            8 => "Agu",
            9 => "Sep",
            10 => "Okt",
            11 => "Nov",
            _ => "Des",
        },
        Locale::En => match month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            _ => "Dec",
        },
    };
    match locale {
        Locale::Id => format!("{day:02} {month_label} {year}"),
        Locale::En => format!("{month_label} {day:02}, {year}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn posts_are_sorted_newest_first() {
        let slugs: Vec<&str> = profile().posts_by_date().iter().map(|p| p.slug).collect();
        assert_eq!(
            slugs,
            vec!["mendesain-ux-cepat", "nextjs-streaming", "framer-motion-recipes"]
        );
    }

    #[test]
    fn post_fields_resolve_per_locale() {
        let post = &profile().posts[1];
        assert_eq!(post.title.pick(Locale::Id), "Streaming UI di Next.js");
        assert_eq!(post.title.pick(Locale::En), "UI Streaming in Next.js");
        for post in profile().posts {
            for locale in Locale::ALL {
                assert!(!post.title.pick(locale).is_empty());
                assert!(!post.excerpt.pick(locale).is_empty());
            }
        }
    }

    #[test]
    fn formats_dates_per_locale() {
        assert_eq!(format_post_date("2025-06-21", Locale::En), "Jun 21, 2025");
        assert_eq!(format_post_date("2025-08-05", Locale::Id), "05 Agu 2025");
    }

    #[test]
    fn skill_icons_are_case_insensitive_with_fallback() {
        assert_eq!(SkillIcon::for_skill("Next.js"), SkillIcon::Layers);
        assert_eq!(SkillIcon::for_skill("TAILWINDCSS"), SkillIcon::Wind);
        assert_eq!(SkillIcon::for_skill("AWS"), SkillIcon::Cpu);
        assert_eq!(SkillIcon::for_skill("Rust"), SkillIcon::Cpu);
    }

    #[test]
    fn quick_start_mentions_the_owner() {
        let snippet = profile().quick_start();
        assert!(snippet.starts_with("# quick start\nnpx create-next-app"));
        assert!(snippet.contains("hello, i'm Daril Pratomo Sriramdanu"));
        assert_eq!(profile().first_name(), "Daril");
    }
}
