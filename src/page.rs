use dioxus::prelude::*;

use crate::clipboard::CodeBlock;
use crate::command_palette::{use_palette_shortcut, CommandPaletteOverlay};
use crate::contact::ContactSection;
use crate::date::current_year;
use crate::i18n::{self, text, Locale, UiKey};
use crate::navigation::{NavigationController, Overlays, WebViewport};
use crate::profile::{format_post_date, profile, SkillIcon, SocialIcon};
use crate::sections::{list_sections, HOME_ID};

fn go_to(mut overlays: Signal<Overlays>, id: &str) {
    NavigationController::new(WebViewport).navigate_to(id, &mut overlays.write());
}

fn social_glyph(icon: SocialIcon) -> &'static str {
    match icon {
        SocialIcon::Github => "⌥",
        SocialIcon::Linkedin => "in",
        SocialIcon::Mail => "✉",
    }
}

#[component]
pub fn Section(
    id: &'static str,
    title: &'static str,
    subtitle: &'static str,
    children: Element,
) -> Element {
    rsx! {
        section { id: "{id}", class: "section",
            div { class: "section-head",
                h2 { class: "section-title", "{title}" }
                p { class: "section-subtitle", "{subtitle}" }
            }
            {children}
        }
    }
}

#[component]
pub fn GlassCard(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "glass card {class}", {children} }
    }
}

#[component]
pub fn Pill(children: Element) -> Element {
    rsx! {
        span { class: "pill", {children} }
    }
}

#[component]
pub fn SocialLinks() -> Element {
    rsx! {
        div { class: "social-row",
            for social in profile().socials.iter() {
                a {
                    key: "{social.label}",
                    href: "{social.href}",
                    target: "_blank",
                    rel: "noreferrer",
                    class: "social-link",
                    aria_label: "{social.label}",
                    span { class: "social-icon", "{social_glyph(social.icon)}" }
                    "{social.label}"
                }
            }
        }
    }
}

#[component]
fn NavBar(overlays: Signal<Overlays>, locale: Signal<Locale>) -> Element {
    let active = locale();
    let items = list_sections(active);
    let menu_open = overlays.read().menu_open;
    let mut overlays = overlays;
    let mut locale = locale;

    rsx! {
        header { class: "navbar glass",
            button {
                r#type: "button",
                class: "brand",
                onclick: move |_| go_to(overlays, HOME_ID),
                span { class: "brand-mark", "◆" }
                "{profile().first_name()}"
            }
            nav { class: "nav-links",
                for item in items.iter().copied() {
                    button {
                        key: "{item.id}",
                        r#type: "button",
                        class: "nav-link",
                        onclick: move |_| go_to(overlays, item.id),
                        "{item.label}"
                    }
                }
            }
            div { class: "nav-actions",
                button {
                    r#type: "button",
                    class: "nav-chip",
                    title: "Ctrl/Cmd + K",
                    onclick: move |_| overlays.write().palette.open(),
                    span { "⌕" }
                    span { class: "kbd", "⌘K" }
                }
                button {
                    r#type: "button",
                    class: "nav-chip",
                    aria_label: "Toggle language",
                    onclick: move |_| locale.set(active.toggled()),
                    "{active.badge()}"
                }
                button {
                    r#type: "button",
                    class: "nav-chip menu-toggle",
                    aria_label: "Menu",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| overlays.write().toggle_menu(),
                    if menu_open { "✕" } else { "☰" }
                }
            }
        }
        if menu_open {
            div { class: "drawer glass",
                for item in items.iter().copied() {
                    button {
                        key: "drawer-{item.id}",
                        r#type: "button",
                        class: "drawer-link",
                        onclick: move |_| go_to(overlays, item.id),
                        "{item.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn Hero(overlays: Signal<Overlays>, locale: Locale) -> Element {
    let data = profile();
    rsx! {
        section { id: HOME_ID, class: "hero",
            div { class: "hero-copy",
                Pill {
                    span { class: "pulse-dot" }
                    "{text(locale, UiKey::Available)}"
                }
                h1 { class: "hero-title", "{data.name}" }
                p { class: "hero-lead", "{data.role} · {data.tagline}" }
                div { class: "hero-actions",
                    button {
                        r#type: "button",
                        class: "button-gradient",
                        onclick: move |_| go_to(overlays, "projects"),
                        "{text(locale, UiKey::SeeProjects)}"
                    }
                    button {
                        r#type: "button",
                        class: "button-ghost",
                        onclick: move |_| go_to(overlays, "contact"),
                        "{text(locale, UiKey::ContactMe)}"
                    }
                }
                SocialLinks {}
            }
            div { class: "hero-side",
                GlassCard {
                    div { class: "badge-card",
                        span { class: "badge-line", "⌖ {data.location}" }
                        span { class: "badge-name", "{data.name}" }
                        span { class: "badge-role", "{data.role}" }
                    }
                }
                GlassCard {
                    p { class: "muted", "{text(locale, UiKey::Preview)}" }
                    CodeBlock {
                        code: data.quick_start(),
                        lang: Some("bash".to_string()),
                        locale,
                    }
                }
            }
        }
    }
}

#[component]
fn About(locale: Locale) -> Element {
    let data = profile();
    let (first, second) = match locale {
        Locale::Id => (
            format!(
                "Saya {}, {} yang fokus pada antarmuka cepat, aksesibel, dan mudah dirawat.",
                data.name, data.role
            ),
            "Senang bekerja lintas tim, dari desain hingga rilis, dengan perhatian pada performa dan detail.".to_string(),
        ),
        Locale::En => (
            format!(
                "I'm {}, a {} focused on fast, accessible and maintainable interfaces.",
                data.name, data.role
            ),
            "I enjoy working across teams, from design to release, with care for performance and detail.".to_string(),
        ),
    };
    let core_stack = [
        "React / Next.js",
        "TypeScript / Node",
        "Tailwind / Motion",
        "Postgres / Prisma",
    ];

    rsx! {
        Section {
            id: "about",
            title: text(locale, UiKey::AboutTitle),
            subtitle: text(locale, UiKey::AboutSub),
            div { class: "grid three",
                GlassCard { class: "span-two",
                    p { class: "body-text", "{first}" }
                    p { class: "body-text", "{second}" }
                    h3 { class: "card-title", "{text(locale, UiKey::SkillsTitle)}" }
                    p { class: "muted skills-sub", "{text(locale, UiKey::SkillsSub)}" }
                    div { class: "chip-row",
                        for skill in data.skills.iter() {
                            span { key: "{skill}", class: "chip",
                                span { class: "chip-icon", "{SkillIcon::for_skill(skill).glyph()}" }
                                "{skill}"
                            }
                        }
                    }
                }
                div { class: "stack",
                    GlassCard {
                        h3 { class: "card-title", "Core Stack" }
                        ul { class: "plain-list",
                            for entry in core_stack {
                                li { key: "{entry}", "{entry}" }
                            }
                        }
                    }
                    GlassCard {
                        h3 { class: "card-title", "{text(locale, UiKey::NavContact)}" }
                        div { class: "info-list",
                            span { "✉ {data.email}" }
                            span { "☏ {data.phone}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ExperienceTimeline(locale: Locale) -> Element {
    rsx! {
        Section {
            id: "experience",
            title: text(locale, UiKey::ExpTitle),
            subtitle: text(locale, UiKey::ExpSub),
            ol { class: "timeline",
                for job in profile().experience.iter() {
                    li { key: "{job.company}", class: "timeline-item",
                        span { class: "timeline-dot" }
                        GlassCard {
                            div { class: "timeline-head",
                                h3 { class: "card-title", "{job.role} · {job.company}" }
                                span { class: "muted", "{job.period}" }
                            }
                            ul { class: "bullet-list",
                                for point in job.points.iter() {
                                    li { key: "{point}", "{point}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Projects(locale: Locale) -> Element {
    rsx! {
        Section {
            id: "projects",
            title: text(locale, UiKey::ProjTitle),
            subtitle: text(locale, UiKey::ProjSub),
            div { class: "grid three",
                for project in profile().projects.iter() {
                    GlassCard { key: "{project.title}", class: "project",
                        h3 { class: "card-title", "{project.title}" }
                        p { class: "body-text", "{project.description}" }
                        div { class: "chip-row",
                            for tag in project.tags.iter() {
                                span { key: "{tag}", class: "chip small", "{tag}" }
                            }
                        }
                        div { class: "project-links",
                            a { href: "{project.link}", target: "_blank", rel: "noreferrer", "Live ↗" }
                            a { href: "{project.repo}", target: "_blank", rel: "noreferrer", "Code ↗" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Blog(locale: Locale) -> Element {
    let posts = profile().posts_by_date();
    rsx! {
        Section {
            id: "blog",
            title: text(locale, UiKey::BlogTitle),
            subtitle: text(locale, UiKey::BlogSub),
            div { class: "grid three",
                for post in posts {
                    GlassCard { key: "{post.slug}", class: "post",
                        div { class: "post-meta",
                            span { class: "muted", "{format_post_date(post.date, locale)}" }
                            span { class: "locale-badge", "{locale.badge()}" }
                        }
                        h3 { class: "card-title", "{post.title.pick(locale)}" }
                        p { class: "body-text", "{post.excerpt.pick(locale)}" }
                        div { class: "chip-row",
                            for tag in post.tags.iter() {
                                span { key: "{tag}", class: "chip small", "#{tag}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Testimonials(locale: Locale) -> Element {
    rsx! {
        Section {
            id: "testimonials",
            title: text(locale, UiKey::TestiTitle),
            subtitle: text(locale, UiKey::TestiSub),
            div { class: "grid two",
                for testimonial in profile().testimonials.iter() {
                    GlassCard { key: "{testimonial.name}",
                        blockquote { class: "quote", "“{testimonial.quote}”" }
                        div { class: "quote-author",
                            span { class: "badge-name", "{testimonial.name}" }
                            span { class: "muted", "{testimonial.role}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Footer(overlays: Signal<Overlays>, locale: Locale) -> Element {
    let line = i18n::footer(current_year(), profile().name);
    rsx! {
        footer { class: "footer",
            span { class: "muted", "{line}" }
            span { class: "footer-hint",
                span { class: "kbd", "Ctrl/Cmd" }
                " + "
                span { class: "kbd", "K" }
            }
            button {
                r#type: "button",
                class: "button-ghost small",
                onclick: move |_| go_to(overlays, HOME_ID),
                "↑ {text(locale, UiKey::BackToTop)}"
            }
        }
    }
}

#[component]
pub fn Portfolio() -> Element {
    let locale = use_signal(Locale::default);
    let overlays = use_signal(Overlays::default);
    use_palette_shortcut(overlays);
    let active = locale();

    rsx! {
        document::Title { "{profile().name} | {profile().role}" }
        div { class: "page", lang: "{active.code()}",
            div { class: "backdrop-blob one" }
            div { class: "backdrop-blob two" }
            NavBar { overlays, locale }
            main { class: "content",
                Hero { overlays, locale: active }
                About { locale: active }
                ExperienceTimeline { locale: active }
                Projects { locale: active }
                Blog { locale: active }
                Testimonials { locale: active }
                ContactSection { locale: active }
            }
            Footer { overlays, locale: active }
            CommandPaletteOverlay { overlays, locale: active }
        }
    }
}
