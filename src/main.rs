mod clipboard;
mod command_palette;
mod config;
mod contact;
mod date;
mod i18n;
mod navigation;
mod page;
mod preferences;
mod profile;
mod routes;
mod sections;
mod subscription;

fn main() {
    dioxus::logger::initialize_default();
    preferences::bootstrap_theme();
    dioxus::launch(routes::App);
}
