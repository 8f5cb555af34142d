use yew::prelude::*;

use crate::theme::Theme;
use crate::View;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub theme: Theme,
    pub view: View,
    pub on_navigate: Callback<View>,
    pub on_toggle_theme: Callback<()>,
    pub on_get_help: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

const NAV_LINKS: &[(&str, View)] = &[
    ("Start Here", View::Home),
    ("Volunteer", View::Home),
    ("Resources", View::Home),
    ("Admin", View::Admin),
];

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let menu_open = use_state(|| false);

    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let nav_link = |label: &'static str, target: View, class: &'static str| {
        let on_navigate = props.on_navigate.clone();
        let menu_open = menu_open.clone();
        let active = props.view == target && target == View::Admin;
        html! {
            <a
                href="#"
                class={classes!(class, active.then_some("active"))}
                onclick={Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    menu_open.set(false);
                    on_navigate.emit(target);
                })}
            >
                { label }
            </a>
        }
    };

    let get_help = |class: &'static str| {
        let on_get_help = props.on_get_help.clone();
        let menu_open = menu_open.clone();
        html! {
            <button class={class} onclick={Callback::from(move |_| {
                menu_open.set(false);
                on_get_help.emit(());
            })}>
                {"Get Help Now"}
            </button>
        }
    };

    let theme_label = match props.theme {
        Theme::Light => "🌙",
        Theme::Dark => "☀️",
    };
    let on_theme = props.on_toggle_theme.reform(|_: MouseEvent| ());

    let home = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(View::Home);
        })
    };

    html! {
        <div class={classes!("shell", props.theme.class())}>
            <div class="backdrop">
                <div class="blob blob-a" />
                <div class="blob blob-b" />
            </div>

            <header class="topbar">
                <div class="topbar-inner">
                    <a href="#" class="brand" onclick={home}>
                        <span class="brand-mark">{"❤"}</span>
                        <span class="brand-name">{"CareConnect"}</span>
                    </a>

                    <nav class="nav-desktop">
                        { for NAV_LINKS.iter().map(|(label, v)| nav_link(*label, *v, "nav-link")) }
                        <button class="icon-btn" title="Toggle theme" onclick={on_theme.clone()}>{ theme_label }</button>
                        { get_help("pill primary") }
                    </nav>

                    <div class="nav-mobile-controls">
                        <button class="icon-btn" title="Toggle theme" onclick={on_theme}>{ theme_label }</button>
                        <button class="icon-btn" onclick={on_menu}>
                            { if *menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>

                if *menu_open {
                    <div class="nav-mobile">
                        { for NAV_LINKS.iter().map(|(label, v)| nav_link(*label, *v, "nav-mobile-link")) }
                        { get_help("pill primary wide") }
                    </div>
                }
            </header>

            <main class="content">
                { props.children.clone() }
            </main>

            <footer class="footer">
                <div class="footer-inner">
                    <span class="footer-brand">{"♡ CareConnect"}</span>
                    <p class="small">{"© 2026 CareConnect NGO. connecting communities."}</p>
                </div>
            </footer>
        </div>
    }
}
