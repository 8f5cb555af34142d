// src/main.rs: CareConnect (Rust + Yew + WASM)

mod chat;
mod components;
mod config;
mod dom;
mod form;
mod registry;
mod router;
mod tagger;
mod theme;

use std::rc::Rc;

use gloo::console::{error, log};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use chat::{ChatAction, Conversation};
use components::{
    AdminDashboard, Chatbot, Hero, HowItWorks, Layout, SupportFormView, Testimonials,
};
use config::AppConfig;
use registry::{Registry, RegistryAction, Submission};

/// Element the page scrolls to once the assistant picks a form.
const SUPPORT_AREA_ID: &str = "support-interaction";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Home,
    Admin,
}

#[function_component(App)]
fn app() -> Html {
    let config: Rc<AppConfig> = use_memo((), |_| config::load_config());
    let theme = use_state(theme::load_theme);
    let view = use_state(|| View::Home);
    let registry = use_reducer(Registry::default);
    let chat = {
        let bot_name = config.bot_name.clone();
        use_reducer(move || Conversation::new(&bot_name))
    };

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |next: View| {
            log!(format!("careconnect: view -> {next:?}"));
            view.set(next);
            dom::scroll_to_top();
        })
    };

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            theme::save_theme(next);
            theme.set(next);
        })
    };

    // "Get Help Now" and the hero buttons all lead to the assistant.
    let on_open_chat = {
        let chat = chat.clone();
        let view = view.clone();
        Callback::from(move |_| {
            if *view != View::Home {
                view.set(View::Home);
            }
            chat.dispatch(ChatAction::Open);
        })
    };

    // Terminal reply -> handoff delay -> HandOff. The effect only re-runs
    // when the recommendation changes, and HandOff applies once.
    {
        let chat = chat.clone();
        let handoff_ms = config.handoff_delay_ms;
        let pending = chat.recommendation.clone();
        use_effect_with(pending, move |rec| {
            if rec.is_some() && chat.handed_off().is_none() {
                Timeout::new(handoff_ms, move || chat.dispatch(ChatAction::HandOff)).forget();
            }
            || ()
        });
    }

    let recommendation = chat.handed_off().cloned();

    // Bring the selected form into view once it appears.
    {
        let scroll_ms = config.scroll_delay_ms;
        use_effect_with(recommendation.clone(), move |rec| {
            if let Some(r) = rec {
                log!(format!(
                    "careconnect: recommending {} form ({})",
                    r.form_type, r.category
                ));
                Timeout::new(scroll_ms, move || {
                    if let Err(e) = dom::scroll_into_view(SUPPORT_AREA_ID) {
                        error!(format!("careconnect: scroll failed: {e}"));
                    }
                })
                .forget();
            }
            || ()
        });
    }

    let on_submitted = {
        let registry = registry.clone();
        Callback::from(move |s: Submission| registry.dispatch(RegistryAction::Submit(s)))
    };

    let body = match *view {
        View::Admin => html! { <AdminDashboard registry={registry.clone()} /> },
        View::Home => html! {
            <>
                <Hero on_start={on_open_chat.clone()} />

                <div id={SUPPORT_AREA_ID} class="support-area">
                    {
                        match &recommendation {
                            Some(r) => html! {
                                <SupportFormView
                                    key={format!("{}:{}", r.form_type, r.category)}
                                    form_type={r.form_type}
                                    category={r.category.clone()}
                                    on_submitted={on_submitted.clone()}
                                />
                            },
                            None => html! {
                                <div class="hint">
                                    <p>{"Use the AI Assistant to get started"}</p>
                                </div>
                            },
                        }
                    }
                </div>

                <HowItWorks />
                <Testimonials />

                <Chatbot chat={chat.clone()} />
            </>
        },
    };

    html! {
        <ContextProvider<Rc<AppConfig>> context={config.clone()}>
            <Layout
                theme={*theme}
                view={*view}
                on_navigate={on_navigate}
                on_toggle_theme={on_toggle_theme}
                on_get_help={on_open_chat}
            >
                { body }
            </Layout>
        </ContextProvider<Rc<AppConfig>>>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
