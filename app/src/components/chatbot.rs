use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::chat::{ChatAction, Conversation, Sender};
use crate::config::AppConfig;
use crate::router::ChoiceOption;

#[derive(Properties, PartialEq)]
pub struct ChatbotProps {
    pub chat: UseReducerHandle<Conversation>,
}

#[function_component(Chatbot)]
pub fn chatbot(props: &ChatbotProps) -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let chat = props.chat.clone();
    let end_ref = use_node_ref();

    // Keep the newest message in view.
    {
        let end_ref = end_ref.clone();
        let deps = (chat.messages.len(), chat.typing(), chat.open);
        use_effect_with(deps, move |_| {
            if let Some(el) = end_ref.cast::<web_sys::Element>() {
                el.scroll_into_view();
            }
            || ()
        });
    }

    let on_open = {
        let chat = chat.clone();
        Callback::from(move |_| chat.dispatch(ChatAction::Open))
    };
    let on_close = {
        let chat = chat.clone();
        Callback::from(move |_| chat.dispatch(ChatAction::Close))
    };

    // The reducer drops a Reply that does not match the accepted choice,
    // so extra clicks within one frame are harmless.
    let on_option = {
        let chat = chat.clone();
        let typing_ms = config.typing_delay_ms;
        Callback::from(move |opt: ChoiceOption| {
            chat.dispatch(ChatAction::Choose(opt.clone()));
            let chat = chat.clone();
            Timeout::new(typing_ms, move || chat.dispatch(ChatAction::Reply(opt))).forget();
        })
    };

    if !chat.open {
        return html! {
            <button class="chat-launcher pop-in" onclick={on_open}>
                <span class="launcher-icon">{"🤖"}<span class="online-dot" /></span>
                <span class="launcher-text">
                    <span class="launcher-kicker">{"Ai Triage"}</span>
                    <span class="launcher-title">{"Start Assessment"}</span>
                </span>
            </button>
        };
    }

    let messages = chat.messages.iter().map(|m| {
        let is_user = m.sender == Sender::User;
        html! {
            <div key={m.id} class={classes!("msg-row", if is_user { "from-user" } else { "from-bot" })}>
                if !is_user {
                    <div class="bot-avatar">{"🤖"}</div>
                }
                <div class={classes!("bubble", if is_user { "bubble-user" } else { "bubble-bot" })}>
                    { &m.text }
                </div>
            </div>
        }
    });

    let options = chat.available_options().iter().map(|opt| {
        let on_option = on_option.clone();
        let picked = opt.clone();
        html! {
            <button key={opt.value.clone()} class="chip" onclick={Callback::from(move |_| on_option.emit(picked.clone()))}>
                { &opt.label }{" →"}
            </button>
        }
    });

    html! {
        <div class="chat-panel pop-in">
            <div class="chat-head">
                <div class="chat-id">
                    <div class="chat-avatar">{"🤖"}</div>
                    <div>
                        <h3>{ &config.bot_name }</h3>
                        <p class="chat-sub">{"✨ Smart Triage"}</p>
                    </div>
                </div>
                <button class="icon-btn light" onclick={on_close}>{"✕"}</button>
            </div>

            <div class="chat-log">
                { for messages }
                if chat.typing() {
                    <div class="msg-row from-bot">
                        <div class="bot-avatar">{"🤖"}</div>
                        <div class="bubble bubble-bot typing">
                            <span class="dot" /><span class="dot" /><span class="dot" />
                        </div>
                    </div>
                }
                <div ref={end_ref} />
            </div>

            <div class="chat-options">
                { for options }
            </div>
        </div>
    }
}
