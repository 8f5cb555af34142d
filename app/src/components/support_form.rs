use std::rc::Rc;

use gloo::console::log;
use gloo::timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::AppConfig;
use crate::dom;
use crate::form::{Field, FormPhase, SupportForm};
use crate::registry::Submission;
use crate::router::FormType;

#[derive(Properties, PartialEq)]
pub struct SupportFormProps {
    pub form_type: FormType,
    pub category: String,
    pub on_submitted: Callback<Submission>,
}

#[function_component(SupportFormView)]
pub fn support_form_view(props: &SupportFormProps) -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let form = {
        let form_type = props.form_type;
        let category = props.category.clone();
        use_state(move || SupportForm::new(form_type, &category))
    };
    let missing = use_state(Vec::<Field>::new);

    let on_input = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.draft.set(field, value);
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let missing = missing.clone();
        let on_submitted = props.on_submitted.clone();
        let delay = config.submit_delay_ms;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.begin_submit(Some(dom::today_ymd())) {
                Ok(submission) => {
                    missing.set(Vec::new());
                    form.set(next.clone());
                    let form = form.clone();
                    let on_submitted = on_submitted.clone();
                    Timeout::new(delay, move || {
                        next.finish();
                        form.set(next);
                        log!(format!(
                            "careconnect: {} request received ({})",
                            submission.form_type, submission.category
                        ));
                        on_submitted.emit(submission);
                    })
                    .forget();
                }
                Err(fields) => missing.set(fields),
            }
        })
    };

    let on_again = {
        let form = form.clone();
        Callback::from(move |_| {
            let mut next = (*form).clone();
            next.reset();
            form.set(next);
        })
    };

    if form.phase == FormPhase::Received {
        return html! {
            <div class="form-card received pop-in">
                <div class="check">{"✓"}</div>
                <h3>{"Request Received"}</h3>
                <p>{"Thank you. Our team has been notified. We will contact you within 2 hours."}</p>
                <button class="link-btn" onclick={on_again}>{"Submit another request"}</button>
            </div>
        };
    }

    let submitting = form.phase == FormPhase::Submitting;
    let ft = form.form_type;
    let tone = match ft {
        FormType::Patient => "tone-patient",
        FormType::Volunteer => "tone-volunteer",
    };

    let text_input = |field: Field, kind: &'static str, icon: &'static str| {
        let cb = on_input(field);
        html! {
            <div class="field">
                <label>{ field.label(ft) }</label>
                <div class="input-wrap">
                    <span class="input-icon">{ icon }</span>
                    <input
                        required=true
                        type={kind}
                        disabled={submitting}
                        placeholder={field.placeholder(ft)}
                        value={form.draft.get(field).to_string()}
                        oninput={Callback::from(move |e: InputEvent| {
                            cb.emit(e.target_unchecked_into::<HtmlInputElement>().value());
                        })}
                    />
                </div>
            </div>
        }
    };

    let details_cb = on_input(Field::Details);

    html! {
        <div class="form-card fade-up">
            <div class={classes!("form-head", tone)}>
                <h2>{ ft.title() }</h2>
                if !form.category.is_empty() {
                    <div class="badge">{"Category: "}<span class="cap">{ &form.category }</span></div>
                }
            </div>

            <form class="form-body" onsubmit={on_submit}>
                { text_input(Field::FullName, "text", "👤") }
                { text_input(Field::Phone, "tel", "📞") }
                { text_input(Field::Location, "text", "📍") }

                <div class="field">
                    <label>{ Field::Details.label(ft) }</label>
                    <div class="input-wrap">
                        <span class="input-icon top">{"📝"}</span>
                        <textarea
                            required=true
                            rows="3"
                            disabled={submitting}
                            placeholder={Field::Details.placeholder(ft)}
                            value={form.draft.details.clone()}
                            oninput={Callback::from(move |e: InputEvent| {
                                details_cb.emit(e.target_unchecked_into::<HtmlTextAreaElement>().value());
                            })}
                        />
                    </div>
                </div>

                if !missing.is_empty() {
                    <div class="form-error">
                        { format!(
                            "Please fill in: {}",
                            missing.iter().map(|f| f.label(ft)).collect::<Vec<_>>().join(", ")
                        ) }
                    </div>
                }

                <button type="submit" class={classes!("submit", submitting.then_some("busy"))} disabled={submitting}>
                    { if submitting { "Submitting..." } else { "Submit Request" } }
                </button>
            </form>
        </div>
    }
}
