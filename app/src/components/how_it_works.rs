use yew::prelude::*;

struct Step {
    icon: &'static str,
    title: &'static str,
    desc: &'static str,
    tone: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        icon: "💬",
        title: "Chat with EaseBot",
        desc: "Answer 2 simple questions to help us understand if you need medical, logistical, or emotional support.",
        tone: "tone-indigo",
    },
    Step {
        icon: "📋",
        title: "Smart Matching",
        desc: "Our AI instantly matches your request with the right specialist or community volunteer nearby.",
        tone: "tone-blue",
    },
    Step {
        icon: "🤝",
        title: "Get Connected",
        desc: "A verified volunteer contacts you within 2 hours to provide the specific help you requested.",
        tone: "tone-emerald",
    },
];

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section class="band band-white">
            <div class="band-inner">
                <div class="section-head">
                    <h2>{"How CareConnect Works"}</h2>
                    <p class="lead">
                        {"We've removed the red tape. Getting help (or giving it) should be as simple as sending a text."}
                    </p>
                </div>

                <div class="steps">
                    <div class="steps-line" />
                    { for STEPS.iter().enumerate().map(|(i, s)| html! {
                        <div class="step fade-up" style={format!("animation-delay:{}ms;", i * 200)}>
                            <div class={classes!("step-icon", s.tone)}>{ s.icon }</div>
                            <h3>{ s.title }</h3>
                            <p>{ s.desc }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
