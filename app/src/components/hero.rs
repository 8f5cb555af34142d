use yew::prelude::*;

const STATS: &[(&str, &str)] = &[
    ("2,400+", "Community Members"),
    ("150+", "Volunteers Active"),
    ("< 2 hrs", "Response Time"),
    ("24/7", "Support Available"),
];

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    /// Both calls to action open the assistant.
    pub on_start: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_start = props.on_start.reform(|_: MouseEvent| ());

    html! {
        <section class="hero">
            <div class="hero-inner fade-up">
                <span class="eyebrow">{"⚡ Emergency Response Ready"}</span>

                <h1>
                    {"Healthcare support, "}<br />
                    <span class="gradient-text">{"simplified by kindness."}</span>
                </h1>

                <p class="lead">
                    {"Whether you need urgent assistance or want to volunteer your skills, \
                      CareConnect bridges the gap with smart, compassionate support."}
                </p>

                <div class="cta-row">
                    <button class="cta dark" onclick={on_start.clone()}>{"Get Started →"}</button>
                    <button class="cta light" onclick={on_start}>{"👥 Join as Volunteer"}</button>
                </div>
            </div>

            <div class="hero-stats fade-up delayed">
                { for STATS.iter().map(|(value, label)| html! {
                    <div class="hero-stat">
                        <div class="n">{ *value }</div>
                        <div class="small">{ *label }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}
