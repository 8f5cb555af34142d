use yew::prelude::*;

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    role: &'static str,
}

impl Testimonial {
    fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .filter(|c| c.is_alphabetic())
            .take(2)
            .collect()
    }
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "I was overwhelmed with anxiety during the shortage. EaseBot connected me to a counselor in 5 minutes.",
        author: "Sarah J.",
        role: "Patient",
    },
    Testimonial {
        quote: "As a nurse, I didn't have time to browse listings. The app sent me patients nearby who specifically needed injections.",
        author: "David Chen",
        role: "Medical Volunteer",
    },
    Testimonial {
        quote: "The interface is so calming. It didn't feel like filling out a bureaucratic government form.",
        author: "Maria R.",
        role: "Patient",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="band band-muted">
            <div class="band-inner">
                <h2 class="center">{"Community Stories"}</h2>
                <div class="grid3">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="card quote-card">
                            <div class="quote-head">
                                <div class="avatar">{ t.initials() }</div>
                                <div>
                                    <div class="strong">{ t.author }</div>
                                    <div class="small">{ t.role }</div>
                                </div>
                            </div>
                            <p class="quote">{ format!("\"{}\"", t.quote) }</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
