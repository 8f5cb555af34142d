use std::rc::Rc;

use gloo::console::log;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::config::AppConfig;
use crate::registry::{
    Analysis, Registry, RegistryAction, Status, SupportRequest, VolunteerRecord,
};
use crate::tagger;

fn request_row(r: &SupportRequest) -> Html {
    html! {
        <div key={r.id} class="vol-row">
            <div class="vol-main">
                <div class="vol-title">
                    <h4>{ &r.name }</h4>
                    <span class="status pending">{ &r.category }</span>
                    if let Some(day) = &r.submitted {
                        <span class="small">{ day }</span>
                    }
                </div>
                <p class="bio">{ format!("\"{}\"", r.needs) }</p>
                <p class="small">{ format!("{} · {}", r.location, r.phone) }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminProps {
    pub registry: UseReducerHandle<Registry>,
}

#[function_component(AdminDashboard)]
pub fn admin_dashboard(props: &AdminProps) -> Html {
    let config = use_context::<Rc<AppConfig>>().unwrap_or_default();
    let registry = props.registry.clone();
    let analysis = registry.analysis;
    let expanded = use_state(|| None::<u32>);

    let on_analyze = {
        let registry = registry.clone();
        let delay = config.analyze_delay_ms;
        Callback::from(move |_| {
            if registry.analysis != Analysis::Idle {
                return;
            }
            registry.dispatch(RegistryAction::StartAnalysis);
            let registry = registry.clone();
            Timeout::new(delay, move || {
                registry.dispatch(RegistryAction::TagAll);
                log!("careconnect: auto-tagging complete");
            })
            .forget();
        })
    };

    let stats = registry.stats();
    let stat_cards = [
        ("Pending Apps", stats.pending, "c-orange"),
        ("Active Volunteers", stats.active, "c-emerald"),
        ("Medical Pros", stats.medical_pros, "c-blue"),
        ("Logistics/Driven", stats.with_vehicle, "c-indigo"),
        ("Open Requests", stats.open_requests, "c-rose"),
    ];

    let (btn_label, btn_class) = match analysis {
        Analysis::Idle => ("✨ Run AI Auto-Tagging", "analyze"),
        Analysis::Running => ("⏳ Analyzing Bios...", "analyze"),
        Analysis::Complete => ("✓ AI Analysis Complete", "analyze done"),
    };
    let analyzed = analysis == Analysis::Complete;

    let row = |v: &VolunteerRecord| {
        let id = v.id;
        let is_open = *expanded == Some(id);
        let on_profile = {
            let expanded = expanded.clone();
            Callback::from(move |_| expanded.set(if is_open { None } else { Some(id) }))
        };
        let on_approve = {
            let registry = registry.clone();
            Callback::from(move |_| {
                log!(format!("careconnect: approving volunteer #{id}"));
                registry.dispatch(RegistryAction::Approve(id));
            })
        };
        let status_class = match v.status {
            Status::Active => "status active",
            Status::Pending => "status pending",
        };

        html! {
            <div key={id} class="vol-row">
                <div class="vol-main">
                    <div class="vol-title">
                        <h4>{ &v.name }</h4>
                        <span class={status_class}>{ v.status.to_string() }</span>
                        if let Some(cat) = &v.category {
                            <span class="small">{ cat }</span>
                        }
                    </div>
                    <p class="bio">{ format!("\"{}\"", v.bio) }</p>

                    <div class="tags">
                        if v.tags.is_empty() {
                            if analyzed {
                                <span class="small muted">{"No specific tags detected by AI."}</span>
                            }
                        } else {
                            { for v.tags.iter().enumerate().map(|(i, tag)| html! {
                                <span key={tag.clone()} class="tag pop-in" style={format!("animation-delay:{}ms;", i * 100)}>
                                    {"✨ "}{ tag }
                                </span>
                            }) }
                        }
                    </div>

                    if is_open {
                        <dl class="profile">
                            <dt>{"Phone"}</dt><dd>{ v.phone.clone().unwrap_or_else(|| "-".into()) }</dd>
                            <dt>{"Email"}</dt><dd>{ v.email.clone().unwrap_or_else(|| "-".into()) }</dd>
                            <dt>{"Location"}</dt><dd>{ v.location.clone().unwrap_or_else(|| "-".into()) }</dd>
                            <dt>{"Joined"}</dt><dd>{ v.joined.clone().unwrap_or_else(|| "-".into()) }</dd>
                        </dl>
                    }
                </div>

                <div class="vol-actions">
                    <button class="ghost" onclick={on_profile}>
                        { if is_open { "Hide Profile" } else { "View Profile" } }
                    </button>
                    <button class="solid" disabled={v.status == Status::Active} onclick={on_approve}>
                        { if v.status == Status::Active { "Approved" } else { "Approve" } }
                    </button>
                </div>
            </div>
        }
    };

    html! {
        <section class="admin">
            <div class="admin-inner">
                <div class="admin-head">
                    <div>
                        <div class="kicker">{"🛡 Admin Command Center"}</div>
                        <h2>{"Volunteer & Resource Triage"}</h2>
                        <p class="small">{"Manage incoming support applications with AI assistance."}</p>
                    </div>
                    <button
                        class={btn_class}
                        disabled={analysis != Analysis::Idle}
                        onclick={on_analyze}
                    >
                        { btn_label }
                    </button>
                </div>

                <div class="stats">
                    { for stat_cards.iter().map(|(label, value, color)| html! {
                        <div class="stat-card">
                            <div class="n">{ *value }</div>
                            <div class={classes!("stat-label", *color)}>{ *label }</div>
                        </div>
                    }) }
                </div>

                <div class="legend small">
                    {"Tags: "}
                    { for tagger::vocabulary().map(|t| html! { <span class="tag quiet">{ t }</span> }) }
                </div>

                <div class="card list">
                    <div class="list-head">
                        <h3>{"Recent Applications"}</h3>
                        <span class="small">{ format!("{} total", registry.volunteers.len()) }</span>
                    </div>
                    <div class="rows">
                        { for registry.volunteers.iter().map(row) }
                    </div>
                </div>

                if !registry.requests.is_empty() {
                    <div class="card list">
                        <div class="list-head">
                            <h3>{"Patient Requests"}</h3>
                        </div>
                        <div class="rows">
                            { for registry.requests.iter().map(request_row) }
                        </div>
                    </div>
                }
            </div>
        </section>
    }
}
