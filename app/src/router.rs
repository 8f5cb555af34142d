// Scripted EaseBot decision tree: two questions, six leaves.

use std::fmt;

/// Option values at depth 0.
pub const NEED_HELP: &str = "need_help";
pub const WANT_HELP: &str = "want_help";

/// Marker inside a leaf value that selects the volunteer form.
const VOLUNTEER_MARKER: &str = "volunteer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormType {
    Patient,
    Volunteer,
}

impl FormType {
    pub fn title(self) -> &'static str {
        match self {
            FormType::Patient => "Patient Support Request",
            FormType::Volunteer => "Volunteer Registration",
        }
    }

    /// Short name used in the bot's handoff line.
    pub fn handoff_name(self) -> &'static str {
        match self {
            FormType::Patient => "Patient Support",
            FormType::Volunteer => "Volunteer",
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormType::Patient => f.write_str("patient"),
            FormType::Volunteer => f.write_str("volunteer"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub label: String,
    pub value: String,
}

impl ChoiceOption {
    pub fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationResult {
    pub form_type: FormType,
    pub category: String,
}

/// Where the conversation currently sits in the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    Root,
    Branch,
    Terminal,
}

/// A bot turn produced by the router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotTurn {
    pub text: String,
    pub options: Vec<ChoiceOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteStep {
    Ask(BotTurn),
    Recommend {
        text: String,
        result: RecommendationResult,
    },
}

impl RouteStep {
    pub fn depth(&self) -> Depth {
        match self {
            RouteStep::Ask(_) => Depth::Branch,
            RouteStep::Recommend { .. } => Depth::Terminal,
        }
    }
}

pub fn greeting(bot_name: &str) -> BotTurn {
    BotTurn {
        text: format!(
            "Hi! I'm {bot_name}. I can help connect you to the right resources quickly. How can I help today?"
        ),
        options: vec![
            ChoiceOption::new("I need help", NEED_HELP),
            ChoiceOption::new("I want to help", WANT_HELP),
        ],
    }
}

fn patient_branch() -> BotTurn {
    BotTurn {
        text: "I understand. To get you the right support, what type of assistance do you need?"
            .to_string(),
        options: vec![
            ChoiceOption::new("Medical / Nursing", "medical"),
            ChoiceOption::new("Supplies / Food", "logistics"),
            ChoiceOption::new("Mental Health", "mental_health"),
        ],
    }
}

fn volunteer_branch() -> BotTurn {
    BotTurn {
        text: "That's wonderful! What kind of skills can you offer?".to_string(),
        options: vec![
            ChoiceOption::new("Medical Professional", "medical_volunteer"),
            ChoiceOption::new("Logistics / Driving", "logistics_volunteer"),
            ChoiceOption::new("Emotional Support", "support_volunteer"),
        ],
    }
}

fn recommend(option: &ChoiceOption) -> RouteStep {
    let form_type = if option.value.contains(VOLUNTEER_MARKER) {
        FormType::Volunteer
    } else {
        FormType::Patient
    };
    let category = option.label.clone();
    RouteStep::Recommend {
        text: format!(
            "Got it. I'm opening the {} form for {}.",
            form_type.handoff_name(),
            category
        ),
        result: RecommendationResult {
            form_type,
            category,
        },
    }
}

fn is_leaf(value: &str) -> bool {
    patient_branch()
        .options
        .iter()
        .chain(volunteer_branch().options.iter())
        .any(|o| o.value == value)
}

/// Next step for `option` picked at `depth`.
///
/// Returns `None` at the terminal depth and for values that do not belong
/// to the option set of `depth`.
pub fn route(depth: Depth, option: &ChoiceOption) -> Option<RouteStep> {
    match depth {
        Depth::Root => match option.value.as_str() {
            NEED_HELP => Some(RouteStep::Ask(patient_branch())),
            WANT_HELP => Some(RouteStep::Ask(volunteer_branch())),
            _ => None,
        },
        Depth::Branch if is_leaf(&option.value) => Some(recommend(option)),
        Depth::Branch | Depth::Terminal => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pick(turn: &BotTurn, value: &str) -> ChoiceOption {
        turn.options
            .iter()
            .find(|o| o.value == value)
            .cloned()
            .expect("option offered")
    }

    fn walk(first: &str, second: &str) -> RecommendationResult {
        let root = greeting("EaseBot");
        let step = route(Depth::Root, &pick(&root, first)).unwrap();
        let RouteStep::Ask(branch) = step else {
            panic!("expected a follow-up question");
        };
        match route(Depth::Branch, &pick(&branch, second)).unwrap() {
            RouteStep::Recommend { result, .. } => result,
            other => panic!("expected a recommendation, got {other:?}"),
        }
    }

    #[test]
    fn six_leaves_match_mapping_table() {
        let table = [
            (NEED_HELP, "medical", FormType::Patient, "Medical / Nursing"),
            (NEED_HELP, "logistics", FormType::Patient, "Supplies / Food"),
            (NEED_HELP, "mental_health", FormType::Patient, "Mental Health"),
            (WANT_HELP, "medical_volunteer", FormType::Volunteer, "Medical Professional"),
            (WANT_HELP, "logistics_volunteer", FormType::Volunteer, "Logistics / Driving"),
            (WANT_HELP, "support_volunteer", FormType::Volunteer, "Emotional Support"),
        ];
        for (first, second, form_type, category) in table {
            let got = walk(first, second);
            assert_eq!(got.form_type, form_type, "{first} -> {second}");
            assert_eq!(got.category, category, "{first} -> {second}");
        }
    }

    #[test]
    fn greeting_names_the_bot_and_offers_two_branches() {
        let g = greeting("HelperBot");
        assert!(g.text.starts_with("Hi! I'm HelperBot."));
        let values: Vec<_> = g.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec![NEED_HELP, WANT_HELP]);
    }

    #[test]
    fn each_branch_offers_three_options() {
        for first in [NEED_HELP, WANT_HELP] {
            let step = route(Depth::Root, &ChoiceOption::new("x", first)).unwrap();
            assert_eq!(step.depth(), Depth::Branch);
            let RouteStep::Ask(turn) = step else { unreachable!() };
            assert_eq!(turn.options.len(), 3);
        }
    }

    #[test]
    fn handoff_text_names_form_and_category() {
        let step = route(
            Depth::Branch,
            &ChoiceOption::new("Emotional Support", "support_volunteer"),
        )
        .unwrap();
        let RouteStep::Recommend { text, .. } = step else {
            panic!("expected recommendation");
        };
        assert_eq!(text, "Got it. I'm opening the Volunteer form for Emotional Support.");
    }

    #[test]
    fn route_rejects_values_from_other_depths() {
        let leaf = ChoiceOption::new("Emotional Support", "support_volunteer");
        assert!(route(Depth::Root, &leaf).is_none());
        assert!(route(Depth::Branch, &ChoiceOption::new("I need help", NEED_HELP)).is_none());
        assert!(route(Depth::Branch, &ChoiceOption::new("Other", "other")).is_none());
    }

    #[test]
    fn terminal_depth_routes_nowhere() {
        assert!(route(Depth::Terminal, &ChoiceOption::new("I need help", NEED_HELP)).is_none());
    }
}
