use std::rc::Rc;

use yew::prelude::*;

use crate::router::{self, BotTurn, ChoiceOption, Depth, RecommendationResult, RouteStep};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: Sender,
    pub text: String,
    pub options: Vec<ChoiceOption>,
}

pub enum ChatAction {
    Open,
    Close,
    /// Visitor clicked an option; the bot starts "typing".
    Choose(ChoiceOption),
    /// Typing delay elapsed; the bot answers `option`.
    Reply(ChoiceOption),
    /// Handoff delay elapsed; the page may show the recommended form.
    HandOff,
}

/// One chat session. Lives as long as the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversation {
    pub messages: Vec<ChatMessage>,
    pub open: bool,
    pub depth: Depth,
    pub recommendation: Option<RecommendationResult>,
    /// Option accepted by `Choose` and still waiting for its `Reply`.
    pending: Option<ChoiceOption>,
    handed_off: bool,
    next_id: u32,
}

impl Conversation {
    pub fn new(bot_name: &str) -> Self {
        let mut c = Self {
            messages: Vec::new(),
            open: false,
            depth: Depth::Root,
            recommendation: None,
            pending: None,
            handed_off: false,
            next_id: 1,
        };
        let BotTurn { text, options } = router::greeting(bot_name);
        c.push(Sender::Bot, text, options);
        c
    }

    fn push(&mut self, sender: Sender, text: String, options: Vec<ChoiceOption>) {
        self.messages.push(ChatMessage {
            id: self.next_id,
            sender,
            text,
            options,
        });
        self.next_id += 1;
    }

    /// The bot is "typing" between an accepted choice and its reply.
    pub fn typing(&self) -> bool {
        self.pending.is_some()
    }

    /// Recommendation the page should act on: set once the handoff delay
    /// has passed.
    pub fn handed_off(&self) -> Option<&RecommendationResult> {
        if self.handed_off {
            self.recommendation.as_ref()
        } else {
            None
        }
    }

    /// Options the visitor may pick right now. Empty while typing or once
    /// the conversation has handed off.
    pub fn available_options(&self) -> &[ChoiceOption] {
        if self.typing() {
            return &[];
        }
        match self.messages.last() {
            Some(m) if m.sender == Sender::Bot => &m.options,
            _ => &[],
        }
    }

    fn offers(&self, option: &ChoiceOption) -> bool {
        self.available_options().iter().any(|o| o == option)
    }

    /// Applies an action, returning whether anything changed.
    pub fn apply(&mut self, action: ChatAction) -> bool {
        match action {
            ChatAction::Open => {
                let changed = !self.open;
                self.open = true;
                changed
            }
            ChatAction::Close => {
                let changed = self.open;
                self.open = false;
                changed
            }
            ChatAction::Choose(option) => {
                if !self.offers(&option) {
                    return false;
                }
                self.push(Sender::User, option.label.clone(), Vec::new());
                self.pending = Some(option);
                true
            }
            ChatAction::Reply(option) => {
                if self.pending.as_ref() != Some(&option) {
                    return false;
                }
                self.pending = None;
                let Some(step) = router::route(self.depth, &option) else {
                    return true;
                };
                self.depth = step.depth();
                match step {
                    RouteStep::Ask(turn) => self.push(Sender::Bot, turn.text, turn.options),
                    RouteStep::Recommend { text, result } => {
                        self.push(Sender::Bot, text, Vec::new());
                        self.recommendation = Some(result);
                    }
                }
                true
            }
            ChatAction::HandOff => {
                if self.handed_off || self.recommendation.is_none() {
                    return false;
                }
                self.handed_off = true;
                true
            }
        }
    }
}

impl Reducible for Conversation {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}
