pub mod admin;
pub mod chatbot;
pub mod hero;
pub mod how_it_works;
pub mod layout;
pub mod support_form;
pub mod testimonials;

pub use admin::AdminDashboard;
pub use chatbot::Chatbot;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use layout::Layout;
pub use support_form::SupportFormView;
pub use testimonials::Testimonials;
