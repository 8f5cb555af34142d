use crate::registry::Submission;
use crate::router::FormType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Phone,
    Location,
    Details,
}

impl Field {
    pub fn label(self, form_type: FormType) -> &'static str {
        match (self, form_type) {
            (Field::FullName, _) => "Full Name",
            (Field::Phone, _) => "Phone Number",
            (Field::Location, _) => "Location",
            (Field::Details, FormType::Patient) => "Describe your needs",
            (Field::Details, FormType::Volunteer) => "Skills & Availability",
        }
    }

    pub fn placeholder(self, form_type: FormType) -> &'static str {
        match (self, form_type) {
            (Field::FullName, _) => "Ex. Jane Doe",
            (Field::Phone, _) => "(555) 123-4567",
            (Field::Location, _) => "City, Neighborhood",
            (Field::Details, FormType::Patient) => "I need help with medicine delivery...",
            (Field::Details, FormType::Volunteer) => "I have a car and can assist weekends...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub full_name: String,
    pub phone: String,
    pub location: String,
    pub details: String,
}

impl FormDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Phone => &self.phone,
            Field::Location => &self.location,
            Field::Details => &self.details,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::FullName => self.full_name = value,
            Field::Phone => self.phone = value,
            Field::Location => self.location = value,
            Field::Details => self.details = value,
        }
    }

    /// Required fields that are blank after trimming.
    pub fn missing(&self) -> Vec<Field> {
        [Field::FullName, Field::Phone, Field::Location, Field::Details]
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
    Received,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupportForm {
    pub form_type: FormType,
    pub category: String,
    pub draft: FormDraft,
    pub phase: FormPhase,
}

impl SupportForm {
    pub fn new(form_type: FormType, category: &str) -> Self {
        Self {
            form_type,
            category: category.to_string(),
            draft: FormDraft::default(),
            phase: FormPhase::Editing,
        }
    }

    /// Editing -> Submitting. On success returns the submission to hand
    /// over once the submit delay has passed.
    pub fn begin_submit(&mut self, submitted: Option<String>) -> Result<Submission, Vec<Field>> {
        if self.phase != FormPhase::Editing {
            return Err(Vec::new());
        }
        let missing = self.draft.missing();
        if !missing.is_empty() {
            return Err(missing);
        }
        self.phase = FormPhase::Submitting;
        let d = &self.draft;
        Ok(Submission {
            form_type: self.form_type,
            category: self.category.clone(),
            full_name: d.full_name.trim().to_string(),
            phone: d.phone.trim().to_string(),
            location: d.location.trim().to_string(),
            details: d.details.trim().to_string(),
            submitted,
        })
    }

    /// Submitting -> Received.
    pub fn finish(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Received;
        }
    }

    /// "Submit another request".
    pub fn reset(&mut self) {
        self.draft = FormDraft::default();
        self.phase = FormPhase::Editing;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(form_type: FormType) -> SupportForm {
        let mut f = SupportForm::new(form_type, "Supplies / Food");
        f.draft.set(Field::FullName, "Jane Doe".into());
        f.draft.set(Field::Phone, "(555) 123-4567".into());
        f.draft.set(Field::Location, "Downtown".into());
        f.draft.set(Field::Details, "  groceries twice a week ".into());
        f
    }

    #[test]
    fn filled_form_always_reaches_received() {
        for ft in [FormType::Patient, FormType::Volunteer] {
            let mut f = filled(ft);
            let sub = f.begin_submit(None).expect("all fields present");
            assert_eq!(f.phase, FormPhase::Submitting);
            assert_eq!(sub.form_type, ft);
            assert_eq!(sub.details, "groceries twice a week");
            f.finish();
            assert_eq!(f.phase, FormPhase::Received);
        }
    }

    #[test]
    fn content_is_not_validated_beyond_presence() {
        let mut f = SupportForm::new(FormType::Patient, "Mental Health");
        for field in [Field::FullName, Field::Phone, Field::Location, Field::Details] {
            f.draft.set(field, "?".into());
        }
        assert!(f.begin_submit(None).is_ok());
    }

    #[test]
    fn blank_fields_block_submission() {
        let mut f = filled(FormType::Volunteer);
        f.draft.set(Field::Phone, "   ".into());
        f.draft.set(Field::Details, String::new());
        assert_eq!(f.begin_submit(None), Err(vec![Field::Phone, Field::Details]));
        assert_eq!(f.phase, FormPhase::Editing);
    }

    #[test]
    fn double_submit_is_rejected() {
        let mut f = filled(FormType::Patient);
        assert!(f.begin_submit(None).is_ok());
        assert_eq!(f.begin_submit(None), Err(Vec::new()));
    }

    #[test]
    fn finish_only_applies_while_submitting() {
        let mut f = filled(FormType::Patient);
        f.finish();
        assert_eq!(f.phase, FormPhase::Editing);
    }

    #[test]
    fn reset_clears_draft() {
        let mut f = filled(FormType::Volunteer);
        f.begin_submit(None).unwrap();
        f.finish();
        f.reset();
        assert_eq!(f.phase, FormPhase::Editing);
        assert_eq!(f.draft, FormDraft::default());
        assert_eq!(f.category, "Supplies / Food");
    }

    #[test]
    fn details_label_follows_form_type() {
        assert_eq!(Field::Details.label(FormType::Patient), "Describe your needs");
        assert_eq!(Field::Details.label(FormType::Volunteer), "Skills & Availability");
    }
}
