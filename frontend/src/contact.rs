//! Contact form model: field values, the validation rule set and the
//! submit state machine. Rendering lives in `components::contact`.

use std::collections::BTreeMap;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    ShopName,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::ShopName,
        Field::Message,
    ];

    /// DOM id, also used by the label's `for` attribute.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::ShopName => "shopName",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name *",
            Field::Email => "Email Address *",
            Field::Phone => "Phone Number *",
            Field::ShopName => "Shop Name *",
            Field::Message => "Message *",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@example.com",
            Field::Phone => "+91 98765 43210",
            Field::ShopName => "ABC Pharmacy",
            Field::Message => "Tell us about your requirements...",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Phone number must be at least 10 digits")]
    PhoneTooShort,
    #[error("Shop name must be at least 2 characters")]
    ShopNameTooShort,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

#[derive(Clone, Copy, Debug)]
enum Check {
    MinChars(usize),
    Email,
}

impl Check {
    fn passes(self, value: &str) -> bool {
        match self {
            Check::MinChars(min) => value.chars().count() >= min,
            Check::Email => {
                !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
            }
        }
    }
}

struct Rule {
    field: Field,
    check: Check,
    error: FieldError,
}

const RULES: [Rule; 5] = [
    Rule { field: Field::Name, check: Check::MinChars(2), error: FieldError::NameTooShort },
    Rule { field: Field::Email, check: Check::Email, error: FieldError::InvalidEmail },
    Rule { field: Field::Phone, check: Check::MinChars(10), error: FieldError::PhoneTooShort },
    Rule { field: Field::ShopName, check: Check::MinChars(2), error: FieldError::ShopNameTooShort },
    Rule { field: Field::Message, check: Check::MinChars(10), error: FieldError::MessageTooShort },
];

pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    RULES
        .iter()
        .filter(|rule| rule.field == field)
        .find(|rule| !rule.check.passes(value))
        .map_or(Ok(()), |rule| Err(rule.error))
}

/// Run every rule against `input` at once.
pub fn validate(input: &ContactFormInput) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in Field::ALL {
        if let Err(err) = validate_field(field, input.get(field)) {
            errors.0.insert(field, err);
        }
    }
    errors
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub shop_name: String,
    pub message: String,
}

impl ContactFormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::ShopName => &self.shop_name,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::ShopName => &mut self.shop_name,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

/// Failing fields and their messages. Holds only currently failing fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Acknowledgement {
    pub title: String,
    pub description: String,
}

impl Acknowledgement {
    pub fn message_sent() -> Self {
        Self {
            title: "Message Sent!".to_string(),
            description: "We'll get back to you within 24 hours.".to_string(),
        }
    }
}

/// Something that can show the user a transient confirmation.
pub trait Acknowledge {
    fn acknowledge(&self, ack: Acknowledgement);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Invalid,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected,
    Sent(ContactFormInput),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    input: ContactFormInput,
    errors: ValidationErrors,
    phase: FormPhase,
}

impl ContactForm {
    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Store a new value. After a failed attempt the edited field is
    /// re-checked so its message updates or disappears while typing.
    pub fn edit(&mut self, field: Field, value: String) {
        self.input.set(field, value);
        if self.phase == FormPhase::Invalid {
            match validate_field(field, self.input.get(field)) {
                Ok(()) => {
                    self.errors.0.remove(&field);
                }
                Err(err) => {
                    self.errors.0.insert(field, err);
                }
            }
        }
    }

    pub fn submit(&mut self, ack: &dyn Acknowledge) -> SubmitOutcome {
        let errors = validate(&self.input);
        if !errors.is_empty() {
            debug!("contact form rejected, {} invalid field(s)", errors.len());
            self.errors = errors;
            self.phase = FormPhase::Invalid;
            return SubmitOutcome::Rejected;
        }

        let sent = std::mem::take(&mut self.input);
        self.errors = ValidationErrors::default();
        self.phase = FormPhase::Editing;
        info!("contact form accepted for shop {:?}", sent.shop_name);
        ack.acknowledge(Acknowledgement::message_sent());
        SubmitOutcome::Sent(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder(RefCell<Vec<Acknowledgement>>);

    impl Acknowledge for Recorder {
        fn acknowledge(&self, ack: Acknowledgement) {
            self.0.borrow_mut().push(ack);
        }
    }

    fn fill(form: &mut ContactForm, values: [&str; 5]) {
        for (field, value) in Field::ALL.into_iter().zip(values) {
            form.edit(field, value.to_string());
        }
    }

    const VALID: [&str; 5] = [
        "John Doe",
        "john@example.com",
        "9876543210",
        "ABC Pharmacy",
        "Need a demo please",
    ];

    #[test]
    fn valid_submission_resets_and_acknowledges_once() {
        let recorder = Recorder::default();
        let mut form = ContactForm::default();
        fill(&mut form, VALID);

        let outcome = form.submit(&recorder);

        match outcome {
            SubmitOutcome::Sent(sent) => assert_eq!(sent.shop_name, "ABC Pharmacy"),
            SubmitOutcome::Rejected => panic!("valid form was rejected"),
        }
        assert!(form.errors().is_empty());
        assert_eq!(form.input(), &ContactFormInput::default());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert_eq!(recorder.0.borrow().as_slice(), &[Acknowledgement::message_sent()]);
    }

    #[test]
    fn short_name_is_the_only_error() {
        let recorder = Recorder::default();
        let mut form = ContactForm::default();
        fill(&mut form, VALID);
        form.edit(Field::Name, "A".to_string());

        assert_eq!(form.submit(&recorder), SubmitOutcome::Rejected);
        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![Field::Name]);
        assert_eq!(
            form.errors().get(Field::Name).map(|e| e.to_string()).as_deref(),
            Some("Name must be at least 2 characters")
        );
        // values are kept and nothing is acknowledged
        assert_eq!(form.input().name, "A");
        assert_eq!(form.input().email, "john@example.com");
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn empty_resubmission_after_success_fails_the_same_way() {
        let recorder = Recorder::default();
        let mut empty = ContactForm::default();
        empty.submit(&recorder);
        let first_errors = empty.errors().clone();
        assert_eq!(first_errors.len(), 5);

        let mut form = ContactForm::default();
        fill(&mut form, VALID);
        form.submit(&recorder);
        assert_eq!(form.submit(&recorder), SubmitOutcome::Rejected);
        assert_eq!(form.errors(), &first_errors);
        assert_eq!(recorder.0.borrow().len(), 1);
    }

    #[test]
    fn error_set_matches_exactly_the_failing_rules() {
        let recorder = Recorder::default();
        let mut form = ContactForm::default();
        fill(&mut form, ["Jo", "not-an-email", "12345", "AB", "short"]);
        form.submit(&recorder);
        assert_eq!(
            form.errors().fields().collect::<Vec<_>>(),
            vec![Field::Email, Field::Phone, Field::Message]
        );
    }

    #[test]
    fn messages_are_replaced_not_accumulated() {
        let recorder = Recorder::default();
        let mut form = ContactForm::default();
        form.submit(&recorder);
        fill(&mut form, VALID);
        form.edit(Field::Phone, "123".to_string());
        form.submit(&recorder);
        assert_eq!(form.errors().fields().collect::<Vec<_>>(), vec![Field::Phone]);
    }

    #[test]
    fn edits_only_revalidate_after_a_failed_attempt() {
        let recorder = Recorder::default();
        let mut form = ContactForm::default();
        form.edit(Field::Name, "A".to_string());
        assert!(form.errors().is_empty());

        form.submit(&recorder);
        assert!(form.errors().get(Field::Name).is_some());
        form.edit(Field::Name, "Al".to_string());
        assert!(form.errors().get(Field::Name).is_none());
        form.edit(Field::Name, "A".to_string());
        assert_eq!(form.errors().get(Field::Name), Some(FieldError::NameTooShort));
        // untouched fields keep their messages
        assert_eq!(form.errors().get(Field::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn email_format() {
        for ok in ["john@example.com", "a.b+c@mail.co.in", "x_y@d-1.org"] {
            assert_eq!(validate_field(Field::Email, ok), Ok(()), "{ok}");
        }
        for bad in [
            "",
            "john",
            "john@",
            "@example.com",
            "john@example",
            "jo..hn@example.com",
            "john@ex ample.com",
            ".john@example.com",
        ] {
            assert_eq!(validate_field(Field::Email, bad), Err(FieldError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        assert_eq!(validate_field(Field::Name, "अ"), Err(FieldError::NameTooShort));
        assert_eq!(validate_field(Field::Name, "अब"), Ok(()));
        assert_eq!(validate_field(Field::Phone, "987654321"), Err(FieldError::PhoneTooShort));
        assert_eq!(validate_field(Field::Phone, "9876543210"), Ok(()));
    }

    #[test]
    fn input_serializes_with_camel_case_keys() {
        let mut input = ContactFormInput::default();
        input.set(Field::ShopName, "ABC Pharmacy".to_string());
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["shopName"], "ABC Pharmacy");
    }
}
