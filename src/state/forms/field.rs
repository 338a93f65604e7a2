//! Form field identities and value objects

/// Input type of a field, mirrors the element type on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email,
    Tel,
    Text,
    /// Free-form multiline input
    TextArea,
}

/// The fixed set of fields on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FullName,
    Email,
    Message,
    Company,
    Phone,
    Subject,
    TravelDates,
    Budget,
}

impl FieldId {
    /// All fields in form order; validation and error scrolling follow this order
    pub const ALL: [FieldId; 8] = [
        FieldId::FullName,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Company,
        FieldId::Subject,
        FieldId::TravelDates,
        FieldId::Budget,
        FieldId::Message,
    ];

    /// Element id used by the page
    pub fn element_id(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Email => "email",
            FieldId::Message => "message",
            FieldId::Company => "company",
            FieldId::Phone => "phone",
            FieldId::Subject => "subject",
            FieldId::TravelDates => "travelease_dates",
            FieldId::Budget => "budget",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::FullName => "Full Name *",
            FieldId::Email => "Email *",
            FieldId::Message => "Message *",
            FieldId::Company => "Company",
            FieldId::Phone => "Phone",
            FieldId::Subject => "Subject",
            FieldId::TravelDates => "Travel Dates",
            FieldId::Budget => "Budget",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Email => FieldKind::Email,
            FieldId::Phone => FieldKind::Tel,
            FieldId::Message => FieldKind::TextArea,
            _ => FieldKind::Text,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, FieldId::FullName | FieldId::Email | FieldId::Message)
    }

    /// Hint shown next to the field while it is marked invalid
    pub fn error_hint(self) -> &'static str {
        match self {
            FieldId::Email => "Please enter a valid email address",
            FieldId::Phone => "Please enter a valid phone number",
            FieldId::Message => "Please enter a message",
            FieldId::FullName => "Please enter your full name",
            _ => "Please enter at least 2 characters",
        }
    }
}

/// A single form field with its current value and error state
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: FieldId,
    pub value: String,
    /// Error class on the owning group
    pub has_error: bool,
}

impl FormField {
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            value: String::new(),
            has_error: false,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.id.kind() == FieldKind::TextArea
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline() {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }
}
