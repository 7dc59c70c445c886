//! Unsaved form input values.

/// One of the three product inputs on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Sku,
    Name,
    Description,
}

impl Field {
    /// All inputs, in the order they appear on the form.
    pub const ALL: [Field; 3] = [Field::Sku, Field::Name, Field::Description];

    /// Key used for this field in the request body.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Sku => "sku",
            Field::Name => "name",
            Field::Description => "description",
        }
    }

    /// Label rendered next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Sku => "SKU:",
            Field::Name => "Name:",
            Field::Description => "Description:",
        }
    }

    /// Whether the browser must block submission while this field is empty.
    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Description)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The in-memory values of the three inputs before submission.
///
/// Values are stored exactly as typed. Nothing here trims or validates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub sku: String,
    pub name: String,
    pub description: String,
}

impl FormDraft {
    /// Create a draft with the given values.
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    /// Current value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Sku => &self.sku,
            Field::Name => &self.name,
            Field::Description => &self.description,
        }
    }

    /// Replace a field's value verbatim.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Sku => self.sku = value,
            Field::Name => self.name = value,
            Field::Description => self.description = value,
        }
    }
}
