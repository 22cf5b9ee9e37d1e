//! Product form state: mode, fields, derived revision date, validation

use std::collections::HashSet;

use chrono::NaiveDate;

use bpcat_core::validation::{check_length, check_required, FieldError};
use bpcat_core::{dates, product, Product};

/// A form field. `DateRevision` exists as a field for display and
/// validation, but it is derived, never written directly by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Description,
    Logo,
    DateRelease,
    DateRevision,
}

impl Field {
    /// All fields in declaration order, used for touch-all and reporting.
    pub const ALL: [Field; 6] = [
        Field::Id,
        Field::Name,
        Field::Description,
        Field::Logo,
        Field::DateRelease,
        Field::DateRevision,
    ];

    /// The wire/display name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Description => "description",
            Field::Logo => "logo",
            Field::DateRelease => "date_release",
            Field::DateRevision => "date_revision",
        }
    }
}

/// Operating mode, fixed at entry for the lifetime of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: String },
}

/// Raw editable field values. Everything is a string, exactly as typed;
/// canonicalization happens when the payload is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub id: String,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub date_release: String,
    pub date_revision: String,
}

/// Per-field validation outcome, in field declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<(Field, FieldError)>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, FieldError)> {
        self.errors.iter()
    }
}

/// State of the product form view.
#[derive(Debug, Clone)]
pub struct FormState {
    mode: FormMode,

    /// Whether the edit-mode record fetch is in flight.
    pub loading: bool,

    /// Whether a save is in flight. Gates duplicate submissions.
    pub saving: bool,

    /// User-facing error from the last failed operation, if any.
    pub error: Option<String>,

    /// Raw field values.
    pub fields: FormFields,

    /// Fields the user has interacted with; validation errors are only
    /// surfaced for touched fields.
    pub touched: HashSet<Field>,

    /// The local calendar date captured at entry; create mode seeds the
    /// release date from it, and reset re-seeds from the same value.
    entry_date: NaiveDate,
}

impl FormState {
    /// Enter the form. An identifier selects edit mode; its absence
    /// selects create mode with dates seeded from `today`.
    pub fn enter(id: Option<String>, today: NaiveDate) -> Self {
        let mut form = Self {
            mode: match id {
                Some(id) => FormMode::Edit { id },
                None => FormMode::Create,
            },
            loading: false,
            saving: false,
            error: None,
            fields: FormFields::default(),
            touched: HashSet::new(),
            entry_date: today,
        };
        if !form.is_edit() {
            form.seed_dates();
        }
        form
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    /// The route identifier in edit mode.
    pub fn id_param(&self) -> Option<&str> {
        match &self.mode {
            FormMode::Edit { id } => Some(id),
            FormMode::Create => None,
        }
    }

    /// The identifier field is read-only in edit mode: identifiers are
    /// never mutated after creation.
    pub fn id_disabled(&self) -> bool {
        self.is_edit()
    }

    /// Write a field value and mark the field touched.
    ///
    /// Two fields are special:
    /// - `Id` writes are dropped in edit mode (the field is disabled);
    /// - `DateRevision` writes are always dropped; the revision date is
    ///   a pure function of the release date. Setting a non-empty release
    ///   date rewrites the revision field as release + 1 year.
    pub fn set_field(&mut self, field: Field, value: &str) {
        match field {
            Field::Id => {
                if self.id_disabled() {
                    tracing::debug!("ignoring write to disabled id field");
                    return;
                }
                self.fields.id = value.to_string();
            }
            Field::Name => self.fields.name = value.to_string(),
            Field::Description => self.fields.description = value.to_string(),
            Field::Logo => self.fields.logo = value.to_string(),
            Field::DateRelease => {
                self.fields.date_release = value.to_string();
                if !value.is_empty() {
                    self.fields.date_revision = dates::add_one_year(value);
                }
            }
            Field::DateRevision => {
                tracing::debug!("ignoring write to derived revision field");
                return;
            }
        }
        self.touched.insert(field);
    }

    /// Populate every field from a fetched record, normalizing both dates
    /// to ISO form. The revision date is taken from the record as-is (not
    /// re-derived), so out-of-relation records display faithfully until
    /// the release date is touched.
    pub fn populate(&mut self, product: &Product) {
        self.fields.id = product.id.clone();
        self.fields.name = product.name.clone();
        self.fields.description = product.description.clone();
        self.fields.logo = product.logo.clone();
        self.fields.date_release = dates::to_iso_date(&product.date_release);
        self.fields.date_revision = dates::to_iso_date(&product.date_revision);
    }

    /// Evaluate every field rule against the current raw values.
    pub fn validate(&self) -> ValidationReport {
        let f = &self.fields;
        let checks = [
            (
                Field::Id,
                check_length(&f.id, product::ID_MIN_LEN, product::ID_MAX_LEN),
            ),
            (
                Field::Name,
                check_length(&f.name, product::NAME_MIN_LEN, product::NAME_MAX_LEN),
            ),
            (
                Field::Description,
                check_length(
                    &f.description,
                    product::DESCRIPTION_MIN_LEN,
                    product::DESCRIPTION_MAX_LEN,
                ),
            ),
            (Field::Logo, check_required(&f.logo)),
            (Field::DateRelease, check_required(&f.date_release)),
            (Field::DateRevision, check_required(&f.date_revision)),
        ];

        ValidationReport {
            errors: checks
                .into_iter()
                .filter_map(|(field, err)| err.map(|e| (field, e)))
                .collect(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Submission is permitted only when every rule passes and neither a
    /// save nor the initial record fetch is in flight.
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.saving && !self.loading
    }

    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    /// Mark every field touched so validation errors become visible.
    pub fn mark_all_touched(&mut self) {
        self.touched.extend(Field::ALL);
    }

    /// Assemble the payload from raw values, disabled fields included
    /// (so the identifier survives edit mode), with both dates
    /// canonicalized to ISO form.
    pub fn payload(&self) -> Product {
        Product {
            id: self.fields.id.clone(),
            name: self.fields.name.clone(),
            description: self.fields.description.clone(),
            logo: self.fields.logo.clone(),
            date_release: dates::to_iso_date(&self.fields.date_release),
            date_revision: dates::to_iso_date(&self.fields.date_revision),
        }
    }

    /// Clear all field values, touched marks, and any error.
    pub fn reset_fields(&mut self) {
        self.fields = FormFields::default();
        self.touched.clear();
        self.error = None;
    }

    /// Seed the release date from the entry date and derive the revision
    /// date. Used at create-mode entry and on reset.
    pub fn seed_dates(&mut self) {
        let today = self.entry_date.format("%Y-%m-%d").to_string();
        self.fields.date_revision = dates::add_one_year(&today);
        self.fields.date_release = today;
    }
}
