//! Field types and validated field declarations.
//!
//! A [`FieldDeclaration`] pairs a column name with a [`FieldType`] and the
//! `(min, max)` bounds its generator consumes. Only the range-requiring types
//! interpret the bounds; every other type ignores them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when a field declaration cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeclarationError {
    /// Field name is empty
    #[error("Invalid field declaration: field name must not be empty")]
    EmptyName,

    /// Bounds are unusable for a range-requiring type
    #[error(
        "Invalid field declaration '{field}': {field_type} requires 0 <= min <= max, got min={min}, max={max}"
    )]
    InvalidRange {
        field: String,
        field_type: FieldType,
        min: i64,
        max: i64,
    },
}

// ============================================================================
// Field Types
// ============================================================================

/// The closed set of synthetic value kinds.
///
/// External identifiers are the upper snake case names returned by
/// [`FieldType::as_str`]; parsing is case-insensitive and also accepts
/// `LOCALDATE` for [`FieldType::Date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldType {
    /// Process-wide sequential identifier
    Id,
    /// Random version 4 UUID
    Uuid,
    BookTitle,
    BookAuthor,
    /// Lorem words, count drawn from `[min, max)`
    PostTitle,
    /// Lorem paragraphs, count drawn from `[min, max)`
    PostBody,
    FirstName,
    LastName,
    Username,
    FullName,
    BloodGroup,
    Email,
    Gender,
    Phone,
    /// Calendar date between 1900 and last year
    Date,
    CountryCode,
    CountryZipCode,
    Capital,
    Word,
    /// Lorem words, count drawn from `[min, max)`
    Words,
    Paragraph,
    /// Lorem paragraphs, count drawn from `[min, max)`
    Paragraphs,
    /// Integer drawn from `[min, max)`
    Age,
    /// Integer drawn from `[min, max)`
    RandomInt,
    /// Alphanumeric string, length drawn from `[min, max)`
    Letters,
}

impl FieldType {
    /// Every field type, in declaration order.
    pub const ALL: [FieldType; 25] = [
        FieldType::Id,
        FieldType::Uuid,
        FieldType::BookTitle,
        FieldType::BookAuthor,
        FieldType::PostTitle,
        FieldType::PostBody,
        FieldType::FirstName,
        FieldType::LastName,
        FieldType::Username,
        FieldType::FullName,
        FieldType::BloodGroup,
        FieldType::Email,
        FieldType::Gender,
        FieldType::Phone,
        FieldType::Date,
        FieldType::CountryCode,
        FieldType::CountryZipCode,
        FieldType::Capital,
        FieldType::Word,
        FieldType::Words,
        FieldType::Paragraph,
        FieldType::Paragraphs,
        FieldType::Age,
        FieldType::RandomInt,
        FieldType::Letters,
    ];

    /// Whether the generator for this type consumes the `(min, max)` bounds.
    pub fn requires_range(self) -> bool {
        matches!(
            self,
            FieldType::Age
                | FieldType::Words
                | FieldType::Paragraphs
                | FieldType::RandomInt
                | FieldType::Letters
                | FieldType::PostTitle
                | FieldType::PostBody
        )
    }

    /// External identifier for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Id => "ID",
            FieldType::Uuid => "UUID",
            FieldType::BookTitle => "BOOK_TITLE",
            FieldType::BookAuthor => "BOOK_AUTHOR",
            FieldType::PostTitle => "POST_TITLE",
            FieldType::PostBody => "POST_BODY",
            FieldType::FirstName => "FIRSTNAME",
            FieldType::LastName => "LASTNAME",
            FieldType::Username => "USERNAME",
            FieldType::FullName => "FULLNAME",
            FieldType::BloodGroup => "BLOOD_GROUP",
            FieldType::Email => "EMAIL",
            FieldType::Gender => "GENDER",
            FieldType::Phone => "PHONE",
            FieldType::Date => "DATE",
            FieldType::CountryCode => "COUNTRY_CODE",
            FieldType::CountryZipCode => "COUNTRY_ZIP_CODE",
            FieldType::Capital => "CAPITAL",
            FieldType::Word => "WORD",
            FieldType::Words => "WORDS",
            FieldType::Paragraph => "PARAGRAPH",
            FieldType::Paragraphs => "PARAGRAPHS",
            FieldType::Age => "AGE",
            FieldType::RandomInt => "RANDOM_INT",
            FieldType::Letters => "LETTERS",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field type identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field type: {0}")]
pub struct ParseFieldTypeError(pub String);

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        if normalized == "LOCALDATE" {
            return Ok(FieldType::Date);
        }
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ParseFieldTypeError(s.to_string()))
    }
}

impl TryFrom<String> for FieldType {
    type Error = ParseFieldTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.as_str().to_string()
    }
}

// ============================================================================
// Field Declarations
// ============================================================================

/// A validated column declaration.
///
/// Declarations are immutable once built. Deserialization goes through the
/// same validation as [`FieldDeclaration::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldDeclaration", into = "RawFieldDeclaration")]
pub struct FieldDeclaration {
    name: String,
    field_type: FieldType,
    min: i64,
    max: i64,
}

impl FieldDeclaration {
    /// Create a declaration, validating the bounds for range-requiring types.
    pub fn new(
        name: impl Into<String>,
        field_type: FieldType,
        min: i64,
        max: i64,
    ) -> Result<Self, DeclarationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DeclarationError::EmptyName);
        }

        if field_type.requires_range() && (min < 0 || max < 0 || min > max) {
            return Err(DeclarationError::InvalidRange {
                field: name,
                field_type,
                min,
                max,
            });
        }

        Ok(Self {
            name,
            field_type,
            min,
            max,
        })
    }

    /// Create a declaration for a type that ignores its bounds.
    ///
    /// Range-requiring types get `(0, 0)`, which always validates.
    pub fn unbounded(
        name: impl Into<String>,
        field_type: FieldType,
    ) -> Result<Self, DeclarationError> {
        Self::new(name, field_type, 0, 0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

/// Serialized form of a [`FieldDeclaration`] before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawFieldDeclaration {
    /// Field name
    pub name: String,

    /// Field type identifier
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Lower bound (only used by range-requiring types)
    #[serde(default)]
    pub min: i64,

    /// Upper bound (only used by range-requiring types)
    #[serde(default)]
    pub max: i64,
}

impl TryFrom<RawFieldDeclaration> for FieldDeclaration {
    type Error = DeclarationError;

    fn try_from(raw: RawFieldDeclaration) -> Result<Self, Self::Error> {
        FieldDeclaration::new(raw.name, raw.field_type, raw.min, raw.max)
    }
}

impl From<FieldDeclaration> for RawFieldDeclaration {
    fn from(decl: FieldDeclaration) -> Self {
        Self {
            name: decl.name,
            field_type: decl.field_type,
            min: decl.min,
            max: decl.max,
        }
    }
}
