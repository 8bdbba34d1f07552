//! Extracted field models.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Field categories known to the pattern registry.
///
/// Variant order is the registry order. It drives tie-breaking during
/// categorization and the iteration order of a [`FieldSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldType {
    #[serde(rename = "nombre")]
    Name,
    #[serde(rename = "documento")]
    Document,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "telefono")]
    Phone,
    #[serde(rename = "fecha")]
    Date,
    #[serde(rename = "direccion")]
    Address,
    #[serde(rename = "codigo_postal")]
    PostalCode,
    #[serde(rename = "ciudad")]
    City,
    #[serde(rename = "pais")]
    Country,
    #[serde(rename = "profesion")]
    Profession,
    #[serde(rename = "empresa")]
    Company,
    #[serde(rename = "salario")]
    Salary,
    #[serde(rename = "genero")]
    Gender,
    #[serde(rename = "estado_civil")]
    MaritalStatus,
}

impl FieldType {
    /// Stable key used in reports and serialized field sets.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Name => "nombre",
            FieldType::Document => "documento",
            FieldType::Email => "email",
            FieldType::Phone => "telefono",
            FieldType::Date => "fecha",
            FieldType::Address => "direccion",
            FieldType::PostalCode => "codigo_postal",
            FieldType::City => "ciudad",
            FieldType::Country => "pais",
            FieldType::Profession => "profesion",
            FieldType::Company => "empresa",
            FieldType::Salary => "salario",
            FieldType::Gender => "genero",
            FieldType::MaritalStatus => "estado_civil",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain meaning of a field, governing normalization and equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    PersonName,
    IdNumber,
    Email,
    Phone,
    Date,
    Address,
    PostalCode,
    City,
    Country,
    Profession,
    Company,
    Money,
    Gender,
    MaritalStatus,
}

/// How a field was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Interactive form widget.
    FormField,
    /// Label/value pair in the page text.
    TextPattern,
}

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Where the label and value of a text-pattern field were found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldPosition {
    pub label: Point,
    pub value: Point,
}

/// One extracted field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    /// Caption text (form field name or label token).
    pub label: String,

    /// Raw value at capture, normalized once extraction completes.
    pub value: String,

    /// Semantic type of the value.
    pub semantic_type: SemanticType,

    /// Heuristic confidence score (0.0 - 1.0).
    pub confidence: f32,

    /// Extraction source.
    pub source: FieldSource,

    /// Page number (1-indexed).
    pub page: u32,

    /// Label and value positions (text-pattern fields only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<FieldPosition>,
}

impl FieldRecord {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        semantic_type: SemanticType,
        confidence: f32,
        source: FieldSource,
        page: u32,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            semantic_type,
            confidence: confidence.clamp(0.0, 1.0),
            source,
            page,
            position: None,
        }
    }

    pub fn with_position(mut self, label: Point, value: Point) -> Self {
        self.position = Some(FieldPosition { label, value });
        self
    }
}

/// Per-document mapping from field type to its extracted record.
///
/// A field type appears at most once; the first record inserted wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: BTreeMap<FieldType, FieldRecord>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless the field type is already populated.
    ///
    /// Returns `true` if the record was stored.
    pub fn insert(&mut self, field_type: FieldType, record: FieldRecord) -> bool {
        if self.fields.contains_key(&field_type) {
            return false;
        }
        self.fields.insert(field_type, record);
        true
    }

    pub fn get(&self, field_type: FieldType) -> Option<&FieldRecord> {
        self.fields.get(&field_type)
    }

    pub fn contains(&self, field_type: FieldType) -> bool {
        self.fields.contains_key(&field_type)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the fields in registry order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldType, &FieldRecord)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    pub fn field_types(&self) -> impl Iterator<Item = FieldType> + '_ {
        self.fields.keys().copied()
    }

    /// Count fields coming from the given source.
    pub fn count_by_source(&self, source: FieldSource) -> usize {
        self.fields.values().filter(|f| f.source == source).count()
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut FieldRecord> {
        self.fields.values_mut()
    }
}

impl FromIterator<(FieldType, FieldRecord)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (FieldType, FieldRecord)>>(iter: I) -> Self {
        let mut set = FieldSet::new();
        for (field_type, record) in iter {
            set.insert(field_type, record);
        }
        set
    }
}
