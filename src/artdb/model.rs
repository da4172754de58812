use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The six catalogued fields, in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Author,
    Title,
    Keywords,
    Summary,
    Year,
    ClassificationCode,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Author,
        Field::Title,
        Field::Keywords,
        Field::Summary,
        Field::Year,
        Field::ClassificationCode,
    ];

    /// Label used by the one-line rendering and by `view`.
    pub fn label(self) -> &'static str {
        match self {
            Field::Author => "Author",
            Field::Title => "Title",
            Field::Keywords => "Keywords",
            Field::Summary => "Summary",
            Field::Year => "Year",
            Field::ClassificationCode => "UDC",
        }
    }

    /// Label used in exported text files. The year is written as a full date there.
    pub fn export_label(self) -> &'static str {
        match self {
            Field::Year => "Date",
            other => other.label(),
        }
    }
}

/// One catalogued article. Fields are fixed once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    author: String,
    title: String,
    keywords: String,
    summary: String,
    year: String,
    classification_code: String,
}

impl Record {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        keywords: impl Into<String>,
        summary: impl Into<String>,
        year: impl Into<String>,
        classification_code: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            keywords: keywords.into(),
            summary: summary.into(),
            year: year.into(),
            classification_code: classification_code.into(),
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn keywords(&self) -> &str {
        &self.keywords
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn classification_code(&self) -> &str {
        &self.classification_code
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Author => &self.author,
            Field::Title => &self.title,
            Field::Keywords => &self.keywords,
            Field::Summary => &self.summary,
            Field::Year => &self.year,
            Field::ClassificationCode => &self.classification_code,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in Field::ALL.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", field.label(), self.get(*field))?;
        }
        Ok(())
    }
}

/// A partial set of field values used to derive an edited record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub author: Option<String>,
    pub title: Option<String>,
    pub keywords: Option<String>,
    pub summary: Option<String>,
    pub year: Option<String>,
    pub classification_code: Option<String>,
}

impl RecordPatch {
    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.title.is_none()
            && self.keywords.is_none()
            && self.summary.is_none()
            && self.year.is_none()
            && self.classification_code.is_none()
    }

    /// Builds a new record from `base`, taking every field the patch sets.
    pub fn apply(&self, base: &Record) -> Record {
        let pick = |value: &Option<String>, field: Field| {
            value.clone().unwrap_or_else(|| base.get(field).to_string())
        };
        Record::new(
            pick(&self.author, Field::Author),
            pick(&self.title, Field::Title),
            pick(&self.keywords, Field::Keywords),
            pick(&self.summary, Field::Summary),
            pick(&self.year, Field::Year),
            pick(&self.classification_code, Field::ClassificationCode),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(with = "uuid::serde::compact")]
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Metadata {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new()
    }
}

/// A record as held by the catalogue: the value plus its synthetic identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub metadata: Metadata,
    pub record: Record,
}

impl Entry {
    pub fn new(record: Record) -> Self {
        Self {
            metadata: Metadata::new(),
            record,
        }
    }

    pub fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// Swaps in a new record value, keeping the identity and creation time.
    pub fn replace(&mut self, record: Record) {
        self.record = record;
        self.metadata.updated_at = Utc::now();
    }
}
