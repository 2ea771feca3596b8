//! Column metadata and decoded row fields.

use std::{fmt, sync::Arc};

use crate::error::{Result, SargError};

/// Declared type of a Jet column, as stored in the table definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Yes/No flag, stored in the null bitmap.
    Bool,
    /// Unsigned 8-bit integer.
    Byte,
    /// Signed 16-bit integer.
    Int,
    /// Signed 32-bit integer.
    LongInt,
    /// Fixed-point currency.
    Money,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// OLE automation date.
    DateTime,
    /// Short binary value.
    Binary,
    /// Short text value.
    Text,
    /// OLE object stored out of row.
    Ole,
    /// Long text stored out of row.
    Memo,
    /// Replication GUID.
    RepId,
    /// Scaled decimal.
    Numeric,
}

impl ColumnType {
    /// Returns the Jet type code.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            ColumnType::Bool => 0x01,
            ColumnType::Byte => 0x02,
            ColumnType::Int => 0x03,
            ColumnType::LongInt => 0x04,
            ColumnType::Money => 0x05,
            ColumnType::Float => 0x06,
            ColumnType::Double => 0x07,
            ColumnType::DateTime => 0x08,
            ColumnType::Binary => 0x09,
            ColumnType::Text => 0x0a,
            ColumnType::Ole => 0x0b,
            ColumnType::Memo => 0x0c,
            ColumnType::RepId => 0x0f,
            ColumnType::Numeric => 0x10,
        }
    }

    /// Byte width of the integer encoding, for the integer types sargs can test.
    #[must_use]
    pub fn int_width(self) -> Option<usize> {
        match self {
            ColumnType::Byte => Some(1),
            ColumnType::Int => Some(2),
            ColumnType::LongInt => Some(4),
            _ => None,
        }
    }

    /// Returns true for the text type sargs can test.
    #[must_use]
    pub fn is_text(self) -> bool {
        matches!(self, ColumnType::Text)
    }

    /// Returns true when the engine has a comparison rule for this type.
    #[must_use]
    pub fn is_sargable(self) -> bool {
        self.int_width().is_some() || self.is_text()
    }

    fn as_str(self) -> &'static str {
        match self {
            ColumnType::Bool => "bool",
            ColumnType::Byte => "byte",
            ColumnType::Int => "int",
            ColumnType::LongInt => "longint",
            ColumnType::Money => "money",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::DateTime => "datetime",
            ColumnType::Binary => "binary",
            ColumnType::Text => "text",
            ColumnType::Ole => "ole",
            ColumnType::Memo => "memo",
            ColumnType::RepId => "repid",
            ColumnType::Numeric => "numeric",
        }
    }
}

impl TryFrom<u8> for ColumnType {
    type Error = SargError;

    fn try_from(code: u8) -> Result<Self> {
        Ok(match code {
            0x01 => ColumnType::Bool,
            0x02 => ColumnType::Byte,
            0x03 => ColumnType::Int,
            0x04 => ColumnType::LongInt,
            0x05 => ColumnType::Money,
            0x06 => ColumnType::Float,
            0x07 => ColumnType::Double,
            0x08 => ColumnType::DateTime,
            0x09 => ColumnType::Binary,
            0x0a => ColumnType::Text,
            0x0b => ColumnType::Ole,
            0x0c => ColumnType::Memo,
            0x0f => ColumnType::RepId,
            0x10 => ColumnType::Numeric,
            other => return Err(SargError::UnknownColumnType(other)),
        })
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How text columns of a file are stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextEncoding {
    /// Single-byte text, compared as stored (Jet3).
    #[default]
    Narrow,
    /// UCS-2 text, possibly compressed, converted before comparison (Jet4).
    Extended,
}

/// A table column that predicates can reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Column {
    number: usize,
    name: Arc<str>,
    column_type: ColumnType,
}

impl Column {
    /// Creates a column from its number, name and declared type.
    #[must_use]
    pub fn new<N>(number: usize, name: N, column_type: ColumnType) -> Self
    where
        N: Into<Arc<str>>,
    {
        Self {
            number,
            name: name.into(),
            column_type,
        }
    }

    /// Logical column number, stable for the table definition.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// Column name as stored in the catalog.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared column type.
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }
}

/// One column's raw value within a decoded row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field<'a> {
    column_number: usize,
    value: &'a [u8],
}

impl<'a> Field<'a> {
    /// Wraps the raw bytes decoded for `column_number`.
    #[must_use]
    pub fn new(column_number: usize, value: &'a [u8]) -> Self {
        Self {
            column_number,
            value,
        }
    }

    /// Column the value belongs to.
    #[must_use]
    pub fn column_number(&self) -> usize {
        self.column_number
    }

    /// Raw value bytes.
    #[must_use]
    pub fn value(&self) -> &'a [u8] {
        self.value
    }

    /// Length of the raw value in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true when the field carries no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Returns the position of the field decoded for `column_number`.
///
/// Rows are not ordered by column number, so this is a linear scan.
#[must_use]
pub fn locate_field(column_number: usize, fields: &[Field<'_>]) -> Option<usize> {
    fields
        .iter()
        .position(|field| field.column_number == column_number)
}
