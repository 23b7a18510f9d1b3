use serde::{Deserialize, Serialize};

/// MySQL column type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCode {
    Decimal,
    Tiny,
    Short,
    Long,
    Float,
    Double,
    Null,
    Timestamp,
    Longlong,
    Int24,
    Date,
    /// `TIME`
    Duration,
    Datetime,
    Year,
    NewDate,
    Varchar,
    Bit,
    Json,
    NewDecimal,
    Enum,
    Set,
    TinyBlob,
    MediumBlob,
    LongBlob,
    Blob,
    VarString,
    String,
    Geometry,
}

impl TypeCode {
    /// Canonical lowercase type name.
    ///
    /// Blob codes report their text spelling; the binary variants are
    /// distinguished by charset, not by code.
    pub fn type_str(self) -> &'static str {
        match self {
            TypeCode::Decimal | TypeCode::NewDecimal => "decimal",
            TypeCode::Tiny => "tinyint",
            TypeCode::Short => "smallint",
            TypeCode::Int24 => "mediumint",
            TypeCode::Long => "int",
            TypeCode::Longlong => "bigint",
            TypeCode::Float => "float",
            TypeCode::Double => "double",
            TypeCode::Null => "null",
            TypeCode::Timestamp => "timestamp",
            TypeCode::Date | TypeCode::NewDate => "date",
            TypeCode::Duration => "time",
            TypeCode::Datetime => "datetime",
            TypeCode::Year => "year",
            TypeCode::Varchar => "varchar",
            TypeCode::VarString => "var_string",
            TypeCode::String => "char",
            TypeCode::Bit => "bit",
            TypeCode::Json => "json",
            TypeCode::Enum => "enum",
            TypeCode::Set => "set",
            TypeCode::TinyBlob => "tinytext",
            TypeCode::MediumBlob => "mediumtext",
            TypeCode::LongBlob => "longtext",
            TypeCode::Blob => "text",
            TypeCode::Geometry => "geometry",
        }
    }
}

/// A column type as written in DDL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldType {
    pub tp: TypeCode,
    #[serde(default)]
    pub flen: Option<u32>,
    #[serde(default)]
    pub decimal: Option<u32>,
    /// Members of `ENUM(...)` / `SET(...)`, in declaration order.
    #[serde(default)]
    pub elems: Vec<String>,
    #[serde(default)]
    pub unsigned: bool,
    #[serde(default)]
    pub charset: Option<String>,
    #[serde(default)]
    pub collate: Option<String>,
}

impl FieldType {
    pub fn new(tp: TypeCode) -> Self {
        Self {
            tp,
            flen: None,
            decimal: None,
            elems: Vec::new(),
            unsigned: false,
            charset: None,
            collate: None,
        }
    }

    /// An `ENUM` type with the given members.
    pub fn enumeration<I, S>(elems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            elems: elems.into_iter().map(Into::into).collect(),
            ..Self::new(TypeCode::Enum)
        }
    }
}
