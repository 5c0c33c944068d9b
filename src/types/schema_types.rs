use crate::types::storage_types::Value;
use std::fmt;

// Supported attribute types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Integer,
    Double,
    Boolean,
    Char,
    Varchar,
}

impl TypeKind {
    /// Returns the word used for this type in commands and in the catalog file.
    pub fn tag(&self) -> &'static str {
        match self {
            TypeKind::Integer => "INTEGER",
            TypeKind::Double => "DOUBLE",
            TypeKind::Boolean => "BOOLEAN",
            TypeKind::Char => "CHAR",
            TypeKind::Varchar => "VARCHAR",
        }
    }

    /// Inverse of [`TypeKind::tag`].
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "INTEGER" => Some(TypeKind::Integer),
            "DOUBLE" => Some(TypeKind::Double),
            "BOOLEAN" => Some(TypeKind::Boolean),
            "CHAR" => Some(TypeKind::Char),
            "VARCHAR" => Some(TypeKind::Varchar),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataType {
    pub(crate) kind: TypeKind,
    pub(crate) max_length: i32, // -1 when the type carries no length
}

impl DataType {
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            max_length: -1,
        }
    }

    pub fn with_length(kind: TypeKind, max_length: i32) -> Self {
        Self { kind, max_length }
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn max_length(&self) -> i32 {
        self.max_length
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TypeKind::Char | TypeKind::Varchar => {
                write!(f, "{}({})", self.kind.tag(), self.max_length)
            }
            _ => f.write_str(self.kind.tag()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeSchema {
    pub(crate) name: String,
    pub(crate) data_type: DataType,
    pub(crate) is_primary_key: bool,
    pub(crate) is_not_null: bool,
    pub(crate) default: Option<Value>,
}

impl AttributeSchema {
    pub fn new(
        name: &str,
        data_type: DataType,
        is_primary_key: bool,
        is_not_null: bool,
        default: Option<Value>,
    ) -> Self {
        Self {
            name: name.to_lowercase(), // attribute names are case-insensitive
            data_type,
            is_primary_key,
            is_not_null: is_not_null || is_primary_key,
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.is_primary_key
    }

    pub fn is_not_null(&self) -> bool {
        self.is_not_null
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableSchema {
    pub(crate) name: String,
    pub(crate) attributes: Vec<AttributeSchema>,
    pub(crate) head_page_id: i32,
}

impl TableSchema {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_lowercase(), // table names are case-insensitive
            attributes: Vec::new(),
            head_page_id: -1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an attribute, refusing a duplicate name.
    pub fn add_attribute(&mut self, attribute: AttributeSchema) -> bool {
        if self.has_attribute(&attribute.name) {
            return false;
        }
        self.attributes.push(attribute);
        true
    }

    /// Removes the named attribute, if present.
    pub fn drop_attribute(&mut self, name: &str) -> bool {
        let name = name.to_lowercase();
        let before = self.attributes.len();
        self.attributes.retain(|a| a.name != name);
        self.attributes.len() != before
    }

    pub fn attributes(&self) -> &[AttributeSchema] {
        &self.attributes
    }

    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeSchema> {
        let name = name.to_lowercase();
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        let name = name.to_lowercase();
        self.attributes.iter().position(|a| a.name == name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// The single primary key attribute, once the schema is fully built.
    pub fn primary_key(&self) -> Option<&AttributeSchema> {
        self.attributes.iter().find(|a| a.is_primary_key)
    }

    pub fn head_page_id(&self) -> i32 {
        self.head_page_id
    }

    pub fn set_head_page_id(&mut self, page_id: i32) {
        self.head_page_id = page_id;
    }
}
