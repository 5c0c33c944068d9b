use crate::errors::catalog_error::CatalogError;
use crate::types::catalog_types::Catalog;
use crate::types::schema_types::{AttributeSchema, DataType, TableSchema, TypeKind};
use crate::types::storage_types::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Loads the catalog file, or starts a fresh catalog when none exists.
/// On a restart the stored page size and indexing flag govern; the
/// arguments only matter for a brand-new database.
pub fn load_or_create(
    path: &Path,
    page_size: u32,
    indexing: bool,
) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Ok(Catalog::new(page_size, indexing));
    }

    let bytes = fs::read(path)?;
    decode_catalog(&bytes)
}

/// Writes the catalog through a temp file in the same directory so a
/// crash mid-write cannot leave a torn catalog behind.
pub fn save(path: &Path, catalog: &Catalog) -> Result<(), CatalogError> {
    let bytes = encode_catalog(catalog);

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir)?;
    {
        let mut file = tmp.as_file();
        file.write_all(&bytes)?;
        file.sync_all()?;
    }

    tmp.persist(path)
        .map_err(|e| CatalogError::Invalid(format!("persist failed: {}", e)))?;

    // on unix: also sync directory metadata
    #[cfg(unix)]
    {
        let dirfd = fs::File::open(dir)?;
        dirfd.sync_all()?;
    }

    Ok(())
}

fn encode_catalog(catalog: &Catalog) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&catalog.page_size().to_le_bytes());
    out.push(catalog.indexing() as u8);
    out.extend_from_slice(&catalog.free_page_list_head().to_le_bytes());
    out.extend_from_slice(&catalog.last_page_id().to_le_bytes());

    out.extend_from_slice(&(catalog.tables().len() as u32).to_le_bytes());
    for table in catalog.tables().values() {
        write_string(&mut out, table.name());
        out.extend_from_slice(&table.head_page_id().to_le_bytes());
        out.extend_from_slice(&(table.attribute_count() as u32).to_le_bytes());
        for attribute in table.attributes() {
            write_attribute(&mut out, attribute);
        }
    }
    out
}

fn write_attribute(out: &mut Vec<u8>, attribute: &AttributeSchema) {
    let data_type = attribute.data_type();
    write_string(out, attribute.name());
    write_string(out, data_type.kind().tag());
    out.extend_from_slice(&data_type.max_length().to_le_bytes());
    out.push(attribute.is_primary_key() as u8);
    out.push(attribute.is_not_null() as u8);

    match attribute.default() {
        None | Some(Value::Null) => out.push(0), // a null default is no default
        Some(value) => {
            out.push(1);
            write_default(out, value);
        }
    }
}

fn write_default(out: &mut Vec<u8>, value: &Value) {
    match value {
        Value::Int(v) => out.extend_from_slice(&v.to_le_bytes()),
        Value::Double(v) => out.extend_from_slice(&v.to_le_bytes()),
        Value::Bool(v) => out.push(*v as u8),
        Value::Text(s) => write_string(out, s),
        Value::Null => {}
    }
}

fn write_string(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u16).to_le_bytes());
    out.extend_from_slice(s.as_bytes());
}

fn decode_catalog(bytes: &[u8]) -> Result<Catalog, CatalogError> {
    let mut reader = Reader::new(bytes);

    let page_size = reader.read_u32()?;
    if page_size == 0 {
        return Err(CatalogError::Invalid("page size is zero".into()));
    }
    let indexing = reader.read_bool()?;
    let free_page_list_head = reader.read_i32()?;
    let last_page_id = reader.read_i32()?;

    let mut catalog = Catalog::new(page_size, indexing);
    catalog.set_free_page_list_head(free_page_list_head);
    catalog.set_last_page_id(last_page_id);

    let table_count = reader.read_u32()?;
    for _ in 0..table_count {
        let table = read_table(&mut reader)?;
        if !catalog.add_table(table) {
            return Err(CatalogError::Invalid("duplicate table name".into()));
        }
    }

    Ok(catalog)
}

fn read_table(reader: &mut Reader<'_>) -> Result<TableSchema, CatalogError> {
    let name = reader.read_string()?;
    let mut table = TableSchema::new(&name);
    table.set_head_page_id(reader.read_i32()?);

    let attribute_count = reader.read_u32()?;
    for _ in 0..attribute_count {
        let attribute = read_attribute(reader)?;
        if !table.add_attribute(attribute) {
            return Err(CatalogError::Invalid("duplicate attribute name".into()));
        }
    }
    Ok(table)
}

fn read_attribute(reader: &mut Reader<'_>) -> Result<AttributeSchema, CatalogError> {
    let name = reader.read_string()?;
    let tag = reader.read_string()?;
    let kind = TypeKind::from_tag(&tag)
        .ok_or_else(|| CatalogError::Invalid(format!("unknown type tag '{}'", tag)))?;
    let max_length = reader.read_i32()?;
    let data_type = DataType::with_length(kind, max_length);

    let is_primary_key = reader.read_bool()?;
    let is_not_null = reader.read_bool()?;

    let default = if reader.read_bool()? {
        Some(read_default(reader, kind)?)
    } else {
        None
    };

    Ok(AttributeSchema::new(
        &name,
        data_type,
        is_primary_key,
        is_not_null,
        default,
    ))
}

fn read_default(reader: &mut Reader<'_>, kind: TypeKind) -> Result<Value, CatalogError> {
    Ok(match kind {
        TypeKind::Integer => Value::Int(reader.read_i32()?),
        TypeKind::Double => Value::Double(reader.read_f64()?),
        TypeKind::Boolean => Value::Bool(reader.read_bool()?),
        TypeKind::Char | TypeKind::Varchar => Value::Text(reader.read_string()?),
    })
}

// Little cursor over the catalog bytes; every read is bounds checked.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], CatalogError> {
        let raw = self
            .buf
            .get(self.pos..self.pos + len)
            .ok_or_else(|| CatalogError::Invalid("catalog file is truncated".into()))?;
        self.pos += len;
        Ok(raw)
    }

    fn read_u8(&mut self) -> Result<u8, CatalogError> {
        Ok(self.take(1)?[0])
    }

    fn read_bool(&mut self) -> Result<bool, CatalogError> {
        Ok(self.read_u8()? == 1)
    }

    fn read_u16(&mut self) -> Result<u16, CatalogError> {
        let raw = self.take(2)?;
        Ok(u16::from_le_bytes([raw[0], raw[1]]))
    }

    fn read_u32(&mut self) -> Result<u32, CatalogError> {
        let raw = self.take(4)?;
        Ok(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    fn read_i32(&mut self) -> Result<i32, CatalogError> {
        let raw = self.take(4)?;
        Ok(i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
    }

    fn read_f64(&mut self) -> Result<f64, CatalogError> {
        let raw = self.take(8)?;
        let mut fixed = [0u8; 8];
        fixed.copy_from_slice(raw);
        Ok(f64::from_le_bytes(fixed))
    }

    fn read_string(&mut self) -> Result<String, CatalogError> {
        let len = self.read_u16()? as usize;
        let raw = self.take(len)?;
        String::from_utf8(raw.to_vec())
            .map_err(|_| CatalogError::Invalid("string is not valid utf-8".into()))
    }
}
