use crate::engine::Engine;
use crate::errors::engine_error::EngineError;
use crate::printer;
use crate::types::catalog_types::Catalog;
use crate::types::parser_types::Statement;
use crate::types::schema_types::TypeKind;
use crate::types::storage_types::Value;

/// Executes a parsed statement against the engine.
pub fn execute(engine: &mut Engine, statement: Statement) -> Result<(), EngineError> {
    match statement {
        Statement::CreateTable(schema) => {
            let name = schema.name().to_string();
            if !engine.storage.create_table(&mut engine.catalog, schema)? {
                return Err(EngineError::Execution(format!(
                    "table already exists: {}",
                    name
                )));
            }
            println!("Table created successfully");
        }

        Statement::DropTable(name) => {
            if !engine.storage.drop_table(&mut engine.catalog, &name)? {
                return Err(EngineError::Execution(format!("no such table: {}", name)));
            }
            println!("Table dropped successfully");
        }

        Statement::Insert { table, rows } => {
            let mut inserted = 0;
            for row in rows {
                let values = resolve_row(&engine.catalog, &table, row)?;
                if !engine.storage.insert(&mut engine.catalog, &table, values)? {
                    return Err(EngineError::Execution(format!(
                        "insert violates the primary key constraint on '{}'",
                        table
                    )));
                }
                inserted += 1;
            }
            println!("Inserted {} rows successfully", inserted);
        }

        Statement::SelectAll(table) => {
            let Some(schema) = engine.catalog.table(&table).cloned() else {
                return Err(EngineError::Execution(format!("no such table: {}", table)));
            };
            let records = engine.storage.select_all(&engine.catalog, &table)?;
            printer::print_table(&schema, &records);
        }

        Statement::AlterAdd { table, attribute } => {
            let Some(old_schema) = engine.catalog.table(&table).cloned() else {
                return Err(EngineError::Execution(format!("no such table: {}", table)));
            };

            let attribute_name = attribute.name().to_string();
            let mut new_schema = old_schema;
            if !new_schema.add_attribute(attribute) {
                return Err(EngineError::Execution(format!(
                    "attribute already exists: {}",
                    attribute_name
                )));
            }

            engine
                .storage
                .alter_table(&mut engine.catalog, &table, new_schema)?;
            println!("Table altered successfully");
        }

        Statement::AlterDrop { table, attribute } => {
            let Some(old_schema) = engine.catalog.table(&table).cloned() else {
                return Err(EngineError::Execution(format!("no such table: {}", table)));
            };

            let Some(target) = old_schema.attribute(&attribute) else {
                return Err(EngineError::Execution(format!(
                    "no such attribute: {}",
                    attribute
                )));
            };
            if target.is_primary_key() {
                return Err(EngineError::Execution(
                    "cannot drop the primary key attribute".into(),
                ));
            }

            let mut new_schema = old_schema.clone();
            new_schema.drop_attribute(&attribute);

            engine
                .storage
                .alter_table(&mut engine.catalog, &table, new_schema)?;
            println!("Table altered successfully");
        }
    }

    Ok(())
}

// Integer literals written for a DOUBLE attribute arrive as Int;
// promote them so the codec sees the declared type.
fn resolve_row(
    catalog: &Catalog,
    table: &str,
    mut values: Vec<Value>,
) -> Result<Vec<Value>, EngineError> {
    let Some(schema) = catalog.table(table) else {
        return Err(EngineError::Execution(format!("no such table: {}", table)));
    };

    for (value, attribute) in values.iter_mut().zip(schema.attributes()) {
        if attribute.data_type().kind() == TypeKind::Double {
            if let Value::Int(v) = *value {
                *value = Value::Double(v as f64);
            }
        }
    }
    Ok(values)
}
