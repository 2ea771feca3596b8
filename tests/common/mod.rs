//! Common fixtures for integration tests.

#![allow(dead_code)]

use mdbsarg::{Column, ColumnType, Field, TextEncoding, Table};

/// Columns of the `people` fixture table, numbered out of declaration order.
pub fn people_columns() -> Vec<Column> {
    vec![
        Column::new(4, "Id", ColumnType::LongInt),
        Column::new(1, "Name", ColumnType::Text),
        Column::new(2, "Age", ColumnType::Byte),
        Column::new(7, "Floor", ColumnType::Int),
        Column::new(3, "Salary", ColumnType::Money),
    ]
}

/// The `people` table without a sarg tree.
pub fn people(text_encoding: TextEncoding) -> Table {
    Table::new("people", people_columns(), text_encoding)
}

/// Looks up a fixture column by name.
pub fn column(table: &Table, name: &str) -> Column {
    table
        .column(name)
        .unwrap_or_else(|| panic!("fixture column {name}"))
        .clone()
}

/// Raw field bytes for one `people` row, owned so fields can borrow them.
pub struct PersonRow {
    pub id: [u8; 4],
    pub name: Vec<u8>,
    pub age: [u8; 1],
    pub floor: [u8; 2],
    pub salary: [u8; 8],
}

impl PersonRow {
    /// Encodes a row, storing the name as narrow bytes.
    pub fn narrow(id: i32, name: &str, age: u8, floor: i16) -> Self {
        Self::with_name(id, name.as_bytes().to_vec(), age, floor)
    }

    /// Encodes a row, storing the name as uncompressed UCS-2.
    pub fn wide(id: i32, name: &str, age: u8, floor: i16) -> Self {
        let name = name
            .encode_utf16()
            .flat_map(|unit| unit.to_le_bytes())
            .collect();
        Self::with_name(id, name, age, floor)
    }

    fn with_name(id: i32, name: Vec<u8>, age: u8, floor: i16) -> Self {
        Self {
            id: id.to_le_bytes(),
            name,
            age: [age],
            floor: floor.to_le_bytes(),
            salary: 1_000i64.to_le_bytes(),
        }
    }

    /// Decoded fields in storage order, which differs from column order.
    pub fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new(3, &self.salary),
            Field::new(1, &self.name),
            Field::new(7, &self.floor),
            Field::new(4, &self.id),
            Field::new(2, &self.age),
        ]
    }
}
