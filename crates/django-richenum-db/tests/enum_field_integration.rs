//! Integration tests for enum fields used the way a model uses them.
//!
//! These tests declare fields once in statics, save model instances by
//! converting them to storage values, and load them back from rows.

use std::sync::{Arc, LazyLock};

use django_richenum_core::logging::model_span;
use django_richenum_core::{DjangoError, DjangoResult};
use django_richenum_db::fields::{EnumField, FieldType, IndexEnumField, LaxIndexEnumField};
use django_richenum_db::row::Row;
use django_richenum_db::value::Value;
use richenum::{OrderedRichEnum, OrderedRichEnumValue, RichEnum};

// ── Enum and model definitions ────────────────────────────────────────

static COLOR: LazyLock<Arc<OrderedRichEnum>> = LazyLock::new(|| {
    Arc::new(
        OrderedRichEnum::builder("Color")
            .member(0, "red", "Red")
            .member(1, "blue", "Blue")
            .build()
            .unwrap(),
    )
});

static SIZE: LazyLock<Arc<OrderedRichEnum>> = LazyLock::new(|| {
    Arc::new(
        OrderedRichEnum::builder("Size")
            .member(10, "small", "Small")
            .member(20, "medium", "Medium")
            .member(30, "large", "Large")
            .member(-1, "unknown", "Unknown")
            .build()
            .unwrap(),
    )
});

static SHIRT_COLOR: LazyLock<IndexEnumField> =
    LazyLock::new(|| IndexEnumField::new("color", Arc::clone(&COLOR)).unwrap());

static SHIRT_SIZE: LazyLock<LaxIndexEnumField> = LazyLock::new(|| {
    IndexEnumField::new("size", Arc::clone(&SIZE))
        .unwrap()
        .column("size_idx")
        .nullable()
        .field_type(FieldType::SmallIntegerField)
        .lax()
});

#[derive(Debug, Clone, PartialEq)]
struct Shirt {
    id: i64,
    color: OrderedRichEnumValue,
    size: Option<OrderedRichEnumValue>,
}

impl Shirt {
    fn field_values(&self) -> DjangoResult<Vec<(&'static str, Value)>> {
        Ok(vec![
            ("id", Value::Int(self.id)),
            (
                SHIRT_COLOR.field_def().name,
                SHIRT_COLOR.get_prep_value(&Value::from(&self.color))?,
            ),
            (
                SHIRT_SIZE.field_def().name,
                SHIRT_SIZE.get_prep_value(&Value::from(self.size.clone()))?,
            ),
        ])
    }

    fn from_row(row: &Row) -> DjangoResult<Self> {
        let _guard = model_span("shop.shirt").entered();
        let color = SHIRT_COLOR
            .to_enum(&row.get::<Value>("color")?)?
            .ok_or_else(|| DjangoError::DatabaseError("color is NULL".into()))?;
        Ok(Self {
            id: row.get("id")?,
            color,
            size: SHIRT_SIZE.from_row(row)?.as_enum().cloned(),
        })
    }
}

fn saved_row(shirt: &Shirt) -> Row {
    let values = shirt.field_values().unwrap();
    let columns = vec!["id".to_string(), "color".to_string(), "size_idx".to_string()];
    Row::new(columns, values.into_iter().map(|(_, v)| v).collect())
}

// ── Round trips ───────────────────────────────────────────────────────

#[test]
fn test_every_member_round_trips_through_storage() {
    for member in SIZE.members() {
        let stored = SHIRT_SIZE.get_prep_value(&Value::from(member)).unwrap();
        assert_eq!(stored, Value::Int(member.index));
        assert_eq!(
            SHIRT_SIZE.to_python(&stored).unwrap(),
            Value::Enum(member.clone())
        );
    }
}

#[test]
fn test_every_index_round_trips_through_memory() {
    for member in COLOR.members() {
        let stored = Value::Int(member.index);
        let loaded = SHIRT_COLOR.to_python(&stored).unwrap();
        assert_eq!(SHIRT_COLOR.get_prep_value(&loaded).unwrap(), stored);
    }
}

#[test]
fn test_every_canonical_name_resolves_on_lax_field() {
    for member in SIZE.members() {
        let name = Value::from(member.canonical_name.as_str());
        let expected = SIZE.from_canonical(&member.canonical_name).unwrap();
        assert_eq!(
            SHIRT_SIZE.to_python(&name).unwrap(),
            Value::Enum(expected.clone())
        );
        assert_eq!(
            SHIRT_SIZE.get_prep_value(&name).unwrap(),
            Value::Int(expected.index)
        );
    }
}

#[test]
fn test_null_passes_through_both_fields() {
    assert_eq!(SHIRT_COLOR.get_prep_value(&Value::Null).unwrap(), Value::Null);
    assert_eq!(SHIRT_COLOR.to_python(&Value::Null).unwrap(), Value::Null);
    assert_eq!(SHIRT_SIZE.get_prep_value(&Value::Null).unwrap(), Value::Null);
    assert_eq!(SHIRT_SIZE.to_python(&Value::Null).unwrap(), Value::Null);
}

#[test]
fn test_color_example() {
    let red = COLOR.from_canonical("red").unwrap().clone();
    let blue = COLOR.from_canonical("blue").unwrap().clone();

    let strict = IndexEnumField::new("color", Arc::clone(&COLOR)).unwrap();
    assert_eq!(strict.get_prep_value(&Value::Enum(blue)).unwrap(), Value::Int(1));
    assert_eq!(strict.to_python(&Value::Int(0)).unwrap(), Value::Enum(red));

    let lax = LaxIndexEnumField::new("color", Arc::clone(&COLOR)).unwrap();
    assert_eq!(lax.get_prep_value(&Value::from("blue")).unwrap(), Value::Int(1));
}

// ── Save and load ─────────────────────────────────────────────────────

#[test]
fn test_save_then_load_shirt() {
    let shirt = Shirt {
        id: 7,
        color: COLOR.from_index(1).unwrap().clone(),
        size: Some(SIZE.from_canonical("large").unwrap().clone()),
    };
    let row = saved_row(&shirt);
    assert_eq!(row.get::<i64>("color").unwrap(), 1);
    assert_eq!(row.get::<i64>("size_idx").unwrap(), 30);
    assert_eq!(Shirt::from_row(&row).unwrap(), shirt);
}

#[test]
fn test_load_shirt_without_size() {
    let shirt = Shirt {
        id: 8,
        color: COLOR.from_index(0).unwrap().clone(),
        size: None,
    };
    let row = saved_row(&shirt);
    assert!(row.get_value("size_idx").unwrap().is_null());
    assert_eq!(Shirt::from_row(&row).unwrap(), shirt);
}

#[test]
fn test_load_row_with_unknown_index_fails() {
    let row = Row::new(
        vec!["id".into(), "color".into(), "size_idx".into()],
        vec![Value::Int(1), Value::Int(0), Value::Int(15)],
    );
    let err = Shirt::from_row(&row).unwrap_err();
    assert!(matches!(err, DjangoError::LookupError(_)));
    assert!(err.to_string().contains("Size"));
}

#[test]
fn test_form_input_by_canonical_name() {
    // A lax field accepts what an HTML select submits.
    let cleaned = SHIRT_SIZE.clean(&Value::from("medium")).unwrap();
    assert_eq!(cleaned.as_enum().unwrap().index, 20);
    assert!(SHIRT_SIZE.clean(&Value::from("huge")).is_err());
    assert_eq!(SHIRT_SIZE.clean(&Value::Null).unwrap(), Value::Null);
}

// ── Declaration and errors ────────────────────────────────────────────

#[test]
fn test_unordered_enum_fails_at_declaration() {
    let currency = RichEnum::builder("Currency")
        .member("usd", "US Dollar")
        .member("eur", "Euro")
        .build()
        .unwrap();
    assert!(matches!(
        IndexEnumField::new("currency", currency),
        Err(DjangoError::ImproperlyConfigured(_))
    ));
}

#[test]
fn test_unrecognized_types_rejected() {
    for bad in [
        Value::Float(1.0),
        Value::Bool(false),
        Value::Bytes(vec![1]),
        Value::List(vec![Value::Int(1)]),
        Value::Json(serde_json::json!({"index": 1})),
    ] {
        assert!(matches!(
            SHIRT_COLOR.get_prep_value(&bad),
            Err(DjangoError::TypeError(_))
        ));
        assert!(matches!(
            SHIRT_COLOR.to_python(&bad),
            Err(DjangoError::TypeError(_))
        ));
        assert!(matches!(
            SHIRT_SIZE.get_prep_value(&bad),
            Err(DjangoError::TypeError(_))
        ));
        assert!(matches!(
            SHIRT_SIZE.to_python(&bad),
            Err(DjangoError::TypeError(_))
        ));
    }
}

#[test]
fn test_error_message_names_value_and_type() {
    let err = SHIRT_COLOR.to_python(&Value::Float(2.5)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "TypeError: Cannot interpret 2.5 (float) as an OrderedRichEnumValue."
    );
}

// ── Sharing ───────────────────────────────────────────────────────────

#[test]
fn test_fields_shared_across_threads() {
    let handles: Vec<_> = (0..8_i64)
        .map(|i| {
            std::thread::spawn(move || {
                let index = i % 2;
                let loaded = SHIRT_COLOR.to_python(&Value::Int(index)).unwrap();
                SHIRT_COLOR.get_prep_value(&loaded).unwrap()
            })
        })
        .collect();
    for (i, handle) in (0..8_i64).zip(handles) {
        assert_eq!(handle.join().unwrap(), Value::Int(i % 2));
    }
}
