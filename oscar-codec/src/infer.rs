//! Type-tag inference for bare application values.

use oscar_types::{Arg, OscType, TypeTag, Value};

use crate::error::{dump, OscError, Result};

/// The tag a bare value is written with.
pub fn infer_type(value: &Value) -> Result<TypeTag> {
    match value {
        Value::Bool(true) => Ok(TypeTag::True),
        Value::Bool(false) => Ok(TypeTag::False),
        Value::Str(_) => Ok(TypeTag::String),
        Value::Number(_) => Ok(TypeTag::Float32),
        Value::Null => Ok(TypeTag::Nil),
        Value::Bytes(_) => Ok(TypeTag::Blob),
        Value::Long(_) => Ok(TypeTag::Int64),
        Value::Time(_) | Value::Color(_) => Err(OscError::Uninferrable(dump(value))),
    }
}

/// Pair a bare value with its inferred type.
pub fn annotate(value: &Value) -> Result<OscType> {
    Ok(match value {
        Value::Bool(true) => OscType::True,
        Value::Bool(false) => OscType::False,
        Value::Str(s) => OscType::String(s.clone()),
        Value::Number(n) => OscType::Float(*n as f32),
        Value::Null => OscType::Nil,
        Value::Bytes(b) => OscType::Blob(b.clone()),
        Value::Long(v) => OscType::Long(*v),
        Value::Time(_) | Value::Color(_) => return Err(OscError::Uninferrable(dump(value))),
    })
}

/// Annotate every untyped argument, recursing into arrays. Typed arguments pass through.
pub fn annotate_arguments(args: &[Arg]) -> Result<Vec<Arg>> {
    args.iter()
        .map(|arg| match arg {
            Arg::Typed(t) => Ok(Arg::Typed(t.clone())),
            Arg::Untyped(v) => annotate(v).map(Arg::Typed),
            Arg::Array(items) => annotate_arguments(items).map(Arg::Array),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use oscar_types::{Color, NtpTime, TimeTag};

    #[test]
    fn inference_rules() {
        assert_eq!(infer_type(&Value::Bool(true)).unwrap(), TypeTag::True);
        assert_eq!(infer_type(&Value::Bool(false)).unwrap(), TypeTag::False);
        assert_eq!(infer_type(&Value::Number(3.25)).unwrap(), TypeTag::Float32);
        assert_eq!(infer_type(&Value::from("x")).unwrap(), TypeTag::String);
        assert_eq!(infer_type(&Value::Bytes(vec![1, 2, 3])).unwrap(), TypeTag::Blob);
        assert_eq!(infer_type(&Value::Null).unwrap(), TypeTag::Nil);
        assert_eq!(infer_type(&Value::Long(1 << 40)).unwrap(), TypeTag::Int64);
    }

    #[test]
    fn annotate_agrees_with_infer() {
        let values = [
            Value::Bool(true),
            Value::from("hi"),
            Value::Number(0.5),
            Value::Null,
            Value::Bytes(vec![9]),
            Value::Long(-1),
        ];
        for v in &values {
            assert_eq!(annotate(v).unwrap().tag(), infer_type(v).unwrap(), "value {:?}", v);
        }
    }

    #[test]
    fn uninferrable_values_are_named() {
        let color = Value::Color(Color { r: 1, g: 2, b: 3, a: 1.0 });
        match infer_type(&color) {
            Err(OscError::Uninferrable(s)) => assert!(s.contains("Color"), "got {}", s),
            other => panic!("expected Uninferrable, got {:?}", other),
        }

        let time = Value::Time(TimeTag { raw: NtpTime::new(5, 0), native: 0.0 });
        assert!(annotate(&time).is_err());
    }

    #[test]
    fn arrays_infer_independently() {
        let args = vec![
            Arg::Untyped(Value::from("cat")),
            Arg::Array(vec![
                Arg::Untyped(Value::Number(1.0)),
                Arg::Typed(OscType::Int(2)),
            ]),
        ];
        let annotated = annotate_arguments(&args).unwrap();
        assert_eq!(
            annotated,
            vec![
                Arg::Typed(OscType::String("cat".into())),
                Arg::Array(vec![Arg::Typed(OscType::Float(1.0)), Arg::Typed(OscType::Int(2))]),
            ]
        );
    }
}
