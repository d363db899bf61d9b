use crate::error::ShapeError;
use serde_json::Value;
use typeleak_types::{Constraint, FunctionSignature, TypeExpr};

/// Split a raw specification into parameters, result and constraints.
///
/// Accepts the plain shape `{"type": "fun", "params": [..], "result": ..}` and the
/// constrained shape `{"type": "bounded_fun", "fun": <plain>, "constraints": [..]}`.
pub fn decompose(raw: &Value) -> Result<FunctionSignature, ShapeError> {
    let unrecognized = || ShapeError::Signature(raw.clone());

    match tag(raw) {
        Some("bounded_fun") => {
            let fun = raw.get("fun").ok_or_else(unrecognized)?;
            let (params, result) = plain_fun(fun).ok_or_else(unrecognized)?;
            let constraints = raw
                .get("constraints")
                .and_then(Value::as_array)
                .ok_or_else(unrecognized)?
                .iter()
                .map(constraint)
                .collect::<Option<Vec<_>>>()
                .ok_or_else(unrecognized)?;
            Ok(FunctionSignature {
                params,
                result,
                constraints,
            })
        }
        Some("fun") => {
            let (params, result) = plain_fun(raw).ok_or_else(unrecognized)?;
            Ok(FunctionSignature::plain(params, result))
        }
        _ => Err(unrecognized()),
    }
}

fn tag(value: &Value) -> Option<&str> {
    value.get("type")?.as_str()
}

fn plain_fun(value: &Value) -> Option<(Vec<TypeExpr>, TypeExpr)> {
    if tag(value)? != "fun" {
        return None;
    }
    let params = value
        .get("params")?
        .as_array()?
        .iter()
        .map(TypeExpr::from_json)
        .collect();
    let result = TypeExpr::from_json(value.get("result")?);
    Some((params, result))
}

fn constraint(value: &Value) -> Option<Constraint> {
    if tag(value)? != "constraint" {
        return None;
    }
    Some(Constraint {
        variable: value.get("var")?.as_str()?.to_string(),
        bound: TypeExpr::from_json(value.get("bound")?),
    })
}
