//! Type expression trees and their JSON codec.
//!
//! Nodes are JSON objects tagged by `"type"`:
//!
//! | tag           | fields                    | variant      |
//! |---------------|---------------------------|--------------|
//! | `user_type`   | `name`, `args`            | `UserType`   |
//! | `var`         | `name`                    | `Var`        |
//! | `atom`        | `value`                   | `Atom`       |
//! | `ann_type`    | `label`, `inner`          | `Annotated`  |
//! | `remote_type` | `module`, `name`, `args`  | `Remote`     |
//! | `map`         | `args: "any"`             | `MapAny`     |
//! | `op`          | `op`, `operand`           | `Operator`   |
//! | `integer`     | `value`                   | `Integer`    |
//! | anything else | `args: [...]`             | `Compound`   |
//!
//! Decoding never fails. A node that fits none of the rows becomes
//! [`TypeExpr::Unrecognized`] carrying the raw JSON.

use serde_json::{Map, Number, Value, json};

#[derive(Clone, Debug, PartialEq)]
pub enum TypeExpr {
    UserType { name: String, args: Vec<TypeExpr> },
    Var { name: String },
    Atom { value: String },
    Annotated { label: String, inner: Box<TypeExpr> },
    Remote {
        module: String,
        name: String,
        args: Vec<TypeExpr>,
    },
    MapAny,
    Compound { tag: String, args: Vec<TypeExpr> },
    Operator { op: String, operand: Box<TypeExpr> },
    /// Values past `u64::MAX` arrive as floats from the JSON reader; they are kept as is.
    Integer { value: Number },
    Unrecognized { raw: Value },
}

/// A `where`-style clause binding a type variable to a bound expression.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub variable: String,
    pub bound: TypeExpr,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionSignature {
    pub params: Vec<TypeExpr>,
    pub result: TypeExpr,
    pub constraints: Vec<Constraint>,
}

impl TypeExpr {
    pub fn user(name: &str, args: Vec<TypeExpr>) -> Self {
        TypeExpr::UserType {
            name: name.to_string(),
            args,
        }
    }

    pub fn var(name: &str) -> Self {
        TypeExpr::Var {
            name: name.to_string(),
        }
    }

    pub fn atom(value: &str) -> Self {
        TypeExpr::Atom {
            value: value.to_string(),
        }
    }

    pub fn annotated(label: &str, inner: TypeExpr) -> Self {
        TypeExpr::Annotated {
            label: label.to_string(),
            inner: Box::new(inner),
        }
    }

    pub fn remote(module: &str, name: &str, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Remote {
            module: module.to_string(),
            name: name.to_string(),
            args,
        }
    }

    pub fn compound(tag: &str, args: Vec<TypeExpr>) -> Self {
        TypeExpr::Compound {
            tag: tag.to_string(),
            args,
        }
    }

    pub fn integer(value: impl Into<Number>) -> Self {
        TypeExpr::Integer {
            value: value.into(),
        }
    }

    pub fn union(args: Vec<TypeExpr>) -> Self {
        TypeExpr::compound("union", args)
    }

    pub fn op(op: &str, operand: TypeExpr) -> Self {
        TypeExpr::Operator {
            op: op.to_string(),
            operand: Box::new(operand),
        }
    }

    pub fn from_json(value: &Value) -> TypeExpr {
        decode(value).unwrap_or_else(|| TypeExpr::Unrecognized { raw: value.clone() })
    }

    pub fn to_json(&self) -> Value {
        match self {
            TypeExpr::UserType { name, args } => {
                json!({"type": "user_type", "name": name, "args": encode_all(args)})
            }
            TypeExpr::Var { name } => json!({"type": "var", "name": name}),
            TypeExpr::Atom { value } => json!({"type": "atom", "value": value}),
            TypeExpr::Annotated { label, inner } => {
                json!({"type": "ann_type", "label": label, "inner": inner.to_json()})
            }
            TypeExpr::Remote { module, name, args } => json!({
                "type": "remote_type",
                "module": module,
                "name": name,
                "args": encode_all(args),
            }),
            TypeExpr::MapAny => json!({"type": "map", "args": "any"}),
            TypeExpr::Compound { tag, args } => json!({"type": tag, "args": encode_all(args)}),
            TypeExpr::Operator { op, operand } => {
                json!({"type": "op", "op": op, "operand": operand.to_json()})
            }
            TypeExpr::Integer { value } => json!({"type": "integer", "value": value}),
            TypeExpr::Unrecognized { raw } => raw.clone(),
        }
    }
}

impl FunctionSignature {
    pub fn plain(params: Vec<TypeExpr>, result: TypeExpr) -> Self {
        Self {
            params,
            result,
            constraints: Vec::new(),
        }
    }

    pub fn with_constraint(mut self, variable: &str, bound: TypeExpr) -> Self {
        self.constraints.push(Constraint {
            variable: variable.to_string(),
            bound,
        });
        self
    }

    /// Raw specification tree for this signature.
    ///
    /// Signatures without constraints encode in the plain form.
    pub fn to_json(&self) -> Value {
        let fun = json!({
            "type": "fun",
            "params": encode_all(&self.params),
            "result": self.result.to_json(),
        });
        if self.constraints.is_empty() {
            return fun;
        }

        let constraints: Vec<Value> = self
            .constraints
            .iter()
            .map(|c| json!({"type": "constraint", "var": c.variable, "bound": c.bound.to_json()}))
            .collect();
        json!({"type": "bounded_fun", "fun": fun, "constraints": constraints})
    }
}

fn encode_all(exprs: &[TypeExpr]) -> Vec<Value> {
    exprs.iter().map(TypeExpr::to_json).collect()
}

fn decode(value: &Value) -> Option<TypeExpr> {
    let obj = value.as_object()?;
    let tag = obj.get("type")?.as_str()?;

    let expr = match tag {
        "user_type" => TypeExpr::UserType {
            name: str_field(obj, "name")?,
            args: optional_args(obj)?,
        },
        "var" => TypeExpr::Var {
            name: str_field(obj, "name")?,
        },
        "atom" => TypeExpr::Atom {
            value: str_field(obj, "value")?,
        },
        "ann_type" => TypeExpr::Annotated {
            label: str_field(obj, "label")?,
            inner: Box::new(TypeExpr::from_json(obj.get("inner")?)),
        },
        "remote_type" => TypeExpr::Remote {
            module: str_field(obj, "module")?,
            name: str_field(obj, "name")?,
            args: optional_args(obj)?,
        },
        "map" if obj.get("args").and_then(Value::as_str) == Some("any") => TypeExpr::MapAny,
        "op" => TypeExpr::Operator {
            op: str_field(obj, "op")?,
            operand: Box::new(TypeExpr::from_json(obj.get("operand")?)),
        },
        "integer" => TypeExpr::Integer {
            value: match obj.get("value")? {
                Value::Number(n) => n.clone(),
                _ => return None,
            },
        },
        other => TypeExpr::Compound {
            tag: other.to_string(),
            args: decode_all(obj.get("args")?.as_array()?),
        },
    };
    Some(expr)
}

fn decode_all(values: &[Value]) -> Vec<TypeExpr> {
    values.iter().map(TypeExpr::from_json).collect()
}

fn str_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)?.as_str().map(str::to_string)
}

/// `args` may be omitted on named references; when present it must be a list.
fn optional_args(obj: &Map<String, Value>) -> Option<Vec<TypeExpr>> {
    match obj.get("args") {
        None => Some(Vec::new()),
        Some(v) => v.as_array().map(|a| decode_all(a)),
    }
}
