use crate::error::ShapeError;
use crate::policy::AnalysisOptions;
use typeleak_types::TypeExpr;

/// User type names referenced by `expr`, depth-first and left-to-right.
///
/// Repeats are kept; deduplication happens once per module.
pub fn referenced_types(
    expr: &TypeExpr,
    options: AnalysisOptions,
) -> Result<Vec<String>, ShapeError> {
    let mut out = Vec::new();
    walk(expr, options, &mut out)?;
    Ok(out)
}

pub(crate) fn walk(
    expr: &TypeExpr,
    options: AnalysisOptions,
    out: &mut Vec<String>,
) -> Result<(), ShapeError> {
    match expr {
        TypeExpr::UserType { name, args } => {
            out.push(name.clone());
            if options.recurse_type_arguments {
                for arg in args {
                    walk(arg, options, out)?;
                }
            }
        }
        TypeExpr::Annotated { inner, .. } => walk(inner, options, out)?,
        TypeExpr::Compound { args, .. } => {
            for arg in args {
                walk(arg, options, out)?;
            }
        }
        // Remote references are never resolved, whatever their name.
        TypeExpr::Remote { .. }
        | TypeExpr::Var { .. }
        | TypeExpr::Atom { .. }
        | TypeExpr::MapAny
        | TypeExpr::Operator { .. }
        | TypeExpr::Integer { .. } => {}
        TypeExpr::Unrecognized { raw } => return Err(ShapeError::Node(raw.clone())),
    }
    Ok(())
}
