use serde_json::Value;
use std::collections::BTreeSet;
use typeleak_types::{DocEntry, EntryKind};

/// A function entry that carries a declared specification.
#[derive(Clone, Copy, Debug)]
pub struct SpecifiedFunction<'a> {
    pub entry: &'a DocEntry,
    pub signature: &'a Value,
}

#[derive(Clone, Debug, Default)]
pub struct ClassifiedEntries<'a> {
    /// Type names only; `t/0` and `t/1` collapse to one name.
    pub exported_types: BTreeSet<&'a str>,
    /// In entry order.
    pub functions: Vec<SpecifiedFunction<'a>>,
}

pub fn classify(entries: &[DocEntry]) -> ClassifiedEntries<'_> {
    let mut out = ClassifiedEntries::default();

    for entry in entries {
        match entry.kind {
            EntryKind::Type => {
                out.exported_types.insert(entry.name.as_str());
            }
            EntryKind::Function => {
                let Some(signature) = entry.signature.as_ref() else {
                    continue;
                };
                out.functions.push(SpecifiedFunction { entry, signature });
            }
            EntryKind::Callback | EntryKind::Other => {}
        }
    }

    out
}
