use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use typeleak_types::DocsPath;
use walkdir::WalkDir;

/// File name suffix of a module documentation file.
pub const DOCS_SUFFIX: &str = ".docs.json";

/// A module documentation file found under the docs root.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ModuleSource {
    pub module: String,
    /// Relative to the docs root.
    pub path: DocsPath,
}

/// Which discovered modules to analyze.
///
/// `names` are exact module names (the CLI's `--module`); `include`/`exclude` are globs
/// over module names from config. An empty list never filters.
#[derive(Clone, Debug, Default)]
pub struct ModuleSelection {
    pub names: Vec<String>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

/// Discover `*.docs.json` files under `docs_root`, ordered by module name.
///
/// When the same module name appears twice the lexicographically first path wins.
pub fn discover_modules(docs_root: &Utf8Path) -> anyhow::Result<Vec<ModuleSource>> {
    if !docs_root.is_dir() {
        anyhow::bail!("docs root is not a directory: {docs_root}");
    }

    let mut out: Vec<ModuleSource> = WalkDir::new(docs_root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| pathbuf_to_utf8(e.path().to_path_buf()))
        .filter_map(|abs| {
            let module = module_name(&abs)?;
            Some(ModuleSource {
                module,
                path: DocsPath::relative_to(&abs, docs_root),
            })
        })
        .collect();

    // Stable order.
    out.sort();
    out.dedup_by(|later, first| {
        let dup = later.module == first.module;
        if dup {
            tracing::warn!(
                module = %first.module,
                kept = first.path.as_str(),
                ignored = later.path.as_str(),
                "duplicate module documentation"
            );
        }
        dup
    });

    Ok(out)
}

/// Narrow `discovered` to the selection. Explicitly named modules with no
/// documentation file are returned separately, in the order they were requested.
pub fn select_modules(
    discovered: Vec<ModuleSource>,
    selection: &ModuleSelection,
) -> anyhow::Result<(Vec<ModuleSource>, Vec<String>)> {
    let include = build_globset(&selection.include).context("compile include globset")?;
    let exclude = build_globset(&selection.exclude).context("compile exclude globset")?;

    let mut missing: Vec<String> = Vec::new();
    for name in &selection.names {
        let known = discovered.iter().any(|m| &m.module == name);
        if !known && !missing.contains(name) {
            missing.push(name.clone());
        }
    }

    let selected: Vec<ModuleSource> = discovered
        .into_iter()
        .filter(|m| selection.names.is_empty() || selection.names.contains(&m.module))
        .filter(|m| selection.include.is_empty() || include.is_match(&m.module))
        .filter(|m| !exclude.is_match(&m.module))
        .collect();

    Ok((selected, missing))
}

fn module_name(path: &Utf8Path) -> Option<String> {
    let file_name = path.file_name()?;
    let module = file_name.strip_suffix(DOCS_SUFFIX)?;
    if module.is_empty() {
        return None;
    }
    Some(module.to_string())
}

fn build_globset(globs: &[String]) -> anyhow::Result<GlobSet> {
    let mut b = GlobSetBuilder::new();
    for g in globs {
        b.add(Glob::new(g).with_context(|| format!("invalid glob: {g}"))?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(p: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(p).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(module: &str) -> ModuleSource {
        ModuleSource {
            module: module.to_string(),
            path: DocsPath::new(format!("{module}{DOCS_SUFFIX}")),
        }
    }

    fn names(sources: &[ModuleSource]) -> Vec<&str> {
        sources.iter().map(|m| m.module.as_str()).collect()
    }

    #[test]
    fn module_name_strips_the_suffix() {
        assert_eq!(
            module_name(Utf8Path::new("docs/shop_cart.docs.json")).as_deref(),
            Some("shop_cart")
        );
        assert_eq!(module_name(Utf8Path::new("docs/.docs.json")), None);
        assert_eq!(module_name(Utf8Path::new("docs/shop_cart.json")), None);
    }

    #[test]
    fn empty_selection_keeps_everything() {
        let (selected, missing) =
            select_modules(vec![source("a"), source("b")], &ModuleSelection::default())
                .expect("select");
        assert_eq!(names(&selected), vec!["a", "b"]);
        assert!(missing.is_empty());
    }

    #[test]
    fn include_and_exclude_globs_filter_by_module_name() {
        let selection = ModuleSelection {
            include: vec!["shop_*".to_string()],
            exclude: vec!["shop_test*".to_string()],
            ..ModuleSelection::default()
        };
        let (selected, _) = select_modules(
            vec![source("billing"), source("shop_cart"), source("shop_test_util")],
            &selection,
        )
        .expect("select");
        assert_eq!(names(&selected), vec!["shop_cart"]);
    }

    #[test]
    fn named_modules_report_the_ones_not_found() {
        let selection = ModuleSelection {
            names: vec!["b".to_string(), "zz".to_string(), "zz".to_string()],
            ..ModuleSelection::default()
        };
        let (selected, missing) =
            select_modules(vec![source("a"), source("b")], &selection).expect("select");
        assert_eq!(names(&selected), vec!["b"]);
        assert_eq!(missing, vec!["zz".to_string()]);
    }

    #[test]
    fn invalid_glob_is_an_error() {
        let selection = ModuleSelection {
            include: vec!["[".to_string()],
            ..ModuleSelection::default()
        };
        assert!(select_modules(vec![source("a")], &selection).is_err());
    }
}
