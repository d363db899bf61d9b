use crate::RenderableModule;

/// Plain-text listing: a `Module: <name>` header per module, then one indented type
/// per line. Modules with nothing to show are skipped.
pub fn render_module_listing(modules: &[RenderableModule]) -> String {
    let mut out = String::new();
    for m in modules.iter().filter(|m| !m.types.is_empty()) {
        out.push_str(&format!("Module: {}\n", m.module));
        for t in &m.types {
            out.push_str(&format!("  {}\n", t));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(name: &str, types: &[&str]) -> RenderableModule {
        RenderableModule {
            module: name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn lists_modules_in_order() {
        let text = render_module_listing(&[
            module("shop_cart", &["cart_state", "line"]),
            module("billing", &["invoice"]),
        ]);
        assert_eq!(
            text,
            "Module: shop_cart\n  cart_state\n  line\nModule: billing\n  invoice\n"
        );
    }

    #[test]
    fn empty_reports_print_nothing() {
        assert_eq!(render_module_listing(&[module("clean", &[])]), "");
        assert_eq!(render_module_listing(&[]), "");
    }
}
