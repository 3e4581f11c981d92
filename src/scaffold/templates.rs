//! File templates for a generated React/Vite project
//!
//! Bodies are embedded from `resources/templates/react/`. Placeholders use
//! the `{{.key}}` form and are substituted in a single pass with no escaping,
//! so a value containing markup lands in the output verbatim.

use serde::Serialize;

const VITE_CONFIG: &str = include_str!("../../resources/templates/react/vite.config.js.tmpl");
const INDEX_HTML: &str = include_str!("../../resources/templates/react/index.html.tmpl");
const MAIN_JSX: &str = include_str!("../../resources/templates/react/main.jsx.tmpl");
const HEADING_JSX: &str = include_str!("../../resources/templates/react/Heading.jsx.tmpl");
const CONTACT_JSX: &str = include_str!("../../resources/templates/react/Contact.jsx.tmpl");
const APP_JSX: &str = include_str!("../../resources/templates/react/App.jsx.tmpl");
const STYLES_CSS: &str = include_str!("../../resources/templates/react/styles.css.tmpl");

/// Substitute `{{.key}}` placeholders from `vars`.
///
/// Unknown placeholders are left as-is. Substituted values are never
/// rescanned, which chained `str::replace` calls can't guarantee once a
/// record field itself contains `{{.key}}` text.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{.") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 3..];

        let replaced = after.find("}}").and_then(|end| {
            let key = &after[..end];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, value)| (*value, end))
        });

        match replaced {
            Some((value, end)) => {
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str("{{.");
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[derive(Debug, Serialize)]
struct Manifest<'a> {
    name: &'a str,
    private: bool,
    version: &'static str,
    scripts: Scripts,
    dependencies: Dependencies,
    #[serde(rename = "devDependencies")]
    dev_dependencies: DevDependencies,
}

// Field order is the key order in the written file.
#[derive(Debug, Serialize)]
struct Scripts {
    dev: &'static str,
    build: &'static str,
    preview: &'static str,
}

#[derive(Debug, Serialize)]
struct Dependencies {
    react: &'static str,
    #[serde(rename = "react-dom")]
    react_dom: &'static str,
}

#[derive(Debug, Serialize)]
struct DevDependencies {
    vite: &'static str,
    #[serde(rename = "@vitejs/plugin-react")]
    vite_plugin_react: &'static str,
}

/// `package.json`, pretty-printed with two-space indentation and a trailing newline.
pub fn package_json(domain: &str) -> serde_json::Result<String> {
    let manifest = Manifest {
        name: domain,
        private: true,
        version: "0.0.0",
        scripts: Scripts {
            dev: "vite",
            build: "vite build",
            preview: "vite preview",
        },
        dependencies: Dependencies {
            react: "^18.2.0",
            react_dom: "^18.2.0",
        },
        dev_dependencies: DevDependencies {
            vite: "^5.3.0",
            vite_plugin_react: "^4.7.0",
        },
    };

    let mut text = serde_json::to_string_pretty(&manifest)?;
    text.push('\n');
    Ok(text)
}

pub fn vite_config(domain: &str) -> String {
    substitute(VITE_CONFIG, &[("domain", domain)])
}

pub fn index_html(title: &str) -> String {
    substitute(INDEX_HTML, &[("title", title)])
}

pub fn main_jsx() -> String {
    MAIN_JSX.to_string()
}

pub fn heading_jsx(hero_word: &str) -> String {
    substitute(HEADING_JSX, &[("hero_word", hero_word)])
}

pub fn contact_jsx(phone: &str, address: &str) -> String {
    substitute(CONTACT_JSX, &[("phone", phone), ("address", address)])
}

pub fn app_jsx() -> String {
    APP_JSX.to_string()
}

pub fn styles_css() -> String {
    STYLES_CSS.to_string()
}
