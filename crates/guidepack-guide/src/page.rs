//! Emits the self-contained HTML guide page.

use minijinja::{context, Environment};

use crate::assets;
use crate::content::ContentMap;
use crate::registry::GuideRegistry;

/// Display options for the emitted page.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Sidebar heading and window title
    pub title: String,

    /// Sidebar subheading
    pub subtitle: String,

    /// Product version shown in the welcome copy
    pub version: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "₿ Bitcoin Wallet".to_string(),
            subtitle: "Testing Guides".to_string(),
            version: "0.12.0".to_string(),
        }
    }
}

/// Errors that can occur while emitting the page.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("failed to render guide template: {0}")]
    Template(#[from] minijinja::Error),
}

#[derive(Debug, serde::Serialize)]
struct NavSection {
    heading: &'static str,
    links: Vec<NavLink>,
}

#[derive(Debug, serde::Serialize)]
struct NavLink {
    id: String,
    label: String,
}

/// Composes the navigation tree, guide sections, embedded content map and
/// fixed client behavior into one static HTML document.
///
/// Output is deterministic for a given registry and content map: nothing
/// time-dependent is embedded.
pub struct PageEmitter {
    options: PageOptions,
    env: Environment<'static>,
}

impl PageEmitter {
    pub fn new(options: PageOptions) -> Self {
        let mut env = Environment::new();

        env.add_template_owned("guide.html".to_string(), PAGE_TEMPLATE.to_string())
            .expect("Failed to add guide template");

        env.add_template_owned("welcome.html".to_string(), assets::WELCOME_TEMPLATE.to_string())
            .expect("Failed to add welcome template");

        Self { options, env }
    }

    /// Render the complete guide page.
    ///
    /// Every registry entry gets a navigation link and an empty section,
    /// whether or not its content was assembled; a guide missing from the
    /// content map simply has nothing to render when selected.
    pub fn render(
        &self,
        registry: &GuideRegistry,
        content: &ContentMap,
    ) -> Result<String, PageError> {
        let nav: Vec<NavSection> = registry
            .categories()
            .iter()
            .map(|category| NavSection {
                heading: category.kind.heading(),
                links: category
                    .entries
                    .iter()
                    .map(|entry| NavLink {
                        id: category.kind.guide_id(&entry.relative_path).to_string(),
                        label: format!("{} {}", entry.icon, entry.title),
                    })
                    .collect(),
            })
            .collect();

        let sections: Vec<String> = registry
            .entries()
            .map(|(kind, entry)| kind.guide_id(&entry.relative_path).to_string())
            .collect();

        let tmpl = self.env.get_template("guide.html")?;

        let html = tmpl.render(context! {
            title => &self.options.title,
            subtitle => &self.options.subtitle,
            version => &self.options.version,
            marked_cdn => assets::MARKED_CDN,
            stylesheet => assets::STYLESHEET,
            nav => nav,
            sections => sections,
            content_data => content_script(content),
            behavior => assets::BEHAVIOR,
        })?;

        Ok(html)
    }
}

impl Default for PageEmitter {
    fn default() -> Self {
        Self::new(PageOptions::default())
    }
}

/// Serialize the content map as the `markdownContent` object literal.
/// Values are already escaped for template-literal embedding.
fn content_script(content: &ContentMap) -> String {
    let mut js = String::from("const markdownContent = {\n");

    for (id, text) in content.iter() {
        js.push_str("  \"");
        js.push_str(id.as_str());
        js.push_str("\": `");
        js.push_str(text);
        js.push_str("`,\n");
    }

    js.push_str("};\n");
    js
}

const PAGE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }} - {{ subtitle }}</title>

    <!-- Markdown renderer -->
    <script src="{{ marked_cdn }}"></script>

    <style>
{{ stylesheet | safe }}
    </style>
</head>
<body>
<nav id="sidebar">
  <div class="sidebar-header">
    <h2>{{ title }}</h2>
    <p>{{ subtitle }}</p>
  </div>

  <div class="search-box">
    <input type="text" id="search-input" placeholder="Search guides..." />
  </div>
{% for section in nav %}
  <div class="nav-section">
    <h3>{{ section.heading }}</h3>
    <ul>
{% for link in section.links %}      <li><a href="#{{ link.id }}" class="nav-link" data-guide="{{ link.id }}">{{ link.label }}</a></li>
{% endfor %}    </ul>
  </div>
{% endfor %}</nav>

    <main id="content">
        <section id="welcome" class="guide-section active">
            <div class="welcome-section markdown-body">
{% include "welcome.html" %}
            </div>
        </section>
{% for id in sections %}        <section id="{{ id }}" class="guide-section"><div class="markdown-body"></div></section>
{% endfor %}    </main>

    <script>
{{ content_data | safe }}
{{ behavior | safe }}
    </script>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::assemble;
    use crate::ident::GuideId;
    use crate::registry::{CategoryKind, GuideCategory, GuideEntry};
    use pretty_assertions::assert_eq;

    fn single_entry_registry() -> GuideRegistry {
        GuideRegistry::new(vec![GuideCategory {
            kind: CategoryKind::Core,
            entries: vec![GuideEntry::new("README.md", "Overview", "📋")],
        }])
    }

    #[test]
    fn emits_nav_link_section_and_content_for_one_guide() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "# Overview\n\nHello testers.").unwrap();

        let registry = single_entry_registry();
        let assembled = assemble(&registry, dir.path()).unwrap();
        assert!(assembled.content.contains(&GuideId::from_path("README.md")));

        let html = PageEmitter::default().render(&registry, &assembled.content).unwrap();

        assert!(html.contains(r##"<a href="#readme" class="nav-link" data-guide="readme">"##));
        assert!(html.contains(r#"<section id="readme" class="guide-section">"#));
        assert!(html.contains("\"readme\": `# Overview\n\nHello testers.`"));
    }

    #[test]
    fn welcome_section_is_always_present_and_active() {
        let registry = single_entry_registry();
        let html = PageEmitter::default()
            .render(&registry, &ContentMap::default())
            .unwrap();

        assert!(html.contains(r#"<section id="welcome" class="guide-section active">"#));
        // Quick-start anchors into the core guides survive emission intact.
        assert!(html.contains(r##"<a href="#readme">Overview</a>"##));
        assert!(html.contains(r##"<a href="#master-testing-guide">Master Testing Guide</a>"##));
    }

    #[test]
    fn welcome_copy_carries_product_version() {
        let registry = single_entry_registry();

        let emitter = PageEmitter::new(PageOptions {
            version: "0.13.1".to_string(),
            ..PageOptions::default()
        });
        let html = emitter.render(&registry, &ContentMap::default()).unwrap();

        assert!(html.contains("Chrome Extension v0.13.1."));
    }

    #[test]
    fn skipped_guide_keeps_nav_entry_and_section() {
        // Empty content map: the registry entry still appears in nav and as
        // an (unrenderable) section, matching a missing source file.
        let registry = single_entry_registry();
        let html = PageEmitter::default()
            .render(&registry, &ContentMap::default())
            .unwrap();

        assert!(html.contains(r#"data-guide="readme""#));
        assert!(html.contains(r#"<section id="readme""#));
        assert!(!html.contains("\"readme\": `"));
    }

    #[test]
    fn output_is_deterministic() {
        let registry = GuideRegistry::builtin();
        let mut content = ContentMap::default();
        content.insert(GuideId::from_path("README.md"), "# Overview".to_string());

        let emitter = PageEmitter::default();
        let first = emitter.render(&registry, &content).unwrap();
        let second = emitter.render(&registry, &content).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn nav_groups_follow_category_order() {
        let registry = GuideRegistry::builtin();
        let html = PageEmitter::default()
            .render(&registry, &ContentMap::default())
            .unwrap();

        let core = html.find("Core Guides").unwrap();
        let features = html.find("Feature Tests").unwrap();
        let workflows = html.find("Workflows").unwrap();
        assert!(core < features && features < workflows);

        // Feature entries anchor under the rewritten prefix.
        assert!(html.contains(r#"data-guide="feature-01_tab_architecture""#));
    }
}
