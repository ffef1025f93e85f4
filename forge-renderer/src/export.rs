//! Static site export.
//!
//! Turns a project into a deployable bundle: one HTML document per page,
//! `styles.css`, `script.js`, `package.json`, and a French README. Exports
//! are deterministic: the same project and options always produce the same
//! bytes.

use crate::fragment::{escape_html, Fragment};
use crate::kinds;
use forge_core::{
    forest_contains_kind, style_pairs, style_to_css, ComponentNode, ForgeError, ForgeResult,
    PageRef, Project, ResolvedNode,
};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Export tuning, all flags optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    /// Emit `styles.css` and link it from every page.
    #[serde(default = "default_true")]
    pub include_css: bool,
    /// Emit `script.js` and reference it from every page.
    #[serde(default = "default_true")]
    pub include_js: bool,
    /// Strip comments and whitespace from the stylesheet.
    pub minify: bool,
    /// Put the stylesheet in a `<style>` block instead of a file.
    pub inline_css: bool,
    /// Emit the viewport meta and responsive media queries.
    #[serde(default = "default_true")]
    pub responsive: bool,
    /// Emit description, keywords, Open Graph, and Twitter metadata.
    #[serde(default = "default_true")]
    pub seo_optimized: bool,
    /// Cache-busting token appended to the stylesheet URL.
    pub cache_version: Option<String>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_css: true,
            include_js: true,
            minify: false,
            inline_css: false,
            responsive: true,
            seo_optimized: true,
            cache_version: None,
        }
    }
}

/// One file of the exported bundle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportFile {
    /// Relative path inside the bundle.
    pub path: String,
    /// UTF-8 file content.
    pub content: String,
}

/// A complete exported site.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    /// Bundle files, pages first.
    pub files: Vec<ExportFile>,
}

impl ExportBundle {
    /// Look up a file's content by path.
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.content.as_str())
    }
}

/// Renders projects into static bundles.
#[derive(Debug, Clone, Default)]
pub struct ProjectExporter {
    options: ExportOptions,
}

impl ProjectExporter {
    /// Create an exporter with the given options.
    #[must_use]
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Export a project as a static bundle.
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::EmptyProject`] when the project has no pages.
    pub fn export(&self, project: &Project) -> ForgeResult<ExportBundle> {
        let pages = &project.content.pages;
        if pages.is_empty() {
            return Err(ForgeError::EmptyProject(project.name.clone()));
        }
        tracing::info!(project = %project.id, pages = pages.len(), "exporting project");

        let mut node_rules = Vec::new();
        for page in pages {
            for root in &page.content.structure {
                collect_node_rules(root, !self.options.inline_css, &mut node_rules);
            }
        }
        let stylesheet = self.build_css(project, &node_rules);

        let mut files = Vec::new();
        for page in pages {
            files.push(ExportFile {
                path: page_file_name(page),
                content: self.build_html(project, page, &stylesheet),
            });
        }
        if self.options.include_css && !self.options.inline_css {
            files.push(ExportFile {
                path: "styles.css".to_string(),
                content: stylesheet,
            });
        }
        if self.options.include_js {
            let js = build_js(project);
            files.push(ExportFile {
                path: "script.js".to_string(),
                content: if self.options.minify { minify_js(&js) } else { js },
            });
        }
        files.push(ExportFile {
            path: "package.json".to_string(),
            content: build_package_json(project)?,
        });
        files.push(ExportFile {
            path: "README.md".to_string(),
            content: build_readme(project),
        });
        Ok(ExportBundle { files })
    }

    fn build_html(&self, project: &Project, page: &PageRef, stylesheet: &str) -> String {
        let meta = resolve_meta(project, page);
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        if self.options.responsive {
            let viewport = meta
                .viewport
                .as_deref()
                .unwrap_or("width=device-width, initial-scale=1.0");
            html.push_str(&format!(
                "  <meta name=\"viewport\" content=\"{}\">\n",
                escape_html(viewport)
            ));
        }
        html.push_str(&format!(
            "  <title>{}</title>\n",
            escape_html(&meta.title)
        ));
        if self.options.seo_optimized {
            if !meta.description.is_empty() {
                html.push_str(&format!(
                    "  <meta name=\"description\" content=\"{}\">\n",
                    escape_html(&meta.description)
                ));
            }
            if !meta.keywords.is_empty() {
                html.push_str(&format!(
                    "  <meta name=\"keywords\" content=\"{}\">\n",
                    escape_html(&meta.keywords.join(", "))
                ));
            }
            html.push_str(&format!(
                "  <meta name=\"author\" content=\"{}\">\n",
                escape_html(&meta.author)
            ));
            html.push_str(&format!(
                "  <meta property=\"og:title\" content=\"{}\">\n",
                escape_html(&meta.title)
            ));
            if !meta.description.is_empty() {
                html.push_str(&format!(
                    "  <meta property=\"og:description\" content=\"{}\">\n",
                    escape_html(&meta.description)
                ));
            }
            html.push_str("  <meta property=\"og:type\" content=\"website\">\n");
            html.push_str(&format!(
                "  <meta property=\"og:site_name\" content=\"{}\">\n",
                escape_html(&project.name)
            ));
            html.push_str("  <meta name=\"twitter:card\" content=\"summary\">\n");
            html.push_str(&format!(
                "  <meta name=\"twitter:title\" content=\"{}\">\n",
                escape_html(&meta.title)
            ));
            if !meta.description.is_empty() {
                html.push_str(&format!(
                    "  <meta name=\"twitter:description\" content=\"{}\">\n",
                    escape_html(&meta.description)
                ));
            }
        }
        if self.options.include_css {
            if self.options.inline_css {
                html.push_str("  <style>\n");
                html.push_str(stylesheet);
                html.push_str("\n  </style>\n");
            } else {
                let href = match &self.options.cache_version {
                    Some(version) => format!("styles.css?v={version}"),
                    None => "styles.css".to_string(),
                };
                html.push_str(&format!(
                    "  <link rel=\"stylesheet\" href=\"{}\">\n",
                    escape_html(&href)
                ));
            }
        }
        html.push_str("</head>\n<body>\n");
        for root in &page.content.structure {
            html.push_str(&export_node(root, self.options.inline_css).to_html());
            html.push('\n');
        }
        if self.options.include_js {
            html.push_str("  <script src=\"script.js\"></script>\n");
        }
        html.push_str("</body>\n</html>\n");
        html
    }

    fn build_css(&self, project: &Project, node_rules: &[(String, String)]) -> String {
        let mut css = String::new();
        css.push_str("/* Styles générés par PageForge */\n\n");
        css.push_str("* {\n  margin: 0;\n  padding: 0;\n  box-sizing: border-box;\n}\n\n");
        css.push_str(
            "body {\n  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, \
             sans-serif;\n  line-height: 1.6;\n  color: #333;\n}\n\n",
        );
        if let Some(styles) = &project.content.styles {
            if !styles.global.trim().is_empty() {
                css.push_str(styles.global.trim_end());
                css.push_str("\n\n");
            }
            for (selector, body) in &styles.components {
                css.push_str(&format!("{selector} {{\n{}\n}}\n\n", body.trim_end()));
            }
        }
        for page in &project.content.pages {
            if let Some(styles) = &page.content.styles {
                if !styles.trim().is_empty() {
                    css.push_str(styles.trim_end());
                    css.push_str("\n\n");
                }
            }
        }
        for (id, body) in node_rules {
            css.push_str(&format!("#{id} {{\n{body}\n}}\n\n"));
        }
        if self.options.responsive {
            css.push_str(RESPONSIVE_CSS);
        }
        let css = css.trim_end().to_string() + "\n";
        if self.options.minify {
            minify_css(&css)
        } else {
            css
        }
    }
}

const RESPONSIVE_CSS: &str = "@media (max-width: 768px) {\n  .container {\n    padding: 1rem;\n  }\n  h1, h2, h3, h4, h5, h6 {\n    font-size: 1.5rem;\n  }\n  .grid {\n    grid-template-columns: 1fr;\n  }\n}\n\n@media (max-width: 480px) {\n  body {\n    font-size: 0.9rem;\n  }\n  .container {\n    padding: 0.5rem;\n  }\n}\n";

/// Resolved head metadata for one page.
struct ResolvedMeta {
    title: String,
    description: String,
    keywords: Vec<String>,
    author: String,
    viewport: Option<String>,
}

fn resolve_meta(project: &Project, page: &PageRef) -> ResolvedMeta {
    let page_meta = page.content.meta.clone().unwrap_or_default();
    let project_meta = project.content.meta.clone().unwrap_or_default();
    let seo = project.settings.seo.clone().unwrap_or_default();

    let title = first_non_empty(&[
        page_meta.title.as_deref(),
        project_meta.title.as_deref(),
        seo.title.as_deref(),
    ])
    .map_or_else(|| format!("{} - {}", page.name, project.name), String::from);
    let description = first_non_empty(&[
        page_meta.description.as_deref(),
        project_meta.description.as_deref(),
        seo.description.as_deref(),
        project.description.as_deref(),
    ])
    .unwrap_or_default()
    .to_string();
    let keywords = if page_meta.keywords.is_empty() {
        if project_meta.keywords.is_empty() {
            seo.keywords
        } else {
            project_meta.keywords
        }
    } else {
        page_meta.keywords
    };
    let author = first_non_empty(&[page_meta.author.as_deref(), project_meta.author.as_deref()])
        .unwrap_or("PageForge")
        .to_string();
    ResolvedMeta {
        title,
        description,
        keywords,
        author,
        viewport: page_meta.viewport.or(project_meta.viewport),
    }
}

fn first_non_empty<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .flatten()
        .find(|s| !s.trim().is_empty())
}

/// Collect `#id` rule bodies for every node with surviving styles.
fn collect_node_rules(node: &ComponentNode, enabled: bool, rules: &mut Vec<(String, String)>) {
    if enabled {
        if let Some(body) = style_to_css(&node.styles) {
            rules.push((node.id.clone(), body));
        }
    }
    for child in &node.children {
        collect_node_rules(child, enabled, rules);
    }
}

/// Build the export markup for one node and its children.
fn export_node(node: &ComponentNode, inline_css: bool) -> Fragment {
    let resolved = ResolvedNode::new(node);
    if !resolved.is_supported() {
        tracing::warn!(id = %node.id, kind = %node.kind, "exporting unsupported component type");
        return Fragment::new("div")
            .attr("id", node.id.clone())
            .attr("class", "unsupported-component")
            .style("border", "2px dashed #ef4444")
            .style("color", "#b91c1c")
            .style("padding", "8px")
            .with_text(format!("Composant non supporté : {}", node.kind));
    }

    // Inner markup is synthesized from componentData when present; plain
    // nodes export their effective content as text.
    let synthesized = if node.component_data.is_empty() {
        Vec::new()
    } else {
        kinds::kind_for(&node.kind)
            .map(|k| k.export_static(&resolved))
            .unwrap_or_default()
    };

    let children: Vec<Fragment> = node
        .children
        .iter()
        .map(|child| export_node(child, inline_css))
        .collect();

    let has_interior = !synthesized.is_empty() || !children.is_empty();
    let tag = resolved.effective_tag();
    let void = matches!(tag, "img" | "input" | "br" | "hr");
    let tag = if void && has_interior { "div" } else { tag };

    let mut fragment = Fragment::new(tag).attr("id", node.id.clone());
    if let Some(class) = resolved.class_name() {
        fragment = fragment.attr("class", class.to_string());
    }
    for (name, value) in &node.attributes {
        if name == "className" {
            continue;
        }
        if let Some(text) = value.as_str() {
            fragment = fragment.attr(name.clone(), text.to_string());
        }
    }
    if inline_css {
        for (property, value) in style_pairs(&node.styles) {
            fragment = fragment.style(property, value);
        }
    }
    if synthesized.is_empty() {
        let content = resolved.effective_content();
        if !content.is_empty() {
            fragment = fragment.with_text(content);
        }
    }
    fragment.with_children(synthesized).with_children(children)
}

fn page_file_name(page: &PageRef) -> String {
    if page.path == "/" {
        "index.html".to_string()
    } else {
        sanitize_file_name(&format!("{}.html", page.name))
    }
}

/// Make a page name safe as a file name.
///
/// Lowercases, replaces anything outside `[a-z0-9.-]` with `-`, collapses
/// runs of dashes, and trims leading/trailing dashes.
#[must_use]
pub fn sanitize_file_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = false;
    for c in name.to_lowercase().chars() {
        let mapped = if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-' {
            c
        } else {
            '-'
        };
        if mapped == '-' {
            if !last_dash {
                out.push('-');
            }
            last_dash = true;
        } else {
            out.push(mapped);
            last_dash = false;
        }
    }
    out.trim_matches('-').to_string()
}

fn project_has_kind(project: &Project, kind: &str) -> bool {
    project
        .content
        .pages
        .iter()
        .any(|page| forest_contains_kind(&page.content.structure, kind))
}

fn build_js(project: &Project) -> String {
    let mut js = String::new();
    js.push_str("// Script généré par PageForge\n\n");
    js.push_str("document.addEventListener('DOMContentLoaded', function() {\n");
    js.push_str(&format!(
        "  console.log('{} - Page loaded successfully');\n\n",
        project.name.replace('\\', "\\\\").replace('\'', "\\'")
    ));
    js.push_str(
        "  document.querySelectorAll('button').forEach(function(button) {\n    \
         button.addEventListener('click', function() {\n      \
         button.classList.add('clicked');\n      \
         setTimeout(function() { button.classList.remove('clicked'); }, 200);\n    });\n  \
         });\n\n  \
         document.querySelectorAll('form').forEach(function(form) {\n    \
         form.addEventListener('submit', function(event) {\n      \
         event.preventDefault();\n    });\n  });\n",
    );
    if project_has_kind(project, "carousel") {
        js.push_str(CAROUSEL_JS);
    }
    if project_has_kind(project, "modal") {
        js.push_str(MODAL_JS);
    }
    js.push_str("});\n");
    if project_has_kind(project, "accordion") {
        js.push_str(ACCORDION_JS);
    }
    js.push_str(UTILITY_JS);
    js
}

const CAROUSEL_JS: &str = "\n  document.querySelectorAll('.carousel').forEach(function(carousel) {\n    var items = carousel.querySelectorAll('.carousel-item');\n    var dots = carousel.querySelectorAll('.carousel-dot');\n    var counter = carousel.querySelector('.carousel-counter');\n    if (items.length === 0) { return; }\n    var current = 0;\n    function show(index) {\n      items.forEach(function(item, i) {\n        item.style.display = i === index ? '' : 'none';\n      });\n      dots.forEach(function(dot, i) {\n        dot.toggleAttribute('data-active', i === index);\n      });\n      if (counter) { counter.textContent = (index + 1) + '/' + items.length; }\n      current = index;\n    }\n    dots.forEach(function(dot, i) {\n      dot.addEventListener('click', function() { show(i); });\n    });\n    setInterval(function() { show((current + 1) % items.length); }, 5000);\n  });\n";

const MODAL_JS: &str = "\n  document.querySelectorAll('[data-modal-target]').forEach(function(trigger) {\n    trigger.addEventListener('click', function() {\n      var modal = document.querySelector(trigger.getAttribute('data-modal-target'));\n      if (modal) { modal.style.display = 'block'; }\n    });\n  });\n  document.querySelectorAll('[data-modal-close]').forEach(function(closer) {\n    closer.addEventListener('click', function() {\n      var modal = closer.closest('.modal');\n      if (modal) { modal.style.display = 'none'; }\n    });\n  });\n";

const ACCORDION_JS: &str = "\nfunction toggleAccordion(index) {\n  var items = document.querySelectorAll('.accordion-item');\n  var item = items[index];\n  if (!item) { return; }\n  var content = item.querySelector('.accordion-content');\n  if (content) {\n    content.style.display = content.style.display === 'none' ? 'block' : 'none';\n  }\n}\n";

const UTILITY_JS: &str = "\nfunction toggleClass(selector, className) {\n  document.querySelectorAll(selector).forEach(function(element) {\n    element.classList.toggle(className);\n  });\n}\n\nfunction smoothScrollTo(selector) {\n  var target = document.querySelector(selector);\n  if (target) {\n    target.scrollIntoView({ behavior: 'smooth' });\n  }\n}\n";

fn build_package_json(project: &Project) -> ForgeResult<String> {
    let slug = project.name.to_lowercase().replace(' ', "-");
    let description = project
        .description
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| "Exporté depuis PageForge".to_string());
    let manifest = serde_json::json!({
        "name": slug,
        "version": "1.0.0",
        "description": description,
        "main": "index.html",
        "scripts": {
            "start": "npx serve .",
            "build": "echo 'Site déjà construit'",
            "dev": "npx serve ."
        },
        "keywords": ["website", "exported", "pageforge"],
        "author": "PageForge",
        "license": "MIT",
        "devDependencies": {
            "serve": "^14.0.0"
        }
    });
    let mut content = serde_json::to_string_pretty(&manifest)?;
    content.push('\n');
    Ok(content)
}

fn build_readme(project: &Project) -> String {
    let mut pages = String::new();
    for page in &project.content.pages {
        pages.push_str(&format!("- `{}` — {}\n", page_file_name(page), page.name));
    }
    format!(
        "# {name}\n\nSite statique exporté depuis PageForge.\n\n## Pages\n\n{pages}\n## \
         Déploiement\n\n1. Installez les dépendances : `npm install`\n2. Lancez le site en \
         local : `npm start`\n3. Déployez le contenu du dossier sur votre hébergeur (Netlify, \
         Vercel, GitHub Pages...).\n\nAucune étape de build n'est nécessaire : le site est \
         prêt à servir tel quel.\n\n---\n\nGénéré avec PageForge\n",
        name = project.name,
        pages = pages
    )
}

/// Strip comments and collapse whitespace in a stylesheet.
#[must_use]
pub fn minify_css(css: &str) -> String {
    let mut out = String::with_capacity(css.len());
    let mut chars = css.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }
    let mut minified = String::with_capacity(out.len());
    let mut pending_space = false;
    for c in out.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space
            && !minified.is_empty()
            && !matches!(minified.chars().last(), Some('{' | '}' | ';' | ':' | ','))
            && !matches!(c, '{' | '}' | ';' | ':' | ',')
        {
            minified.push(' ');
        }
        pending_space = false;
        minified.push(c);
    }
    minified
}

/// Strip line comments, indentation, and blank lines from a script.
///
/// Statements stay one per line, so the output remains valid without a
/// real parser.
#[must_use]
pub fn minify_js(js: &str) -> String {
    let mut minified = String::with_capacity(js.len());
    for line in js.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        minified.push_str(trimmed);
        minified.push('\n');
    }
    minified
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{PageContent, ProjectContent, ProjectSettings, ProjectStyles};
    use serde_json::json;

    fn page(name: &str, path: &str, structure: Vec<ComponentNode>) -> PageRef {
        PageRef {
            id: format!("page-{name}"),
            name: name.to_string(),
            path: path.to_string(),
            content: PageContent {
                structure,
                ..PageContent::default()
            },
        }
    }

    fn project(pages: Vec<PageRef>) -> Project {
        Project {
            id: "p1".to_string(),
            name: "Mon Site".to_string(),
            description: Some("Vitrine de test".to_string()),
            project_type: "multi-page".to_string(),
            template: None,
            content: ProjectContent {
                pages,
                ..ProjectContent::default()
            },
            settings: ProjectSettings::default(),
            created_at: 0,
            updated_at: 0,
            is_active: true,
        }
    }

    #[test]
    fn empty_project_refuses_to_export() {
        let err = ProjectExporter::default()
            .export(&project(Vec::new()))
            .unwrap_err();
        assert!(err.to_string().contains("n'a aucune page définie"));
    }

    #[test]
    fn root_page_becomes_index_html() {
        let project = project(vec![
            page("Accueil", "/", vec![ComponentNode::new("heading")]),
            page("À Propos", "/a-propos", Vec::new()),
        ]);
        let bundle = ProjectExporter::default().export(&project).unwrap();
        assert!(bundle.file("index.html").is_some());
        assert!(bundle.file("propos.html").is_some());
    }

    #[test]
    fn bundle_carries_support_files() {
        let bundle = ProjectExporter::default()
            .export(&project(vec![page("Accueil", "/", Vec::new())]))
            .unwrap();
        assert!(bundle.file("styles.css").is_some());
        assert!(bundle.file("script.js").is_some());
        assert!(bundle.file("package.json").is_some());
        assert!(bundle.file("README.md").is_some());
    }

    #[test]
    fn html_head_has_french_lang_and_seo_tags() {
        let bundle = ProjectExporter::default()
            .export(&project(vec![page("Accueil", "/", Vec::new())]))
            .unwrap();
        let html = bundle.file("index.html").unwrap();
        assert!(html.contains("<html lang=\"fr\">"));
        assert!(html.contains("<title>Accueil - Mon Site</title>"));
        assert!(html.contains("og:site_name\" content=\"Mon Site\""));
        assert!(html.contains("twitter:card\" content=\"summary\""));
        assert!(html.contains("name=\"author\" content=\"PageForge\""));
    }

    #[test]
    fn seo_flag_off_drops_meta_but_keeps_title() {
        let exporter = ProjectExporter::new(ExportOptions {
            seo_optimized: false,
            ..ExportOptions::default()
        });
        let bundle = exporter
            .export(&project(vec![page("Accueil", "/", Vec::new())]))
            .unwrap();
        let html = bundle.file("index.html").unwrap();
        assert!(html.contains("<title>"));
        assert!(!html.contains("og:title"));
    }

    #[test]
    fn node_styles_land_in_the_stylesheet_not_inline() {
        let mut node = ComponentNode::new("heading").with_content("Bonjour");
        node.id = "hero-title".to_string();
        node.styles
            .insert("fontSize".to_string(), json!("3rem"));
        let bundle = ProjectExporter::default()
            .export(&project(vec![page("Accueil", "/", vec![node])]))
            .unwrap();
        let css = bundle.file("styles.css").unwrap();
        assert!(css.contains("#hero-title {\n  font-size: 3rem;\n}"));
        let html = bundle.file("index.html").unwrap();
        assert!(html.contains("id=\"hero-title\""));
        assert!(!html.contains("style=\"font-size"));
    }

    #[test]
    fn inline_css_mode_embeds_styles() {
        let exporter = ProjectExporter::new(ExportOptions {
            inline_css: true,
            ..ExportOptions::default()
        });
        let mut node = ComponentNode::new("heading");
        node.styles.insert("color".to_string(), json!("red"));
        let bundle = exporter
            .export(&project(vec![page("Accueil", "/", vec![node])]))
            .unwrap();
        assert!(bundle.file("styles.css").is_none());
        let html = bundle.file("index.html").unwrap();
        assert!(html.contains("<style>"));
        assert!(html.contains("style=\"color: red\""));
    }

    #[test]
    fn export_is_deterministic() {
        let project = project(vec![page(
            "Accueil",
            "/",
            vec![ComponentNode::new("button")],
        )]);
        let exporter = ProjectExporter::default();
        let first = exporter.export(&project).unwrap();
        let second = exporter.export(&project).unwrap();
        for (a, b) in first.files.iter().zip(second.files.iter()) {
            assert_eq!(a.path, b.path);
            assert_eq!(a.content, b.content);
        }
    }

    #[test]
    fn default_button_exports_bouton() {
        let bundle = ProjectExporter::default()
            .export(&project(vec![page(
                "Accueil",
                "/",
                vec![ComponentNode::new("button")],
            )]))
            .unwrap();
        assert!(bundle.file("index.html").unwrap().contains(">Bouton</button>"));
    }

    #[test]
    fn unsupported_component_exports_visible_marker() {
        let bundle = ProjectExporter::default()
            .export(&project(vec![page(
                "Accueil",
                "/",
                vec![ComponentNode::new("hologram")],
            )]))
            .unwrap();
        let html = bundle.file("index.html").unwrap();
        assert!(html.contains("Composant non supporté : hologram"));
        assert!(html.contains("unsupported-component"));
    }

    #[test]
    fn carousel_component_pulls_in_carousel_js() {
        let mut carousel = ComponentNode::new("carousel");
        carousel
            .component_data
            .insert("images".to_string(), json!(["a.jpg", "b.jpg"]));
        let bundle = ProjectExporter::default()
            .export(&project(vec![page("Accueil", "/", vec![carousel])]))
            .unwrap();
        let js = bundle.file("script.js").unwrap();
        assert!(js.contains(".carousel-item"));
        assert!(js.contains("5000"));
        assert!(!js.contains("data-modal-target"));
    }

    #[test]
    fn accordion_component_defines_toggle_accordion() {
        let mut accordion = ComponentNode::new("accordion");
        accordion.component_data.insert(
            "items".to_string(),
            json!([{ "question": "Q", "answer": "R" }]),
        );
        let bundle = ProjectExporter::default()
            .export(&project(vec![page("Accueil", "/", vec![accordion])]))
            .unwrap();
        let js = bundle.file("script.js").unwrap();
        assert!(js.contains("function toggleAccordion(index)"));
        let html = bundle.file("index.html").unwrap();
        assert!(html.contains("toggleAccordion(0)"));
    }

    #[test]
    fn minified_css_has_no_comments_or_newlines() {
        let exporter = ProjectExporter::new(ExportOptions {
            minify: true,
            ..ExportOptions::default()
        });
        let bundle = exporter
            .export(&project(vec![page("Accueil", "/", Vec::new())]))
            .unwrap();
        let css = bundle.file("styles.css").unwrap();
        assert!(!css.contains("/*"));
        assert!(!css.contains('\n'));
        assert!(css.contains("box-sizing:border-box"));
    }

    #[test]
    fn minified_js_drops_comments_and_blank_lines() {
        let exporter = ProjectExporter::new(ExportOptions {
            minify: true,
            ..ExportOptions::default()
        });
        let bundle = exporter
            .export(&project(vec![page("Accueil", "/", Vec::new())]))
            .unwrap();
        let js = bundle.file("script.js").unwrap();
        assert!(!js.contains("// Script généré"));
        assert!(!js.contains("\n\n"));
        assert!(!js.contains("  "));
        assert!(js.contains("document.addEventListener('DOMContentLoaded'"));
    }

    #[test]
    fn cache_version_busts_the_stylesheet_link() {
        let exporter = ProjectExporter::new(ExportOptions {
            cache_version: Some("42".to_string()),
            ..ExportOptions::default()
        });
        let bundle = exporter
            .export(&project(vec![page("Accueil", "/", Vec::new())]))
            .unwrap();
        assert!(bundle
            .file("index.html")
            .unwrap()
            .contains("styles.css?v=42"));
    }

    #[test]
    fn global_and_component_styles_are_emitted() {
        let mut project = project(vec![page("Accueil", "/", Vec::new())]);
        let mut components = std::collections::BTreeMap::new();
        components.insert(".hero".to_string(), "  padding: 2rem;".to_string());
        project.content.styles = Some(ProjectStyles {
            global: "a { color: inherit; }".to_string(),
            components,
        });
        let bundle = ProjectExporter::default().export(&project).unwrap();
        let css = bundle.file("styles.css").unwrap();
        assert!(css.contains("a { color: inherit; }"));
        assert!(css.contains(".hero {\n  padding: 2rem;\n}"));
    }

    #[test]
    fn sanitize_file_name_cases() {
        assert_eq!(sanitize_file_name("À Propos.html"), "propos.html");
        assert_eq!(sanitize_file_name("Contact!!.html"), "contact-.html");
        assert_eq!(sanitize_file_name("--nos--services--"), "nos-services");
    }

    #[test]
    fn package_json_slugs_the_name() {
        let bundle = ProjectExporter::default()
            .export(&project(vec![page("Accueil", "/", Vec::new())]))
            .unwrap();
        let manifest: serde_json::Value =
            serde_json::from_str(bundle.file("package.json").unwrap()).unwrap();
        assert_eq!(manifest["name"], "mon-site");
        assert_eq!(manifest["license"], "MIT");
        assert_eq!(manifest["devDependencies"]["serve"], "^14.0.0");
    }

    #[test]
    fn readme_lists_every_page() {
        let bundle = ProjectExporter::default()
            .export(&project(vec![
                page("Accueil", "/", Vec::new()),
                page("Contact", "/contact", Vec::new()),
            ]))
            .unwrap();
        let readme = bundle.file("README.md").unwrap();
        assert!(readme.contains("`index.html` — Accueil"));
        assert!(readme.contains("`contact.html` — Contact"));
        assert!(readme.contains("Généré avec PageForge"));
    }
}
