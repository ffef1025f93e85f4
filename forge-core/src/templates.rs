//! Built-in templates seeded into every store.
//!
//! Seed structures are kept as JSON literals because that is exactly how the
//! editor persists them; deserializing through [`PageContent`] keeps the
//! seeds honest against the node model.

use crate::project::{PageContent, Template};
use serde_json::{json, Value};

/// Build the built-in template records.
///
/// Ids are stable so projects created from a template keep a meaningful
/// `template` reference across restarts.
#[must_use]
pub fn builtin_templates(now_ms: u64) -> Vec<Template> {
    seeds()
        .into_iter()
        .filter_map(|seed| {
            let content: PageContent = match serde_json::from_value(seed.content) {
                Ok(content) => content,
                Err(error) => {
                    tracing::error!(template = seed.name, %error, "invalid template seed");
                    return None;
                }
            };
            Some(Template {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                description: Some(seed.description.to_string()),
                category: seed.category.to_string(),
                thumbnail: Some(seed.thumbnail.to_string()),
                content,
                tags: seed.tags.iter().map(ToString::to_string).collect(),
                is_built_in: true,
                created_at: now_ms,
            })
        })
        .collect()
}

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    thumbnail: &'static str,
    tags: &'static [&'static str],
    content: Value,
}

fn seeds() -> Vec<Seed> {
    vec![
        Seed {
            id: "builtin-landing-modern",
            name: "Page d'accueil moderne",
            description: "Template responsive avec sections hero, features, témoignages",
            category: "landing",
            thumbnail: "landing-modern",
            tags: &["landing", "hero", "modern", "responsive"],
            content: landing_content(),
        },
        Seed {
            id: "builtin-ecommerce-store",
            name: "Boutique en ligne",
            description: "Template pour site marchand avec catalogue produits",
            category: "ecommerce",
            thumbnail: "ecommerce-store",
            tags: &["ecommerce", "shop", "products", "responsive"],
            content: store_content(),
        },
        Seed {
            id: "builtin-portfolio-creative",
            name: "Portfolio créatif",
            description: "Showcase pour projets créatifs et professionnels",
            category: "portfolio",
            thumbnail: "portfolio-creative",
            tags: &["portfolio", "creative", "projects", "personal"],
            content: portfolio_content(),
        },
    ]
}

fn landing_content() -> Value {
    json!({
        "structure": [
            {
                "id": "hero-section",
                "type": "section",
                "tag": "section",
                "attributes": { "className": "hero-section" },
                "styles": {
                    "background": "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
                    "minHeight": "100vh",
                    "display": "flex",
                    "alignItems": "center",
                    "justifyContent": "center",
                    "color": "white",
                    "textAlign": "center"
                },
                "children": [
                    {
                        "id": "hero-container",
                        "type": "container",
                        "tag": "div",
                        "attributes": { "className": "container" },
                        "styles": { "maxWidth": "1200px", "padding": "0 2rem" },
                        "children": [
                            {
                                "id": "hero-title",
                                "type": "heading",
                                "tag": "h1",
                                "content": "Bienvenue sur notre site",
                                "styles": {
                                    "fontSize": "3rem",
                                    "marginBottom": "1rem",
                                    "fontWeight": "bold"
                                }
                            },
                            {
                                "id": "hero-subtitle",
                                "type": "text",
                                "tag": "p",
                                "content": "Découvrez nos solutions innovantes",
                                "styles": { "fontSize": "1.25rem", "marginBottom": "2rem" }
                            },
                            {
                                "id": "hero-cta",
                                "type": "button",
                                "tag": "button",
                                "content": "En savoir plus",
                                "styles": {
                                    "backgroundColor": "#ff6b6b",
                                    "color": "white",
                                    "padding": "1rem 2rem",
                                    "border": "none",
                                    "borderRadius": "0.5rem",
                                    "fontSize": "1.1rem",
                                    "cursor": "pointer"
                                }
                            }
                        ]
                    }
                ]
            }
        ],
        "styles": "* { margin: 0; padding: 0; box-sizing: border-box; }\nbody { font-family: 'Inter', sans-serif; }\n.hero-section { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); }\n.container { max-width: 1200px; margin: 0 auto; }",
        "meta": {
            "title": "Page d'accueil moderne",
            "description": "Template de landing page moderne et responsive"
        }
    })
}

fn store_content() -> Value {
    json!({
        "structure": [
            {
                "id": "header",
                "type": "header",
                "tag": "header",
                "attributes": { "className": "site-header" },
                "styles": {
                    "backgroundColor": "#ffffff",
                    "boxShadow": "0 2px 4px rgba(0,0,0,0.1)",
                    "position": "sticky",
                    "top": "0",
                    "zIndex": "1000"
                },
                "children": [
                    {
                        "id": "nav",
                        "type": "navigation",
                        "tag": "nav",
                        "attributes": { "className": "main-nav" },
                        "styles": {
                            "display": "flex",
                            "justifyContent": "space-between",
                            "alignItems": "center",
                            "padding": "1rem 2rem"
                        },
                        "children": [
                            {
                                "id": "logo",
                                "type": "text",
                                "tag": "h1",
                                "content": "Ma Boutique",
                                "styles": {
                                    "fontSize": "1.5rem",
                                    "fontWeight": "bold",
                                    "color": "#333"
                                }
                            },
                            {
                                "id": "cart",
                                "type": "button",
                                "tag": "button",
                                "content": "Panier (0)",
                                "styles": {
                                    "backgroundColor": "#007bff",
                                    "color": "white",
                                    "padding": "0.5rem 1rem",
                                    "border": "none",
                                    "borderRadius": "0.25rem"
                                }
                            }
                        ]
                    }
                ]
            },
            {
                "id": "featured-carousel",
                "type": "section",
                "tag": "section",
                "attributes": { "className": "featured-carousel" },
                "styles": { "backgroundColor": "#fff", "padding": "3rem 2rem" },
                "children": [
                    {
                        "id": "carousel-container",
                        "type": "container",
                        "tag": "div",
                        "styles": { "maxWidth": "1200px", "margin": "0 auto" },
                        "children": [
                            {
                                "id": "carousel-title",
                                "type": "heading",
                                "tag": "h2",
                                "content": "Produits Populaires",
                                "styles": {
                                    "fontSize": "2rem",
                                    "textAlign": "center",
                                    "marginBottom": "2rem",
                                    "color": "#333"
                                }
                            },
                            {
                                "id": "products-carousel",
                                "type": "carousel",
                                "tag": "div",
                                "attributes": { "className": "products-carousel" },
                                "styles": {
                                    "display": "flex",
                                    "gap": "1.5rem",
                                    "overflowX": "auto",
                                    "padding": "1rem 0",
                                    "scrollBehavior": "smooth"
                                },
                                "children": [
                                    {
                                        "id": "carousel-product-1",
                                        "type": "card",
                                        "tag": "div",
                                        "attributes": { "className": "carousel-product-card" },
                                        "styles": {
                                            "minWidth": "280px",
                                            "backgroundColor": "white",
                                            "borderRadius": "0.75rem",
                                            "boxShadow": "0 4px 12px rgba(0,0,0,0.1)",
                                            "overflow": "hidden",
                                            "border": "1px solid #e2e8f0"
                                        },
                                        "children": [
                                            {
                                                "id": "carousel-product-image-1",
                                                "type": "image",
                                                "tag": "div",
                                                "content": "⭐",
                                                "styles": {
                                                    "backgroundColor": "#f59e0b",
                                                    "height": "200px",
                                                    "display": "flex",
                                                    "alignItems": "center",
                                                    "justifyContent": "center",
                                                    "fontSize": "3rem",
                                                    "color": "white"
                                                }
                                            },
                                            {
                                                "id": "carousel-product-info-1",
                                                "type": "container",
                                                "tag": "div",
                                                "styles": { "padding": "1.5rem" },
                                                "children": [
                                                    {
                                                        "id": "carousel-product-title-1",
                                                        "type": "heading",
                                                        "tag": "h3",
                                                        "content": "Produit Vedette",
                                                        "styles": {
                                                            "fontSize": "1.25rem",
                                                            "marginBottom": "0.5rem",
                                                            "color": "#333"
                                                        }
                                                    },
                                                    {
                                                        "id": "carousel-product-price-1",
                                                        "type": "text",
                                                        "tag": "p",
                                                        "content": "49,99 €",
                                                        "styles": {
                                                            "fontSize": "1.25rem",
                                                            "fontWeight": "bold",
                                                            "color": "#f59e0b",
                                                            "marginBottom": "1rem"
                                                        }
                                                    },
                                                    {
                                                        "id": "carousel-add-to-cart-1",
                                                        "type": "button",
                                                        "tag": "button",
                                                        "content": "Ajouter au panier",
                                                        "styles": {
                                                            "width": "100%",
                                                            "backgroundColor": "#007bff",
                                                            "color": "white",
                                                            "padding": "0.75rem",
                                                            "border": "none",
                                                            "borderRadius": "0.5rem",
                                                            "cursor": "pointer",
                                                            "fontWeight": "500"
                                                        }
                                                    }
                                                ]
                                            }
                                        ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            },
            {
                "id": "products-section",
                "type": "section",
                "tag": "section",
                "attributes": { "className": "products" },
                "styles": { "padding": "3rem 2rem", "backgroundColor": "#f8f9fa" },
                "children": [
                    {
                        "id": "products-grid",
                        "type": "grid",
                        "tag": "div",
                        "attributes": { "className": "products-grid" },
                        "styles": {
                            "display": "grid",
                            "gridTemplateColumns": "repeat(auto-fit, minmax(250px, 1fr))",
                            "gap": "2rem",
                            "maxWidth": "1200px",
                            "margin": "0 auto"
                        },
                        "children": [
                            {
                                "id": "product-card",
                                "type": "card",
                                "tag": "div",
                                "attributes": { "className": "product-card" },
                                "styles": {
                                    "backgroundColor": "white",
                                    "borderRadius": "0.5rem",
                                    "boxShadow": "0 2px 8px rgba(0,0,0,0.1)",
                                    "overflow": "hidden"
                                },
                                "children": [
                                    {
                                        "id": "product-image",
                                        "type": "image",
                                        "tag": "div",
                                        "content": "📦",
                                        "styles": {
                                            "backgroundColor": "#f8f9fa",
                                            "height": "200px",
                                            "display": "flex",
                                            "alignItems": "center",
                                            "justifyContent": "center",
                                            "fontSize": "3rem",
                                            "color": "#dee2e6"
                                        }
                                    },
                                    {
                                        "id": "product-info",
                                        "type": "container",
                                        "tag": "div",
                                        "styles": { "padding": "1rem" },
                                        "children": [
                                            {
                                                "id": "product-title",
                                                "type": "heading",
                                                "tag": "h3",
                                                "content": "Produit exemple",
                                                "styles": { "marginBottom": "0.5rem" }
                                            },
                                            {
                                                "id": "product-price",
                                                "type": "text",
                                                "tag": "p",
                                                "content": "29,99 €",
                                                "styles": {
                                                    "fontSize": "1.25rem",
                                                    "fontWeight": "bold",
                                                    "color": "#007bff"
                                                }
                                            }
                                        ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }
        ],
        "styles": "* { margin: 0; padding: 0; box-sizing: border-box; }\nbody { font-family: 'Inter', sans-serif; background-color: #f8f9fa; }\n.products-carousel::-webkit-scrollbar { height: 8px; }\n.products-carousel::-webkit-scrollbar-track { background: #f1f5f9; }\n.products-carousel::-webkit-scrollbar-thumb { background: #cbd5e1; border-radius: 4px; }\n.carousel-product-card:hover { transform: translateY(-4px); transition: transform 0.3s ease; }",
        "meta": {
            "title": "Boutique en ligne",
            "description": "Template pour site e-commerce moderne"
        }
    })
}

fn portfolio_content() -> Value {
    json!({
        "structure": [
            {
                "id": "portfolio-header",
                "type": "header",
                "tag": "header",
                "attributes": { "className": "portfolio-header" },
                "styles": {
                    "backgroundColor": "#1a1a1a",
                    "color": "white",
                    "padding": "4rem 2rem",
                    "textAlign": "center"
                },
                "children": [
                    {
                        "id": "profile-image",
                        "type": "image",
                        "tag": "div",
                        "content": "👤",
                        "styles": {
                            "width": "150px",
                            "height": "150px",
                            "borderRadius": "50%",
                            "backgroundColor": "#333",
                            "margin": "0 auto 2rem",
                            "display": "flex",
                            "alignItems": "center",
                            "justifyContent": "center",
                            "fontSize": "4rem"
                        }
                    },
                    {
                        "id": "profile-name",
                        "type": "heading",
                        "tag": "h1",
                        "content": "Votre Nom",
                        "styles": { "fontSize": "2.5rem", "marginBottom": "1rem" }
                    },
                    {
                        "id": "profile-title",
                        "type": "text",
                        "tag": "p",
                        "content": "Développeur Web & Designer",
                        "styles": { "fontSize": "1.25rem", "opacity": "0.8" }
                    }
                ]
            },
            {
                "id": "portfolio-grid",
                "type": "section",
                "tag": "section",
                "attributes": { "className": "portfolio-grid" },
                "styles": { "padding": "4rem 2rem" },
                "children": [
                    {
                        "id": "projects-container",
                        "type": "container",
                        "tag": "div",
                        "styles": {
                            "display": "grid",
                            "gridTemplateColumns": "repeat(auto-fit, minmax(300px, 1fr))",
                            "gap": "2rem",
                            "maxWidth": "1200px",
                            "margin": "0 auto"
                        },
                        "children": [
                            {
                                "id": "project-card",
                                "type": "card",
                                "tag": "div",
                                "attributes": { "class": "project-card" },
                                "styles": {
                                    "backgroundColor": "white",
                                    "borderRadius": "0.75rem",
                                    "overflow": "hidden",
                                    "boxShadow": "0 4px 12px rgba(0,0,0,0.1)",
                                    "transition": "transform 0.3s ease"
                                },
                                "children": [
                                    {
                                        "id": "project-image",
                                        "type": "image",
                                        "tag": "div",
                                        "content": "🎨",
                                        "styles": {
                                            "backgroundColor": "#8b5cf6",
                                            "height": "200px",
                                            "display": "flex",
                                            "alignItems": "center",
                                            "justifyContent": "center",
                                            "color": "white",
                                            "fontSize": "2rem"
                                        }
                                    },
                                    {
                                        "id": "project-info",
                                        "type": "container",
                                        "tag": "div",
                                        "styles": { "padding": "1.5rem" },
                                        "children": [
                                            {
                                                "id": "project-title",
                                                "type": "heading",
                                                "tag": "h3",
                                                "content": "Projet Créatif",
                                                "styles": {
                                                    "marginBottom": "0.5rem",
                                                    "fontSize": "1.25rem"
                                                }
                                            },
                                            {
                                                "id": "project-description",
                                                "type": "text",
                                                "tag": "p",
                                                "content": "Description du projet et technologies utilisées",
                                                "styles": { "color": "#666", "lineHeight": "1.6" }
                                            }
                                        ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            },
            {
                "id": "skills-section",
                "type": "section",
                "tag": "section",
                "attributes": { "className": "skills-section" },
                "styles": { "backgroundColor": "#f8fafc", "padding": "4rem 2rem" },
                "children": [
                    {
                        "id": "skills-container",
                        "type": "container",
                        "tag": "div",
                        "styles": {
                            "maxWidth": "800px",
                            "margin": "0 auto",
                            "textAlign": "center"
                        },
                        "children": [
                            {
                                "id": "skills-title",
                                "type": "heading",
                                "tag": "h2",
                                "content": "Mes Compétences",
                                "styles": {
                                    "fontSize": "2.5rem",
                                    "marginBottom": "3rem",
                                    "color": "#1a202c"
                                }
                            },
                            {
                                "id": "skills-carousel",
                                "type": "carousel",
                                "tag": "div",
                                "attributes": { "className": "skills-carousel" },
                                "styles": {
                                    "display": "flex",
                                    "gap": "2rem",
                                    "overflowX": "auto",
                                    "padding": "1rem",
                                    "scrollBehavior": "smooth"
                                },
                                "children": [
                                    {
                                        "id": "skill-react",
                                        "type": "card",
                                        "tag": "div",
                                        "attributes": { "className": "skill-card" },
                                        "styles": {
                                            "minWidth": "200px",
                                            "backgroundColor": "white",
                                            "borderRadius": "1rem",
                                            "padding": "2rem",
                                            "boxShadow": "0 4px 12px rgba(0,0,0,0.1)",
                                            "textAlign": "center"
                                        },
                                        "children": [
                                            {
                                                "id": "skill-icon",
                                                "type": "text",
                                                "tag": "div",
                                                "content": "⚛️",
                                                "styles": {
                                                    "fontSize": "3rem",
                                                    "marginBottom": "1rem"
                                                }
                                            },
                                            {
                                                "id": "skill-name",
                                                "type": "heading",
                                                "tag": "h3",
                                                "content": "React",
                                                "styles": {
                                                    "fontSize": "1.25rem",
                                                    "marginBottom": "0.5rem"
                                                }
                                            },
                                            {
                                                "id": "skill-progress",
                                                "type": "progress",
                                                "tag": "div",
                                                "styles": {
                                                    "width": "100%",
                                                    "height": "6px",
                                                    "backgroundColor": "#e2e8f0",
                                                    "borderRadius": "3px",
                                                    "overflow": "hidden"
                                                },
                                                "children": [
                                                    {
                                                        "id": "progress-bar",
                                                        "type": "container",
                                                        "tag": "div",
                                                        "styles": {
                                                            "width": "90%",
                                                            "height": "100%",
                                                            "backgroundColor": "#3b82f6",
                                                            "borderRadius": "3px"
                                                        }
                                                    }
                                                ]
                                            }
                                        ]
                                    }
                                ]
                            }
                        ]
                    }
                ]
            }
        ],
        "styles": "* { margin: 0; padding: 0; box-sizing: border-box; }\nbody { font-family: 'Inter', sans-serif; }\n.project-card:hover { transform: translateY(-4px); }\n.skills-carousel::-webkit-scrollbar { height: 6px; }\n.skills-carousel::-webkit-scrollbar-track { background: #f1f5f9; }\n.skills-carousel::-webkit-scrollbar-thumb { background: #cbd5e1; border-radius: 3px; }",
        "meta": {
            "title": "Portfolio créatif",
            "description": "Portfolio moderne pour showcaser vos projets"
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{find_duplicate_id, forest_contains_kind};

    #[test]
    fn three_builtin_templates_load() {
        let templates = builtin_templates(0);
        let names: Vec<&str> = templates.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Page d'accueil moderne",
                "Boutique en ligne",
                "Portfolio créatif"
            ]
        );
        assert!(templates.iter().all(|t| t.is_built_in));
    }

    #[test]
    fn landing_template_hero_structure() {
        let templates = builtin_templates(0);
        let landing = &templates[0];
        let hero = &landing.content.structure[0];
        assert_eq!(hero.id, "hero-section");
        let title = &hero.children[0].children[0];
        assert_eq!(title.id, "hero-title");
        assert_eq!(title.tag.as_deref(), Some("h1"));
        assert_eq!(title.content.as_deref(), Some("Bienvenue sur notre site"));
        assert_eq!(title.style("fontSize"), Some("3rem"));
    }

    #[test]
    fn template_node_ids_are_unique() {
        for template in builtin_templates(0) {
            assert_eq!(
                find_duplicate_id(&template.content.structure),
                None,
                "duplicate id in {}",
                template.name
            );
        }
    }

    #[test]
    fn store_template_carries_a_carousel() {
        let templates = builtin_templates(0);
        assert!(forest_contains_kind(&templates[1].content.structure, "carousel"));
        assert!(forest_contains_kind(&templates[2].content.structure, "carousel"));
    }

    #[test]
    fn every_seed_kind_is_registered() {
        for template in builtin_templates(0) {
            for root in &template.content.structure {
                root.walk(&mut |node| {
                    assert!(
                        crate::registry::Registry::definition(&node.kind).is_some(),
                        "unregistered kind {} in {}",
                        node.kind,
                        template.name
                    );
                });
            }
        }
    }
}
