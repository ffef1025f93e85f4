//! Static component definition registry.
//!
//! The registry is the single source of truth for the component vocabulary:
//! French labels and categories for the editor palette, default tags and
//! content shared by the renderer and the exporter, default styles applied
//! when a component is dropped on the canvas, and the list of CSS properties
//! the style panel exposes per type.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A component type definition.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentDefinition {
    /// Type identifier ("button", "carousel", ...).
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Palette label (French).
    pub label: &'static str,
    /// Palette category id.
    pub category: &'static str,
    /// Short description (French).
    pub description: &'static str,
    /// Whether the component is gated behind the premium tier.
    #[serde(rename = "isPremium")]
    pub premium: bool,
    /// HTML tag used when the node carries no explicit tag.
    #[serde(rename = "defaultTag")]
    pub default_tag: &'static str,
    /// Fallback text when the node carries no content.
    #[serde(rename = "defaultContent", skip_serializing_if = "Option::is_none")]
    pub default_content: Option<&'static str>,
    /// Attributes applied when a node of this type is created.
    #[serde(rename = "defaultAttributes")]
    pub default_attributes: &'static [(&'static str, &'static str)],
    /// Styles applied when a node of this type is created.
    #[serde(rename = "defaultStyles")]
    pub default_styles: &'static [(&'static str, &'static str)],
    /// Type-specific CSS properties for the style panel.
    #[serde(rename = "cssProperties")]
    pub css_properties: &'static [&'static str],
}

/// Palette categories, in display order: `(id, French name)`.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("basic", "Basique"),
    ("layout", "Mise en page"),
    ("content", "Contenu"),
    ("media", "Médias"),
    ("forms", "Formulaires"),
    ("navigation", "Navigation"),
    ("ecommerce", "E-commerce"),
    ("social", "Social"),
    ("charts", "Graphiques"),
    ("premium", "Premium"),
    ("advanced", "Avancé"),
    ("widgets", "Widgets"),
];

/// CSS properties available for every component type, regardless of its
/// type-specific list.
pub const COMMON_CSS_PROPERTIES: &[&str] = &[
    // Layout
    "display",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "z-index",
    "float",
    "clear",
    "overflow",
    "overflow-x",
    "overflow-y",
    "visibility",
    // Box model
    "width",
    "height",
    "max-width",
    "max-height",
    "min-width",
    "min-height",
    "margin",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "border",
    "border-width",
    "border-style",
    "border-color",
    "border-radius",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "box-sizing",
    "box-shadow",
    "outline",
    // Background
    "background",
    "background-color",
    "background-image",
    "background-repeat",
    "background-position",
    "background-size",
    "background-attachment",
    "background-origin",
    "background-clip",
    // Typography
    "color",
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "text-align",
    "text-decoration",
    "text-transform",
    "text-indent",
    "text-shadow",
    "line-height",
    "letter-spacing",
    "word-spacing",
    "white-space",
    "word-wrap",
    "word-break",
    // Flexbox
    "flex-direction",
    "flex-wrap",
    "flex-flow",
    "justify-content",
    "align-items",
    "align-content",
    "flex",
    "flex-grow",
    "flex-shrink",
    "flex-basis",
    "align-self",
    "order",
    "gap",
    "row-gap",
    "column-gap",
    // Grid
    "grid-template-columns",
    "grid-template-rows",
    "grid-template-areas",
    "grid-column",
    "grid-row",
    "grid-area",
    "grid-gap",
    "grid-column-gap",
    "grid-row-gap",
    // Transform & animation
    "transform",
    "transform-origin",
    "transition",
    "animation",
    "animation-name",
    "animation-duration",
    "animation-timing-function",
    "animation-delay",
    "animation-iteration-count",
    "animation-direction",
    // Others
    "opacity",
    "cursor",
    "filter",
    "backdrop-filter",
    "clip-path",
    "object-fit",
    "object-position",
    "resize",
    "user-select",
    // Responsive
    "aspect-ratio",
    "container",
    "container-type",
    "container-name",
];

const BASE: ComponentDefinition = ComponentDefinition {
    kind: "",
    label: "",
    category: "basic",
    description: "",
    premium: false,
    default_tag: "div",
    default_content: None,
    default_attributes: &[],
    default_styles: &[],
    css_properties: &[],
};

/// All component definitions, in palette order.
pub static DEFINITIONS: &[ComponentDefinition] = &[
    // Basic
    ComponentDefinition {
        kind: "text",
        label: "Texte",
        category: "basic",
        description: "Élément de texte simple",
        default_tag: "span",
        default_content: Some("Texte modifiable"),
        default_attributes: &[("className", "text-base")],
        default_styles: &[("fontSize", "16px"), ("color", "#333333")],
        css_properties: &[
            "color",
            "font-size",
            "font-weight",
            "font-family",
            "text-align",
            "line-height",
            "letter-spacing",
            "text-decoration",
            "text-transform",
            "text-shadow",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "heading",
        label: "Titre",
        category: "basic",
        description: "Titre principal ou secondaire",
        default_tag: "h2",
        default_content: Some("Titre principal"),
        default_attributes: &[("className", "text-2xl font-bold")],
        default_styles: &[
            ("fontSize", "24px"),
            ("fontWeight", "bold"),
            ("color", "#1f2937"),
        ],
        css_properties: &[
            "color",
            "font-size",
            "font-weight",
            "font-family",
            "text-align",
            "line-height",
            "margin",
            "padding",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "paragraph",
        label: "Paragraphe",
        category: "basic",
        description: "Paragraphe de texte",
        default_tag: "p",
        default_content: Some(
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
        ),
        default_attributes: &[("className", "text-gray-700")],
        default_styles: &[
            ("fontSize", "14px"),
            ("lineHeight", "1.6"),
            ("color", "#374151"),
        ],
        css_properties: &[
            "color",
            "font-size",
            "font-family",
            "text-align",
            "line-height",
            "margin",
            "padding",
            "text-indent",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "button",
        label: "Bouton",
        category: "basic",
        description: "Bouton interactif",
        default_tag: "button",
        default_content: Some("Bouton"),
        default_attributes: &[("className", "px-4 py-2 bg-blue-500 text-white rounded")],
        default_styles: &[
            ("backgroundColor", "#3b82f6"),
            ("color", "white"),
            ("padding", "8px 16px"),
            ("borderRadius", "6px"),
            ("border", "none"),
            ("cursor", "pointer"),
        ],
        css_properties: &[
            "background-color",
            "color",
            "border",
            "border-radius",
            "padding",
            "font-size",
            "font-weight",
            "cursor",
            "transition",
            "box-shadow",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "link",
        label: "Lien",
        category: "basic",
        description: "Lien hypertexte",
        default_tag: "a",
        default_content: Some("Lien vers la page"),
        default_attributes: &[("href", "#"), ("className", "text-blue-600 hover:underline")],
        default_styles: &[("color", "#2563eb"), ("textDecoration", "none")],
        css_properties: &["color", "text-decoration", "font-weight"],
        ..BASE
    },
    ComponentDefinition {
        kind: "image",
        label: "Image",
        category: "basic",
        description: "Image ou photo",
        default_tag: "img",
        default_attributes: &[
            ("src", "https://via.placeholder.com/300x200"),
            ("alt", "Image"),
            ("className", "rounded"),
        ],
        default_styles: &[
            ("width", "300px"),
            ("height", "200px"),
            ("borderRadius", "8px"),
        ],
        css_properties: &[
            "width",
            "height",
            "object-fit",
            "object-position",
            "border-radius",
            "box-shadow",
            "filter",
            "opacity",
        ],
        ..BASE
    },
    // Layout
    ComponentDefinition {
        kind: "container",
        label: "Conteneur",
        category: "layout",
        description: "Conteneur de mise en page",
        default_attributes: &[("className", "p-4 bg-gray-100 rounded")],
        default_styles: &[
            ("padding", "16px"),
            ("backgroundColor", "#f3f4f6"),
            ("borderRadius", "8px"),
            ("minHeight", "100px"),
        ],
        css_properties: &[
            "width",
            "height",
            "max-width",
            "margin",
            "padding",
            "background-color",
            "border",
            "border-radius",
            "box-shadow",
            "display",
            "flex-direction",
            "justify-content",
            "align-items",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "section",
        label: "Section",
        category: "layout",
        description: "Section de contenu",
        default_tag: "section",
        default_attributes: &[("className", "py-8")],
        default_styles: &[("padding", "32px 0"), ("width", "100%")],
        css_properties: &[
            "padding",
            "margin",
            "background-color",
            "border",
            "width",
            "height",
            "display",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "header",
        label: "En-tête",
        category: "layout",
        description: "En-tête de page",
        default_tag: "header",
        default_styles: &[
            ("backgroundColor", "white"),
            ("padding", "16px"),
            ("borderBottom", "1px solid #e5e7eb"),
            ("width", "100%"),
        ],
        css_properties: &["background-color", "padding", "border-bottom", "width"],
        ..BASE
    },
    ComponentDefinition {
        kind: "footer",
        label: "Pied de page",
        category: "layout",
        description: "Pied de page",
        default_tag: "footer",
        default_styles: &[
            ("backgroundColor", "#1f2937"),
            ("color", "white"),
            ("padding", "32px 16px"),
            ("width", "100%"),
        ],
        css_properties: &["background-color", "color", "padding", "width"],
        ..BASE
    },
    ComponentDefinition {
        kind: "flexbox",
        label: "Flexbox",
        category: "layout",
        description: "Conteneur flexible",
        default_attributes: &[("className", "flex gap-4")],
        default_styles: &[("display", "flex"), ("gap", "16px"), ("padding", "16px")],
        css_properties: &[
            "display",
            "flex-direction",
            "justify-content",
            "align-items",
            "flex-wrap",
            "gap",
            "padding",
            "margin",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "grid",
        label: "Grille",
        category: "layout",
        description: "Mise en page en grille",
        default_attributes: &[("className", "grid grid-cols-2 gap-4")],
        default_styles: &[
            ("display", "grid"),
            ("gridTemplateColumns", "repeat(2, 1fr)"),
            ("gap", "16px"),
            ("padding", "16px"),
        ],
        css_properties: &[
            "display",
            "grid-template-columns",
            "grid-template-rows",
            "gap",
            "grid-gap",
            "padding",
            "margin",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "card",
        label: "Carte",
        category: "layout",
        description: "Carte de contenu",
        default_attributes: &[("className", "bg-white p-6 rounded-lg shadow-md")],
        default_styles: &[
            ("backgroundColor", "white"),
            ("padding", "24px"),
            ("borderRadius", "12px"),
            ("boxShadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
        ],
        css_properties: &[
            "background-color",
            "border",
            "border-radius",
            "box-shadow",
            "padding",
            "margin",
            "width",
            "height",
        ],
        ..BASE
    },
    // Content
    ComponentDefinition {
        kind: "list",
        label: "Liste",
        category: "content",
        description: "Liste d'éléments",
        default_tag: "ul",
        default_attributes: &[("className", "list-disc pl-4")],
        default_styles: &[("listStyleType", "disc"), ("paddingLeft", "16px")],
        css_properties: &["list-style-type", "padding", "margin", "line-height"],
        ..BASE
    },
    ComponentDefinition {
        kind: "table",
        label: "Tableau",
        category: "content",
        description: "Tableau de données",
        default_tag: "table",
        default_attributes: &[("className", "table-auto w-full border-collapse")],
        default_styles: &[
            ("width", "100%"),
            ("borderCollapse", "collapse"),
            ("border", "1px solid #e5e7eb"),
        ],
        css_properties: &["width", "border-collapse", "border", "background-color"],
        ..BASE
    },
    ComponentDefinition {
        kind: "blockquote",
        label: "Citation",
        category: "content",
        description: "Citation ou témoignage",
        default_tag: "blockquote",
        default_attributes: &[("className", "border-l-4 border-blue-500 pl-4 italic")],
        default_styles: &[
            ("borderLeft", "4px solid #3b82f6"),
            ("paddingLeft", "16px"),
            ("fontStyle", "italic"),
            ("color", "#6b7280"),
        ],
        css_properties: &[
            "border-left",
            "padding-left",
            "font-style",
            "color",
            "background-color",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "code",
        label: "Code",
        category: "content",
        description: "Bloc de code",
        default_tag: "pre",
        default_attributes: &[("className", "bg-gray-100 p-4 rounded font-mono")],
        default_styles: &[
            ("backgroundColor", "#f3f4f6"),
            ("padding", "16px"),
            ("borderRadius", "8px"),
            ("fontFamily", "monospace"),
            ("fontSize", "14px"),
        ],
        css_properties: &[
            "background-color",
            "color",
            "font-family",
            "padding",
            "border-radius",
            "border",
            "font-size",
        ],
        ..BASE
    },
    // Media
    ComponentDefinition {
        kind: "video",
        label: "Vidéo",
        category: "media",
        description: "Lecteur vidéo",
        default_tag: "video",
        default_attributes: &[("controls", "true"), ("className", "w-full rounded")],
        default_styles: &[
            ("width", "100%"),
            ("height", "300px"),
            ("borderRadius", "8px"),
        ],
        css_properties: &["width", "height", "border-radius", "box-shadow"],
        ..BASE
    },
    ComponentDefinition {
        kind: "audio",
        label: "Audio",
        category: "media",
        description: "Lecteur audio",
        default_tag: "audio",
        default_attributes: &[("controls", "true"), ("className", "w-full")],
        default_styles: &[("width", "100%")],
        css_properties: &["width", "height"],
        ..BASE
    },
    ComponentDefinition {
        kind: "gallery",
        label: "Galerie",
        category: "media",
        description: "Galerie d'images",
        premium: true,
        default_attributes: &[("className", "grid grid-cols-3 gap-2")],
        default_styles: &[
            ("display", "grid"),
            ("gridTemplateColumns", "repeat(3, 1fr)"),
            ("gap", "8px"),
        ],
        css_properties: &["display", "grid-template-columns", "gap", "padding"],
        ..BASE
    },
    ComponentDefinition {
        kind: "carousel",
        label: "Carrousel",
        category: "media",
        description: "Carrousel d'images",
        premium: true,
        default_attributes: &[("className", "relative overflow-hidden rounded-lg")],
        default_styles: &[
            ("width", "100%"),
            ("height", "400px"),
            ("overflow", "hidden"),
            ("borderRadius", "12px"),
        ],
        css_properties: &["width", "height", "overflow", "border-radius"],
        ..BASE
    },
    // Forms
    ComponentDefinition {
        kind: "input",
        label: "Champ de saisie",
        category: "forms",
        description: "Champ de texte",
        default_tag: "input",
        default_attributes: &[
            ("type", "text"),
            ("placeholder", "Tapez ici..."),
            ("className", "p-2 border rounded"),
        ],
        default_styles: &[
            ("width", "100%"),
            ("padding", "8px"),
            ("border", "1px solid #d1d5db"),
            ("borderRadius", "6px"),
        ],
        css_properties: &[
            "width",
            "height",
            "padding",
            "border",
            "border-radius",
            "background-color",
            "color",
            "font-size",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "textarea",
        label: "Zone de texte",
        category: "forms",
        description: "Zone de texte multi-lignes",
        default_tag: "textarea",
        default_attributes: &[
            ("placeholder", "Votre message..."),
            ("className", "p-2 border rounded"),
        ],
        default_styles: &[
            ("width", "100%"),
            ("height", "120px"),
            ("padding", "8px"),
            ("border", "1px solid #d1d5db"),
            ("borderRadius", "6px"),
            ("resize", "vertical"),
        ],
        css_properties: &[
            "width",
            "height",
            "padding",
            "border",
            "border-radius",
            "resize",
            "background-color",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "select",
        label: "Liste déroulante",
        category: "forms",
        description: "Menu déroulant",
        default_tag: "select",
        default_attributes: &[("className", "p-2 border rounded")],
        default_styles: &[
            ("width", "100%"),
            ("padding", "8px"),
            ("border", "1px solid #d1d5db"),
            ("borderRadius", "6px"),
        ],
        css_properties: &[
            "width",
            "height",
            "padding",
            "border",
            "border-radius",
            "background-color",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "checkbox",
        label: "Case à cocher",
        category: "forms",
        description: "Case à cocher",
        default_tag: "input",
        default_content: Some("Case à cocher"),
        default_attributes: &[("type", "checkbox"), ("className", "mr-2")],
        default_styles: &[
            ("width", "16px"),
            ("height", "16px"),
            ("marginRight", "8px"),
        ],
        css_properties: &["width", "height", "margin", "accent-color"],
        ..BASE
    },
    ComponentDefinition {
        kind: "radio",
        label: "Bouton radio",
        category: "forms",
        description: "Bouton radio",
        default_tag: "input",
        default_attributes: &[("type", "radio"), ("className", "mr-2")],
        default_styles: &[
            ("width", "16px"),
            ("height", "16px"),
            ("marginRight", "8px"),
        ],
        css_properties: &["width", "height", "margin", "accent-color"],
        ..BASE
    },
    ComponentDefinition {
        kind: "form",
        label: "Formulaire",
        category: "forms",
        description: "Conteneur de formulaire",
        default_tag: "form",
        default_attributes: &[("className", "p-6 bg-white rounded-lg shadow")],
        default_styles: &[
            ("padding", "24px"),
            ("backgroundColor", "white"),
            ("borderRadius", "12px"),
            ("boxShadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
        ],
        css_properties: &[
            "padding",
            "margin",
            "background-color",
            "border",
            "border-radius",
        ],
        ..BASE
    },
    // Navigation
    ComponentDefinition {
        kind: "navbar",
        label: "Barre de navigation",
        category: "navigation",
        description: "Navigation principale",
        default_tag: "nav",
        default_attributes: &[("className", "bg-white shadow-sm p-4")],
        default_styles: &[
            ("backgroundColor", "white"),
            ("padding", "16px"),
            ("borderBottom", "1px solid #e5e7eb"),
            ("width", "100%"),
        ],
        css_properties: &[
            "background-color",
            "padding",
            "border-bottom",
            "position",
            "top",
            "z-index",
            "width",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "navigation",
        label: "Navigation",
        category: "navigation",
        description: "Liens de navigation",
        default_tag: "nav",
        default_styles: &[("display", "flex"), ("gap", "16px")],
        css_properties: &["display", "flex-direction", "gap", "padding"],
        ..BASE
    },
    ComponentDefinition {
        kind: "menu",
        label: "Menu",
        category: "navigation",
        description: "Menu de navigation",
        default_tag: "nav",
        default_attributes: &[("className", "flex gap-4")],
        default_styles: &[("display", "flex"), ("gap", "16px"), ("padding", "8px")],
        css_properties: &[
            "display",
            "flex-direction",
            "gap",
            "padding",
            "background-color",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "breadcrumb",
        label: "Fil d'Ariane",
        category: "navigation",
        description: "Navigation hiérarchique",
        default_tag: "nav",
        default_attributes: &[("className", "flex items-center gap-2 text-sm")],
        default_styles: &[
            ("display", "flex"),
            ("alignItems", "center"),
            ("gap", "8px"),
            ("fontSize", "14px"),
            ("color", "#6b7280"),
        ],
        css_properties: &["display", "align-items", "gap", "color"],
        ..BASE
    },
    ComponentDefinition {
        kind: "pagination",
        label: "Pagination",
        category: "navigation",
        description: "Navigation par pages",
        default_tag: "nav",
        default_attributes: &[("className", "flex justify-center gap-2")],
        default_styles: &[
            ("display", "flex"),
            ("justifyContent", "center"),
            ("gap", "8px"),
            ("padding", "16px"),
        ],
        css_properties: &["display", "gap", "padding", "justify-content"],
        ..BASE
    },
    // E-commerce
    ComponentDefinition {
        kind: "product-card",
        label: "Carte produit",
        category: "ecommerce",
        description: "Carte de produit",
        premium: true,
        default_attributes: &[(
            "className",
            "bg-white p-4 rounded-lg shadow hover:shadow-lg transition-shadow",
        )],
        default_styles: &[
            ("backgroundColor", "white"),
            ("padding", "16px"),
            ("borderRadius", "12px"),
            ("boxShadow", "0 2px 4px rgba(0, 0, 0, 0.1)"),
        ],
        css_properties: &[
            "background-color",
            "border",
            "border-radius",
            "padding",
            "box-shadow",
            "transition",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "price",
        label: "Prix",
        category: "ecommerce",
        description: "Affichage de prix",
        default_tag: "span",
        default_attributes: &[("className", "text-2xl font-bold text-green-600")],
        default_styles: &[
            ("fontSize", "24px"),
            ("fontWeight", "bold"),
            ("color", "#059669"),
        ],
        css_properties: &["font-size", "font-weight", "color", "text-decoration"],
        ..BASE
    },
    ComponentDefinition {
        kind: "cart-button",
        label: "Bouton panier",
        category: "ecommerce",
        description: "Bouton d'ajout au panier",
        default_tag: "button",
        default_content: Some("Ajouter au panier"),
        default_attributes: &[(
            "className",
            "bg-orange-500 text-white px-6 py-2 rounded-lg hover:bg-orange-600",
        )],
        default_styles: &[
            ("backgroundColor", "#ea580c"),
            ("color", "white"),
            ("padding", "8px 24px"),
            ("borderRadius", "8px"),
            ("border", "none"),
            ("cursor", "pointer"),
        ],
        css_properties: &[
            "background-color",
            "color",
            "padding",
            "border-radius",
            "border",
            "cursor",
            "transition",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "rating",
        label: "Évaluation",
        category: "ecommerce",
        description: "Système d'étoiles",
        default_attributes: &[("className", "flex items-center gap-1 text-yellow-400")],
        default_styles: &[
            ("display", "flex"),
            ("alignItems", "center"),
            ("gap", "4px"),
            ("color", "#facc15"),
            ("fontSize", "18px"),
        ],
        css_properties: &["color", "font-size", "display", "gap"],
        ..BASE
    },
    // Social
    ComponentDefinition {
        kind: "profile-card",
        label: "Carte profil",
        category: "social",
        description: "Carte de profil utilisateur",
        premium: true,
        default_attributes: &[("className", "bg-white p-6 rounded-lg shadow text-center")],
        default_styles: &[
            ("backgroundColor", "white"),
            ("padding", "24px"),
            ("borderRadius", "12px"),
            ("textAlign", "center"),
            ("boxShadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
        ],
        css_properties: &[
            "background-color",
            "border-radius",
            "padding",
            "text-align",
            "box-shadow",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "social-share",
        label: "Partage social",
        category: "social",
        description: "Boutons de partage",
        default_attributes: &[("className", "flex justify-center gap-2")],
        default_styles: &[
            ("display", "flex"),
            ("justifyContent", "center"),
            ("gap", "8px"),
        ],
        css_properties: &["display", "gap", "justify-content"],
        ..BASE
    },
    ComponentDefinition {
        kind: "comments",
        label: "Commentaires",
        category: "social",
        description: "Section commentaires",
        premium: true,
        default_tag: "section",
        default_attributes: &[("className", "p-4 bg-gray-50 rounded-lg")],
        default_styles: &[
            ("padding", "16px"),
            ("backgroundColor", "#f9fafb"),
            ("borderRadius", "8px"),
        ],
        css_properties: &["padding", "border", "border-radius", "background-color"],
        ..BASE
    },
    // Charts
    ComponentDefinition {
        kind: "chart",
        label: "Graphique",
        category: "charts",
        description: "Graphique de données",
        premium: true,
        default_styles: &[
            ("width", "100%"),
            ("height", "256px"),
            ("backgroundColor", "white"),
            ("borderRadius", "8px"),
        ],
        css_properties: &["width", "height", "background-color", "border-radius"],
        ..BASE
    },
    ComponentDefinition {
        kind: "chart-bar",
        label: "Graphique barres",
        category: "charts",
        description: "Graphique en barres",
        premium: true,
        default_attributes: &[("className", "w-full h-64 bg-white rounded-lg shadow")],
        default_styles: &[
            ("width", "100%"),
            ("height", "256px"),
            ("backgroundColor", "white"),
            ("borderRadius", "8px"),
        ],
        css_properties: &["width", "height", "background-color", "border-radius"],
        ..BASE
    },
    ComponentDefinition {
        kind: "chart-line",
        label: "Graphique ligne",
        category: "charts",
        description: "Graphique en courbes",
        premium: true,
        default_attributes: &[("className", "w-full h-64 bg-white rounded-lg shadow")],
        default_styles: &[
            ("width", "100%"),
            ("height", "256px"),
            ("backgroundColor", "white"),
            ("borderRadius", "8px"),
        ],
        css_properties: &["width", "height", "background-color", "border-radius"],
        ..BASE
    },
    ComponentDefinition {
        kind: "chart-pie",
        label: "Graphique secteurs",
        category: "charts",
        description: "Graphique circulaire",
        premium: true,
        default_attributes: &[("className", "w-64 h-64 bg-white rounded-lg shadow mx-auto")],
        default_styles: &[
            ("width", "256px"),
            ("height", "256px"),
            ("backgroundColor", "white"),
            ("borderRadius", "8px"),
            ("margin", "0 auto"),
        ],
        css_properties: &["width", "height", "background-color", "border-radius"],
        ..BASE
    },
    // Premium
    ComponentDefinition {
        kind: "modal",
        label: "Fenêtre modale",
        category: "premium",
        description: "Fenêtre pop-up",
        premium: true,
        default_attributes: &[(
            "className",
            "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center",
        )],
        default_styles: &[
            ("position", "fixed"),
            ("top", "50%"),
            ("left", "50%"),
            ("transform", "translate(-50%, -50%)"),
            ("backgroundColor", "white"),
            ("borderRadius", "12px"),
            ("zIndex", "1000"),
        ],
        css_properties: &[
            "position",
            "top",
            "left",
            "transform",
            "background-color",
            "border-radius",
            "box-shadow",
            "z-index",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "accordion",
        label: "Accordéon",
        category: "premium",
        description: "Contenu pliable",
        premium: true,
        default_attributes: &[("className", "border rounded-lg overflow-hidden")],
        default_styles: &[
            ("border", "1px solid #e5e7eb"),
            ("borderRadius", "8px"),
            ("overflow", "hidden"),
        ],
        css_properties: &["border", "border-radius", "background-color"],
        ..BASE
    },
    ComponentDefinition {
        kind: "tabs",
        label: "Onglets",
        category: "premium",
        description: "Navigation par onglets",
        premium: true,
        default_attributes: &[("className", "border-b bg-white")],
        default_styles: &[
            ("display", "flex"),
            ("borderBottom", "1px solid #e5e7eb"),
            ("backgroundColor", "white"),
        ],
        css_properties: &["display", "border-bottom", "background-color"],
        ..BASE
    },
    ComponentDefinition {
        kind: "dropdown",
        label: "Menu déroulant",
        category: "premium",
        description: "Menu contextuel",
        premium: true,
        default_attributes: &[("className", "absolute bg-white border rounded-lg shadow-lg")],
        default_styles: &[
            ("position", "absolute"),
            ("backgroundColor", "white"),
            ("border", "1px solid #e5e7eb"),
            ("borderRadius", "8px"),
            ("boxShadow", "0 4px 6px rgba(0, 0, 0, 0.1)"),
            ("zIndex", "10"),
        ],
        css_properties: &[
            "position",
            "background-color",
            "border",
            "border-radius",
            "box-shadow",
            "z-index",
        ],
        ..BASE
    },
    // Advanced
    ComponentDefinition {
        kind: "timeline",
        label: "Chronologie",
        category: "advanced",
        description: "Timeline d'événements",
        premium: true,
        default_attributes: &[("className", "relative border-l-2 border-blue-500 pl-8 ml-4")],
        default_styles: &[
            ("position", "relative"),
            ("borderLeft", "2px solid #3b82f6"),
            ("paddingLeft", "32px"),
            ("marginLeft", "16px"),
        ],
        css_properties: &["position", "border-left", "padding-left", "margin-left"],
        ..BASE
    },
    ComponentDefinition {
        kind: "progress",
        label: "Barre de progression",
        category: "advanced",
        description: "Indicateur de progression",
        default_attributes: &[(
            "className",
            "w-full h-2 bg-gray-200 rounded-full overflow-hidden",
        )],
        default_styles: &[
            ("width", "100%"),
            ("height", "8px"),
            ("backgroundColor", "#e5e7eb"),
            ("borderRadius", "9999px"),
            ("overflow", "hidden"),
        ],
        css_properties: &[
            "width",
            "height",
            "background-color",
            "border-radius",
            "overflow",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "tooltip",
        label: "Infobulle",
        category: "advanced",
        description: "Texte d'aide au survol",
        premium: true,
        default_attributes: &[(
            "className",
            "absolute bg-gray-800 text-white px-2 py-1 rounded text-sm",
        )],
        default_styles: &[
            ("position", "absolute"),
            ("backgroundColor", "#1f2937"),
            ("color", "white"),
            ("padding", "4px 8px"),
            ("borderRadius", "4px"),
            ("fontSize", "12px"),
            ("zIndex", "20"),
        ],
        css_properties: &[
            "position",
            "background-color",
            "color",
            "padding",
            "border-radius",
            "font-size",
            "z-index",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "badge",
        label: "Badge",
        category: "advanced",
        description: "Étiquette ou badge",
        default_tag: "span",
        default_attributes: &[(
            "className",
            "bg-red-500 text-white px-2 py-1 rounded-full text-xs font-semibold",
        )],
        default_styles: &[
            ("backgroundColor", "#dc2626"),
            ("color", "white"),
            ("padding", "2px 8px"),
            ("borderRadius", "9999px"),
            ("fontSize", "12px"),
            ("fontWeight", "600"),
        ],
        css_properties: &[
            "background-color",
            "color",
            "padding",
            "border-radius",
            "font-size",
            "font-weight",
        ],
        ..BASE
    },
    // Widgets
    ComponentDefinition {
        kind: "weather",
        label: "Météo",
        category: "widgets",
        description: "Widget météo",
        premium: true,
        default_attributes: &[("className", "bg-blue-100 p-4 rounded-lg text-center")],
        default_styles: &[
            ("backgroundColor", "#dbeafe"),
            ("padding", "16px"),
            ("borderRadius", "8px"),
            ("textAlign", "center"),
        ],
        css_properties: &["background-color", "padding", "border-radius", "text-align"],
        ..BASE
    },
    ComponentDefinition {
        kind: "clock",
        label: "Horloge",
        category: "widgets",
        description: "Horloge numérique",
        premium: true,
        default_attributes: &[(
            "className",
            "text-4xl font-bold text-center p-4 bg-gray-100 rounded",
        )],
        default_styles: &[
            ("fontSize", "36px"),
            ("fontWeight", "bold"),
            ("textAlign", "center"),
            ("padding", "16px"),
            ("backgroundColor", "#f3f4f6"),
            ("borderRadius", "8px"),
        ],
        css_properties: &[
            "font-size",
            "font-weight",
            "text-align",
            "color",
            "background-color",
            "padding",
            "border-radius",
        ],
        ..BASE
    },
    ComponentDefinition {
        kind: "counter",
        label: "Compteur",
        category: "widgets",
        description: "Compteur animé",
        premium: true,
        default_attributes: &[("className", "text-6xl font-bold text-purple-600 text-center")],
        default_styles: &[
            ("fontSize", "48px"),
            ("fontWeight", "bold"),
            ("color", "#7c3aed"),
            ("textAlign", "center"),
        ],
        css_properties: &["font-size", "font-weight", "color", "text-align"],
        ..BASE
    },
    ComponentDefinition {
        kind: "map",
        label: "Carte",
        category: "widgets",
        description: "Carte interactive",
        premium: true,
        default_attributes: &[("className", "w-full h-64 rounded-lg border")],
        default_styles: &[
            ("width", "100%"),
            ("height", "256px"),
            ("borderRadius", "8px"),
            ("border", "1px solid #e5e7eb"),
        ],
        css_properties: &["width", "height", "border-radius", "border"],
        ..BASE
    },
];

static BY_KIND: LazyLock<HashMap<&'static str, &'static ComponentDefinition>> =
    LazyLock::new(|| DEFINITIONS.iter().map(|d| (d.kind, d)).collect());

/// Lookup entry points over the static catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Registry;

impl Registry {
    /// Look up the definition for a component type.
    #[must_use]
    pub fn definition(kind: &str) -> Option<&'static ComponentDefinition> {
        BY_KIND.get(kind).copied()
    }

    /// All definitions in a palette category, in catalog order.
    #[must_use]
    pub fn by_category(category: &str) -> Vec<&'static ComponentDefinition> {
        DEFINITIONS.iter().filter(|d| d.category == category).collect()
    }

    /// Palette categories in display order: `(id, French name)`.
    #[must_use]
    pub fn categories() -> &'static [(&'static str, &'static str)] {
        CATEGORIES
    }

    /// Type-specific CSS properties merged with the common set, deduplicated,
    /// type-specific properties first.
    #[must_use]
    pub fn all_css_properties(kind: &str) -> Vec<&'static str> {
        let specific = Self::definition(kind).map_or(&[][..], |d| d.css_properties);
        let mut seen = std::collections::HashSet::new();
        specific
            .iter()
            .chain(COMMON_CSS_PROPERTIES.iter())
            .copied()
            .filter(|p| seen.insert(*p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_no_duplicate_kinds() {
        assert_eq!(BY_KIND.len(), DEFINITIONS.len());
    }

    #[test]
    fn every_category_is_declared() {
        for def in DEFINITIONS {
            assert!(
                CATEGORIES.iter().any(|(id, _)| *id == def.category),
                "unknown category {} on {}",
                def.category,
                def.kind
            );
        }
    }

    #[test]
    fn button_defaults() {
        let def = Registry::definition("button").unwrap();
        assert_eq!(def.label, "Bouton");
        assert_eq!(def.default_content, Some("Bouton"));
        assert_eq!(def.default_tag, "button");
        assert!(def
            .default_styles
            .contains(&("backgroundColor", "#3b82f6")));
    }

    #[test]
    fn unknown_kind_has_no_definition() {
        assert!(Registry::definition("hologram").is_none());
    }

    #[test]
    fn by_category_returns_all_basics() {
        let basics = Registry::by_category("basic");
        let kinds: Vec<&str> = basics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec!["text", "heading", "paragraph", "button", "link", "image"]
        );
    }

    #[test]
    fn all_css_properties_merges_and_dedupes() {
        let props = Registry::all_css_properties("button");
        // Type-specific property present once even though the common set
        // also carries it.
        assert_eq!(props.iter().filter(|p| **p == "background-color").count(), 1);
        assert!(props.contains(&"cursor"));
        assert!(props.contains(&"aspect-ratio"));
        let unique: std::collections::HashSet<_> = props.iter().collect();
        assert_eq!(unique.len(), props.len());
    }

    #[test]
    fn unknown_kind_still_gets_common_properties() {
        let props = Registry::all_css_properties("hologram");
        assert_eq!(props.len(), COMMON_CSS_PROPERTIES.len());
    }

    #[test]
    fn premium_components_flagged() {
        for kind in ["gallery", "carousel", "modal", "accordion", "weather"] {
            assert!(Registry::definition(kind).unwrap().premium, "{kind}");
        }
        assert!(!Registry::definition("button").unwrap().premium);
    }
}
