//! Typed description of the page markup the controllers attach to
//!
//! Each optional block mirrors a piece of markup the page may or may not
//! carry. Controllers are only built for blocks that are present.

use serde::{Deserialize, Serialize};

/// Which side of the site a page belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    #[default]
    Public,
    Admin,
}

impl Surface {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Public => "Public site",
            Self::Admin => "Admin panel",
        }
    }
}

/// Declared input type of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Url,
    Number,
    Textarea,
    Select,
    Password,
}

impl InputKind {
    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Textarea)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FieldMarkup {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: InputKind,
    #[serde(default)]
    pub required: bool,
    /// Raw `min` attribute, kept as text so messages echo it verbatim
    #[serde(default)]
    pub min: Option<String>,
    #[serde(default)]
    pub max: Option<String>,
    /// Character budget shown by a live counter
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormMarkup {
    pub id: String,
    /// Form action URL, relative to the site root
    pub action: String,
    #[serde(default)]
    pub autosave: bool,
    pub fields: Vec<FieldMarkup>,
}

/// A page section with its vertical layout box in pixels
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionMarkup {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NavLinkMarkup {
    pub href: String,
    pub label: String,
}

/// Element that animates in once it scrolls into view
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevealMarkup {
    pub id: String,
    pub top: f64,
    pub height: f64,
    #[serde(default)]
    pub animation: Option<String>,
    #[serde(default)]
    pub stagger: bool,
    /// Ids of children that animate in sequence when `stagger` is set
    #[serde(default)]
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillBarMarkup {
    pub name: String,
    /// Fill percentage, 0-100
    pub level: u8,
    pub top: f64,
    pub height: f64,
}

/// Hero title that types through a list of phrases
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TypewriterMarkup {
    #[serde(default)]
    pub texts: Option<Vec<String>>,
    #[serde(default)]
    pub speed: Option<u64>,
    #[serde(default)]
    pub delete_speed: Option<u64>,
    #[serde(default)]
    pub delay: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchMarkup {
    pub id: String,
    /// Text content of every element the search filters
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    Numeric,
    Text,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnMarkup {
    pub label: String,
    /// Present when the header is clickable for sorting
    #[serde(default)]
    pub sort: Option<SortKind>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableMarkup {
    pub id: String,
    pub columns: Vec<ColumnMarkup>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectMarkup {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tech_stack: Option<String>,
    /// Filter categories the card belongs to
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageMarkup {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CopyMarkup {
    pub id: String,
    pub text: String,
}

/// Everything the page scripts can find in the document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMarkup {
    #[serde(default)]
    pub surface: Surface,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_viewport_height")]
    pub viewport_height: f64,
    /// Total scrollable height; derived from sections when absent
    #[serde(default)]
    pub document_height: Option<f64>,
    #[serde(default)]
    pub navbar: bool,
    #[serde(default)]
    pub theme_icon: bool,
    #[serde(default)]
    pub forms: Vec<FormMarkup>,
    #[serde(default)]
    pub sections: Vec<SectionMarkup>,
    #[serde(default)]
    pub nav_links: Vec<NavLinkMarkup>,
    #[serde(default)]
    pub reveal_targets: Vec<RevealMarkup>,
    #[serde(default)]
    pub skill_bars: Vec<SkillBarMarkup>,
    #[serde(default)]
    pub typewriter: Option<TypewriterMarkup>,
    #[serde(default)]
    pub search_boxes: Vec<SearchMarkup>,
    #[serde(default)]
    pub tables: Vec<TableMarkup>,
    /// Ids of modal overlays
    #[serde(default)]
    pub modals: Vec<String>,
    /// Project filter values, e.g. "all", "web"
    #[serde(default)]
    pub filters: Vec<String>,
    #[serde(default)]
    pub projects: Vec<ProjectMarkup>,
    #[serde(default)]
    pub messages: Vec<MessageMarkup>,
    #[serde(default)]
    pub copy_buttons: Vec<CopyMarkup>,
    #[serde(default)]
    pub load_more: bool,
}

fn default_viewport_height() -> f64 {
    800.0
}

impl Default for PageMarkup {
    fn default() -> Self {
        Self {
            surface: Surface::default(),
            title: String::new(),
            viewport_height: default_viewport_height(),
            document_height: None,
            navbar: false,
            theme_icon: false,
            forms: Vec::new(),
            sections: Vec::new(),
            nav_links: Vec::new(),
            reveal_targets: Vec::new(),
            skill_bars: Vec::new(),
            typewriter: None,
            search_boxes: Vec::new(),
            tables: Vec::new(),
            modals: Vec::new(),
            filters: Vec::new(),
            projects: Vec::new(),
            messages: Vec::new(),
            copy_buttons: Vec::new(),
            load_more: false,
        }
    }
}

impl PageMarkup {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Scrollable height of the document, at least one viewport
    pub fn document_height(&self) -> f64 {
        let content_bottom = self
            .sections
            .iter()
            .map(|s| s.top + s.height)
            .chain(self.reveal_targets.iter().map(|r| r.top + r.height))
            .fold(0.0_f64, f64::max);
        self.document_height
            .unwrap_or(content_bottom)
            .max(self.viewport_height)
    }

    /// Whether any markup the scroll controller drives is present
    pub fn has_scroll_features(&self) -> bool {
        self.navbar
            || !self.sections.is_empty()
            || !self.reveal_targets.is_empty()
            || !self.skill_bars.is_empty()
            || self.typewriter.is_some()
    }
}
