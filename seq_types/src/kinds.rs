use serde_derive::{Deserialize, Serialize};

/* One collection node kind: an ordered, homogeneous sequence construct */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct KindDescriptor {
    /* Name of the sequence value type, e.g. `ArrayElementList` */
    pub name: String,

    /* Semantic type of a single member. Optional in the file so that a
       missing entry is reported as a schema defect instead of a parse error */
    #[serde(default)]
    pub element_type: Option<String>,

    /* Alternate source types convertible into the element type */
    #[serde(default)]
    pub element_choices: Vec<String>,

    /* Element is an indivisible token-like unit */
    #[serde(default)]
    pub element_is_atomic: bool,

    /* Non-final elements carry a trailing separator, the final one does not */
    #[serde(default)]
    pub requires_trailing_separator: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl KindDescriptor {
    pub fn new(name: impl Into<String>, element_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element_type: Some(element_type.into()),
            element_choices: Vec::new(),
            element_is_atomic: false,
            requires_trailing_separator: false,
            comment: None,
        }
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.element_choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn atomic(mut self) -> Self {
        self.element_is_atomic = true;
        self
    }

    pub fn trailing_separator(mut self) -> Self {
        self.requires_trailing_separator = true;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /* True when the builder accepts alternate source types */
    pub fn has_element_choices(&self) -> bool {
        !self.element_choices.is_empty()
    }
}

/* The merged, ordered kind schema consumed by the generator */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct KindCatalog {
    /* `use` paths the generated unit needs to name element types */
    #[serde(default)]
    pub uses: Vec<String>,

    #[serde(default)]
    pub kinds: Vec<KindDescriptor>,
}

impl KindCatalog {
    pub fn new(kinds: Vec<KindDescriptor>) -> Self {
        Self {
            uses: Vec::new(),
            kinds,
        }
    }

    pub fn find(&self, name: &str) -> Option<&KindDescriptor> {
        self.kinds.iter().find(|kind| kind.name == name)
    }

    /* Canonical YAML rendering; stable for an unchanged catalog */
    pub fn to_yaml(&self) -> Result<String, serde_yml::Error> {
        serde_yml::to_string(self)
    }
}
