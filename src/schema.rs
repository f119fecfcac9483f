//! Declarative parameter schema.
//!
//! A [`Schema`] describes every user-tunable setting of the widget: its type,
//! default value, bounds, display label, the folder it is grouped under, and an
//! optional visibility predicate. Hosts use it to build a configuration UI and
//! to check values before handing them to the widget; the widget itself only
//! ever sees the resolved [`Parameters`](crate::params::Parameters).
//!
//! # Building a schema
//!
//! ```rust
//! use countdown_widget::schema::{folder, when, Param, Schema, Values};
//!
//! let schema = Schema::new()
//!     .with("mode", Param::select(&["Simple", "Advanced"], "Simple"))
//!     .with("duration", Param::number(60.0).min(5.0).max(600.0).step(5.0))
//!     .with(
//!         "advanced",
//!         folder("Advanced")
//!             .with("enableSound", Param::boolean(false))
//!             .visible_if(when("mode").equals("Advanced")),
//!     );
//!
//! let values = schema.defaults();
//! assert!(!schema.is_visible("advanced.enableSound", &values));
//! assert!(schema.validate(&values).is_ok());
//! ```
//!
//! # Visibility
//!
//! Visibility is a pure function of the parameter set. A folder's predicate
//! gates every field below it, so a field is visible only when its own
//! predicate and all of its ancestors' predicates hold.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::error::SchemaError;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Strings, colors, image references and select options.
    Text(String),
    /// Numeric values.
    Number(f64),
    /// Toggles.
    Bool(bool),
}

impl Value {
    /// The text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The boolean payload, if this is a toggle.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Number(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

/// A flat set of parameter values keyed by dotted path, e.g.
/// `appearance.colors.timerColor`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values(BTreeMap<String, Value>);

impl Values {
    /// An empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `path` to `value`, replacing any previous value.
    pub fn set(&mut self, path: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(path.into(), value.into());
    }

    /// Builder form of [`Values::set`].
    pub fn with(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }

    /// The value at `path`.
    pub fn get(&self, path: &str) -> Option<&Value> {
        self.0.get(path)
    }

    /// The text value at `path`.
    pub fn text(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_text)
    }

    /// The numeric value at `path`.
    pub fn number(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(Value::as_number)
    }

    /// The boolean value at `path`.
    pub fn bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(Value::as_bool)
    }

    /// Iterates over `(path, value)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no values are set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A visibility rule over the parameter set.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Holds when `field` currently equals `value`.
    Equals {
        /// Dotted path of the field to compare.
        field: String,
        /// Value the field must hold.
        value: Value,
    },
    /// Holds when the inner predicate does not.
    Not(Box<Predicate>),
    /// Holds when every inner predicate holds.
    All(Vec<Predicate>),
    /// Holds when any inner predicate holds.
    Any(Vec<Predicate>),
}

impl Predicate {
    /// Evaluates the predicate against `values`.
    ///
    /// A field that is missing from `values` equals nothing.
    pub fn evaluate(&self, values: &Values) -> bool {
        match self {
            Predicate::Equals { field, value } => values.get(field) == Some(value),
            Predicate::Not(inner) => !inner.evaluate(values),
            Predicate::All(all) => all.iter().all(|p| p.evaluate(values)),
            Predicate::Any(any) => any.iter().any(|p| p.evaluate(values)),
        }
    }

    /// Negates this predicate.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Predicate {
        Predicate::Not(Box::new(self))
    }
}

/// The left-hand side of a visibility predicate; see [`when`].
#[derive(Debug, Clone)]
pub struct When {
    field: String,
}

impl When {
    /// Completes the predicate: visible iff the field equals `value`.
    pub fn equals(self, value: impl Into<Value>) -> Predicate {
        Predicate::Equals {
            field: self.field,
            value: value.into(),
        }
    }
}

/// Starts a visibility predicate on `field`.
///
/// ```rust
/// use countdown_widget::schema::{when, Values};
///
/// let advanced = when("mode").equals("Advanced");
/// assert!(advanced.evaluate(&Values::new().with("mode", "Advanced")));
/// assert!(!advanced.evaluate(&Values::new().with("mode", "Simple")));
/// ```
pub fn when(field: impl Into<String>) -> When {
    When {
        field: field.into(),
    }
}

/// The type of a parameter, with its constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamKind {
    /// Free text.
    Text,
    /// A number, optionally bounded.
    Number {
        /// Inclusive lower bound.
        min: Option<f64>,
        /// Inclusive upper bound.
        max: Option<f64>,
        /// Increment used by the configuration UI.
        step: Option<f64>,
    },
    /// A toggle.
    Bool,
    /// A CSS-style color string such as `#1f2937`.
    Color,
    /// One of a fixed list of options.
    Select {
        /// Accepted options, in display order.
        options: Vec<String>,
    },
    /// A reference to an image, usually a URL.
    Image,
}

impl ParamKind {
    fn expected(&self) -> &'static str {
        match self {
            ParamKind::Text => "text",
            ParamKind::Number { .. } => "number",
            ParamKind::Bool => "boolean",
            ParamKind::Color => "color",
            ParamKind::Select { .. } => "select",
            ParamKind::Image => "image",
        }
    }
}

/// A single typed parameter declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Type and constraints.
    pub kind: ParamKind,
    /// Value used when the host supplies none.
    pub default: Value,
    /// Label shown in the configuration UI.
    pub label: Option<String>,
    /// Longer help text.
    pub description: Option<String>,
    /// Placeholder for empty inputs.
    pub placeholder: Option<String>,
    /// Rule deciding whether the field is shown.
    pub visible_if: Option<Predicate>,
}

impl Param {
    fn new(kind: ParamKind, default: Value) -> Self {
        Self {
            kind,
            default,
            label: None,
            description: None,
            placeholder: None,
            visible_if: None,
        }
    }

    /// A free text parameter.
    pub fn text(default: impl Into<String>) -> Self {
        Self::new(ParamKind::Text, Value::Text(default.into()))
    }

    /// An unbounded numeric parameter; see [`Param::min`] and [`Param::max`].
    pub fn number(default: f64) -> Self {
        Self::new(
            ParamKind::Number {
                min: None,
                max: None,
                step: None,
            },
            Value::Number(default),
        )
    }

    /// A toggle.
    pub fn boolean(default: bool) -> Self {
        Self::new(ParamKind::Bool, Value::Bool(default))
    }

    /// A color parameter.
    pub fn color(default: impl Into<String>) -> Self {
        Self::new(ParamKind::Color, Value::Text(default.into()))
    }

    /// An image reference parameter.
    pub fn image(default: impl Into<String>) -> Self {
        Self::new(ParamKind::Image, Value::Text(default.into()))
    }

    /// A choice between fixed options.
    pub fn select(options: &[&str], default: impl Into<String>) -> Self {
        Self::new(
            ParamKind::Select {
                options: options.iter().map(|o| o.to_string()).collect(),
            },
            Value::Text(default.into()),
        )
    }

    /// Sets the label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the placeholder.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Sets the lower bound. Ignored for non-numeric parameters.
    pub fn min(mut self, value: f64) -> Self {
        if let ParamKind::Number { min, .. } = &mut self.kind {
            *min = Some(value);
        }
        self
    }

    /// Sets the upper bound. Ignored for non-numeric parameters.
    pub fn max(mut self, value: f64) -> Self {
        if let ParamKind::Number { max, .. } = &mut self.kind {
            *max = Some(value);
        }
        self
    }

    /// Sets the UI increment. Ignored for non-numeric parameters.
    pub fn step(mut self, value: f64) -> Self {
        if let ParamKind::Number { step, .. } = &mut self.kind {
            *step = Some(value);
        }
        self
    }

    /// Shows the field only while `predicate` holds.
    pub fn visible_if(mut self, predicate: Predicate) -> Self {
        self.visible_if = Some(predicate);
        self
    }

    /// Checks `value` against this parameter's type and constraints.
    pub fn check(&self, path: &str, value: &Value) -> Result<(), SchemaError> {
        let mismatch = || SchemaError::TypeMismatch {
            field: path.to_string(),
            expected: self.kind.expected(),
        };

        match (&self.kind, value) {
            (ParamKind::Text | ParamKind::Color | ParamKind::Image, Value::Text(_)) => Ok(()),
            (ParamKind::Bool, Value::Bool(_)) => Ok(()),
            (ParamKind::Number { min, max, .. }, Value::Number(n)) => {
                let lo = min.unwrap_or(f64::NEG_INFINITY);
                let hi = max.unwrap_or(f64::INFINITY);
                if n.is_nan() || *n < lo || *n > hi {
                    return Err(SchemaError::OutOfBounds {
                        field: path.to_string(),
                        value: *n,
                        min: lo,
                        max: hi,
                    });
                }
                Ok(())
            }
            (ParamKind::Select { options }, Value::Text(s)) => {
                if options.iter().any(|o| o == s) {
                    Ok(())
                } else {
                    Err(SchemaError::InvalidOption {
                        field: path.to_string(),
                        value: s.clone(),
                        options: options.join(", "),
                    })
                }
            }
            _ => Err(mismatch()),
        }
    }
}

/// A named group of parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Folder {
    /// Label shown in the configuration UI.
    pub label: String,
    /// Whether the folder starts expanded.
    pub expanded: bool,
    /// Rule deciding whether the folder and everything in it is shown.
    pub visible_if: Option<Predicate>,
    children: Vec<(String, Node)>,
}

impl Folder {
    /// Adds a child parameter or folder under `key`.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.children.push((key.into(), node.into()));
        self
    }

    /// Sets whether the folder starts expanded.
    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// Shows the folder only while `predicate` holds.
    pub fn visible_if(mut self, predicate: Predicate) -> Self {
        self.visible_if = Some(predicate);
        self
    }

    /// Children in declaration order.
    pub fn children(&self) -> &[(String, Node)] {
        &self.children
    }
}

/// Creates an empty, collapsed folder.
pub fn folder(label: impl Into<String>) -> Folder {
    Folder {
        label: label.into(),
        expanded: false,
        visible_if: None,
        children: Vec::new(),
    }
}

/// An entry in the schema tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A leaf parameter.
    Param(Param),
    /// A nested group.
    Folder(Folder),
}

impl Node {
    fn visible_if(&self) -> Option<&Predicate> {
        match self {
            Node::Param(p) => p.visible_if.as_ref(),
            Node::Folder(f) => f.visible_if.as_ref(),
        }
    }
}

impl From<Param> for Node {
    fn from(param: Param) -> Self {
        Node::Param(param)
    }
}

impl From<Folder> for Node {
    fn from(folder: Folder) -> Self {
        Node::Folder(folder)
    }
}

/// An ordered tree of parameters and folders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    nodes: Vec<(String, Node)>,
}

impl Schema {
    /// An empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level parameter or folder under `key`.
    pub fn with(mut self, key: impl Into<String>, node: impl Into<Node>) -> Self {
        self.nodes.push((key.into(), node.into()));
        self
    }

    /// Top-level entries in declaration order.
    pub fn nodes(&self) -> &[(String, Node)] {
        &self.nodes
    }

    /// Every parameter with its dotted path, depth first in declaration order.
    pub fn fields(&self) -> Vec<(String, &Param)> {
        let mut out = Vec::new();
        collect_fields(&self.nodes, "", &mut out);
        out
    }

    /// The parameter at `path`.
    pub fn field(&self, path: &str) -> Option<&Param> {
        let mut nodes = &self.nodes;
        let mut segments = path.split('.').peekable();
        while let Some(segment) = segments.next() {
            let (_, node) = nodes.iter().find(|(key, _)| key == segment)?;
            match node {
                Node::Param(param) if segments.peek().is_none() => return Some(param),
                Node::Folder(folder) => nodes = &folder.children,
                Node::Param(_) => return None,
            }
        }
        None
    }

    /// Default value of every parameter.
    pub fn defaults(&self) -> Values {
        let mut values = Values::new();
        for (path, param) in self.fields() {
            values.set(path, param.default.clone());
        }
        values
    }

    /// Defaults overlaid with `values`. Unknown paths are kept as supplied;
    /// run [`Schema::validate`] to reject them.
    pub fn resolve(&self, values: &Values) -> Values {
        let mut resolved = self.defaults();
        for (path, value) in values.iter() {
            resolved.set(path, value.clone());
        }
        resolved
    }

    /// Checks every supplied value against its declaration.
    pub fn validate(&self, values: &Values) -> Result<(), SchemaError> {
        for (path, value) in values.iter() {
            let param = self
                .field(path)
                .ok_or_else(|| SchemaError::UnknownField(path.to_string()))?;
            param.check(path, value)?;
        }
        Ok(())
    }

    /// Whether the entry at `path` is shown for `values`.
    ///
    /// Every ancestor folder's predicate must hold too. Unknown paths are
    /// never visible.
    pub fn is_visible(&self, path: &str, values: &Values) -> bool {
        let mut nodes = &self.nodes;
        for segment in path.split('.') {
            let Some((_, node)) = nodes.iter().find(|(key, _)| key == segment) else {
                return false;
            };
            if let Some(predicate) = node.visible_if() {
                if !predicate.evaluate(values) {
                    return false;
                }
            }
            match node {
                Node::Folder(folder) => nodes = &folder.children,
                Node::Param(_) => return true,
            }
        }
        // The path named a folder
        true
    }

    /// Paths of every parameter shown for `values`.
    pub fn visible_fields(&self, values: &Values) -> Vec<String> {
        self.fields()
            .into_iter()
            .map(|(path, _)| path)
            .filter(|path| self.is_visible(path, values))
            .collect()
    }
}

fn collect_fields<'a>(nodes: &'a [(String, Node)], prefix: &str, out: &mut Vec<(String, &'a Param)>) {
    for (key, node) in nodes {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match node {
            Node::Param(param) => out.push((path, param)),
            Node::Folder(folder) => collect_fields(&folder.children, &path, out),
        }
    }
}

static WIDGET_DEFINITION: Lazy<Schema> = Lazy::new(|| {
    let advanced_only = || when("mode").equals("Advanced");

    Schema::new()
        .with(
            "mode",
            Param::select(&["Simple", "Advanced"], "Simple")
                .label("Mode")
                .description("Simple: the basics, Advanced: sound, precision and messages"),
        )
        .with(
            "title",
            Param::text("Focus time!")
                .label("Title")
                .description("Heading shown above the clock"),
        )
        .with(
            "duration",
            Param::number(60.0)
                .label("Duration (seconds)")
                .min(5.0)
                .max(600.0)
                .step(5.0),
        )
        .with(
            "autoStart",
            Param::boolean(false)
                .label("Start automatically")
                .description("Begin counting as soon as the widget loads"),
        )
        .with(
            "showMilliseconds",
            Param::boolean(false)
                .label("Show hundredths")
                .visible_if(advanced_only()),
        )
        .with(
            "appearance",
            folder("Appearance")
                .with(
                    "colors",
                    folder("Colors")
                        .with("timerColor", Param::color("#1f2937").label("Clock color"))
                        .with(
                            "backgroundColor",
                            Param::color("#ffffff").label("Background color"),
                        )
                        .with("buttonColor", Param::color("#000000").label("Button color")),
                )
                .with(
                    "background",
                    folder("Background image")
                        .with(
                            "imageUrl",
                            Param::image("")
                                .label("Background image URL")
                                .placeholder("https://example.com/image.jpg"),
                        )
                        .with(
                            "opacity",
                            Param::number(0.3)
                                .min(0.0)
                                .max(1.0)
                                .step(0.1)
                                .label("Background image opacity"),
                        ),
                )
                .with(
                    "layout",
                    folder("Layout")
                        .with(
                            "fontSize",
                            Param::number(80.0).min(24.0).max(200.0).label("Font size"),
                        )
                        .with(
                            "padding",
                            Param::number(16.0).min(0.0).max(64.0).label("Padding"),
                        ),
                )
                .expanded(true),
        )
        .with(
            "advanced",
            folder("Advanced")
                .with("enableSound", Param::boolean(false).label("Play sound"))
                .with(
                    "completionMessage",
                    Param::text("⏰ Time's up!").label("Completion message"),
                )
                .expanded(false)
                .visible_if(advanced_only()),
        )
});

/// The countdown widget's parameter schema.
pub fn widget_definition() -> &'static Schema {
    &WIDGET_DEFINITION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_definition_fields() {
        let paths: Vec<String> = widget_definition()
            .fields()
            .into_iter()
            .map(|(path, _)| path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "mode",
                "title",
                "duration",
                "autoStart",
                "showMilliseconds",
                "appearance.colors.timerColor",
                "appearance.colors.backgroundColor",
                "appearance.colors.buttonColor",
                "appearance.background.imageUrl",
                "appearance.background.opacity",
                "appearance.layout.fontSize",
                "appearance.layout.padding",
                "advanced.enableSound",
                "advanced.completionMessage",
            ]
        );
    }

    #[test]
    fn test_defaults() {
        let defaults = widget_definition().defaults();
        assert_eq!(defaults.text("mode"), Some("Simple"));
        assert_eq!(defaults.number("duration"), Some(60.0));
        assert_eq!(defaults.bool("autoStart"), Some(false));
        assert_eq!(defaults.text("appearance.colors.timerColor"), Some("#1f2937"));
        assert_eq!(defaults.number("appearance.layout.fontSize"), Some(80.0));
        assert_eq!(
            defaults.text("advanced.completionMessage"),
            Some("⏰ Time's up!")
        );
        assert!(widget_definition().validate(&defaults).is_ok());
    }

    #[test]
    fn test_advanced_fields_hidden_in_simple_mode() {
        let schema = widget_definition();
        let simple = schema.defaults();
        let visible = schema.visible_fields(&simple);

        assert!(!visible.iter().any(|p| p == "showMilliseconds"));
        assert!(!visible.iter().any(|p| p.starts_with("advanced.")));
        assert!(visible.iter().any(|p| p == "appearance.layout.padding"));
        assert!(!schema.is_visible("advanced", &simple));
    }

    #[test]
    fn test_advanced_fields_visible_in_advanced_mode() {
        let schema = widget_definition();
        let advanced = schema.resolve(&Values::new().with("mode", "Advanced"));

        assert!(schema.is_visible("showMilliseconds", &advanced));
        assert!(schema.is_visible("advanced.enableSound", &advanced));
        assert!(schema.is_visible("advanced.completionMessage", &advanced));
        assert_eq!(schema.visible_fields(&advanced).len(), schema.fields().len());
    }

    #[test]
    fn test_folder_predicate_gates_children() {
        let schema = Schema::new().with("flag", Param::boolean(false)).with(
            "group",
            folder("Group")
                .with("inner", Param::text("x"))
                .visible_if(when("flag").equals(true)),
        );

        let off = schema.defaults();
        let on = off.clone().with("flag", true);
        assert!(!schema.is_visible("group.inner", &off));
        assert!(schema.is_visible("group.inner", &on));
    }

    #[test]
    fn test_unknown_path_is_not_visible() {
        let values = widget_definition().defaults();
        assert!(!widget_definition().is_visible("appearance.colors.nope", &values));
        assert!(!widget_definition().is_visible("nope", &values));
    }

    #[test]
    fn test_validate_rejects_out_of_range_duration() {
        let values = Values::new().with("duration", 700.0);
        let err = widget_definition().validate(&values).unwrap_err();
        assert_eq!(
            err,
            SchemaError::OutOfBounds {
                field: "duration".to_string(),
                value: 700.0,
                min: 5.0,
                max: 600.0,
            }
        );

        let too_short = Values::new().with("duration", 4.0);
        assert!(widget_definition().validate(&too_short).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_types_and_options() {
        let schema = widget_definition();

        let wrong_type = Values::new().with("autoStart", "yes");
        assert!(matches!(
            schema.validate(&wrong_type),
            Err(SchemaError::TypeMismatch { expected: "boolean", .. })
        ));

        let wrong_option = Values::new().with("mode", "Expert");
        assert!(matches!(
            schema.validate(&wrong_option),
            Err(SchemaError::InvalidOption { .. })
        ));

        let unknown = Values::new().with("appearance.colors", "#fff");
        assert_eq!(
            schema.validate(&unknown),
            Err(SchemaError::UnknownField("appearance.colors".to_string()))
        );
    }

    #[test]
    fn test_field_lookup() {
        let schema = widget_definition();
        let duration = schema.field("duration").unwrap();
        assert_eq!(
            duration.kind,
            ParamKind::Number {
                min: Some(5.0),
                max: Some(600.0),
                step: Some(5.0)
            }
        );
        assert_eq!(
            schema
                .field("appearance.background.imageUrl")
                .and_then(|p| p.placeholder.as_deref()),
            Some("https://example.com/image.jpg")
        );
        assert!(schema.field("appearance").is_none());
        assert!(schema.field("mode.extra").is_none());
    }

    #[test]
    fn test_folder_flags() {
        let schema = widget_definition();
        let folders: Vec<(&str, bool)> = schema
            .nodes()
            .iter()
            .filter_map(|(key, node)| match node {
                Node::Folder(f) => Some((key.as_str(), f.expanded)),
                Node::Param(_) => None,
            })
            .collect();
        assert_eq!(folders, vec![("appearance", true), ("advanced", false)]);
    }

    #[test]
    fn test_predicate_combinators() {
        let values = Values::new().with("mode", "Advanced").with("x", 1.0);
        let advanced = when("mode").equals("Advanced");
        let one = when("x").equals(1.0);

        assert!(Predicate::All(vec![advanced.clone(), one.clone()]).evaluate(&values));
        assert!(!advanced.clone().not().evaluate(&values));
        assert!(Predicate::Any(vec![advanced.not(), one]).evaluate(&values));
        assert!(!when("missing").equals(true).evaluate(&values));
    }

    #[test]
    fn test_resolve_overlays_defaults() {
        let resolved = widget_definition().resolve(&Values::new().with("duration", 120.0));
        assert_eq!(resolved.number("duration"), Some(120.0));
        assert_eq!(resolved.text("mode"), Some("Simple"));
        assert_eq!(resolved.len(), widget_definition().fields().len());
    }
}
