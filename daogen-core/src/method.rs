//! Generated method definitions.
//!
//! A [`MethodSpec`] is the artifact handed to listeners for every
//! single-method stage and for each slot of the accessor groups. The body is
//! kept as already-synthesized source lines; nothing here interprets them.

use super::types::{TypeHint, Visibility};

/// A generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    /// Method name.
    pub name: String,
    /// Doc block text, without comment delimiters.
    pub doc: Option<String>,
    /// Parameters, in declaration order.
    pub params: Vec<ParamSpec>,
    /// Return type (None when undeclared).
    pub return_type: Option<TypeHint>,
    /// Body source lines.
    pub body: Vec<String>,
    /// Visibility modifier.
    pub visibility: Visibility,
    /// Whether this is a static method.
    pub is_static: bool,
}

impl MethodSpec {
    /// Create a new public method with an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            params: Vec::new(),
            return_type: None,
            body: Vec::new(),
            visibility: Visibility::Public,
            is_static: false,
        }
    }

    /// Set the doc block.
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Add a parameter.
    pub fn param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    /// Add multiple parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = ParamSpec>) -> Self {
        self.params.extend(params);
        self
    }

    /// Set the return type.
    pub fn returns(mut self, ty: TypeHint) -> Self {
        self.return_type = Some(ty);
        self
    }

    /// Append a body line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Append multiple body lines.
    pub fn lines(mut self, lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.body.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Set visibility.
    pub fn visibility(mut self, vis: Visibility) -> Self {
        self.visibility = vis;
        self
    }

    /// Mark as static.
    pub fn static_(mut self) -> Self {
        self.is_static = true;
        self
    }

    /// Return this method under a different name.
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Check if this method has a body.
    pub fn has_body(&self) -> bool {
        !self.body.is_empty()
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    /// Parameter name, without sigil.
    pub name: String,
    /// Declared type, if any.
    pub ty: Option<TypeHint>,
    /// Default value expression, as source text.
    pub default: Option<String>,
}

impl ParamSpec {
    /// Create an untyped required parameter.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: None,
            default: None,
        }
    }

    /// Create a typed required parameter.
    pub fn typed(name: impl Into<String>, ty: TypeHint) -> Self {
        Self {
            name: name.into(),
            ty: Some(ty),
            default: None,
        }
    }

    /// Set a default value expression.
    pub fn default(mut self, expr: impl Into<String>) -> Self {
        self.default = Some(expr.into());
        self
    }

    /// Check if the parameter may be omitted by callers.
    pub fn is_optional(&self) -> bool {
        self.default.is_some()
    }
}
