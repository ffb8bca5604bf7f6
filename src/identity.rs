use std::borrow::Cow;
use std::fmt;

/// Name, declaring module and doc text of a wrapped callable.
///
/// Wrappers copy this from their target when they are built, so reports and
/// introspection keep naming the original callable rather than the wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    name: Cow<'static, str>,
    module: Cow<'static, str>,
    doc: Option<Cow<'static, str>>,
}

impl Identity {
    pub fn new(name: impl Into<Cow<'static, str>>, module: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            module: module.into(),
            doc: None,
        }
    }

    /// Builds an identity in `const` context; used by `#[decorate]`.
    pub const fn from_static(name: &'static str, module: &'static str, doc: Option<&'static str>) -> Self {
        Self {
            name: Cow::Borrowed(name),
            module: Cow::Borrowed(module),
            doc: match doc {
                Some(doc) => Some(Cow::Borrowed(doc)),
                None => None,
            },
        }
    }

    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.module, self.name)
    }
}
