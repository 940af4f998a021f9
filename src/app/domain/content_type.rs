use std::fmt;

use serde::{Deserialize, Serialize};

/// MIME-like label naming the kind of pasted content.
///
/// The server uses it to pick its own rendering; the client uses it to pick
/// a syntax mode through [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentType(String);

impl ContentType {
    pub const PLAIN: &'static str = "text/plain";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn plain() -> Self {
        Self::new(Self::PLAIN)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_plain(&self) -> bool {
        self.0 == Self::PLAIN
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::plain()
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where the rendering mode for a content type comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSource {
    /// No highlighting. Used for plain text and anything unknown.
    Fallback,
    /// Shipped with the editor; the payload is the syntect syntax name.
    Builtin(&'static str),
    /// Syntax module fetched on demand from the asset host.
    Module(&'static str),
}

/// Language options offered to the user, in display order: (label, mime).
/// The first entry is the default selection.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("Plain Text", "text/plain"),
    ("Generic", "text/generic"),
    ("C", "text/x-csrc"),
    ("CMake", "text/x-cmake"),
    ("CSS", "text/css"),
    ("D", "text/x-d"),
    ("Diff", "text/x-diff"),
    ("Dockerfile", "text/x-dockerfile"),
    ("Erlang", "text/x-erlang"),
    ("Go", "text/x-go"),
    ("Haskell", "text/x-haskell"),
    ("HTML", "text/html"),
    ("Java", "text/x-java"),
    ("JavaScript", "text/javascript"),
    ("Jinja2", "jinja2"),
    ("Kotlin", "text/x-kotlin"),
    ("Lua", "text/x-lua"),
    ("Markdown", "text/x-markdown"),
    ("Perl", "text/x-perl"),
    ("PHP", "text/x-php"),
    ("Python", "text/x-python"),
    ("RPM Changes", "text/x-rpm-changes"),
    ("reStructuredText", "text/x-rst"),
    ("Ruby", "text/x-ruby"),
    ("Rust", "text/x-rust"),
    ("Shell", "text/x-sh"),
    ("SQL", "text/x-sql"),
    ("Swift", "text/x-swift"),
    ("XML", "application/xml"),
    ("YAML", "text/x-yaml"),
];

/// Map a content type to its rendering mode. Total: unknown types fall back.
pub fn resolve(content_type: &ContentType) -> ModeSource {
    match content_type.as_str() {
        "text/generic" | "text/javascript" => ModeSource::Builtin("JavaScript"),
        "text/x-csrc" | "text/x-java" | "text/x-kotlin" => ModeSource::Module("clike"),
        "text/x-cmake" => ModeSource::Module("cmake"),
        "text/css" => ModeSource::Module("css"),
        "text/x-d" => ModeSource::Module("d"),
        "text/x-diff" => ModeSource::Module("diff"),
        "text/x-dockerfile" => ModeSource::Module("dockerfile"),
        "text/x-erlang" => ModeSource::Module("erlang"),
        "text/x-go" => ModeSource::Module("go"),
        "text/x-haskell" => ModeSource::Module("haskell"),
        "text/html" | "application/xml" => ModeSource::Module("xml"),
        "jinja2" => ModeSource::Module("jinja2"),
        "text/x-lua" => ModeSource::Module("lua"),
        "text/x-markdown" => ModeSource::Module("markdown"),
        "text/x-perl" => ModeSource::Module("perl"),
        "text/x-php" => ModeSource::Module("php"),
        "text/x-python" => ModeSource::Module("python"),
        "text/x-rpm-changes" => ModeSource::Module("rpm"),
        "text/x-rst" => ModeSource::Module("rst"),
        "text/x-ruby" => ModeSource::Module("ruby"),
        "text/x-rust" => ModeSource::Module("rust"),
        "text/x-sh" => ModeSource::Module("shell"),
        "text/x-sql" => ModeSource::Module("sql"),
        "text/x-swift" => ModeSource::Module("swift"),
        "text/x-yaml" => ModeSource::Module("yaml"),
        _ => ModeSource::Fallback,
    }
}

/// Position of a mime in [`LANGUAGES`], if it is offered.
pub fn language_index(mime: &str) -> Option<usize> {
    LANGUAGES.iter().position(|(_, m)| *m == mime)
}
