pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A failed generation run. No output exists when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Schema(SchemaDefect),
    UnknownKind { family: String, kind: String },
}

/// An authoring mistake in the schema catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaDefect {
    /// A field spec did not split into exactly `<type> <name>`.
    MalformedField {
        family: String,
        kind: String,
        spec: String,
    },
    DuplicateField {
        family: String,
        kind: String,
        name: String,
    },
    EmptyKind { family: String, kind: String },
    EmptyFamily { family: String },
}

impl From<SchemaDefect> for Error {
    fn from(defect: SchemaDefect) -> Self {
        Error::Schema(defect)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Schema(defect) => std::fmt::Display::fmt(defect, f),
            Error::UnknownKind { family, kind } => {
                write!(f, "no kind named {kind:?} in family {family:?}")
            }
        }
    }
}

impl std::fmt::Display for SchemaDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaDefect::MalformedField { family, kind, spec } => write!(
                f,
                "field spec in {family}.{kind} must be exactly two tokens, got {spec:?}"
            ),
            SchemaDefect::DuplicateField { family, kind, name } => {
                write!(f, "duplicate field name {name:?} in {family}.{kind}")
            }
            SchemaDefect::EmptyKind { family, kind } => {
                write!(f, "kind {family}.{kind} has no fields")
            }
            SchemaDefect::EmptyFamily { family } => {
                write!(f, "family {family:?} has no kinds")
            }
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for SchemaDefect {}
