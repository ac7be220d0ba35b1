pub mod egl;
pub mod gl;

#[cfg(test)]
mod tests;

use {
    std::collections::BTreeSet,
    thiserror::Error,
};

/// Roots searched for a header, in order. Relative roots are interpreted
/// against the current directory.
pub const HEADER_PATHS: &[&str] = &[
    "third_party/khronos",
    "third_party/mesa_headers",
    ".",
    "gpu",
];

/// Headers scanned for `#define GL_* 0x*` constants by the enum-table emitter.
pub const ENUM_HEADERS: &[&str] = &[
    "GLES2/gl2.h",
    "GLES2/gl2ext.h",
    "GLES2/gl2chromium.h",
    "GLES2/gl2extchromium.h",
    "GLES3/gl3.h",
    "GLES3/gl31.h",
];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("function entry with neither names nor versions")]
    NoNames,
    #[error("function {0} is not in alphabetical order")]
    OutOfOrder(String),
}

/// One entry of the declarative function table.
///
/// Binding conditions can be specified manually by supplying `versions`
/// instead of `names`. By default the function is known by the first name in
/// `names` or `versions`; `known_as` overrides that.
#[derive(Clone, Debug, Default)]
pub struct FunctionSpec {
    pub return_type: &'static str,
    pub known_as: Option<&'static str>,
    pub names: &'static [&'static str],
    pub versions: Vec<VersionSpec>,
    pub arguments: &'static str,
    pub is_optional: bool,
    pub logging_code: Option<&'static str>,
}

impl FunctionSpec {
    pub fn names(
        return_type: &'static str,
        names: &'static [&'static str],
        arguments: &'static str,
    ) -> Self {
        Self {
            return_type,
            names,
            arguments,
            ..Default::default()
        }
    }

    pub fn versions(
        return_type: &'static str,
        versions: Vec<VersionSpec>,
        arguments: &'static str,
    ) -> Self {
        Self {
            return_type,
            versions,
            arguments,
            ..Default::default()
        }
    }

    pub fn known_as(mut self, name: &'static str) -> Self {
        self.known_as = Some(name);
        self
    }

    /// GetProcAddress may legitimately return NULL for this function. This
    /// happens for example when functions are added to a new revision of an
    /// extension without the extension string changing.
    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn logging(mut self, code: &'static str) -> Self {
        self.logging_code = Some(code);
        self
    }
}

/// One concrete C symbol that may implement a [FunctionSpec].
#[derive(Clone, Debug, Default)]
pub struct VersionSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub client: bool,
    pub explicit_only: bool,
}

impl VersionSpec {
    pub fn core(name: &'static str) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    pub fn ext(name: &'static str, extensions: &'static [&'static str]) -> Self {
        Self {
            name,
            extensions,
            ..Default::default()
        }
    }

    /// Extensions advertised before any display exists. Mutually exclusive
    /// with display extensions; only valid on single-version entries.
    pub fn client(name: &'static str, extensions: &'static [&'static str]) -> Self {
        Self {
            name,
            extensions,
            client: true,
            ..Default::default()
        }
    }

    /// Suppresses merging with header-derived extensions.
    pub fn explicit_only(mut self) -> Self {
        self.explicit_only = true;
        self
    }
}

/// An OpenGL or OpenGL-ES revision.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct GlVersion {
    pub is_es: bool,
    pub major: u32,
    pub minor: u32,
}

impl GlVersion {
    pub fn new(is_es: bool, major: u32, minor: u32) -> Self {
        Self { is_es, major, minor }
    }

    /// Old enough to be assumed present on every target.
    pub fn bind_always(self) -> bool {
        self.major <= 2
    }
}

/// A normalized function-table entry. The classifier fills in the
/// header-derived fields of `versions` and `static_binding`.
#[derive(Clone, Debug)]
pub struct Function {
    pub return_type: &'static str,
    pub known_as: &'static str,
    pub arguments: &'static str,
    pub is_optional: bool,
    pub logging_code: Option<&'static str>,
    pub versions: Vec<Version>,
    pub static_binding: Option<&'static str>,
}

impl Function {
    /// Whether this function is gated on client-side rather than display-side
    /// capabilities.
    pub fn is_client(&self) -> bool {
        self.versions[0].client
    }
}

#[derive(Clone, Debug)]
pub struct Version {
    pub name: &'static str,
    pub declared_extensions: &'static [&'static str],
    pub client: bool,
    pub explicit_only: bool,
    /// Declared extensions merged with the ones parsed from the headers.
    pub extensions: BTreeSet<String>,
    /// GL revisions whose header block declares this symbol.
    pub gl_versions: BTreeSet<GlVersion>,
}

/// A named group binding a table subset, its headers, and extensions that do
/// not introduce functions but must still be tracked.
pub struct FunctionSet {
    pub name: &'static str,
    pub functions: fn() -> Vec<FunctionSpec>,
    pub headers: &'static [&'static str],
    pub extra_extensions: &'static [&'static str],
}

pub fn function_sets() -> [FunctionSet; 2] {
    [
        FunctionSet {
            name: "gl",
            functions: gl::functions,
            headers: gl::HEADERS,
            extra_extensions: gl::EXTRA_EXTENSIONS,
        },
        FunctionSet {
            name: "egl",
            functions: egl::functions,
            headers: egl::HEADERS,
            extra_extensions: egl::EXTENSIONS_EXTRA,
        },
    ]
}

/// Expands `names` shorthands into version entries and resolves `known_as`.
pub fn normalize(specs: Vec<FunctionSpec>) -> Result<Vec<Function>, TableError> {
    let mut functions = Vec::with_capacity(specs.len());
    for spec in specs {
        let versions: Vec<_> = if spec.versions.is_empty() {
            spec.names.iter().copied().map(VersionSpec::core).collect()
        } else {
            spec.versions
        };
        if versions.is_empty() {
            return Err(TableError::NoNames);
        }
        let known_as = spec.known_as.unwrap_or(versions[0].name);
        functions.push(Function {
            return_type: spec.return_type,
            known_as,
            arguments: spec.arguments,
            is_optional: spec.is_optional,
            logging_code: spec.logging_code,
            versions: versions
                .into_iter()
                .map(|v| Version {
                    name: v.name,
                    declared_extensions: v.extensions,
                    client: v.client,
                    explicit_only: v.explicit_only,
                    extensions: BTreeSet::new(),
                    gl_versions: BTreeSet::new(),
                })
                .collect(),
            static_binding: None,
        });
    }
    Ok(functions)
}

/// Checks that the table is sorted case-insensitively by `known_as`.
pub fn check_order(functions: &[Function]) -> Result<(), TableError> {
    for pair in functions.windows(2) {
        if pair[0].known_as.to_lowercase() > pair[1].known_as.to_lowercase() {
            return Err(TableError::OutOfOrder(pair[1].known_as.to_string()));
        }
    }
    Ok(())
}
