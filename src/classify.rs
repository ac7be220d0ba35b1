#[cfg(test)]
mod tests;

use {
    crate::{
        headers::ParsedHeaders,
        registry::{Function, GlVersion},
    },
    ahash::AHashMap,
    regex::Regex,
    std::{
        collections::{BTreeMap, BTreeSet},
        sync::LazyLock,
    },
    thiserror::Error,
};

/// Extensions that are bound even when the driver does not advertise them.
pub const UNCONDITIONALLY_BOUND_EXTENSIONS: &[&str] = &[
    "GL_CHROMIUM_gles_depth_binding_hack",
    "GL_CHROMIUM_glgetstringi_hack",
    "GL_CHROMIUM_egl_khr_fence_sync_hack",
    "GL_CHROMIUM_egl_android_native_fence_sync_hack",
];

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("duplicate version entries with the same name for {0}")]
    DuplicateName(String),
    #[error(
        "{0} looks like an extension function but does not belong to any of the known extensions"
    )]
    UnknownExtensionFunction(String),
    #[error("{0} has two bind-always GL versions of the same kind")]
    BindAlwaysPair(String),
    #[error("{0} has more than one static binding candidate")]
    AmbiguousStaticBinding(String),
    #[error("{known_as} binds {static_name} statically but other versions use different names")]
    MixedStaticDynamic {
        known_as: String,
        static_name: String,
    },
}

/// The used extension sets produced by [classify]. Display and client
/// extensions stay disjoint; each version entry contributes to exactly one.
pub struct UsedExtensions {
    pub display: BTreeSet<String>,
    pub client: BTreeSet<String>,
}

static VENDOR_SUFFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z][A-Z]+)$").unwrap());

/// Heuristic: a trailing all-caps vendor tag that is not one of the suffixes
/// core functions legitimately end in.
fn looks_like_extension_function(function: &str) -> bool {
    match VENDOR_SUFFIX.captures(function) {
        Some(m) => {
            let vendor = &m[1];
            vendor.len() < function.len() && !matches!(vendor, "GL" | "API" | "DC")
        }
        None => false,
    }
}

/// Cross-joins the table with the parsed headers: merges declared and
/// header-derived extensions into every version entry, attaches the GL
/// revisions that provide each symbol, accumulates the used extension sets,
/// and resolves static bindings.
pub fn classify(
    functions: &mut [Function],
    parsed: &ParsedHeaders,
    extra_extensions: &[&str],
) -> Result<UsedExtensions, ClassifyError> {
    let mut fn_to_extensions: AHashMap<&str, BTreeSet<String>> = AHashMap::new();
    for (extension, names) in &parsed.extensions {
        for name in names {
            fn_to_extensions
                .entry(name.as_str())
                .or_default()
                .insert(extension.clone());
        }
    }
    let mut fn_to_versions: AHashMap<&str, BTreeSet<GlVersion>> = AHashMap::new();
    for (version, names) in &parsed.versions {
        for name in names {
            fn_to_versions.entry(name.as_str()).or_default().insert(*version);
        }
    }

    let mut used = UsedExtensions {
        display: BTreeSet::new(),
        client: BTreeSet::new(),
    };
    let mut used_by_version: BTreeMap<GlVersion, BTreeSet<&str>> = BTreeMap::new();

    for func in functions.iter_mut() {
        for i in 0..func.versions.len() {
            let name = func.versions[i].name;
            if func.versions.iter().filter(|v| v.name == name).count() > 1 {
                return Err(ClassifyError::DuplicateName(name.to_string()));
            }

            let from_headers = fn_to_extensions.get(name).cloned().unwrap_or_default();
            let declared: BTreeSet<String> = func.versions[i]
                .declared_extensions
                .iter()
                .map(|e| e.to_string())
                .collect();

            let in_both: Vec<_> = declared.intersection(&from_headers).cloned().collect();
            if !in_both.is_empty() {
                println!(
                    "[{}] Specified redundant extensions for binding: {}",
                    name,
                    in_both.join(", ")
                );
            }
            let extra: Vec<_> = declared.difference(&from_headers).cloned().collect();
            if !extra.is_empty() {
                println!(
                    "[{}] Specified extra extensions for binding: {}",
                    name,
                    extra.join(", ")
                );
            }

            let version = &mut func.versions[i];
            version.extensions = if version.explicit_only {
                declared
            } else {
                declared.union(&from_headers).cloned().collect()
            };
            if !version.extensions.is_empty() {
                let target = if version.client {
                    &mut used.client
                } else {
                    &mut used.display
                };
                target.extend(version.extensions.iter().cloned());
            }

            if let Some(gl_versions) = fn_to_versions.get(name) {
                version.gl_versions = gl_versions.clone();
                for v in gl_versions {
                    used_by_version.entry(*v).or_default().insert(name);
                }
            }

            let version = &func.versions[i];
            if version.extensions.is_empty()
                && version.gl_versions.is_empty()
                && looks_like_extension_function(name)
            {
                return Err(ClassifyError::UnknownExtensionFunction(name.to_string()));
            }
        }

        // Prefer core bindings over extension bindings.
        func.versions
            .sort_by_key(|v| if v.gl_versions.is_empty() { 1 } else { 0 });

        func.static_binding = static_binding(func)?;
    }

    used.display.extend(extra_extensions.iter().map(|e| e.to_string()));

    for (version, names) in used_by_version
        .iter()
        .filter(|(v, _)| v.is_es)
        .chain(used_by_version.iter().filter(|(v, _)| !v.is_es))
    {
        let kind = if version.is_es { "OpenGL ES" } else { "OpenGL" };
        println!(
            "{} {}.{}: {} used functions",
            kind,
            version.major,
            version.minor,
            names.len()
        );
    }

    Ok(used)
}

/// The single name that may be bound without consulting the runtime, if any.
///
/// A version qualifies when it depends on an unconditionally bound extension,
/// when the headers place it in both a bind-always GL and a bind-always GLES
/// revision, or when it carries no conditions at all. More than one candidate,
/// or a candidate next to differently named dynamic versions, makes the
/// bindings ambiguous.
fn static_binding(func: &Function) -> Result<Option<&'static str>, ClassifyError> {
    let mut candidates = BTreeSet::new();
    for version in &func.versions {
        if !version.extensions.is_empty() {
            if version
                .extensions
                .iter()
                .any(|e| UNCONDITIONALLY_BOUND_EXTENSIONS.contains(&e.as_str()))
            {
                candidates.insert(version.name);
            }
        } else if !version.gl_versions.is_empty() {
            let bind_always: Vec<_> = version
                .gl_versions
                .iter()
                .filter(|v| v.bind_always())
                .collect();
            // Unconditional only if it exists in both GL and GLES.
            if bind_always.len() == 2 {
                if bind_always[0].is_es == bind_always[1].is_es {
                    return Err(ClassifyError::BindAlwaysPair(version.name.to_string()));
                }
                candidates.insert(version.name);
            }
        } else {
            candidates.insert(version.name);
        }
    }
    if candidates.len() > 1 {
        return Err(ClassifyError::AmbiguousStaticBinding(
            func.known_as.to_string(),
        ));
    }
    let Some(static_name) = candidates.into_iter().next() else {
        return Ok(None);
    };
    if func.versions.iter().any(|v| v.name != static_name) {
        return Err(ClassifyError::MixedStaticDynamic {
            known_as: func.known_as.to_string(),
            static_name: static_name.to_string(),
        });
    }
    Ok(Some(static_name))
}
