use {
    crate::{
        classify::{ClassifyError, classify},
        headers::{ParsedHeaders, parse_header_file, resolve},
        registry::{self, FunctionSpec, Function, GlVersion, VersionSpec},
    },
    std::path::PathBuf,
};

fn normalize(specs: Vec<FunctionSpec>) -> Vec<Function> {
    registry::normalize(specs).unwrap()
}

fn with_version(parsed: &mut ParsedHeaders, name: &str, is_es: bool, major: u32, minor: u32) {
    parsed
        .versions
        .entry(GlVersion::new(is_es, major, minor))
        .or_default()
        .insert(name.to_string());
}

fn with_extension(parsed: &mut ParsedHeaders, name: &str, extension: &str) {
    parsed
        .extensions
        .entry(extension.to_string())
        .or_default()
        .insert(name.to_string());
}

#[test]
fn merges_declared_and_header_extensions() {
    let mut functions = normalize(vec![FunctionSpec::versions(
        "void",
        vec![VersionSpec::ext("glFooEXT", &["GL_EXT_declared"])],
        "GLenum x",
    )]);
    let mut parsed = ParsedHeaders::default();
    with_extension(&mut parsed, "glFooEXT", "GL_EXT_from_header");
    let used = classify(&mut functions, &parsed, &[]).unwrap();
    let extensions: Vec<_> = functions[0].versions[0].extensions.iter().cloned().collect();
    assert_eq!(extensions, ["GL_EXT_declared", "GL_EXT_from_header"]);
    assert!(used.display.contains("GL_EXT_declared"));
    assert!(used.display.contains("GL_EXT_from_header"));
    assert!(used.client.is_empty());
}

#[test]
fn explicit_only_suppresses_header_extensions() {
    let mut functions = normalize(vec![FunctionSpec::versions(
        "void",
        vec![VersionSpec::ext("glFooEXT", &["GL_EXT_declared"]).explicit_only()],
        "GLenum x",
    )]);
    let mut parsed = ParsedHeaders::default();
    with_extension(&mut parsed, "glFooEXT", "GL_EXT_from_header");
    classify(&mut functions, &parsed, &[]).unwrap();
    let extensions: Vec<_> = functions[0].versions[0].extensions.iter().cloned().collect();
    assert_eq!(extensions, ["GL_EXT_declared"]);
}

#[test]
fn client_extensions_accumulate_separately() {
    let mut functions = normalize(vec![FunctionSpec::versions(
        "EGLint",
        vec![VersionSpec::client("eglQueryDebugKHR", &["EGL_KHR_debug"])],
        "EGLint attribute, EGLAttrib* value",
    )]);
    let parsed = ParsedHeaders::default();
    let used = classify(&mut functions, &parsed, &["EGL_EXT_seeded"]).unwrap();
    assert!(used.client.contains("EGL_KHR_debug"));
    assert!(!used.display.contains("EGL_KHR_debug"));
    assert!(used.display.contains("EGL_EXT_seeded"));
    assert!(functions[0].is_client());
}

#[test]
fn core_versions_sort_before_extension_versions() {
    let mut functions = normalize(vec![FunctionSpec::versions(
        "void",
        vec![
            VersionSpec::ext("glFooEXT", &["GL_EXT_foo"]),
            VersionSpec::core("glFoo"),
        ],
        "GLenum x",
    )]);
    let mut parsed = ParsedHeaders::default();
    with_version(&mut parsed, "glFoo", false, 3, 0);
    with_version(&mut parsed, "glFoo", true, 3, 0);
    classify(&mut functions, &parsed, &[]).unwrap();
    assert_eq!(functions[0].versions[0].name, "glFoo");
    assert_eq!(functions[0].versions[1].name, "glFooEXT");
    assert!(functions[0].static_binding.is_none());
}

#[test]
fn condition_free_version_becomes_static() {
    let mut functions = normalize(vec![FunctionSpec::names(
        "void",
        &["glClear"],
        "GLbitfield mask",
    )]);
    let parsed = ParsedHeaders::default();
    classify(&mut functions, &parsed, &[]).unwrap();
    assert_eq!(functions[0].static_binding, Some("glClear"));
}

#[test]
fn bind_always_pair_becomes_static() {
    let mut functions = normalize(vec![FunctionSpec::names(
        "void",
        &["glEnable"],
        "GLenum cap",
    )]);
    let mut parsed = ParsedHeaders::default();
    with_version(&mut parsed, "glEnable", false, 1, 0);
    with_version(&mut parsed, "glEnable", true, 2, 0);
    classify(&mut functions, &parsed, &[]).unwrap();
    assert_eq!(functions[0].static_binding, Some("glEnable"));
}

#[test]
fn single_bind_always_version_stays_dynamic() {
    let mut functions = normalize(vec![FunctionSpec::names(
        "void",
        &["glDrawBuffer"],
        "GLenum mode",
    )]);
    let mut parsed = ParsedHeaders::default();
    with_version(&mut parsed, "glDrawBuffer", false, 1, 0);
    classify(&mut functions, &parsed, &[]).unwrap();
    assert!(functions[0].static_binding.is_none());
}

#[test]
fn unconditionally_bound_extension_becomes_static() {
    let mut functions = normalize(vec![FunctionSpec::versions(
        "void",
        vec![VersionSpec::ext(
            "glClearDepth",
            &["GL_CHROMIUM_gles_depth_binding_hack"],
        )],
        "GLclampd depth",
    )]);
    let parsed = ParsedHeaders::default();
    classify(&mut functions, &parsed, &[]).unwrap();
    assert_eq!(functions[0].static_binding, Some("glClearDepth"));
}

#[test]
fn ambiguous_static_bindings_are_fatal() {
    let mut functions = normalize(vec![FunctionSpec::names(
        "void",
        &["glFoo", "glFooOther"],
        "GLenum x",
    )]);
    let parsed = ParsedHeaders::default();
    assert!(matches!(
        classify(&mut functions, &parsed, &[]),
        Err(ClassifyError::AmbiguousStaticBinding(f)) if f == "glFoo"
    ));
}

#[test]
fn static_binding_next_to_dynamic_names_is_fatal() {
    let mut functions = normalize(vec![FunctionSpec::versions(
        "void",
        vec![
            VersionSpec::core("glFoo"),
            VersionSpec::ext("glFooEXT", &["GL_EXT_foo"]),
        ],
        "GLenum x",
    )]);
    let parsed = ParsedHeaders::default();
    assert!(matches!(
        classify(&mut functions, &parsed, &[]),
        Err(ClassifyError::MixedStaticDynamic { known_as, .. }) if known_as == "glFoo"
    ));
}

#[test]
fn two_bind_always_versions_of_one_kind_are_fatal() {
    let mut functions = normalize(vec![FunctionSpec::names("void", &["glFoo"], "GLenum x")]);
    let mut parsed = ParsedHeaders::default();
    with_version(&mut parsed, "glFoo", false, 1, 0);
    with_version(&mut parsed, "glFoo", false, 2, 0);
    assert!(matches!(
        classify(&mut functions, &parsed, &[]),
        Err(ClassifyError::BindAlwaysPair(f)) if f == "glFoo"
    ));
}

#[test]
fn duplicate_version_names_are_fatal() {
    let mut functions = normalize(vec![FunctionSpec::versions(
        "void",
        vec![
            VersionSpec::ext("glFooEXT", &["GL_EXT_a"]),
            VersionSpec::ext("glFooEXT", &["GL_EXT_b"]),
        ],
        "GLenum x",
    )]);
    let parsed = ParsedHeaders::default();
    assert!(matches!(
        classify(&mut functions, &parsed, &[]),
        Err(ClassifyError::DuplicateName(f)) if f == "glFooEXT"
    ));
}

#[test]
fn unclassified_extension_looking_function_is_fatal() {
    let mut functions = normalize(vec![FunctionSpec::names("void", &["glFooEXT"], "GLenum x")]);
    let parsed = ParsedHeaders::default();
    assert!(matches!(
        classify(&mut functions, &parsed, &[]),
        Err(ClassifyError::UnknownExtensionFunction(f)) if f == "glFooEXT"
    ));
}

#[test]
fn core_suffixes_do_not_trip_the_vendor_heuristic() {
    // glEndTilingQCOM-style names end in a vendor tag; these do not.
    let mut functions = normalize(vec![
        FunctionSpec::names("void", &["eglQueryAPI"], "void"),
        FunctionSpec::names("void", &["eglWaitGL"], "void"),
        FunctionSpec::names("void", &["glTexImage2D"], "GLenum target"),
    ]);
    let parsed = ParsedHeaders::default();
    classify(&mut functions, &parsed, &[]).unwrap();
    for func in &functions {
        assert!(func.static_binding.is_some());
    }
}

#[test]
fn classifies_the_shipped_tables_against_the_shipped_headers() {
    let roots: Vec<PathBuf> = registry::HEADER_PATHS.iter().map(PathBuf::from).collect();
    for set in registry::function_sets() {
        let mut functions = registry::normalize((set.functions)()).unwrap();
        registry::check_order(&functions).unwrap();
        let mut parsed = ParsedHeaders::default();
        for header in set.headers {
            let path = resolve(header, &roots).unwrap();
            parse_header_file(&path, &mut parsed).unwrap();
        }
        let used = classify(&mut functions, &parsed, set.extra_extensions).unwrap();
        // Display and client extensions stay disjoint.
        assert!(used.display.is_disjoint(&used.client));
        // Every version entry ends up classified or static.
        for func in &functions {
            for version in &func.versions {
                assert!(
                    !version.extensions.is_empty()
                        || !version.gl_versions.is_empty()
                        || func.static_binding == Some(version.name),
                    "{} is unclassified",
                    version.name
                );
            }
        }
        if set.name == "egl" {
            for func in &functions {
                if func.static_binding.is_none() {
                    assert_eq!(func.versions.len(), 1, "{}", func.known_as);
                }
            }
        }
    }
}
