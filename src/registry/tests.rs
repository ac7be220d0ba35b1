use {
    crate::registry::{self, FunctionSpec, TableError, VersionSpec},
    ahash::AHashSet,
};

#[test]
fn names_expand_to_versions() {
    let functions = registry::normalize(vec![FunctionSpec::names(
        "void",
        &["glBindFramebufferEXT", "glBindFramebuffer"],
        "GLenum target, GLuint framebuffer",
    )])
    .unwrap();
    assert_eq!(functions[0].known_as, "glBindFramebufferEXT");
    let names: Vec<_> = functions[0].versions.iter().map(|v| v.name).collect();
    assert_eq!(names, ["glBindFramebufferEXT", "glBindFramebuffer"]);
}

#[test]
fn known_as_overrides_the_first_name() {
    let functions = registry::normalize(vec![
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBindImageTexture", &["GL_ARB_shader_image_load_store"]),
                VersionSpec::ext("glBindImageTextureEXT", &["GL_EXT_shader_image_load_store"]),
            ],
            "GLuint index, GLuint texture",
        )
        .known_as("glBindImageTextureEXT"),
    ])
    .unwrap();
    assert_eq!(functions[0].known_as, "glBindImageTextureEXT");
}

#[test]
fn empty_entries_are_rejected() {
    assert!(matches!(
        registry::normalize(vec![FunctionSpec::names("void", &[], "void")]),
        Err(TableError::NoNames)
    ));
}

#[test]
fn order_check_names_the_out_of_order_element() {
    let functions = registry::normalize(vec![
        FunctionSpec::names("void", &["glBindBuffer"], "GLenum target, GLuint buffer"),
        FunctionSpec::names("void", &["glActiveTexture"], "GLenum texture"),
    ])
    .unwrap();
    match registry::check_order(&functions).unwrap_err() {
        TableError::OutOfOrder(name) => assert_eq!(name, "glActiveTexture"),
        e => panic!("unexpected error {e:?}"),
    }
}

#[test]
fn order_check_is_case_insensitive() {
    let functions = registry::normalize(vec![
        FunctionSpec::names("void", &["glBindFramebufferEXT"], "void"),
        FunctionSpec::names("void", &["glBindImageTexture"], "void"),
        FunctionSpec::names("void", &["glBindProgramPipeline"], "void"),
    ])
    .unwrap();
    registry::check_order(&functions).unwrap();
}

#[test]
fn shipped_tables_are_sorted() {
    for set in registry::function_sets() {
        let functions = registry::normalize((set.functions)()).unwrap();
        registry::check_order(&functions).unwrap();
    }
}

#[test]
fn shipped_tables_have_unique_names() {
    for set in registry::function_sets() {
        let functions = registry::normalize((set.functions)()).unwrap();
        let mut known_as = AHashSet::new();
        let mut names = AHashSet::new();
        for func in &functions {
            assert!(known_as.insert(func.known_as), "{}", func.known_as);
            for version in &func.versions {
                assert!(names.insert(version.name), "{}", version.name);
            }
        }
    }
}

#[test]
fn client_extension_entries_have_a_single_version() {
    for set in registry::function_sets() {
        for func in registry::normalize((set.functions)()).unwrap() {
            if func.versions[0].client {
                assert_eq!(func.versions.len(), 1, "{}", func.known_as);
            }
        }
    }
}
