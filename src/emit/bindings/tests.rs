use {
    crate::{
        classify::{UsedExtensions, classify},
        emit::{EmitOptions, bindings},
        headers::ParsedHeaders,
        registry::{self, Function, FunctionSpec, GlVersion, VersionSpec},
    },
    std::collections::BTreeSet,
};

fn gl_fixture() -> (Vec<Function>, UsedExtensions) {
    let specs = vec![
        FunctionSpec::versions(
            "void",
            vec![
                VersionSpec::ext("glBindFragDataLocation", &["GL_ARB_blend_func_extended"]),
                VersionSpec::ext("glBindFragDataLocationEXT", &["GL_EXT_blend_func_extended"]),
            ],
            "GLuint program, GLuint colorNumber, const char* name",
        ),
        FunctionSpec::names("void", &["glClear"], "GLbitfield mask"),
        FunctionSpec::names("void", &["glEnable"], "GLenum cap"),
        FunctionSpec::names("GLenum", &["glGetError"], "void"),
        FunctionSpec::names("void", &["glUniform1ui"], "GLint location, GLuint v0"),
    ];
    let mut functions = registry::normalize(specs).unwrap();
    let mut parsed = ParsedHeaders::default();
    for name in ["glClear", "glEnable", "glGetError"] {
        for version in [GlVersion::new(false, 1, 0), GlVersion::new(true, 2, 0)] {
            parsed
                .versions
                .entry(version)
                .or_default()
                .insert(name.to_string());
        }
    }
    for version in [GlVersion::new(false, 3, 0), GlVersion::new(true, 3, 0)] {
        parsed
            .versions
            .entry(version)
            .or_default()
            .insert("glUniform1ui".to_string());
    }
    let used = classify(&mut functions, &parsed, &[]).unwrap();
    (functions, used)
}

fn emit_source(options: &EmitOptions) -> String {
    let (functions, used) = gl_fixture();
    let mut out = Vec::new();
    bindings::source(&mut out, &functions, "gl", &used.display, &used.client, options).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn header_declares_typedefs_procs_api_and_macros() {
    let (functions, used) = gl_fixture();
    let mut out = Vec::new();
    bindings::header(&mut out, &functions, "gl", &used.display, &used.client).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("#ifndef UI_GL_GL_BINDINGS_AUTOGEN_GL_H_"));
    assert!(text.contains("typedef void (GL_BINDING_CALL *glClearProc)(GLbitfield mask);"));
    assert!(text.contains("struct ExtensionsGL {"));
    assert!(text.contains("  bool b_GL_ARB_blend_func_extended;"));
    assert!(text.contains("  bool b_GL_EXT_blend_func_extended;"));
    assert!(text.contains("struct ProcsGL {"));
    assert!(text.contains("  glClearProc glClearFn;"));
    assert!(text.contains("class GL_EXPORT GLApi {"));
    assert!(text.contains("  virtual void glClearFn(GLbitfield mask) = 0;"));
    assert!(text.contains("#define glClear ::gl::g_current_gl_context->glClearFn"));
    // Extension flags are emitted in ascending lexicographic order.
    let arb = text.find("b_GL_ARB_blend_func_extended").unwrap();
    let ext = text.find("b_GL_EXT_blend_func_extended").unwrap();
    assert!(arb < ext);
}

#[test]
fn api_header_mirrors_the_api_class_with_overrides() {
    let (functions, _) = gl_fixture();
    let mut out = Vec::new();
    bindings::api_header(&mut out, &functions, "gl").unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("no-include-guard-because-multiply-included"));
    assert!(text.contains("  void glClearFn(GLbitfield mask) override;"));
    assert!(text.contains("  GLenum glGetErrorFn(void) override;"));
}

#[test]
fn static_bindings_are_resolved_unconditionally() {
    let text = emit_source(&EmitOptions::default());
    assert!(text.contains("void DriverGL::InitializeStaticBindings() {"));
    assert!(
        text.contains("  fn.glClearFn = reinterpret_cast<glClearProc>(GetGLProcAddress(\"glClear\"));")
    );
    // Static bindings never reappear in the dynamic initializer.
    assert_eq!(text.matches("GetGLProcAddress(\"glClear\")").count(), 1);
}

#[test]
fn dynamic_bindings_emit_an_if_else_chain_in_version_order() {
    let text = emit_source(&EmitOptions::default());
    assert!(text.contains(
        "  if (ext.b_GL_ARB_blend_func_extended) {\n    \
         fn.glBindFragDataLocationFn = reinterpret_cast<glBindFragDataLocationProc>(GetGLProcAddress(\"glBindFragDataLocation\"));\n  \
         } else if (ext.b_GL_EXT_blend_func_extended) {\n    \
         fn.glBindFragDataLocationFn = reinterpret_cast<glBindFragDataLocationProc>(GetGLProcAddress(\"glBindFragDataLocationEXT\"));\n  }"
    ));
    assert!(text.contains(
        "  ext.b_GL_ARB_blend_func_extended = gfx::HasExtension(extensions, \"GL_ARB_blend_func_extended\");"
    ));
}

#[test]
fn version_gated_bindings_use_is_at_least_conditions() {
    let text = emit_source(&EmitOptions::default());
    assert!(text.contains("  if (ver->IsAtLeastGL(3u, 0u) || ver->IsAtLeastGLES(3u, 0u)) {"));
}

#[test]
fn validate_bindings_adds_dchecks_to_each_arm() {
    let text = emit_source(&EmitOptions {
        validate_bindings: true,
        ..Default::default()
    });
    assert!(text.contains("    DCHECK(fn.glBindFragDataLocationFn);"));
}

#[test]
fn logging_wrappers_render_arguments_by_type() {
    let text = emit_source(&EmitOptions::default());
    assert!(text.contains(
        "void LogGLApi::glEnableFn(GLenum cap) {\n  \
         GL_SERVICE_LOG(\"glEnable\" << \"(\" << GLEnums::GetStringEnum(cap) << \")\");\n  \
         gl_api_->glEnableFn(cap);\n}"
    ));
    assert!(text.contains("  GLenum result = gl_api_->glGetErrorFn();"));
    assert!(text.contains("  GL_SERVICE_LOG(\"GL_RESULT: \" << result);"));
}

#[test]
fn generate_dchecks_asserts_no_gl_errors_after_each_call() {
    let text = emit_source(&EmitOptions {
        generate_dchecks: true,
        ..Default::default()
    });
    assert!(text.contains("    GLenum error = gl_api_->glGetErrorFn();"));
    assert!(text.contains("    DCHECK(error == 0) << \"OpenGL error 0x\""));
}

#[test]
fn trace_and_dispatch_layers_forward_every_call() {
    let text = emit_source(&EmitOptions::default());
    assert!(text.contains(
        "void GLApiBase::glEnableFn(GLenum cap) {\n  driver_->fn.glEnableFn(cap);\n}"
    ));
    assert!(text.contains("  TRACE_EVENT_BINARY_EFFICIENT0(\"gpu\", \"TraceGLAPI::glEnable\");"));
    assert!(text.contains("  return driver_->fn.glGetErrorFn();"));
}

#[test]
fn no_context_shims_return_type_defaults() {
    let text = emit_source(&EmitOptions::default());
    assert!(text.contains(
        "GLenum NoContextGLApi::glGetErrorFn(void) {\n  \
         NoContextHelper(\"glGetError\");\n  \
         return static_cast<GLenum>(0);\n}"
    ));
    assert!(text.contains("void NoContextGLApi::glClearFn(GLbitfield mask) {"));
    assert!(text.contains("void DriverGL::ClearBindings() {\n  memset(this, 0, sizeof(*this));\n}"));
}

fn egl_fixture() -> (Vec<Function>, UsedExtensions) {
    let specs = vec![
        FunctionSpec::versions(
            "EGLint",
            vec![VersionSpec::client("eglDebugMessageControlKHR", &["EGL_KHR_debug"])],
            "EGLDEBUGPROCKHR callback, const EGLAttrib* attrib_list",
        ),
        FunctionSpec::versions(
            "EGLBoolean",
            vec![VersionSpec::ext("eglDestroyImageKHR", &["EGL_KHR_image_base"])],
            "EGLDisplay dpy, EGLImageKHR image",
        ),
        FunctionSpec::names("EGLBoolean", &["eglInitialize"], "EGLDisplay dpy, EGLint* major, EGLint* minor"),
    ];
    let mut functions = registry::normalize(specs).unwrap();
    let parsed = ParsedHeaders::default();
    let used = classify(&mut functions, &parsed, &[]).unwrap();
    (functions, used)
}

#[test]
fn egl_binds_every_function_statically() {
    let (functions, used) = egl_fixture();
    let mut out = Vec::new();
    bindings::source(
        &mut out,
        &functions,
        "egl",
        &used.display,
        &used.client,
        &EmitOptions::default(),
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("DriverEGL g_driver_egl;  // Exists in .bss"));
    assert!(text.contains("GetGLProcAddress(\"eglDestroyImageKHR\")"));
    assert!(text.contains("GetGLProcAddress(\"eglDebugMessageControlKHR\")"));
    assert!(text.contains("GetGLProcAddress(\"eglInitialize\")"));
    assert!(text.contains("void ClientExtensionsEGL::InitializeClientExtensionSettings() {"));
    assert!(text.contains("  b_EGL_KHR_debug = gfx::HasExtension(extensions, \"EGL_KHR_debug\");"));
    assert!(text.contains("void DisplayExtensionsEGL::InitializeExtensionSettings(EGLDisplay display) {"));
    assert!(text.contains("  b_EGL_KHR_image_base = gfx::HasExtension(extensions, \"EGL_KHR_image_base\");"));
    // No conditional function bindings for EGL.
    assert!(!text.contains("} else if ("));
    // No-context shims are a GL-set concern.
    assert!(!text.contains("NoContextHelper"));
}

#[test]
fn egl_header_splits_client_and_display_extension_structs() {
    let (functions, used) = egl_fixture();
    let mut out = Vec::new();
    bindings::header(&mut out, &functions, "egl", &used.display, &used.client).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("struct GL_EXPORT ClientExtensionsEGL {"));
    assert!(text.contains("struct GL_EXPORT DisplayExtensionsEGL {"));
    assert!(text.contains("  void InitializeClientExtensionSettings();"));
    assert!(text.contains("  void InitializeExtensionSettings(EGLDisplay display);"));
    assert!(text.contains("  void UpdateConditionalExtensionSettings(EGLDisplay display);"));
    assert!(text.contains("  static std::string GetClientExtensions();"));
    assert!(text.contains("  static std::string GetPlatformExtensions(EGLDisplay display);"));
}

#[test]
fn deterministic_output_for_identical_inputs() {
    let render = || {
        let (functions, used) = gl_fixture();
        let mut out = Vec::new();
        bindings::source(
            &mut out,
            &functions,
            "gl",
            &used.display,
            &used.client,
            &EmitOptions::default(),
        )
        .unwrap();
        out
    };
    assert_eq!(render(), render());
}

#[test]
fn used_extension_sets_drive_the_flag_fields() {
    let (_, used) = gl_fixture();
    let expected: BTreeSet<String> = ["GL_ARB_blend_func_extended", "GL_EXT_blend_func_extended"]
        .iter()
        .map(|e| e.to_string())
        .collect();
    assert_eq!(used.display, expected);
}
