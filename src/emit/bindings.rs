#[cfg(test)]
mod tests;

use {
    crate::{
        emit::{EmitError, EmitOptions, LICENSE_AND_HEADER, args, upper},
        registry::{Function, GlVersion, Version},
    },
    std::{collections::BTreeSet, io::Write},
};

/// Writes `gl_bindings_autogen_<set>.h`: function-pointer typedefs, the
/// extension-flag structs, the Procs struct, the abstract Api class, and the
/// current-context dispatch macros.
pub fn header<W: Write>(
    w: &mut W,
    functions: &[Function],
    set: &str,
    used_extensions: &BTreeSet<String>,
    used_client_extensions: &BTreeSet<String>,
) -> Result<(), EmitError> {
    let set_upper = upper(set);
    write!(
        w,
        "{}
#ifndef UI_GL_GL_BINDINGS_AUTOGEN_{set_upper}_H_
#define UI_GL_GL_BINDINGS_AUTOGEN_{set_upper}_H_

#include <string>

namespace gl {{

class GLContext;

",
        LICENSE_AND_HEADER
    )?;

    for func in functions {
        writeln!(
            w,
            "typedef {} (GL_BINDING_CALL *{}Proc)({});",
            func.return_type, func.known_as, func.arguments
        )?;
    }

    writeln!(w)?;
    if set == "egl" {
        writeln!(w, "struct GL_EXPORT ClientExtensionsEGL {{")?;
        for extension in used_client_extensions {
            writeln!(w, "  bool b_{};", extension)?;
        }
        write!(
            w,
            "
  void InitializeClientExtensionSettings();

 private:
  static std::string GetClientExtensions();
}};

struct GL_EXPORT DisplayExtensionsEGL {{
"
        )?;
    } else {
        assert!(used_client_extensions.is_empty());
        writeln!(w, "struct Extensions{} {{", set_upper)?;
    }
    for extension in used_extensions {
        writeln!(w, "  bool b_{};", extension)?;
    }
    if set == "egl" {
        write!(
            w,
            "
  void InitializeExtensionSettings(EGLDisplay display);
  void UpdateConditionalExtensionSettings(EGLDisplay display);

  static std::string GetPlatformExtensions(EGLDisplay display);
"
        )?;
    }
    writeln!(w, "}};")?;
    writeln!(w)?;

    writeln!(w, "struct Procs{} {{", set_upper)?;
    for func in functions {
        writeln!(w, "  {}Proc {}Fn;", func.known_as, func.known_as)?;
    }
    writeln!(w, "}};")?;
    writeln!(w)?;

    write!(
        w,
        "class GL_EXPORT {set_upper}Api {{
 public:
  {set_upper}Api();
  virtual ~{set_upper}Api();

  virtual void SetDisabledExtensions(
      const std::string& disabled_extensions) {{}}

"
    )?;
    for func in functions {
        writeln!(
            w,
            "  virtual {} {}Fn({}) = 0;",
            func.return_type, func.known_as, func.arguments
        )?;
    }
    writeln!(w, "}};")?;
    writeln!(w)?;
    writeln!(w, "}}  // namespace gl")?;
    writeln!(w)?;

    // Always dispatch through the current context, under the GL name.
    for func in functions {
        writeln!(
            w,
            "#define {} ::gl::g_current_{}_context->{}Fn",
            func.known_as, set, func.known_as
        )?;
    }

    writeln!(w)?;
    writeln!(w, "#endif  // UI_GL_GL_BINDINGS_AUTOGEN_{}_H_", set_upper)?;
    Ok(())
}

/// Writes `gl_bindings_api_autogen_<set>.h`, the override declarations meant
/// to be included inside a concrete Api class body.
pub fn api_header<W: Write>(w: &mut W, functions: &[Function], _set: &str) -> Result<(), EmitError> {
    write!(
        w,
        "{}
// Silence presubmit and Tricium warnings about include guards
// no-include-guard-because-multiply-included
// NOLINT(build/header_guard)

",
        LICENSE_AND_HEADER
    )?;
    for func in functions {
        writeln!(
            w,
            "  {} {}Fn({}) override;",
            func.return_type, func.known_as, func.arguments
        )?;
    }
    writeln!(w)?;
    Ok(())
}

fn gl_version_condition(version: GlVersion) -> String {
    if version.bind_always() {
        if version.is_es {
            "ver->is_es".to_string()
        } else {
            "!ver->is_es".to_string()
        }
    } else if version.is_es {
        format!("ver->IsAtLeastGLES({}u, {}u)", version.major, version.minor)
    } else {
        format!("ver->IsAtLeastGL({}u, {}u)", version.major, version.minor)
    }
}

fn binding_condition(version: &Version) -> String {
    let mut conditions: Vec<String> = version
        .gl_versions
        .iter()
        .map(|v| gl_version_condition(*v))
        .collect();
    conditions.sort();
    conditions.extend(version.extensions.iter().map(|e| format!("ext.b_{}", e)));
    conditions.join(" || ")
}

fn write_func_binding<W: Write>(
    w: &mut W,
    indent: &str,
    known_as: &str,
    version_name: &str,
) -> Result<(), EmitError> {
    writeln!(
        w,
        "{indent}fn.{known_as}Fn = reinterpret_cast<{known_as}Proc>(GetGLProcAddress(\"{version_name}\"));"
    )?;
    Ok(())
}

fn write_conditional_binding<W: Write>(
    w: &mut W,
    func: &Function,
    options: &EmitOptions,
) -> Result<(), EmitError> {
    assert!(!func.versions.is_empty());
    for (i, version) in func.versions.iter().enumerate() {
        let condition = binding_condition(version);
        if i == 0 {
            writeln!(w, "  if ({}) {{", condition)?;
        } else {
            writeln!(w, "  }} else if ({}) {{", condition)?;
        }
        write_func_binding(w, "    ", func.known_as, version.name)?;
        if options.validate_bindings && !func.is_optional {
            writeln!(w, "    DCHECK(fn.{}Fn);", func.known_as)?;
        }
    }
    writeln!(w, "  }}")?;
    Ok(())
}

fn write_extension_settings<W: Write>(
    w: &mut W,
    extensions: &BTreeSet<String>,
    qualifier: &str,
) -> Result<(), EmitError> {
    for extension in extensions {
        writeln!(
            w,
            "  {qualifier}b_{extension} = gfx::HasExtension(extensions, \"{extension}\");"
        )?;
    }
    Ok(())
}

/// Writes `gl_bindings_autogen_<set>.cc`: static and dynamic initializers,
/// the dispatch, trace, and logging layers, and for the GL set the
/// no-context shims.
pub fn source<W: Write>(
    w: &mut W,
    functions: &[Function],
    set: &str,
    used_extensions: &BTreeSet<String>,
    used_client_extensions: &BTreeSet<String>,
    options: &EmitOptions,
) -> Result<(), EmitError> {
    let set_upper = upper(set);
    let all_static = set == "egl";

    let mut includes = vec![
        "base/trace_event/trace_event.h".to_string(),
        "ui/gl/gl_enums.h".to_string(),
        "ui/gl/gl_bindings.h".to_string(),
        "ui/gl/gl_context.h".to_string(),
        "ui/gl/gl_implementation.h".to_string(),
        "ui/gl/gl_version_info.h".to_string(),
        format!("ui/gl/gl_{}_api_implementation.h", set),
    ];
    includes.sort();

    write!(w, "{}\n#include <string>\n\n", LICENSE_AND_HEADER)?;
    for include in &includes {
        writeln!(w, "#include \"{}\"", include)?;
    }
    write!(w, "\nnamespace gl {{\n\n")?;

    if set != "gl" {
        write!(
            w,
            "Driver{} g_driver_{};  // Exists in .bss\n\n",
            set_upper, set
        )?;
    }

    // Bind what can be bound without a context; everything else points at
    // whatever GetGLProcAddress resolves once the dynamic pass has run.
    write!(
        w,
        "void Driver{set_upper}::InitializeStaticBindings() {{
  // Ensure struct has been zero-initialized.
  char* this_bytes = reinterpret_cast<char*>(this);
  DCHECK(this_bytes[0] == 0);
  DCHECK(memcmp(this_bytes, this_bytes + 1, sizeof(*this) - 1) == 0);

"
    )?;
    for func in functions {
        if let Some(static_binding) = func.static_binding {
            write_func_binding(w, "  ", func.known_as, static_binding)?;
        } else if all_static {
            if func.versions.len() != 1 {
                return Err(EmitError::MultiVersionStatic(func.known_as.to_string()));
            }
            write_func_binding(w, "  ", func.known_as, func.versions[0].name)?;
        }
    }
    write!(w, "}}\n\n")?;

    if set == "gl" {
        write!(
            w,
            "void DriverGL::InitializeDynamicBindings(const GLVersionInfo* ver,
                                         const gfx::ExtensionSet& extensions) {{
"
        )?;
    } else {
        write!(
            w,
            "void ClientExtensionsEGL::InitializeClientExtensionSettings() {{
  std::string client_extensions(GetClientExtensions());
  [[maybe_unused]] gfx::ExtensionSet extensions(
      gfx::MakeExtensionSet(client_extensions));

"
        )?;
    }

    write_extension_settings(
        w,
        used_client_extensions,
        if all_static { "" } else { "ext." },
    )?;
    if !all_static {
        for func in functions {
            if func.is_client() && func.static_binding.is_none() {
                writeln!(w)?;
                write_conditional_binding(w, func, options)?;
            }
        }
    }

    if set == "egl" {
        write!(
            w,
            "}}

void DisplayExtensionsEGL::InitializeExtensionSettings(EGLDisplay display) {{
  std::string platform_extensions(GetPlatformExtensions(display));
  [[maybe_unused]] gfx::ExtensionSet extensions(
      gfx::MakeExtensionSet(platform_extensions));

"
        )?;
    }

    write_extension_settings(w, used_extensions, if all_static { "" } else { "ext." })?;
    if !all_static {
        for func in functions {
            if !func.is_client() && func.static_binding.is_none() {
                writeln!(w)?;
                write_conditional_binding(w, func, options)?;
            }
        }
    }
    writeln!(w, "}}")?;

    write!(
        w,
        "
void Driver{set_upper}::ClearBindings() {{
  memset(this, 0, sizeof(*this));
}}
"
    )?;

    // Dispatch layer forwarding into the driver's Procs struct.
    for func in functions {
        let arg_names = args::names(func.arguments);
        write!(
            w,
            "
{} {}ApiBase::{}Fn({}) {{
",
            func.return_type, set_upper, func.known_as, func.arguments
        )?;
        let ret = if func.return_type == "void" { "" } else { "return " };
        writeln!(w, "  {}driver_->fn.{}Fn({});", ret, func.known_as, arg_names)?;
        writeln!(w, "}}")?;
    }

    for func in functions {
        let arg_names = args::names(func.arguments);
        write!(
            w,
            "
{} Trace{}Api::{}Fn({}) {{
",
            func.return_type, set_upper, func.known_as, func.arguments
        )?;
        writeln!(
            w,
            "  TRACE_EVENT_BINARY_EFFICIENT0(\"gpu\", \"Trace{}API::{}\");",
            set_upper, func.known_as
        )?;
        let ret = if func.return_type == "void" { "" } else { "return " };
        writeln!(w, "  {}{}_api_->{}Fn({});", ret, set, func.known_as, arg_names)?;
        writeln!(w, "}}")?;
    }

    for func in functions {
        write_logging_wrapper(w, func, set, options)?;
    }

    if set_upper == "GL" {
        write!(
            w,
            "
namespace {{
void NoContextHelper(const char* method_name) {{
  NOTREACHED() << \"Trying to call \" << method_name
               << \" without current GL context\";
  LOG(ERROR) << \"Trying to call \" << method_name
             << \" without current GL context\";
}}
}}  // namespace
"
        )?;
        for func in functions {
            write_no_context_shim(w, func)?;
        }
    }

    write!(w, "\n}}  // namespace gl\n")?;
    Ok(())
}

fn write_logging_wrapper<W: Write>(
    w: &mut W,
    func: &Function,
    set: &str,
    options: &EmitOptions,
) -> Result<(), EmitError> {
    let arg_names = args::names(func.arguments);
    let log_tail = args::log_tail(func.arguments);
    write!(
        w,
        "
{} Log{}Api::{}Fn({}) {{
",
        func.return_type,
        upper(set),
        func.known_as,
        func.arguments
    )?;
    writeln!(
        w,
        "  GL_SERVICE_LOG(\"{}\" << \"(\"{} << \")\");",
        func.known_as, log_tail
    )?;
    if func.return_type == "void" {
        writeln!(w, "  {}_api_->{}Fn({});", set, func.known_as, arg_names)?;
        if let Some(code) = func.logging_code {
            writeln!(w, "{}", code)?;
        }
        if options.generate_dchecks && set == "gl" {
            write!(
                w,
                "  {{
    GLenum error = {set}_api_->glGetErrorFn();
    DCHECK(error == 0) << \"OpenGL error 0x\" << std::hex << error << std::dec;
  }}
"
            )?;
        }
    } else {
        writeln!(
            w,
            "  {} result = {}_api_->{}Fn({});",
            func.return_type, set, func.known_as, arg_names
        )?;
        if let Some(code) = func.logging_code {
            writeln!(w, "{}", code)?;
        } else {
            writeln!(w, "  GL_SERVICE_LOG(\"GL_RESULT: \" << result);")?;
        }
        if options.generate_dchecks && set == "gl" {
            write!(
                w,
                "  {{
    GLenum _error = {set}_api_->glGetErrorFn();
    DCHECK(_error == 0) << \"OpenGL error \" << std::hex << _error << std::dec;
  }}
"
            )?;
        }
        writeln!(w, "  return result;")?;
    }
    writeln!(w, "}}")?;
    Ok(())
}

fn write_no_context_shim<W: Write>(w: &mut W, func: &Function) -> Result<(), EmitError> {
    write!(
        w,
        "
{} NoContextGLApi::{}Fn({}) {{
",
        func.return_type, func.known_as, func.arguments
    )?;
    writeln!(w, "  NoContextHelper(\"{}\");", func.known_as)?;
    if func.return_type.ends_with('*') {
        writeln!(w, "  return NULL;")?;
    } else if func.return_type != "void" {
        let default_value = match func.return_type {
            "GLenum" => "static_cast<GLenum>(0)",
            "GLuint" => "0U",
            "GLint" => "0",
            "GLboolean" => "GL_FALSE",
            "GLbyte" => "0",
            "GLubyte" => "0",
            "GLbitfield" => "0",
            "GLushort" => "0",
            "GLsizei" => "0",
            "GLfloat" => "0.0f",
            "GLdouble" => "0.0",
            "GLsync" => "nullptr",
            "GLDEBUGPROC" => "NULL",
            _ => {
                return Err(EmitError::NoDefaultValue {
                    function: func.known_as.to_string(),
                    return_type: func.return_type.to_string(),
                });
            }
        };
        writeln!(w, "  return {};", default_value)?;
    }
    writeln!(w, "}}")?;
    Ok(())
}
