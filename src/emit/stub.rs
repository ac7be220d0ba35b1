use {
    crate::{
        emit::{EmitError, LICENSE_AND_HEADER},
        registry::Function,
    },
    std::io::Write,
};

fn stub_arguments(arguments: &str) -> &str {
    if arguments == "void" { "" } else { arguments }
}

/// Writes `gl_stub_autogen_gl.h`. Void-returning overrides are inlined with
/// an empty body; the rest are declared and defined in the source file.
pub fn header<W: Write>(w: &mut W, functions: &[Function]) -> Result<(), EmitError> {
    write!(
        w,
        "{}
#ifndef UI_GL_GL_STUB_AUTOGEN_GL_H_
#define UI_GL_GL_STUB_AUTOGEN_GL_H_

",
        LICENSE_AND_HEADER
    )?;
    for func in functions {
        write!(
            w,
            "  {} gl{}Fn({}) override",
            func.return_type,
            &func.known_as[2..],
            stub_arguments(func.arguments)
        )?;
        if func.return_type == "void" {
            writeln!(w, " {{}}")?;
        } else {
            writeln!(w, ";")?;
        }
    }
    write!(w, "\n#endif  //  UI_GL_GL_STUB_AUTOGEN_GL_H_\n")?;
    Ok(())
}

/// Writes `gl_stub_autogen_gl.cc`, the non-void stub definitions returning 0.
pub fn source<W: Write>(w: &mut W, functions: &[Function]) -> Result<(), EmitError> {
    write!(
        w,
        "{}
#include \"ui/gl/gl_stub_api_base.h\"

namespace gl {{

",
        LICENSE_AND_HEADER
    )?;
    for func in functions {
        if func.return_type == "void" {
            continue;
        }
        write!(
            w,
            "{} GLStubApiBase::gl{}Fn({}) {{
  return 0;
}}

",
            func.return_type,
            &func.known_as[2..],
            stub_arguments(func.arguments)
        )?;
    }
    write!(w, "\n}}  // namespace gl\n")?;
    Ok(())
}
