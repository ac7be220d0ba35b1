
use {
    crate::{
        emit::{EmitError, LICENSE_AND_HEADER, args, capitalized, upper},
        registry::Function,
    },
    std::{collections::BTreeMap, io::Write},
};

/// gmock supports at most this many arguments per MOCK_METHODn.
const MAX_MOCKED_ARGS: usize = 10;

const MULTIPLY_INCLUDED: &str = "
// Silence presubmit and Tricium warnings about include guards
// no-include-guard-because-multiply-included
// NOLINT(build/header_guard)

";

/// One entry per unique C symbol across all version entries.
struct UniqueFunction<'a> {
    name: &'a str,
    return_type: &'a str,
    arguments: &'a str,
    known_as: &'a str,
}

fn uniquely_named_functions(functions: &[Function]) -> BTreeMap<&str, UniqueFunction<'_>> {
    let mut unique = BTreeMap::new();
    for func in functions {
        for version in &func.versions {
            unique.insert(
                version.name,
                UniqueFunction {
                    name: version.name,
                    return_type: func.return_type,
                    arguments: func.arguments,
                    known_as: func.known_as,
                },
            );
        }
    }
    unique
}

fn mock_arguments(arguments: &str) -> &str {
    if arguments == "void" { "" } else { arguments }
}

/// Writes `gl_mock_autogen_<set>.h`, the MOCK_METHODn declarations included
/// into the mock interface class.
pub fn header<W: Write>(w: &mut W, functions: &[Function], set: &str) -> Result<(), EmitError> {
    write!(w, "{}{}", LICENSE_AND_HEADER, MULTIPLY_INCLUDED)?;
    for func in functions {
        let arguments = mock_arguments(func.arguments);
        let arg_count = if arguments.is_empty() {
            0
        } else {
            arguments.matches(',').count() + 1
        };
        if arg_count <= MAX_MOCKED_ARGS {
            writeln!(
                w,
                "  MOCK_METHOD{}({}, {}({}));",
                arg_count,
                &func.known_as[set.len()..],
                func.return_type,
                arguments
            )?;
        } else {
            writeln!(
                w,
                "  // {} cannot be mocked because it has {} args.",
                func.known_as, arg_count
            )?;
        }
    }
    writeln!(w)?;
    Ok(())
}

/// Writes `<set>_bindings_autogen_mock.h`, static member declarations for
/// every unique symbol.
pub fn bindings_header<W: Write>(w: &mut W, functions: &[Function]) -> Result<(), EmitError> {
    write!(w, "{}{}", LICENSE_AND_HEADER, MULTIPLY_INCLUDED)?;
    for func in uniquely_named_functions(functions).values() {
        writeln!(
            w,
            "static {} GL_BINDING_CALL Mock_{}({});",
            func.return_type, func.name, func.arguments
        )?;
    }
    Ok(())
}

/// Writes `<set>_bindings_autogen_mock.cc`: trampolines into the mock
/// interface instance plus a GetGLProcAddress doing a strcmp chain over all
/// unique names.
pub fn bindings_source<W: Write>(
    w: &mut W,
    functions: &[Function],
    set: &str,
) -> Result<(), EmitError> {
    let set_upper = upper(set);
    let set_capitalized = capitalized(set);
    write!(
        w,
        "{}
#include <string.h>

#include \"base/notreached.h\"
#include \"ui/gl/{set}_mock.h\"

namespace {{
// This is called mainly to prevent the compiler combining the code of mock
// functions with identical contents, so that their function pointers will be
// different.
void Make{set_capitalized}MockFunctionUnique(const char* func_name) {{
  VLOG(2) << \"Calling mock \" << func_name;
}}
}}  // namespace

namespace gl {{
",
        LICENSE_AND_HEADER
    )?;

    let unique = uniquely_named_functions(functions);
    for func in unique.values() {
        write!(
            w,
            "
{} GL_BINDING_CALL Mock{}Interface::Mock_{}({}) {{
",
            func.return_type, set_upper, func.name, func.arguments
        )?;
        writeln!(
            w,
            "  Make{}MockFunctionUnique(\"{}\");",
            set_capitalized, func.name
        )?;
        let ret = if func.return_type == "void" { "" } else { "return " };
        writeln!(
            w,
            "  {}interface_->{}({});",
            ret,
            &func.known_as[set.len()..],
            args::names(func.arguments)
        )?;
        writeln!(w, "}}")?;
    }

    // Catches calls through uninitialized pointers and code interpreting the
    // result of GetGLProcAddress; some EGL implementations never return NULL.
    write!(
        w,
        "
static void Mock{set_capitalized}InvalidFunction() {{
  NOTREACHED();
}}

GLFunctionPointerType GL_BINDING_CALL Mock{set_upper}Interface::GetGLProcAddress(const char* name) {{
"
    )?;
    for func in unique.values() {
        writeln!(w, "  if (strcmp(name, \"{}\") == 0)", func.name)?;
        writeln!(
            w,
            "    return reinterpret_cast<GLFunctionPointerType>(Mock_{});",
            func.name
        )?;
    }
    writeln!(
        w,
        "  return reinterpret_cast<GLFunctionPointerType>(&Mock{}InvalidFunction);",
        set_capitalized
    )?;
    writeln!(w, "}}")?;
    write!(w, "\n}}  // namespace gl\n")?;
    Ok(())
}
