use crate::emit::args::{log_expr, log_tail, names, split};

#[test]
fn void_and_empty_lists_have_no_params() {
    assert!(split("void").is_empty());
    assert!(split("").is_empty());
    assert_eq!(names("void"), "");
    assert_eq!(log_tail("void"), "");
}

#[test]
fn names_are_the_trailing_identifiers() {
    assert_eq!(
        names("GLenum target, GLsizeiptr size, const void* data, GLenum usage"),
        "target, size, data, usage"
    );
    assert_eq!(names("const struct AHardwareBuffer* ahardwarebuffer"), "ahardwarebuffer");
    assert_eq!(names("const GLfloat** coeffs"), "coeffs");
    assert_eq!(names(" GLenum mode "), "mode");
}

#[test]
fn pointer_arguments_log_as_const_void() {
    let params = split("GLenum target, const void* data");
    assert_eq!(log_expr(&params[1]), "static_cast<const void*>(data)");
}

#[test]
fn c_strings_log_verbatim() {
    let params = split("GLuint program, GLuint colorNumber, const char* name");
    assert_eq!(log_expr(&params[2]), "name");
}

#[test]
fn double_pointers_log_by_value() {
    let params = split("GLuint index, GLenum pname, void** pointer");
    assert_eq!(log_expr(&params[2]), "pointer");
    let params = split("GLuint shader, GLsizei count, const char* const* str, const GLint* length");
    assert_eq!(log_expr(&params[2]), "static_cast<const void*>(str)");
}

#[test]
fn enums_and_booleans_log_through_the_string_tables() {
    let params = split("GLenum cap, GLboolean flag, EGLenum api, EGLBoolean b");
    assert_eq!(log_expr(&params[0]), "GLEnums::GetStringEnum(cap)");
    assert_eq!(log_expr(&params[1]), "GLEnums::GetStringBool(flag)");
    assert_eq!(log_expr(&params[2]), "api");
    assert_eq!(log_expr(&params[3]), "b");
}

#[test]
fn callback_types_log_as_raw_pointers() {
    let params = split("GLDEBUGPROC callback, const void* userParam");
    assert_eq!(log_expr(&params[0]), "reinterpret_cast<void*>(callback)");
    let params = split("EGLDEBUGPROCKHR callback, const EGLAttrib* attrib_list");
    assert_eq!(log_expr(&params[0]), "reinterpret_cast<void*>(callback)");
    let params = split("EGLDisplay dpy, EGLSetBlobFuncANDROID set, EGLGetBlobFuncANDROID get");
    assert_eq!(log_expr(&params[1]), "reinterpret_cast<const void*>(set)");
    assert_eq!(log_expr(&params[2]), "reinterpret_cast<const void*>(get)");
}

#[test]
fn log_tail_joins_with_separators() {
    assert_eq!(
        log_tail("GLenum target, GLuint id"),
        " << GLEnums::GetStringEnum(target) << \", \" << id"
    );
    assert_eq!(log_tail("GLenum cap"), " << GLEnums::GetStringEnum(cap)");
}
