#[cfg(test)]
mod tests;

/// One `type name` pair from a C parameter list.
pub struct Param {
    pub ty: String,
    pub name: String,
}

/// Splits the text between the parentheses of a prototype into typed
/// parameters. `void` and empty lists yield no parameters. Only the narrow
/// parameter syntax the function table actually uses is understood.
pub fn split(arguments: &str) -> Vec<Param> {
    let trimmed = arguments.trim();
    if trimmed.is_empty() || trimmed == "void" {
        return vec![];
    }
    trimmed
        .split(',')
        .map(|param| {
            let param = param.trim();
            let bytes = param.as_bytes();
            let mut start = param.len();
            while start > 0
                && (bytes[start - 1].is_ascii_alphanumeric() || bytes[start - 1] == b'_')
            {
                start -= 1;
            }
            Param {
                ty: param[..start].trim_end().to_string(),
                name: param[start..].to_string(),
            }
        })
        .collect()
}

/// The comma-separated argument names for forwarding a call.
pub fn names(arguments: &str) -> String {
    split(arguments)
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// How a single argument is rendered into the log stream.
pub fn log_expr(param: &Param) -> String {
    let ty = param.ty.as_str();
    if ty == "const char*" {
        return param.name.clone();
    }
    if ty.ends_with('*') && !ty.ends_with("**") {
        return format!("static_cast<const void*>({})", param.name);
    }
    let base = ty.strip_prefix("const ").unwrap_or(ty);
    match base {
        "EGLSetBlobFuncANDROID" | "EGLGetBlobFuncANDROID" => {
            format!("reinterpret_cast<const void*>({})", param.name)
        }
        "GLDEBUGPROC" | "EGLDEBUGPROCKHR" => {
            format!("reinterpret_cast<void*>({})", param.name)
        }
        "GLboolean" => format!("GLEnums::GetStringBool({})", param.name),
        "GLenum" => format!("GLEnums::GetStringEnum({})", param.name),
        _ => param.name.clone(),
    }
}

/// The ` << a << ", " << b` tail of a `GL_SERVICE_LOG` line, empty for
/// nullary functions.
pub fn log_tail(arguments: &str) -> String {
    let params = split(arguments);
    if params.is_empty() {
        return String::new();
    }
    let rendered: Vec<_> = params.iter().map(log_expr).collect();
    format!(" << {}", rendered.join(" << \", \" << "))
}
