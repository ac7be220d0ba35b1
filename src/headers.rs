
use {
    crate::registry::GlVersion,
    ahash::{AHashMap, AHashSet},
    regex::Regex,
    std::{
        fs::File,
        io::{self, BufRead, BufReader},
        path::{Path, PathBuf},
        sync::LazyLock,
    },
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("header {0} not found")]
    NotFound(String),
    #[error("could not read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("nested GL version macro in {file} at line {line}")]
    NestedVersion { file: String, line: usize },
    #[error("malformed GL version macro in {file} at line {line}")]
    MalformedVersion { file: String, line: usize },
}

/// Returns the first `root/header` that exists on disk. The result is
/// absolute and uses forward slashes so it can be embedded in generated C++
/// string literals on any host.
pub fn resolve(header: &str, roots: &[PathBuf]) -> Result<String, HeaderError> {
    for root in roots {
        let candidate = root.join(header);
        if candidate.exists() {
            let absolute = if candidate.is_absolute() {
                candidate
            } else {
                match std::env::current_dir() {
                    Ok(cwd) => cwd.join(candidate),
                    Err(_) => candidate,
                }
            };
            return Ok(absolute.to_string_lossy().replace('\\', "/"));
        }
    }
    Err(HeaderError::NotFound(header.to_string()))
}

/// Functions discovered per extension and per GL revision. Any one function
/// name ends up in at most one of the two maps per header block.
#[derive(Default)]
pub struct ParsedHeaders {
    pub extensions: AHashMap<String, AHashSet<String>>,
    pub versions: AHashMap<GlVersion, AHashSet<String>>,
}

struct LineShapes {
    version_start: Regex,
    extension_start: Regex,
    function: Regex,
    typedef: Regex,
    macro_start: Regex,
    macro_end: Regex,
}

static SHAPES: LazyLock<LineShapes> = LazyLock::new(|| LineShapes {
    version_start: Regex::new(r"^#ifndef GL_(ES_|)VERSION((?:_[0-9])+)$").unwrap(),
    extension_start: Regex::new(r"^#ifndef ((?:GL|EGL)_[A-Z]+_[a-zA-Z]\w+)").unwrap(),
    function: Regex::new(r"^.+\s+([a-z]+\w+)\s*\(").unwrap(),
    typedef: Regex::new(r"^typedef ").unwrap(),
    macro_start: Regex::new(r"^#(if|ifdef|ifndef)").unwrap(),
    macro_end: Regex::new(r"^#endif").unwrap(),
});

pub fn parse_header_file(path: &str, out: &mut ParsedHeaders) -> Result<(), HeaderError> {
    let file = File::open(path).map_err(|source| HeaderError::Read {
        path: path.to_string(),
        source,
    })?;
    parse_functions(BufReader::new(file), path, out)
}

/// Walks a header line by line, attributing every function prototype to the
/// innermost enclosing `#ifndef GL_VERSION_M_N` or `#ifndef <VENDOR>_<name>`
/// block. `gl.h` is special: core functions that predate the version macros
/// are attributed to desktop GL 1.0, and extension blocks may appear inside
/// the implied version block.
pub fn parse_functions<R: BufRead>(
    reader: R,
    name: &str,
    out: &mut ParsedHeaders,
) -> Result<(), HeaderError> {
    let shapes = &*SHAPES;
    let is_legacy_gl_h = Path::new(name).file_name().and_then(|f| f.to_str()) == Some("gl.h");

    let mut macro_depth = 0i32;
    let mut version: Option<(GlVersion, i32)> = None;
    let mut extension: Option<(String, i32)> = None;
    if is_legacy_gl_h {
        version = Some((GlVersion::new(false, 1, 0), 0));
    }

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.map_err(|source| HeaderError::Read {
            path: name.to_string(),
            source,
        })?;
        let line = line.trim_end();

        let version_match = shapes.version_start.captures(line);
        if shapes.macro_start.is_match(line) {
            macro_depth += 1;
            if let Some(m) = &version_match {
                if version.is_some() {
                    return Err(HeaderError::NestedVersion {
                        file: name.to_string(),
                        line: line_num,
                    });
                }
                let is_es = !m[1].is_empty();
                let mut digits = m[2].split('_').skip(1);
                let (major, minor) = match (digits.next(), digits.next(), digits.next()) {
                    (Some(major), Some(minor), None) => {
                        (major.parse::<u32>().unwrap(), minor.parse::<u32>().unwrap())
                    }
                    _ => {
                        return Err(HeaderError::MalformedVersion {
                            file: name.to_string(),
                            line: line_num,
                        });
                    }
                };
                let minor = if !is_es && major == 1 { 0 } else { minor };
                version = Some((GlVersion::new(is_es, major, minor), macro_depth));
            }
        } else if shapes.macro_end.is_match(line) {
            macro_depth -= 1;
            if let Some((_, depth)) = &extension {
                if macro_depth < *depth {
                    extension = None;
                }
            }
            if let Some((_, depth)) = &version {
                if macro_depth < *depth {
                    version = None;
                }
            }
        }

        if version_match.is_none() {
            if let Some(m) = shapes.extension_start.captures(line) {
                if version.is_some() && !is_legacy_gl_h {
                    return Err(HeaderError::NestedVersion {
                        file: name.to_string(),
                        line: line_num,
                    });
                }
                extension = Some((m[1].to_string(), macro_depth));
            }
        }

        if let Some(m) = shapes.function.captures(line) {
            if !shapes.typedef.is_match(line) {
                let function = m[1].to_string();
                if let Some((ext, _)) = &extension {
                    out.extensions.entry(ext.clone()).or_default().insert(function);
                } else if let Some((ver, _)) = &version {
                    out.versions.entry(*ver).or_default().insert(function);
                }
            }
        }
    }
    Ok(())
}
