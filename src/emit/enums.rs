#[cfg(test)]
mod tests;

use {
    crate::emit::LICENSE_AND_HEADER,
    regex::Regex,
    std::{
        collections::BTreeMap,
        fs::File,
        io::{self, BufRead, BufReader, Write},
        sync::LazyLock,
    },
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum EnumError {
    #[error("could not read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("could not write output")]
    Write(#[from] io::Error),
    #[error("code collision: {existing} and {name} have the same code {value}")]
    Collision {
        existing: String,
        name: String,
        value: String,
    },
}

static ENUM_DEFINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#define\s+(GL_[a-zA-Z0-9_]+)\s+([0-9A-Fa-fx]+)").unwrap());

fn prefix(name: &str) -> &str {
    match name.rfind('_') {
        Some(i) => &name[..i],
        None => name,
    }
}

/// A collision is tolerated when one side is a Chromium-local alias: exactly
/// one of the names ends in `_CHROMIUM` and the two do not share an
/// underscore prefix. The first-seen name is kept. Every other collision is a
/// conflict between distinct symbols and fatal.
fn acceptable_collision(existing: &str, name: &str) -> bool {
    let chromium = |n: &str| n.ends_with("_CHROMIUM");
    chromium(existing) != chromium(name) && prefix(existing) != prefix(name)
}

struct EnumEntry {
    text: String,
    name: String,
}

fn scan_header(path: &str, table: &mut BTreeMap<u64, EnumEntry>) -> Result<(), EnumError> {
    let file = File::open(path).map_err(|source| EnumError::Read {
        path: path.to_string(),
        source,
    })?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|source| EnumError::Read {
            path: path.to_string(),
            source,
        })?;
        let Some(m) = ENUM_DEFINE.captures(&line) else {
            continue;
        };
        let name = &m[1];
        let text = &m[2];
        if text.len() > 10 || !text.starts_with("0x") {
            continue;
        }
        let Ok(value) = u64::from_str_radix(&text[2..], 16) else {
            continue;
        };
        match table.get(&value) {
            None => {
                table.insert(
                    value,
                    EnumEntry {
                        text: text.to_string(),
                        name: name.to_string(),
                    },
                );
            }
            Some(entry) if entry.name == name => {}
            Some(entry) if acceptable_collision(&entry.name, name) => {}
            Some(entry) => {
                return Err(EnumError::Collision {
                    existing: entry.name.clone(),
                    name: name.to_string(),
                    value: text.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Scans the configured Khronos headers for `#define GL_<NAME> <HEX>` lines
/// and writes `gl_enums_implementation_autogen.h`, a value-to-name table in
/// ascending numeric order.
pub fn table<W: Write>(w: &mut W, header_paths: &[String]) -> Result<(), EnumError> {
    let mut entries = BTreeMap::new();
    for path in header_paths {
        scan_header(path, &mut entries)?;
    }

    write!(
        w,
        "{}
#ifndef UI_GL_GL_ENUMS_IMPLEMENTATION_AUTOGEN_H_
#define UI_GL_GL_ENUMS_IMPLEMENTATION_AUTOGEN_H_

static const GLEnums::EnumToString enum_to_string_table[] = {{
",
        LICENSE_AND_HEADER
    )?;
    for entry in entries.values() {
        writeln!(w, "  {{ {}, \"{}\", }},", entry.text, entry.name)?;
    }
    write!(
        w,
        "}};

const GLEnums::EnumToString* const GLEnums::enum_to_string_table_ =
    enum_to_string_table;
const size_t GLEnums::enum_to_string_table_len_ =
    sizeof(enum_to_string_table) / sizeof(enum_to_string_table[0]);

#endif  //  UI_GL_GL_ENUMS_IMPLEMENTATION_AUTOGEN_H_
"
    )?;
    Ok(())
}
