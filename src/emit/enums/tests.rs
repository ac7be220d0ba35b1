use {
    crate::emit::enums::{EnumError, table},
    std::{fs, path::PathBuf, sync::atomic::{AtomicU32, Ordering}},
};

static COUNTER: AtomicU32 = AtomicU32::new(0);

fn write_header(content: &str) -> String {
    let dir = std::env::temp_dir().join(format!(
        "glbindgen-enums-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("header.h");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn render(headers: &[String]) -> Result<String, EnumError> {
    let mut out = Vec::new();
    table(&mut out, headers)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn entries_are_sorted_numerically() {
    let header = write_header(
        "#define GL_ONE_THING 0x88B9\n\
         #define GL_SMALL_THING 0x0010\n\
         #define GL_OTHER_THING 0x8000\n",
    );
    let text = render(&[header]).unwrap();
    let small = text.find("{ 0x0010, \"GL_SMALL_THING\", },").unwrap();
    let other = text.find("{ 0x8000, \"GL_OTHER_THING\", },").unwrap();
    let one = text.find("{ 0x88B9, \"GL_ONE_THING\", },").unwrap();
    assert!(small < other && other < one);
    assert!(text.contains("static const GLEnums::EnumToString enum_to_string_table[] = {"));
    assert!(text.contains("const size_t GLEnums::enum_to_string_table_len_ ="));
}

#[test]
fn only_short_hex_constants_are_kept() {
    let header = write_header(
        "#define GL_DECIMAL 123\n\
         #define GL_TOO_LONG 0x112233445566\n\
         #define GL_KEPT 0x0042\n\
         #define GL_NO_VALUE\n",
    );
    let text = render(&[header]).unwrap();
    assert!(text.contains("GL_KEPT"));
    assert!(!text.contains("GL_DECIMAL"));
    assert!(!text.contains("GL_TOO_LONG"));
}

#[test]
fn redefinition_with_the_same_name_is_silently_accepted() {
    let first = write_header("#define GL_TEXTURE_2D 0x0DE1\n");
    let second = write_header("#define GL_TEXTURE_2D 0x0DE1\n");
    let text = render(&[first, second]).unwrap();
    assert_eq!(text.matches("GL_TEXTURE_2D").count(), 1);
}

#[test]
fn chromium_alias_with_different_prefix_is_accepted() {
    let header = write_header(
        "#define GL_FOO 0x1234\n\
         #define GL_FOO_CHROMIUM 0x1234\n",
    );
    let text = render(&[header]).unwrap();
    // The first-seen name wins.
    assert!(text.contains("{ 0x1234, \"GL_FOO\", },"));
    assert!(!text.contains("GL_FOO_CHROMIUM"));
}

#[test]
fn collisions_sharing_a_prefix_are_fatal() {
    let header = write_header(
        "#define GL_A_B 0x1234\n\
         #define GL_A_C 0x1234\n",
    );
    match render(&[header]).unwrap_err() {
        EnumError::Collision { existing, name, value } => {
            assert_eq!(existing, "GL_A_B");
            assert_eq!(name, "GL_A_C");
            assert_eq!(value, "0x1234");
        }
        e => panic!("unexpected error {e:?}"),
    }
}

#[test]
fn chromium_collisions_sharing_a_prefix_are_fatal() {
    let header = write_header(
        "#define GL_THING_NV 0x9000\n\
         #define GL_THING_CHROMIUM 0x9000\n",
    );
    assert!(matches!(render(&[header]), Err(EnumError::Collision { .. })));
}

#[test]
fn numerically_equal_spellings_count_as_one_value() {
    let header = write_header(
        "#define GL_PADDED 0x0001\n\
         #define GL_PLAIN 0x1\n",
    );
    assert!(matches!(render(&[header]), Err(EnumError::Collision { .. })));
}

#[test]
fn scans_the_shipped_headers() {
    let roots: Vec<PathBuf> = crate::registry::HEADER_PATHS.iter().map(PathBuf::from).collect();
    let headers: Vec<String> = crate::registry::ENUM_HEADERS
        .iter()
        .map(|h| crate::headers::resolve(h, &roots).unwrap())
        .collect();
    let text = render(&headers).unwrap();
    assert!(text.contains("{ 0x0DE1, \"GL_TEXTURE_2D\", },"));
    // The Chromium alias of an existing Khronos constant is dropped.
    assert!(text.contains("\"GL_COMPRESSED_TEXTURE_FORMATS\""));
    assert!(!text.contains("GL_COMPRESSED_TEXTURE_FORMATS_CHROMIUM"));
}
