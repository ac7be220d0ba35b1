
mod classify;
mod cli;
mod emit;
mod format;
mod headers;
mod logger;
mod registry;

use {
    crate::{
        cli::Cli,
        emit::EmitOptions,
        headers::ParsedHeaders,
        registry::{ENUM_HEADERS, Function, HEADER_PATHS},
    },
    ahash::AHashSet,
    anyhow::Context,
    clap::Parser,
    std::{
        fs::File,
        io::{BufWriter, Write},
        path::{Path, PathBuf},
    },
};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::install(cli.log_level.into());
    run(&cli)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let roots: Vec<PathBuf> = HEADER_PATHS.iter().map(PathBuf::from).collect();
    let sets = registry::function_sets();

    if cli.inputs {
        let mut seen = AHashSet::new();
        for set in &sets {
            for header in set.headers {
                let path = headers::resolve(header, &roots)?;
                if seen.insert(path.clone()) {
                    println!("{}", path);
                }
            }
        }
        for header in ENUM_HEADERS {
            let path = headers::resolve(header, &roots)?;
            if seen.insert(path.clone()) {
                println!("{}", path);
            }
        }
        return Ok(());
    }

    let out_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    let options = EmitOptions {
        generate_dchecks: cli.generate_dchecks,
        validate_bindings: cli.validate_bindings,
    };

    let mut classified: Vec<(&str, Vec<Function>)> = Vec::new();
    for set in &sets {
        let mut functions = registry::normalize((set.functions)())?;
        registry::check_order(&functions)
            .with_context(|| format!("in the {} function table", set.name))?;
        if cli.verify_order {
            continue;
        }

        let mut parsed = ParsedHeaders::default();
        for header in set.headers {
            let path = headers::resolve(header, &roots)?;
            headers::parse_header_file(&path, &mut parsed)?;
        }
        let mut used = classify::classify(&mut functions, &parsed, set.extra_extensions)
            .with_context(|| format!("while classifying the {} function table", set.name))?;
        if set.name == "egl" {
            used.display
                .extend(registry::egl::EXTENSIONS_EXTRA.iter().map(|e| e.to_string()));
            used.client.extend(
                registry::egl::CLIENT_EXTENSIONS_EXTRA
                    .iter()
                    .map(|e| e.to_string()),
            );
        }

        let num_static = functions
            .iter()
            .filter(|f| f.static_binding.is_some())
            .count();
        println!(
            "[{}] {} static bindings, {} dynamic bindings",
            set.name,
            num_static,
            functions.len() - num_static
        );

        write_file(
            &out_dir,
            &format!("gl_bindings_autogen_{}.h", set.name),
            |w| Ok(emit::bindings::header(w, &functions, set.name, &used.display, &used.client)?),
        )?;
        write_file(
            &out_dir,
            &format!("gl_bindings_api_autogen_{}.h", set.name),
            |w| Ok(emit::bindings::api_header(w, &functions, set.name)?),
        )?;
        write_file(
            &out_dir,
            &format!("gl_bindings_autogen_{}.cc", set.name),
            |w| {
                Ok(emit::bindings::source(
                    w,
                    &functions,
                    set.name,
                    &used.display,
                    &used.client,
                    &options,
                )?)
            },
        )?;
        classified.push((set.name, functions));
    }

    if cli.verify_order {
        return Ok(());
    }

    for (name, functions) in &classified {
        write_file(&out_dir, &format!("gl_mock_autogen_{}.h", name), |w| {
            Ok(emit::mock::header(w, functions, name)?)
        })?;
        write_file(
            &out_dir,
            &format!("{}_bindings_autogen_mock.h", name),
            |w| Ok(emit::mock::bindings_header(w, functions)?),
        )?;
        write_file(
            &out_dir,
            &format!("{}_bindings_autogen_mock.cc", name),
            |w| Ok(emit::mock::bindings_source(w, functions, name)?),
        )?;
    }

    let enum_headers = ENUM_HEADERS
        .iter()
        .map(|h| headers::resolve(h, &roots))
        .collect::<Result<Vec<_>, _>>()?;
    write_file(&out_dir, "gl_enums_implementation_autogen.h", |w| {
        Ok(emit::enums::table(w, &enum_headers)?)
    })?;

    for (name, functions) in &classified {
        if *name != "gl" {
            continue;
        }
        write_file(&out_dir, "gl_stub_autogen_gl.h", |w| {
            Ok(emit::stub::header(w, functions)?)
        })?;
        write_file(&out_dir, "gl_stub_autogen_gl.cc", |w| {
            Ok(emit::stub::source(w, functions)?)
        })?;
    }

    Ok(())
}

fn write_file(
    dir: &Path,
    name: &str,
    emit: impl FnOnce(&mut BufWriter<File>) -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    let path = dir.join(name);
    let file =
        File::create(&path).with_context(|| format!("could not create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    emit(&mut w).with_context(|| format!("while generating {}", path.display()))?;
    w.flush()?;
    format::clang_format(&path);
    Ok(())
}
