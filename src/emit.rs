pub mod args;
pub mod bindings;
pub mod enums;
pub mod mock;
pub mod stub;

use {std::io, thiserror::Error};

/// Shared license and banner every generated file starts with.
pub const LICENSE_AND_HEADER: &str = "\
// Copyright 2016 The Chromium Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.
//
// This file is auto-generated by glbindgen.
// It's formatted by clang-format using chromium coding style:
//    clang-format -i -style=chromium filename
// DO NOT EDIT!
";

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("could not write output")]
    Io(#[from] io::Error),
    #[error("{0} has no static binding and multiple versions")]
    MultiVersionStatic(String),
    #[error("no default return value for {return_type} returned by {function}")]
    NoDefaultValue {
        function: String,
        return_type: String,
    },
}

/// Options forwarded from the command line into the source emitter.
#[derive(Copy, Clone, Default)]
pub struct EmitOptions {
    pub generate_dchecks: bool,
    pub validate_bindings: bool,
}

pub fn upper(set: &str) -> String {
    set.to_uppercase()
}

/// `gl` becomes `Gl`, `egl` becomes `Egl`.
pub fn capitalized(set: &str) -> String {
    let mut chars = set.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
