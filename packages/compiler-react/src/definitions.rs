use crate::context::{CompileOptions, CompilerContext};
use mercury_common::{CompilerConfig, ManifestEntry};

/// Name of the shared props interface every icon extends
pub const BASE_PROPS: &str = "IconProps";

/// Compile the aggregate export module (`index.js`).
///
/// One re-export per (entry, size), in manifest order.
pub fn compile_index(manifest: &[ManifestEntry], config: &CompilerConfig) -> String {
    let mut ctx = CompilerContext::new(CompileOptions::from(config));

    for entry in manifest {
        for (size, identifier) in entry.components() {
            ctx.add_line(&format!(
                "export {{ {} }} from '{}';",
                identifier,
                config.module_specifier(&entry.name, size)
            ));
        }
    }

    ctx.into_output()
}

/// Compile the TypeScript definition file (`index.d.ts`) for a manifest
pub fn compile_definitions(manifest: &[ManifestEntry], config: &CompilerConfig) -> String {
    let mut ctx = CompilerContext::new(CompileOptions::from(config));

    ctx.add_line("import React from 'react';");
    ctx.blank();

    ctx.add_line(&format!("export interface {} {{", BASE_PROPS));
    ctx.indent();
    ctx.add_line("color?: string;");
    ctx.add_line("className?: string;");
    ctx.add_line("style?: React.CSSProperties;");
    ctx.dedent();
    ctx.add_line("}");

    if manifest.iter().all(|entry| entry.sizes.is_empty()) {
        return ctx.into_output();
    }

    ctx.blank();
    for entry in manifest {
        for (_, identifier) in entry.components() {
            ctx.add_line(&format!(
                "export interface {}Props extends {} {{}}",
                identifier, BASE_PROPS
            ));
        }
    }

    ctx.blank();
    for entry in manifest {
        for (_, identifier) in entry.components() {
            ctx.add_line(&format!(
                "export declare const {}: React.FC<{}Props>;",
                identifier, identifier
            ));
        }
    }

    ctx.into_output()
}
