use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 5] =
    ["mod.rs", "event.rs", "model.rs", "reducer.rs", "state.rs"];

const PURE_WIDGET_FILES: [&str; 2] = ["model.rs", "state.rs"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    declared_modules.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: widget '{}' must be declared as pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let mut fs_modules = BTreeSet::new();
    let entries = fs::read_dir(&widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        if path.is_dir() {
            let name = path
                .file_name()
                .unwrap_or_else(|| {
                    panic!("missing dir name for {}", path.display())
                })
                .to_string_lossy()
                .to_string();
            fs_modules.insert(name);
        } else if path.file_name().is_some_and(|name| name != "mod.rs") {
            violations.push(format!(
                "{}: widgets must live in their own directory",
                path.display()
            ));
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared widgets {:?} do not match directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, violations: &mut Vec<String>) {
    for required in REQUIRED_WIDGET_FILES {
        let path = dir.join(required);
        if !path.is_file() {
            violations.push(format!("{}: missing widget file", path.display()));
            continue;
        }
        let source = read(&path);
        reject_globs(&path, &parse(&path), violations);
        if source.contains("crate::app::") {
            violations.push(format!(
                "{}: direct coupling to crate::app is forbidden",
                path.display()
            ));
        }
    }

    for pure in PURE_WIDGET_FILES {
        let path = dir.join(pure);
        if path.is_file() {
            validate_pure_file(&path, violations);
        }
    }

    let view_dir = dir.join("view");
    if !view_dir.is_dir() {
        violations.push(format!("{}: missing view module", view_dir.display()));
        return;
    }
    let entries = fs::read_dir(&view_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", view_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let is_rust = path.extension().is_some_and(|ext| ext == "rs");
        let is_mod = path.file_name().is_some_and(|name| name == "mod.rs");
        if is_rust && !is_mod {
            validate_view_file(&path, violations);
        }
    }
}

fn validate_pure_file(file_path: &Path, violations: &mut Vec<String>) {
    let source = read(file_path);

    for forbidden in [
        "log::",
        "std::fs::",
        "std::process::Command",
        "tokio::",
        "Task::",
        "iced::Task",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["Instant::now", "SystemTime::now", ".elapsed("] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
}

fn validate_view_file(file_path: &Path, violations: &mut Vec<String>) {
    let file = parse(file_path);
    let expected_prefix = file_stem_pascal_case(file_path);
    reject_globs(file_path, &file, violations);

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }

    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }

    for name in props_names {
        if !name.starts_with(&expected_prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with '{expected_prefix}'",
                file_path.display()
            ));
        }
    }
}

fn reject_globs(
    file_path: &Path,
    file: &syn::File,
    violations: &mut Vec<String>,
) {
    for item in &file.items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            }
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn file_stem_pascal_case(file_path: &Path) -> String {
    let stem = file_path
        .file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", file_path.display()))
        .to_string_lossy()
        .to_string();

    stem.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
