//! Integration tests for swiftweb.
//!
//! These tests exercise the public API from outside the crate, verifying that
//! the builder, environment resolution, and renderer work together correctly.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use swiftweb::env::EnvKey;
use swiftweb::testing::{compile_sequential, outline};
use swiftweb::view::DatePickerComponent;
use swiftweb::*;

// ---------------------------------------------------------------------------
// Tree construction
// ---------------------------------------------------------------------------

#[test]
fn test_three_level_nesting_shape() {
    let compiled = compile_sequential(|ui| {
        ui.vstack(|ui| {
            ui.text("a");
            ui.hstack(|ui| {
                ui.text("b");
                ui.list(|ui| {
                    ui.text("c");
                });
                ui.text("d");
            });
            ui.text("e");
        });
    })
    .unwrap();
    assert_eq!(
        outline(&compiled.tree),
        "VStack\n\
         \x20 Text \"a\"\n\
         \x20 HStack\n\
         \x20   Text \"b\"\n\
         \x20   List\n\
         \x20     Text \"c\"\n\
         \x20   Text \"d\"\n\
         \x20 Text \"e\""
    );
}

#[test]
fn test_every_node_has_exactly_one_parent_or_is_root() {
    let tree = Compiler::default()
        .build(|ui| {
            ui.form(|ui| {
                ui.section_with_header("Account", |ui| {
                    ui.text_field("Username", "username");
                    ui.secure_field("Password", "password");
                });
                ui.section(|ui| {
                    ui.toggle("Remember me", "remember");
                });
            });
            ui.text("footer");
        })
        .unwrap();

    let mut seen = HashSet::new();
    for id in tree.walk_document() {
        assert!(seen.insert(id), "node visited twice");
        let is_root = tree.roots().contains(&id);
        assert_eq!(tree.parent(id).is_none(), is_root);
    }
    assert_eq!(seen.len(), tree.len());
    assert_eq!(tree.roots().len(), 2);
}

#[test]
fn test_identifiers_unique_over_many_nodes() {
    let tree = Compiler::new(CompileConfig::new().with_seed(42))
        .build(|ui| {
            ui.list(|ui| {
                for i in 0..5_000 {
                    ui.text(i.to_string());
                }
            });
        })
        .unwrap();
    let identifiers: HashSet<&str> = tree
        .walk_document()
        .into_iter()
        .map(|id| tree.get(id).unwrap().identifier.as_str())
        .collect();
    assert_eq!(identifiers.len(), 5_001);
    assert!(identifiers.iter().all(|ident| ident.starts_with('a')));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let compiler = Compiler::new(CompileConfig::new().with_seed(7));
    let program = |ui: &mut ViewBuilder| {
        ui.vstack(|ui| {
            ui.button("one", "first");
            ui.button("two", "second");
        });
    };
    let first = compiler.compile(program).unwrap();
    let second = compiler.compile(program).unwrap();
    assert_eq!(first.output, second.output);
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

#[test]
fn test_last_background_wins() {
    let compiled = compile_sequential(|ui| {
        ui.vstack(|ui| {
            ui.text("x");
        })
        .background("blue")
        .background("green");
    })
    .unwrap();
    assert!(compiled.markup().starts_with("<div background=\"green\" class=\"vstack\">"));
    assert!(!compiled.markup().contains("blue"));
}

#[test]
fn test_modifier_after_render_shows_on_rerender() {
    let compiler = Compiler::new(CompileConfig::new().sequential_ids());
    let mut tree = compiler
        .build(|ui| {
            ui.text("hello").padding(Some(8));
        })
        .unwrap();
    let first = compiler.render(&tree);
    assert_eq!(first, compiler.render(&tree));

    let root = tree.root().unwrap();
    tree.node_mut(root).unwrap().padding(None).foreground_style("red");
    assert_eq!(
        compiler.render(&tree).markup,
        "<span padding=\"16\" foregroundStyle=\"red\" class=\"text\">hello</span>\n"
    );
}

// ---------------------------------------------------------------------------
// Environment propagation
// ---------------------------------------------------------------------------

#[test]
fn test_button_inherits_nearest_declaration() {
    let compiled = compile_sequential(|ui| {
        ui.vstack(|ui| {
            ui.hstack(|ui| {
                ui.button("inherits", "a");
            });
        })
        .button_style("plain");
    })
    .unwrap();
    assert!(compiled.markup().contains("class=\"button plain\""));

    let button = compiled.tree.query_by_type("Button")[0];
    assert_eq!(
        compiled.tree.resolve_environment(button, EnvKey::ButtonStyle),
        "plain"
    );
}

#[test]
fn test_explicit_declaration_beats_inherited() {
    let compiled = compile_sequential(|ui| {
        ui.vstack(|ui| {
            ui.hstack(|ui| {
                ui.button("own", "a").button_style("custom");
            })
            .button_style("inner");
        })
        .button_style("outer");
    })
    .unwrap();
    assert!(compiled.markup().contains("class=\"button custom\""));
    assert!(!compiled.markup().contains("inner"));
}

#[test]
fn test_undeclared_style_falls_back_to_default() {
    let compiled = compile_sequential(|ui| {
        ui.form(|ui| {
            ui.button("b", "b");
            ui.date_picker("When", "when", &[DatePickerComponent::HourAndMinute]);
        });
    })
    .unwrap();
    assert!(compiled.markup().contains("class=\"button DefaultButtonStyle\""));
    assert!(compiled
        .markup()
        .contains("class=\"date-picker DefaultDatePickerStyle\" type=\"datetime\""));

    let picker = compiled.tree.query_by_type("DatePicker")[0];
    assert_eq!(
        compiled
            .tree
            .resolve_environment(picker, EnvKey::DatePickerStyle),
        "default"
    );
}

#[test]
fn test_call_shaped_style_token_is_stripped() {
    let compiled = compile_sequential(|ui| {
        ui.hstack(|ui| {
            ui.button("Sign in", "signIn");
        })
        .button_style("PlainButtonStyle()");
    })
    .unwrap();
    assert!(compiled.markup().contains("class=\"button PlainButtonStyle\""));
    assert!(!compiled.markup().contains("()"));
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

#[test]
fn test_script_only_for_controls_with_actions() {
    let compiled = compile_sequential(|ui| {
        ui.vstack(|ui| {
            ui.text("label");
            ui.button_without_action("inert");
            ui.toggle("flag", "flag");
            ui.button("live", "go");
        });
    })
    .unwrap();
    assert_eq!(compiled.output.handlers.len(), 1);
    assert_eq!(compiled.script(), "a4OnClick: () => {\n  (go)();\n},\n");
}

#[test]
fn test_handler_identifiers_match_markup_ids() {
    let compiled = Compiler::default()
        .compile(|ui| {
            ui.vstack(|ui| {
                ui.button("one", "first");
                ui.button("two", "second");
            });
        })
        .unwrap();
    for handler in &compiled.output.handlers {
        let id_attr = format!("id=\"{}\"", handler.identifier);
        assert!(compiled.markup().contains(&id_attr));
        assert!(compiled.script().contains(&handler.handler_name()));
    }
}

// ---------------------------------------------------------------------------
// Full documents
// ---------------------------------------------------------------------------

#[test]
fn test_styling_button_document() {
    let compiled = compile_sequential(|ui| {
        ui.hstack(|ui| {
            ui.button("登录", "signIn");
            ui.button("注册", "register");
        })
        .button_style("PlainButtonStyle()");
    })
    .unwrap();

    insta::assert_snapshot!(compiled.markup().trim_end(), @r#"
    <div class="hstack">
      <button class="button PlainButtonStyle" id="a1">登录</button>
      <button class="button PlainButtonStyle" id="a2">注册</button>
    </div>
    "#);
    assert_eq!(
        compiled.script(),
        "a1OnClick: () => {\n\
         \x20 (signIn)();\n\
         },\n\
         a2OnClick: () => {\n\
         \x20 (register)();\n\
         },\n"
    );
}

#[test]
fn test_basic_button_document() {
    let compiled = compile_sequential(|ui| {
        ui.vstack(|ui| {
            ui.button_with_label("signIn", |ui| {
                ui.text("登录");
            });
            ui.button("登录", "signIn");
        });
    })
    .unwrap();
    assert_eq!(
        compiled.markup(),
        "<div class=\"vstack\">\n\
         \x20 <button class=\"button DefaultButtonStyle\" id=\"a1\">\n\
         \x20   <span class=\"text\">登录</span>\n\
         \x20 </button>\n\
         \x20 <button class=\"button DefaultButtonStyle\" id=\"a3\">登录</button>\n\
         </div>\n"
    );
    let names: Vec<String> = compiled
        .output
        .handlers
        .iter()
        .map(|handler| handler.handler_name())
        .collect();
    assert_eq!(names, vec!["a1OnClick", "a3OnClick"]);
}

#[test]
fn test_custom_container_keeps_captured_controls() {
    let compiled = compile_sequential(|ui| {
        ui.vstack(|ui| {
            let custom = ui.leaf(ViewKind::Form).id();
            let token = ui.begin_capture();
            ui.text("inside custom");
            ui.button("Go", "go");
            ui.end_capture(token, custom).unwrap();
        });
    })
    .unwrap();
    assert_eq!(compiled.tree.walk_document().len(), compiled.tree.len());
    assert_eq!(
        outline(&compiled.tree),
        "VStack\n  Form\n    Text \"inside custom\"\n    Button \"Go\""
    );
    assert_eq!(compiled.output.handlers.len(), 1);
    assert_eq!(compiled.script(), "a3OnClick: () => {\n  (go)();\n},\n");
}

// ---------------------------------------------------------------------------
// Structural errors
// ---------------------------------------------------------------------------

#[test]
fn test_unbalanced_capture_is_an_error() {
    let err = Compiler::default()
        .build(|ui| {
            let owner = ui.leaf(ViewKind::Form).id();
            let outer = ui.begin_capture();
            let _inner = ui.begin_capture();
            assert!(ui.end_capture(outer, owner).is_err());
        })
        .unwrap_err();
    assert_eq!(
        err,
        BuildError::Capture(CaptureError::Unbalanced {
            expected: 1,
            found: 2
        })
    );
}

#[test]
fn test_unclosed_capture_is_an_error() {
    let err = Compiler::default()
        .build(|ui| {
            let _open = ui.begin_capture();
            ui.text("stranded");
        })
        .unwrap_err();
    assert_eq!(err, BuildError::Capture(CaptureError::Unclosed { depth: 1 }));
}

#[test]
fn test_identifier_space_exhaustion() {
    let compiler = Compiler::new(CompileConfig::new().with_seed(3).with_id_space(3));
    assert!(compiler
        .build(|ui| {
            ui.vstack(|ui| {
                ui.text("1");
                ui.text("2");
            });
        })
        .is_ok());

    let err = compiler
        .build(|ui| {
            ui.vstack(|ui| {
                ui.text("1");
                ui.text("2");
                ui.text("3");
            });
        })
        .unwrap_err();
    assert_eq!(err, BuildError::Identifier(IdError::Exhausted { space: 3 }));
}
