//! Rendering tests across the component set

use arkae_cn::prelude::*;
use arkae_variants::VariantError;
use pretty_assertions::assert_eq;

#[test]
fn test_button_defaults_resolve_like_schema() {
    let button = cn::button("Save");
    let resolved = button
        .schema()
        .resolve(&Default::default())
        .unwrap()
        .to_string();
    assert_eq!(button.class_name().unwrap(), arkae_variants::merge_str(&resolved));
}

#[test]
fn test_override_wins_across_components() {
    let button = cn::button("Go").class("rounded-none bg-black").render().unwrap();
    assert!(button.has_class("rounded-none"));
    assert!(!button.has_class("rounded-lg"));
    assert!(button.has_class("bg-black"));
    assert!(!button.has_class("bg-primary-600"));
    // hover background is a different conflict key
    assert!(button.has_class("hover:bg-primary-700"));

    let container = cn::switch().class("h-7 w-14").render().unwrap();
    let root = container.find("root").unwrap();
    assert!(root.has_class("h-7"));
    assert!(!root.has_class("h-6"));
    assert!(root.has_class("w-14"));
    assert!(!root.has_class("w-11"));
}

#[test]
fn test_danger_large_button() {
    let class = cn::button("Delete")
        .variant(ButtonVariant::Danger)
        .size(ButtonSize::Lg)
        .full_width(true)
        .class_name()
        .unwrap();
    assert!(class.ends_with(
        "bg-error-600 text-white hover:bg-error-700 focus-visible:ring-error-500 \
         data-[disabled]:bg-error-300 px-6 py-3 text-lg w-full"
    ));
}

#[test]
fn test_every_button_variant_renders() {
    for variant in ButtonVariant::all() {
        let root = cn::button("x").variant(*variant).render().unwrap();
        assert!(root.has_class("inline-flex"), "{variant:?}");
        assert_eq!(root.get_attr("type"), Some("button"));
    }
}

#[test]
fn test_ghost_button_drops_primary_background() {
    let class = cn::button("x")
        .variant(ButtonVariant::Ghost)
        .class_name()
        .unwrap();
    assert!(class.contains("bg-transparent text-gray-700"));
    assert!(!class.contains("bg-primary-600"));
}

#[test]
fn test_input_sizes() {
    let sm = cn::input().size(InputSize::Sm).render().unwrap();
    assert!(sm.has_class("px-3"));
    assert!(sm.has_class("text-sm"));

    let lg = cn::input().size(InputSize::Lg).render().unwrap();
    assert!(lg.has_class("py-3"));
    assert!(lg.has_class("text-lg"));
    assert!(!lg.has_class("text-base"));
}

#[test]
fn test_dialog_composition() {
    let root = cn::dialog()
        .open(true)
        .size(DialogSize::Xl)
        .attr("aria-labelledby", "dialog-title")
        .child(cn::dialog_title("Invite").attr("id", "dialog-title").render())
        .render()
        .unwrap();
    let popup = root.find("popup").unwrap();
    assert!(popup.has_class("max-w-xl"));
    assert_eq!(popup.get_attr("aria-labelledby"), Some("dialog-title"));
    assert_eq!(
        root.find("title").unwrap().get_attr("id"),
        Some("dialog-title")
    );
}

#[test]
fn test_tabs_and_menu_together() {
    let page = cn::tabs()
        .default_value("files")
        .list(
            cn::tabs_list()
                .tab(cn::tab("files", "Files"))
                .tab(cn::tab("shared", "Shared")),
        )
        .panel(
            cn::tab_panel("files").child(
                cn::menu("Sort")
                    .open(true)
                    .item(cn::menu_item("Name"))
                    .item(cn::menu_item("Date"))
                    .render(),
            ),
        )
        .panel(cn::tab_panel("shared"))
        .render();

    let panels = page.find_all("panel");
    assert_eq!(panels[0].get_attr("hidden"), None);
    assert_eq!(panels[1].get_attr("hidden"), Some(""));
    assert_eq!(panels[0].find_all("item").len(), 2);
}

#[test]
fn test_tooltip_over_button() {
    let trigger = cn::button("Copy")
        .variant(ButtonVariant::Ghost)
        .render()
        .unwrap();
    let root = cn::tooltip("Copy link").trigger(trigger).open(true).render();
    assert_eq!(root.get_attr("delay"), Some("400"));
    assert!(root.find("trigger").unwrap().find("label").is_some());
    assert!(root.find("arrow").unwrap().has_class("fill-gray-900"));
}

#[test]
fn test_theme_scope_wraps_content() {
    let root = cn::theme_scope(ColorScheme::Dark)
        .child(cn::checkbox().checked(true).render().unwrap())
        .render()
        .unwrap();
    assert!(root.has_class("dark"));
    assert!(root.find("indicator").is_some());
}

#[test]
fn test_invalid_selection_surfaces_as_cn_error() {
    let schema = arkae_cn::components::button::schema();
    let error = schema
        .resolve(&arkae_variants::Selection::new().with("size", "xxl"))
        .map_err(CnError::from)
        .unwrap_err();
    assert_eq!(
        error,
        CnError::Variant(VariantError::UnknownOption {
            schema: "button".into(),
            group: "size".into(),
            option: "xxl".into(),
        })
    );
    assert_eq!(
        error.to_string(),
        VariantError::UnknownOption {
            schema: "button".into(),
            group: "size".into(),
            option: "xxl".into(),
        }
        .to_string()
    );
}

#[test]
fn test_components_render_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let variant = ButtonVariant::all()[i];
                cn::button("t").variant(variant).class_name().unwrap()
            })
        })
        .collect();
    let classes: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(classes.len(), 4);
    assert!(classes[0].contains("bg-primary-600"));
    assert!(classes[3].contains("bg-transparent text-primary-600"));
}
