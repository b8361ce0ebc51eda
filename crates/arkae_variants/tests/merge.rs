use arkae_variants::{cn, merge, merge_str, ClassList, MergeConfig};
use pretty_assertions::assert_eq;

#[test]
fn conflict_free_input_is_unchanged() {
    let input = "inline-flex items-center gap-2 rounded-lg font-medium hover:bg-gray-100";
    assert_eq!(merge_str(input), input);
}

#[test]
fn merge_is_idempotent() {
    let once = merge_str("px-2 py-1 bg-red-500 px-4 hover:bg-red-600 bg-blue-500 px-4");
    assert_eq!(merge_str(&once), once);
}

#[test]
fn later_same_bucket_class_wins() {
    assert_eq!(merge_str("bg-primary-600 bg-error-600"), "bg-error-600");
    assert_eq!(merge_str("text-sm text-lg"), "text-lg");
    assert_eq!(merge_str("text-sm text-white"), "text-sm text-white");
    assert_eq!(merge_str("shadow-sm shadow-xl"), "shadow-xl");
    assert_eq!(merge_str("z-modal z-tooltip"), "z-tooltip");
}

#[test]
fn non_conflicting_lists_concatenate() {
    assert_eq!(merge([vec!["a", "b"], vec!["c"]]), "a b c");
}

#[test]
fn broader_bucket_overrides_narrower() {
    assert_eq!(merge_str("pt-2 pl-4 p-6"), "p-6");
    assert_eq!(merge_str("rounded-t-lg rounded-none"), "rounded-none");
    assert_eq!(merge_str("border-t-2 border"), "border");
    assert_eq!(merge_str("w-4 h-4 size-8"), "size-8");
    assert_eq!(merge_str("leading-6 text-lg"), "text-lg");
    // narrower after broader refines it
    assert_eq!(merge_str("p-6 pt-2"), "p-6 pt-2");
}

#[test]
fn caller_override_beats_schema_classes() {
    let resolved = ClassList::from("bg-primary-600 text-white px-4 py-2 text-base");
    assert_eq!(
        cn!(resolved, Some("bg-black"), None::<&str>, "px-8"),
        "text-white py-2 text-base bg-black px-8"
    );
}

#[test]
fn arbitrary_values_and_modifiers() {
    assert_eq!(
        merge_str("left-[50%] top-[50%] translate-x-[-50%] -translate-x-1/2"),
        "left-[50%] top-[50%] -translate-x-1/2"
    );
    assert_eq!(
        merge_str("data-[state=open]:animate-in data-[state=closed]:animate-out"),
        "data-[state=open]:animate-in data-[state=closed]:animate-out"
    );
    assert_eq!(
        merge_str("[mask-type:alpha] [mask-type:luminance]"),
        "[mask-type:luminance]"
    );
}

#[test]
fn opacity_modifier_keeps_color_bucket() {
    assert_eq!(merge_str("bg-black/50 bg-white"), "bg-white");
    assert_eq!(merge_str("bg-black/50 backdrop-blur-sm"), "bg-black/50 backdrop-blur-sm");
}

#[test]
fn configured_merger_extends_defaults() {
    let merger = MergeConfig::from_toml_str(
        r#"
[[rule]]
prefix = "text"
bucket = "text-shadow"
value = { keyword = ["shadow-sm", "shadow-lg"] }
"#,
    )
    .unwrap()
    .build_merger()
    .unwrap();

    assert_eq!(
        merger.merge_str("text-shadow-sm text-lg text-shadow-lg"),
        "text-lg text-shadow-lg"
    );
    // the default merger does not know the utility
    assert_eq!(
        merge_str("text-shadow-sm text-shadow-lg"),
        "text-shadow-sm text-shadow-lg"
    );
}

#[test]
fn whitespace_is_normalized() {
    assert_eq!(merge_str("  px-2 \n\t py-1  "), "px-2 py-1");
    assert_eq!(merge_str(""), "");
    assert_eq!(cn!(), "");
}
