//! Button Gallery
//!
//! Renders every button variant and size, a loading state and a dialog, and
//! prints the resulting part trees with their merged classes.
//!
//! Run with: RUST_LOG=arkae_variants=trace cargo run -p arkae_cn --example button_gallery

use arkae_cn::prelude::*;

fn main() -> arkae_cn::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    arkae_cn::validate_builtin_schemas()?;

    for variant in ButtonVariant::all() {
        for size in [ButtonSize::Sm, ButtonSize::Md, ButtonSize::Lg] {
            let button = cn::button(format!("{} {}", variant.id(), size.id()))
                .variant(*variant)
                .size(size)
                .render()?;
            println!("{button}");
        }
    }

    let saving = cn::button("Saving")
        .left_icon("save")
        .loading(true)
        .class("min-w-32")
        .render()?;
    println!("{saving}");

    let confirm = cn::dialog()
        .open(true)
        .size(DialogSize::Sm)
        .child(cn::dialog_title("Delete project?").render())
        .child(cn::dialog_description("This action cannot be undone.").render())
        .child(
            cn::button("Delete")
                .variant(ButtonVariant::Danger)
                .full_width(true)
                .render()?,
        )
        .render()?;

    let page = cn::theme_scope(ColorScheme::Dark).child(confirm).render()?;
    println!("{page}");
    Ok(())
}
