//! Convert a small to-do list document into a `ul`/`li` tree and print it as JSON.
//!
//! Run with `RUST_LOG=debug` to see which elements are dropped.

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use xml_to_tree::{AttributePassthrough, Attributes, Conversion, Converter, Registry};

const DOCUMENT: &str = r#"<List title="Chores"><Todo done="yes">Wash the dishes</Todo><Todo>Walk the dog</Todo><Note>Skipped</Note></List>"#;

/// Context shared with every converter call.
struct Theme {
    done_class: &'static str,
}

fn todo(attributes: &Attributes, theme: Option<&Theme>) -> xml_to_tree::ConverterResult {
    let done = attributes.get("done").is_some_and(|v| v == "yes");
    let mut conversion = Conversion::new("li").with_prop("done", done);
    if let (true, Some(theme)) = (done, theme) {
        conversion = conversion.with_prop("className", theme.done_class);
    }
    Ok(conversion)
}

fn main() -> ExitCode {
    // Initialize tracing with WARN level by default, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let registry = Registry::<Theme>::new()
        .with("List", AttributePassthrough::new("ul"))
        .with_fn("Todo", todo);

    let converter = match Converter::new(registry) {
        Ok(converter) => converter,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let theme = Theme {
        done_class: "strike",
    };
    match converter.convert(DOCUMENT, Some(&theme)) {
        Ok(Some(tree)) => match serde_json::to_string_pretty(&tree) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        },
        Ok(None) => {
            eprintln!("Nothing to convert");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
