//! Banyan CLI
//!
//! Builds a demonstration page with the banyan tree builder and prints the
//! rendered HTML. Handy for eyeballing renderer output and as a worked
//! example of the builder API.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use banyan_common::Indent;
use banyan_css::{declarations, rulesets};
use banyan_dom::Element;
use banyan_html::{a, body, comment, h1, head, hr, html, input, li, meta, p, style, title, ul};
use clap::Parser;
use owo_colors::OwoColorize;

/// Render the banyan demonstration page.
#[derive(Debug, Parser)]
#[command(name = "banyan")]
struct Args {
    /// Write the output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print with two-space indentation.
    #[arg(long)]
    pretty: bool,

    /// Dump the element tree as JSON instead of rendering HTML.
    #[arg(long)]
    json: bool,
}

/// Build the demonstration document.
///
/// Exercises the whole surface: nested builders, ordered attributes, inline
/// styles, a stylesheet, void elements, bare attributes, and a comment.
fn demo_page() -> Element {
    let sheet = rulesets! {
        "body" => {
            "margin" => "4px",
            "background_color" => "white",
        },
        "p.note" => { "color" => "green" },
    };

    html()
        .attr("lang", "en")
        .child(
            head()
                .child(meta().attr("charset", "UTF-8"))
                .child(title().text("Banyan sanity check"))
                .child(style(&sheet)),
        )
        .child(
            body()
                .child(comment().text("rendered by the banyan demo"))
                .child(
                    h1().attr("style", declarations! { "color" => "green" })
                        .text("Sanity check PASS"),
                )
                .child(
                    p().attr("_class", "note")
                        .text("Built with ")
                        .child(a().attr("href", "https://example.com").text("banyan"))
                        .text("."),
                )
                .child(hr())
                .child(
                    ul().child(li().text("ordered attributes"))
                        .child(li().text("void elements"))
                        .child(li().text("inline styles")),
                )
                .child(input().attr("type", "text").bare("disabled")),
        )
        .build()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let page = demo_page();

    let rendered = if args.json {
        serde_json::to_string_pretty(&page).context("failed to serialize the page as JSON")?
    } else {
        let indent = if args.pretty { Indent::Level(0) } else { Indent::Flat };
        page.render(indent).context("failed to render the page")?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("{}", format!("Wrote {}", path.display()).green());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
