use fusion_markdown::{MarkdownProcessor, MarkdownStandard};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let processor = MarkdownProcessor::new(MarkdownStandard::CommonMark);
    let markdown = "# Fusion\n\n**Bold** and _italic_\n- [x] Lexer\n- [ ] Streaming\n| a | b |\n[Home](https://example.com)";
    let html = processor.convert_markdown_to_html(markdown);
    println!("{html}");
}
